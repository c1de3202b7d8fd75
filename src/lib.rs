//! # Hybrid Systems
//!
//! A [HybSys](crate::hybsys::HybSys) is a hybrid automaton: a finite list of
//! [modes](crate::mode::Mode), each carrying a continuous vector field, and a complete table of
//! [resets](crate::reset::Reset), each a guarded discrete jump between two modes.
//! For example, a two-mode hopper alternating between stance and flight:
//!
//! ```text
//!            touchdown: y ≤ 0
//!        ┌─────────────────────────┐
//!        │                         ▼
//!   ┌─────────┐               ┌─────────┐
//!   │ flight  │               │ stance  │
//!   │ ẋ = f(x)│               │ ẋ = g(x)│
//!   └─────────┘               └─────────┘
//!        ▲                         │
//!        └─────────────────────────┘
//!            liftoff: y ≥ 1
//! ```
//!
//! Small systems are combined into larger ones algebraically:
//!
//! - [`HybSys::parallel`](crate::hybsys::HybSys::parallel) (`&h | &k`) runs two systems side
//!   by side, pairing their modes and case-splitting their guards.
//! - [`HybSys::sequential`](crate::hybsys::HybSys::sequential) (`&h >> &k`) splices the exit
//!   mode of one system onto the entry mode of another.
//! - [`HybSys::loop_closure`](crate::hybsys::HybSys::loop_closure) closes an open chain into a
//!   cycle.
//!
//! Two systems are related by a [Semiconjugacy](crate::semiconjugacy::Semiconjugacy), and an
//! idealised anchor with an implementable approximation is packaged as a
//! [TAPair](crate::tapair::TAPair).
//!
//! The crate only builds and inspects systems; integrating vector fields is left to a
//! simulation driver, which can use the checked evaluators
//! [`HybSys::flow`](crate::hybsys::HybSys::flow) and
//! [`HybSys::jump`](crate::hybsys::HybSys::jump).
//!
//! ```rust
//! use hybrid_systems::prelude::*;
//!
//! // A 1-dimensional clock which wraps back to 0 after reaching 1
//! fn clock(name: &str) -> HybSys {
//!     let tick = Mode::new(name, 1, |_: &[f64]| vec![1.0]);
//!     let wrap = Reset::new(name, |x: &[f64]| x[0] >= 1.0, |_: &[f64]| vec![0.0]);
//!     HybSys::new(vec![tick], vec![vec![wrap]]).unwrap()
//! }
//!
//! let two_clocks = (&clock("a") | &clock("b")).unwrap();
//! assert_eq!(two_clocks.len(), 1);
//! assert_eq!(two_clocks.mode(ModeId(0)).unwrap().dim(), 2);
//!
//! // Only the first clock wraps
//! let y = two_clocks.jump(ModeId(0), ModeId(0), &[1.0, 0.5]).unwrap();
//! assert_eq!(y, Some(StateVector(vec![0.0, 0.5])));
//! ```
//!
//! # Features
//!
//! - `serde`: derive `Serialize` and `Deserialize` for the plain-data [shapes](crate::shape)
//!   of systems.

pub mod category;
pub mod error;
pub mod function;
pub mod shape;
pub mod state;

pub mod mode;
pub mod reset;

pub mod hybsys;

pub mod semiconjugacy;
pub mod tapair;

pub mod prelude {
    //! Type aliases for hybrid systems over [`f64`].
    pub use crate::category::*;
    pub use crate::error::HybridError;
    pub use crate::hybsys::ModeId;
    pub use crate::state::StateVector;

    pub type Mode = crate::mode::Mode<f64>;
    pub type Reset = crate::reset::Reset<f64>;
    pub type HybSys = crate::hybsys::HybSys<f64>;
    pub type Semiconjugacy = crate::semiconjugacy::Semiconjugacy<f64>;
    pub type TAPair = crate::tapair::TAPair<f64>;
    pub type GuardLeaf = crate::function::GuardLeaf<f64>;
    pub type MapLeaf = crate::function::MapLeaf<f64>;
}
