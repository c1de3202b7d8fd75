//! Hybrid systems: a list of [`crate::mode::Mode`]s and a complete square table of
//! [`crate::reset::Reset`]s between them.
//!
//! Systems are combined with [`HybSys::parallel`], [`HybSys::sequential`] and
//! [`HybSys::loop_closure`], defined in [`arrow`].
pub mod arrow;
mod object;
mod table;

pub use object::*;
pub use table::*;
