//! Plain-data descriptions of modes, resets and systems.
//!
//! User functions cannot be serialized, so a shape names each one by its [leaf
//! name](crate::function::Leaf::name).
//! Shapes are what composition tests compare against, and (with the `serde` feature)
//! what gets written out for debugging.
use crate::reset::Cases;

/// One block of a mode's vector field; `field` is `None` for a stationary block.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockShape {
    pub offset: usize,
    pub dim: usize,
    pub field: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModeShape {
    pub dim: usize,
    pub blocks: Vec<BlockShape>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResetShape {
    Never,
    Leaf {
        guard: String,
        map: String,
    },
    Product {
        left: Box<ResetShape>,
        right: Box<ResetShape>,
        split: usize,
        cases: Cases,
    },
    Either(Box<ResetShape>, Box<ResetShape>),
}

impl ResetShape {
    /// The shape of a reset built by [`crate::reset::Reset::new`].
    pub fn leaf(name: &str) -> Self {
        ResetShape::Leaf {
            guard: name.to_string(),
            map: name.to_string(),
        }
    }
}

/// The shape of a [`crate::hybsys::HybSys`]: `resets[i][j]` describes the reset from mode
/// `i` to mode `j`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SystemShape {
    pub modes: Vec<ModeShape>,
    pub resets: Vec<Vec<ResetShape>>,
}
