//! Errors raised when constructing, composing or evaluating hybrid systems.
use crate::hybsys::ModeId;

use thiserror::Error;

/// Result type alias for hybrid system operations.
pub type Result<T> = core::result::Result<T, HybridError>;

/// Which user-facing function received (or produced) a vector of the wrong length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Site {
    VectorField,
    Guard,
    ResetInput,
    ResetOutput,
    ManifoldInput,
    ManifoldOutput,
}

impl core::fmt::Display for Site {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            Site::VectorField => "vector field",
            Site::Guard => "guard",
            Site::ResetInput => "reset input",
            Site::ResetOutput => "reset output",
            Site::ManifoldInput => "manifold map input",
            Site::ManifoldOutput => "manifold map output",
        };
        f.write_str(s)
    }
}

/// The two per-mode tables of a [`crate::semiconjugacy::Semiconjugacy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapKind {
    ModeMap,
    ManifoldMap,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HybridError {
    /// The reset table is not square with side equal to the mode count.
    /// `row` is `None` when the number of rows is wrong.
    #[error("reset table shape mismatch at row {row:?}: expected {expected} entries, found {found}")]
    ShapeMismatch {
        row: Option<usize>,
        expected: usize,
        found: usize,
    },

    /// A vector of the wrong length reached (or left) a function declared over `mode`.
    /// `mode` is `None` for a [`crate::mode::Mode`] evaluated outside any system.
    #[error("{site} of mode {mode:?} expects length {expected}, got {found}")]
    ArityMismatch {
        mode: Option<ModeId>,
        site: Site,
        expected: usize,
        found: usize,
    },

    /// A composition operator was given a system without modes.
    #[error("{operation} requires a system with at least one mode")]
    EmptySystem { operation: &'static str },

    /// A semiconjugacy table does not have one entry per domain mode.
    #[error("{map:?} has {found} entries, domain has {expected} modes")]
    IncompleteSemiconjugacy {
        map: MapKind,
        expected: usize,
        found: usize,
    },

    /// A mode identifier outside `0..modes`.
    #[error("mode {mode:?} out of range for a system with {modes} modes")]
    ModeOutOfRange { mode: ModeId, modes: usize },

    /// A reset table cell was written more than once while composing.
    #[error("reset table cell {from:?} -> {to:?} written twice")]
    CellCollision { from: ModeId, to: ModeId },

    /// Codomain of the first semiconjugacy is not the domain of the second.
    #[error("semiconjugacies are not composable")]
    NotComposable,

    /// The asymptotic phase of a [`crate::tapair::TAPair`] does not map temp to anchor.
    #[error("asymptotic phase must be a semiconjugacy from temp to anchor")]
    PhaseMismatch,
}

impl HybridError {
    /// Attach a mode identifier to an [`HybridError::ArityMismatch`].
    pub(crate) fn at_mode(self, id: ModeId) -> Self {
        match self {
            HybridError::ArityMismatch {
                site,
                expected,
                found,
                ..
            } => HybridError::ArityMismatch {
                mode: Some(id),
                site,
                expected,
                found,
            },
            e => e,
        }
    }
}
