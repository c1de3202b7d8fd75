use super::table::*;
use crate::error::*;
use crate::mode::Mode;
use crate::reset::Reset;
use crate::shape::SystemShape;
use crate::state::*;

/// A hybrid automaton.
///
/// # Invariants
///
/// The reset table is square with side `modes.len()`, and the reset at `(i, j)` is defined
/// over vectors of length `modes[i].dim()`.
/// [`HybSys::new`] checks the first, and that every product in row `i` splits within
/// `modes[i].dim()`. Lengths seen by user functions are checked whenever a reset is
/// evaluated through [`HybSys::guard`] or [`HybSys::jump`].
#[derive(Clone, Debug, PartialEq)]
pub struct HybSys<T> {
    pub(crate) modes: Vec<Mode<T>>,
    pub(crate) resets: ResetTable<T>,
}

impl<T: Scalar> HybSys<T> {
    /// Construct a system from its modes and a table of resets given row by row.
    ///
    /// ```rust
    /// # use hybrid_systems::prelude::*;
    /// let m = Mode::new("drift", 1, |_: &[f64]| vec![1.0]);
    /// let r = Reset::new("wrap", |x: &[f64]| x[0] > 1.0, |_: &[f64]| vec![0.0]);
    /// let h = HybSys::new(vec![m], vec![vec![r]]).unwrap();
    /// assert_eq!(h.len(), 1);
    ///
    /// // a 1-mode system needs a 1×1 table
    /// assert!(HybSys::new(vec![Mode::stationary(1)], vec![]).is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// [`HybridError::ShapeMismatch`] if the table is not square with side `modes.len()`,
    /// and [`HybridError::ArityMismatch`] if a reset out of mode `i` splits its input
    /// beyond `modes[i].dim()`.
    pub fn new(modes: Vec<Mode<T>>, resets: Vec<Vec<Reset<T>>>) -> Result<Self> {
        let resets = ResetTable::from_rows(resets, modes.len())?;
        Self::from_table(modes, resets)
    }

    pub fn from_table(modes: Vec<Mode<T>>, resets: ResetTable<T>) -> Result<Self> {
        if resets.size() != modes.len() {
            return Err(HybridError::ShapeMismatch {
                row: None,
                expected: modes.len(),
                found: resets.size(),
            });
        }
        for (i, (mode, row)) in modes.iter().zip(resets.rows()).enumerate() {
            for reset in row {
                reset
                    .check_arity(mode.dim())
                    .map_err(|e| e.at_mode(ModeId(i)))?;
            }
        }
        Ok(HybSys { modes, resets })
    }

    /// A system with no transitions between its modes.
    pub fn without_resets(modes: Vec<Mode<T>>) -> Self {
        let resets = ResetTable::never(modes.len());
        HybSys { modes, resets }
    }

    /// Number of modes
    pub fn len(&self) -> usize {
        self.modes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }

    pub fn modes(&self) -> &[Mode<T>] {
        &self.modes
    }

    pub fn mode(&self, id: ModeId) -> Option<&Mode<T>> {
        self.modes.get(id.index())
    }

    pub fn resets(&self) -> &ResetTable<T> {
        &self.resets
    }

    pub fn reset(&self, from: ModeId, to: ModeId) -> Option<&Reset<T>> {
        self.resets.get(from, to)
    }

    pub fn mode_ids(&self) -> impl Iterator<Item = ModeId> {
        (0..self.modes.len()).map(ModeId)
    }

    fn checked_mode(&self, id: ModeId) -> Result<&Mode<T>> {
        self.mode(id).ok_or(HybridError::ModeOutOfRange {
            mode: id,
            modes: self.len(),
        })
    }

    /// Evaluate the vector field of mode `id` at `x`.
    pub fn flow(&self, id: ModeId, x: &[T]) -> Result<StateVector<T>> {
        self.checked_mode(id)?.flow(x).map_err(|e| e.at_mode(id))
    }

    /// Does the guard of the reset `from → to` hold at `x`?
    pub fn guard(&self, from: ModeId, to: ModeId, x: &[T]) -> Result<bool> {
        let source = self.checked_mode(from)?;
        self.checked_mode(to)?;
        source
            .check(Site::Guard, x.len())
            .map_err(|e| e.at_mode(from))?;
        Ok(self.resets.cell(from.index(), to.index()).holds(x))
    }

    /// Take the transition `from → to` at `x` if its guard holds, returning the state in
    /// mode `to`.
    pub fn jump(&self, from: ModeId, to: ModeId, x: &[T]) -> Result<Option<StateVector<T>>> {
        let source = self.checked_mode(from)?;
        let target = self.checked_mode(to)?;
        source
            .check(Site::ResetInput, x.len())
            .map_err(|e| e.at_mode(from))?;

        let Some(y) = self.resets.cell(from.index(), to.index()).fire(x) else {
            return Ok(None);
        };
        target
            .check(Site::ResetOutput, y.len())
            .map_err(|e| e.at_mode(to))?;
        Ok(Some(StateVector(y)))
    }

    /// Every mode reachable from `from` by a single transition enabled at `x`.
    pub fn enabled(&self, from: ModeId, x: &[T]) -> Result<Vec<ModeId>> {
        self.checked_mode(from)?
            .check(Site::Guard, x.len())
            .map_err(|e| e.at_mode(from))?;
        Ok(self
            .mode_ids()
            .filter(|to| self.resets.cell(from.index(), to.index()).holds(x))
            .collect())
    }

    pub fn shape(&self) -> SystemShape {
        SystemShape {
            modes: self.modes.iter().map(Mode::shape).collect(),
            resets: self.resets.shape(),
        }
    }
}
