use crate::error::*;
use crate::reset::Reset;
use crate::shape::ResetShape;
use crate::state::Scalar;

/// The position of a mode in a [`crate::hybsys::HybSys`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModeId(pub usize);

impl ModeId {
    /// The identifier of the product mode `(left, right)` when the right factor has `width`
    /// modes. Product modes are numbered in row-major order.
    ///
    /// ```rust
    /// # use hybrid_systems::hybsys::ModeId;
    /// let id = ModeId::pair(ModeId(1), ModeId(2), 3);
    /// assert_eq!(id, ModeId(5));
    /// assert_eq!(id.split(3), (ModeId(1), ModeId(2)));
    /// ```
    pub fn pair(left: ModeId, right: ModeId, width: usize) -> ModeId {
        ModeId(left.0 * width + right.0)
    }

    /// Inverse of [`ModeId::pair`].
    ///
    /// # Panics
    ///
    /// If `width` is zero.
    pub fn split(self, width: usize) -> (ModeId, ModeId) {
        (ModeId(self.0 / width), ModeId(self.0 % width))
    }

    /// Position in the mode list.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A square table of resets stored in row-major order.
/// The entry at `(i, j)` is the reset from mode `i` to mode `j`.
#[derive(Clone, Debug, PartialEq)]
pub struct ResetTable<T> {
    size: usize,
    cells: Vec<Reset<T>>,
}

impl<T: Scalar> ResetTable<T> {
    /// A `size × size` table with no transitions.
    pub fn never(size: usize) -> Self {
        ResetTable {
            size,
            cells: vec![Reset::Never; size * size],
        }
    }

    /// Build a table from its rows, rejecting anything that is not `size × size`.
    pub fn from_rows(rows: Vec<Vec<Reset<T>>>, size: usize) -> Result<Self> {
        if rows.len() != size {
            return Err(HybridError::ShapeMismatch {
                row: None,
                expected: size,
                found: rows.len(),
            });
        }

        let mut cells = Vec::with_capacity(size * size);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(HybridError::ShapeMismatch {
                    row: Some(i),
                    expected: size,
                    found: row.len(),
                });
            }
            cells.extend(row);
        }
        Ok(ResetTable { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, from: ModeId, to: ModeId) -> Option<&Reset<T>> {
        if from.index() >= self.size || to.index() >= self.size {
            return None;
        }
        self.cells.get(from.index() * self.size + to.index())
    }

    /// All resets out of mode `from`, indexed by target.
    pub fn row(&self, from: ModeId) -> Option<&[Reset<T>]> {
        if from.0 >= self.size {
            return None;
        }
        let start = from.0 * self.size;
        Some(&self.cells[start..start + self.size])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Reset<T>]> {
        // chunks(0) panics, and an empty table has no rows anyway
        self.cells.chunks(self.size.max(1))
    }

    // Caller guarantees both indices are in range.
    pub(crate) fn cell(&self, from: usize, to: usize) -> &Reset<T> {
        &self.cells[from * self.size + to]
    }

    pub fn shape(&self) -> Vec<Vec<ResetShape>> {
        self.rows()
            .map(|row| row.iter().map(Reset::shape).collect())
            .collect()
    }
}

/// Assembles a [`ResetTable`] one cell at a time, refusing to overwrite a cell.
/// Cells never written become [`Reset::Never`].
pub struct TableBuilder<T> {
    size: usize,
    cells: Vec<Option<Reset<T>>>,
}

impl<T: Scalar> TableBuilder<T> {
    pub fn new(size: usize) -> Self {
        TableBuilder {
            size,
            cells: vec![None; size * size],
        }
    }

    pub fn set(&mut self, from: ModeId, to: ModeId, reset: Reset<T>) -> Result<()> {
        for id in [from, to] {
            if id.0 >= self.size {
                return Err(HybridError::ModeOutOfRange {
                    mode: id,
                    modes: self.size,
                });
            }
        }

        let cell = &mut self.cells[from.0 * self.size + to.0];
        if cell.is_some() {
            return Err(HybridError::CellCollision { from, to });
        }
        *cell = Some(reset);
        Ok(())
    }

    pub fn finish(self) -> ResetTable<T> {
        let written = self.cells.iter().filter(|c| c.is_some()).count();
        tracing::trace!(size = self.size, written, "reset table assembled");

        ResetTable {
            size: self.size,
            cells: self
                .cells
                .into_iter()
                .map(Option::unwrap_or_default)
                .collect(),
        }
    }
}
