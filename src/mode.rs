//! Modes: discrete locations carrying continuous dynamics.
use crate::error::*;
use crate::function::*;
use crate::shape::{BlockShape, ModeShape};
use crate::state::*;

/// The right-hand side of the flow on one block of coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum Field<T> {
    /// `ẋ = 0`
    Zero,
    Leaf(MapLeaf<T>),
}

/// A contiguous block of coordinates `offset..offset + dim` evolving under `field`.
#[derive(Clone, Debug, PartialEq)]
pub struct Block<T> {
    pub offset: usize,
    pub dim: usize,
    pub field: Field<T>,
}

/// A mode with a `dim`-dimensional continuous state.
///
/// The vector field is stored as a flat list of non-interacting [`Block`]s rather than as
/// nested closures, so a mode built by repeated [`Mode::parallel`] evaluates each user field
/// exactly once, on a borrowed slice of the input.
///
/// # Invariants
///
/// Blocks are sorted by offset, contiguous, and their dimensions sum to `dim`.
#[derive(Clone, Debug, PartialEq)]
pub struct Mode<T> {
    dim: usize,
    blocks: Vec<Block<T>>,
}

impl<T: Scalar> Mode<T> {
    /// A mode whose vector field is the user function `field`.
    ///
    /// ```rust
    /// # use hybrid_systems::mode::Mode;
    /// let m = Mode::<f64>::new("falling", 2, |x: &[f64]| vec![x[1], -9.81]);
    /// assert_eq!(m.flow(&[0.0, 1.0]).unwrap().0, vec![1.0, -9.81]);
    /// ```
    pub fn new(name: impl Into<String>, dim: usize, field: impl Map<T> + 'static) -> Self {
        Self::from_leaf(dim, MapLeaf::map(name, field))
    }

    pub fn from_leaf(dim: usize, field: MapLeaf<T>) -> Self {
        Mode {
            dim,
            blocks: vec![Block {
                offset: 0,
                dim,
                field: Field::Leaf(field),
            }],
        }
    }

    /// A mode whose state does not evolve.
    pub fn stationary(dim: usize) -> Self {
        let blocks = if dim == 0 {
            vec![]
        } else {
            vec![Block {
                offset: 0,
                dim,
                field: Field::Zero,
            }]
        };
        Mode { dim, blocks }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn blocks(&self) -> &[Block<T>] {
        &self.blocks
    }

    /// Run `m` and `n` side by side with no coupling.
    /// The first `m.dim()` coordinates belong to `m`, the rest to `n`.
    pub fn parallel(m: &Self, n: &Self) -> Self {
        let offset = m.dim;
        let blocks = m
            .blocks
            .iter()
            .cloned()
            .chain(n.blocks.iter().map(|b| Block {
                offset: b.offset + offset,
                ..b.clone()
            }))
            .collect();

        Mode {
            dim: m.dim + n.dim,
            blocks,
        }
    }

    /// Evaluate the vector field without checking dimensions.
    ///
    /// # Panics
    ///
    /// If `x` is shorter than [`Mode::dim`].
    pub fn vector_field(&self, x: &[T]) -> Vec<T> {
        let mut result = Vec::with_capacity(self.dim);
        for b in &self.blocks {
            match &b.field {
                Field::Zero => result.extend(core::iter::repeat(T::zero()).take(b.dim)),
                Field::Leaf(f) => result.extend(f.apply(&x[b.offset..b.offset + b.dim])),
            }
        }
        result
    }

    /// Evaluate the vector field at `x`, checking that both `x` and the result have length
    /// [`Mode::dim`].
    pub fn flow(&self, x: &[T]) -> Result<StateVector<T>> {
        self.check(Site::VectorField, x.len())?;
        let dx = self.vector_field(x);
        self.check(Site::VectorField, dx.len())?;
        Ok(StateVector(dx))
    }

    pub(crate) fn check(&self, site: Site, found: usize) -> Result<()> {
        if found != self.dim {
            return Err(HybridError::ArityMismatch {
                mode: None,
                site,
                expected: self.dim,
                found,
            });
        }
        Ok(())
    }

    pub fn shape(&self) -> ModeShape {
        ModeShape {
            dim: self.dim,
            blocks: self
                .blocks
                .iter()
                .map(|b| BlockShape {
                    offset: b.offset,
                    dim: b.dim,
                    field: match &b.field {
                        Field::Zero => None,
                        Field::Leaf(f) => Some(f.name().to_string()),
                    },
                })
                .collect(),
        }
    }
}
