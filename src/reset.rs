//! Resets: guarded discrete jumps.
//!
//! A [`Reset`] is a *descriptor* rather than a closure: composite resets built by
//! [`crate::hybsys::HybSys::parallel`] and [`Reset::either`] remain inspectable through
//! [`Reset::shape`], and are evaluated by recursing on borrowed sub-slices of the input
//! rather than by copying the state at every level of nesting.
//!
//! A reset does not know which modes it connects; that is given by its position in a
//! [`crate::hybsys::ResetTable`].
use crate::error::*;
use crate::function::*;
use crate::shape::ResetShape;
use crate::state::*;

use std::sync::Arc;

/// Which combinations of sub-guards a [`Product`] fires on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cases {
    /// Left guard holds and right guard does not. Resets the left block only.
    pub left_only: bool,
    /// Right guard holds and left guard does not. Resets the right block only.
    pub right_only: bool,
    /// Both guards hold. Resets both blocks.
    pub both: bool,
}

impl Cases {
    pub const LEFT_ONLY: Cases = Cases {
        left_only: true,
        right_only: false,
        both: false,
    };

    pub const RIGHT_ONLY: Cases = Cases {
        left_only: false,
        right_only: true,
        both: false,
    };

    pub const BOTH: Cases = Cases {
        left_only: false,
        right_only: false,
        both: true,
    };

    /// Does a product with these cases fire when the left and right guards are `left` and
    /// `right`? Never when neither holds.
    pub fn admits(self, left: bool, right: bool) -> bool {
        match (left, right) {
            (true, false) => self.left_only,
            (false, true) => self.right_only,
            (true, true) => self.both,
            (false, false) => false,
        }
    }

    pub fn is_empty(self) -> bool {
        !(self.left_only || self.right_only || self.both)
    }
}

impl core::ops::BitOr for Cases {
    type Output = Cases;

    fn bitor(self, rhs: Cases) -> Cases {
        Cases {
            left_only: self.left_only || rhs.left_only,
            right_only: self.right_only || rhs.right_only,
            both: self.both || rhs.both,
        }
    }
}

/// Two resets acting on disjoint blocks of coordinates, `left` on `x[..split]` and `right`
/// on `x[split..]`, firing on the guard combinations in `cases`.
///
/// Each sub-guard is evaluated once per evaluation of the product, whatever the cases.
#[derive(Clone, Debug, PartialEq)]
pub struct Product<T> {
    pub left: Reset<T>,
    pub right: Reset<T>,
    pub split: usize,
    pub cases: Cases,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Reset<T> {
    /// No transition: the guard never holds.
    Never,

    /// A user-supplied guard and reset map.
    Leaf { guard: GuardLeaf<T>, map: MapLeaf<T> },

    /// Two resets side by side; see [`Product`].
    Product(Arc<Product<T>>),

    /// Either guard holds; the first takes priority. See [`Reset::either`].
    Either(Arc<Reset<T>>, Arc<Reset<T>>),
}

impl<T: Scalar> Reset<T> {
    /// A reset named `name` from a user guard and reset map.
    ///
    /// ```rust
    /// # use hybrid_systems::reset::Reset;
    /// let r = Reset::<f64>::new("bounce", |x: &[f64]| x[0] > 1.0, |_: &[f64]| vec![0.0]);
    /// assert_eq!(r.fire(&[2.0]), Some(vec![0.0]));
    /// assert_eq!(r.fire(&[0.5]), None);
    /// ```
    pub fn new(
        name: impl Into<String>,
        guard: impl Guard<T> + 'static,
        map: impl Map<T> + 'static,
    ) -> Self {
        let name = name.into();
        Reset::Leaf {
            guard: GuardLeaf::guard(name.clone(), guard),
            map: MapLeaf::map(name, map),
        }
    }

    pub fn from_leaves(guard: GuardLeaf<T>, map: MapLeaf<T>) -> Self {
        Reset::Leaf { guard, map }
    }

    /// The absent transition.
    pub fn never() -> Self {
        Reset::Never
    }

    /// Merge two resets into one whose guard is `r1.guard || r2.guard`.
    /// When both guards hold, `r1`'s map is used.
    ///
    /// The priority of `r1` is a tie-breaking policy, not a symmetric union: if both guards
    /// can hold with different maps, the result depends on argument order.
    ///
    /// Merging with [`Reset::Never`] returns the other reset unchanged.
    pub fn either(r1: Self, r2: Self) -> Self {
        match (r1, r2) {
            (Reset::Never, r) | (r, Reset::Never) => r,
            (r1, r2) => Reset::Either(Arc::new(r1), Arc::new(r2)),
        }
    }

    pub fn is_never(&self) -> bool {
        matches!(self, Reset::Never)
    }

    /// Evaluate the guard without checking dimensions.
    ///
    /// Every leaf guard in the descriptor is called at most once.
    ///
    /// # Panics
    ///
    /// If `x` is shorter than the split point of a product; see [`Reset::min_arity`].
    pub fn holds(&self, x: &[T]) -> bool {
        match self {
            Reset::Never => false,
            Reset::Leaf { guard, .. } => guard.holds(x),
            Reset::Product(p) => {
                let (xl, xr) = x.split_at(p.split);
                p.cases.admits(p.left.holds(xl), p.right.holds(xr))
            }
            Reset::Either(r1, r2) => r1.holds(x) || r2.holds(x),
        }
    }

    /// Apply the reset map where the guard holds; elsewhere `x` is returned unchanged, as
    /// for [`Reset::Never`]. Dimensions are not checked.
    ///
    /// # Panics
    ///
    /// As for [`Reset::holds`].
    pub fn apply(&self, x: &[T]) -> Vec<T> {
        self.fire(x).unwrap_or_else(|| x.to_vec())
    }

    /// Apply the reset map if the guard holds.
    ///
    /// Guard and map are evaluated in a single pass, so every leaf guard is called at most
    /// once and the cost is linear in the number of leaves.
    ///
    /// # Panics
    ///
    /// As for [`Reset::holds`].
    pub fn fire(&self, x: &[T]) -> Option<Vec<T>> {
        match self {
            Reset::Never => None,
            Reset::Leaf { guard, map } => guard.holds(x).then(|| map.apply(x)),
            Reset::Product(p) => {
                let (xl, xr) = x.split_at(p.split);
                let (yl, yr) = (p.left.fire(xl), p.right.fire(xr));
                if !p.cases.admits(yl.is_some(), yr.is_some()) {
                    return None;
                }
                Some(concat(
                    yl.as_deref().unwrap_or(xl),
                    yr.as_deref().unwrap_or(xr),
                ))
            }
            Reset::Either(r1, r2) => r1.fire(x).or_else(|| r2.fire(x)),
        }
    }

    /// The shortest input the descriptor can be evaluated on without panicking:
    /// the largest `split + right.min_arity()` along it.
    pub fn min_arity(&self) -> usize {
        match self {
            Reset::Never | Reset::Leaf { .. } => 0,
            Reset::Product(p) => p.split + p.right.min_arity(),
            Reset::Either(r1, r2) => r1.min_arity().max(r2.min_arity()),
        }
    }

    // Can the descriptor be evaluated on inputs of length `dim`? Unlike `min_arity`, this
    // also catches a left factor wider than its own split.
    pub(crate) fn check_arity(&self, dim: usize) -> Result<()> {
        match self {
            Reset::Never | Reset::Leaf { .. } => Ok(()),
            Reset::Product(p) => {
                let expected = self.min_arity();
                if dim < expected {
                    return Err(HybridError::ArityMismatch {
                        mode: None,
                        site: Site::Guard,
                        expected,
                        found: dim,
                    });
                }
                p.left.check_arity(p.split)?;
                p.right.check_arity(dim - p.split)
            }
            Reset::Either(r1, r2) => {
                r1.check_arity(dim)?;
                r2.check_arity(dim)
            }
        }
    }

    /// Nesting depth of the descriptor; leaves and [`Reset::Never`] have depth 0.
    pub fn depth(&self) -> usize {
        match self {
            Reset::Never | Reset::Leaf { .. } => 0,
            Reset::Product(p) => 1 + p.left.depth().max(p.right.depth()),
            Reset::Either(r1, r2) => 1 + r1.depth().max(r2.depth()),
        }
    }

    pub fn shape(&self) -> ResetShape {
        match self {
            Reset::Never => ResetShape::Never,
            Reset::Leaf { guard, map } => ResetShape::Leaf {
                guard: guard.name().to_string(),
                map: map.name().to_string(),
            },
            Reset::Product(p) => ResetShape::Product {
                left: Box::new(p.left.shape()),
                right: Box::new(p.right.shape()),
                split: p.split,
                cases: p.cases,
            },
            Reset::Either(r1, r2) => {
                ResetShape::Either(Box::new(r1.shape()), Box::new(r2.shape()))
            }
        }
    }
}

impl<T: Scalar> Product<T> {
    /// The product as a reset, or [`Reset::Never`] if no case can fire: either `cases` is
    /// empty or every admitted case needs a side that is [`Reset::Never`].
    pub fn into_reset(self) -> Reset<T> {
        let (l, r) = (!self.left.is_never(), !self.right.is_never());
        let cases = self.cases;
        if cases.admits(l, false) || cases.admits(false, r) || cases.admits(l, r) {
            Reset::Product(Arc::new(self))
        } else {
            Reset::Never
        }
    }
}

impl<T> Default for Reset<T> {
    fn default() -> Self {
        Reset::Never
    }
}
