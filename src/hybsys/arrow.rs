//! Composition of hybrid systems.
use super::object::*;
use super::table::*;
use crate::error::*;
use crate::mode::Mode;
use crate::reset::{Cases, Product, Reset};
use crate::state::Scalar;

use core::ops::{BitOr, Shr};
use tracing::debug;

impl<T: Scalar> HybSys<T> {
    /// Run `h` and `k` side by side.
    ///
    /// The modes of the result are pairs `(i, j)` of a mode of `h` and a mode of `k`, numbered
    /// by [`ModeId::pair`]; the state of `(i, j)` is the state of `h.modes[i]` followed by
    /// the state of `k.modes[j]`.
    ///
    /// For the reset `rh = h[i → k]` and `rk = k[j → l]`, a jump fires in one of three
    /// guard-disjoint ways:
    ///
    /// - **left only**: `rh` holds and `rk` does not; `rh` resets the left block.
    /// - **right only**: `rk` holds and `rh` does not; `rk` resets the right block.
    /// - **both**: both hold and both blocks are reset.
    ///
    /// A jump lands in `(k, j)`, `(i, l)` and `(k, l)` respectively, so the cell
    /// `(i, j) → (k, l)` is the union of those cases whose target is `(k, l)`:
    ///
    /// | target      | cases                      | fires when   |
    /// |-------------|----------------------------|--------------|
    /// | `k≠i, l≠j`  | both                       | `rh && rk`   |
    /// | `k≠i, l=j`  | both, left only            | `rh`         |
    /// | `k=i, l≠j`  | both, right only           | `rk`         |
    /// | `k=i, l=j`  | both, left only, right only| `rh \|\| rk` |
    ///
    /// Each cell holds a single [`Product`] carrying its set of [`Cases`], so `rh` and `rk`
    /// are evaluated once per evaluation of the cell. Every cell is written exactly once.
    ///
    /// ```rust
    /// # use hybrid_systems::prelude::*;
    /// let h = HybSys::without_resets(vec![Mode::stationary(1), Mode::stationary(1)]);
    /// let k = HybSys::without_resets(vec![Mode::stationary(2); 3]);
    /// let hk = HybSys::parallel(&h, &k).unwrap();
    /// assert_eq!(hk.len(), 6);
    /// assert_eq!(hk.mode(ModeId(4)).unwrap().dim(), 3);
    /// ```
    pub fn parallel(h: &Self, k: &Self) -> Result<Self> {
        if h.is_empty() || k.is_empty() {
            return Err(HybridError::EmptySystem {
                operation: "parallel",
            });
        }

        let width = k.len();
        let size = h.len() * width;

        let mut modes = Vec::with_capacity(size);
        for mh in h.modes.iter() {
            for mk in k.modes.iter() {
                modes.push(Mode::parallel(mh, mk));
            }
        }

        let mut table = TableBuilder::new(size);
        for i in 0..h.len() {
            let split = h.modes[i].dim();
            for j in 0..width {
                let from = ModeId::pair(ModeId(i), ModeId(j), width);
                for ti in 0..h.len() {
                    for l in 0..width {
                        let to = ModeId::pair(ModeId(ti), ModeId(l), width);
                        let product = Product {
                            left: h.resets.cell(i, ti).clone(),
                            right: k.resets.cell(j, l).clone(),
                            split,
                            cases: cell_cases(ti == i, l == j),
                        };
                        table.set(from, to, product.into_reset())?;
                    }
                }
            }
        }

        debug!(left = h.len(), right = k.len(), modes = size, "parallel composition");
        Ok(HybSys {
            modes,
            resets: table.finish(),
        })
    }

    /// Splice `k` onto the end of `h`, identifying the last mode of `h` with the first mode
    /// of `k`.
    ///
    /// The result has `h.len() - 1 + k.len()` modes: all but the last mode of `h`, followed
    /// by the modes of `k`. Transitions of `h` into its last mode now enter the first mode of
    /// `k`; transitions out of the last mode of `h` are dropped in favour of those of `k`.
    pub fn sequential(h: &Self, k: &Self) -> Result<Self> {
        if h.is_empty() || k.is_empty() {
            return Err(HybridError::EmptySystem {
                operation: "sequential",
            });
        }

        // h.modes[kept] is identified with k.modes[0]
        let kept = h.len() - 1;
        let modes: Vec<Mode<T>> = h.modes[..kept]
            .iter()
            .chain(k.modes.iter())
            .cloned()
            .collect();

        let mut table = TableBuilder::new(modes.len());
        for i in 0..kept {
            for j in 0..h.len() {
                table.set(ModeId(i), ModeId(j), h.resets.cell(i, j).clone())?;
            }
        }
        for i in 0..k.len() {
            for j in 0..k.len() {
                let reset = k.resets.cell(i, j).clone();
                table.set(ModeId(kept + i), ModeId(kept + j), reset)?;
            }
        }

        debug!(
            left = h.len(),
            right = k.len(),
            modes = modes.len(),
            "sequential composition"
        );
        Ok(HybSys {
            modes,
            resets: table.finish(),
        })
    }

    /// Close a chain into a cycle by identifying the last mode of `h` with its first.
    ///
    /// The last mode and every transition out of it are dropped. For each remaining mode `i`
    /// the reset into mode `0` becomes `Reset::either(h[i → 0], h[i → last])`, so the
    /// original entry into mode `0` takes priority when both guards hold.
    ///
    /// A single-mode system closes to the empty system.
    pub fn loop_closure(h: &Self) -> Result<Self> {
        if h.is_empty() {
            return Err(HybridError::EmptySystem { operation: "loop" });
        }

        let last = h.len() - 1;
        let modes = h.modes[..last].to_vec();

        let mut table = TableBuilder::new(last);
        for i in 0..last {
            let merged = Reset::either(
                h.resets.cell(i, 0).clone(),
                h.resets.cell(i, last).clone(),
            );
            table.set(ModeId(i), ModeId(0), merged)?;
            for j in 1..last {
                table.set(ModeId(i), ModeId(j), h.resets.cell(i, j).clone())?;
            }
        }

        debug!(modes = last, "loop closure");
        Ok(HybSys {
            modes,
            resets: table.finish(),
        })
    }
}

// The cases landing in one cell of a parallel composition; see `HybSys::parallel`.
fn cell_cases(left_stays: bool, right_stays: bool) -> Cases {
    let mut cases = Cases::BOTH;
    if right_stays {
        cases = cases | Cases::LEFT_ONLY;
    }
    if left_stays {
        cases = cases | Cases::RIGHT_ONLY;
    }
    cases
}

/// `&h | &k` is [`HybSys::parallel`].
impl<T: Scalar> BitOr<&HybSys<T>> for &HybSys<T> {
    type Output = Result<HybSys<T>>;

    fn bitor(self, rhs: &HybSys<T>) -> Self::Output {
        HybSys::parallel(self, rhs)
    }
}

/// `&h >> &k` is [`HybSys::sequential`].
impl<T: Scalar> Shr<&HybSys<T>> for &HybSys<T> {
    type Output = Result<HybSys<T>>;

    fn shr(self, rhs: &HybSys<T>) -> Self::Output {
        HybSys::sequential(self, rhs)
    }
}
