//! Structure-preserving maps between hybrid systems.
use crate::category::Arrow;
use crate::error::*;
use crate::function::MapLeaf;
use crate::hybsys::{HybSys, ModeId};
use crate::state::*;

use core::ops::Shr;

/// A map from `dom` to `cod`: each mode `i` of `dom` is sent to mode `mode_map[i]` of `cod`,
/// and its states are carried along by `manifold_map[i]`.
///
/// Whether flows and resets actually commute with the map is not checked here.
///
/// # Invariants
///
/// `mode_map` and `manifold_map` have one entry per mode of `dom`, and every entry of
/// `mode_map` is a mode of `cod`. Both are checked by [`Semiconjugacy::new`].
#[derive(Clone, Debug, PartialEq)]
pub struct Semiconjugacy<T> {
    dom: HybSys<T>,
    cod: HybSys<T>,
    mode_map: Vec<ModeId>,
    manifold_map: Vec<MapLeaf<T>>,
}

impl<T: Scalar> Semiconjugacy<T> {
    pub fn new(
        dom: HybSys<T>,
        cod: HybSys<T>,
        mode_map: Vec<ModeId>,
        manifold_map: Vec<MapLeaf<T>>,
    ) -> Result<Self> {
        for (map, found) in [
            (MapKind::ModeMap, mode_map.len()),
            (MapKind::ManifoldMap, manifold_map.len()),
        ] {
            if found != dom.len() {
                return Err(HybridError::IncompleteSemiconjugacy {
                    map,
                    expected: dom.len(),
                    found,
                });
            }
        }

        if let Some(&mode) = mode_map.iter().find(|m| m.0 >= cod.len()) {
            return Err(HybridError::ModeOutOfRange {
                mode,
                modes: cod.len(),
            });
        }

        Ok(Semiconjugacy {
            dom,
            cod,
            mode_map,
            manifold_map,
        })
    }

    pub fn dom(&self) -> &HybSys<T> {
        &self.dom
    }

    pub fn cod(&self) -> &HybSys<T> {
        &self.cod
    }

    pub fn mode_map(&self) -> &[ModeId] {
        &self.mode_map
    }

    pub fn manifold_map(&self) -> &[MapLeaf<T>] {
        &self.manifold_map
    }

    /// The mode of `cod` that `id` is sent to.
    pub fn map_mode(&self, id: ModeId) -> Result<ModeId> {
        self.mode_map
            .get(id.0)
            .copied()
            .ok_or(HybridError::ModeOutOfRange {
                mode: id,
                modes: self.dom.len(),
            })
    }

    /// Carry the state `x` of mode `id` of `dom` into mode `map_mode(id)` of `cod`.
    pub fn apply(&self, id: ModeId, x: &[T]) -> Result<StateVector<T>> {
        let target = self.map_mode(id)?;
        // both lookups are in range by the invariants
        let arity = |mode, site, expected, found| HybridError::ArityMismatch {
            mode: Some(mode),
            site,
            expected,
            found,
        };

        let expected = self.dom.modes[id.0].dim();
        if x.len() != expected {
            return Err(arity(id, Site::ManifoldInput, expected, x.len()));
        }

        let y = self.manifold_map[id.0].apply(x);
        let expected = self.cod.modes[target.0].dim();
        if y.len() != expected {
            return Err(arity(target, Site::ManifoldOutput, expected, y.len()));
        }
        Ok(StateVector(y))
    }
}

impl<T: Scalar> Arrow for Semiconjugacy<T> {
    type Object = HybSys<T>;

    fn source(&self) -> &HybSys<T> {
        &self.dom
    }

    fn target(&self) -> &HybSys<T> {
        &self.cod
    }

    /// Every mode to itself, every state to itself.
    fn identity(h: &HybSys<T>) -> Self {
        Semiconjugacy {
            dom: h.clone(),
            cod: h.clone(),
            mode_map: h.mode_ids().collect(),
            manifold_map: h
                .mode_ids()
                .map(|_| MapLeaf::map("id", |x: &[T]| x.to_vec()))
                .collect(),
        }
    }

    fn compose(&self, other: &Self) -> Result<Self> {
        if self.cod != other.dom {
            return Err(HybridError::NotComposable);
        }

        let mode_map = self
            .mode_map
            .iter()
            .map(|m| other.mode_map[m.0])
            .collect();

        let manifold_map = self
            .mode_map
            .iter()
            .zip(self.manifold_map.iter())
            .map(|(m, f)| {
                let (f, g) = (f.clone(), other.manifold_map[m.0].clone());
                let name = format!("{} ; {}", f.name(), g.name());
                MapLeaf::map(name, move |x: &[T]| g.apply(&f.apply(x)))
            })
            .collect();

        Ok(Semiconjugacy {
            dom: self.dom.clone(),
            cod: other.cod.clone(),
            mode_map,
            manifold_map,
        })
    }
}

/// `&f >> &g` is [`Arrow::compose`].
impl<T: Scalar> Shr<&Semiconjugacy<T>> for &Semiconjugacy<T> {
    type Output = Result<Semiconjugacy<T>>;

    fn shr(self, rhs: &Semiconjugacy<T>) -> Self::Output {
        self.compose(rhs)
    }
}
