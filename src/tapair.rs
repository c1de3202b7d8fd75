//! Template/anchor pairs.
use crate::error::*;
use crate::hybsys::HybSys;
use crate::semiconjugacy::Semiconjugacy;
use crate::state::Scalar;

/// An idealised `anchor` system, an implementable `temp` system, and the asymptotic phase
/// witnessing that `temp` behaves like `anchor` in the long run.
///
/// The phase maps `temp` into `anchor`. Checking that it really is a semiconjugacy of the
/// flows and resets is left to verification tooling.
#[derive(Clone, Debug, PartialEq)]
pub struct TAPair<T> {
    anchor: HybSys<T>,
    temp: HybSys<T>,
    asymptotic_phase: Semiconjugacy<T>,
}

impl<T: Scalar> TAPair<T> {
    /// # Errors
    ///
    /// [`HybridError::PhaseMismatch`] unless `asymptotic_phase` goes from `temp` to `anchor`.
    pub fn new(
        anchor: HybSys<T>,
        temp: HybSys<T>,
        asymptotic_phase: Semiconjugacy<T>,
    ) -> Result<Self> {
        if asymptotic_phase.dom() != &temp || asymptotic_phase.cod() != &anchor {
            return Err(HybridError::PhaseMismatch);
        }
        Ok(TAPair {
            anchor,
            temp,
            asymptotic_phase,
        })
    }

    pub fn anchor(&self) -> &HybSys<T> {
        &self.anchor
    }

    pub fn temp(&self) -> &HybSys<T> {
        &self.temp
    }

    pub fn asymptotic_phase(&self) -> &Semiconjugacy<T> {
        &self.asymptotic_phase
    }
}
