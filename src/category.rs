//! Arrows between hybrid systems.
use crate::error::Result;

pub trait Arrow: Sized {
    type Object;

    fn source(&self) -> &Self::Object;
    fn target(&self) -> &Self::Object;

    /// the identity morphism on `a`
    fn identity(a: &Self::Object) -> Self;

    /// Compose morphisms in diagrammatic order: `self ; other`
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::HybridError::NotComposable`] if `self.target() != other.source()`.
    fn compose(&self, other: &Self) -> Result<Self>;
}
