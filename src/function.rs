//! User-supplied functions: vector fields, guards and reset maps.
//!
//! The core never looks inside these functions; it only slices their inputs and concatenates
//! their outputs.
//! Every implementation must therefore honour the following contract:
//!
//! - **Deterministic**: the same input always gives the same output.
//! - **Side-effect free**: evaluation may be repeated, reordered or skipped by composite
//!   guards and resets (for example, [`crate::reset::Reset::either`] evaluates its first guard
//!   twice).
//! - **Total**: defined on every vector of the declared dimension.
use core::fmt::Debug;
use std::sync::Arc;

/// A predicate over the state space of a mode.
pub trait Guard<T>: Send + Sync {
    fn holds(&self, x: &[T]) -> bool;
}

impl<T, F: Fn(&[T]) -> bool + Send + Sync> Guard<T> for F {
    fn holds(&self, x: &[T]) -> bool {
        self(x)
    }
}

/// A map between state spaces: a vector field, a reset map, or a manifold map.
pub trait Map<T>: Send + Sync {
    fn apply(&self, x: &[T]) -> Vec<T>;
}

impl<T, F: Fn(&[T]) -> Vec<T> + Send + Sync> Map<T> for F {
    fn apply(&self, x: &[T]) -> Vec<T> {
        self(x)
    }
}

/// A named, shared user function.
///
/// The name is what composite descriptors report in their [shape](crate::shape);
/// two leaves are equal when they have the same name *and* share the same function.
pub struct Leaf<F: ?Sized> {
    name: Arc<str>,
    f: Arc<F>,
}

pub type GuardLeaf<T> = Leaf<dyn Guard<T>>;
pub type MapLeaf<T> = Leaf<dyn Map<T>>;

impl<T: 'static> Leaf<dyn Guard<T>> {
    /// ```rust
    /// # use hybrid_systems::function::*;
    /// let g = GuardLeaf::<f64>::guard("x0 > 1", |x: &[f64]| x[0] > 1.0);
    /// assert!(g.holds(&[2.0]));
    /// assert_eq!(g.name(), "x0 > 1");
    /// ```
    pub fn guard(name: impl Into<String>, f: impl Guard<T> + 'static) -> Self {
        Leaf {
            name: name.into().into(),
            f: Arc::new(f),
        }
    }

    pub fn holds(&self, x: &[T]) -> bool {
        self.f.holds(x)
    }
}

impl<T: 'static> Leaf<dyn Map<T>> {
    pub fn map(name: impl Into<String>, f: impl Map<T> + 'static) -> Self {
        Leaf {
            name: name.into().into(),
            f: Arc::new(f),
        }
    }

    pub fn apply(&self, x: &[T]) -> Vec<T> {
        self.f.apply(x)
    }
}

impl<F: ?Sized> Leaf<F> {
    pub fn name(&self) -> &str {
        &self.name
    }
}

// Can't derive Clone: it would introduce an unwanted `F: Clone` bound.
impl<F: ?Sized> Clone for Leaf<F> {
    fn clone(&self) -> Self {
        Leaf {
            name: self.name.clone(),
            f: self.f.clone(),
        }
    }
}

impl<F: ?Sized> PartialEq for Leaf<F> {
    fn eq(&self, other: &Self) -> bool {
        // compare data pointers only; vtable pointers are not unique per type
        self.name == other.name
            && core::ptr::eq(
                Arc::as_ptr(&self.f) as *const (),
                Arc::as_ptr(&other.f) as *const (),
            )
    }
}

impl<F: ?Sized> Debug for Leaf<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Leaf({:?})", self.name)
    }
}
