//! [`Vec<T>`]-backed continuous state vectors
use core::fmt::Debug;
use core::ops::{Deref, DerefMut};
use num_traits::Num;

/// Scalars a hybrid system can be defined over.
/// In practice this is [`f64`]; see [`crate::prelude`].
pub trait Scalar: Num + Copy + PartialOrd + Debug + Send + Sync + 'static {}

impl<T: Num + Copy + PartialOrd + Debug + Send + Sync + 'static> Scalar for T {}

/// A newtype wrapper for [`Vec<T>`] whose length is the dimension of the state it represents.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct StateVector<T>(pub Vec<T>);

// StateVector is a newtype wrapper, so we can just treat it like a regular old Vec.
impl<T> Deref for StateVector<T> {
    type Target = Vec<T>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for StateVector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> From<Vec<T>> for StateVector<T> {
    fn from(v: Vec<T>) -> Self {
        StateVector(v)
    }
}

impl<T> From<StateVector<T>> for Vec<T> {
    fn from(v: StateVector<T>) -> Self {
        v.0
    }
}

impl<T: Scalar> StateVector<T> {
    /// The origin of a `dim`-dimensional state space.
    pub fn zeros(dim: usize) -> Self {
        StateVector(vec![T::zero(); dim])
    }

    /// Dimension of the state space this vector lives in.
    pub fn dim(&self) -> usize {
        self.0.len()
    }

    /// Concatenate two state vectors
    ///
    /// ```rust
    /// # use hybrid_systems::state::StateVector;
    /// let x = StateVector(vec![1.0, 2.0]);
    /// let y = StateVector(vec![3.0]);
    /// assert_eq!(x.concatenate(&y), StateVector(vec![1.0, 2.0, 3.0]));
    /// ```
    pub fn concatenate(&self, other: &Self) -> Self {
        StateVector(concat(&self.0, &other.0))
    }

    /// Split into the first `at` coordinates and the rest.
    /// Returns `None` if `at` exceeds the dimension.
    pub fn split(&self, at: usize) -> Option<(&[T], &[T])> {
        if at > self.dim() {
            return None;
        }
        Some(self.0.split_at(at))
    }
}

pub(crate) fn concat<T: Clone>(v1: &[T], v2: &[T]) -> Vec<T> {
    let mut result = Vec::with_capacity(v1.len() + v2.len());
    result.extend_from_slice(v1);
    result.extend_from_slice(v2);
    result
}
