//! The identity context.
//!
//! [`Identity`] wraps exactly one value and adds no behaviour of its own,
//! which makes it the reference model for the functor and monad laws and the
//! simplest context that Kleisli pipelines can run in.

use std::fmt;
use std::ops::Add;

use super::TypeConstructor;

/// Wraps a single value without adding any effect.
///
/// Mapping applies the function to the wrapped value; chaining unwraps one
/// layer. The wrapper also behaves like its contents where that is
/// unambiguous: it displays as `Identity(value)`, iterates its one value, and
/// adds element-wise.
///
/// # Examples
///
/// ```rust
/// use fnwire::typeclass::{Functor, Identity};
///
/// let doubled = Identity::new(21).fmap(|n| n * 2);
/// assert_eq!(doubled.into_inner(), 42);
/// assert_eq!(doubled.to_string(), "Identity(42)");
///
/// let spread: Vec<i32> = vec![6, 7].into_iter().chain(Identity(8)).collect();
/// assert_eq!(spread, vec![6, 7, 8]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Lifts `value` into the identity context.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Unwraps the value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Borrows the wrapped value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> TypeConstructor for Identity<A> {
    type Inner = A;
    type WithType<B> = Identity<B>;
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

impl<A: fmt::Display> fmt::Display for Identity<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Identity({})", self.0)
    }
}

impl<A> IntoIterator for Identity<A> {
    type Item = A;
    type IntoIter = std::iter::Once<A>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self.0)
    }
}

impl<A, B> Add<Identity<B>> for Identity<A>
where
    A: Add<B>,
{
    type Output = Identity<A::Output>;

    fn add(self, other: Identity<B>) -> Self::Output {
        Identity(self.0 + other.0)
    }
}
