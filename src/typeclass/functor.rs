//! Functor type class - mapping over values in a context.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fnwire::typeclass::Functor;
//!
//! let lengths: Vec<usize> = vec!["a", "bb", "ccc"].fmap(str::len);
//! assert_eq!(lengths, vec![1, 2, 3]);
//!
//! // A missing value short-circuits the mapping.
//! let nothing: Option<i32> = None;
//! assert_eq!(nothing.fmap(|n| n + 1), None);
//! ```

use super::higher::TypeConstructor;
use super::identity::Identity;

/// Types whose contained value(s) can be transformed while keeping the
/// surrounding structure.
///
/// `fmap` takes an [`FnMut`] so that multi-element contexts such as `Vec`
/// can apply the same function to every element. The `'static` bounds let
/// deferred contexts store the function until they run.
pub trait Functor: TypeConstructor {
    /// Applies `function` to the value(s) inside the context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnwire::typeclass::{Functor, Identity};
    ///
    /// assert_eq!(Identity(4).fmap(|n| n * 2), Identity(8));
    /// assert_eq!(Some(4).fmap(|n| n.to_string()), Some("4".to_string()));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B + 'static,
        B: 'static;

    /// Replaces the value(s) inside the context with `value`.
    ///
    /// ```rust
    /// use fnwire::typeclass::Functor;
    ///
    /// assert_eq!(vec![1, 2].replace('x'), vec!['x', 'x']);
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        B: Clone + 'static,
    {
        self.fmap(move |_| value.clone())
    }
}

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnMut(A) -> B,
    {
        self.map(function)
    }
}

impl<T, E> Functor for Result<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnMut(T) -> B,
    {
        self.map(function)
    }
}

impl<T> Functor for Vec<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(T) -> B,
    {
        self.into_iter().map(function).collect()
    }
}

impl<A> Functor for Identity<A> {
    #[inline]
    fn fmap<B, F>(self, mut function: F) -> Identity<B>
    where
        F: FnMut(A) -> B,
    {
        Identity(function(self.0))
    }
}
