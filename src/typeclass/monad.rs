//! Monad type class - chaining computations that return a context.
//!
//! A monad lifts (`pure`), maps (`fmap`) and flattens while mapping
//! (`flat_map`, also exposed as `chain`). `flat_map` is what Kleisli
//! composition folds with, in place of plain function application.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! M::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(M::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fnwire::typeclass::Monad;
//!
//! fn parse_positive(text: &str) -> Option<i32> {
//!     text.parse::<i32>().ok().filter(|&n| n > 0)
//! }
//!
//! let result = Some("21").flat_map(parse_positive).flat_map(|n| Some(n * 2));
//! assert_eq!(result, Some(42));
//! ```

use super::applicative::Applicative;
use super::identity::Identity;

/// A context whose computations can be chained, each step receiving the
/// unwrapped result of the previous one.
pub trait Monad: Applicative {
    /// Applies `function` to the value(s) inside the context and flattens
    /// the nested result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnwire::typeclass::Monad;
    ///
    /// let pairs = vec![1, 2].flat_map(|n| vec![n, n * 10]);
    /// assert_eq!(pairs, vec![1, 10, 2, 20]);
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> Self::WithType<B> + 'static,
        B: 'static;

    /// Alias for [`flat_map`](Monad::flat_map).
    ///
    /// ```rust
    /// use fnwire::typeclass::{Identity, Monad};
    ///
    /// assert_eq!(Identity(20).chain(|n| Identity(n + 1)), Identity(21));
    /// ```
    #[inline]
    fn chain<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnMut(Self::Inner) -> Self::WithType<B> + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }
}

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnMut(A) -> Option<B>,
    {
        self.and_then(function)
    }
}

impl<T, E> Monad for Result<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnMut(T) -> Result<B, E>,
    {
        self.and_then(function)
    }
}

impl<T> Monad for Vec<T> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(T) -> Vec<B>,
    {
        self.into_iter().flat_map(function).collect()
    }
}

impl<A> Monad for Identity<A> {
    #[inline]
    fn flat_map<B, F>(self, mut function: F) -> Identity<B>
    where
        F: FnMut(A) -> Identity<B>,
    {
        function(self.into_inner())
    }
}
