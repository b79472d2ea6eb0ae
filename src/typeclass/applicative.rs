//! Applicative type class - lifting plain values into a context.
//!
//! Only the lifting half of the applicative interface is modelled here:
//! [`Applicative::pure`] is the "lift" operation that Kleisli pipelines use
//! as their identity stage.

use super::functor::Functor;
use super::identity::Identity;

/// A functor that can lift a plain value into its context.
///
/// # Examples
///
/// ```rust
/// use fnwire::typeclass::{Applicative, Identity};
///
/// assert_eq!(<Option<()>>::pure(42), Some(42));
/// assert_eq!(<Vec<()>>::pure('a'), vec!['a']);
/// assert_eq!(<Identity<()>>::pure("v"), Identity("v"));
/// ```
pub trait Applicative: Functor {
    /// Wraps `value` in the minimal context (`a -> F(a)`).
    fn pure<B>(value: B) -> Self::WithType<B>;
}

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }
}

impl<T, E> Applicative for Result<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Result<B, E> {
        Ok(value)
    }
}

impl<T> Applicative for Vec<T> {
    #[inline]
    fn pure<B>(value: B) -> Vec<B> {
        vec![value]
    }
}

impl<A> Applicative for Identity<A> {
    #[inline]
    fn pure<B>(value: B) -> Identity<B> {
        Identity::new(value)
    }
}
