//! Type constructor emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Option<_>` or `Vec<_>` as type constructors
//! directly. [`TypeConstructor`] records the currently applied type
//! (`Inner`) and how to re-apply the same constructor to another type
//! (`WithType<B>`), which is all that [`Functor`](super::Functor) and
//! [`Monad`](super::Monad) need to describe `map` and `chain`.
//!
//! ```rust
//! use fnwire::typeclass::TypeConstructor;
//!
//! fn reapply<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let emptied: Vec<String> = reapply(vec![1, 2, 3]);
//! assert!(emptied.is_empty());
//! ```

/// A type constructor applied to `Inner`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F` itself.
pub trait TypeConstructor {
    /// The type this constructor is currently applied to.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}

impl<T> TypeConstructor for Vec<T> {
    type Inner = T;
    type WithType<B> = Vec<B>;
}
