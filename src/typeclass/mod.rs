//! Type class traits for contexts that pipelines can thread values through.
//!
//! - [`TypeConstructor`]: emulates higher-kinded types with GATs
//! - [`Functor`]: mapping over a context
//! - [`Applicative`]: lifting a plain value into a context (`pure`)
//! - [`Monad`]: chaining context-returning functions (`flat_map` / `chain`)
//! - [`Identity`]: the context that adds nothing
//!
//! `Option`, `Result`, `Vec` and [`Identity`] implement every trait here;
//! [`Deferred`](crate::effect::Deferred) adds an asynchronous context when
//! the `effect` feature is enabled.
//!
//! # Examples
//!
//! ```rust
//! use fnwire::typeclass::{Applicative, Functor, Identity, Monad};
//!
//! let lifted = <Identity<()>>::pure(20);
//! let result = lifted.fmap(|n| n + 1).flat_map(|n| Identity(n * 2));
//! assert_eq!(result, Identity(42));
//! ```

mod applicative;
mod functor;
mod higher;
mod identity;
mod monad;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use identity::Identity;
pub use monad::Monad;
