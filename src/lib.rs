//! # fnwire
//!
//! Function composition and currying, with monadic composition for
//! contexts such as `Option`, `Result`, `Vec` and deferred async values.
//!
//! ## Overview
//!
//! - **Currying**: arity-matching [`Curry`](curry::Curry) and the typed
//!   [`curry!`] macro
//! - **Composition**: [`compose!`] (right to left) and [`pipe!`] (left to
//!   right), plus runtime pipelines over stage lists
//! - **Monadic composition**: [`compose_kleisli!`], [`pipe_kleisli!`] and
//!   the runtime [`compose_with`](compose::compose_with) /
//!   [`pipe_with`](compose::pipe_with)
//! - **Type classes**: `Functor`, `Applicative` and `Monad`, with the
//!   `Identity` context
//! - **Effects**: `Deferred`, a lazy asynchronous context
//!
//! ## Feature Flags
//!
//! - `typeclass`: type class traits and `Identity`
//! - `curry`: currying
//! - `compose`: composition macros, pipelines and helpers
//! - `effect`: the `Deferred` context
//! - `full`: enable all features (default)
//!
//! ## Example
//!
//! ```rust
//! use fnwire::prelude::*;
//!
//! let increment = |n: i32| n + 1;
//! let double = |n: i32| n * 2;
//!
//! assert_eq!(compose!(double, increment)(20), 42);
//! assert_eq!(pipe!(increment, double)(20), 42);
//! assert_eq!(flip(|a: i32| move |b: i32| a - b)(3)(10), 7);
//!
//! let lifted = compose_kleisli!(|n: i32| Identity(n * 2), |n: i32| Identity(n + 1));
//! assert_eq!(lifted(20), Identity(42));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the traits, types, functions and macros of every enabled
/// feature.
///
/// ```rust
/// use fnwire::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "curry")]
    pub use crate::curry::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "curry")]
pub mod curry;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "effect")]
pub mod effect;
