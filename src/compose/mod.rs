//! Function composition.
//!
//! # Overview
//!
//! - [`compose!`]: compose functions right to left, `compose!(f, g)(x) == f(g(x))`
//! - [`pipe!`]: compose functions left to right, `pipe!(f, g)(x) == g(f(x))`
//! - [`compose_kleisli!`] / [`pipe_kleisli!`]: the same over monadic
//!   functions `A -> M<B>`, joined with `flat_map`
//! - [`compose()`] / [`pipe()`] and [`compose_with`] / [`pipe_with`]: runtime
//!   counterparts that take a list of stages
//!
//! # Helper Functions
//!
//! - [`identity`], [`constant`]
//! - [`flip`] and [`flip_uncurried`]
//! - [`map`]: data-last `fmap`
//! - [`tap`], [`trace()`] and [`trace_display`]: pass-through stages for
//!   observing values
//!
//! # Examples
//!
//! ```
//! use fnwire::{compose, pipe};
//!
//! let increment = |n: i32| n + 1;
//! let double = |n: i32| n * 2;
//!
//! assert_eq!(compose!(double, increment)(20), 42);
//! assert_eq!(pipe!(increment, double)(20), 42);
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Identity**: `compose!(identity, f) == f == compose!(f, identity)`
//! - **Duality**: `pipe!(f, g, h) == compose!(h, g, f)`
//! - **Double flip**: `flip(flip(f)) == f`

mod compose_macro;
mod kleisli_macro;
mod pipe_macro;
mod pipeline;
mod trace;
mod utils;

pub use pipeline::{
    Direction, KleisliPipeline, KleisliStage, Pipeline, Stage, compose, compose_with, kleisli,
    pipe, pipe_with, stage,
};
pub use trace::{TRACE_TARGET, tap, trace, trace_display};
pub use utils::{constant, flip, flip_uncurried, identity, map};

pub use crate::compose;
pub use crate::compose_kleisli;
pub use crate::pipe;
pub use crate::pipe_kleisli;
