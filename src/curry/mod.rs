//! Currying.
//!
//! Two complementary forms are provided:
//!
//! - [`Curry`] / [`curry`]: arity-matching currying over a homogeneous
//!   argument list. Arguments may arrive one at a time or in batches; the
//!   target runs as soon as the collected count reaches its arity.
//! - [`curry!`](crate::curry!): typed currying into nested unary closures,
//!   one parameter per call, with each parameter keeping its own type.
//!
//! # Examples
//!
//! ```rust
//! use fnwire::curry::curry;
//!
//! let sum = curry(4, |arguments: Vec<i32>| arguments.iter().sum::<i32>());
//!
//! // f(1, 2, 3, 4), f(1, 2, 3)(4), f(1)(2, 3, 4), f(1, 2)(3, 4), f(1)(2)(3)(4)
//! for groups in [
//!     vec![vec![1, 2, 3, 4]],
//!     vec![vec![1, 2, 3], vec![4]],
//!     vec![vec![1], vec![2, 3, 4]],
//!     vec![vec![1, 2], vec![3, 4]],
//!     vec![vec![1], vec![2], vec![3], vec![4]],
//! ] {
//!     assert_eq!(sum.apply_groups(groups), Ok(Some(10)));
//! }
//! ```
//!
//! ```rust
//! use fnwire::curry;
//!
//! let subtract = curry!(|minuend: i32, subtrahend: i32| minuend - subtrahend);
//! assert_eq!(subtract(10)(3), 7);
//! ```

mod curry_macro;
mod error;
mod partial;

pub use error::CurryError;
pub use partial::{Application, Curry, curry};

pub use crate::curry;
