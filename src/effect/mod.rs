//! Contexts whose values are produced by an effect.
//!
//! - [`Deferred`]: an asynchronous computation that only runs when awaited
//!
//! `Deferred` implements [`Monad`](crate::typeclass::Monad), so it can be a
//! stage context in [`compose_with`](crate::compose::compose_with),
//! [`pipe_with`](crate::compose::pipe_with) and the Kleisli macros. Each
//! stage's continuation is registered when the pipeline is built and runs
//! after the previous stage resolves.
//!
//! ```rust
//! use fnwire::effect::Deferred;
//! use fnwire::pipe_kleisli;
//!
//! let fetch = |id: u32| Deferred::from_future(async move { id * 10 });
//! let describe = |amount: u32| Deferred::pure(format!("amount={amount}"));
//!
//! let workflow = pipe_kleisli!(fetch, describe);
//! # futures::executor::block_on(async {
//! assert_eq!(workflow(4).await, "amount=40");
//! # });
//! ```

mod deferred;

pub use deferred::Deferred;
