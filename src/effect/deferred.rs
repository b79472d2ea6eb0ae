//! Deferred asynchronous results.
//!
//! [`Deferred`] describes an asynchronous computation without starting it.
//! Mapping and chaining only register continuations; nothing runs until the
//! value is awaited, and each continuation observes the resolved value of
//! the stage before it.
//!
//! The computation is stored as a [`LocalBoxFuture`], so closures and values
//! do not need to be `Send`. This keeps `Deferred` usable with the
//! [`Functor`] and [`Monad`] traits, whose bounds carry no `Send`
//! requirement.
//!
//! # Examples
//!
//! ```rust
//! use fnwire::effect::Deferred;
//! use fnwire::typeclass::{Functor, Monad};
//!
//! # futures::executor::block_on(async {
//! let pipeline = Deferred::pure(20)
//!     .fmap(|n| n + 1)
//!     .flat_map(|n| Deferred::from_future(async move { n * 2 }));
//!
//! assert_eq!(pipeline.await, 42);
//! # });
//! ```

use std::fmt;
use std::future::{Future, IntoFuture};

use futures::future::{FutureExt, LocalBoxFuture};

use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

type Thunk<A> = Box<dyn FnOnce() -> LocalBoxFuture<'static, A>>;

enum DeferredState<A> {
    Ready(A),
    Pending(Thunk<A>),
}

/// An asynchronous computation that has not started yet.
///
/// Failures are whatever the produced value says they are: a
/// `Deferred<Result<A, E>>` carries its error through every continuation
/// untouched. There is no cancellation; dropping an unawaited `Deferred`
/// simply never runs it.
pub struct Deferred<A> {
    state: DeferredState<A>,
}

impl<A> Deferred<A> {
    /// Lifts an already known value.
    ///
    /// ```rust
    /// use fnwire::effect::Deferred;
    ///
    /// # futures::executor::block_on(async {
    /// assert_eq!(Deferred::pure("ready").run().await, "ready");
    /// # });
    /// ```
    #[inline]
    pub const fn pure(value: A) -> Self {
        Self {
            state: DeferredState::Ready(value),
        }
    }

    /// Runs the computation and resolves its value.
    pub async fn run(self) -> A {
        match self.state {
            DeferredState::Ready(value) => value,
            DeferredState::Pending(thunk) => thunk().await,
        }
    }

    /// Returns `true` if the value is known without running anything.
    pub const fn is_ready(&self) -> bool {
        matches!(self.state, DeferredState::Ready(_))
    }
}

impl<A: 'static> Deferred<A> {
    /// Defers `action`; it is called only when the result is awaited.
    ///
    /// ```rust
    /// use fnwire::effect::Deferred;
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    ///
    /// let started = Rc::new(Cell::new(false));
    /// let flag = Rc::clone(&started);
    /// let deferred = Deferred::new(move || async move {
    ///     flag.set(true);
    ///     5
    /// });
    /// assert!(!started.get());
    ///
    /// # futures::executor::block_on(async {
    /// assert_eq!(deferred.await, 5);
    /// # });
    /// assert!(started.get());
    /// ```
    pub fn new<F, Fut>(action: F) -> Self
    where
        F: FnOnce() -> Fut + 'static,
        Fut: Future<Output = A> + 'static,
    {
        Self {
            state: DeferredState::Pending(Box::new(move || action().boxed_local())),
        }
    }

    /// Wraps an existing future. Futures are inert until polled, so this is
    /// as lazy as [`Deferred::new`].
    pub fn from_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = A> + 'static,
    {
        Self {
            state: DeferredState::Pending(Box::new(move || future.boxed_local())),
        }
    }
}

impl<A: 'static> IntoFuture for Deferred<A> {
    type Output = A;
    type IntoFuture = LocalBoxFuture<'static, A>;

    fn into_future(self) -> Self::IntoFuture {
        self.run().boxed_local()
    }
}

impl<A> fmt::Debug for Deferred<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.state {
            DeferredState::Ready(_) => formatter.write_str("Deferred(<ready>)"),
            DeferredState::Pending(_) => formatter.write_str("Deferred(<pending>)"),
        }
    }
}

impl<A> TypeConstructor for Deferred<A> {
    type Inner = A;
    type WithType<B> = Deferred<B>;
}

impl<A: 'static> Functor for Deferred<A> {
    fn fmap<B, F>(self, mut function: F) -> Deferred<B>
    where
        F: FnMut(A) -> B + 'static,
        B: 'static,
    {
        Deferred::from_future(async move { function(self.run().await) })
    }
}

impl<A: 'static> Applicative for Deferred<A> {
    #[inline]
    fn pure<B>(value: B) -> Deferred<B> {
        Deferred::pure(value)
    }
}

impl<A: 'static> Monad for Deferred<A> {
    fn flat_map<B, F>(self, mut function: F) -> Deferred<B>
    where
        F: FnMut(A) -> Deferred<B> + 'static,
        B: 'static,
    {
        Deferred::from_future(async move {
            let value = self.run().await;
            function(value).run().await
        })
    }
}
