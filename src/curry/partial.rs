//! Arity-matching curry over a homogeneous argument list.
//!
//! A [`Curry`] collects arguments across any number of calls, each call
//! supplying a batch of one or more arguments. Once the collected count
//! reaches the declared arity the target function runs with every collected
//! argument, in the order supplied. Until then each call returns a new
//! partial application; existing partials are never modified and can be
//! reused to specialise the function in several directions.
//!
//! ```rust
//! use fnwire::curry::curry;
//!
//! let add = curry(2, |arguments: Vec<i32>| arguments[0] + arguments[1]);
//! let increment = add.apply([1]).into_partial().expect("one of two arguments");
//! let add_ten = add.apply([10]).into_partial().expect("one of two arguments");
//!
//! assert_eq!(increment.apply([3]).into_complete(), Some(4));
//! assert_eq!(add_ten.apply([3]).into_complete(), Some(13));
//! assert_eq!(increment.apply([3]).into_complete(), Some(4));
//! ```

use std::fmt;
use std::rc::Rc;

use super::error::CurryError;

/// An n-ary function together with the arguments collected for it so far.
///
/// The collected arguments form an immutable sequence owned by this value.
/// Applying a batch builds a new sequence (collected ++ batch) and leaves
/// `self` untouched. The count of collected arguments in a partial
/// application is always strictly below the arity.
pub struct Curry<T, R> {
    function: Rc<dyn Fn(Vec<T>) -> R>,
    arity: usize,
    collected: Rc<[T]>,
}

/// Result of applying a batch of arguments to a [`Curry`].
#[derive(Debug)]
pub enum Application<T, R> {
    /// Not enough arguments yet; apply more to this partial.
    Partial(Curry<T, R>),
    /// The target function ran and produced this value.
    Complete(R),
}

/// Curries `function`, which expects exactly `arity` arguments.
///
/// Rust has no runtime notion of a closure's parameter count, so the arity
/// is declared here. The function receives the arguments as a `Vec` of
/// length `arity`.
///
/// # Examples
///
/// ```rust
/// use fnwire::curry::curry;
///
/// let sum = curry(4, |arguments: Vec<i32>| arguments.iter().sum::<i32>());
///
/// assert_eq!(sum.apply([1, 2, 3, 4]).into_complete(), Some(10));
/// assert_eq!(sum.apply_groups([vec![1], vec![2, 3], vec![4]]), Ok(Some(10)));
/// ```
pub fn curry<T, R, F>(arity: usize, function: F) -> Curry<T, R>
where
    T: Clone,
    F: Fn(Vec<T>) -> R + 'static,
{
    Curry::new(arity, function)
}

impl<T: Clone, R> Curry<T, R> {
    /// Creates a curry with no collected arguments.
    pub fn new<F>(arity: usize, function: F) -> Self
    where
        F: Fn(Vec<T>) -> R + 'static,
    {
        Self {
            function: Rc::new(function),
            arity,
            collected: Rc::from(Vec::new()),
        }
    }

    /// Applies a batch of arguments.
    ///
    /// Receiving enough arguments *or more* invokes the target. Surplus
    /// arguments beyond the arity are dropped (and reported through a
    /// `tracing` debug event), so the target always sees exactly `arity`
    /// values. Use [`Curry::try_apply`] to reject a surplus instead.
    pub fn apply<I>(&self, arguments: I) -> Application<T, R>
    where
        I: IntoIterator<Item = T>,
    {
        let mut collected = self.gather(arguments);
        if collected.len() > self.arity {
            tracing::debug!(
                arity = self.arity,
                supplied = collected.len(),
                discarded = collected.len() - self.arity,
                "discarding surplus curried arguments"
            );
            collected.truncate(self.arity);
        }
        self.settle(collected)
    }

    /// Applies a batch of arguments, rejecting any surplus.
    ///
    /// # Errors
    ///
    /// Returns [`CurryError::OverApplied`] when the batch would take the
    /// collected count past the arity. The target is not invoked.
    ///
    /// ```rust
    /// use fnwire::curry::{curry, CurryError};
    ///
    /// let pair = curry(2, |arguments: Vec<u8>| (arguments[0], arguments[1]));
    /// assert_eq!(
    ///     pair.try_apply([1, 2, 3]).err(),
    ///     Some(CurryError::OverApplied { arity: 2, supplied: 3 })
    /// );
    /// ```
    pub fn try_apply<I>(&self, arguments: I) -> Result<Application<T, R>, CurryError>
    where
        I: IntoIterator<Item = T>,
    {
        let collected = self.gather(arguments);
        if collected.len() > self.arity {
            return Err(CurryError::OverApplied {
                arity: self.arity,
                supplied: collected.len(),
            });
        }
        Ok(self.settle(collected))
    }

    /// Applies each batch in turn, as in `f(g1)(g2)...(gk)`.
    ///
    /// Returns `Ok(None)` if the batches run out before the arity is reached.
    ///
    /// # Errors
    ///
    /// Returns [`CurryError::AlreadyComplete`] if a batch follows the call
    /// that completed the application.
    pub fn apply_groups<G, I>(&self, groups: G) -> Result<Option<R>, CurryError>
    where
        G: IntoIterator<Item = I>,
        I: IntoIterator<Item = T>,
    {
        groups
            .into_iter()
            .try_fold(Application::Partial(self.clone()), Application::apply)
            .map(Application::into_complete)
    }

    fn gather<I>(&self, arguments: I) -> Vec<T>
    where
        I: IntoIterator<Item = T>,
    {
        self.collected.iter().cloned().chain(arguments).collect()
    }

    fn settle(&self, collected: Vec<T>) -> Application<T, R> {
        if collected.len() >= self.arity {
            Application::Complete((self.function)(collected))
        } else {
            Application::Partial(Self {
                function: Rc::clone(&self.function),
                arity: self.arity,
                collected: Rc::from(collected),
            })
        }
    }
}

impl<T, R> Curry<T, R> {
    /// Declared arity of the target function.
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// Arguments collected so far, in the order supplied.
    pub fn collected(&self) -> &[T] {
        &self.collected
    }

    /// Number of arguments still required.
    pub fn remaining(&self) -> usize {
        self.arity.saturating_sub(self.collected.len())
    }
}

impl<T, R> Clone for Curry<T, R> {
    fn clone(&self) -> Self {
        Self {
            function: Rc::clone(&self.function),
            arity: self.arity,
            collected: Rc::clone(&self.collected),
        }
    }
}

impl<T: fmt::Debug, R> fmt::Debug for Curry<T, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Curry")
            .field("arity", &self.arity)
            .field("collected", &self.collected)
            .finish_non_exhaustive()
    }
}

impl<T: Clone, R> Application<T, R> {
    /// Continues a chain with another batch (lenient about surplus).
    ///
    /// # Errors
    ///
    /// Returns [`CurryError::AlreadyComplete`] when applied to a
    /// [`Application::Complete`] value.
    pub fn apply<I>(self, arguments: I) -> Result<Self, CurryError>
    where
        I: IntoIterator<Item = T>,
    {
        match self {
            Self::Partial(curried) => Ok(curried.apply(arguments)),
            Self::Complete(_) => Err(CurryError::AlreadyComplete),
        }
    }

    /// Continues a chain with another batch, rejecting surplus arguments.
    ///
    /// # Errors
    ///
    /// [`CurryError::AlreadyComplete`] for a completed application,
    /// [`CurryError::OverApplied`] for a surplus.
    pub fn try_apply<I>(self, arguments: I) -> Result<Self, CurryError>
    where
        I: IntoIterator<Item = T>,
    {
        match self {
            Self::Partial(curried) => curried.try_apply(arguments),
            Self::Complete(_) => Err(CurryError::AlreadyComplete),
        }
    }
}

impl<T, R> Application<T, R> {
    /// The result, if the target has run.
    pub fn into_complete(self) -> Option<R> {
        match self {
            Self::Complete(result) => Some(result),
            Self::Partial(_) => None,
        }
    }

    /// The result, or `default` if the target has not run yet.
    pub fn complete_or(self, default: R) -> R {
        self.into_complete().unwrap_or(default)
    }

    /// The partial application, if more arguments are needed.
    pub fn into_partial(self) -> Option<Curry<T, R>> {
        match self {
            Self::Partial(curried) => Some(curried),
            Self::Complete(_) => None,
        }
    }

    /// Returns `true` once the target has run.
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }
}
