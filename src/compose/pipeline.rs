//! Runtime pipelines built from a list of stages.
//!
//! The [`compose!`](crate::compose!) and [`pipe!`](crate::pipe!) macros need
//! their stages at compile time. A [`Pipeline`] holds them in a list chosen
//! at runtime, which requires every stage to share one type `A -> A`;
//! [`KleisliPipeline`] is the monadic counterpart over `A -> M<A>`.
//!
//! Both are immutable: the stage list is fixed at construction and the same
//! pipeline can run any number of times.

use std::fmt;
use std::rc::Rc;

use crate::typeclass::{Monad, TypeConstructor};

/// A stage of a [`Pipeline`].
pub type Stage<A> = Rc<dyn Fn(A) -> A>;

/// A stage of a [`KleisliPipeline`].
pub type KleisliStage<A, M> = Rc<dyn Fn(A) -> M>;

/// Order in which a pipeline runs its stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Last stage first, as in `compose`.
    RightToLeft,
    /// First stage first, as in `pipe`.
    LeftToRight,
}

/// Wraps a closure as a [`Stage`].
pub fn stage<A, F>(function: F) -> Stage<A>
where
    F: Fn(A) -> A + 'static,
{
    Rc::new(function)
}

/// Wraps a monadic closure as a [`KleisliStage`].
pub fn kleisli<A, M, F>(function: F) -> KleisliStage<A, M>
where
    F: Fn(A) -> M + 'static,
{
    Rc::new(function)
}

/// Composes `stages` right to left: the last stage runs first.
///
/// An empty list yields the identity pipeline.
///
/// # Examples
///
/// ```rust
/// use fnwire::compose::{compose, stage};
///
/// let h = compose([stage(|n: i32| n * 2), stage(|n: i32| n + 1)]);
/// assert_eq!(h.run(20), 42);
/// ```
pub fn compose<A, I>(stages: I) -> Pipeline<A>
where
    I: IntoIterator<Item = Stage<A>>,
{
    Pipeline::compose(stages)
}

/// Composes `stages` left to right: the first stage runs first.
///
/// `pipe(stages)` runs exactly like `compose` over the reversed list.
///
/// ```rust
/// use fnwire::compose::{pipe, stage};
///
/// let h = pipe([stage(|n: i32| n + 1), stage(|n: i32| n * 2)]);
/// assert_eq!(h.run(20), 42);
/// ```
pub fn pipe<A, I>(stages: I) -> Pipeline<A>
where
    I: IntoIterator<Item = Stage<A>>,
{
    Pipeline::pipe(stages)
}

/// Composes monadic `stages` right to left.
///
/// Each stage's result is passed to the next through
/// [`Monad::flat_map`]. An empty list yields
/// [`Applicative::pure`](crate::typeclass::Applicative::pure).
///
/// ```rust
/// use fnwire::compose::{compose_with, kleisli};
///
/// let checked = compose_with([
///     kleisli(|n: u8| n.checked_mul(2)),
///     kleisli(|n: u8| n.checked_add(1)),
/// ]);
/// assert_eq!(checked.run(20), Some(42));
/// assert_eq!(checked.run(200), None);
/// ```
pub fn compose_with<A, M, I>(stages: I) -> KleisliPipeline<A, M>
where
    I: IntoIterator<Item = KleisliStage<A, M>>,
{
    KleisliPipeline::new(stages, Direction::RightToLeft)
}

/// Composes monadic `stages` left to right.
pub fn pipe_with<A, M, I>(stages: I) -> KleisliPipeline<A, M>
where
    I: IntoIterator<Item = KleisliStage<A, M>>,
{
    KleisliPipeline::new(stages, Direction::LeftToRight)
}

/// A fixed list of `A -> A` stages run in one [`Direction`].
pub struct Pipeline<A> {
    stages: Rc<[Stage<A>]>,
    direction: Direction,
}

impl<A> Pipeline<A> {
    fn new<I>(stages: I, direction: Direction) -> Self
    where
        I: IntoIterator<Item = Stage<A>>,
    {
        Self {
            stages: stages.into_iter().collect(),
            direction,
        }
    }

    /// A pipeline with no stages; it returns its input unchanged.
    pub fn identity() -> Self {
        Self::new(Vec::new(), Direction::RightToLeft)
    }

    /// Same as the free function [`compose`].
    pub fn compose<I>(stages: I) -> Self
    where
        I: IntoIterator<Item = Stage<A>>,
    {
        Self::new(stages, Direction::RightToLeft)
    }

    /// Same as the free function [`pipe`].
    pub fn pipe<I>(stages: I) -> Self
    where
        I: IntoIterator<Item = Stage<A>>,
    {
        Self::new(stages, Direction::LeftToRight)
    }

    /// Feeds `input` through every stage.
    pub fn run(&self, input: A) -> A {
        match self.direction {
            Direction::RightToLeft => self
                .stages
                .iter()
                .rev()
                .fold(input, |value, stage| stage(value)),
            Direction::LeftToRight => self
                .stages
                .iter()
                .fold(input, |value, stage| stage(value)),
        }
    }

    /// Returns `true` if the pipeline has no stages.
    pub fn is_identity(&self) -> bool {
        self.stages.is_empty()
    }

    /// Number of stages.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Returns `true` if the pipeline has no stages.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// The order stages run in.
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Converts the pipeline into a plain closure.
    ///
    /// ```rust
    /// use fnwire::compose::{pipe, stage};
    ///
    /// let shout = pipe([stage(|s: String| s.to_uppercase()), stage(|s: String| s + "!")]).into_fn();
    /// let shouted: Vec<String> = ["hi", "yo"].map(String::from).into_iter().map(shout).collect();
    /// assert_eq!(shouted, ["HI!", "YO!"]);
    /// ```
    pub fn into_fn(self) -> impl Fn(A) -> A {
        move |input| self.run(input)
    }
}

impl<A> Clone for Pipeline<A> {
    fn clone(&self) -> Self {
        Self {
            stages: Rc::clone(&self.stages),
            direction: self.direction,
        }
    }
}

impl<A> Default for Pipeline<A> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<A> fmt::Debug for Pipeline<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Pipeline")
            .field("stages", &self.stages.len())
            .field("direction", &self.direction)
            .finish()
    }
}

/// A fixed list of `A -> M` stages joined with [`Monad::flat_map`].
pub struct KleisliPipeline<A, M> {
    stages: Rc<[KleisliStage<A, M>]>,
    direction: Direction,
}

impl<A, M> KleisliPipeline<A, M> {
    fn new<I>(stages: I, direction: Direction) -> Self
    where
        I: IntoIterator<Item = KleisliStage<A, M>>,
    {
        Self {
            stages: stages.into_iter().collect(),
            direction,
        }
    }

    /// Number of stages.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Returns `true` if the pipeline has no stages.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// The order stages run in.
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    fn ordered(&self) -> Vec<KleisliStage<A, M>> {
        let mut stages = self.stages.to_vec();
        if self.direction == Direction::RightToLeft {
            stages.reverse();
        }
        stages
    }
}

impl<A, M> KleisliPipeline<A, M>
where
    A: 'static,
    M: Monad + TypeConstructor<Inner = A, WithType<A> = M> + 'static,
{
    /// Feeds `input` through the first stage and every later stage's
    /// continuation. With no stages the input is lifted with `pure`.
    pub fn run(&self, input: A) -> M {
        let mut stages = self.ordered().into_iter();
        let Some(first) = stages.next() else {
            return M::pure(input);
        };
        stages.fold(first(input), |context, stage| {
            context.flat_map::<A, _>(move |value| stage(value))
        })
    }

    /// Converts the pipeline into a plain closure.
    pub fn into_fn(self) -> impl Fn(A) -> M {
        move |input| self.run(input)
    }
}

impl<A, M> Clone for KleisliPipeline<A, M> {
    fn clone(&self) -> Self {
        Self {
            stages: Rc::clone(&self.stages),
            direction: self.direction,
        }
    }
}

impl<A, M> fmt::Debug for KleisliPipeline<A, M> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("KleisliPipeline")
            .field("stages", &self.stages.len())
            .field("direction", &self.direction)
            .finish()
    }
}
