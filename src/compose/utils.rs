//! Small combinators that slot into compositions.
//!
//! - [`identity`]: the unit of composition
//! - [`constant`]: ignores its input
//! - [`flip`]: swaps the first two arguments of a curried function
//! - [`flip_uncurried`]: swaps the arguments of a binary function
//! - [`map`]: a data-last `fmap`, usable as a pipeline stage

use std::rc::Rc;

use crate::typeclass::Functor;

/// Returns the value unchanged.
///
/// `compose!(identity, f)` and `compose!(f, identity)` both behave as `f`,
/// and an empty composition is this function.
///
/// ```
/// use fnwire::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns `value`, ignoring its input.
///
/// ```
/// use fnwire::compose::constant;
///
/// let zeros: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
/// assert_eq!(zeros, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the first two arguments of a curried function.
///
/// `flip(f)(b)(a)` is `f(a)(b)`. Only the first two arguments move; any
/// later ones stay curried in the result of `f(a)(b)`. Flipping twice gives
/// back a function equivalent to `f`.
///
/// The second argument is captured by the returned closure and cloned for
/// every call of it, so it must be [`Clone`].
///
/// ```
/// use fnwire::compose::flip;
///
/// let subtract = |a: i32| move |b: i32| a - b;
/// let subtract_from = flip(subtract);
///
/// assert_eq!(subtract(3)(10), -7);
/// assert_eq!(subtract_from(3)(10), 7);
/// ```
///
/// Arguments beyond the second are untouched:
///
/// ```
/// use fnwire::compose::flip;
///
/// let join = |a: &'static str| move |b: &'static str| move |c: &'static str| format!("{a}{b}{c}");
/// assert_eq!(flip(join)("b")("a")("c"), "abc");
/// ```
pub fn flip<A, B, C, G, F>(function: F) -> impl Fn(B) -> Box<dyn Fn(A) -> C>
where
    F: Fn(A) -> G + 'static,
    G: Fn(B) -> C,
    B: Clone + 'static,
{
    let function = Rc::new(function);
    move |second| {
        let function = Rc::clone(&function);
        let flipped: Box<dyn Fn(A) -> C> =
            Box::new(move |first| function(first)(second.clone()));
        flipped
    }
}

/// Swaps the arguments of a binary function: `flip_uncurried(f)(b, a)` is
/// `f(a, b)`.
///
/// ```
/// use fnwire::compose::flip_uncurried;
///
/// let divide = |numerator: f64, denominator: f64| numerator / denominator;
/// let divide_into = flip_uncurried(divide);
///
/// assert!((divide_into(2.0, 10.0) - 5.0).abs() < f64::EPSILON);
/// ```
pub fn flip_uncurried<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second, first| function(first, second)
}

/// Curried, data-last [`Functor::fmap`]: `map(f)(context)` is
/// `context.fmap(f)`.
///
/// Fixing the function first turns it into a stage that can be composed
/// like any other.
///
/// ```
/// use fnwire::compose::map;
/// use fnwire::pipe;
///
/// let lengths = pipe!(
///     |words: &'static str| words.split(' ').collect::<Vec<_>>(),
///     map::<Vec<&'static str>, _, _>(str::len),
/// );
/// assert_eq!(lengths("to be or not"), vec![2, 2, 2, 3]);
/// ```
pub fn map<Fa, B, F>(function: F) -> impl Fn(Fa) -> Fa::WithType<B>
where
    Fa: Functor,
    F: Fn(Fa::Inner) -> B + 'static,
    B: 'static,
{
    let function = Rc::new(function);
    move |context| {
        let function = Rc::clone(&function);
        context.fmap(move |value| function(value))
    }
}
