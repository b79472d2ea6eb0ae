//! Composition of monadic functions (`A -> M<B>`).
//!
//! Plain composition cannot join `f: B -> M<C>` after `g: A -> M<B>`, since
//! `g` produces a wrapped value. These macros thread each stage's result into
//! the next through [`Monad::flat_map`](crate::typeclass::Monad::flat_map),
//! so the monad decides how values flow: `Option` stops at the first `None`,
//! `Vec` branches, [`Deferred`](crate::effect::Deferred) waits for each
//! stage to resolve before starting the next.

/// Composes monadic functions right to left.
///
/// `compose_kleisli!(f, g, h)(x)` is `h(x).flat_map(g).flat_map(f)`.
/// Every stage must be `'static` because it is shared with the continuation
/// registered on the monad.
///
/// # Laws
///
/// For `pure = Applicative::pure`:
///
/// - `compose_kleisli!(f, pure) == f == compose_kleisli!(pure, f)`
/// - `compose_kleisli!(f, compose_kleisli!(g, h)) == compose_kleisli!(compose_kleisli!(f, g), h)`
///
/// # Examples
///
/// ```
/// use fnwire::compose_kleisli;
/// use fnwire::typeclass::Identity;
///
/// let increment = |n: i32| Identity::new(n + 1);
/// let double = |n: i32| Identity::new(n * 2);
///
/// let h = compose_kleisli!(double, increment);
/// assert_eq!(h(20), Identity::new(42));
/// ```
///
/// ```
/// use fnwire::compose_kleisli;
///
/// let parse = |text: &'static str| text.parse::<i32>().ok();
/// let halve = |n: i32| (n % 2 == 0).then_some(n / 2);
///
/// let parse_then_halve = compose_kleisli!(halve, parse);
/// assert_eq!(parse_then_halve("84"), Some(42));
/// assert_eq!(parse_then_halve("85"), None);
/// assert_eq!(parse_then_halve("eighty"), None);
/// ```
#[macro_export]
macro_rules! compose_kleisli {
    ($function:expr $(,)?) => {
        $function
    };

    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let outer = ::std::rc::Rc::new($outer_function);
        let inner = $crate::compose_kleisli!($($remaining_functions),+);
        move |input| {
            let outer = ::std::rc::Rc::clone(&outer);
            $crate::typeclass::Monad::flat_map(inner(input), move |value| outer(value))
        }
    }};
}

/// Composes monadic functions left to right.
///
/// `pipe_kleisli!(f, g, h)(x)` is `f(x).flat_map(g).flat_map(h)`, the
/// same function as `compose_kleisli!(h, g, f)`.
///
/// # Examples
///
/// ```
/// use fnwire::effect::Deferred;
/// use fnwire::pipe_kleisli;
///
/// let fetch = |id: u32| Deferred::from_future(async move { id * 10 });
/// let render = |n: u32| Deferred::pure(format!("#{n}"));
///
/// let show = pipe_kleisli!(fetch, render);
/// # futures::executor::block_on(async {
/// assert_eq!(show(4).await, "#40");
/// # });
/// ```
#[macro_export]
macro_rules! pipe_kleisli {
    ($function:expr $(,)?) => {
        $function
    };

    ($first_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let first = $first_function;
        let rest = ::std::rc::Rc::new($crate::pipe_kleisli!($($remaining_functions),+));
        move |input| {
            let rest = ::std::rc::Rc::clone(&rest);
            $crate::typeclass::Monad::flat_map(first(input), move |value| rest(value))
        }
    }};
}
