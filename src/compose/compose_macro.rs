//! The `compose!` macro: right-to-left function composition.

/// Composes unary functions right to left.
///
/// `compose!(f, g, h)(x)` is `f(g(h(x)))`: the rightmost function runs
/// first. Each function's output type must match the input type of the
/// function to its left, which the compiler checks.
///
/// - `compose!()` is [`identity`](crate::compose::identity)
/// - `compose!(f)` is `f`
/// - `compose!(f, g, ...)` nests as `compose!(f, compose!(g, ...))`
///
/// # Laws
///
/// - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
/// - **Identity**: `compose!(identity, f) == f == compose!(f, identity)`
///
/// # Examples
///
/// ```
/// use fnwire::compose;
///
/// let increment = |n: i32| n + 1;
/// let double = |n: i32| n * 2;
///
/// let h = compose!(double, increment);
/// assert_eq!(h(20), 42);
/// ```
///
/// Types may change from stage to stage:
///
/// ```
/// use fnwire::compose;
///
/// let digits = compose!(|text: String| text.len(), |n: u64| n.to_string());
/// assert_eq!(digits(12_345), 5);
/// ```
///
/// ```
/// use fnwire::compose;
///
/// let unchanged = compose!();
/// assert_eq!(unchanged("as is"), "as is");
/// ```
#[macro_export]
macro_rules! compose {
    () => {
        $crate::compose::identity
    };

    ($function:expr $(,)?) => {
        $function
    };

    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let outer = $outer_function;
        let inner = $crate::compose!($($remaining_functions),+);
        move |input| outer(inner(input))
    }};
}
