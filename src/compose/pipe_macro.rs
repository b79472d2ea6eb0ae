//! The `pipe!` macro: left-to-right function composition.

/// Composes unary functions left to right.
///
/// `pipe!(f, g, h)(x)` is `h(g(f(x)))`: the stages run in the order they
/// are written, so a pipeline reads top to bottom.
///
/// `pipe!(f, g, ...)` builds the same function as `compose!(..., g, f)`.
///
/// - `pipe!()` is [`identity`](crate::compose::identity)
/// - `pipe!(f)` is `f`
///
/// # Examples
///
/// ```
/// use fnwire::compose::trace;
/// use fnwire::pipe;
///
/// let increment = |n: i32| n + 1;
/// let double = |n: i32| n * 2;
///
/// let h = pipe!(increment, trace("after increment"), double, trace("after double"));
/// assert_eq!(h(20), 42);
/// ```
///
/// ```
/// use fnwire::pipe;
///
/// let evens = pipe!(
///     |values: Vec<i32>| values.into_iter().map(|n| n * 2).collect::<Vec<_>>(),
///     |values: Vec<i32>| values.into_iter().filter(|n| *n > 5).collect::<Vec<_>>(),
/// );
/// assert_eq!(evens(vec![1, 2, 3, 4, 5]), vec![6, 8, 10]);
/// ```
#[macro_export]
macro_rules! pipe {
    () => {
        $crate::compose::identity
    };

    ($function:expr $(,)?) => {
        $function
    };

    ($first_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let first = $first_function;
        let rest = $crate::pipe!($($remaining_functions),+);
        move |input| rest(first(input))
    }};
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    #[rstest]
    fn empty_pipe_is_identity() {
        let unchanged = pipe!();
        assert_eq!(unchanged('p'), 'p');
    }

    #[rstest]
    fn leftmost_function_runs_first() {
        let append_a = |text: String| text + "a";
        let append_b = |text: String| text + "b";
        let append_c = |text: String| text + "c";

        let piped = pipe!(append_a, append_b, append_c);
        assert_eq!(piped(String::new()), "abc");
    }

    #[rstest]
    fn pipeline_is_reusable() {
        let piped = pipe!(|n: u32| n + 1, |n: u32| n * 10);
        assert_eq!(piped(1), 20);
        assert_eq!(piped(2), 30);
    }
}
