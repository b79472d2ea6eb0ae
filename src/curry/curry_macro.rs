//! The `curry!` macro for typed, one-argument-at-a-time currying.
//!
//! Unlike [`Curry`](crate::curry::Curry), which collects a homogeneous
//! argument list at runtime, `curry!` keeps every parameter's own type and
//! produces nested unary closures checked at compile time.
//!
//! Captured arguments are shared through `Rc` and cloned when the final
//! argument arrives, so both the curried function and every partial
//! application can be called any number of times.

/// Converts a function of 2 to 6 parameters into nested unary closures.
///
/// Two forms are accepted:
///
/// - `curry!(function, arity)` for a function item or closure value, with the
///   arity given as an integer literal from 2 to 6
/// - `curry!(|a, b, ...| body)` for an inline closure, whose parameter count
///   is the arity
///
/// All arguments except the last must implement [`Clone`].
///
/// # Examples
///
/// ```
/// use fnwire::curry;
///
/// fn volume(width: u32, height: u32, depth: u32) -> u32 {
///     width * height * depth
/// }
///
/// let curried = curry!(volume, 3);
/// let base = curried(2)(3);
/// assert_eq!(base(4), 24);
/// assert_eq!(base(5), 30);
/// ```
///
/// ```
/// use fnwire::curry;
///
/// let greet = curry!(|greeting: &str, name: String| format!("{greeting}, {name}!"));
/// let hello = greet("Hello");
/// assert_eq!(hello("Ada".to_string()), "Hello, Ada!");
/// ```
///
/// A single parameter is already curried and is rejected:
///
/// ```compile_fail
/// let _ = fnwire::curry!(|value: i32| value + 1);
/// ```
#[macro_export]
macro_rules! curry {
    (@start $function:expr; $($argument:ident)+) => {{
        let target = ::std::rc::Rc::new($function);
        $crate::curry!(@nest target; []; $($argument)+)
    }};

    (@nest $target:ident; [$($bound:ident)*]; $last:ident) => {
        move |$last| {
            $target(
                $(::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&$bound)),)*
                $last
            )
        }
    };
    (@nest $target:ident; [$($bound:ident)*]; $next:ident $($rest:ident)+) => {
        move |$next| {
            let $target = ::std::rc::Rc::clone(&$target);
            $(let $bound = ::std::rc::Rc::clone(&$bound);)*
            let $next = ::std::rc::Rc::new($next);
            $crate::curry!(@nest $target; [$($bound)* $next]; $($rest)+)
        }
    };

    ($function:expr, 2 $(,)?) => {
        $crate::curry!(@start $function; first second)
    };
    ($function:expr, 3 $(,)?) => {
        $crate::curry!(@start $function; first second third)
    };
    ($function:expr, 4 $(,)?) => {
        $crate::curry!(@start $function; first second third fourth)
    };
    ($function:expr, 5 $(,)?) => {
        $crate::curry!(@start $function; first second third fourth fifth)
    };
    ($function:expr, 6 $(,)?) => {
        $crate::curry!(@start $function; first second third fourth fifth sixth)
    };
    ($function:expr, $arity:literal $(,)?) => {
        ::core::compile_error!("curry! supports arities from 2 to 6")
    };

    (| $parameter:ident $(: $parameter_type:ty)? | $body:expr) => {
        ::core::compile_error!("curry! requires a function with at least 2 arguments")
    };
    (| $($parameter:ident $(: $parameter_type:ty)?),+ $(,)? | $body:expr) => {
        $crate::curry!(@start |$($parameter $(: $parameter_type)?),+| $body; $($parameter)+)
    };
}
