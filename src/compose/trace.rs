//! Pass-through stages for observing values inside a composition.
//!
//! A traced stage returns its input unchanged, so inserting one anywhere in
//! a `compose!` or `pipe!` chain never alters the result. Trace output goes
//! through [`tracing`] at `DEBUG` level under the [`TRACE_TARGET`] target;
//! install a subscriber to see it.

use std::fmt;

/// The `tracing` target used by [`trace`] and [`trace_display`].
pub const TRACE_TARGET: &str = "fnwire::trace";

/// Runs `effect` on a borrow of each value, then passes the value on.
///
/// ```
/// use fnwire::compose::tap;
/// use fnwire::pipe;
/// use std::cell::RefCell;
///
/// let seen = RefCell::new(Vec::new());
/// let h = pipe!(|n: i32| n + 1, tap(|n: &i32| seen.borrow_mut().push(*n)), |n: i32| n * 2);
///
/// assert_eq!(h(20), 42);
/// assert_eq!(*seen.borrow(), vec![21]);
/// ```
pub fn tap<T, F>(effect: F) -> impl Fn(T) -> T
where
    F: Fn(&T),
{
    move |value| {
        effect(&value);
        value
    }
}

/// Logs each value with `label` using its [`Debug`](fmt::Debug) form.
///
/// The event carries two fields, `label` and `value`.
///
/// ```
/// use fnwire::compose::trace;
/// use fnwire::compose;
///
/// let h = compose!(|n: i32| n * 2, trace("after increment"), |n: i32| n + 1);
/// assert_eq!(h(20), 42);
/// ```
pub fn trace<T, L>(label: L) -> impl Fn(T) -> T
where
    T: fmt::Debug,
    L: Into<String>,
{
    let label = label.into();
    tap(move |value: &T| {
        tracing::debug!(target: TRACE_TARGET, label = %label, value = ?value, "trace");
    })
}

/// Logs each value with `label` using its [`Display`](fmt::Display) form.
pub fn trace_display<T, L>(label: L) -> impl Fn(T) -> T
where
    T: fmt::Display,
    L: Into<String>,
{
    let label = label.into();
    tap(move |value: &T| {
        tracing::debug!(target: TRACE_TARGET, label = %label, value = %value, "trace");
    })
}
