//! Errors reported by strict curried application.

use thiserror::Error;

/// Ways a caller can misuse a curried function.
///
/// Lenient application ([`Curry::apply`](super::Curry::apply)) never
/// produces [`CurryError::OverApplied`]; it discards the surplus instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CurryError {
    /// More arguments were collected than the function's arity.
    #[error("curried function of arity {arity} received {supplied} arguments")]
    OverApplied {
        /// Declared arity of the target function.
        arity: usize,
        /// Number of arguments collected when the call was rejected.
        supplied: usize,
    },

    /// A completed application was applied to more arguments.
    #[error("curried function has already been invoked; its result is not callable")]
    AlreadyComplete,
}
