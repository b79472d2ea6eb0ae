#![cfg(feature = "typeclass")]
//! Property-based tests for Monad laws.
//!
//! - **Left Identity**: `pure(a).flat_map(f) == f(a)`
//! - **Right Identity**: `m.flat_map(pure) == m`
//! - **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`

use fnwire::typeclass::{Applicative, Identity, Monad};
use proptest::prelude::*;

// =============================================================================
// Identity<A>
// =============================================================================

fn identity_half(n: i32) -> Identity<i32> {
    Identity(n / 2)
}

fn identity_increment(n: i32) -> Identity<i32> {
    Identity(n.wrapping_add(1))
}

proptest! {
    #[test]
    fn prop_identity_left_identity(value in any::<i32>()) {
        let left = <Identity<()>>::pure(value).flat_map(identity_half);
        prop_assert_eq!(left, identity_half(value));
    }

    #[test]
    fn prop_identity_right_identity(value in any::<i32>()) {
        let m = Identity(value);
        prop_assert_eq!(m.flat_map(<Identity<()>>::pure), m);
    }

    #[test]
    fn prop_identity_associativity(value in any::<i32>()) {
        let m = Identity(value);
        let left = m.flat_map(identity_half).flat_map(identity_increment);
        let right = m.flat_map(|x| identity_half(x).flat_map(identity_increment));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Option<A>
// =============================================================================

fn checked_half(n: i32) -> Option<i32> {
    (n % 2 == 0).then_some(n / 2)
}

fn checked_increment(n: i32) -> Option<i32> {
    n.checked_add(1)
}

proptest! {
    #[test]
    fn prop_option_left_identity(value in any::<i32>()) {
        let left = <Option<()>>::pure(value).flat_map(checked_half);
        prop_assert_eq!(left, checked_half(value));
    }

    #[test]
    fn prop_option_right_identity(m in any::<Option<i32>>()) {
        prop_assert_eq!(m.flat_map(<Option<()>>::pure), m);
    }

    #[test]
    fn prop_option_associativity(m in any::<Option<i32>>()) {
        let left = m.flat_map(checked_half).flat_map(checked_increment);
        let right = m.flat_map(|x| checked_half(x).flat_map(checked_increment));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Result<A, E>
// =============================================================================

fn parse_positive(n: i32) -> Result<u32, String> {
    u32::try_from(n).map_err(|_| format!("{n} is negative"))
}

fn below_limit(n: u32) -> Result<u32, String> {
    if n < 1_000 {
        Ok(n)
    } else {
        Err(format!("{n} is too large"))
    }
}

proptest! {
    #[test]
    fn prop_result_left_identity(value in any::<i32>()) {
        let left = <Result<(), String>>::pure(value).flat_map(parse_positive);
        prop_assert_eq!(left, parse_positive(value));
    }

    #[test]
    fn prop_result_right_identity(m in any::<Result<i32, String>>()) {
        prop_assert_eq!(m.clone().flat_map(<Result<(), String>>::pure), m);
    }

    #[test]
    fn prop_result_associativity(m in any::<Result<i32, String>>()) {
        let left = m.clone().flat_map(parse_positive).flat_map(below_limit);
        let right = m.flat_map(|x| parse_positive(x).flat_map(below_limit));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Vec<A>
// =============================================================================

fn neighbours(n: i32) -> Vec<i32> {
    vec![n.wrapping_sub(1), n.wrapping_add(1)]
}

fn keep_even(n: i32) -> Vec<i32> {
    if n % 2 == 0 { vec![n] } else { Vec::new() }
}

proptest! {
    #[test]
    fn prop_vec_left_identity(value in any::<i32>()) {
        let left = <Vec<()>>::pure(value).flat_map(neighbours);
        prop_assert_eq!(left, neighbours(value));
    }

    #[test]
    fn prop_vec_right_identity(m in prop::collection::vec(any::<i32>(), 0..16)) {
        prop_assert_eq!(m.clone().flat_map(<Vec<()>>::pure), m);
    }

    #[test]
    fn prop_vec_associativity(m in prop::collection::vec(any::<i32>(), 0..16)) {
        let left = m.clone().flat_map(neighbours).flat_map(keep_even);
        let right = m.flat_map(|x| neighbours(x).flat_map(keep_even));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Deferred<A>
// =============================================================================

#[cfg(feature = "effect")]
mod deferred_laws {
    use fnwire::effect::Deferred;
    use fnwire::typeclass::Monad;
    use rstest::rstest;

    fn delayed_double(n: i32) -> Deferred<i32> {
        Deferred::from_future(async move { n.wrapping_mul(2) })
    }

    fn delayed_describe(n: i32) -> Deferred<String> {
        Deferred::new(move || async move { format!("<{n}>") })
    }

    #[rstest]
    #[case(0)]
    #[case(21)]
    #[case(-7)]
    #[tokio::test]
    async fn left_identity(#[case] value: i32) {
        let left = Deferred::pure(value).flat_map(delayed_double);
        assert_eq!(left.await, delayed_double(value).await);
    }

    #[rstest]
    #[case(0)]
    #[case(42)]
    #[tokio::test]
    async fn right_identity(#[case] value: i32) {
        let left = delayed_double(value).flat_map(Deferred::pure);
        assert_eq!(left.await, delayed_double(value).await);
    }

    #[rstest]
    #[case(1)]
    #[case(-21)]
    #[tokio::test]
    async fn associativity(#[case] value: i32) {
        let left = Deferred::pure(value)
            .flat_map(delayed_double)
            .flat_map(delayed_describe);
        let right = Deferred::pure(value)
            .flat_map(|x| delayed_double(x).flat_map(delayed_describe));
        assert_eq!(left.await, right.await);
    }
}
