#![cfg(feature = "compose")]
//! Property-based tests for function composition laws.
//!
//! ## Composition Laws
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Left Identity**: `compose!(identity, f) == f`
//! - **Right Identity**: `compose!(f, identity) == f`
//!
//! ## Pipe Laws
//! - **Duality**: `pipe!(f, g, h) == compose!(h, g, f)`
//!
//! ## Runtime Pipelines
//! - `compose(stages)` and `pipe(stages)` agree with the macros
//! - `pipe(stages) == compose(reversed stages)`
//!
//! ## Flip Laws
//! - **Definition**: `flip(f)(b)(a) == f(a)(b)`
//! - **Double Flip Identity**: `flip(flip(f)) == f`

use fnwire::compose::{
    Pipeline, Stage, compose, constant, flip, flip_uncurried, identity, pipe, stage,
};
use proptest::prelude::*;

fn add_one() -> Stage<i32> {
    stage(|n: i32| n.wrapping_add(1))
}

fn times_two() -> Stage<i32> {
    stage(|n: i32| n.wrapping_mul(2))
}

fn minus_three() -> Stage<i32> {
    stage(|n: i32| n.wrapping_sub(3))
}

fn curried_subtract(a: i32) -> impl Fn(i32) -> i32 {
    move |b| a.wrapping_sub(b)
}

// =============================================================================
// Composition Laws
// =============================================================================

proptest! {
    /// Left Identity Law: compose!(identity, f)(x) == f(x)
    #[test]
    fn prop_compose_left_identity(x in any::<i32>()) {
        let function = |n: i32| n.wrapping_mul(2);

        let composed = compose!(identity, function);

        prop_assert_eq!(composed(x), function(x));
    }

    /// Right Identity Law: compose!(f, identity)(x) == f(x)
    #[test]
    fn prop_compose_right_identity(x in any::<i32>()) {
        let function = |n: i32| n.wrapping_mul(2);

        let composed = compose!(function, identity);

        prop_assert_eq!(composed(x), function(x));
    }

    /// Associativity Law: compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)
    #[test]
    fn prop_compose_associativity(x in any::<i32>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);
        let function3 = |n: i32| n.wrapping_sub(3);

        let inner_right = compose!(function2, function3);
        let grouped_right = compose!(function1, inner_right);

        let inner_left = compose!(function1, function2);
        let grouped_left = compose!(inner_left, function3);

        prop_assert_eq!(grouped_right(x), grouped_left(x));
    }

    /// Flat composition agrees with nested composition
    #[test]
    fn prop_compose_flat_matches_nested(x in any::<i32>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);
        let function3 = |n: i32| n.wrapping_sub(3);

        prop_assert_eq!(
            compose!(function1, function2, function3)(x),
            function1(function2(function3(x)))
        );
    }

    /// Empty composition is identity
    #[test]
    fn prop_empty_compose_is_identity(x in any::<String>()) {
        prop_assert_eq!(compose!()(x.clone()), x);
    }
}

// =============================================================================
// Pipe Laws
// =============================================================================

proptest! {
    /// Duality: pipe!(f, g, h) == compose!(h, g, f)
    #[test]
    fn prop_pipe_compose_duality(x in any::<i32>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);
        let function3 = |n: i32| n.wrapping_sub(3);

        let piped = pipe!(function1, function2, function3);
        let composed = compose!(function3, function2, function1);

        prop_assert_eq!(piped(x), composed(x));
    }

    /// Pipe with identity: pipe!(identity, f) == f
    #[test]
    fn prop_pipe_identity(x in any::<i32>()) {
        let function = |n: i32| n.wrapping_mul(3);

        prop_assert_eq!(pipe!(identity, function)(x), function(x));
        prop_assert_eq!(pipe!(function, identity)(x), function(x));
    }

    /// Empty pipe is identity
    #[test]
    fn prop_empty_pipe_is_identity(x in any::<i64>()) {
        prop_assert_eq!(pipe!()(x), x);
    }
}

// =============================================================================
// Runtime Pipeline Laws
// =============================================================================

proptest! {
    /// compose(stages) agrees with compose!
    #[test]
    fn prop_runtime_compose_matches_macro(x in any::<i32>()) {
        let runtime = compose([add_one(), times_two(), minus_three()]);
        let expected = compose!(
            |n: i32| n.wrapping_add(1),
            |n: i32| n.wrapping_mul(2),
            |n: i32| n.wrapping_sub(3)
        );

        prop_assert_eq!(runtime.run(x), expected(x));
    }

    /// pipe(stages) == compose(reversed stages)
    #[test]
    fn prop_runtime_pipe_is_reversed_compose(x in any::<i32>()) {
        let piped = pipe([add_one(), times_two(), minus_three()]);
        let composed = compose([minus_three(), times_two(), add_one()]);

        prop_assert_eq!(piped.run(x), composed.run(x));
    }

    /// An identity pipeline returns its input
    #[test]
    fn prop_identity_pipeline(x in any::<i32>()) {
        prop_assert_eq!(Pipeline::identity().run(x), x);
        prop_assert_eq!(compose(Vec::<Stage<i32>>::new()).run(x), x);
        prop_assert_eq!(pipe(Vec::<Stage<i32>>::new()).run(x), x);
    }

    /// Stage lists of any length fold in order
    #[test]
    fn prop_pipe_of_increments_adds_length(x in -1_000i32..1_000, count in 0usize..32) {
        let stages: Vec<Stage<i32>> = (0..count).map(|_| add_one()).collect();
        let expected = x + i32::try_from(count).unwrap_or(i32::MAX);

        prop_assert_eq!(pipe(stages).run(x), expected);
    }
}

// =============================================================================
// Identity and Constant
// =============================================================================

proptest! {
    /// Identity function returns input unchanged
    #[test]
    fn prop_identity_string(x in any::<String>()) {
        prop_assert_eq!(identity(x.clone()), x);
    }

    /// Constant function always returns the same value
    #[test]
    fn prop_constant_ignores_input(constant_value in any::<i32>(), input in any::<String>()) {
        let always_constant = constant::<i32, String>(constant_value);
        prop_assert_eq!(always_constant(input), constant_value);
    }
}

// =============================================================================
// Flip Laws
// =============================================================================

proptest! {
    /// Flip definition: flip(f)(b)(a) == f(a)(b)
    #[test]
    fn prop_flip_definition(a in any::<i32>(), b in any::<i32>()) {
        let flipped = flip(curried_subtract);

        prop_assert_eq!(flipped(b)(a), curried_subtract(a)(b));
    }

    /// Double flip is identity: flip(flip(f))(a)(b) == f(a)(b)
    #[test]
    fn prop_flip_double_identity(a in any::<i32>(), b in any::<i32>()) {
        let flipped_twice = flip(flip(curried_subtract));

        prop_assert_eq!(flipped_twice(a)(b), curried_subtract(a)(b));
    }

    /// Uncurried flip definition: flip_uncurried(f)(b, a) == f(a, b)
    #[test]
    fn prop_flip_uncurried_definition(a in any::<i32>(), b in any::<i32>()) {
        let function = |x: i32, y: i32| x.wrapping_sub(y);
        let flipped = flip_uncurried(function);

        prop_assert_eq!(flipped(b, a), function(a, b));
    }
}
