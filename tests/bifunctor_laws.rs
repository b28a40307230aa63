//! Property-based tests for BiFunctor and Flip.
//!
//! - **Identity**: `bimap(x, id, id) == x`
//! - **Decomposition**: `bimap(x, f, g) == map_left(map_right(x, g), f)`
//!   and `bimap(x, f, g) == map_right(map_left(x, f), g)`
//! - **Flip involution**: `flip(flip(x)) == x`

use kindred::data::io_result;
use kindred::prelude::*;
use proptest::prelude::*;

fn result_strategy() -> impl Strategy<Value = Result<i32, String>> {
    prop::result::maybe_ok(any::<i32>(), "[a-z]{0,6}")
}

fn increment(n: i32) -> i32 {
    n.wrapping_add(1)
}

fn length(text: String) -> usize {
    text.len()
}

proptest! {
    #[test]
    fn prop_result_identity(value in result_strategy()) {
        prop_assert_eq!(ResultBi::bimap(value.clone(), |a: i32| a, |e: String| e), value);
    }

    #[test]
    fn prop_result_decomposition(value in result_strategy()) {
        let both = ResultBi::bimap(value.clone(), increment, length);
        let left_first = ResultBi::map_right(ResultBi::map_left(value.clone(), increment), length);
        let right_first = ResultBi::map_left(ResultBi::map_right(value, length), increment);
        prop_assert_eq!(&both, &left_first);
        prop_assert_eq!(both, right_first);
    }

    #[test]
    fn prop_result_flip_involution(value in result_strategy()) {
        prop_assert_eq!(ResultBi::flip(ResultBi::flip(value.clone())), value);
    }

    #[test]
    fn prop_io_result_decomposition(value in result_strategy()) {
        let lift = |value: Result<i32, String>| io_result::from_fn(move || value);
        let both = IOResultBi::bimap(lift(value.clone()), increment, length);
        let split = IOResultBi::map_right(IOResultBi::map_left(lift(value), increment), length);
        prop_assert_eq!(both.run_unsafe(), split.run_unsafe());
    }

    #[test]
    fn prop_io_result_flip_involution(value in result_strategy()) {
        let twice = io_result::flip(io_result::flip(io_result::from_fn({
            let value = value.clone();
            move || value
        })));
        prop_assert_eq!(twice.run_unsafe(), value);
    }

    #[test]
    fn prop_nested_option_result_flip(value in prop::option::of(result_strategy())) {
        type Layers = BiNested<OptionF, ResultBi>;
        prop_assert_eq!(Layers::flip(Layers::flip(value.clone())), value);
    }
}
