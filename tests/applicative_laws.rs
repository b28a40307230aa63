//! Property-based tests for the Applicative laws.
//!
//! - **Identity**: `ap(v, of(id)) == v`
//! - **Homomorphism**: `ap(of(x), of(f)) == of(f(x))`
//! - **Interchange**: `ap(of(y), u) == ap(u, of(|f| f(y)))`
//! - **Composition**: `ap(w, ap(v, map(u, compose))) == ap(ap(w, v), u)`
//!
//! Each law is written once, generic over the dictionary, and checked for
//! every applicative the crate ships.

use kindred::data::{io_result, reader_io_result};
use kindred::prelude::*;
use proptest::prelude::*;

type Func = fn(i32) -> i32;
type Boxed = Box<dyn FnOnce(i32) -> i32>;
type Composer = Box<dyn FnOnce(Func) -> Boxed>;

const FUNCTIONS: [Func; 3] = [|n| n.wrapping_add(1), |n| n.wrapping_mul(2), |n| n.wrapping_neg()];

fn function_strategy() -> impl Strategy<Value = Func> {
    (0..FUNCTIONS.len()).prop_map(|index| FUNCTIONS[index])
}

// =============================================================================
// Laws, generic over the dictionary
// =============================================================================

fn identity_law<F: Applicative>(v: F::Out<i32>) -> F::Out<i32> {
    F::ap::<i32, i32, Func>(v, F::of::<Func>(|x| x))
}

fn homomorphism_law<F: Applicative>(function: Func, value: i32) -> (F::Out<i32>, F::Out<i32>) {
    let left = F::ap::<i32, i32, Func>(F::of::<i32>(value), F::of::<Func>(function));
    let right = F::of::<i32>(function(value));
    (left, right)
}

fn interchange_law<F, U>(u: U, value: i32) -> (F::Out<i32>, F::Out<i32>)
where
    F: Applicative,
    U: Fn() -> F::Out<Func>,
{
    let left = F::ap::<i32, i32, Func>(F::of::<i32>(value), u());
    let apply_to_value: Box<dyn FnOnce(Func) -> i32> = Box::new(move |function| function(value));
    let right = F::ap::<Func, i32, Box<dyn FnOnce(Func) -> i32>>(u(), F::of(apply_to_value));
    (left, right)
}

fn composition_law<F, U, V, W>(u: U, v: V, w: W) -> (F::Out<i32>, F::Out<i32>)
where
    F: Applicative,
    U: Fn() -> F::Out<Func>,
    V: Fn() -> F::Out<Func>,
    W: Fn() -> F::Out<i32>,
{
    let composers = F::map::<Func, Composer, _>(u(), |outer: Func| -> Composer {
        Box::new(move |inner: Func| -> Boxed { Box::new(move |x| outer(inner(x))) })
    });
    let left = F::ap::<i32, i32, Boxed>(w(), F::ap::<Func, Boxed, Composer>(v(), composers));
    let right = F::ap::<i32, i32, Func>(F::ap::<i32, i32, Func>(w(), v()), u());
    (left, right)
}

// =============================================================================
// Option
// =============================================================================

proptest! {
    #[test]
    fn prop_option_identity(value in any::<Option<i32>>()) {
        prop_assert_eq!(identity_law::<OptionF>(value), value);
    }

    #[test]
    fn prop_option_homomorphism(function in function_strategy(), value in any::<i32>()) {
        let (left, right) = homomorphism_law::<OptionF>(function, value);
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_option_interchange(u in prop::option::of(function_strategy()), value in any::<i32>()) {
        let (left, right) = interchange_law::<OptionF, _>(|| u, value);
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_option_composition(
        u in prop::option::of(function_strategy()),
        v in prop::option::of(function_strategy()),
        w in any::<Option<i32>>(),
    ) {
        let (left, right) = composition_law::<OptionF, _, _, _>(|| u, || v, || w);
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Result
// =============================================================================

fn result_of<T: Clone>(value: &Result<T, String>) -> Result<T, String> {
    value.clone()
}

proptest! {
    #[test]
    fn prop_result_identity(value in prop::result::maybe_ok(any::<i32>(), "[a-z]{1,4}")) {
        prop_assert_eq!(identity_law::<ResultF<String>>(value.clone()), value);
    }

    #[test]
    fn prop_result_homomorphism(function in function_strategy(), value in any::<i32>()) {
        let (left, right) = homomorphism_law::<ResultF<String>>(function, value);
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_result_interchange(
        u in prop::result::maybe_ok(function_strategy(), "[a-z]{1,4}"),
        value in any::<i32>(),
    ) {
        let (left, right) = interchange_law::<ResultF<String>, _>(|| result_of(&u), value);
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_result_composition(
        u in prop::result::maybe_ok(function_strategy(), "[a-z]{1,4}"),
        v in prop::result::maybe_ok(function_strategy(), "[a-z]{1,4}"),
        w in prop::result::maybe_ok(any::<i32>(), "[a-z]{1,4}"),
    ) {
        let (left, right) = composition_law::<ResultF<String>, _, _, _>(
            || result_of(&u),
            || result_of(&v),
            || result_of(&w),
        );
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// IO and composites
// =============================================================================

proptest! {
    #[test]
    fn prop_io_identity(value in any::<i32>()) {
        prop_assert_eq!(identity_law::<IOF>(IO::pure(value)).run_unsafe(), value);
    }

    #[test]
    fn prop_io_interchange(u in function_strategy(), value in any::<i32>()) {
        let (left, right) = interchange_law::<IOF, _>(|| IO::pure(u), value);
        prop_assert_eq!(left.run_unsafe(), right.run_unsafe());
    }

    #[test]
    fn prop_io_homomorphism(function in function_strategy(), value in any::<i32>()) {
        let (left, right) = homomorphism_law::<IOF>(function, value);
        prop_assert_eq!(left.run_unsafe(), right.run_unsafe());
    }

    #[test]
    fn prop_io_composition(u in function_strategy(), v in function_strategy(), w in any::<i32>()) {
        let (left, right) =
            composition_law::<IOF, _, _, _>(|| IO::pure(u), || IO::pure(v), || IO::pure(w));
        prop_assert_eq!(left.run_unsafe(), right.run_unsafe());
    }

    #[test]
    fn prop_io_result_interchange(
        u in prop::result::maybe_ok(function_strategy(), "[a-z]{1,4}"),
        value in any::<i32>(),
    ) {
        let (left, right) = interchange_law::<IOResultF<String>, _>(
            || {
                let u = u.clone();
                io_result::from_fn(move || u)
            },
            value,
        );
        prop_assert_eq!(left.run_unsafe(), right.run_unsafe());
    }

    #[test]
    fn prop_io_result_composition(
        u in prop::result::maybe_ok(function_strategy(), "[a-z]{1,4}"),
        v in prop::result::maybe_ok(function_strategy(), "[a-z]{1,4}"),
        w in prop::result::maybe_ok(any::<i32>(), "[a-z]{1,4}"),
    ) {
        let lift = |value: Result<Func, String>| io_result::from_fn(move || value);
        let (left, right) = composition_law::<IOResultF<String>, _, _, _>(
            || lift(u.clone()),
            || lift(v.clone()),
            || {
                let w = w.clone();
                io_result::from_fn(move || w)
            },
        );
        prop_assert_eq!(left.run_unsafe(), right.run_unsafe());
    }

    #[test]
    fn prop_nested_option_result_homomorphism(
        function in function_strategy(),
        value in any::<i32>(),
    ) {
        let (left, right) = homomorphism_law::<Nested<OptionF, ResultF<String>>>(function, value);
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Option over Result
// =============================================================================

type OptionResult = Nested<OptionF, ResultF<String>>;

fn option_result<T: 'static>(
    element: impl Strategy<Value = T>,
) -> impl Strategy<Value = Option<Result<T, String>>>
where
    T: Clone + std::fmt::Debug,
{
    prop::option::of(prop::result::maybe_ok(element, "[a-z]{1,4}"))
}

proptest! {
    #[test]
    fn prop_option_result_identity(value in option_result(any::<i32>())) {
        prop_assert_eq!(identity_law::<OptionResult>(value.clone()), value);
    }

    #[test]
    fn prop_option_result_interchange(
        u in option_result(function_strategy()),
        value in any::<i32>(),
    ) {
        let (left, right) = interchange_law::<OptionResult, _>(|| u.clone(), value);
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_option_result_composition(
        u in option_result(function_strategy()),
        v in option_result(function_strategy()),
        w in option_result(any::<i32>()),
    ) {
        let (left, right) =
            composition_law::<OptionResult, _, _, _>(|| u.clone(), || v.clone(), || w.clone());
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// ReaderIOResult
// =============================================================================

type Environment = u8;
type Program = ReaderIOResultF<String, Environment>;

fn reader_of<T: 'static>(value: Result<T, String>) -> ReaderIOResult<Environment, T, String> {
    reader_io_result::from_io_result(io_result::from_fn(move || value))
}

fn shifted_by_environment(value: Result<i32, String>) -> ReaderIOResult<Environment, i32, String> {
    let read = reader_io_result::asks(|environment: Environment| i32::from(environment));
    Program::lift_a2(read, reader_of(value), |offset: i32, n: i32| {
        n.wrapping_add(offset)
    })
}

fn run_reader(
    fa: ReaderIOResult<Environment, i32, String>,
    environment: Environment,
) -> Result<i32, String> {
    reader_io_result::run(fa, environment).run_unsafe()
}

proptest! {
    #[test]
    fn prop_reader_io_result_identity(
        value in prop::result::maybe_ok(any::<i32>(), "[a-z]{1,4}"),
        environment in any::<Environment>(),
    ) {
        let left = identity_law::<Program>(shifted_by_environment(value.clone()));
        let right = shifted_by_environment(value);
        prop_assert_eq!(run_reader(left, environment), run_reader(right, environment));
    }

    #[test]
    fn prop_reader_io_result_homomorphism(
        function in function_strategy(),
        value in any::<i32>(),
        environment in any::<Environment>(),
    ) {
        let (left, right) = homomorphism_law::<Program>(function, value);
        prop_assert_eq!(run_reader(left, environment), run_reader(right, environment));
    }

    #[test]
    fn prop_reader_io_result_interchange(
        u in prop::result::maybe_ok(function_strategy(), "[a-z]{1,4}"),
        value in any::<i32>(),
        environment in any::<Environment>(),
    ) {
        let (left, right) = interchange_law::<Program, _>(|| reader_of(u.clone()), value);
        prop_assert_eq!(run_reader(left, environment), run_reader(right, environment));
    }

    #[test]
    fn prop_reader_io_result_composition(
        u in prop::result::maybe_ok(function_strategy(), "[a-z]{1,4}"),
        v in prop::result::maybe_ok(function_strategy(), "[a-z]{1,4}"),
        w in prop::result::maybe_ok(any::<i32>(), "[a-z]{1,4}"),
        environment in any::<Environment>(),
    ) {
        let (left, right) = composition_law::<Program, _, _, _>(
            || reader_of(u.clone()),
            || reader_of(v.clone()),
            || shifted_by_environment(w.clone()),
        );
        prop_assert_eq!(run_reader(left, environment), run_reader(right, environment));
    }
}

// =============================================================================
// AsyncIOOption
// =============================================================================

#[cfg(feature = "async")]
mod async_io_option_laws {
    use super::*;

    fn run(fa: AsyncIOOption<i32>) -> Option<i32> {
        fa.to_sync().run_unsafe()
    }

    proptest! {
        #[test]
        fn prop_async_io_option_identity(value in any::<Option<i32>>()) {
            prop_assert_eq!(run(identity_law::<AsyncIOOptionF>(AsyncIO::pure(value))), value);
        }

        #[test]
        fn prop_async_io_option_homomorphism(
            function in function_strategy(),
            value in any::<i32>(),
        ) {
            let (left, right) = homomorphism_law::<AsyncIOOptionF>(function, value);
            prop_assert_eq!(run(left), run(right));
        }

        #[test]
        fn prop_async_io_option_interchange(
            u in prop::option::of(function_strategy()),
            value in any::<i32>(),
        ) {
            let (left, right) = interchange_law::<AsyncIOOptionF, _>(|| AsyncIO::pure(u), value);
            prop_assert_eq!(run(left), run(right));
        }

        #[test]
        fn prop_async_io_option_composition(
            u in prop::option::of(function_strategy()),
            v in prop::option::of(function_strategy()),
            w in any::<Option<i32>>(),
        ) {
            let (left, right) = composition_law::<AsyncIOOptionF, _, _, _>(
                || AsyncIO::pure(u),
                || AsyncIO::pure(v),
                || AsyncIO::pure(w),
            );
            prop_assert_eq!(run(left), run(right));
        }
    }
}
