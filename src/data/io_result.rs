//! `IOResult` - a deferred action that may fail.
//!
//! `IOResult<A, E>` is `IO<Result<A, E>>`. Its kind is
//! `Compose<IOKind, ResultKind>`, and most dictionaries come from composing
//! the layers:
//!
//! | dictionary                  | source                                  |
//! |-----------------------------|-----------------------------------------|
//! | `Of`, `Functor`, `Applicative` | `Nested<IOF, ResultF<E>>`            |
//! | `BiFunctor`, `Flip`         | `BiNested<IOF, ResultBi>`               |
//! | `Monad`, `BiFlatMap`        | written here: an `Err` stops the chain  |
//! | `Foldable`, `Traversable`, `To` | run the action, then use `Result`'s |
//! | `SemiAlternative`           | written here: fallback only on `Err`    |
//!
//! `Foldable`, `Traversable` and `To` produce plain values (or an effect of
//! another applicative), so they have to run the action when called.
//! Everything else stays deferred until [`IO::run_unsafe`].
//!
//! # Examples
//!
//! ```rust
//! use kindred::data::io_result::{self, IOResult};
//!
//! let lookup = |id: u32| -> IOResult<String, String> {
//!     if id == 1 {
//!         io_result::ok("alice".to_string())
//!     } else {
//!         io_result::err(format!("no user {id}"))
//!     }
//! };
//!
//! let found = io_result::flat_map(io_result::ok(1), lookup);
//! let greeting = io_result::map(found, |name: String| format!("hi {name}"));
//! assert_eq!(greeting.run_unsafe(), Ok("hi alice".to_string()));
//!
//! let missing = io_result::flat_map(io_result::ok(2), lookup);
//! assert_eq!(missing.run_unsafe(), Err("no user 2".to_string()));
//! ```

use tracing::trace;

use super::io::{IO, IOF, IOKind};
use super::result::{ResultBi, ResultF, ResultKind};
use crate::Args;
use crate::kind::{Compose, Lift1, Lift2};
use crate::typeclass::{
    Applicative, BiFlatMap, BiFunctor, BiNested, Flip, Foldable, Functor, Monad, Nested, Of, Of2,
    SemiAlternative, To, Traversable,
};

/// A deferred action producing `Result<A, E>`.
pub type IOResult<A, E> = IO<Result<A, E>>;

/// The kind of `IOResult<A, E>`.
pub type IOResultKind = Compose<IOKind, ResultKind>;

/// Unary brand: `IOResult<_, E>`.
pub type IOResultF<E> = Lift1<IOResultKind, Args![E]>;

/// Binary brand: `IOResult<_, _>`.
pub type IOResultBi = Lift2<IOResultKind>;

type Layers<E> = Nested<IOF, ResultF<E>>;
type BiLayers = BiNested<IOF, ResultBi>;

// =============================================================================
// Unary dictionaries
// =============================================================================

impl<E: 'static> Of for IOResultF<E> {
    fn of<A: 'static>(value: A) -> IOResult<A, E> {
        Layers::<E>::of(value)
    }
}

impl<E: 'static> Functor for IOResultF<E> {
    fn map<A: 'static, B: 'static, Fun>(fa: IOResult<A, E>, function: Fun) -> IOResult<B, E>
    where
        Fun: FnMut(A) -> B + Clone + 'static,
    {
        Layers::<E>::map(fa, function)
    }
}

impl<E: 'static> Applicative for IOResultF<E> {
    fn ap<A: 'static, B: 'static, Fab>(fa: IOResult<A, E>, fab: IOResult<Fab, E>) -> IOResult<B, E>
    where
        Fab: FnOnce(A) -> B + 'static,
    {
        Layers::<E>::ap(fa, fab)
    }

    fn product_many<A, I>(effects: I) -> IOResult<Vec<A>, E>
    where
        A: 'static,
        I: IntoIterator<Item = IOResult<A, E>>,
    {
        Layers::<E>::product_many(effects)
    }
}

impl<E: 'static> Monad for IOResultF<E> {
    fn flat_map<A: 'static, B: 'static, Fun>(
        fa: IOResult<A, E>,
        mut function: Fun,
    ) -> IOResult<B, E>
    where
        Fun: FnMut(A) -> IOResult<B, E> + Clone + 'static,
    {
        fa.flat_map(move |result| match result {
            Ok(a) => function(a),
            Err(e) => {
                trace!("IOResult flat_map short-circuited on Err");
                IO::pure(Err(e))
            }
        })
    }
}

impl<E: 'static> Foldable for IOResultF<E> {
    fn reduce<A: 'static, B, Fun>(fa: IOResult<A, E>, initial: B, function: Fun) -> B
    where
        Fun: FnMut(B, A) -> B,
    {
        ResultF::<E>::reduce(fa.run_unsafe(), initial, function)
    }
}

impl<E: 'static> Traversable for IOResultF<E> {
    fn traverse<G, A, B, Fun>(fa: IOResult<A, E>, function: Fun) -> G::Out<IOResult<B, E>>
    where
        G: Applicative,
        A: 'static,
        B: 'static,
        Fun: FnMut(A) -> G::Out<B> + Clone + 'static,
    {
        let traversed = ResultF::<E>::traverse::<G, A, B, Fun>(fa.run_unsafe(), function);
        G::map::<Result<B, E>, IOResult<B, E>, _>(traversed, IO::pure)
    }
}

impl<E: 'static> SemiAlternative for IOResultF<E> {
    fn or_else<A, Fallback>(fa: IOResult<A, E>, fallback: Fallback) -> IOResult<A, E>
    where
        A: 'static,
        Fallback: FnOnce() -> IOResult<A, E> + 'static,
    {
        fa.flat_map(move |result| match result {
            Ok(a) => IO::pure(Ok(a)),
            Err(_) => fallback(),
        })
    }
}

impl<E: 'static> To for IOResultF<E> {
    type Fallback = E;

    fn get_or_else<A, Fun>(fa: IOResult<A, E>, function: Fun) -> A
    where
        A: 'static,
        Fun: FnOnce(E) -> A,
    {
        ResultF::<E>::get_or_else(fa.run_unsafe(), function)
    }
}

// =============================================================================
// Binary dictionaries
// =============================================================================

impl Of2 for IOResultBi {
    fn of2<A: 'static, E: 'static>(value: A) -> IOResult<A, E> {
        IO::pure(Ok(value))
    }
}

impl BiFunctor for IOResultBi {
    fn bimap<A, B, C, D, First, Second>(
        fac: IOResult<A, C>,
        first: First,
        second: Second,
    ) -> IOResult<B, D>
    where
        A: 'static,
        B: 'static,
        C: 'static,
        D: 'static,
        First: FnMut(A) -> B + Clone + 'static,
        Second: FnMut(C) -> D + Clone + 'static,
    {
        BiLayers::bimap(fac, first, second)
    }
}

impl Flip for IOResultBi {
    fn flip<A: 'static, E: 'static>(fae: IOResult<A, E>) -> IOResult<E, A> {
        BiLayers::flip(fae)
    }
}

impl BiFlatMap for IOResultBi {
    fn bi_flat_map<A, E, B, E2, OnLeft, OnRight>(
        fae: IOResult<A, E>,
        on_left: OnLeft,
        on_right: OnRight,
    ) -> IOResult<B, E2>
    where
        A: 'static,
        E: 'static,
        B: 'static,
        E2: 'static,
        OnLeft: FnOnce(A) -> IOResult<B, E2> + 'static,
        OnRight: FnOnce(E) -> IOResult<B, E2> + 'static,
    {
        fae.flat_map(move |result| match result {
            Ok(a) => on_left(a),
            Err(e) => on_right(e),
        })
    }
}

// =============================================================================
// Free functions
// =============================================================================

/// An action that succeeds with `value`.
pub fn ok<A: 'static, E: 'static>(value: A) -> IOResult<A, E> {
    IOResultBi::of2(value)
}

/// An action that fails with `error`.
pub fn err<A: 'static, E: 'static>(error: E) -> IOResult<A, E> {
    IO::pure(Err(error))
}

/// An action running `action` and taking its `Result`.
pub fn from_fn<A, E, F>(action: F) -> IOResult<A, E>
where
    A: 'static,
    E: 'static,
    F: FnOnce() -> Result<A, E> + 'static,
{
    IO::new(action)
}

/// See [`Functor::map`].
pub fn map<A, B, E, Fun>(fa: IOResult<A, E>, function: Fun) -> IOResult<B, E>
where
    A: 'static,
    B: 'static,
    E: 'static,
    Fun: FnMut(A) -> B + Clone + 'static,
{
    IOResultF::<E>::map(fa, function)
}

/// Maps the error. See [`BiFunctor::map_right`].
pub fn map_err<A, E, E2, Fun>(fa: IOResult<A, E>, function: Fun) -> IOResult<A, E2>
where
    A: 'static,
    E: 'static,
    E2: 'static,
    Fun: FnMut(E) -> E2 + Clone + 'static,
{
    IOResultBi::map_right(fa, function)
}

/// See [`BiFunctor::bimap`].
pub fn bimap<A, B, E, E2, First, Second>(
    fa: IOResult<A, E>,
    first: First,
    second: Second,
) -> IOResult<B, E2>
where
    A: 'static,
    B: 'static,
    E: 'static,
    E2: 'static,
    First: FnMut(A) -> B + Clone + 'static,
    Second: FnMut(E) -> E2 + Clone + 'static,
{
    IOResultBi::bimap(fa, first, second)
}

/// See [`Flip::flip`].
pub fn flip<A: 'static, E: 'static>(fa: IOResult<A, E>) -> IOResult<E, A> {
    IOResultBi::flip(fa)
}

/// See [`Applicative::ap`].
pub fn ap<A, B, E, Fab>(fa: IOResult<A, E>, fab: IOResult<Fab, E>) -> IOResult<B, E>
where
    A: 'static,
    B: 'static,
    E: 'static,
    Fab: FnOnce(A) -> B + 'static,
{
    IOResultF::<E>::ap(fa, fab)
}

/// See [`Monad::flat_map`].
pub fn flat_map<A, B, E, Fun>(fa: IOResult<A, E>, function: Fun) -> IOResult<B, E>
where
    A: 'static,
    B: 'static,
    E: 'static,
    Fun: FnMut(A) -> IOResult<B, E> + Clone + 'static,
{
    IOResultF::<E>::flat_map(fa, function)
}

/// See [`BiFlatMap::bi_flat_map`].
pub fn bi_flat_map<A, E, B, E2, OnLeft, OnRight>(
    fa: IOResult<A, E>,
    on_left: OnLeft,
    on_right: OnRight,
) -> IOResult<B, E2>
where
    A: 'static,
    E: 'static,
    B: 'static,
    E2: 'static,
    OnLeft: FnOnce(A) -> IOResult<B, E2> + 'static,
    OnRight: FnOnce(E) -> IOResult<B, E2> + 'static,
{
    IOResultBi::bi_flat_map(fa, on_left, on_right)
}

/// Recovers from an error. See [`BiFlatMap::or_else`].
pub fn recover<A, E, E2, Recover>(fa: IOResult<A, E>, recover: Recover) -> IOResult<A, E2>
where
    A: 'static,
    E: 'static,
    E2: 'static,
    Recover: FnOnce(E) -> IOResult<A, E2> + 'static,
{
    <IOResultBi as BiFlatMap>::or_else(fa, recover)
}

/// See [`SemiAlternative::or`].
pub fn or<A: 'static, E: 'static>(fa: IOResult<A, E>, fb: IOResult<A, E>) -> IOResult<A, E> {
    IOResultF::<E>::or(fa, fb)
}

/// Runs the action. See [`To::get_or_else`].
pub fn get_or_else<A, E, Fun>(fa: IOResult<A, E>, function: Fun) -> A
where
    A: 'static,
    E: 'static,
    Fun: FnOnce(E) -> A,
{
    IOResultF::<E>::get_or_else(fa, function)
}

/// Runs the action. See [`Traversable::traverse`].
pub fn traverse<G, A, B, E, Fun>(fa: IOResult<A, E>, function: Fun) -> G::Out<IOResult<B, E>>
where
    G: Applicative,
    A: 'static,
    B: 'static,
    E: 'static,
    Fun: FnMut(A) -> G::Out<B> + Clone + 'static,
{
    IOResultF::<E>::traverse::<G, A, B, Fun>(fa, function)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::option::OptionF;
    use rstest::rstest;

    #[rstest]
    #[case(ok(2), Ok(4))]
    #[case(err("e"), Err("e"))]
    fn map_doubles_ok(
        #[case] input: IOResult<i32, &'static str>,
        #[case] expected: Result<i32, &'static str>,
    ) {
        assert_eq!(map(input, |n: i32| n * 2).run_unsafe(), expected);
    }

    #[test]
    fn ap_with_failed_function() {
        let function: IOResult<fn(i32) -> i32, &str> = err("no function");
        assert_eq!(ap(ok(1), function).run_unsafe(), Err("no function"));
    }

    #[test]
    fn flip_swaps_sides() {
        assert_eq!(flip(ok::<i32, String>(1)).run_unsafe(), Err(1));
    }

    #[test]
    fn recover_replaces_error() {
        let failed: IOResult<i32, String> = err("5".to_string());
        let recovered = recover(failed, |text: String| from_fn(move || text.parse::<i32>()));
        assert_eq!(recovered.run_unsafe(), Ok(5));
    }

    #[test]
    fn or_keeps_first_success() {
        assert_eq!(or(ok::<_, ()>(1), ok(2)).run_unsafe(), Ok(1));
        assert_eq!(or(err(()), ok(2)).run_unsafe(), Ok(2));
    }

    #[test]
    fn traverse_with_option() {
        let traversed = traverse::<OptionF, _, _, String, _>(ok(3), |n: i32| Some(n + 1));
        assert_eq!(traversed.map(IO::run_unsafe), Some(Ok(4)));
    }

    #[test]
    fn get_or_else_runs_the_action() {
        assert_eq!(get_or_else(err::<usize, _>("four"), |e: &str| e.len()), 4);
        assert_eq!(IOResultF::<String>::get_or(ok(1), 0), 1);
    }
}
