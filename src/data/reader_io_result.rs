//! `ReaderIOResult` - a fallible deferred action that reads an environment.
//!
//! `ReaderIOResult<R, A, E>` is `Reader<R, IOResult<A, E>>`: given an
//! environment it builds an action that may fail. `Of`, `Functor` and
//! `Applicative` come from `Nested<ReaderF<R>, IOResultF<E>>`. `Monad` is
//! written here: each step receives the same environment, and an `Err`
//! stops the chain before the next step is built.
//!
//! # Examples
//!
//! ```rust
//! use kindred::data::reader_io_result::{self, ReaderIOResult};
//!
//! #[derive(Clone)]
//! struct Env {
//!     limit: u32,
//! }
//!
//! let check = |n: u32| -> ReaderIOResult<Env, u32, String> {
//!     reader_io_result::asks(|env: Env| env.limit).flat_map_result(move |limit| {
//!         if n <= limit { Ok(n) } else { Err(format!("{n} exceeds {limit}")) }
//!     })
//! };
//!
//! let program = reader_io_result::flat_map(reader_io_result::ok(3), check);
//! assert_eq!(reader_io_result::run(program, Env { limit: 5 }).run_unsafe(), Ok(3));
//! ```

use tracing::trace;

use super::io::IO;
use super::io_result::{IOResult, IOResultF};
use super::reader::{Reader, ReaderF};
use crate::Args;
use crate::kind::variance::{Contravariant, Covariant, Invariant};
use crate::kind::{Kind, Lift1, TypeList, nat::Three};
use crate::typeclass::{Applicative, Functor, Monad, Nested, Of};

/// A computation reading `R` and producing a deferred `Result<A, E>`.
pub type ReaderIOResult<R, A, E> = Reader<R, IOResult<A, E>>;

/// The kind of `ReaderIOResult`, slots ordered value, error, environment.
///
/// Written out rather than composed: `Compose` shares trailing slots, which
/// would force the error and environment types to coincide.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReaderIOResultKind;

impl Kind for ReaderIOResultKind {
    type Arity = Three;
    type Variance = Args![Invariant, Covariant, Contravariant];
    type Apply<L: TypeList> = Reader<
        <<L::Tail as TypeList>::Tail as TypeList>::Head,
        IOResult<L::Head, <L::Tail as TypeList>::Head>,
    >;
}

/// Dictionary brand for `ReaderIOResult<R, _, E>`.
pub type ReaderIOResultF<E, R> = Lift1<ReaderIOResultKind, Args![E, R]>;

type Layers<E, R> = Nested<ReaderF<R>, IOResultF<E>>;

impl<E: 'static, R: 'static> Of for ReaderIOResultF<E, R> {
    fn of<A: 'static>(value: A) -> ReaderIOResult<R, A, E> {
        Layers::<E, R>::of(value)
    }
}

impl<E: 'static, R: 'static> Functor for ReaderIOResultF<E, R> {
    fn map<A: 'static, B: 'static, Fun>(
        fa: ReaderIOResult<R, A, E>,
        function: Fun,
    ) -> ReaderIOResult<R, B, E>
    where
        Fun: FnMut(A) -> B + Clone + 'static,
    {
        Layers::<E, R>::map(fa, function)
    }
}

impl<E: 'static, R: Clone + 'static> Applicative for ReaderIOResultF<E, R> {
    fn ap<A: 'static, B: 'static, Fab>(
        fa: ReaderIOResult<R, A, E>,
        fab: ReaderIOResult<R, Fab, E>,
    ) -> ReaderIOResult<R, B, E>
    where
        Fab: FnOnce(A) -> B + 'static,
    {
        Layers::<E, R>::ap(fa, fab)
    }

    fn product_many<A, I>(effects: I) -> ReaderIOResult<R, Vec<A>, E>
    where
        A: 'static,
        I: IntoIterator<Item = ReaderIOResult<R, A, E>>,
    {
        Layers::<E, R>::product_many(effects)
    }
}

impl<E: 'static, R: Clone + 'static> Monad for ReaderIOResultF<E, R> {
    fn flat_map<A: 'static, B: 'static, Fun>(
        fa: ReaderIOResult<R, A, E>,
        mut function: Fun,
    ) -> ReaderIOResult<R, B, E>
    where
        Fun: FnMut(A) -> ReaderIOResult<R, B, E> + Clone + 'static,
    {
        Reader::new(move |environment: R| {
            let next_environment = environment.clone();
            fa.run(environment).flat_map(move |result| match result {
                Ok(a) => function(a).run(next_environment),
                Err(e) => {
                    trace!("ReaderIOResult flat_map short-circuited on Err");
                    IO::pure(Err(e))
                }
            })
        })
    }
}

impl<R: 'static, A: 'static, E: 'static> Reader<R, IOResult<A, E>> {
    /// Continues with a plain `Result`-returning step, without touching the
    /// environment.
    pub fn flat_map_result<B, F>(self, function: F) -> ReaderIOResult<R, B, E>
    where
        B: 'static,
        F: FnOnce(A) -> Result<B, E> + 'static,
    {
        self.fmap(move |action| action.fmap(move |result| result.and_then(function)))
    }
}

// =============================================================================
// Free functions
// =============================================================================

/// Succeeds with `value`, ignoring the environment.
pub fn ok<R: 'static, A: 'static, E: 'static>(value: A) -> ReaderIOResult<R, A, E> {
    ReaderIOResultF::<E, R>::of(value)
}

/// Fails with `error`, ignoring the environment.
pub fn err<R: 'static, A: 'static, E: 'static>(error: E) -> ReaderIOResult<R, A, E> {
    Reader::new(move |_| IO::pure(Err(error)))
}

/// Succeeds with the environment itself.
pub fn ask<R: 'static, E: 'static>() -> ReaderIOResult<R, R, E> {
    Reader::new(|environment| IO::pure(Ok(environment)))
}

/// Succeeds with one projection of the environment.
pub fn asks<R, A, E, F>(projection: F) -> ReaderIOResult<R, A, E>
where
    R: 'static,
    A: 'static,
    E: 'static,
    F: FnOnce(R) -> A + 'static,
{
    Reader::new(move |environment| IO::pure(Ok(projection(environment))))
}

/// Lifts an action that does not read the environment.
pub fn from_io_result<R: 'static, A: 'static, E: 'static>(
    action: IOResult<A, E>,
) -> ReaderIOResult<R, A, E> {
    Reader::new(move |_| action)
}

/// Supplies the environment, leaving the action to run.
pub fn run<R: 'static, A: 'static, E: 'static>(
    fa: ReaderIOResult<R, A, E>,
    environment: R,
) -> IOResult<A, E> {
    fa.run(environment)
}

/// See [`Functor::map`].
pub fn map<R, A, B, E, Fun>(fa: ReaderIOResult<R, A, E>, function: Fun) -> ReaderIOResult<R, B, E>
where
    R: 'static,
    A: 'static,
    B: 'static,
    E: 'static,
    Fun: FnMut(A) -> B + Clone + 'static,
{
    ReaderIOResultF::<E, R>::map(fa, function)
}

/// See [`Applicative::ap`].
pub fn ap<R, A, B, E, Fab>(
    fa: ReaderIOResult<R, A, E>,
    fab: ReaderIOResult<R, Fab, E>,
) -> ReaderIOResult<R, B, E>
where
    R: Clone + 'static,
    A: 'static,
    B: 'static,
    E: 'static,
    Fab: FnOnce(A) -> B + 'static,
{
    ReaderIOResultF::<E, R>::ap(fa, fab)
}

/// See [`Monad::flat_map`].
pub fn flat_map<R, A, B, E, Fun>(
    fa: ReaderIOResult<R, A, E>,
    function: Fun,
) -> ReaderIOResult<R, B, E>
where
    R: Clone + 'static,
    A: 'static,
    B: 'static,
    E: 'static,
    Fun: FnMut(A) -> ReaderIOResult<R, B, E> + Clone + 'static,
{
    ReaderIOResultF::<E, R>::flat_map(fa, function)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::{arity, variance::Variance, variance_of};
    use rstest::rstest;
    use static_assertions::assert_type_eq_all;

    assert_type_eq_all!(
        <ReaderIOResultF<String, u8> as crate::kind::Hkt1>::Out<i32>,
        Reader<u8, IO<Result<i32, String>>>
    );

    #[test]
    fn descriptor() {
        assert_eq!(arity::<ReaderIOResultKind>(), 3);
        assert_eq!(variance_of::<ReaderIOResultKind>(2), Some(Variance::Contravariant));
    }

    #[rstest]
    #[case(1, Ok(11))]
    #[case(5, Ok(15))]
    fn map_sees_environment(#[case] environment: i32, #[case] expected: Result<i32, ()>) {
        let plus_ten = map(ask::<i32, ()>(), |n: i32| n + 10);
        assert_eq!(run(plus_ten, environment).run_unsafe(), expected);
    }

    #[test]
    fn flat_map_threads_environment() {
        let program = flat_map(asks(|env: (i32, i32)| env.0), |first: i32| {
            asks(move |env: (i32, i32)| first * env.1)
        });
        assert_eq!(run::<_, _, ()>(program, (3, 4)).run_unsafe(), Ok(12));
    }

    #[test]
    fn err_stops_before_next_step() {
        let failed = err::<(), i32, &'static str>("boom");
        let program = flat_map(failed, |_: i32| -> ReaderIOResult<(), i32, &'static str> {
            panic!("continuation must not run")
        });
        assert_eq!(run(program, ()).run_unsafe(), Err("boom"));
    }

    #[test]
    fn lift_a2_reads_once_per_side() {
        let sum = ReaderIOResultF::<(), String>::lift_a2(
            asks(|text: String| text.len()),
            from_io_result(IO::pure(Ok(2))),
            |a: usize, b: usize| a + b,
        );
        assert_eq!(run(sum, "abc".to_string()).run_unsafe(), Ok(5));
    }
}
