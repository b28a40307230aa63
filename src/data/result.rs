//! `Result` as a kind, with its unary and binary dictionaries.
//!
//! `ResultKind` has two slots, the `Ok` payload first and the error second.
//! It is seen two ways:
//!
//! - [`ResultF<E>`]: one slot abstracted, the error fixed. Carries `Of`,
//!   `Functor`, `Applicative`, `Monad`, `Foldable`, `Traversable`,
//!   `SemiAlternative` and `To`.
//! - [`ResultBi`]: both slots abstracted. Carries `BiFunctor`, `Flip`, `Of2`
//!   and `BiFlatMap`.
//!
//! The unary `map` is not written separately: it is `map_left` of the binary
//! dictionary.
//!
//! ```rust
//! use kindred::data::result;
//!
//! let parsed: Result<i32, String> = result::ok(20);
//! let doubled =
//!     result::flat_map(parsed, |n: i32| if n > 0 { Ok(n * 2) } else { Err("neg".to_string()) });
//! assert_eq!(doubled, Ok(40));
//!
//! let status = result::map_err(result::err::<i32, _>(404), |code: i32| code.to_string());
//! assert_eq!(status, Err("404".to_string()));
//! ```

use tracing::trace;

use crate::Args;
use crate::kind::variance::{Covariant, Invariant};
use crate::kind::{Kind, Lift1, Lift2, TypeList, nat::Two};
use crate::typeclass::{
    Applicative, BiFlatMap, BiFunctor, Flip, Foldable, Functor, Monad, Of, Of2, SemiAlternative, To,
    Traversable,
};

/// The kind of `Result<A, E>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultKind;

impl Kind for ResultKind {
    type Arity = Two;
    type Variance = Args![Invariant, Covariant];
    type Apply<L: TypeList> = Result<L::Head, <L::Tail as TypeList>::Head>;
}

/// Unary brand: `Result<_, E>`.
pub type ResultF<E> = Lift1<ResultKind, Args![E]>;

/// Binary brand: `Result<_, _>`.
pub type ResultBi = Lift2<ResultKind>;

// =============================================================================
// Binary dictionaries
// =============================================================================

impl Of2 for ResultBi {
    fn of2<A: 'static, E: 'static>(value: A) -> Result<A, E> {
        Ok(value)
    }
}

impl BiFunctor for ResultBi {
    fn bimap<A, B, C, D, First, Second>(
        fac: Result<A, C>,
        first: First,
        second: Second,
    ) -> Result<B, D>
    where
        A: 'static,
        B: 'static,
        C: 'static,
        D: 'static,
        First: FnMut(A) -> B + Clone + 'static,
        Second: FnMut(C) -> D + Clone + 'static,
    {
        fac.map(first).map_err(second)
    }
}

impl Flip for ResultBi {
    fn flip<A: 'static, E: 'static>(fae: Result<A, E>) -> Result<E, A> {
        match fae {
            Ok(a) => Err(a),
            Err(e) => Ok(e),
        }
    }
}

impl BiFlatMap for ResultBi {
    fn bi_flat_map<A, E, B, E2, OnLeft, OnRight>(
        fae: Result<A, E>,
        on_left: OnLeft,
        on_right: OnRight,
    ) -> Result<B, E2>
    where
        A: 'static,
        E: 'static,
        B: 'static,
        E2: 'static,
        OnLeft: FnOnce(A) -> Result<B, E2> + 'static,
        OnRight: FnOnce(E) -> Result<B, E2> + 'static,
    {
        match fae {
            Ok(a) => on_left(a),
            Err(e) => on_right(e),
        }
    }
}

// =============================================================================
// Unary dictionaries
// =============================================================================

impl<E: 'static> Of for ResultF<E> {
    fn of<A: 'static>(value: A) -> Result<A, E> {
        Ok(value)
    }
}

impl<E: 'static> Functor for ResultF<E> {
    fn map<A: 'static, B: 'static, Fun>(fa: Result<A, E>, function: Fun) -> Result<B, E>
    where
        Fun: FnMut(A) -> B + Clone + 'static,
    {
        ResultBi::map_left::<A, B, E, Fun>(fa, function)
    }
}

impl<E: 'static> Applicative for ResultF<E> {
    /// An error in `fab` wins over an error in `fa`.
    fn ap<A: 'static, B: 'static, Fab>(fa: Result<A, E>, fab: Result<Fab, E>) -> Result<B, E>
    where
        Fab: FnOnce(A) -> B + 'static,
    {
        fab.and_then(|function| fa.map(function))
    }
}

impl<E: 'static> Monad for ResultF<E> {
    fn flat_map<A: 'static, B: 'static, Fun>(fa: Result<A, E>, function: Fun) -> Result<B, E>
    where
        Fun: FnMut(A) -> Result<B, E> + Clone + 'static,
    {
        if fa.is_err() {
            trace!("flat_map on Err, continuation skipped");
        }
        fa.and_then(function)
    }
}

impl<E: 'static> Foldable for ResultF<E> {
    fn reduce<A: 'static, B, Fun>(fa: Result<A, E>, initial: B, mut function: Fun) -> B
    where
        Fun: FnMut(B, A) -> B,
    {
        match fa {
            Ok(a) => function(initial, a),
            Err(_) => initial,
        }
    }
}

impl<E: 'static> Traversable for ResultF<E> {
    fn traverse<G, A, B, Fun>(fa: Result<A, E>, mut function: Fun) -> G::Out<Result<B, E>>
    where
        G: Applicative,
        A: 'static,
        B: 'static,
        Fun: FnMut(A) -> G::Out<B> + Clone + 'static,
    {
        match fa {
            Ok(a) => G::map::<B, Result<B, E>, _>(function(a), Ok),
            Err(e) => G::of::<Result<B, E>>(Err(e)),
        }
    }
}

impl<E: 'static> SemiAlternative for ResultF<E> {
    fn or_else<A, Fallback>(fa: Result<A, E>, fallback: Fallback) -> Result<A, E>
    where
        A: 'static,
        Fallback: FnOnce() -> Result<A, E> + 'static,
    {
        fa.or_else(|_| fallback())
    }
}

impl<E: 'static> To for ResultF<E> {
    type Fallback = E;

    fn get_or_else<A, Fun>(fa: Result<A, E>, function: Fun) -> A
    where
        A: 'static,
        Fun: FnOnce(E) -> A,
    {
        fa.unwrap_or_else(function)
    }
}

// =============================================================================
// Free functions
// =============================================================================

/// `Ok(value)`.
pub fn ok<A: 'static, E: 'static>(value: A) -> Result<A, E> {
    ResultBi::of2(value)
}

/// `Err(error)`.
pub fn err<A: 'static, E: 'static>(error: E) -> Result<A, E> {
    ResultBi::flip(ResultBi::of2(error))
}

/// See [`Functor::map`].
pub fn map<A, B, E, Fun>(fa: Result<A, E>, function: Fun) -> Result<B, E>
where
    A: 'static,
    B: 'static,
    E: 'static,
    Fun: FnMut(A) -> B + Clone + 'static,
{
    ResultF::<E>::map(fa, function)
}

/// Maps the error. See [`BiFunctor::map_right`].
pub fn map_err<A, E, E2, Fun>(fa: Result<A, E>, function: Fun) -> Result<A, E2>
where
    A: 'static,
    E: 'static,
    E2: 'static,
    Fun: FnMut(E) -> E2 + Clone + 'static,
{
    ResultBi::map_right(fa, function)
}

/// See [`BiFunctor::bimap`].
pub fn bimap<A, B, E, E2, First, Second>(
    fa: Result<A, E>,
    first: First,
    second: Second,
) -> Result<B, E2>
where
    A: 'static,
    B: 'static,
    E: 'static,
    E2: 'static,
    First: FnMut(A) -> B + Clone + 'static,
    Second: FnMut(E) -> E2 + Clone + 'static,
{
    ResultBi::bimap(fa, first, second)
}

/// See [`Monad::flat_map`].
pub fn flat_map<A, B, E, Fun>(fa: Result<A, E>, function: Fun) -> Result<B, E>
where
    A: 'static,
    B: 'static,
    E: 'static,
    Fun: FnMut(A) -> Result<B, E> + Clone + 'static,
{
    ResultF::<E>::flat_map(fa, function)
}

/// See [`Traversable::traverse`].
pub fn traverse<G, A, B, E, Fun>(fa: Result<A, E>, function: Fun) -> G::Out<Result<B, E>>
where
    G: Applicative,
    A: 'static,
    B: 'static,
    E: 'static,
    Fun: FnMut(A) -> G::Out<B> + Clone + 'static,
{
    ResultF::<E>::traverse::<G, A, B, Fun>(fa, function)
}

/// See [`BiFlatMap::or_else`].
pub fn recover<A, E, E2, Recover>(fa: Result<A, E>, recover: Recover) -> Result<A, E2>
where
    A: 'static,
    E: 'static,
    E2: 'static,
    Recover: FnOnce(E) -> Result<A, E2> + 'static,
{
    <ResultBi as BiFlatMap>::or_else(fa, recover)
}

/// See [`To::get_or_else`].
pub fn get_or_else<A, E, Fun>(fa: Result<A, E>, function: Fun) -> A
where
    A: 'static,
    E: 'static,
    Fun: FnOnce(E) -> A,
{
    ResultF::<E>::get_or_else(fa, function)
}
