//! `AsyncIOOption` - a deferred asynchronous lookup that may find nothing.
//!
//! `AsyncIOOption<A>` is `AsyncIO<Option<A>>`, of kind
//! `Compose<AsyncIOKind, OptionKind>`. `Functor` and `Applicative` are the
//! composed ones (`map_compose`, `ap_compose`); `Monad` and
//! `SemiAlternative` are written here and await the outer action before
//! deciding what comes next.
//!
//! # Examples
//!
//! ```rust
//! use kindred::data::async_io_option;
//!
//! let found =
//!     async_io_option::flat_map(async_io_option::some(2), |n: i32| async_io_option::some(n * 10));
//! assert_eq!(found.to_sync().run_unsafe(), Some(20));
//!
//! let fallback = async_io_option::or(async_io_option::none(), async_io_option::some(1));
//! assert_eq!(fallback.to_sync().run_unsafe(), Some(1));
//! ```

use tracing::trace;

use super::async_io::{AsyncIO, AsyncIOF, AsyncIOKind};
use super::option::{OptionF, OptionKind};
use crate::kind::{Compose, Lift1};
use crate::typeclass::{Applicative, Functor, Monad, Nested, Of, SemiAlternative, Zero};

/// A deferred asynchronous action producing `Option<A>`.
pub type AsyncIOOption<A> = AsyncIO<Option<A>>;

/// The kind of `AsyncIOOption<A>`.
pub type AsyncIOOptionKind = Compose<AsyncIOKind, OptionKind>;

/// Dictionary brand for `AsyncIOOption`.
pub type AsyncIOOptionF = Lift1<AsyncIOOptionKind>;

impl Of for AsyncIOOptionF {
    fn of<A: 'static>(value: A) -> AsyncIOOption<A> {
        AsyncIO::pure(Some(value))
    }
}

impl Zero for AsyncIOOptionF {
    fn zero<A: 'static>() -> AsyncIOOption<A> {
        AsyncIO::pure(None)
    }
}

impl Functor for AsyncIOOptionF {
    fn map<A: 'static, B: 'static, Fun>(fa: AsyncIOOption<A>, function: Fun) -> AsyncIOOption<B>
    where
        Fun: FnMut(A) -> B + Clone + 'static,
    {
        AsyncIOF::map_compose::<OptionF, A, B, Fun>(fa, function)
    }
}

impl Applicative for AsyncIOOptionF {
    fn ap<A: 'static, B: 'static, Fab>(
        fa: AsyncIOOption<A>,
        fab: AsyncIOOption<Fab>,
    ) -> AsyncIOOption<B>
    where
        Fab: FnOnce(A) -> B + 'static,
    {
        AsyncIOF::ap_compose::<OptionF, A, B, Fab>(fa, fab)
    }

    fn product_many<A, I>(effects: I) -> AsyncIOOption<Vec<A>>
    where
        A: 'static,
        I: IntoIterator<Item = AsyncIOOption<A>>,
    {
        Nested::<AsyncIOF, OptionF>::product_many(effects)
    }
}

impl Monad for AsyncIOOptionF {
    fn flat_map<A: 'static, B: 'static, Fun>(
        fa: AsyncIOOption<A>,
        mut function: Fun,
    ) -> AsyncIOOption<B>
    where
        Fun: FnMut(A) -> AsyncIOOption<B> + Clone + 'static,
    {
        fa.flat_map(move |found| match found {
            Some(a) => function(a),
            None => {
                trace!("AsyncIOOption flat_map found None, continuation skipped");
                Self::zero()
            }
        })
    }
}

impl SemiAlternative for AsyncIOOptionF {
    fn or_else<A, Fallback>(fa: AsyncIOOption<A>, fallback: Fallback) -> AsyncIOOption<A>
    where
        A: 'static,
        Fallback: FnOnce() -> AsyncIOOption<A> + 'static,
    {
        fa.flat_map(move |found| match found {
            Some(a) => Self::of(a),
            None => fallback(),
        })
    }
}

// =============================================================================
// Free functions
// =============================================================================

/// An action that finds `value`.
pub fn some<A: 'static>(value: A) -> AsyncIOOption<A> {
    AsyncIOOptionF::of(value)
}

/// An action that finds nothing.
pub fn none<A: 'static>() -> AsyncIOOption<A> {
    AsyncIOOptionF::zero()
}

/// See [`Functor::map`].
pub fn map<A, B, Fun>(fa: AsyncIOOption<A>, function: Fun) -> AsyncIOOption<B>
where
    A: 'static,
    B: 'static,
    Fun: FnMut(A) -> B + Clone + 'static,
{
    AsyncIOOptionF::map(fa, function)
}

/// See [`Applicative::ap`].
pub fn ap<A, B, Fab>(fa: AsyncIOOption<A>, fab: AsyncIOOption<Fab>) -> AsyncIOOption<B>
where
    A: 'static,
    B: 'static,
    Fab: FnOnce(A) -> B + 'static,
{
    AsyncIOOptionF::ap(fa, fab)
}

/// See [`Monad::flat_map`].
pub fn flat_map<A, B, Fun>(fa: AsyncIOOption<A>, function: Fun) -> AsyncIOOption<B>
where
    A: 'static,
    B: 'static,
    Fun: FnMut(A) -> AsyncIOOption<B> + Clone + 'static,
{
    AsyncIOOptionF::flat_map(fa, function)
}

/// See [`SemiAlternative::or_else`].
pub fn or_else<A, Fallback>(fa: AsyncIOOption<A>, fallback: Fallback) -> AsyncIOOption<A>
where
    A: 'static,
    Fallback: FnOnce() -> AsyncIOOption<A> + 'static,
{
    AsyncIOOptionF::or_else(fa, fallback)
}

/// See [`SemiAlternative::or`].
pub fn or<A: 'static>(fa: AsyncIOOption<A>, fb: AsyncIOOption<A>) -> AsyncIOOption<A> {
    AsyncIOOptionF::or(fa, fb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn map_reaches_inner_option() {
        assert_eq!(map(some(2), |n: i32| n + 1).run_async().await, Some(3));
        assert_eq!(map(none(), |n: i32| n + 1).run_async().await, None);
    }

    #[tokio::test]
    async fn ap_needs_both_values() {
        let function: AsyncIOOption<fn(i32) -> i32> = some(|n| n * 3);
        assert_eq!(ap(some(3), function).run_async().await, Some(9));
        assert_eq!(ap(none(), some(|n: i32| n * 3)).run_async().await, None);
    }

    #[tokio::test]
    async fn or_else_only_on_none() {
        assert_eq!(or_else(some(1), || some(2)).run_async().await, Some(1));
        assert_eq!(or_else(none(), || some(2)).run_async().await, Some(2));
    }
}
