//! `AsyncIO` - deferred asynchronous effects.
//!
//! An `AsyncIO<A>` holds a thunk that builds a future producing `A`. The
//! thunk is not called, and no future exists, until the action is run with
//! [`AsyncIO::run_async`] (or [`AsyncIO::to_sync`] at a synchronous edge).
//!
//! Futures are boxed as [`LocalBoxFuture`]: dictionaries are generic over
//! every payload type, so no `Send` bound is placed on the payload.
//!
//! # Examples
//!
//! ```rust
//! use kindred::data::async_io::AsyncIO;
//!
//! let action = AsyncIO::pure(10)
//!     .fmap(|n| n * 2)
//!     .flat_map(|n| AsyncIO::new(move || async move { n + 1 }));
//! assert_eq!(action.to_sync().run_unsafe(), 21);
//! ```
//!
//! Timers come from Tokio, so [`AsyncIO::delay`] and [`AsyncIO::timeout`]
//! must be awaited inside a Tokio runtime:
//!
//! ```rust,ignore
//! use kindred::data::async_io::AsyncIO;
//! use std::time::Duration;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let slow = AsyncIO::delay(Duration::from_secs(10)).timeout(Duration::from_millis(10));
//!     assert_eq!(slow.run_async().await, None);
//! }
//! ```

use std::fmt;
use std::future::Future;
use std::time::Duration;

use futures::FutureExt;
use futures::future::LocalBoxFuture;

use super::io::IO;
use crate::Args;
use crate::kind::variance::Covariant;
use crate::kind::{Kind, Lift1, TypeList, nat::One};
use crate::typeclass::{Applicative, Functor, Monad, Of};

/// A deferred asynchronous computation producing `A`.
pub struct AsyncIO<A> {
    run_async_io: Box<dyn FnOnce() -> LocalBoxFuture<'static, A>>,
}

// =============================================================================
// Constructors
// =============================================================================

impl<A: 'static> AsyncIO<A> {
    /// Wraps a closure building a future. Neither runs until the action does.
    pub fn new<F, Fut>(action: F) -> Self
    where
        F: FnOnce() -> Fut + 'static,
        Fut: Future<Output = A> + 'static,
    {
        Self {
            run_async_io: Box::new(move || action().boxed_local()),
        }
    }

    /// Wraps a future that has not been polled yet.
    pub fn from_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = A> + 'static,
    {
        Self {
            run_async_io: Box::new(move || future.boxed_local()),
        }
    }

    /// An action that returns `value` and does nothing else.
    pub fn pure(value: A) -> Self {
        Self::from_future(futures::future::ready(value))
    }
}

// =============================================================================
// Running
// =============================================================================

impl<A: 'static> AsyncIO<A> {
    /// Runs the action.
    pub async fn run_async(self) -> A {
        (self.run_async_io)().await
    }

    /// An `IO` that drives this action to completion on the current thread.
    ///
    /// Uses a local executor, not a Tokio runtime; actions relying on Tokio
    /// timers must be run with [`AsyncIO::run_async`] instead.
    pub fn to_sync(self) -> IO<A> {
        IO::new(move || futures::executor::block_on(self.run_async()))
    }
}

// =============================================================================
// Combinators
// =============================================================================

impl<A: 'static> AsyncIO<A> {
    /// Transforms the result once the action has run.
    pub fn fmap<B, F>(self, function: F) -> AsyncIO<B>
    where
        F: FnOnce(A) -> B + 'static,
        B: 'static,
    {
        AsyncIO::new(move || async move { function(self.run_async().await) })
    }

    /// Runs this action, then the action `function` builds from its result.
    pub fn flat_map<B, F>(self, function: F) -> AsyncIO<B>
    where
        F: FnOnce(A) -> AsyncIO<B> + 'static,
        B: 'static,
    {
        AsyncIO::new(move || async move {
            let value = self.run_async().await;
            function(value).run_async().await
        })
    }

    /// Runs this action for its effects, then `next`.
    pub fn then<B: 'static>(self, next: AsyncIO<B>) -> AsyncIO<B> {
        self.flat_map(move |_| next)
    }

    /// `Some(result)` if the action finishes within `duration`, else `None`.
    pub fn timeout(self, duration: Duration) -> AsyncIO<Option<A>> {
        AsyncIO::new(move || async move {
            tokio::time::timeout(duration, self.run_async()).await.ok()
        })
    }
}

impl AsyncIO<()> {
    /// An action that sleeps for `duration` on the Tokio timer.
    #[must_use]
    pub fn delay(duration: Duration) -> Self {
        Self::new(move || tokio::time::sleep(duration))
    }
}

impl<A> fmt::Display for AsyncIO<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<AsyncIO>")
    }
}

// =============================================================================
// Dictionaries
// =============================================================================

/// The kind of `AsyncIO<A>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsyncIOKind;

impl Kind for AsyncIOKind {
    type Arity = One;
    type Variance = Args![Covariant];
    type Apply<L: TypeList> = AsyncIO<L::Head>;
}

/// Dictionary brand for `AsyncIO`.
pub type AsyncIOF = Lift1<AsyncIOKind>;

impl Of for AsyncIOF {
    fn of<A: 'static>(value: A) -> AsyncIO<A> {
        AsyncIO::pure(value)
    }
}

impl Functor for AsyncIOF {
    fn map<A: 'static, B: 'static, Fun>(fa: AsyncIO<A>, function: Fun) -> AsyncIO<B>
    where
        Fun: FnMut(A) -> B + Clone + 'static,
    {
        fa.fmap(function)
    }
}

impl Applicative for AsyncIOF {
    /// Awaits `fab` first, then `fa`. No concurrency.
    fn ap<A: 'static, B: 'static, Fab>(fa: AsyncIO<A>, fab: AsyncIO<Fab>) -> AsyncIO<B>
    where
        Fab: FnOnce(A) -> B + 'static,
    {
        fab.flat_map(move |function| fa.fmap(function))
    }

    /// Awaits the actions in order, one after another.
    fn product_many<A, I>(effects: I) -> AsyncIO<Vec<A>>
    where
        A: 'static,
        I: IntoIterator<Item = AsyncIO<A>>,
    {
        let effects: Vec<AsyncIO<A>> = effects.into_iter().collect();
        AsyncIO::new(move || async move {
            let mut results = Vec::with_capacity(effects.len());
            for effect in effects {
                results.push(effect.run_async().await);
            }
            results
        })
    }
}

impl Monad for AsyncIOF {
    fn flat_map<A: 'static, B: 'static, Fun>(fa: AsyncIO<A>, function: Fun) -> AsyncIO<B>
    where
        Fun: FnMut(A) -> AsyncIO<B> + Clone + 'static,
    {
        fa.flat_map(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[tokio::test]
    async fn nothing_runs_before_await() {
        let started = Rc::new(Cell::new(false));
        let flag = started.clone();
        let action = AsyncIO::new(move || {
            flag.set(true);
            async { 1 }
        });
        assert!(!started.get());
        assert_eq!(action.run_async().await, 1);
        assert!(started.get());
    }

    #[tokio::test]
    async fn lift_a2_awaits_in_order() {
        let sum = AsyncIOF::lift_a2(AsyncIO::pure(2), AsyncIO::pure(3), |a: i32, b: i32| a + b);
        assert_eq!(sum.run_async().await, 5);
    }

    #[tokio::test(start_paused = true)]
    async fn timeout_gives_up_on_slow_actions() {
        let slow = AsyncIO::delay(Duration::from_secs(60)).timeout(Duration::from_secs(1));
        assert_eq!(slow.run_async().await, None);

        let fast = AsyncIO::pure(3).timeout(Duration::from_secs(1));
        assert_eq!(fast.run_async().await, Some(3));
    }

    #[test]
    fn to_sync_runs_on_local_executor() {
        let action = AsyncIOF::flat_map(AsyncIO::pure(4), |n: i32| AsyncIO::pure(n * n));
        assert_eq!(action.to_sync().run_unsafe(), 16);
        assert_eq!(AsyncIO::pure(()).to_string(), "<AsyncIO>");
    }
}
