//! IO - deferred synchronous effects.
//!
//! An `IO<A>` describes a computation producing `A`. Nothing runs until
//! [`IO::run_unsafe`] is called, and building, mapping or chaining an `IO`
//! never runs anything either.
//!
//! # Examples
//!
//! ```rust
//! use kindred::data::io::IO;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let executed = Rc::new(Cell::new(false));
//! let flag = executed.clone();
//!
//! let io = IO::new(move || {
//!     flag.set(true);
//!     20
//! })
//! .fmap(|n| n * 2)
//! .flat_map(|n| IO::pure(n + 2));
//!
//! assert!(!executed.get());
//! assert_eq!(io.run_unsafe(), 42);
//! assert!(executed.get());
//! ```

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::time::Duration;

use tracing::warn;

use crate::Args;
use crate::error::Panicked;
use crate::kind::variance::Covariant;
use crate::kind::{Kind, Lift1, TypeList, nat::One};
use crate::typeclass::{Applicative, Functor, Monad, Of};

/// A deferred computation producing `A`.
///
/// # Monad Laws
///
/// 1. **Left Identity**: `IO::pure(a).flat_map(f) == f(a)`
/// 2. **Right Identity**: `m.flat_map(IO::pure) == m`
/// 3. **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
///
/// (equality meaning: same result and same effects when run)
pub struct IO<A> {
    run_io: Box<dyn FnOnce() -> A>,
}

impl<A: 'static> IO<A> {
    /// Wraps `action` without running it.
    pub fn new<F>(action: F) -> Self
    where
        F: FnOnce() -> A + 'static,
    {
        Self {
            run_io: Box::new(action),
        }
    }

    /// An action that returns `value` and does nothing else.
    pub fn pure(value: A) -> Self {
        Self::new(move || value)
    }

    /// Runs the action.
    ///
    /// Named to flag that this is where effects happen; call it at the edge
    /// of the program.
    pub fn run_unsafe(self) -> A {
        (self.run_io)()
    }

    /// Transforms the result once the action has run.
    pub fn fmap<B, F>(self, function: F) -> IO<B>
    where
        F: FnOnce(A) -> B + 'static,
        B: 'static,
    {
        IO::new(move || function(self.run_unsafe()))
    }

    /// Runs this action, then the action `function` builds from its result.
    pub fn flat_map<B, F>(self, function: F) -> IO<B>
    where
        F: FnOnce(A) -> IO<B> + 'static,
        B: 'static,
    {
        IO::new(move || function(self.run_unsafe()).run_unsafe())
    }

    /// Runs this action for its effects, then `next`.
    pub fn then<B: 'static>(self, next: IO<B>) -> IO<B> {
        self.flat_map(move |_| next)
    }

    /// Runs the action, turning a panic into `Err(Panicked)`.
    ///
    /// ```rust
    /// use kindred::data::io::IO;
    ///
    /// let fine = IO::pure(1).catch_panic();
    /// assert_eq!(fine.run_unsafe(), Ok(1));
    ///
    /// let broken = IO::new(|| -> i32 { panic!("disk on fire") }).catch_panic();
    /// let error = broken.run_unsafe().unwrap_err();
    /// assert_eq!(error.message, "disk on fire");
    /// ```
    pub fn catch_panic(self) -> IO<Result<A, Panicked>> {
        IO::new(move || {
            catch_unwind(AssertUnwindSafe(|| self.run_unsafe())).map_err(|payload| {
                let panicked = Panicked::from_payload(payload.as_ref());
                warn!(message = %panicked.message, "IO action panicked");
                panicked
            })
        })
    }
}

impl IO<()> {
    /// An action that sleeps the current thread for `duration`.
    pub fn delay(duration: Duration) -> Self {
        IO::new(move || std::thread::sleep(duration))
    }
}

/// The kind of `IO<A>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IOKind;

impl Kind for IOKind {
    type Arity = One;
    type Variance = Args![Covariant];
    type Apply<L: TypeList> = IO<L::Head>;
}

/// Dictionary brand for `IO`.
pub type IOF = Lift1<IOKind>;

impl Of for IOF {
    fn of<A: 'static>(value: A) -> IO<A> {
        IO::pure(value)
    }
}

impl Functor for IOF {
    fn map<A: 'static, B: 'static, Fun>(fa: IO<A>, function: Fun) -> IO<B>
    where
        Fun: FnMut(A) -> B + Clone + 'static,
    {
        fa.fmap(function)
    }
}

impl Applicative for IOF {
    /// Runs `fab` first, then `fa`.
    fn ap<A: 'static, B: 'static, Fab>(fa: IO<A>, fab: IO<Fab>) -> IO<B>
    where
        Fab: FnOnce(A) -> B + 'static,
    {
        fab.flat_map(move |function| fa.fmap(function))
    }

    /// Runs the actions in order, in a loop.
    fn product_many<A, I>(effects: I) -> IO<Vec<A>>
    where
        A: 'static,
        I: IntoIterator<Item = IO<A>>,
    {
        let effects: Vec<IO<A>> = effects.into_iter().collect();
        IO::new(move || effects.into_iter().map(IO::run_unsafe).collect())
    }
}

impl Monad for IOF {
    fn flat_map<A: 'static, B: 'static, Fun>(fa: IO<A>, function: Fun) -> IO<B>
    where
        Fun: FnMut(A) -> IO<B> + Clone + 'static,
    {
        fa.flat_map(function)
    }
}
