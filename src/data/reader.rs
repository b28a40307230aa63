//! Reader - computations that read an environment.
//!
//! A `Reader<R, A>` wraps a function `R -> A`. Composing readers threads the
//! same environment through every step, which makes it a lightweight form of
//! dependency injection.
//!
//! A `Reader` is single-use: [`Reader::run`] consumes it. The environment is
//! cloned once per step that needs it, so the dictionaries that run more than
//! one step (`Applicative`, `Monad`) require `R: Clone`.
//!
//! The kind lists the result first and the environment second: the result
//! slot is covariant, the environment slot contravariant, as [`Reader::local`]
//! shows.
//!
//! # Examples
//!
//! ```rust
//! use kindred::data::reader::Reader;
//!
//! #[derive(Clone)]
//! struct Config {
//!     port: u16,
//!     host: String,
//! }
//!
//! let address = Reader::asks(|config: Config| config.host)
//!     .flat_map(|host| Reader::asks(move |config: Config| format!("{host}:{}", config.port)));
//!
//! let config = Config { port: 8080, host: "localhost".to_string() };
//! assert_eq!(address.run(config), "localhost:8080");
//! ```

use crate::Args;
use crate::kind::variance::{Contravariant, Covariant};
use crate::kind::{Kind, Lift1, TypeList, nat::Two};
use crate::typeclass::{Applicative, Functor, Monad, Of};

/// A computation producing `A` from an environment `R`.
///
/// # Laws
///
/// - Ask retrieval: `Reader::ask().run(r) == r`
/// - Local identity: `m.local(|r| r) == m`
pub struct Reader<R, A> {
    run_function: Box<dyn FnOnce(R) -> A>,
}

impl<R: 'static, A: 'static> Reader<R, A> {
    /// Wraps `function`.
    pub fn new<F>(function: F) -> Self
    where
        F: FnOnce(R) -> A + 'static,
    {
        Self {
            run_function: Box::new(function),
        }
    }

    /// Runs the computation with `environment`.
    pub fn run(self, environment: R) -> A {
        (self.run_function)(environment)
    }

    /// Ignores the environment and returns `value`.
    pub fn pure(value: A) -> Self {
        Self::new(move |_| value)
    }

    /// Reads one projection of the environment.
    pub fn asks<F>(projection: F) -> Self
    where
        F: FnOnce(R) -> A + 'static,
    {
        Self::new(projection)
    }

    /// Transforms the result.
    pub fn fmap<B, F>(self, function: F) -> Reader<R, B>
    where
        F: FnOnce(A) -> B + 'static,
        B: 'static,
    {
        Reader::new(move |environment| function(self.run(environment)))
    }

    /// Runs this reader, then the reader `function` builds from its result,
    /// both against the same environment.
    pub fn flat_map<B, F>(self, function: F) -> Reader<R, B>
    where
        F: FnOnce(A) -> Reader<R, B> + 'static,
        B: 'static,
        R: Clone,
    {
        Reader::new(move |environment: R| {
            let value = self.run(environment.clone());
            function(value).run(environment)
        })
    }

    /// Runs this reader against an environment derived from a wider one.
    ///
    /// ```rust
    /// use kindred::data::reader::Reader;
    ///
    /// let length: Reader<String, usize> = Reader::asks(|text: String| text.len());
    /// let from_number = length.local(|n: u32| n.to_string());
    /// assert_eq!(from_number.run(12345), 5);
    /// ```
    pub fn local<R2, F>(self, modify: F) -> Reader<R2, A>
    where
        R2: 'static,
        F: FnOnce(R2) -> R + 'static,
    {
        Reader::new(move |environment| self.run(modify(environment)))
    }
}

impl<R: 'static> Reader<R, R> {
    /// The environment itself.
    pub fn ask() -> Self {
        Self::new(|environment| environment)
    }
}

/// The kind of `Reader<R, A>`: result first, environment second.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReaderKind;

impl Kind for ReaderKind {
    type Arity = Two;
    type Variance = Args![Covariant, Contravariant];
    type Apply<L: TypeList> = Reader<<L::Tail as TypeList>::Head, L::Head>;
}

/// Dictionary brand for `Reader<R, _>`.
pub type ReaderF<R> = Lift1<ReaderKind, Args![R]>;

impl<R: 'static> Of for ReaderF<R> {
    fn of<A: 'static>(value: A) -> Reader<R, A> {
        Reader::pure(value)
    }
}

impl<R: 'static> Functor for ReaderF<R> {
    fn map<A: 'static, B: 'static, Fun>(fa: Reader<R, A>, function: Fun) -> Reader<R, B>
    where
        Fun: FnMut(A) -> B + Clone + 'static,
    {
        fa.fmap(function)
    }
}

impl<R: Clone + 'static> Applicative for ReaderF<R> {
    fn ap<A: 'static, B: 'static, Fab>(fa: Reader<R, A>, fab: Reader<R, Fab>) -> Reader<R, B>
    where
        Fab: FnOnce(A) -> B + 'static,
    {
        fab.flat_map(move |function| fa.fmap(function))
    }

    fn product_many<A, I>(effects: I) -> Reader<R, Vec<A>>
    where
        A: 'static,
        I: IntoIterator<Item = Reader<R, A>>,
    {
        let effects: Vec<Reader<R, A>> = effects.into_iter().collect();
        Reader::new(move |environment: R| {
            effects
                .into_iter()
                .map(|reader| reader.run(environment.clone()))
                .collect()
        })
    }
}

impl<R: Clone + 'static> Monad for ReaderF<R> {
    fn flat_map<A: 'static, B: 'static, Fun>(fa: Reader<R, A>, function: Fun) -> Reader<R, B>
    where
        Fun: FnMut(A) -> Reader<R, B> + Clone + 'static,
    {
        fa.flat_map(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(42)]
    fn ask_returns_environment(#[case] environment: i32) {
        assert_eq!(Reader::ask().run(environment), environment);
    }

    #[test]
    fn lift_a2_shares_environment() {
        let doubled = Reader::asks(|n: i32| n * 2);
        let squared = Reader::asks(|n: i32| n * n);
        let combined = ReaderF::<i32>::lift_a2(doubled, squared, |a: i32, b: i32| a + b);
        assert_eq!(combined.run(3), 15);
    }

    #[test]
    fn local_identity() {
        let reader = Reader::asks(|text: String| text.to_uppercase()).local(|text: String| text);
        assert_eq!(reader.run("abc".to_string()), "ABC");
    }

    #[test]
    fn of_ignores_environment() {
        assert_eq!(ReaderF::<String>::of(7).run("unused".to_string()), 7);
    }
}
