//! Monad type class - sequencing dependent computations.
//!
//! `flat_map` runs an effect and feeds its result to a function producing the
//! next effect. Whether the function runs at all is up to the instance: every
//! instance in this crate short-circuits on its failure case (`None`, `Err`,
//! an `Err` produced by an IO, ...) without calling the continuation.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! M::flat_map(M::of(a), f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! M::flat_map(m, M::of) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! M::flat_map(M::flat_map(m, f), g) == M::flat_map(m, |x| M::flat_map(f(x), g))
//! ```

use super::Applicative;

/// A type class for effects whose next step may depend on the previous result.
///
/// # Examples
///
/// ```rust
/// use kindred::data::option::OptionF;
/// use kindred::typeclass::Monad;
///
/// let half = |n: i32| if n % 2 == 0 { Some(n / 2) } else { None };
/// assert_eq!(OptionF::flat_map(Some(8), half), Some(4));
/// assert_eq!(OptionF::flat_map(Some(3), half), None);
/// assert_eq!(OptionF::flatten(Some(Some(1))), Some(1));
/// ```
pub trait Monad: Applicative {
    /// Runs `fa`, then the effect `function` builds from its result.
    fn flat_map<A: 'static, B: 'static, Fun>(fa: Self::Out<A>, function: Fun) -> Self::Out<B>
    where
        Fun: FnMut(A) -> Self::Out<B> + Clone + 'static;

    /// Removes one layer of nesting.
    fn flatten<A: 'static>(ffa: Self::Out<Self::Out<A>>) -> Self::Out<A> {
        Self::flat_map::<Self::Out<A>, A, _>(ffa, |fa| fa)
    }

    /// `flat_map` with the function supplied first.
    fn flat_mapping<A, B, Fun>(
        function: Fun,
    ) -> impl FnMut(Self::Out<A>) -> Self::Out<B> + Clone + 'static
    where
        A: 'static,
        B: 'static,
        Fun: FnMut(A) -> Self::Out<B> + Clone + 'static,
    {
        move |fa| Self::flat_map::<A, B, Fun>(fa, function.clone())
    }
}
