//! Choice between effects: [`SemiAlternative`] and its empty element [`Zero`].
//!
//! `or_else` keeps the first effect when it succeeds and otherwise falls back
//! to a lazily built second one. The fallback is a thunk, so a successful
//! first effect never pays for building the second.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! F::or(F::or(x, y), z) == F::or(x, F::or(y, z))
//! ```
//!
//! ## Identity (when the dictionary also has `Zero`)
//!
//! ```text
//! F::or(F::zero(), x) == x
//! F::or(x, F::zero()) == x
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::data::option::OptionF;
//! use kindred::typeclass::{SemiAlternative, Zero};
//!
//! assert_eq!(OptionF::or(None, Some(2)), Some(2));
//! assert_eq!(OptionF::or(Some(1), Some(2)), Some(1));
//! assert_eq!(OptionF::or(OptionF::zero(), Some(2)), Some(2));
//! ```

use super::Functor;
use crate::kind::Hkt1;

/// The empty effect: `None`, the empty `Vec`, ...
pub trait Zero: Hkt1 {
    /// The effect with no payload.
    fn zero<A: 'static>() -> Self::Out<A>;
}

/// A type class for effects with a fallback.
pub trait SemiAlternative: Functor {
    /// `fa` if it succeeded, otherwise the effect built by `fallback`.
    fn or_else<A, Fallback>(fa: Self::Out<A>, fallback: Fallback) -> Self::Out<A>
    where
        A: 'static,
        Fallback: FnOnce() -> Self::Out<A> + 'static;

    /// `or_else` with an already built fallback.
    fn or<A: 'static>(fa: Self::Out<A>, fb: Self::Out<A>) -> Self::Out<A> {
        Self::or_else::<A, _>(fa, move || fb)
    }
}
