//! Branching on both sides of a binary effect.
//!
//! `bi_flat_map` continues from either the left (success) or the right
//! (failure) payload, each branch producing a new effect. Recovery from an
//! error is the special case where the success branch just re-wraps:
//!
//! ```text
//! F::or_else(fae, recover) == F::bi_flat_map(fae, F::of2, recover)
//! ```

use super::{BiFunctor, Of2};

/// A type class for binary effects that can continue from either side.
///
/// # Examples
///
/// ```rust
/// use kindred::data::result::ResultBi;
/// use kindred::typeclass::BiFlatMap;
///
/// let failed: Result<i32, String> = Err("7".to_string());
/// let recovered = ResultBi::or_else(failed, |e: String| e.parse::<i32>().map_err(|_| ()));
/// assert_eq!(recovered, Ok(7));
/// ```
pub trait BiFlatMap: Of2 + BiFunctor {
    /// Continues with `on_left` for the left payload, `on_right` for the right.
    fn bi_flat_map<A, E, B, E2, OnLeft, OnRight>(
        fae: Self::Out2<A, E>,
        on_left: OnLeft,
        on_right: OnRight,
    ) -> Self::Out2<B, E2>
    where
        A: 'static,
        E: 'static,
        B: 'static,
        E2: 'static,
        OnLeft: FnOnce(A) -> Self::Out2<B, E2> + 'static,
        OnRight: FnOnce(E) -> Self::Out2<B, E2> + 'static;

    /// Recovers from the right payload, leaving a left payload untouched.
    fn or_else<A, E, E2, Recover>(fae: Self::Out2<A, E>, recover: Recover) -> Self::Out2<A, E2>
    where
        A: 'static,
        E: 'static,
        E2: 'static,
        Recover: FnOnce(E) -> Self::Out2<A, E2> + 'static,
    {
        Self::bi_flat_map::<A, E, A, E2, _, Recover>(fae, Self::of2::<A, E2>, recover)
    }
}
