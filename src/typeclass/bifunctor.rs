//! BiFunctor type class - mapping over two type parameters.
//!
//! A `BiFunctor` dictionary is written against the two-slot shape
//! [`Hkt2`]: `bimap` turns `F<A, C>` into `F<B, D>`. `map_left` and
//! `map_right` are derived by passing the identity for the other side.
//!
//! For `Result`, the left slot is the `Ok` payload and the right slot the
//! `Err` payload, so `map_left` is the `Functor` map and `map_right` is
//! `map_err`.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! F::bimap(fac, |a| a, |c| c) == fac
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! F::bimap(F::bimap(fac, f1, g1), f2, g2) == F::bimap(fac, |a| f2(f1(a)), |c| g2(g1(c)))
//! ```
//!
//! ## Consistency Law
//!
//! ```text
//! F::bimap(fac, f, g) == F::map_right(F::map_left(fac, f), g)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::data::result::ResultBi;
//! use kindred::typeclass::BiFunctor;
//!
//! let failed: Result<i32, String> = Err("boom".to_string());
//! assert_eq!(ResultBi::bimap(failed, |n: i32| n * 2, |e: String| e.len()), Err(4));
//!
//! let ok: Result<i32, String> = Ok(21);
//! assert_eq!(ResultBi::map_left(ok, |n: i32| n * 2), Ok(42));
//! ```

use crate::kind::Hkt2;

/// A type class for two-slot constructors mappable on both slots.
pub trait BiFunctor: Hkt2 {
    /// Maps the left payload with `first` and the right payload with `second`.
    fn bimap<A, B, C, D, First, Second>(
        fac: Self::Out2<A, C>,
        first: First,
        second: Second,
    ) -> Self::Out2<B, D>
    where
        A: 'static,
        B: 'static,
        C: 'static,
        D: 'static,
        First: FnMut(A) -> B + Clone + 'static,
        Second: FnMut(C) -> D + Clone + 'static;

    /// Maps only the left payload.
    fn map_left<A, B, C, Fun>(fac: Self::Out2<A, C>, function: Fun) -> Self::Out2<B, C>
    where
        A: 'static,
        B: 'static,
        C: 'static,
        Fun: FnMut(A) -> B + Clone + 'static,
    {
        Self::bimap::<A, B, C, C, Fun, _>(fac, function, |c| c)
    }

    /// Maps only the right payload.
    fn map_right<A, C, D, Fun>(fac: Self::Out2<A, C>, function: Fun) -> Self::Out2<A, D>
    where
        A: 'static,
        C: 'static,
        D: 'static,
        Fun: FnMut(C) -> D + Clone + 'static,
    {
        Self::bimap::<A, A, C, D, _, Fun>(fac, |a| a, function)
    }
}
