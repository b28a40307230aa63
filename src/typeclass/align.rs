//! Position-wise pairing of two structures.
//!
//! `zip_with` walks both structures in step and stops at the shorter one.

use super::Functor;

/// A type class for structures that can be combined position by position.
///
/// # Examples
///
/// ```rust
/// use kindred::data::array::VecF;
/// use kindred::typeclass::SemiAlign;
///
/// assert_eq!(VecF::zip_with(vec![1, 2, 3], vec![4, 5, 6], |a, b| a + b), vec![5, 7, 9]);
/// assert_eq!(VecF::zip(vec![1, 2], vec!['a']), vec![(1, 'a')]);
/// ```
pub trait SemiAlign: Functor {
    /// Combines payloads at the same position with `function`.
    fn zip_with<A, B, C, Fun>(fa: Self::Out<A>, fb: Self::Out<B>, function: Fun) -> Self::Out<C>
    where
        A: 'static,
        B: 'static,
        C: 'static,
        Fun: FnMut(A, B) -> C;

    /// Pairs payloads at the same position.
    fn zip<A: 'static, B: 'static>(fa: Self::Out<A>, fb: Self::Out<B>) -> Self::Out<(A, B)> {
        Self::zip_with::<A, B, (A, B), _>(fa, fb, |a, b| (a, b))
    }
}
