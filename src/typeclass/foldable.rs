//! Foldable type class - collapsing a structure into a summary value.
//!
//! # Examples
//!
//! ```rust
//! use kindred::data::array::VecF;
//! use kindred::data::option::OptionF;
//! use kindred::typeclass::Foldable;
//!
//! assert_eq!(VecF::reduce(vec![1, 2, 3], 0, |sum, n| sum + n), 6);
//! assert_eq!(OptionF::reduce(None::<i32>, 10, |sum, n| sum + n), 10);
//! assert_eq!(OptionF::to_vec(Some('a')), vec!['a']);
//! ```

use crate::kind::Hkt1;

/// A type class for structures that can be folded left to right.
///
/// # Laws
///
/// Folding visits the payloads in the same order `Traversable::traverse`
/// does, so `F::to_vec(fa)` lists them in traversal order.
pub trait Foldable: Hkt1 {
    /// Left fold starting from `initial`.
    fn reduce<A: 'static, B, Fun>(fa: Self::Out<A>, initial: B, function: Fun) -> B
    where
        Fun: FnMut(B, A) -> B;

    /// All payloads, in fold order.
    fn to_vec<A: 'static>(fa: Self::Out<A>) -> Vec<A> {
        Self::reduce::<A, Vec<A>, _>(fa, Vec::new(), |mut items, item| {
            items.push(item);
            items
        })
    }

    /// Number of payloads.
    fn length<A: 'static>(fa: Self::Out<A>) -> usize {
        Self::reduce::<A, usize, _>(fa, 0, |count, _| count + 1)
    }
}
