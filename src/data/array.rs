//! `Vec` as a kind, with its dictionaries.
//!
//! [`VecF`] carries `Of`, `Zero`, `Functor`, `Foldable`, `Traversable`,
//! `SemiAlternative` and `SemiAlign`. It is not an `Applicative`: the
//! cartesian `ap` would have to call each stored function once per value,
//! and `ap` payloads are single-use.
//!
//! ```rust
//! use kindred::data::array;
//! use kindred::data::option::OptionF;
//!
//! let all_positive =
//!     array::traverse::<OptionF, _, _, _>(vec![1, 2, 3], |n: i32| (n > 0).then_some(n));
//! assert_eq!(all_positive, Some(vec![1, 2, 3]));
//! assert_eq!(array::zip_with(vec![1, 2, 3], vec![4, 5, 6], |a, b| a + b), vec![5, 7, 9]);
//! ```

use crate::Args;
use crate::kind::variance::Covariant;
use crate::kind::{Kind, Lift1, TypeList, nat::One};
use crate::typeclass::{
    Applicative, Foldable, Functor, Of, SemiAlign, SemiAlternative, Traversable, Zero,
};

/// The kind of `Vec<A>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct VecKind;

impl Kind for VecKind {
    type Arity = One;
    type Variance = Args![Covariant];
    type Apply<L: TypeList> = Vec<L::Head>;
}

/// Dictionary brand for `Vec`.
pub type VecF = Lift1<VecKind>;

impl Of for VecF {
    fn of<A: 'static>(value: A) -> Vec<A> {
        vec![value]
    }
}

impl Zero for VecF {
    fn zero<A: 'static>() -> Vec<A> {
        Vec::new()
    }
}

impl Functor for VecF {
    fn map<A: 'static, B: 'static, Fun>(fa: Vec<A>, function: Fun) -> Vec<B>
    where
        Fun: FnMut(A) -> B + Clone + 'static,
    {
        fa.into_iter().map(function).collect()
    }
}

impl Foldable for VecF {
    fn reduce<A: 'static, B, Fun>(fa: Vec<A>, initial: B, function: Fun) -> B
    where
        Fun: FnMut(B, A) -> B,
    {
        fa.into_iter().fold(initial, function)
    }
}

impl Traversable for VecF {
    fn traverse<G, A, B, Fun>(fa: Vec<A>, function: Fun) -> G::Out<Vec<B>>
    where
        G: Applicative,
        A: 'static,
        B: 'static,
        Fun: FnMut(A) -> G::Out<B> + Clone + 'static,
    {
        G::product_many::<B, _>(fa.into_iter().map(function))
    }
}

impl SemiAlternative for VecF {
    fn or_else<A, Fallback>(fa: Vec<A>, fallback: Fallback) -> Vec<A>
    where
        A: 'static,
        Fallback: FnOnce() -> Vec<A> + 'static,
    {
        if fa.is_empty() { fallback() } else { fa }
    }
}

impl SemiAlign for VecF {
    fn zip_with<A, B, C, Fun>(fa: Vec<A>, fb: Vec<B>, mut function: Fun) -> Vec<C>
    where
        A: 'static,
        B: 'static,
        C: 'static,
        Fun: FnMut(A, B) -> C,
    {
        fa.into_iter().zip(fb).map(|(a, b)| function(a, b)).collect()
    }
}

// =============================================================================
// Free functions
// =============================================================================

/// See [`Functor::map`].
pub fn map<A, B, Fun>(fa: Vec<A>, function: Fun) -> Vec<B>
where
    A: 'static,
    B: 'static,
    Fun: FnMut(A) -> B + Clone + 'static,
{
    VecF::map(fa, function)
}

/// See [`Foldable::reduce`].
pub fn reduce<A: 'static, B, Fun>(fa: Vec<A>, initial: B, function: Fun) -> B
where
    Fun: FnMut(B, A) -> B,
{
    VecF::reduce(fa, initial, function)
}

/// See [`Traversable::traverse`].
pub fn traverse<G, A, B, Fun>(fa: Vec<A>, function: Fun) -> G::Out<Vec<B>>
where
    G: Applicative,
    A: 'static,
    B: 'static,
    Fun: FnMut(A) -> G::Out<B> + Clone + 'static,
{
    VecF::traverse::<G, A, B, Fun>(fa, function)
}

/// See [`Traversable::sequence`].
pub fn sequence<G, A>(fga: Vec<G::Out<A>>) -> G::Out<Vec<A>>
where
    G: Applicative,
    A: 'static,
{
    VecF::sequence::<G, A>(fga)
}

/// See [`SemiAlign::zip_with`].
pub fn zip_with<A, B, C, Fun>(fa: Vec<A>, fb: Vec<B>, function: Fun) -> Vec<C>
where
    A: 'static,
    B: 'static,
    C: 'static,
    Fun: FnMut(A, B) -> C,
{
    VecF::zip_with(fa, fb, function)
}

/// See [`SemiAlign::zip`].
pub fn zip<A: 'static, B: 'static>(fa: Vec<A>, fb: Vec<B>) -> Vec<(A, B)> {
    VecF::zip(fa, fb)
}
