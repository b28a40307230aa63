//! Traversable type class - running an effect for every element.
//!
//! `traverse` maps each element to an effect of some [`Applicative`] `G` and
//! collects the results, turning `F<A>` into `G<F<B>>`. The applicative is a
//! type parameter, so the same traversal serves `Option`, `Result`, `IO` or
//! any composite.
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! T::traverse::<IdentityF>(ta, Identity) == Identity(ta)
//! ```
//!
//! ## Naturality
//!
//! For an applicative morphism `t`:
//!
//! ```text
//! t(T::traverse::<G>(ta, f)) == T::traverse::<H>(ta, |a| t(f(a)))
//! ```
//!
//! ## Duality with `sequence`
//!
//! ```text
//! T::sequence::<G>(T::map(ta, f)) == T::traverse::<G>(ta, f)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::data::array::VecF;
//! use kindred::data::option::OptionF;
//! use kindred::typeclass::Traversable;
//!
//! let positive = |n: i32| (n > 0).then_some(n);
//! assert_eq!(VecF::traverse::<OptionF, _, _, _>(vec![1, 2], positive), Some(vec![1, 2]));
//! assert_eq!(VecF::traverse::<OptionF, _, _, _>(vec![1, -2], positive), None);
//!
//! assert_eq!(VecF::sequence::<OptionF, _>(vec![Some(1), Some(2)]), Some(vec![1, 2]));
//! ```

use super::{Applicative, Foldable, Functor};

/// A type class for structures that can be walked with an applicative effect.
pub trait Traversable: Functor + Foldable {
    /// Applies `function` to every element and gathers the effects.
    fn traverse<G, A, B, Fun>(fa: Self::Out<A>, function: Fun) -> G::Out<Self::Out<B>>
    where
        G: Applicative,
        A: 'static,
        B: 'static,
        Fun: FnMut(A) -> G::Out<B> + Clone + 'static;

    /// Turns a structure of effects into an effect producing the structure.
    fn sequence<G, A>(fga: Self::Out<G::Out<A>>) -> G::Out<Self::Out<A>>
    where
        G: Applicative,
        A: 'static,
    {
        Self::traverse::<G, G::Out<A>, A, _>(fga, |ga| ga)
    }
}
