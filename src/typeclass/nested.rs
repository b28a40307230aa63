//! Composed dictionaries.
//!
//! [`Nested<F, G>`] is the dictionary of `F` over `G`: its payload type is
//! `F::Out<G::Out<A>>`. Each operation is derived mechanically from the two
//! layer dictionaries.
//!
//! | operation  | derivation                                               |
//! |------------|----------------------------------------------------------|
//! | `of`       | `F::of(G::of(a))`                                        |
//! | `map`      | `F::map(fga, |ga| G::map(ga, f))`                        |
//! | `ap`       | `F::ap(fga, F::map(fgab, |gab| |ga| G::ap(ga, gab)))`    |
//! | `reduce`   | `F::reduce(fga, b, |b, ga| G::reduce(ga, b, f))`         |
//! | `traverse` | `F::traverse(fga, |ga| G::traverse(ga, f))`              |
//!
//! These preserve the Functor, Applicative, Foldable and Traversable laws.
//! There is no composed `Monad`: monads do not compose in general, so
//! composites that need one (IOResult, AsyncIOOption, ...) write it by hand
//! on top of the derived instances.
//!
//! [`BiNested<F, G>`] does the same for a binary inner layer: `F::Out<G::Out2<A, B>>`.

use std::fmt;
use std::marker::PhantomData;

use super::{Applicative, BiFunctor, Flip, Foldable, Functor, Of, Traversable};
use crate::kind::{Hkt1, Hkt2};

/// Dictionary of `F` over `G`.
pub struct Nested<F, G>(PhantomData<fn() -> (F, G)>);

/// Dictionary of unary `F` over binary `G`.
pub struct BiNested<F, G>(PhantomData<fn() -> (F, G)>);

// Same marker impls as the kind brands; derives would bound `F` and `G`.
macro_rules! dictionary_impls {
    ($dictionary:ident) => {
        impl<F, G> $dictionary<F, G> {
            /// The dictionary value. Dictionaries carry no state.
            #[must_use]
            pub const fn new() -> Self {
                Self(PhantomData)
            }
        }

        impl<F, G> Clone for $dictionary<F, G> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<F, G> Copy for $dictionary<F, G> {}

        impl<F, G> Default for $dictionary<F, G> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<F, G> fmt::Debug for $dictionary<F, G> {
            fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(
                    formatter,
                    "{}<{}, {}>",
                    stringify!($dictionary),
                    std::any::type_name::<F>(),
                    std::any::type_name::<G>()
                )
            }
        }
    };
}

dictionary_impls!(Nested);
dictionary_impls!(BiNested);

/// `G::Out<A> -> G::Out<B>`, boxed so it can sit inside `F`.
type Layer<G, A, B> = Box<dyn FnOnce(<G as Hkt1>::Out<A>) -> <G as Hkt1>::Out<B>>;

impl<F: Hkt1, G: Hkt1> Hkt1 for Nested<F, G> {
    type Out<A: 'static> = F::Out<G::Out<A>>;
}

impl<F: Hkt1, G: Hkt2> Hkt2 for BiNested<F, G> {
    type Out2<A: 'static, B: 'static> = F::Out<G::Out2<A, B>>;
}

impl<F: Of, G: Of> Of for Nested<F, G> {
    fn of<A: 'static>(value: A) -> Self::Out<A> {
        F::of::<G::Out<A>>(G::of::<A>(value))
    }
}

impl<F: Functor, G: Functor> Functor for Nested<F, G> {
    fn map<A: 'static, B: 'static, Fun>(fga: Self::Out<A>, function: Fun) -> Self::Out<B>
    where
        Fun: FnMut(A) -> B + Clone + 'static,
    {
        F::map::<G::Out<A>, G::Out<B>, _>(fga, move |ga| {
            G::map::<A, B, Fun>(ga, function.clone())
        })
    }
}

impl<F: Applicative, G: Applicative> Applicative for Nested<F, G> {
    fn ap<A: 'static, B: 'static, Fab>(fga: Self::Out<A>, fgab: Self::Out<Fab>) -> Self::Out<B>
    where
        Fab: FnOnce(A) -> B + 'static,
    {
        let lifted = F::map::<G::Out<Fab>, Layer<G, A, B>, _>(fgab, |gab| {
            let layer: Layer<G, A, B> = Box::new(move |ga| G::ap::<A, B, Fab>(ga, gab));
            layer
        });
        F::ap::<G::Out<A>, G::Out<B>, Layer<G, A, B>>(fga, lifted)
    }

    /// Collects the outer layer first, then the inner one, so each layer
    /// uses its own `product_many`.
    fn product_many<A, I>(effects: I) -> Self::Out<Vec<A>>
    where
        A: 'static,
        I: IntoIterator<Item = Self::Out<A>>,
    {
        let outer = F::product_many::<G::Out<A>, I>(effects);
        F::map::<Vec<G::Out<A>>, G::Out<Vec<A>>, _>(outer, G::product_many::<A, Vec<G::Out<A>>>)
    }
}

impl<F: Foldable, G: Foldable> Foldable for Nested<F, G> {
    fn reduce<A: 'static, B, Fun>(fga: Self::Out<A>, initial: B, mut function: Fun) -> B
    where
        Fun: FnMut(B, A) -> B,
    {
        F::reduce::<G::Out<A>, B, _>(fga, initial, |accumulator, ga| {
            G::reduce::<A, B, _>(ga, accumulator, &mut function)
        })
    }
}

impl<F: Traversable, G: Traversable> Traversable for Nested<F, G> {
    fn traverse<H, A, B, Fun>(fga: Self::Out<A>, function: Fun) -> H::Out<Self::Out<B>>
    where
        H: Applicative,
        A: 'static,
        B: 'static,
        Fun: FnMut(A) -> H::Out<B> + Clone + 'static,
    {
        F::traverse::<H, G::Out<A>, G::Out<B>, _>(fga, move |ga| {
            G::traverse::<H, A, B, Fun>(ga, function.clone())
        })
    }
}

impl<F: Functor, G: BiFunctor> BiFunctor for BiNested<F, G> {
    fn bimap<A, B, C, D, First, Second>(
        fgac: Self::Out2<A, C>,
        first: First,
        second: Second,
    ) -> Self::Out2<B, D>
    where
        A: 'static,
        B: 'static,
        C: 'static,
        D: 'static,
        First: FnMut(A) -> B + Clone + 'static,
        Second: FnMut(C) -> D + Clone + 'static,
    {
        F::map::<G::Out2<A, C>, G::Out2<B, D>, _>(fgac, move |gac| {
            G::bimap::<A, B, C, D, First, Second>(gac, first.clone(), second.clone())
        })
    }
}

impl<F: Functor, G: Flip> Flip for BiNested<F, G> {
    fn flip<A: 'static, E: 'static>(fgae: Self::Out2<A, E>) -> Self::Out2<E, A> {
        F::map::<G::Out2<A, E>, G::Out2<E, A>, _>(fgae, G::flip::<A, E>)
    }
}
