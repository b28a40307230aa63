//! Applicative type class - applying wrapped functions to wrapped values.
//!
//! This module provides the `Applicative` trait, which extends [`Functor`] and
//! [`Of`] with `ap`: apply the function(s) held in one effect to the value(s)
//! held in another.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! F::ap(v, F::of(|x| x)) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! F::ap(F::of(x), F::of(f)) == F::of(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! F::ap(F::of(y), u) == F::ap(u, F::of(|f| f(y)))
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! F::ap(F::ap(w, v), u) == F::ap(w, F::ap(v, F::map(u, compose)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::data::option::OptionF;
//! use kindred::typeclass::Applicative;
//!
//! let sum = OptionF::lift_a2(Some(1), Some(2), |a: i32, b: i32| a + b);
//! assert_eq!(sum, Some(3));
//!
//! let missing = OptionF::lift_a2(Some(1), None, |a: i32, b: i32| a + b);
//! assert_eq!(missing, None);
//! ```

use super::nested::Nested;
use super::{Functor, Of};

/// A boxed single-use function, the payload `lift_a2` threads through `ap`.
type Partial<B, C> = Box<dyn FnOnce(B) -> C>;

/// A type class for effects that can combine independent computations.
///
/// # Laws
///
/// ```text
/// F::ap(v, F::of(|x| x)) == v
/// F::ap(F::of(x), F::of(f)) == F::of(f(x))
/// F::ap(F::of(y), u) == F::ap(u, F::of(|f| f(y)))
/// ```
pub trait Applicative: Of + Functor {
    /// Applies the function(s) in `fab` to the value(s) in `fa`.
    fn ap<A: 'static, B: 'static, Fab>(fa: Self::Out<A>, fab: Self::Out<Fab>) -> Self::Out<B>
    where
        Fab: FnOnce(A) -> B + 'static;

    /// Combines two independent effects with a binary function.
    fn lift_a2<A, B, C, Fun>(fa: Self::Out<A>, fb: Self::Out<B>, function: Fun) -> Self::Out<C>
    where
        A: 'static,
        B: 'static,
        C: 'static,
        Fun: FnMut(A, B) -> C + Clone + 'static,
    {
        let partial = Self::map::<A, Partial<B, C>, _>(fa, move |a| {
            let mut function = function.clone();
            let applied: Partial<B, C> = Box::new(move |b| function(a, b));
            applied
        });
        Self::ap::<B, C, Partial<B, C>>(fb, partial)
    }

    /// Pairs the results of two effects.
    fn product<A: 'static, B: 'static>(fa: Self::Out<A>, fb: Self::Out<B>) -> Self::Out<(A, B)> {
        Self::lift_a2::<A, B, (A, B), _>(fa, fb, |a, b| (a, b))
    }

    /// Collects the results of many effects, in order.
    ///
    /// ```rust
    /// use kindred::data::option::OptionF;
    /// use kindred::typeclass::Applicative;
    ///
    /// assert_eq!(OptionF::product_many(vec![Some(1), Some(2)]), Some(vec![1, 2]));
    /// assert_eq!(OptionF::product_many(vec![Some(1), None]), None);
    /// assert_eq!(OptionF::product_many(Vec::<Option<u8>>::new()), Some(vec![]));
    /// ```
    fn product_many<A, I>(effects: I) -> Self::Out<Vec<A>>
    where
        A: 'static,
        I: IntoIterator<Item = Self::Out<A>>,
    {
        effects
            .into_iter()
            .fold(Self::of::<Vec<A>>(Vec::new()), |accumulated, effect| {
                Self::lift_a2::<Vec<A>, A, Vec<A>, _>(accumulated, effect, |mut items, item| {
                    items.push(item);
                    items
                })
            })
    }

    /// `ap` through two layers, `Self` outside and `G` inside.
    fn ap_compose<G, A, B, Fab>(
        fga: Self::Out<G::Out<A>>,
        fgab: Self::Out<G::Out<Fab>>,
    ) -> Self::Out<G::Out<B>>
    where
        G: Applicative,
        A: 'static,
        B: 'static,
        Fab: FnOnce(A) -> B + 'static,
    {
        <Nested<Self, G> as Applicative>::ap::<A, B, Fab>(fga, fgab)
    }
}
