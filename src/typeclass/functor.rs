//! Functor type class - mapping over the covariant slot of a constructor.
//!
//! A `Functor` dictionary is a brand type implementing [`Hkt1`]; its
//! operations are associated functions taking the effect value explicitly:
//!
//! ```rust
//! use kindred::data::option::OptionF;
//! use kindred::typeclass::Functor;
//!
//! assert_eq!(OptionF::map(Some(5), |n: i32| n.to_string()), Some("5".to_string()));
//! assert_eq!(OptionF::map(None, |n: i32| n + 1), None);
//! ```
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! F::map(fa, |x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! F::map(F::map(fa, f), g) == F::map(fa, |x| g(f(x)))
//! ```
//!
//! # Function arguments
//!
//! Mapping functions are `FnMut + Clone + 'static`: a structure with many
//! elements calls the function once per element, and a composed dictionary
//! hands every inner layer its own copy.

use super::nested::Nested;
use crate::kind::Hkt1;

/// A type class for constructors whose payload can be mapped.
///
/// # Laws
///
/// ```text
/// F::map(fa, |x| x) == fa
/// F::map(F::map(fa, f), g) == F::map(fa, |x| g(f(x)))
/// ```
pub trait Functor: Hkt1 {
    /// Applies `function` to every payload of `fa`, keeping the structure.
    fn map<A: 'static, B: 'static, Fun>(fa: Self::Out<A>, function: Fun) -> Self::Out<B>
    where
        Fun: FnMut(A) -> B + Clone + 'static;

    /// Applies the wrapped function(s) to a plain value.
    ///
    /// ```rust
    /// use kindred::data::option::OptionF;
    /// use kindred::typeclass::Functor;
    ///
    /// let double = Some(|n: i32| n * 2);
    /// assert_eq!(OptionF::flap(double, 21), Some(42));
    /// ```
    fn flap<A, B, Fun>(fab: Self::Out<Fun>, value: A) -> Self::Out<B>
    where
        A: Clone + 'static,
        B: 'static,
        Fun: FnOnce(A) -> B + 'static,
    {
        Self::map::<Fun, B, _>(fab, move |function: Fun| function(value.clone()))
    }

    /// Replaces every payload with `value`.
    fn as_<A: 'static, B: Clone + 'static>(fa: Self::Out<A>, value: B) -> Self::Out<B> {
        Self::map::<A, B, _>(fa, move |_| value.clone())
    }

    /// Maps through two layers, `Self` outside and `G` inside.
    ///
    /// ```rust
    /// use kindred::data::array::VecF;
    /// use kindred::data::option::OptionF;
    /// use kindred::typeclass::Functor;
    ///
    /// let nested = vec![Some(1), None, Some(3)];
    /// let mapped = VecF::map_compose::<OptionF, _, _, _>(nested, |n: i32| n * 10);
    /// assert_eq!(mapped, vec![Some(10), None, Some(30)]);
    /// ```
    fn map_compose<G, A, B, Fun>(fga: Self::Out<G::Out<A>>, function: Fun) -> Self::Out<G::Out<B>>
    where
        G: Functor,
        A: 'static,
        B: 'static,
        Fun: FnMut(A) -> B + Clone + 'static,
    {
        <Nested<Self, G> as Functor>::map::<A, B, Fun>(fga, function)
    }

    /// `map` with the function supplied first, for point-free pipelines.
    ///
    /// ```rust
    /// use kindred::data::option::OptionF;
    /// use kindred::typeclass::Functor;
    ///
    /// let mut increment = OptionF::mapping(|n: i32| n + 1);
    /// assert_eq!(increment(Some(1)), Some(2));
    /// assert_eq!(increment(None), None);
    /// ```
    fn mapping<A, B, Fun>(
        function: Fun,
    ) -> impl FnMut(Self::Out<A>) -> Self::Out<B> + Clone + 'static
    where
        A: 'static,
        B: 'static,
        Fun: FnMut(A) -> B + Clone + 'static,
    {
        move |fa| Self::map::<A, B, Fun>(fa, function.clone())
    }
}
