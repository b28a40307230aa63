//! `Option` as a kind, with its dictionaries.
//!
//! `OptionKind` has one covariant slot. [`OptionF`] is its one-slot brand
//! and carries every unary dictionary: `Of`, `Zero`, `Functor`,
//! `Applicative`, `Monad`, `Foldable`, `Traversable`, `SemiAlternative`,
//! `To` and `SemiAlign`.
//!
//! The free functions at the bottom are the same operations with the brand
//! already chosen.
//!
//! ```rust
//! use kindred::data::option;
//!
//! let parsed = option::flat_map(Some("42"), |text: &str| text.parse::<i32>().ok());
//! assert_eq!(option::map(parsed, |n: i32| n + 1), Some(43));
//! assert_eq!(option::get_or(None, 0), 0);
//! ```

use tracing::trace;

use crate::Args;
use crate::kind::variance::Covariant;
use crate::kind::{Kind, Lift1, TypeList, nat::One};
use crate::typeclass::{
    Applicative, Foldable, Functor, Monad, Of, SemiAlign, SemiAlternative, To, Traversable, Zero,
};

/// The kind of `Option<A>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionKind;

impl Kind for OptionKind {
    type Arity = One;
    type Variance = Args![Covariant];
    type Apply<L: TypeList> = Option<L::Head>;
}

/// Dictionary brand for `Option`.
pub type OptionF = Lift1<OptionKind>;

impl Of for OptionF {
    fn of<A: 'static>(value: A) -> Option<A> {
        Some(value)
    }
}

impl Zero for OptionF {
    fn zero<A: 'static>() -> Option<A> {
        None
    }
}

impl Functor for OptionF {
    fn map<A: 'static, B: 'static, Fun>(fa: Option<A>, function: Fun) -> Option<B>
    where
        Fun: FnMut(A) -> B + Clone + 'static,
    {
        fa.map(function)
    }
}

impl Applicative for OptionF {
    fn ap<A: 'static, B: 'static, Fab>(fa: Option<A>, fab: Option<Fab>) -> Option<B>
    where
        Fab: FnOnce(A) -> B + 'static,
    {
        fab.zip(fa).map(|(function, a)| function(a))
    }
}

impl Monad for OptionF {
    fn flat_map<A: 'static, B: 'static, Fun>(fa: Option<A>, function: Fun) -> Option<B>
    where
        Fun: FnMut(A) -> Option<B> + Clone + 'static,
    {
        if fa.is_none() {
            trace!("flat_map on None, continuation skipped");
        }
        fa.and_then(function)
    }
}

impl Foldable for OptionF {
    fn reduce<A: 'static, B, Fun>(fa: Option<A>, initial: B, mut function: Fun) -> B
    where
        Fun: FnMut(B, A) -> B,
    {
        match fa {
            Some(a) => function(initial, a),
            None => initial,
        }
    }
}

impl Traversable for OptionF {
    fn traverse<G, A, B, Fun>(fa: Option<A>, mut function: Fun) -> G::Out<Option<B>>
    where
        G: Applicative,
        A: 'static,
        B: 'static,
        Fun: FnMut(A) -> G::Out<B> + Clone + 'static,
    {
        match fa {
            Some(a) => G::map::<B, Option<B>, _>(function(a), Some),
            None => G::of::<Option<B>>(None),
        }
    }
}

impl SemiAlternative for OptionF {
    fn or_else<A, Fallback>(fa: Option<A>, fallback: Fallback) -> Option<A>
    where
        A: 'static,
        Fallback: FnOnce() -> Option<A> + 'static,
    {
        fa.or_else(fallback)
    }
}

impl To for OptionF {
    type Fallback = ();

    fn get_or_else<A, Fun>(fa: Option<A>, function: Fun) -> A
    where
        A: 'static,
        Fun: FnOnce(()) -> A,
    {
        fa.unwrap_or_else(|| function(()))
    }
}

impl SemiAlign for OptionF {
    fn zip_with<A, B, C, Fun>(fa: Option<A>, fb: Option<B>, mut function: Fun) -> Option<C>
    where
        A: 'static,
        B: 'static,
        C: 'static,
        Fun: FnMut(A, B) -> C,
    {
        fa.zip(fb).map(|(a, b)| function(a, b))
    }
}

// =============================================================================
// Free functions
// =============================================================================

/// `Some(value)`.
pub fn some<A: 'static>(value: A) -> Option<A> {
    OptionF::of(value)
}

/// `None`.
pub fn none<A: 'static>() -> Option<A> {
    OptionF::zero()
}

/// See [`Functor::map`].
pub fn map<A, B, Fun>(fa: Option<A>, function: Fun) -> Option<B>
where
    A: 'static,
    B: 'static,
    Fun: FnMut(A) -> B + Clone + 'static,
{
    OptionF::map(fa, function)
}

/// See [`Applicative::ap`].
pub fn ap<A, B, Fab>(fa: Option<A>, fab: Option<Fab>) -> Option<B>
where
    A: 'static,
    B: 'static,
    Fab: FnOnce(A) -> B + 'static,
{
    OptionF::ap(fa, fab)
}

/// See [`Monad::flat_map`].
pub fn flat_map<A, B, Fun>(fa: Option<A>, function: Fun) -> Option<B>
where
    A: 'static,
    B: 'static,
    Fun: FnMut(A) -> Option<B> + Clone + 'static,
{
    OptionF::flat_map(fa, function)
}

/// See [`Traversable::traverse`].
pub fn traverse<G, A, B, Fun>(fa: Option<A>, function: Fun) -> G::Out<Option<B>>
where
    G: Applicative,
    A: 'static,
    B: 'static,
    Fun: FnMut(A) -> G::Out<B> + Clone + 'static,
{
    OptionF::traverse::<G, A, B, Fun>(fa, function)
}

/// See [`SemiAlternative::or_else`].
pub fn or_else<A, Fallback>(fa: Option<A>, fallback: Fallback) -> Option<A>
where
    A: 'static,
    Fallback: FnOnce() -> Option<A> + 'static,
{
    OptionF::or_else(fa, fallback)
}

/// See [`To::get_or`].
pub fn get_or<A: 'static>(fa: Option<A>, default: A) -> A {
    OptionF::get_or(fa, default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::result::ResultF;
    use rstest::rstest;

    #[rstest]
    #[case(Some((|n: i32| n + 1) as fn(i32) -> i32), Some(1), Some(2))]
    #[case(None, Some(1), None)]
    #[case(Some((|n: i32| n + 1) as fn(i32) -> i32), None, None)]
    fn ap_needs_both(
        #[case] function: Option<fn(i32) -> i32>,
        #[case] value: Option<i32>,
        #[case] expected: Option<i32>,
    ) {
        assert_eq!(ap(value, function), expected);
    }

    #[test]
    fn traverse_some_into_failing_effect() {
        let failed = traverse::<ResultF<&str>, _, _, _>(Some(1), |_: i32| Err::<i32, _>("no"));
        assert_eq!(failed, Err("no"));
    }

    #[test]
    fn get_or_else_receives_unit() {
        assert_eq!(OptionF::get_or_else(None, |()| 9), 9);
        assert_eq!(OptionF::get_or_else(Some(1), |()| 9), 1);
    }

    #[test]
    fn zip_with_needs_both() {
        assert_eq!(OptionF::zip_with(Some(2), Some(3), |a, b| a * b), Some(6));
        assert_eq!(OptionF::zip(Some(2), None::<char>), None);
    }

    #[test]
    fn constructors() {
        assert_eq!(some(1), Some(1));
        assert_eq!(none::<i32>(), None);
        assert_eq!(or_else(none(), || some(4)), Some(4));
    }
}
