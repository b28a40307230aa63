//! Fixed-arity shapes over kinds of any arity.
//!
//! Typeclass dictionaries are written against one of two shapes:
//!
//! - [`Hkt1`]: one abstracted slot (`Functor`, `Monad`, ...).
//! - [`Hkt2`]: two abstracted slots (`BiFunctor`, `Flip`, ...).
//!
//! A kind with more slots than the shape fixes is adapted by [`Lift1`] or
//! [`Lift2`]: the remaining slots are threaded through as one trailing list
//! `Rest`. The required length of `Rest` is computed from the kind's arity
//! alone (`Arity - Fixed`, see [`Remainder`]), so a brand with a `Rest` of the
//! wrong length simply is not an `Hkt1`/`Hkt2`.
//!
//! ```rust
//! use kindred::Args;
//! use kindred::data::result::ResultKind;
//! use kindred::kind::shape::{Hkt1, Hkt2, Lift1, Lift2};
//! use static_assertions::{assert_not_impl_any, assert_type_eq_all};
//!
//! type ResultF = Lift1<ResultKind, Args![String]>;
//! type ResultBi = Lift2<ResultKind>;
//!
//! assert_type_eq_all!(<ResultF as Hkt1>::Out<u8>, Result<u8, String>);
//! assert_type_eq_all!(<ResultBi as Hkt2>::Out2<u8, String>, Result<u8, String>);
//!
//! // two slots, one fixed: one slot must be left over, not zero
//! assert_not_impl_any!(Lift1<ResultKind>: Hkt1);
//! ```

use std::fmt;
use std::marker::PhantomData;

use super::Kind;
use super::list::{Cons, Nil, TypeList};
use super::nat::{Minus, Nat, One, Two};

/// Type constructors with one abstracted slot.
pub trait Hkt1: Sized + 'static {
    /// The constructor applied to `A`.
    type Out<A: 'static>: 'static;
}

/// Type constructors with two abstracted slots.
pub trait Hkt2: Sized + 'static {
    /// The constructor applied to `A` and `B`.
    type Out2<A: 'static, B: 'static>: 'static;
}

/// Parameter lists that exactly fill the slots of `K` left over after
/// `Fixed` slots have been abstracted.
pub trait Remainder<K: Kind, Fixed: Nat>: TypeList {}

impl<K, Fixed, R> Remainder<K, Fixed> for R
where
    K: Kind,
    Fixed: Nat,
    K::Arity: Minus<Fixed>,
    R: TypeList<Len = <K::Arity as Minus<Fixed>>::Output>,
{
}

/// `K` seen as a one-slot constructor, with `Rest` filling its other slots.
pub struct Lift1<K, Rest = Nil>(PhantomData<fn() -> (K, Rest)>);

/// `K` seen as a two-slot constructor, with `Rest` filling its other slots.
pub struct Lift2<K, Rest = Nil>(PhantomData<fn() -> (K, Rest)>);

impl<K, Rest> Hkt1 for Lift1<K, Rest>
where
    K: Kind,
    Rest: Remainder<K, One>,
{
    type Out<A: 'static> = K::Apply<Cons<A, Rest>>;
}

impl<K, Rest> Hkt2 for Lift2<K, Rest>
where
    K: Kind,
    Rest: Remainder<K, Two>,
{
    type Out2<A: 'static, B: 'static> = K::Apply<Cons<A, Cons<B, Rest>>>;
}

// Brands are plain markers; the derives would demand `K: Clone` and friends.
macro_rules! marker_impls {
    ($brand:ident) => {
        impl<K, Rest> $brand<K, Rest> {
            /// The brand value. Brands carry no state.
            #[must_use]
            pub const fn new() -> Self {
                Self(PhantomData)
            }
        }

        impl<K, Rest> Clone for $brand<K, Rest> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<K, Rest> Copy for $brand<K, Rest> {}

        impl<K, Rest> Default for $brand<K, Rest> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<K, Rest> fmt::Debug for $brand<K, Rest> {
            fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(
                    formatter,
                    "{}<{}>",
                    stringify!($brand),
                    std::any::type_name::<K>()
                )
            }
        }
    };
}

marker_impls!(Lift1);
marker_impls!(Lift2);
