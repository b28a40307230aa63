//! Type-level parameter lists.
//!
//! A constructor's type arguments travel as a cons list, `Cons<A, Cons<E, Nil>>`,
//! usually spelled with the [`Args!`](crate::Args) macro. Reading past the end
//! of a list is total: the head of [`Nil`] is the uninhabited [`Missing`], so
//! `Kind::Apply` is defined for lists of every length and only the checked
//! [`Apply`](super::Apply) alias insists on enough arguments.

use std::marker::PhantomData;

use super::nat::{Nat, Succ, Z};

/// Placeholder read from an exhausted list. Has no values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Missing {}

/// The empty parameter list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Nil;

/// A parameter list with head `H` and tail `T`.
pub struct Cons<H, T>(PhantomData<fn() -> (H, T)>);

/// A type-level list of type parameters.
pub trait TypeList: 'static {
    /// The first entry, or [`Missing`] for [`Nil`].
    type Head: 'static;
    /// Everything after the head. The tail of [`Nil`] is [`Nil`].
    type Tail: TypeList;
    /// Number of entries.
    type Len: Nat;
}

impl TypeList for Nil {
    type Head = Missing;
    type Tail = Nil;
    type Len = Z;
}

impl<H: 'static, T: TypeList> TypeList for Cons<H, T> {
    type Head = H;
    type Tail = T;
    type Len = Succ<T::Len>;
}

/// Lists holding at least `N` entries.
///
/// `List` is the list itself; projecting through it is what turns a missing
/// impl into a compile error at the use site of a type alias.
pub trait AtLeast<N: Nat>: TypeList {
    /// `Self`, once the length check has passed.
    type List: TypeList;
}

impl<L: TypeList> AtLeast<Z> for L {
    type List = L;
}

impl<H, T, N> AtLeast<Succ<N>> for Cons<H, T>
where
    H: 'static,
    T: AtLeast<N>,
    N: Nat,
{
    type List = Self;
}

/// Builds a type-level parameter list.
///
/// `Args![A, E]` is `Cons<A, Cons<E, Nil>>` and `Args![]` is `Nil`.
///
/// ```rust
/// use kindred::Args;
/// use kindred::kind::{Cons, Nil};
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(Args![u8, String], Cons<u8, Cons<String, Nil>>);
/// assert_type_eq_all!(Args![], Nil);
/// ```
#[macro_export]
macro_rules! Args {
    () => {
        $crate::kind::Nil
    };
    ($head:ty $(, $tail:ty)*) => {
        $crate::kind::Cons<$head, $crate::Args![$($tail),*]>
    };
}
