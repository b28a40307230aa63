//! Identity wrapper type - the effect that adds nothing.
//!
//! `Identity` is the simplest possible applicative. It is the reference
//! point for the traversal identity law:
//!
//! ```text
//! T::traverse::<IdentityF>(ta, Identity) == Identity(ta)
//! ```

use crate::Args;
use crate::kind::variance::Covariant;
use crate::kind::{Kind, Lift1, TypeList, nat::One};
use crate::typeclass::{Applicative, Functor, Monad, Of};

/// Wraps a value without adding any behavior.
///
/// # Examples
///
/// ```rust
/// use kindred::data::identity::Identity;
///
/// let wrapped = Identity::new(42);
/// assert_eq!(wrapped.into_inner(), 42);
/// assert_eq!(Identity(1).0, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Wraps `value`.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// The wrapped value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

/// The kind of `Identity<A>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityKind;

impl Kind for IdentityKind {
    type Arity = One;
    type Variance = Args![Covariant];
    type Apply<L: TypeList> = Identity<L::Head>;
}

/// Dictionary brand for `Identity`.
pub type IdentityF = Lift1<IdentityKind>;

impl Of for IdentityF {
    fn of<A: 'static>(value: A) -> Identity<A> {
        Identity(value)
    }
}

impl Functor for IdentityF {
    fn map<A: 'static, B: 'static, Fun>(fa: Identity<A>, mut function: Fun) -> Identity<B>
    where
        Fun: FnMut(A) -> B + Clone + 'static,
    {
        Identity(function(fa.0))
    }
}

impl Applicative for IdentityF {
    fn ap<A: 'static, B: 'static, Fab>(fa: Identity<A>, fab: Identity<Fab>) -> Identity<B>
    where
        Fab: FnOnce(A) -> B + 'static,
    {
        Identity((fab.0)(fa.0))
    }
}

impl Monad for IdentityF {
    fn flat_map<A: 'static, B: 'static, Fun>(fa: Identity<A>, mut function: Fun) -> Identity<B>
    where
        Fun: FnMut(A) -> Identity<B> + Clone + 'static,
    {
        function(fa.0)
    }
}
