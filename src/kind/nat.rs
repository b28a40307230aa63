//! Type-level natural numbers.
//!
//! Arities are counted with Peano naturals so that "how many slots are left"
//! can be computed by the type checker instead of being written out by hand.
//!
//! ```rust
//! use kindred::kind::nat::{Minus, Nat, Three, Two};
//!
//! assert_eq!(<Three as Nat>::VALUE, 3);
//! assert_eq!(<<Three as Minus<Two>>::Output as Nat>::VALUE, 1);
//! ```

use std::marker::PhantomData;

/// The natural number zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Z;

/// The successor of `N`.
pub struct Succ<N>(PhantomData<N>);

/// A type-level natural number with its runtime value.
pub trait Nat: 'static {
    /// The value as a `usize`.
    const VALUE: usize;
}

impl Nat for Z {
    const VALUE: usize = 0;
}

impl<N: Nat> Nat for Succ<N> {
    const VALUE: usize = N::VALUE + 1;
}

/// 1
pub type One = Succ<Z>;
/// 2
pub type Two = Succ<One>;
/// 3
pub type Three = Succ<Two>;

/// Subtraction, defined only when `Self >= Rhs`.
///
/// Asking for `One - Two` has no impl, which is exactly the compile error
/// wanted when a shape fixes more slots than a constructor has.
pub trait Minus<Rhs: Nat>: Nat {
    /// `Self - Rhs`.
    type Output: Nat;
}

impl<N: Nat> Minus<Z> for N {
    type Output = N;
}

impl<N, K> Minus<Succ<K>> for Succ<N>
where
    N: Minus<K>,
    K: Nat,
{
    type Output = <N as Minus<K>>::Output;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use static_assertions::{assert_impl_all, assert_not_impl_any, assert_type_eq_all};

    assert_type_eq_all!(<Three as Minus<One>>::Output, Two);
    assert_type_eq_all!(<Two as Minus<Two>>::Output, Z);
    assert_impl_all!(Three: Minus<Three>);
    assert_not_impl_any!(One: Minus<Two>);

    #[rstest]
    #[case(<Z as Nat>::VALUE, 0)]
    #[case(<One as Nat>::VALUE, 1)]
    #[case(<Two as Nat>::VALUE, 2)]
    #[case(<Three as Nat>::VALUE, 3)]
    fn value_counts_successors(#[case] actual: usize, #[case] expected: usize) {
        assert_eq!(actual, expected);
    }
}
