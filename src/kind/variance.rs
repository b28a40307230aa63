//! Variance descriptors and the variance-aware parameter zip.
//!
//! Every [`Kind`](super::Kind) declares, per slot, whether the slot is
//! covariant, contravariant or invariant. The declaration is a type-level list
//! of tag types ([`Covariant`], [`Contravariant`], [`Invariant`]) so that two
//! descriptors can be merged at compile time when kinds are composed.
//!
//! # Zipping parameter lists
//!
//! [`ZipWithVariance`] merges two parameter lists position by position. The
//! tag at each position decides how the pair is combined:
//!
//! | tag at `i`                     | result at `i`          |
//! |--------------------------------|------------------------|
//! | contravariant                  | `Intersection<a, b>`   |
//! | covariant or invariant         | `Union<a, b>`          |
//! | no tag (descriptor exhausted)  | `Union<a, b>`          |
//!
//! When one list runs out the rest of the other passes through unchanged.
//! Lists of different lengths are never an error.
//!
//! ```rust
//! use kindred::Args;
//! use kindred::kind::variance::{Contravariant, Covariant, Intersection, Union, Zip};
//! use static_assertions::assert_type_eq_all;
//!
//! type Zipped = Zip<Args![u8, u16, u32], Args![i8], Args![Contravariant, Covariant]>;
//! assert_type_eq_all!(Zipped, Args![Intersection<u8, i8>, u16, u32]);
//!
//! type Loose = Zip<Args![u8, u16], Args![i8, i16], Args![Covariant]>;
//! assert_type_eq_all!(Loose, Args![Union<u8, i8>, Union<u16, i16>]);
//! ```

use std::marker::PhantomData;

use super::list::{Cons, Nil, TypeList};

/// The variance of one type-parameter slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variance {
    /// Output position.
    Covariant,
    /// Input position.
    Contravariant,
    /// Both, or unknown.
    Invariant,
}

impl Variance {
    /// The greatest variance compatible with both sides: equal variances are
    /// kept, anything else degrades to [`Variance::Invariant`].
    #[must_use]
    pub const fn meet(self, other: Self) -> Self {
        match (self, other) {
            (Self::Covariant, Self::Covariant) => Self::Covariant,
            (Self::Contravariant, Self::Contravariant) => Self::Contravariant,
            _ => Self::Invariant,
        }
    }
}

/// Tag for a covariant slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Covariant;

/// Tag for a contravariant slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Contravariant;

/// Tag for an invariant slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Invariant;

/// Marker for a slot combined covariantly. Never constructed.
pub struct Union<A, B>(PhantomData<fn() -> (A, B)>);

/// Marker for a slot combined contravariantly. Never constructed.
pub struct Intersection<A, B>(PhantomData<fn() -> (A, B)>);

/// A variance tag.
///
/// `Union`/`Intersection` of two tags are tags themselves, with the
/// [`meet`](Variance::meet) of both variances; that is how the descriptor of a
/// composed kind is still a descriptor.
pub trait VarianceTag: 'static {
    /// Runtime mirror of the tag.
    const VARIANCE: Variance;

    /// How a pair sitting under this tag is merged.
    type Pick<A: 'static, B: 'static>: 'static;

    /// `Pick` for the meet of `Other` and `Self`.
    type PickMeet<Other: VarianceTag, A: 'static, B: 'static>: 'static;
}

impl VarianceTag for Covariant {
    const VARIANCE: Variance = Variance::Covariant;
    type Pick<A: 'static, B: 'static> = Union<A, B>;
    type PickMeet<Other: VarianceTag, A: 'static, B: 'static> = Union<A, B>;
}

impl VarianceTag for Invariant {
    const VARIANCE: Variance = Variance::Invariant;
    type Pick<A: 'static, B: 'static> = Union<A, B>;
    type PickMeet<Other: VarianceTag, A: 'static, B: 'static> = Union<A, B>;
}

impl VarianceTag for Contravariant {
    const VARIANCE: Variance = Variance::Contravariant;
    type Pick<A: 'static, B: 'static> = Intersection<A, B>;
    // contravariant only if the other side is too
    type PickMeet<Other: VarianceTag, A: 'static, B: 'static> = Other::Pick<A, B>;
}

impl<X: VarianceTag, Y: VarianceTag> VarianceTag for Union<X, Y> {
    const VARIANCE: Variance = X::VARIANCE.meet(Y::VARIANCE);
    type Pick<A: 'static, B: 'static> = Y::PickMeet<X, A, B>;
    type PickMeet<Other: VarianceTag, A: 'static, B: 'static> = Y::PickMeet<Union<Other, X>, A, B>;
}

impl<X: VarianceTag, Y: VarianceTag> VarianceTag for Intersection<X, Y> {
    const VARIANCE: Variance = X::VARIANCE.meet(Y::VARIANCE);
    type Pick<A: 'static, B: 'static> = Y::PickMeet<X, A, B>;
    type PickMeet<Other: VarianceTag, A: 'static, B: 'static> = Y::PickMeet<Union<Other, X>, A, B>;
}

/// A list made only of variance tags.
pub trait VarianceList: TypeList {
    /// Variance of slot `index`, or `None` past the end of the descriptor.
    fn variance_at(index: usize) -> Option<Variance>;
}

impl VarianceList for Nil {
    fn variance_at(_index: usize) -> Option<Variance> {
        None
    }
}

impl<H: VarianceTag, T: VarianceList> VarianceList for Cons<H, T> {
    fn variance_at(index: usize) -> Option<Variance> {
        match index {
            0 => Some(H::VARIANCE),
            _ => T::variance_at(index - 1),
        }
    }
}

/// Variance-aware zip of `Self` with `B`, directed by the tags in `V`.
pub trait ZipWithVariance<B: TypeList, V: TypeList>: TypeList {
    /// The merged list.
    type Output: TypeList;
}

/// Shorthand for `<A as ZipWithVariance<B, V>>::Output`.
pub type Zip<A, B, V> = <A as ZipWithVariance<B, V>>::Output;

impl<AH, AT, BH, BT, VH, VT> ZipWithVariance<Cons<BH, BT>, Cons<VH, VT>> for Cons<AH, AT>
where
    AH: 'static,
    BH: 'static,
    VH: VarianceTag,
    AT: ZipWithVariance<BT, VT>,
    BT: TypeList,
    VT: TypeList,
{
    type Output = Cons<VH::Pick<AH, BH>, Zip<AT, BT, VT>>;
}

impl<AH, AT, BH, BT> ZipWithVariance<Cons<BH, BT>, Nil> for Cons<AH, AT>
where
    AH: 'static,
    BH: 'static,
    AT: ZipWithVariance<BT, Nil>,
    BT: TypeList,
{
    type Output = Cons<Union<AH, BH>, Zip<AT, BT, Nil>>;
}

impl<AH, AT, V> ZipWithVariance<Nil, V> for Cons<AH, AT>
where
    AH: 'static,
    AT: TypeList,
    V: TypeList,
{
    type Output = Self;
}

impl<BH, BT, V> ZipWithVariance<Cons<BH, BT>, V> for Nil
where
    BH: 'static,
    BT: TypeList,
    V: TypeList,
{
    type Output = Cons<BH, BT>;
}

impl<V: TypeList> ZipWithVariance<Nil, V> for Nil {
    type Output = Nil;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Args;
    use rstest::rstest;
    use static_assertions::assert_type_eq_all;

    assert_type_eq_all!(
        Zip<Args![u8, u16], Args![i8, i16], Args![Covariant, Contravariant]>,
        Args![Union<u8, i8>, Intersection<u16, i16>]
    );
    assert_type_eq_all!(
        Zip<Args![u8], Args![i8, i16, i32], Args![Invariant]>,
        Args![Union<u8, i8>, i16, i32]
    );
    assert_type_eq_all!(Zip<Nil, Nil, Args![Covariant]>, Nil);
    assert_type_eq_all!(Zip<Args![u8], Nil, Nil>, Args![u8]);

    // merging descriptors: the tag list decides, the meet is the variance
    assert_type_eq_all!(
        Zip<Args![Covariant], Args![Invariant, Covariant], Args![Invariant, Covariant]>,
        Args![Union<Covariant, Invariant>, Covariant]
    );
    assert_type_eq_all!(
        <Intersection<Contravariant, Contravariant> as VarianceTag>::Pick<u8, i8>,
        Intersection<u8, i8>
    );
    assert_type_eq_all!(
        <Intersection<Covariant, Contravariant> as VarianceTag>::Pick<u8, i8>,
        Union<u8, i8>
    );
    type ContraMeet = Union<Contravariant, Intersection<Contravariant, Contravariant>>;
    assert_type_eq_all!(<ContraMeet as VarianceTag>::Pick<u8, i8>, Intersection<u8, i8>);
    assert_type_eq_all!(
        <Union<Contravariant, Intersection<Invariant, Contravariant>> as VarianceTag>::Pick<u8, i8>,
        Union<u8, i8>
    );

    #[rstest]
    #[case(Variance::Covariant, Variance::Covariant, Variance::Covariant)]
    #[case(Variance::Contravariant, Variance::Contravariant, Variance::Contravariant)]
    #[case(Variance::Invariant, Variance::Invariant, Variance::Invariant)]
    #[case(Variance::Covariant, Variance::Contravariant, Variance::Invariant)]
    #[case(Variance::Contravariant, Variance::Invariant, Variance::Invariant)]
    #[case(Variance::Invariant, Variance::Covariant, Variance::Invariant)]
    fn meet_keeps_agreement_only(
        #[case] left: Variance,
        #[case] right: Variance,
        #[case] expected: Variance,
    ) {
        assert_eq!(left.meet(right), expected);
        assert_eq!(right.meet(left), expected);
    }

    #[test]
    fn variance_list_reads_each_slot() {
        type Descriptor = Args![Invariant, Covariant, Contravariant];
        assert_eq!(Descriptor::variance_at(0), Some(Variance::Invariant));
        assert_eq!(Descriptor::variance_at(1), Some(Variance::Covariant));
        assert_eq!(Descriptor::variance_at(2), Some(Variance::Contravariant));
        assert_eq!(Descriptor::variance_at(3), None);
    }

    #[test]
    fn merged_tags_report_the_meet() {
        assert_eq!(
            <Union<Covariant, Covariant> as VarianceTag>::VARIANCE,
            Variance::Covariant
        );
        assert_eq!(
            <Intersection<Contravariant, Covariant> as VarianceTag>::VARIANCE,
            Variance::Invariant
        );
    }
}
