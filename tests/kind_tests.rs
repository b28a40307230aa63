//! Kind descriptors, checked application and composed kinds.

use kindred::Args;
use kindred::data::io::IOKind;
use kindred::data::io_result::IOResultKind;
use kindred::data::option::OptionKind;
use kindred::data::reader::ReaderKind;
use kindred::data::reader_io_result::ReaderIOResultKind;
use kindred::data::result::ResultKind;
use kindred::kind::variance::{Contravariant, Covariant, Intersection, Union, Variance, Zip};
use kindred::kind::{AtLeast, Nil, arity, variance_of};
use kindred::prelude::*;
use rstest::rstest;
use static_assertions::{assert_impl_all, assert_not_impl_any, assert_type_eq_all};

assert_type_eq_all!(Apply<OptionKind, Args![u8]>, Option<u8>);
assert_type_eq_all!(Apply<ResultKind, Args![u8, String]>, Result<u8, String>);
assert_type_eq_all!(Apply<IOResultKind, Args![u8, String]>, IO<Result<u8, String>>);
assert_type_eq_all!(Apply<ReaderKind, Args![u8, String]>, Reader<String, u8>);
assert_type_eq_all!(
    Apply<ReaderIOResultKind, Args![u8, String, bool]>,
    Reader<bool, IO<Result<u8, String>>>
);

// Extra arguments pass through untouched.
assert_type_eq_all!(Apply<OptionKind, Args![u8, String, bool]>, Option<u8>);

// Too few arguments cannot be applied.
assert_not_impl_any!(Nil: AtLeast<kindred::kind::nat::One>);
assert_not_impl_any!(Args![u8]: AtLeast<kindred::kind::nat::Two>);

// A brand must fix exactly the slots it does not abstract over.
assert_impl_all!(Lift1<ResultKind, Args![String]>: Hkt1);
assert_not_impl_any!(Lift1<ResultKind>: Hkt1);
assert_impl_all!(Lift2<ResultKind>: Hkt2);

// Contravariant slots meet with intersection, others with union, extras pass through.
assert_type_eq_all!(
    Zip<Args![u8, u16], Args![i8, i16, i32], Args![Contravariant, Covariant]>,
    Args![Intersection<u8, i8>, Union<u16, i16>, i32]
);

#[rstest]
#[case(arity::<OptionKind>(), 1)]
#[case(arity::<ResultKind>(), 2)]
#[case(arity::<IOResultKind>(), 2)]
#[case(arity::<ReaderIOResultKind>(), 3)]
fn arity_descriptors(#[case] actual: usize, #[case] expected: usize) {
    assert_eq!(actual, expected);
}

#[rstest]
fn composed_variance_meets_layer_variances() {
    // IO's covariant slot meets Result's invariant value slot.
    assert_eq!(variance_of::<IOResultKind>(0), Some(Variance::Invariant));
    assert_eq!(variance_of::<IOResultKind>(1), Some(Variance::Covariant));
    assert_eq!(variance_of::<IOResultKind>(2), None);
    assert_eq!(variance_of::<Compose<IOKind, OptionKind>>(0), Some(Variance::Covariant));
}

#[rstest]
fn reader_slots() {
    assert_eq!(variance_of::<ReaderKind>(0), Some(Variance::Covariant));
    assert_eq!(variance_of::<ReaderKind>(1), Some(Variance::Contravariant));
}
