//! Lifting a plain value into an effect.

use crate::kind::{Hkt1, Hkt2};

/// Wraps a value in the minimal context of `Self`.
///
/// ```rust
/// use kindred::data::array::VecF;
/// use kindred::data::option::OptionF;
/// use kindred::typeclass::Of;
///
/// assert_eq!(OptionF::of(3), Some(3));
/// assert_eq!(VecF::of('a'), vec!['a']);
/// ```
pub trait Of: Hkt1 {
    /// `value` in the success/unit context.
    fn of<A: 'static>(value: A) -> Self::Out<A>;
}

/// `of` for binary constructors; the value lands in the first slot.
///
/// ```rust
/// use kindred::data::result::ResultBi;
/// use kindred::typeclass::Of2;
///
/// assert_eq!(ResultBi::of2::<u8, String>(3), Ok(3));
/// ```
pub trait Of2: Hkt2 {
    /// `value` in the first slot, the second slot left free.
    fn of2<A: 'static, E: 'static>(value: A) -> Self::Out2<A, E>;
}
