//! Extracting a plain value from an effect.

use crate::kind::Hkt1;

/// A type class for effects that can be collapsed to their payload, with a
/// fallback for the failure case.
///
/// `Fallback` is what the failure case carries: `()` for `Option`, the
/// error for `Result`.
///
/// ```rust
/// use kindred::data::option::OptionF;
/// use kindred::data::result::ResultF;
/// use kindred::typeclass::To;
///
/// assert_eq!(OptionF::get_or(None, 7), 7);
/// assert_eq!(ResultF::<String>::get_or_else(Err("abc".to_string()), |e| e.len()), 3);
/// ```
pub trait To: Hkt1 {
    /// Payload of the failure case.
    type Fallback;

    /// The payload, or `function` applied to what the failure carries.
    fn get_or_else<A, Fun>(fa: Self::Out<A>, function: Fun) -> A
    where
        A: 'static,
        Fun: FnOnce(Self::Fallback) -> A;

    /// The payload, or `default`.
    fn get_or<A: 'static>(fa: Self::Out<A>, default: A) -> A {
        Self::get_or_else::<A, _>(fa, move |_| default)
    }
}
