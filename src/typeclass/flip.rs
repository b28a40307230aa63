//! Swapping the two slots of a binary constructor.

use crate::kind::Hkt2;

/// A type class for two-slot constructors whose slots can trade places.
///
/// # Laws
///
/// ```text
/// F::flip(F::flip(fae)) == fae
/// ```
///
/// ```rust
/// use kindred::data::result::ResultBi;
/// use kindred::typeclass::Flip;
///
/// let ok: Result<u8, String> = Ok(1);
/// assert_eq!(ResultBi::flip(ok), Err::<String, u8>(1));
/// ```
pub trait Flip: Hkt2 {
    /// `F<A, E>` to `F<E, A>`.
    fn flip<A: 'static, E: 'static>(fae: Self::Out2<A, E>) -> Self::Out2<E, A>;
}
