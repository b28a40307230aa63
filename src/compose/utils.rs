//! Combinators for pipelines and typeclass arguments.

/// Returns its argument.
///
/// Passed to [`Traversable::traverse`](crate::typeclass::Traversable::traverse)
/// it gives `sequence`; passed to `map` it leaves the structure unchanged.
///
/// ```
/// use kindred::compose::identity;
/// use kindred::data::option;
///
/// assert_eq!(option::map(Some(3), identity), Some(3));
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// A function ignoring its input and returning a clone of `value`.
///
/// ```
/// use kindred::compose::constant;
/// use kindred::data::array;
///
/// assert_eq!(array::map(vec!["a", "b"], constant(0)), vec![0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T + Clone {
    move |_| value.clone()
}
