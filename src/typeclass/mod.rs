//! Typeclass dictionaries.
//!
//! Each typeclass is a trait implemented by a zero-sized *brand* standing for
//! a type constructor (see [`crate::kind`]). The operations are associated
//! functions that take the effect values explicitly, so a dictionary is just
//! a type: `OptionF::map(fa, f)`, or `F::map(fa, f)` inside generic code.
//!
//! - [`Functor`]: `map`, with `flap`, `as_`, `map_compose`, `mapping`
//! - [`BiFunctor`]: `bimap`, with `map_left`, `map_right`
//! - [`Applicative`]: `ap`, with `lift_a2`, `product`, `product_many`, `ap_compose`
//! - [`Monad`]: `flat_map`, with `flatten`, `flat_mapping`
//! - [`Foldable`]: `reduce`
//! - [`Traversable`]: `traverse`, with `sequence`
//! - [`SemiAlternative`]: `or_else`, with `or`
//! - [`Zero`], [`Of`], [`Of2`]: constructors
//! - [`To`]: `get_or_else`, with `get_or`
//! - [`Flip`]: `flip`
//! - [`BiFlatMap`]: `bi_flat_map`, with `or_else`
//! - [`SemiAlign`]: `zip_with`, with `zip`
//!
//! ## Composition
//!
//! [`Nested`] and [`BiNested`] derive the dictionaries of a nested
//! constructor from the dictionaries of its layers.
//!
//! # Examples
//!
//! Code generic over the dictionary:
//!
//! ```rust
//! use kindred::data::option::OptionF;
//! use kindred::data::result::ResultF;
//! use kindred::kind::Hkt1;
//! use kindred::typeclass::Applicative;
//!
//! fn add<F: Applicative>(left: F::Out<i32>, right: F::Out<i32>) -> F::Out<i32> {
//!     F::lift_a2::<i32, i32, i32, _>(left, right, |a, b| a + b)
//! }
//!
//! assert_eq!(add::<OptionF>(Some(1), Some(2)), Some(3));
//! assert_eq!(add::<ResultF<&str>>(Ok(1), Err("no")), Err("no"));
//! ```

mod align;
mod alternative;
mod applicative;
mod bi_flat_map;
mod bifunctor;
mod flip;
mod foldable;
mod functor;
mod monad;
mod nested;
mod of;
mod to;
mod traversable;

pub use align::SemiAlign;
pub use alternative::{SemiAlternative, Zero};
pub use applicative::Applicative;
pub use bi_flat_map::BiFlatMap;
pub use bifunctor::BiFunctor;
pub use flip::Flip;
pub use foldable::Foldable;
pub use functor::Functor;
pub use monad::Monad;
pub use nested::{BiNested, Nested};
pub use of::{Of, Of2};
pub use to::To;
pub use traversable::Traversable;
