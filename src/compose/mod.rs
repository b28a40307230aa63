//! Point-free pipelines.
//!
//! The typeclass functions take the effect value first, which reads well in
//! a call but badly in a chain. [`pipe!`] threads a value through a list of
//! unary steps from left to right, and the curried forms
//! ([`Functor::mapping`](crate::typeclass::Functor::mapping),
//! [`Monad::flat_mapping`](crate::typeclass::Monad::flat_mapping)) supply
//! those steps for any dictionary.
//!
//! ```
//! use kindred::data::option::OptionF;
//! use kindred::pipe;
//! use kindred::typeclass::{Functor, Monad};
//!
//! let parsed = pipe!(
//!     Some("42"),
//!     OptionF::flat_mapping(|text: &str| text.parse::<i32>().ok()),
//!     OptionF::mapping(|n: i32| n + 1),
//! );
//! assert_eq!(parsed, Some(43));
//! ```
//!
//! # Laws
//!
//! - `pipe!(x, identity) == x`
//! - `pipe!(x, f, g) == g(f(x))`
//! - `pipe!(x, constant(c)) == c`

mod pipe_macro;
mod utils;

pub use utils::{constant, identity};

pub use crate::pipe;
