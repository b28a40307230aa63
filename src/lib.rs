//! # kindred
//!
//! Higher-kinded typeclasses for Rust, with dictionaries that compose.
//!
//! ## Overview
//!
//! - **Kinds** ([`kind`]): type constructors described by an arity, a
//!   variance per slot and an application rule, plus `Compose` to nest one
//!   kind inside another.
//! - **Typeclasses** ([`typeclass`]): Functor, Applicative, Monad, Foldable,
//!   Traversable, BiFunctor and friends, written as static functions on
//!   zero-sized brands. `Nested` and `BiNested` build the dictionaries of a
//!   composite from those of its layers.
//! - **Data** ([`data`]): Option, Result, Vec, IO, AsyncIO, Reader and the
//!   composites IOResult, AsyncIOOption and ReaderIOResult.
//! - **Pipelines** ([`compose`]): `pipe!` and point-free helpers.
//!
//! ## Feature Flags
//!
//! - `compose`: `pipe!`, `identity`, `constant`
//! - `async`: `AsyncIO` and `AsyncIOOption` (pulls in `futures` and `tokio`)
//! - `full`: everything
//!
//! ## Example
//!
//! ```rust
//! use kindred::prelude::*;
//!
//! fn add_all<F: Applicative>(values: Vec<F::Out<i32>>) -> F::Out<i32> {
//!     let all = F::product_many::<i32, _>(values);
//!     F::map::<Vec<i32>, i32, _>(all, |numbers| numbers.into_iter().sum())
//! }
//!
//! assert_eq!(add_all::<OptionF>(vec![Some(1), Some(2)]), Some(3));
//! assert_eq!(add_all::<OptionF>(vec![Some(1), None]), None);
//! assert_eq!(add_all::<ResultF<String>>(vec![Ok(4), Ok(5)]), Ok(9));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]
#![allow(clippy::type_complexity)]

/// Commonly used traits, brands and helpers.
///
/// ```rust
/// use kindred::prelude::*;
/// ```
pub mod prelude {
    pub use crate::kind::{Apply, Compose, Hkt1, Hkt2, Kind, Lift1, Lift2};
    pub use crate::typeclass::*;

    pub use crate::data::array::VecF;
    pub use crate::data::identity::{Identity, IdentityF};
    pub use crate::data::io::{IO, IOF};
    pub use crate::data::io_result::{IOResult, IOResultBi, IOResultF};
    pub use crate::data::option::OptionF;
    pub use crate::data::reader::{Reader, ReaderF};
    pub use crate::data::reader_io_result::{ReaderIOResult, ReaderIOResultF};
    pub use crate::data::result::{ResultBi, ResultF};

    #[cfg(feature = "async")]
    pub use crate::data::async_io::{AsyncIO, AsyncIOF};
    #[cfg(feature = "async")]
    pub use crate::data::async_io_option::{AsyncIOOption, AsyncIOOptionF};

    #[cfg(feature = "compose")]
    pub use crate::compose::*;
}

pub mod data;
pub mod error;
pub mod kind;
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;
