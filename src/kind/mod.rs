//! Kind encoding: type constructors as first-class types.
//!
//! Rust has no higher-kinded types, so a constructor such as `Result` is
//! represented by a zero-sized *kind* type implementing [`Kind`]. A kind
//! declares
//!
//! - its **arity** (how many type parameters it takes), as a type-level
//!   natural from [`nat`],
//! - its **variance descriptor**, one tag per slot, from [`variance`],
//! - and **`Apply`**, which builds the concrete type from a parameter list.
//!
//! `Apply` accepts a parameter list of any length: it reads the first
//! `Arity` entries and ignores the rest. The checked alias [`Apply`] adds the
//! requirement that at least `Arity` entries are present, which turns an
//! under-applied constructor into a compile error.
//!
//! Typeclass dictionaries are not written against `Kind` directly but
//! against the fixed shapes in [`shape`], which adapt a kind of any arity.
//!
//! # Example
//!
//! ```rust
//! use kindred::Args;
//! use kindred::data::result::ResultKind;
//! use kindred::kind::variance::Variance;
//! use kindred::kind::{Apply, arity, variance_of};
//!
//! let value: Apply<ResultKind, Args![u8, String]> = Ok(7);
//! assert_eq!(value, Ok::<u8, String>(7));
//!
//! assert_eq!(arity::<ResultKind>(), 2);
//! assert_eq!(variance_of::<ResultKind>(0), Some(Variance::Invariant));
//! assert_eq!(variance_of::<ResultKind>(1), Some(Variance::Covariant));
//! ```
//!
//! Under-application does not compile:
//!
//! ```compile_fail
//! use kindred::Args;
//! use kindred::data::result::ResultKind;
//! use kindred::kind::Apply;
//!
//! let value: Apply<ResultKind, Args![u8]> = Ok(7);
//! ```

pub mod compose;
pub mod list;
pub mod nat;
pub mod shape;
pub mod variance;

pub use compose::Compose;
pub use list::{AtLeast, Cons, Missing, Nil, TypeList};
pub use nat::Nat;
pub use shape::{Hkt1, Hkt2, Lift1, Lift2};
pub use variance::{Variance, VarianceList};

/// A type constructor of fixed arity and declared variance.
///
/// # Laws
///
/// - `Variance` lists one tag per slot, so its length equals `Arity`.
/// - `Apply` depends only on the first `Arity` entries of its argument list.
pub trait Kind: 'static {
    /// Number of type parameters.
    type Arity: Nat;

    /// One variance tag per parameter.
    type Variance: VarianceList;

    /// The constructor applied to `Args`. Entries past `Arity` are ignored;
    /// missing entries read as [`Missing`].
    type Apply<Args: TypeList>: 'static;
}

/// `K` applied to `Args`, provided `Args` holds at least `K::Arity` entries.
pub type Apply<K, Args> = <K as Kind>::Apply<<Args as AtLeast<<K as Kind>::Arity>>::List>;

/// Declared arity of `K`.
#[must_use]
pub const fn arity<K: Kind>() -> usize {
    <K::Arity as Nat>::VALUE
}

/// Declared variance of slot `index` of `K`, `None` past its arity.
#[must_use]
pub fn variance_of<K: Kind>(index: usize) -> Option<Variance> {
    <K::Variance as VarianceList>::variance_at(index)
}
