//! Kind composition.
//!
//! `Compose<F, G>` is the kind whose application nests `G` inside the first
//! slot of `F`. The remaining slots are shared: the arguments after the first
//! reach both layers.
//!
//! ```text
//! Compose<F, G>::Apply<[a, b, c]> = F::Apply<[G::Apply<[a, b, c]>, b, c]>
//! ```
//!
//! The descriptor is the variance-aware zip of the two descriptors, directed
//! by the inner one, so the arity of the composite is the larger of the two.

use std::marker::PhantomData;

use super::Kind;
use super::list::{Cons, TypeList};
use super::variance::{VarianceList, Zip, ZipWithVariance};

/// `F` applied over `G`.
pub struct Compose<F, G>(PhantomData<fn() -> (F, G)>);

/// Descriptor of `Compose<F, G>`.
pub type ComposedVariance<F, G> =
    Zip<<F as Kind>::Variance, <G as Kind>::Variance, <G as Kind>::Variance>;

impl<F, G> Kind for Compose<F, G>
where
    F: Kind,
    G: Kind,
    F::Variance: ZipWithVariance<G::Variance, G::Variance>,
    ComposedVariance<F, G>: VarianceList,
{
    type Arity = <ComposedVariance<F, G> as TypeList>::Len;
    type Variance = ComposedVariance<F, G>;
    type Apply<Args: TypeList> = F::Apply<Cons<G::Apply<Args>, Args::Tail>>;
}
