//! The closed set of sign refinements.
//!
//! Each refinement is a zero-sized marker type implementing [`Variant`],
//! used with the generic [`Refined<V>`] wrapper:
//!
//! - [`Zero`]: exactly zero
//! - [`StrictlyPositive`]: greater than zero
//! - [`StrictlyNegative`]: less than zero
//! - [`Positive`]: zero or greater
//! - [`Negative`]: zero or less
//! - [`NonZero`]: not equal to zero
//! - [`Any`]: every `i32`
//!
//! Each marker also provides an associated `new()` constructor
//! (e.g., `StrictlyPositive::new(5)`) and a type alias for its refined
//! integer (e.g., [`StrictlyPositiveInt`]).
//!
//! # Capabilities
//!
//! Variants overlap rather than form an inheritance chain: zero is both
//! positive and negative, and a strictly positive value is both positive and
//! non-zero. [`SubsetOf<W>`] records these relations. Whenever `V: SubsetOf<W>`,
//! a `Refined<V>` widens losslessly into a `Refined<W>`, and APIs that need a
//! capability (such as a non-zero divisor) bound on it.
//!
//! The set of variants is sealed.

mod any;
mod negative;
mod non_zero;
mod positive;
mod strictly_negative;
mod strictly_positive;
mod zero;

use std::{fmt::Debug, hash::Hash};

use crate::{error::ConstraintError, refined::Refined, sign::SignSet};

pub use any::{Any, AnyInt};
pub use negative::{Negative, NegativeInt};
pub use non_zero::{NonZero, NonZeroInt};
pub use positive::{Positive, PositiveInt};
pub use strictly_negative::{StrictlyNegative, StrictlyNegativeInt};
pub use strictly_positive::{StrictlyPositive, StrictlyPositiveInt};
pub use zero::{Zero, ZeroInt};

/// Namespace prefixing every variant's schema name.
pub const NAMESPACE: &str = "refined_ints";

mod sealed {
    pub trait Sealed {}
}

/// A sign refinement of `i32`.
///
/// This trait is sealed: the set of variants is closed.
pub trait Variant:
    sealed::Sealed + Debug + Clone + Copy + Eq + Ord + Hash + Send + Sync + 'static
{
    /// Name of the refined integer type, such as `StrictlyPositiveInt`.
    const NAME: &'static str;

    /// Logical name published to serialization formats, `<NAMESPACE>.<NAME>`.
    const SCHEMA_NAME: &'static str;

    /// Signs a value of this variant may carry.
    const SIGNS: SignSet;

    /// Completes "Number should be ..." in error messages.
    const EXPECTATION: &'static str;

    /// Checks that the given value satisfies this variant's sign predicate.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] citing the value and the invariant if
    /// the value does not satisfy the predicate.
    fn check(value: i32) -> Result<(), ConstraintError> {
        if Self::SIGNS.admits(value) {
            Ok(())
        } else {
            Err(ConstraintError::new::<Self>(value))
        }
    }
}

/// Marks every value of `Self` as also being a value of `V`.
///
/// Implemented for each variant with itself and with every variant whose
/// sign set contains its own.
pub trait SubsetOf<V: Variant>: Variant {}

macro_rules! lattice {
    ($($sub:ident => [$($sup:ident),*];)*) => {$(
        impl SubsetOf<$sub> for $sub {}
        $(
            const _: () = assert!(
                <$sub as Variant>::SIGNS.is_subset_of(<$sup as Variant>::SIGNS)
            );

            impl SubsetOf<$sup> for $sub {}

            impl From<Refined<$sub>> for Refined<$sup> {
                fn from(value: Refined<$sub>) -> Self {
                    value.widen()
                }
            }
        )*
    )*};
}

lattice! {
    Zero => [Positive, Negative, Any];
    StrictlyPositive => [Positive, NonZero, Any];
    StrictlyNegative => [Negative, NonZero, Any];
    Positive => [Any];
    Negative => [Any];
    NonZero => [Any];
    Any => [];
}
