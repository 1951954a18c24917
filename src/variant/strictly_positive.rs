use std::fmt::Display;

use num_traits::AsPrimitive;

use super::{Variant, sealed::Sealed};
use crate::{error::ConstraintError, refined::Refined, sign::SignSet};

/// Marker type for integers that are strictly positive (greater than zero).
///
/// Use this type with [`Refined<StrictlyPositive>`] to encode strict
/// positivity at the type level. [`StrictlyPositiveInt`] is a shorthand for
/// that type.
///
/// You can construct a strictly positive integer using either the generic
/// [`Refined::new`] method or the convenient [`StrictlyPositive::new`]
/// associated function.
///
/// # Examples
///
/// ```
/// use refined_ints::{Refined, StrictlyPositive};
///
/// // Generic constructor:
/// let x = Refined::<StrictlyPositive>::new(1).unwrap();
/// assert_eq!(x.into_inner(), 1);
///
/// // Associated constructor:
/// let y = StrictlyPositive::new(42).unwrap();
/// assert_eq!(y.as_ref(), &42);
///
/// // Error cases:
/// assert!(StrictlyPositive::new(0).is_err());
/// assert!(StrictlyPositive::new(-1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StrictlyPositive;

/// An `i32` greater than zero.
pub type StrictlyPositiveInt = Refined<StrictlyPositive>;

impl StrictlyPositive {
    /// Constructs a [`StrictlyPositiveInt`] if the number is strictly positive.
    ///
    /// The number is first converted to `i32` with `as` semantics, which may
    /// truncate or round.
    ///
    /// # Errors
    ///
    /// Returns an error if the converted value is zero or negative.
    pub fn new<N: AsPrimitive<i32> + Display>(
        number: N,
    ) -> Result<StrictlyPositiveInt, ConstraintError> {
        Refined::new(number)
    }

    /// Returns one, the multiplicative identity.
    #[must_use]
    pub const fn one() -> StrictlyPositiveInt {
        StrictlyPositiveInt::MIN
    }
}

impl Sealed for StrictlyPositive {}

impl Variant for StrictlyPositive {
    const NAME: &'static str = "StrictlyPositiveInt";
    const SCHEMA_NAME: &'static str = "refined_ints.StrictlyPositiveInt";
    const SIGNS: SignSet = SignSet::POSITIVE;
    const EXPECTATION: &'static str = "strictly positive";
}
