use std::fmt::Display;

use num_traits::AsPrimitive;

use super::{Variant, sealed::Sealed};
use crate::{error::ConstraintError, refined::Refined, sign::SignSet};

/// Marker type for integers other than zero.
///
/// Use this type with [`Refined<NonZero>`] (or [`NonZeroInt`]) to encode a
/// non-zero constraint at the type level. Any refined integer whose variant
/// is a subset of `NonZero` can be used as a divisor.
///
/// # Examples
///
/// ```
/// use refined_ints::{NonZero, Refined};
///
/// let x = Refined::<NonZero>::new(1).unwrap();
/// assert_eq!(x.into_inner(), 1);
///
/// let y = NonZero::new(-5).unwrap();
/// assert_eq!(y.get(), -5);
///
/// assert!(NonZero::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NonZero;

/// An `i32` other than zero.
pub type NonZeroInt = Refined<NonZero>;

impl NonZero {
    /// Constructs a [`NonZeroInt`] if the number is not zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the number, converted to `i32`, equals zero.
    pub fn new<N: AsPrimitive<i32> + Display>(
        number: N,
    ) -> Result<NonZeroInt, ConstraintError> {
        Refined::new(number)
    }
}

impl Sealed for NonZero {}

impl Variant for NonZero {
    const NAME: &'static str = "NonZeroInt";
    const SCHEMA_NAME: &'static str = "refined_ints.NonZeroInt";
    const SIGNS: SignSet = SignSet::NON_ZERO;
    const EXPECTATION: &'static str = "other than zero";
}
