use std::fmt::Display;

use num_traits::AsPrimitive;

use super::{Variant, sealed::Sealed};
use crate::{error::ConstraintError, refined::Refined, sign::SignSet};

/// Marker type for integers that are negative, zero included.
///
/// Use this type with [`Refined<Negative>`] (or [`NegativeInt`]) to encode
/// non-positivity at the type level.
///
/// # Examples
///
/// ```
/// use refined_ints::Negative;
///
/// assert_eq!(Negative::new(-7).unwrap().get(), -7);
/// assert_eq!(Negative::new(0).unwrap().get(), 0);
/// assert!(Negative::new(7).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Negative;

/// An `i32` less than or equal to zero.
pub type NegativeInt = Refined<Negative>;

impl Negative {
    /// Constructs a [`NegativeInt`] if the number is zero or less.
    ///
    /// # Errors
    ///
    /// Returns an error if the number, converted to `i32`, is positive.
    pub fn new<N: AsPrimitive<i32> + Display>(
        number: N,
    ) -> Result<NegativeInt, ConstraintError> {
        Refined::new(number)
    }

    /// Returns the additive identity (zero) as a negative integer.
    ///
    /// This is equivalent to [`NegativeInt::MAX`].
    #[must_use]
    pub const fn zero() -> NegativeInt {
        NegativeInt::MAX
    }
}

impl Sealed for Negative {}

impl Variant for Negative {
    const NAME: &'static str = "NegativeInt";
    const SCHEMA_NAME: &'static str = "refined_ints.NegativeInt";
    const SIGNS: SignSet = SignSet::ZERO_OR_NEGATIVE;
    const EXPECTATION: &'static str = "negative";
}
