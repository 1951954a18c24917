use std::fmt::Display;

use num_traits::AsPrimitive;

use super::{Variant, sealed::Sealed};
use crate::{error::ConstraintError, refined::Refined, sign::SignSet};

/// Marker type for integers that are positive, zero included.
///
/// Use this type with [`Refined<Positive>`] (or [`PositiveInt`]) to encode
/// non-negativity at the type level.
///
/// # Examples
///
/// ```
/// use refined_ints::{Positive, Refined};
///
/// let x = Refined::<Positive>::new(5).unwrap();
/// assert_eq!(x.into_inner(), 5);
///
/// let y = Positive::new(0).unwrap();
/// assert_eq!(y.get(), 0);
///
/// assert!(Positive::new(-7).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Positive;

/// An `i32` greater than or equal to zero.
pub type PositiveInt = Refined<Positive>;

impl Positive {
    /// Constructs a [`PositiveInt`] if the number is zero or greater.
    ///
    /// # Errors
    ///
    /// Returns an error if the number, converted to `i32`, is negative.
    pub fn new<N: AsPrimitive<i32> + Display>(
        number: N,
    ) -> Result<PositiveInt, ConstraintError> {
        Refined::new(number)
    }

    /// Returns the additive identity (zero) as a positive integer.
    ///
    /// This is equivalent to [`PositiveInt::MIN`].
    #[must_use]
    pub const fn zero() -> PositiveInt {
        PositiveInt::MIN
    }
}

impl Sealed for Positive {}

impl Variant for Positive {
    const NAME: &'static str = "PositiveInt";
    const SCHEMA_NAME: &'static str = "refined_ints.PositiveInt";
    const SIGNS: SignSet = SignSet::ZERO_OR_POSITIVE;
    const EXPECTATION: &'static str = "positive";
}
