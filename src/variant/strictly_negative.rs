use std::fmt::Display;

use num_traits::AsPrimitive;

use super::{Variant, sealed::Sealed};
use crate::{error::ConstraintError, refined::Refined, sign::SignSet};

/// Marker type for integers that are strictly negative (less than zero).
///
/// Use this type with [`Refined<StrictlyNegative>`] to encode strict
/// negativity at the type level. [`StrictlyNegativeInt`] is a shorthand for
/// that type.
///
/// # Examples
///
/// ```
/// use refined_ints::{Refined, StrictlyNegative};
///
/// let x = Refined::<StrictlyNegative>::new(-1).unwrap();
/// assert_eq!(x.into_inner(), -1);
///
/// let y = StrictlyNegative::new(-42).unwrap();
/// assert_eq!(y.get(), -42);
///
/// assert!(StrictlyNegative::new(0).is_err());
/// assert!(StrictlyNegative::new(1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StrictlyNegative;

/// An `i32` less than zero.
pub type StrictlyNegativeInt = Refined<StrictlyNegative>;

impl StrictlyNegative {
    /// Constructs a [`StrictlyNegativeInt`] if the number is strictly negative.
    ///
    /// The number is first converted to `i32` with `as` semantics, which may
    /// truncate or round.
    ///
    /// # Errors
    ///
    /// Returns an error if the converted value is zero or positive.
    pub fn new<N: AsPrimitive<i32> + Display>(
        number: N,
    ) -> Result<StrictlyNegativeInt, ConstraintError> {
        Refined::new(number)
    }
}

impl Sealed for StrictlyNegative {}

impl Variant for StrictlyNegative {
    const NAME: &'static str = "StrictlyNegativeInt";
    const SCHEMA_NAME: &'static str = "refined_ints.StrictlyNegativeInt";
    const SIGNS: SignSet = SignSet::NEGATIVE;
    const EXPECTATION: &'static str = "strictly negative";
}
