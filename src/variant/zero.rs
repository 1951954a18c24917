use std::fmt::Display;

use num_traits::AsPrimitive;

use super::{Variant, sealed::Sealed};
use crate::{error::ConstraintError, refined::Refined, sign::SignSet};

/// Marker type for the integer zero.
///
/// [`ZeroInt`] has exactly one value, [`ZeroInt::ZERO`]. It is both
/// [`Positive`](super::Positive) and [`Negative`](super::Negative), and is
/// what multiplying anything by zero produces.
///
/// # Examples
///
/// ```
/// use refined_ints::{Zero, ZeroInt};
///
/// assert_eq!(Zero::new(0).unwrap(), ZeroInt::ZERO);
/// assert!(Zero::new(1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Zero;

/// The `i32` zero.
pub type ZeroInt = Refined<Zero>;

impl Zero {
    /// Constructs a [`ZeroInt`] if the number is zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the number, converted to `i32`, is not zero.
    pub fn new<N: AsPrimitive<i32> + Display>(
        number: N,
    ) -> Result<ZeroInt, ConstraintError> {
        Refined::new(number)
    }
}

impl Refined<Zero> {
    /// The only zero.
    pub const ZERO: Self = Self::MIN;
}

impl Sealed for Zero {}

impl Variant for Zero {
    const NAME: &'static str = "ZeroInt";
    const SCHEMA_NAME: &'static str = "refined_ints.ZeroInt";
    const SIGNS: SignSet = SignSet::ZERO;
    const EXPECTATION: &'static str = "zero";
}
