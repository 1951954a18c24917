use std::fmt::Display;

use num_traits::AsPrimitive;

use super::{Variant, sealed::Sealed};
use crate::{error::ConstraintError, refined::Refined, sign::SignSet};

/// Marker type admitting every `i32`.
///
/// [`AnyInt`] is the top of the variant lattice: every refined integer widens
/// into it. Arithmetic whose result sign cannot be known statically produces
/// a plain `i32` rather than an `AnyInt`.
///
/// # Examples
///
/// ```
/// use refined_ints::{Any, AnyInt, Classified};
///
/// let x = AnyInt::of(-12);
/// assert!(matches!(x.classify(), Classified::StrictlyNegative(_)));
/// assert!(Any::new(i32::MIN).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Any;

/// Any `i32`.
pub type AnyInt = Refined<Any>;

impl Any {
    /// Constructs an [`AnyInt`].
    ///
    /// Kept fallible so every variant shares the same constructor shape.
    ///
    /// # Errors
    ///
    /// Never fails.
    pub fn new<N: AsPrimitive<i32> + Display>(
        number: N,
    ) -> Result<AnyInt, ConstraintError> {
        Refined::new(number)
    }
}

impl Refined<Any> {
    /// Wraps an `i32` that needs no validation.
    #[must_use]
    pub const fn of(value: i32) -> Self {
        Self::from_valid(value)
    }
}

impl Sealed for Any {}

impl Variant for Any {
    const NAME: &'static str = "AnyInt";
    const SCHEMA_NAME: &'static str = "refined_ints.AnyInt";
    const SIGNS: SignSet = SignSet::ALL;
    const EXPECTATION: &'static str = "an integer";
}
