use std::{fmt::Display, num::ParseIntError};

use thiserror::Error;

use crate::{message::ErrorMessage, variant::Variant};

/// An error returned when a value does not satisfy a variant's sign predicate.
///
/// The same error is produced by direct construction, by an arithmetic
/// operation whose primitive result overflowed out of its destination
/// variant, and (wrapped in the format's own error type) by decoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error("{message}")]
pub struct ConstraintError {
    variant: &'static str,
    value: i32,
    message: ErrorMessage,
}

impl ConstraintError {
    pub(crate) fn new<V: Variant>(value: i32) -> Self {
        Self::tried_with::<V>(value, value)
    }

    /// Rejects `value`, the `i32` conversion of `input`, citing `input` in
    /// the message.
    pub(crate) fn tried_with<V: Variant>(input: impl Display, value: i32) -> Self {
        Self {
            variant: V::NAME,
            value,
            message: ErrorMessage::number_should_be(V::EXPECTATION, input),
        }
    }

    /// The rejected value after conversion to `i32`.
    #[must_use]
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Name of the variant that rejected the value, such as `StrictlyPositiveInt`.
    #[must_use]
    pub fn variant(&self) -> &'static str {
        self.variant
    }

    /// The invariant the value had to satisfy, such as `strictly positive`.
    #[must_use]
    pub fn expectation(&self) -> &'static str {
        self.message.expectation()
    }

    #[must_use]
    pub fn message(&self) -> &ErrorMessage {
        &self.message
    }
}

/// An error returned when parsing a refined integer from text.
///
/// This enum is marked `#[non_exhaustive]` and may include additional variants
/// in future releases.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The text is not a decimal 32-bit integer.
    #[error("invalid integer: {0}")]
    Integer(#[from] ParseIntError),

    /// The text is an integer outside the variant's domain.
    #[error(transparent)]
    Constraint(#[from] ConstraintError),
}
