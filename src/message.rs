//! Error messages shared by every validation failure.
//!
//! A message has two parts: what the number was expected to be, and the
//! value that was actually tried. Construction, arithmetic and decoding all
//! build their failures here so the text stays identical across entry points.

use std::fmt;

/// A two-part message: `Number should be <expectation> (tried with <attempt>).`
///
/// The attempt is kept as the text of the number the caller supplied, so a
/// float or a wide integer is cited as written rather than as its `i32`
/// conversion.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ErrorMessage {
    expectation: &'static str,
    attempt: String,
}

impl ErrorMessage {
    /// Builds the message for a number that should satisfy `expectation`
    /// (for example `"strictly positive"`) but was `attempt`.
    #[must_use]
    pub fn number_should_be(expectation: &'static str, attempt: impl fmt::Display) -> Self {
        Self {
            expectation,
            attempt: attempt.to_string(),
        }
    }

    /// What the number was expected to be.
    #[must_use]
    pub const fn expectation(&self) -> &'static str {
        self.expectation
    }

    /// The number that failed, as the caller wrote it.
    #[must_use]
    pub fn attempt(&self) -> &str {
        &self.attempt
    }
}

impl fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Number should be {} (tried with {}).",
            self.expectation, self.attempt
        )
    }
}
