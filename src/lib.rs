//! # Refined Ints
//!
//! Sign-refined `i32` types whose invariant holds for their whole lifetime.
//!
//! A [`Refined<V>`] wraps one `i32` and guarantees it satisfies the sign
//! predicate of its variant `V`:
//!
//! | Variant              | Alias                   | Values        |
//! |----------------------|-------------------------|---------------|
//! | [`Zero`]             | [`ZeroInt`]             | `0`           |
//! | [`StrictlyPositive`] | [`StrictlyPositiveInt`] | `> 0`         |
//! | [`StrictlyNegative`] | [`StrictlyNegativeInt`] | `< 0`         |
//! | [`Positive`]         | [`PositiveInt`]         | `>= 0`        |
//! | [`Negative`]         | [`NegativeInt`]         | `<= 0`        |
//! | [`NonZero`]          | [`NonZeroInt`]          | `!= 0`        |
//! | [`Any`]              | [`AnyInt`]              | every `i32`   |
//!
//! ## Crate layout
//!
//! - [`sign`]: Sign predicates and the sign table behind every operator.
//! - [`variant`]: The variant markers and their capability relation.
//! - [`refined`]: The wrapper, its constructors and conversions.
//! - [`closure`]: Arithmetic whose result variant is known at compile time.
//! - [`error`]: Validation and parsing errors.
//! - [`message`]: The `Number should be ... (tried with ...).` text shared by
//!   every error.
//!
//! Two private modules add trait impls behind Cargo features, both on by
//! default:
//!
//! - `codec` (feature `serde`): `Serialize`/`Deserialize` as a bare number,
//!   re-validated when decoded.
//! - `random` (feature `rand`): `Refined::random`, `Refined::random_with`
//!   and `rand::distributions::Standard` sampling.
//!
//! ## Constructing values
//!
//! Every constructor validates. The outcome convention returns a
//! [`Result`]; [`Refined::create`] panics with the same message instead.
//!
//! ```
//! use refined_ints::{StrictlyPositive, StrictlyPositiveInt, ToRefined};
//!
//! let a = StrictlyPositive::new(5).unwrap();
//! let b: StrictlyPositiveInt = "5".parse().unwrap();
//! let c = 5_i64.to_strictly_positive_int().unwrap();
//! assert!(a == b && b == c);
//!
//! let error = StrictlyPositive::new(0).unwrap_err();
//! assert_eq!(
//!     error.to_string(),
//!     "Number should be strictly positive (tried with 0)."
//! );
//! ```

pub mod closure;
pub mod error;
pub mod message;
pub mod refined;
pub mod sign;
pub mod variant;

#[cfg(feature = "serde")]
mod codec;
#[cfg(feature = "rand")]
mod random;

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct ReadmeDoctests;

pub use error::{ConstraintError, ParseError};
pub use refined::{Classified, Refined, ToRefined};
pub use sign::{Sign, SignSet};
pub use variant::{
    Any, AnyInt, NAMESPACE, Negative, NegativeInt, NonZero, NonZeroInt, Positive, PositiveInt,
    StrictlyNegative, StrictlyNegativeInt, StrictlyPositive, StrictlyPositiveInt, SubsetOf,
    Variant, Zero, ZeroInt,
};
