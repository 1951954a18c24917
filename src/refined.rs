//! The refined integer wrapper.

use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
    str::FromStr,
};

use num_traits::{AsPrimitive, Bounded};

use crate::{
    error::{ConstraintError, ParseError},
    sign::Sign,
    variant::{
        NegativeInt, NonZeroInt, PositiveInt, StrictlyNegativeInt, StrictlyPositiveInt, SubsetOf,
        Variant, ZeroInt,
    },
};

/// An `i32` that satisfies the sign predicate of the variant `V` for its
/// whole lifetime.
///
/// Values are only obtained through validated entry points: [`Refined::new`]
/// (and its aliases such as
/// [`StrictlyPositive::new`](crate::StrictlyPositive::new) or the [`ToRefined`]
/// methods), [`Refined::create`], parsing, decoding, sampling, and the
/// closed arithmetic of the [`closure`](crate::closure) module.
///
/// # Example
///
/// ```
/// use refined_ints::{Refined, StrictlyPositive};
///
/// let n = Refined::<StrictlyPositive>::new(42).unwrap();
/// assert_eq!(n.into_inner(), 42);
/// ```
#[derive(Clone, Copy)]
pub struct Refined<V: Variant> {
    value: i32,
    _marker: PhantomData<V>,
}

impl<V: Variant> Refined<V> {
    /// The smallest value of this variant.
    pub const MIN: Self = Self::from_valid(bound(V::SIGNS.min()));

    /// The largest value of this variant.
    pub const MAX: Self = Self::from_valid(bound(V::SIGNS.max()));

    /// Constructs a refined integer from any primitive number.
    ///
    /// The number is converted to `i32` with `as` semantics first: wider
    /// integers keep their low 32 bits, floats are truncated toward zero and
    /// saturate at the `i32` bounds, and `NaN` becomes zero. The converted
    /// value is then checked against the variant.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the converted value does not satisfy
    /// the variant. Its message cites the number as passed, and
    /// [`ConstraintError::value`] holds the converted value.
    pub fn new<N: AsPrimitive<i32> + fmt::Display>(number: N) -> Result<Self, ConstraintError> {
        let value: i32 = number.as_();
        if V::SIGNS.admits(value) {
            Ok(Self::from_valid(value))
        } else {
            Err(ConstraintError::tried_with::<V>(number, value))
        }
    }

    /// Constructs a refined integer, panicking on an invalid number.
    ///
    /// This is the panicking twin of [`Refined::new`].
    ///
    /// # Panics
    ///
    /// Panics with the [`ConstraintError`] message [`Refined::new`] would
    /// return.
    #[must_use]
    pub fn create<N: AsPrimitive<i32> + fmt::Display>(number: N) -> Self {
        Self::new(number).unwrap_or_else(|error| panic!("{error}"))
    }

    /// Wraps a value already known to satisfy the variant.
    pub(crate) const fn from_valid(value: i32) -> Self {
        debug_assert!(V::SIGNS.admits(value), "value outside its variant");
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Returns the wrapped value.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.value
    }

    /// Consumes the wrapper and returns the inner value.
    #[must_use]
    pub const fn into_inner(self) -> i32 {
        self.value
    }

    #[must_use]
    pub const fn sign(self) -> Sign {
        Sign::of(self.value)
    }

    /// Returns the leaf variant this value belongs to.
    #[must_use]
    pub const fn classify(self) -> Classified {
        match self.sign() {
            Sign::Negative => Classified::StrictlyNegative(Refined::from_valid(self.value)),
            Sign::Zero => Classified::Zero(Refined::from_valid(self.value)),
            Sign::Positive => Classified::StrictlyPositive(Refined::from_valid(self.value)),
        }
    }

    /// Converts into a variant that contains this one.
    #[must_use]
    pub const fn widen<W: Variant>(self) -> Refined<W>
    where
        V: SubsetOf<W>,
    {
        Refined::from_valid(self.value)
    }

    /// Converts into any other variant, re-checking the value.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value is outside `W`.
    pub fn narrow<W: Variant>(self) -> Result<Refined<W>, ConstraintError> {
        Refined::new(self.value)
    }

    /// Returns the next value of this variant.
    ///
    /// Values outside the variant are skipped, and incrementing
    /// [`MAX`](Self::MAX) cycles to [`MIN`](Self::MIN).
    #[must_use]
    pub fn increment(self) -> Self {
        let mut next = if self.value == Self::MAX.value {
            Self::MIN.value
        } else {
            self.value + 1
        };
        while !V::SIGNS.admits(next) {
            next = next.wrapping_add(1);
        }
        Self::from_valid(next)
    }

    /// Returns the previous value of this variant.
    ///
    /// Values outside the variant are skipped, and decrementing
    /// [`MIN`](Self::MIN) cycles to [`MAX`](Self::MAX).
    #[must_use]
    pub fn decrement(self) -> Self {
        let mut previous = if self.value == Self::MIN.value {
            Self::MAX.value
        } else {
            self.value - 1
        };
        while !V::SIGNS.admits(previous) {
            previous = previous.wrapping_sub(1);
        }
        Self::from_valid(previous)
    }
}

const fn bound(limit: Option<i32>) -> i32 {
    match limit {
        Some(value) => value,
        None => panic!("variant admits no value"),
    }
}

/// A refined integer split into the leaf variant it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classified {
    Zero(ZeroInt),
    StrictlyPositive(StrictlyPositiveInt),
    StrictlyNegative(StrictlyNegativeInt),
}

impl Classified {
    /// Returns the wrapped value.
    #[must_use]
    pub const fn get(self) -> i32 {
        match self {
            Classified::Zero(value) => value.get(),
            Classified::StrictlyPositive(value) => value.get(),
            Classified::StrictlyNegative(value) => value.get(),
        }
    }
}

/// Conversions from any primitive number into a refined integer.
///
/// Implemented for every type that converts to `i32` with `as`. Each method
/// behaves exactly like [`Refined::new`] for its variant.
///
/// # Example
///
/// ```
/// use refined_ints::ToRefined;
///
/// assert_eq!(5_i32.to_strictly_positive_int().unwrap().get(), 5);
/// assert_eq!(
///     0_i32.to_strictly_positive_int().unwrap_err().to_string(),
///     "Number should be strictly positive (tried with 0)."
/// );
/// ```
pub trait ToRefined: AsPrimitive<i32> + fmt::Display {
    /// Converts into the variant `V`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the converted value is outside `V`.
    fn to_refined<V: Variant>(self) -> Result<Refined<V>, ConstraintError> {
        Refined::new(self)
    }

    /// # Errors
    ///
    /// Returns a [`ConstraintError`] unless the converted value is zero.
    fn to_zero_int(self) -> Result<ZeroInt, ConstraintError> {
        self.to_refined()
    }

    /// # Errors
    ///
    /// Returns a [`ConstraintError`] unless the converted value is greater than zero.
    fn to_strictly_positive_int(self) -> Result<StrictlyPositiveInt, ConstraintError> {
        self.to_refined()
    }

    /// # Errors
    ///
    /// Returns a [`ConstraintError`] unless the converted value is less than zero.
    fn to_strictly_negative_int(self) -> Result<StrictlyNegativeInt, ConstraintError> {
        self.to_refined()
    }

    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the converted value is less than zero.
    fn to_positive_int(self) -> Result<PositiveInt, ConstraintError> {
        self.to_refined()
    }

    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the converted value is greater than zero.
    fn to_negative_int(self) -> Result<NegativeInt, ConstraintError> {
        self.to_refined()
    }

    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the converted value is zero.
    fn to_non_zero_int(self) -> Result<NonZeroInt, ConstraintError> {
        self.to_refined()
    }
}

impl<N: AsPrimitive<i32> + fmt::Display> ToRefined for N {}

/// Returns a reference to the inner unrefined value.
impl<V: Variant> AsRef<i32> for Refined<V> {
    fn as_ref(&self) -> &i32 {
        &self.value
    }
}

impl<V: Variant> From<Refined<V>> for i32 {
    fn from(value: Refined<V>) -> Self {
        value.value
    }
}

impl<V: Variant> From<Refined<V>> for i64 {
    fn from(value: Refined<V>) -> Self {
        i64::from(value.value)
    }
}

impl<V: Variant> TryFrom<i32> for Refined<V> {
    type Error = ConstraintError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Parses a decimal `i32`, then checks it against the variant.
impl<V: Variant> FromStr for Refined<V> {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let value: i32 = text.parse()?;
        Ok(Self::new(value)?)
    }
}

impl<V: Variant> fmt::Debug for Refined<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(V::NAME).field(&self.value).finish()
    }
}

impl<V: Variant> fmt::Display for Refined<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

/// Compares values across variants.
impl<V: Variant, W: Variant> PartialEq<Refined<W>> for Refined<V> {
    fn eq(&self, other: &Refined<W>) -> bool {
        self.value == other.value
    }
}

impl<V: Variant> Eq for Refined<V> {}

impl<V: Variant, W: Variant> PartialOrd<Refined<W>> for Refined<V> {
    fn partial_cmp(&self, other: &Refined<W>) -> Option<Ordering> {
        Some(self.value.cmp(&other.value))
    }
}

impl<V: Variant> Ord for Refined<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<V: Variant> Hash for Refined<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<V: Variant> PartialEq<i32> for Refined<V> {
    fn eq(&self, other: &i32) -> bool {
        self.value == *other
    }
}

impl<V: Variant> PartialEq<Refined<V>> for i32 {
    fn eq(&self, other: &Refined<V>) -> bool {
        *self == other.value
    }
}

impl<V: Variant> PartialOrd<i32> for Refined<V> {
    fn partial_cmp(&self, other: &i32) -> Option<Ordering> {
        Some(self.value.cmp(other))
    }
}

impl<V: Variant> PartialOrd<Refined<V>> for i32 {
    fn partial_cmp(&self, other: &Refined<V>) -> Option<Ordering> {
        Some(self.cmp(&other.value))
    }
}

impl<V: Variant> Bounded for Refined<V> {
    fn min_value() -> Self {
        Self::MIN
    }

    fn max_value() -> Self {
        Self::MAX
    }
}
