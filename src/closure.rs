//! Arithmetic closed over the refined variants.
//!
//! The result type of every operator is computed at compile time from the
//! sign table in [`Operator::apply`]: the operand variants' sign sets are
//! combined with [`SignSet::closure`], and the narrowest variant covering the
//! combined set becomes the result. A result that may carry any sign widens
//! to a plain `i32`.
//!
//! ```
//! use refined_ints::{NegativeInt, PositiveInt, StrictlyPositiveInt};
//!
//! let a = PositiveInt::create(3);
//! let b = StrictlyPositiveInt::create(4);
//! let sum: StrictlyPositiveInt = a + b;
//! assert_eq!(sum.get(), 7);
//!
//! // The sign of a difference is unknown, so it is a plain `i32`.
//! let difference: i32 = a - b;
//! assert_eq!(difference, -1);
//!
//! let negated: NegativeInt = -a;
//! assert_eq!(negated.get(), -3);
//! ```
//!
//! The primitive result is computed with two's complement wrapping and then
//! re-enters the smart constructor of the result variant. When overflow flips
//! the sign out of that variant, the `try_*` methods return the same
//! [`ConstraintError`] construction would, and the operators panic with its
//! message.
//!
//! Division and remainder are only defined for divisors whose variant is a
//! subset of [`NonZero`].

use std::{
    fmt, iter,
    ops::{Add, Div, Mul, Neg, Rem, Sub},
};

use crate::{
    error::ConstraintError,
    refined::Refined,
    sign::{Operator, SignSet},
    variant::{
        Any, Negative, NegativeInt, NonZero, NonZeroInt, Positive, PositiveInt, StrictlyNegative,
        StrictlyNegativeInt, StrictlyPositive, StrictlyPositiveInt, SubsetOf, Variant, Zero,
        ZeroInt,
    },
};

/// A type an arithmetic result may land in: a refined integer or `i32`.
pub trait Outcome: Copy {
    /// Signs a value of this type may carry.
    const SIGNS: SignSet;

    /// Validates a primitive result against this type.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value is outside this type.
    fn settle(value: i32) -> Result<Self, ConstraintError>;

    /// Returns the primitive value.
    fn primitive(self) -> i32;
}

impl Outcome for i32 {
    const SIGNS: SignSet = SignSet::ALL;

    fn settle(value: i32) -> Result<Self, ConstraintError> {
        Ok(value)
    }

    fn primitive(self) -> i32 {
        self
    }
}

impl<V: Variant> Outcome for Refined<V> {
    const SIGNS: SignSet = V::SIGNS;

    fn settle(value: i32) -> Result<Self, ConstraintError> {
        Refined::new(value)
    }

    fn primitive(self) -> i32 {
        self.get()
    }
}

/// A sign set lifted to the type level by its [`SignSet::bits`].
#[doc(hidden)]
#[derive(Debug)]
pub struct Signs<const BITS: u8>;

/// Maps a type-level sign set to the narrowest type covering it.
#[doc(hidden)]
pub trait Narrowest {
    type Output: Outcome;
}

macro_rules! narrowest {
    ($($signs:ident => $output:ty,)*) => {$(
        impl Narrowest for Signs<{ SignSet::$signs.bits() }> {
            type Output = $output;
        }
    )*};
}

narrowest! {
    ZERO => ZeroInt,
    POSITIVE => StrictlyPositiveInt,
    NEGATIVE => StrictlyNegativeInt,
    ZERO_OR_POSITIVE => PositiveInt,
    ZERO_OR_NEGATIVE => NegativeInt,
    NON_ZERO => NonZeroInt,
    ALL => i32,
}

/// Result types of addition, subtraction and multiplication.
pub trait Closure<Rhs> {
    type Sum: Outcome;
    type Difference: Outcome;
    type Product: Outcome;
}

/// Result types of division and remainder by a non-zero divisor.
pub trait DivisionClosure<Rhs> {
    type Quotient: Outcome;
    type Remainder: Outcome;
}

/// Result type of negation.
pub trait Negation {
    type Negated: Outcome;
}

macro_rules! closed {
    ($lhs:ident $operator:ident $rhs:ident) => {
        <Signs<
            {
                <$lhs as Variant>::SIGNS
                    .closure(Operator::$operator, <$rhs as Variant>::SIGNS)
                    .bits()
            }
        > as Narrowest>::Output
    };
}

macro_rules! closure_table {
    ($($lhs:ident),*; $rhs:tt) => {
        $(closure_table!(@row $lhs $rhs);)*
    };
    (@row $lhs:ident [$($rhs:ident),*]) => {$(
        impl Closure<Refined<$rhs>> for Refined<$lhs> {
            type Sum = closed!($lhs Add $rhs);
            type Difference = closed!($lhs Subtract $rhs);
            type Product = closed!($lhs Multiply $rhs);
        }
    )*};
}

macro_rules! division_table {
    ($($lhs:ident),*; $rhs:tt) => {
        $(division_table!(@row $lhs $rhs);)*
    };
    (@row $lhs:ident [$($rhs:ident),*]) => {$(
        const _: () = assert!(<$rhs as Variant>::SIGNS.is_subset_of(SignSet::NON_ZERO));

        impl DivisionClosure<Refined<$rhs>> for Refined<$lhs> {
            type Quotient = closed!($lhs Divide $rhs);
            type Remainder = closed!($lhs Remainder $rhs);
        }
    )*};
}

macro_rules! negation_table {
    ($($variant:ident),*) => {$(
        impl Negation for Refined<$variant> {
            type Negated = <Signs<{ <$variant as Variant>::SIGNS.negation().bits() }> as Narrowest>::Output;
        }
    )*};
}

closure_table! {
    Zero, StrictlyPositive, StrictlyNegative, Positive, Negative, NonZero, Any;
    [Zero, StrictlyPositive, StrictlyNegative, Positive, Negative, NonZero, Any]
}

division_table! {
    Zero, StrictlyPositive, StrictlyNegative, Positive, Negative, NonZero, Any;
    [StrictlyPositive, StrictlyNegative, NonZero]
}

negation_table!(Zero, StrictlyPositive, StrictlyNegative, Positive, Negative, NonZero, Any);

/// Validates a wrapped primitive result against its destination type.
fn settle<T: Outcome>(expression: fmt::Arguments<'_>, result: i32) -> Result<T, ConstraintError> {
    T::settle(result).inspect_err(|error| {
        tracing::debug!(
            %expression,
            result,
            variant = error.variant(),
            "arithmetic result left its variant"
        );
    })
}

fn raise<T>(outcome: Result<T, ConstraintError>) -> T {
    outcome.unwrap_or_else(|error| panic!("{error}"))
}

impl<L: Variant> Refined<L> {
    /// Adds two refined integers.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the wrapped sum overflowed out of
    /// the result variant.
    pub fn try_add<R: Variant>(
        self,
        rhs: Refined<R>,
    ) -> Result<<Self as Closure<Refined<R>>>::Sum, ConstraintError>
    where
        Self: Closure<Refined<R>>,
    {
        let (lhs, rhs) = (self.get(), rhs.get());
        settle(format_args!("{lhs} + {rhs}"), lhs.wrapping_add(rhs))
    }

    /// Subtracts a refined integer.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the wrapped difference overflowed
    /// out of the result variant.
    pub fn try_sub<R: Variant>(
        self,
        rhs: Refined<R>,
    ) -> Result<<Self as Closure<Refined<R>>>::Difference, ConstraintError>
    where
        Self: Closure<Refined<R>>,
    {
        let (lhs, rhs) = (self.get(), rhs.get());
        settle(format_args!("{lhs} - {rhs}"), lhs.wrapping_sub(rhs))
    }

    /// Multiplies two refined integers.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the wrapped product overflowed out
    /// of the result variant.
    pub fn try_mul<R: Variant>(
        self,
        rhs: Refined<R>,
    ) -> Result<<Self as Closure<Refined<R>>>::Product, ConstraintError>
    where
        Self: Closure<Refined<R>>,
    {
        let (lhs, rhs) = (self.get(), rhs.get());
        settle(format_args!("{lhs} * {rhs}"), lhs.wrapping_mul(rhs))
    }

    /// Divides by a non-zero refined integer, truncating toward zero.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] for `i32::MIN / -1` when its wrapped
    /// result is outside the result variant.
    pub fn try_div<R: SubsetOf<NonZero>>(
        self,
        rhs: Refined<R>,
    ) -> Result<<Self as DivisionClosure<Refined<R>>>::Quotient, ConstraintError>
    where
        Self: DivisionClosure<Refined<R>>,
    {
        let (lhs, rhs) = (self.get(), rhs.get());
        settle(format_args!("{lhs} / {rhs}"), lhs.wrapping_div(rhs))
    }

    /// Returns the remainder of truncating division by a non-zero refined
    /// integer. The remainder takes the sign of the dividend.
    ///
    /// # Errors
    ///
    /// Never fails in practice, since a remainder cannot overflow; the
    /// result still re-enters its variant's constructor.
    pub fn try_rem<R: SubsetOf<NonZero>>(
        self,
        rhs: Refined<R>,
    ) -> Result<<Self as DivisionClosure<Refined<R>>>::Remainder, ConstraintError>
    where
        Self: DivisionClosure<Refined<R>>,
    {
        let (lhs, rhs) = (self.get(), rhs.get());
        settle(format_args!("{lhs} % {rhs}"), lhs.wrapping_rem(rhs))
    }

    /// Negates the value.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] when negating `i32::MIN` wraps back to a
    /// value outside the result variant.
    pub fn try_neg(self) -> Result<<Self as Negation>::Negated, ConstraintError>
    where
        Self: Negation,
    {
        let operand = self.get();
        settle(format_args!("-({operand})"), operand.wrapping_neg())
    }
}

macro_rules! closed_operator {
    ($trait:ident, $method:ident, $closure:ident, $output:ident, $checked:ident) => {
        /// # Panics
        ///
        /// Panics with the [`ConstraintError`] message if the result overflowed
        /// out of its variant.
        impl<L: Variant, R: Variant> $trait<Refined<R>> for Refined<L>
        where
            Self: $closure<Refined<R>>,
        {
            type Output = <Self as $closure<Refined<R>>>::$output;

            fn $method(self, rhs: Refined<R>) -> Self::Output {
                raise(self.$checked(rhs))
            }
        }
    };
}

closed_operator!(Add, add, Closure, Sum, try_add);
closed_operator!(Sub, sub, Closure, Difference, try_sub);
closed_operator!(Mul, mul, Closure, Product, try_mul);

impl<L: Variant, R: SubsetOf<NonZero>> Div<Refined<R>> for Refined<L>
where
    Self: DivisionClosure<Refined<R>>,
{
    type Output = <Self as DivisionClosure<Refined<R>>>::Quotient;

    fn div(self, rhs: Refined<R>) -> Self::Output {
        raise(self.try_div(rhs))
    }
}

impl<L: Variant, R: SubsetOf<NonZero>> Rem<Refined<R>> for Refined<L>
where
    Self: DivisionClosure<Refined<R>>,
{
    type Output = <Self as DivisionClosure<Refined<R>>>::Remainder;

    fn rem(self, rhs: Refined<R>) -> Self::Output {
        raise(self.try_rem(rhs))
    }
}

impl<V: Variant> Neg for Refined<V>
where
    Self: Negation,
{
    type Output = <Self as Negation>::Negated;

    fn neg(self) -> Self::Output {
        raise(self.try_neg())
    }
}

macro_rules! mixed_operator {
    ($trait:ident, $method:ident, $wrapping:ident) => {
        impl<V: Variant> $trait<i32> for Refined<V> {
            type Output = i32;

            fn $method(self, rhs: i32) -> i32 {
                self.get().$wrapping(rhs)
            }
        }

        impl<V: Variant> $trait<Refined<V>> for i32 {
            type Output = i32;

            fn $method(self, rhs: Refined<V>) -> i32 {
                self.$wrapping(rhs.get())
            }
        }
    };
}

mixed_operator!(Add, add, wrapping_add);
mixed_operator!(Sub, sub, wrapping_sub);
mixed_operator!(Mul, mul, wrapping_mul);

/// Divides a primitive by a non-zero refined integer without a zero check.
impl<R: SubsetOf<NonZero>> Div<Refined<R>> for i32 {
    type Output = i32;

    fn div(self, rhs: Refined<R>) -> i32 {
        self.wrapping_div(rhs.get())
    }
}

impl<R: SubsetOf<NonZero>> Rem<Refined<R>> for i32 {
    type Output = i32;

    fn rem(self, rhs: Refined<R>) -> i32 {
        self.wrapping_rem(rhs.get())
    }
}

impl num_traits::Zero for ZeroInt {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        true
    }
}

impl num_traits::Zero for PositiveInt {
    fn zero() -> Self {
        Self::MIN
    }

    fn is_zero(&self) -> bool {
        self.get() == 0
    }
}

impl num_traits::Zero for NegativeInt {
    fn zero() -> Self {
        Self::MAX
    }

    fn is_zero(&self) -> bool {
        self.get() == 0
    }
}

impl num_traits::One for StrictlyPositiveInt {
    fn one() -> Self {
        Self::MIN
    }
}

impl num_traits::One for PositiveInt {
    fn one() -> Self {
        StrictlyPositiveInt::MIN.widen()
    }
}

/// Sums refined integers whose variant is closed under addition.
///
/// # Panics
///
/// Panics if an intermediate sum overflows out of the variant.
impl<V> iter::Sum for Refined<V>
where
    V: Variant,
    Refined<V>: Add<Output = Self> + num_traits::Zero,
{
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(<Self as num_traits::Zero>::zero(), |a, b| a + b)
    }
}

/// Multiplies refined integers whose variant is closed under multiplication.
///
/// # Panics
///
/// Panics if an intermediate product overflows out of the variant.
impl<V> iter::Product for Refined<V>
where
    V: Variant,
    Refined<V>: Mul<Output = Self> + num_traits::One,
{
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(<Self as num_traits::One>::one(), |a, b| a * b)
    }
}

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero as _};

    use super::*;
    use crate::variant::AnyInt;

    const SAMPLES: [i32; 13] = [
        i32::MIN,
        i32::MIN + 1,
        -65_536,
        -7,
        -2,
        -1,
        0,
        1,
        2,
        7,
        65_536,
        i32::MAX - 1,
        i32::MAX,
    ];

    fn samples<V: Variant>() -> impl Iterator<Item = Refined<V>> {
        SAMPLES.into_iter().filter_map(|value| Refined::new(value).ok())
    }

    /// Whenever the primitive operation does not overflow, the refined one
    /// succeeds and agrees with it.
    fn assert_closed<L: Variant, R: Variant>()
    where
        Refined<L>: Closure<Refined<R>>,
    {
        for lhs in samples::<L>() {
            for rhs in samples::<R>() {
                let (a, b) = (lhs.get(), rhs.get());
                if let Some(expected) = a.checked_add(b) {
                    assert_eq!(lhs.try_add(rhs).unwrap().primitive(), expected);
                }
                if let Some(expected) = a.checked_sub(b) {
                    assert_eq!(lhs.try_sub(rhs).unwrap().primitive(), expected);
                }
                if let Some(expected) = a.checked_mul(b) {
                    assert_eq!(lhs.try_mul(rhs).unwrap().primitive(), expected);
                }
            }
        }
    }

    fn assert_division_closed<L: Variant, R: SubsetOf<NonZero>>()
    where
        Refined<L>: DivisionClosure<Refined<R>>,
    {
        for lhs in samples::<L>() {
            for rhs in samples::<R>() {
                let (a, b) = (lhs.get(), rhs.get());
                if let Some(expected) = a.checked_div(b) {
                    assert_eq!(lhs.try_div(rhs).unwrap().primitive(), expected);
                }
                if let Some(expected) = a.checked_rem(b) {
                    assert_eq!(lhs.try_rem(rhs).unwrap().primitive(), expected);
                }
            }
        }
    }

    fn assert_negation_closed<V: Variant>()
    where
        Refined<V>: Negation,
    {
        for value in samples::<V>() {
            if let Some(expected) = value.get().checked_neg() {
                assert_eq!(value.try_neg().unwrap().primitive(), expected);
            }
        }
    }

    macro_rules! each_pair {
        ($check:ident; $($lhs:ident),*; $rhs:tt) => {
            $(each_pair!(@row $check $lhs $rhs);)*
        };
        (@row $check:ident $lhs:ident [$($rhs:ident),*]) => {
            $($check::<$lhs, $rhs>();)*
        };
    }

    #[test]
    fn every_pair_is_closed() {
        each_pair!(
            assert_closed;
            Zero, StrictlyPositive, StrictlyNegative, Positive, Negative, NonZero, Any;
            [Zero, StrictlyPositive, StrictlyNegative, Positive, Negative, NonZero, Any]
        );
    }

    #[test]
    fn every_division_is_closed() {
        each_pair!(
            assert_division_closed;
            Zero, StrictlyPositive, StrictlyNegative, Positive, Negative, NonZero, Any;
            [StrictlyPositive, StrictlyNegative, NonZero]
        );
    }

    #[test]
    fn every_negation_is_closed() {
        assert_negation_closed::<Zero>();
        assert_negation_closed::<StrictlyPositive>();
        assert_negation_closed::<StrictlyNegative>();
        assert_negation_closed::<Positive>();
        assert_negation_closed::<Negative>();
        assert_negation_closed::<NonZero>();
        assert_negation_closed::<Any>();
    }

    #[test]
    fn result_types() {
        let zero = ZeroInt::ZERO;
        let one = StrictlyPositiveInt::create(1);
        let minus_one = StrictlyNegativeInt::create(-1);
        let positive = PositiveInt::create(2);
        let negative = NegativeInt::create(-2);
        let non_zero = NonZeroInt::create(3);
        let any = AnyInt::of(4);

        let _: StrictlyPositiveInt = positive + one;
        let _: StrictlyPositiveInt = one + one;
        let _: StrictlyNegativeInt = negative + minus_one;
        let _: NegativeInt = negative + negative;
        let _: PositiveInt = positive + zero;
        let _: i32 = one + minus_one;
        let _: i32 = any + zero;

        let _: StrictlyPositiveInt = one - minus_one;
        let _: StrictlyNegativeInt = negative - one;
        let _: PositiveInt = positive - negative;
        let _: i32 = one - one;

        let _: StrictlyPositiveInt = minus_one * minus_one;
        let _: StrictlyNegativeInt = one * minus_one;
        let _: NonZeroInt = non_zero * one;
        let _: NegativeInt = positive * negative;
        let _: ZeroInt = zero * any;
        let _: ZeroInt = non_zero * zero;
        let _: i32 = any * any;

        let _: PositiveInt = one / one;
        let _: NegativeInt = positive / minus_one;
        let _: i32 = any / non_zero;
        let _: ZeroInt = zero / non_zero;
        let _: PositiveInt = positive % non_zero;
        let _: NegativeInt = minus_one % one;

        let _: ZeroInt = -zero;
        let _: StrictlyNegativeInt = -one;
        let _: StrictlyPositiveInt = -minus_one;
        let _: NegativeInt = -positive;
        let _: PositiveInt = -negative;
        let _: NonZeroInt = -non_zero;
        let _: i32 = -any;
    }

    #[test]
    fn overflow_is_an_invariant_violation() {
        let big = StrictlyPositiveInt::create(2_000_000_000);
        let two = StrictlyPositiveInt::create(2);

        let error = big.try_mul(two).unwrap_err();
        assert_eq!(error.value(), -294_967_296);
        assert_eq!(
            error.to_string(),
            "Number should be strictly positive (tried with -294967296)."
        );
        assert_eq!(error, StrictlyPositiveInt::new(-294_967_296).unwrap_err());
    }

    #[test]
    #[should_panic(expected = "Number should be strictly positive (tried with -294967296).")]
    fn overflowing_operator_panics() {
        let _ = StrictlyPositiveInt::create(2_000_000_000) * StrictlyPositiveInt::create(2);
    }

    #[test]
    fn boundary_overflows() {
        assert!(StrictlyPositiveInt::MAX.try_add(StrictlyPositiveInt::MIN).is_err());
        assert!(StrictlyNegativeInt::MIN.try_sub(StrictlyPositiveInt::MIN).is_err());
        assert_eq!(
            NegativeInt::MIN.try_neg().unwrap_err().to_string(),
            "Number should be positive (tried with -2147483648)."
        );
        assert!(
            NegativeInt::MIN
                .try_div(StrictlyNegativeInt::create(-1))
                .is_err()
        );
        assert_eq!(
            NegativeInt::MIN
                .try_rem(StrictlyNegativeInt::create(-1))
                .unwrap(),
            ZeroInt::ZERO
        );
    }

    #[test]
    fn widened_results_wrap() {
        assert_eq!(AnyInt::of(i32::MAX) + AnyInt::of(1), i32::MIN);
        assert_eq!(-AnyInt::of(i32::MIN), i32::MIN);
        assert_eq!(AnyInt::of(i32::MIN) / NonZeroInt::create(-1), i32::MIN);
    }

    #[test]
    fn truncating_division() {
        let seven = AnyInt::of(7);
        let minus_seven = AnyInt::of(-7);
        let two = NonZeroInt::create(2);
        let minus_two = NonZeroInt::create(-2);

        assert_eq!(seven / two, 3);
        assert_eq!(minus_seven / two, -3);
        assert_eq!(seven / minus_two, -3);
        assert_eq!(minus_seven % two, -1);
        assert_eq!(seven % minus_two, 1);

        for x in SAMPLES {
            for y in samples::<NonZero>() {
                if x.checked_div(y.get()).is_some() {
                    assert_eq!((x / y) * y + (x % y), x);
                }
            }
        }
    }

    #[test]
    fn mixed_with_primitives() {
        let three = PositiveInt::create(3);
        let minus_two = StrictlyNegativeInt::create(-2);

        assert_eq!(three + 4_i32, 7);
        assert_eq!(4_i32 + three, 7);
        assert_eq!(three - 4_i32, -1);
        assert_eq!(4_i32 - three, 1);
        assert_eq!(three * -2_i32, -6);
        assert_eq!(-2_i32 * three, -6);
        assert_eq!(9_i32 / minus_two, -4);
        assert_eq!(9_i32 % minus_two, 1);
        assert_eq!(9_i32 % StrictlyPositiveInt::create(4), 1);
    }

    #[test]
    fn identities() {
        assert!(PositiveInt::zero().is_zero());
        assert!(!PositiveInt::create(1).is_zero());
        assert_eq!(NegativeInt::zero().get(), 0);
        assert_eq!(ZeroInt::zero(), ZeroInt::ZERO);
        assert_eq!(StrictlyPositiveInt::one().get(), 1);
        assert_eq!(PositiveInt::one().get(), 1);
    }

    #[test]
    fn sums_and_products() {
        let positives = [3, 0, 4].map(PositiveInt::create);
        assert_eq!(positives.into_iter().sum::<PositiveInt>().get(), 7);

        let negatives = [-3, -4].map(NegativeInt::create);
        assert_eq!(negatives.into_iter().sum::<NegativeInt>().get(), -7);

        let factors = [2, 3, 7].map(StrictlyPositiveInt::create);
        assert_eq!(factors.into_iter().product::<StrictlyPositiveInt>().get(), 42);

        let empty: [PositiveInt; 0] = [];
        assert_eq!(empty.into_iter().product::<PositiveInt>().get(), 1);
        assert_eq!(empty.into_iter().sum::<PositiveInt>().get(), 0);
    }
}
