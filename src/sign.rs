//! Sign predicates and the sign algebra shared by every refined variant.
//!
//! Every variant is described by the set of signs its values may carry
//! (a [`SignSet`] over [`Sign::Negative`], [`Sign::Zero`] and
//! [`Sign::Positive`]). The arithmetic closure rules are a single table,
//! [`Operator::apply`], keyed by the sign of each operand. Lifting that table
//! to sets with [`SignSet::closure`] yields the statically known signs of a
//! result, which in turn selects the result variant.

use std::{fmt, ops::RangeInclusive};

/// Returns `true` if the value equals zero.
#[must_use]
pub const fn is_zero(value: i32) -> bool {
    value == 0
}

/// Returns `true` if the value is greater than zero.
#[must_use]
pub const fn is_strictly_positive(value: i32) -> bool {
    value > 0
}

/// Returns `true` if the value is less than zero.
#[must_use]
pub const fn is_strictly_negative(value: i32) -> bool {
    value < 0
}

/// The sign of a primitive integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Sign {
    /// All signs, in ascending order.
    pub const ALL: [Sign; 3] = [Sign::Negative, Sign::Zero, Sign::Positive];

    /// Returns the sign of `value`.
    #[must_use]
    pub const fn of(value: i32) -> Self {
        if is_strictly_negative(value) {
            Sign::Negative
        } else if is_zero(value) {
            Sign::Zero
        } else {
            Sign::Positive
        }
    }

    /// Returns the opposite sign.
    #[must_use]
    pub const fn negate(self) -> Self {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Zero => Sign::Zero,
            Sign::Positive => Sign::Negative,
        }
    }

    const fn bit(self) -> u8 {
        match self {
            Sign::Negative => 0b001,
            Sign::Zero => 0b010,
            Sign::Positive => 0b100,
        }
    }
}

/// A binary arithmetic operator covered by the closure table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Remainder,
}

impl Operator {
    /// All operators.
    pub const ALL: [Operator; 5] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
        Operator::Remainder,
    ];

    /// Returns the signs the mathematical result of `lhs op rhs` may take.
    ///
    /// This is the closure table. Division and remainder truncate toward zero,
    /// so a non-zero dividend may still produce zero. A zero divisor has no
    /// result and maps to [`SignSet::EMPTY`].
    ///
    /// Primitive overflow is not modelled here: it is caught when the wrapped
    /// result is validated against the destination variant.
    #[must_use]
    pub const fn apply(self, lhs: Sign, rhs: Sign) -> SignSet {
        use Sign::{Negative as N, Positive as P, Zero as Z};

        match self {
            Operator::Add => match (lhs, rhs) {
                (Z, sign) | (sign, Z) => SignSet::only(sign),
                (N, N) => SignSet::NEGATIVE,
                (P, P) => SignSet::POSITIVE,
                (N, P) | (P, N) => SignSet::ALL,
            },
            Operator::Subtract => Operator::Add.apply(lhs, rhs.negate()),
            Operator::Multiply => match (lhs, rhs) {
                (Z, _) | (_, Z) => SignSet::ZERO,
                (N, N) | (P, P) => SignSet::POSITIVE,
                (N, P) | (P, N) => SignSet::NEGATIVE,
            },
            Operator::Divide => match (lhs, rhs) {
                (_, Z) => SignSet::EMPTY,
                (Z, _) => SignSet::ZERO,
                (N, N) | (P, P) => SignSet::ZERO_OR_POSITIVE,
                (N, P) | (P, N) => SignSet::ZERO_OR_NEGATIVE,
            },
            Operator::Remainder => match (lhs, rhs) {
                (_, Z) => SignSet::EMPTY,
                (Z, _) => SignSet::ZERO,
                (P, _) => SignSet::ZERO_OR_POSITIVE,
                (N, _) => SignSet::ZERO_OR_NEGATIVE,
            },
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::Remainder => "%",
        })
    }
}

/// A set of signs.
///
/// Each refinement variant is identified by the set of signs it admits; the
/// subset relation between sets is the capability relation between variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SignSet(u8);

impl SignSet {
    pub const EMPTY: Self = Self(0);
    pub const NEGATIVE: Self = Self(Sign::Negative.bit());
    pub const ZERO: Self = Self(Sign::Zero.bit());
    pub const POSITIVE: Self = Self(Sign::Positive.bit());
    pub const ZERO_OR_NEGATIVE: Self = Self::NEGATIVE.union(Self::ZERO);
    pub const ZERO_OR_POSITIVE: Self = Self::ZERO.union(Self::POSITIVE);
    pub const NON_ZERO: Self = Self::NEGATIVE.union(Self::POSITIVE);
    pub const ALL: Self = Self::ZERO_OR_NEGATIVE.union(Self::POSITIVE);

    /// Returns the set holding only `sign`.
    #[must_use]
    pub const fn only(sign: Sign) -> Self {
        Self(sign.bit())
    }

    /// Rebuilds a set from [`SignSet::bits`], ignoring unknown bits.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & Self::ALL.0)
    }

    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[must_use]
    pub const fn contains(self, sign: Sign) -> bool {
        self.0 & sign.bit() != 0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn is_subset_of(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// Returns `true` if the sign of `value` belongs to this set.
    #[must_use]
    pub const fn admits(self, value: i32) -> bool {
        self.contains(Sign::of(value))
    }

    /// Lifts [`Operator::apply`] to sets: the union of the table entries for
    /// every pair of member signs.
    #[must_use]
    pub const fn closure(self, operator: Operator, rhs: Self) -> Self {
        let mut result = Self::EMPTY;
        let mut i = 0;
        while i < Sign::ALL.len() {
            let lhs_sign = Sign::ALL[i];
            let mut j = 0;
            while j < Sign::ALL.len() {
                let rhs_sign = Sign::ALL[j];
                if self.contains(lhs_sign) && rhs.contains(rhs_sign) {
                    result = result.union(operator.apply(lhs_sign, rhs_sign));
                }
                j += 1;
            }
            i += 1;
        }
        result
    }

    /// Returns the signs of the negated members.
    #[must_use]
    pub const fn negation(self) -> Self {
        let mut result = Self::EMPTY;
        let mut i = 0;
        while i < Sign::ALL.len() {
            let sign = Sign::ALL[i];
            if self.contains(sign) {
                result = result.union(Self::only(sign.negate()));
            }
            i += 1;
        }
        result
    }

    /// Returns the smallest `i32` admitted by this set, or `None` if it is empty.
    #[must_use]
    pub const fn min(self) -> Option<i32> {
        if self.contains(Sign::Negative) {
            Some(i32::MIN)
        } else if self.contains(Sign::Zero) {
            Some(0)
        } else if self.contains(Sign::Positive) {
            Some(1)
        } else {
            None
        }
    }

    /// Returns the largest `i32` admitted by this set, or `None` if it is empty.
    #[must_use]
    pub const fn max(self) -> Option<i32> {
        if self.contains(Sign::Positive) {
            Some(i32::MAX)
        } else if self.contains(Sign::Zero) {
            Some(0)
        } else if self.contains(Sign::Negative) {
            Some(-1)
        } else {
            None
        }
    }

    /// Splits the admitted `i32` values into maximal contiguous ranges, in
    /// ascending order.
    ///
    /// Only [`SignSet::NON_ZERO`] yields more than one range.
    #[must_use]
    pub fn ranges(self) -> Vec<RangeInclusive<i32>> {
        let pieces = [
            (Sign::Negative, i32::MIN, -1),
            (Sign::Zero, 0, 0),
            (Sign::Positive, 1, i32::MAX),
        ];

        let mut ranges: Vec<RangeInclusive<i32>> = Vec::with_capacity(2);
        let mut previous_included = false;
        for (sign, start, end) in pieces {
            if !self.contains(sign) {
                previous_included = false;
                continue;
            }
            match ranges.last_mut() {
                Some(last) if previous_included => *last = *last.start()..=end,
                _ => ranges.push(start..=end),
            }
            previous_included = true;
        }
        ranges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [i32; 13] = [
        i32::MIN,
        i32::MIN + 1,
        -1000,
        -3,
        -2,
        -1,
        0,
        1,
        2,
        3,
        1000,
        i32::MAX - 1,
        i32::MAX,
    ];

    fn checked(operator: Operator, lhs: i32, rhs: i32) -> Option<i32> {
        match operator {
            Operator::Add => lhs.checked_add(rhs),
            Operator::Subtract => lhs.checked_sub(rhs),
            Operator::Multiply => lhs.checked_mul(rhs),
            Operator::Divide => lhs.checked_div(rhs),
            Operator::Remainder => lhs.checked_rem(rhs),
        }
    }

    #[test]
    fn predicates() {
        assert!(is_zero(0));
        assert!(!is_zero(1));
        assert!(is_strictly_positive(1));
        assert!(!is_strictly_positive(0));
        assert!(is_strictly_negative(i32::MIN));
        assert!(!is_strictly_negative(0));

        assert_eq!(Sign::of(-9), Sign::Negative);
        assert_eq!(Sign::of(0), Sign::Zero);
        assert_eq!(Sign::of(i32::MAX), Sign::Positive);
    }

    #[test]
    fn table_is_sound() {
        for operator in Operator::ALL {
            for lhs in SAMPLES {
                for rhs in SAMPLES {
                    let Some(result) = checked(operator, lhs, rhs) else {
                        continue;
                    };
                    let signs = operator.apply(Sign::of(lhs), Sign::of(rhs));
                    assert!(
                        signs.admits(result),
                        "{lhs} {operator} {rhs} = {result} escapes {signs:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn table_is_tight() {
        // Every sign listed by the table is reached by some pair of samples.
        for operator in Operator::ALL {
            for lhs_sign in Sign::ALL {
                for rhs_sign in Sign::ALL {
                    let signs = operator.apply(lhs_sign, rhs_sign);
                    for expected in Sign::ALL.into_iter().filter(|s| signs.contains(*s)) {
                        let reached = SAMPLES.iter().any(|&lhs| {
                            SAMPLES.iter().any(|&rhs| {
                                Sign::of(lhs) == lhs_sign
                                    && Sign::of(rhs) == rhs_sign
                                    && checked(operator, lhs, rhs).map(Sign::of) == Some(expected)
                            })
                        });
                        assert!(
                            reached,
                            "{lhs_sign:?} {operator} {rhs_sign:?} never yields {expected:?}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn division_by_zero_has_no_result() {
        for sign in Sign::ALL {
            assert!(Operator::Divide.apply(sign, Sign::Zero).is_empty());
            assert!(Operator::Remainder.apply(sign, Sign::Zero).is_empty());
        }
    }

    #[test]
    fn closure_over_sets() {
        let positive = SignSet::ZERO_OR_POSITIVE;
        let negative = SignSet::ZERO_OR_NEGATIVE;

        assert_eq!(positive.closure(Operator::Add, positive), positive);
        assert_eq!(
            positive.closure(Operator::Add, SignSet::POSITIVE),
            SignSet::POSITIVE
        );
        assert_eq!(negative.closure(Operator::Add, negative), negative);
        assert_eq!(
            SignSet::NON_ZERO.closure(Operator::Multiply, SignSet::NON_ZERO),
            SignSet::NON_ZERO
        );
        assert_eq!(
            SignSet::POSITIVE.closure(Operator::Add, SignSet::NEGATIVE),
            SignSet::ALL
        );
        assert_eq!(
            SignSet::ZERO.closure(Operator::Multiply, SignSet::ALL),
            SignSet::ZERO
        );
        assert_eq!(
            SignSet::POSITIVE.closure(Operator::Divide, SignSet::NEGATIVE),
            SignSet::ZERO_OR_NEGATIVE
        );
    }

    #[test]
    fn negation() {
        assert_eq!(SignSet::ZERO.negation(), SignSet::ZERO);
        assert_eq!(SignSet::POSITIVE.negation(), SignSet::NEGATIVE);
        assert_eq!(
            SignSet::ZERO_OR_NEGATIVE.negation(),
            SignSet::ZERO_OR_POSITIVE
        );
        assert_eq!(SignSet::NON_ZERO.negation(), SignSet::NON_ZERO);
    }

    #[test]
    fn bounds() {
        assert_eq!(SignSet::EMPTY.min(), None);
        assert_eq!(SignSet::ZERO.min(), Some(0));
        assert_eq!(SignSet::ZERO.max(), Some(0));
        assert_eq!(SignSet::POSITIVE.min(), Some(1));
        assert_eq!(SignSet::NEGATIVE.max(), Some(-1));
        assert_eq!(SignSet::NON_ZERO.min(), Some(i32::MIN));
        assert_eq!(SignSet::NON_ZERO.max(), Some(i32::MAX));
    }

    #[test]
    fn ranges() {
        assert_eq!(SignSet::ZERO.ranges(), vec![0..=0]);
        assert_eq!(SignSet::ZERO_OR_POSITIVE.ranges(), vec![0..=i32::MAX]);
        assert_eq!(SignSet::ZERO_OR_NEGATIVE.ranges(), vec![i32::MIN..=0]);
        assert_eq!(
            SignSet::NON_ZERO.ranges(),
            vec![i32::MIN..=-1, 1..=i32::MAX]
        );
        assert_eq!(SignSet::ALL.ranges(), vec![i32::MIN..=i32::MAX]);
        assert!(SignSet::EMPTY.ranges().is_empty());
    }

    #[test]
    fn bits_round_trip() {
        assert_eq!(SignSet::from_bits(SignSet::NON_ZERO.bits()), SignSet::NON_ZERO);
        assert_eq!(SignSet::from_bits(0xff), SignSet::ALL);
        assert!(SignSet::POSITIVE.is_subset_of(SignSet::NON_ZERO));
        assert!(!SignSet::ZERO.is_subset_of(SignSet::NON_ZERO));
    }
}
