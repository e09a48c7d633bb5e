// ============================================================================
// Exact Decimal
// Owned, canonical, arbitrary-precision decimal value
// ============================================================================

use super::adder::{add_validated, canonical_form, canonicalize};
use super::compare::compare_abs;
use super::errors::InvalidLiteralError;
use super::normalize::{fraction_digits, strip_sign};
use super::sign::Sign;
use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Neg};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Arbitrary-precision decimal number kept in canonical text form.
///
/// The text never has superfluous leading or trailing zeros and zero is never
/// signed, so structural equality is numeric equality.
///
/// # Example
/// ```
/// use exact_decimal::numeric::ExactDecimal;
///
/// let total: ExactDecimal = ["0.1", "0.2", "-0.3"]
///     .iter()
///     .map(|s| s.parse::<ExactDecimal>().unwrap())
///     .sum();
/// assert!(total.is_zero());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct ExactDecimal(String);

impl ExactDecimal {
    /// Zero.
    #[inline]
    pub fn zero() -> Self {
        Self("0".to_string())
    }

    /// Canonical text of this value.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == "0"
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.starts_with('-')
    }

    /// Check if value is strictly positive.
    #[inline]
    pub fn is_positive(&self) -> bool {
        !self.is_negative() && !self.is_zero()
    }

    /// Sign of the value; zero is `Positive`.
    #[inline]
    pub fn sign(&self) -> Sign {
        strip_sign(&self.0).1
    }

    /// Number of significant fractional digits (after trailing-zero trimming).
    #[inline]
    pub fn fraction_digits(&self) -> usize {
        fraction_digits(strip_sign(&self.0).0)
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Self(strip_sign(&self.0).0.to_string())
    }

    /// Convert to `rust_decimal::Decimal`.
    ///
    /// Intended for API boundaries where a fixed 96-bit decimal is expected.
    ///
    /// # Errors
    /// Fails when the value has more significant digits or a larger magnitude
    /// than `rust_decimal` can hold.
    pub fn to_decimal(&self) -> Result<rust_decimal::Decimal, rust_decimal::Error> {
        rust_decimal::Decimal::from_str_exact(&self.0)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for ExactDecimal {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl FromStr for ExactDecimal {
    type Err = InvalidLiteralError;

    /// Parse and canonicalize a decimal literal.
    ///
    /// Surrounding whitespace is not accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        canonical_form(s).map(Self)
    }
}

impl TryFrom<String> for ExactDecimal {
    type Error = InvalidLiteralError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ExactDecimal> for String {
    #[inline]
    fn from(value: ExactDecimal) -> Self {
        value.0
    }
}

impl From<rust_decimal::Decimal> for ExactDecimal {
    fn from(d: rust_decimal::Decimal) -> Self {
        let sign = if d.is_sign_negative() {
            Sign::Negative
        } else {
            Sign::Positive
        };
        let digits = d.mantissa().unsigned_abs().to_string();
        Self(canonicalize(sign, &digits, d.scale() as usize))
    }
}

impl From<i64> for ExactDecimal {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl Add for ExactDecimal {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl<'a> Add<&'a ExactDecimal> for &'a ExactDecimal {
    type Output = ExactDecimal;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        ExactDecimal(add_validated(&self.0, &rhs.0))
    }
}

impl Neg for ExactDecimal {
    type Output = Self;

    fn neg(self) -> Self::Output {
        if self.is_zero() {
            return self;
        }
        match self.0.strip_prefix('-') {
            Some(magnitude) => Self(magnitude.to_string()),
            None => Self(format!("-{}", self.0)),
        }
    }
}

impl Sum for ExactDecimal {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| &acc + &x)
    }
}

impl<'a> Sum<&'a ExactDecimal> for ExactDecimal {
    fn sum<I: Iterator<Item = &'a ExactDecimal>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| &acc + x)
    }
}

impl PartialOrd for ExactDecimal {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ExactDecimal {
    fn cmp(&self, other: &Self) -> Ordering {
        let (lhs, lhs_sign) = strip_sign(&self.0);
        let (rhs, rhs_sign) = strip_sign(&other.0);
        match (lhs_sign, rhs_sign) {
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Positive, Sign::Positive) => compare_abs(lhs, rhs),
            (Sign::Negative, Sign::Negative) => compare_abs(rhs, lhs),
        }
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for ExactDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExactDecimal({})", self.0)
    }
}

impl fmt::Display for ExactDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

// ============================================================================
// Tests
// ============================================================================
