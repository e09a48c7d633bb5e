// ============================================================================
// Decimal Adder
// Sign-aware exact addition of two decimal literals
// ============================================================================

use super::compare::compare_digits;
use super::digits::{add_digits, sub_digits};
use super::errors::{InvalidLiteralError, NumericResult, Operand};
use super::literal::{is_valid_decimal, DecimalLiteral};
use super::normalize::NormalizedPair;
use super::sign::Sign;
use std::cmp::Ordering;

/// Unscaled result of adding a [`NormalizedPair`].
///
/// `digits` holds the value multiplied by `10^fraction_digits`; nothing has
/// been trimmed yet, so the fractional precision of the wider operand is
/// still present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSum {
    pub sign: Sign,
    pub digits: String,
    pub fraction_digits: usize,
}

impl RawSum {
    /// Render this sum in canonical form.
    #[inline]
    pub fn canonicalize(&self) -> String {
        canonicalize(self.sign, &self.digits, self.fraction_digits)
    }
}

impl NormalizedPair {
    /// Add the two aligned operands.
    ///
    /// Same signs add magnitudes and keep the shared sign; opposite signs
    /// subtract the smaller magnitude from the larger and take the larger
    /// operand's sign. Exact cancellation yields a positive zero.
    pub fn sum(&self) -> RawSum {
        let (sign, digits) = match (self.first_sign, self.second_sign) {
            (Sign::Positive, Sign::Positive) | (Sign::Negative, Sign::Negative) => (
                self.first_sign,
                add_digits(&self.first_digits, &self.second_digits),
            ),
            (Sign::Positive, Sign::Negative) | (Sign::Negative, Sign::Positive) => {
                match compare_digits(&self.first_digits, &self.second_digits) {
                    Ordering::Equal => (Sign::Positive, "0".to_string()),
                    Ordering::Greater => (
                        self.first_sign,
                        sub_digits(&self.first_digits, &self.second_digits),
                    ),
                    Ordering::Less => (
                        self.second_sign,
                        sub_digits(&self.second_digits, &self.first_digits),
                    ),
                }
            },
        };

        RawSum {
            sign,
            digits,
            fraction_digits: self.fraction_digits,
        }
    }
}

/// Render an unscaled digit string as a canonical decimal.
///
/// `digits` is the value times `10^fraction_digits`. The decimal point is
/// placed `fraction_digits` from the right (left-padding with zeros first when
/// needed), then leading integer zeros and trailing fraction zeros are removed,
/// an empty fraction loses its point, and zero loses its sign.
///
/// # Example
/// ```
/// use exact_decimal::numeric::{canonicalize, Sign};
///
/// assert_eq!(canonicalize(Sign::Negative, "0012500", 3), "-12.5");
/// assert_eq!(canonicalize(Sign::Positive, "3", 3), "0.003");
/// assert_eq!(canonicalize(Sign::Negative, "000", 2), "0");
/// ```
pub fn canonicalize(sign: Sign, digits: &str, fraction_digits: usize) -> String {
    let width = digits.len().max(fraction_digits + 1);
    let padded = format!("{:0>width$}", digits, width = width);
    let (integer, fraction) = padded.split_at(width - fraction_digits);

    let integer = integer.trim_start_matches('0');
    let integer = if integer.is_empty() { "0" } else { integer };
    let fraction = fraction.trim_end_matches('0');

    let is_zero = integer == "0" && fraction.is_empty();
    let sign = if is_zero { Sign::Positive } else { sign };

    let mut out = String::with_capacity(integer.len() + fraction.len() + 2);
    out.push_str(sign.prefix());
    out.push_str(integer);
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Add two tokens already known to be valid literals.
#[inline]
pub(crate) fn add_validated(first: &str, second: &str) -> String {
    NormalizedPair::new(first, second).sum().canonicalize()
}

/// Gate a token through the literal grammar.
#[inline]
fn check(operand: Operand, token: &str) -> NumericResult<()> {
    if is_valid_decimal(token) {
        Ok(())
    } else {
        tracing::debug!(%operand, token, "rejected decimal literal");
        Err(InvalidLiteralError::new(operand, token))
    }
}

/// Add two decimal literals exactly.
///
/// Both tokens are validated first (the first operand is checked before the
/// second); arithmetic only runs when both pass. The result is in canonical
/// form.
///
/// # Errors
/// Returns `InvalidLiteralError` naming the first token that fails the
/// grammar.
///
/// # Example
/// ```
/// use exact_decimal::numeric::{add_decimals, Operand};
///
/// assert_eq!(add_decimals("2.5", "0.5").unwrap(), "3");
/// assert_eq!(add_decimals("10", "-3").unwrap(), "7");
///
/// let err = add_decimals("1.2", "abc").unwrap_err();
/// assert_eq!(err.operand(), Operand::Second);
/// ```
pub fn add_decimals(first: &str, second: &str) -> NumericResult<String> {
    check(Operand::First, first)?;
    check(Operand::Second, second)?;

    let sum = add_validated(first, second);
    tracing::trace!(first, second, %sum, "added decimal literals");
    Ok(sum)
}

/// Canonical form of a single literal (`"+007.50"` becomes `"7.5"`).
///
/// # Errors
/// Returns `InvalidLiteralError` for the `First` operand if `token` is not a
/// valid literal.
pub fn canonical_form(token: &str) -> NumericResult<String> {
    let literal = DecimalLiteral::parse(token)
        .ok_or_else(|| InvalidLiteralError::new(Operand::First, token))?;

    let mut digits = String::with_capacity(literal.integer.len() + literal.fraction_digits());
    digits.push_str(literal.integer);
    if let Some(fraction) = literal.fraction {
        digits.push_str(fraction);
    }

    Ok(canonicalize(literal.sign, &digits, literal.fraction_digits()))
}

/// Flip the sign marker of a literal, leaving its digits untouched.
///
/// A positive result is written without a `+`.
///
/// # Errors
/// Returns `InvalidLiteralError` for the `First` operand if `token` is not a
/// valid literal.
pub fn negate_sign(token: &str) -> NumericResult<String> {
    let literal = DecimalLiteral::parse(token)
        .ok_or_else(|| InvalidLiteralError::new(Operand::First, token))?;
    Ok(format!("{}{}", (-literal.sign).prefix(), literal.magnitude()))
}
