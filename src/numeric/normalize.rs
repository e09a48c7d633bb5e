// ============================================================================
// Decimal Normalizer
// Sign stripping and fractional-digit alignment of two operands
// ============================================================================

use super::sign::Sign;

/// Split a validated token into its unsigned magnitude and sign.
///
/// Only a single leading `+` or `-` is removed; no sign means positive.
#[inline]
pub fn strip_sign(token: &str) -> (&str, Sign) {
    if let Some(rest) = token.strip_prefix('-') {
        (rest, Sign::Negative)
    } else if let Some(rest) = token.strip_prefix('+') {
        (rest, Sign::Positive)
    } else {
        (token, Sign::Positive)
    }
}

/// Count the digits after the decimal point (0 if there is no point).
#[inline]
pub fn fraction_digits(magnitude: &str) -> usize {
    magnitude
        .find('.')
        .map_or(0, |pos| magnitude.len() - pos - 1)
}

/// Rewrite `magnitude` with exactly one decimal point followed by exactly
/// `digits` fractional digits, padding with trailing zeros.
///
/// `digits` must be at least the current fractional digit count.
pub(crate) fn pad_fraction(magnitude: &str, digits: usize) -> String {
    let current = fraction_digits(magnitude);
    debug_assert!(current <= digits, "padding cannot shorten a fraction");

    let mut padded = String::with_capacity(magnitude.len() + digits - current + 1);
    padded.push_str(magnitude);
    if !magnitude.contains('.') {
        padded.push('.');
    }
    padded.extend(std::iter::repeat('0').take(digits - current));
    padded
}

/// Align the fractional parts of two unsigned magnitudes.
///
/// Returns both magnitudes padded with trailing zeros to the same number of
/// fractional digits, along with that count. Both outputs always carry a
/// decimal point, synthesized when the input had none.
///
/// # Example
/// ```
/// use exact_decimal::numeric::align_fractions;
///
/// let (a, b, digits) = align_fractions("1.5", "20");
/// assert_eq!((a.as_str(), b.as_str(), digits), ("1.5", "20.0", 1));
/// ```
pub fn align_fractions(a: &str, b: &str) -> (String, String, usize) {
    let digits = fraction_digits(a).max(fraction_digits(b));
    (pad_fraction(a, digits), pad_fraction(b, digits), digits)
}

/// Drop the decimal point, leaving a pure unsigned digit string.
#[inline]
pub(crate) fn remove_point(magnitude: &str) -> String {
    magnitude.chars().filter(|&c| c != '.').collect()
}

/// Two operands reduced to sign tags and aligned, point-free digit strings.
///
/// Both digit strings carry exactly `fraction_digits` fractional digits, so
/// they can be added or subtracted as plain integers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedPair {
    pub first_sign: Sign,
    pub first_digits: String,
    pub second_sign: Sign,
    pub second_digits: String,
    pub fraction_digits: usize,
}

impl NormalizedPair {
    /// Normalize two already validated tokens.
    pub fn new(first: &str, second: &str) -> Self {
        let (first_mag, first_sign) = strip_sign(first);
        let (second_mag, second_sign) = strip_sign(second);
        let (first_padded, second_padded, fraction_digits) =
            align_fractions(first_mag, second_mag);

        Self {
            first_sign,
            first_digits: remove_point(&first_padded),
            second_sign,
            second_digits: remove_point(&second_padded),
            fraction_digits,
        }
    }
}
