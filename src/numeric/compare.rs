// ============================================================================
// Magnitude Comparator
// Ordering of unsigned decimal magnitudes of arbitrary length
// ============================================================================

use super::normalize::{align_fractions, remove_point};
use std::cmp::Ordering;

/// Strip leading zeros, keeping a single `"0"` for an all-zero string.
#[inline]
pub(crate) fn trim_leading_zeros(digits: &str) -> &str {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        "0"
    } else {
        trimmed
    }
}

/// Compare two unsigned digit strings (no point) numerically.
///
/// Once leading zeros are gone, a longer string is larger and equal-length
/// strings order the same way lexicographically as numerically.
#[inline]
pub(crate) fn compare_digits(a: &str, b: &str) -> Ordering {
    let a = trim_leading_zeros(a);
    let b = trim_leading_zeros(b);
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Compare the absolute values of two unsigned decimal magnitudes.
///
/// The operands need not share a fractional length; they are aligned here.
///
/// # Example
/// ```
/// use exact_decimal::numeric::compare_abs;
/// use std::cmp::Ordering;
///
/// assert_eq!(compare_abs("1.50", "1.5"), Ordering::Equal);
/// assert_eq!(compare_abs("0.9", "10"), Ordering::Less);
/// ```
pub fn compare_abs(a: &str, b: &str) -> Ordering {
    let (a, b, _) = align_fractions(a, b);
    compare_digits(&remove_point(&a), &remove_point(&b))
}
