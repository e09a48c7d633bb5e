// ============================================================================
// Digit Arithmetic
// Unsigned carry/borrow arithmetic over decimal digit strings
// ============================================================================
//
// Operands are ASCII digit strings with no sign and no decimal point. Digits
// are consumed right to left and collected least-significant first into an
// inline buffer, which is reversed once when the result string is built.

use super::compare::trim_leading_zeros;
use smallvec::SmallVec;

/// Digit buffer, least-significant digit first. Operands up to 64 digits
/// never touch the heap.
type DigitBuf = SmallVec<[u8; 64]>;

/// Iterate digit values from least to most significant.
#[inline]
fn digits_rev(s: &str) -> impl Iterator<Item = u8> + '_ {
    s.bytes().rev().map(|b| b - b'0')
}

/// Only ASCII digits (an empty string qualifies).
#[inline]
fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// Build a digit string from a least-significant-first buffer.
#[inline]
fn collect_digits(buf: &DigitBuf) -> String {
    buf.iter().rev().map(|&d| char::from(b'0' + d)).collect()
}

/// Add two unsigned digit strings of arbitrary and possibly unequal length.
///
/// The result has `max(a.len(), b.len())` digits, plus one leading `1` when
/// the final carry is set. Leading zeros of the operands are preserved up to
/// that length.
///
/// # Panics
/// Debug builds panic if either operand contains anything but ASCII digits;
/// signs and decimal points must be removed by the caller.
///
/// # Example
/// ```
/// use exact_decimal::numeric::add_digits;
///
/// assert_eq!(add_digits("999", "1"), "1000");
/// assert_eq!(add_digits("123", "77"), "200");
/// ```
pub fn add_digits(a: &str, b: &str) -> String {
    debug_assert!(
        is_digits(a) && is_digits(b),
        "add_digits requires ASCII digits only"
    );

    let len = a.len().max(b.len());
    let mut out = DigitBuf::with_capacity(len + 1);
    let mut lhs = digits_rev(a);
    let mut rhs = digits_rev(b);
    let mut carry = 0u8;

    for _ in 0..len {
        let sum = lhs.next().unwrap_or(0) + rhs.next().unwrap_or(0) + carry;
        out.push(sum % 10);
        carry = sum / 10;
    }
    if carry > 0 {
        out.push(carry);
    }

    collect_digits(&out)
}

/// Subtract `b` from `a`, both unsigned digit strings, requiring `a >= b`.
///
/// Borrows propagate over the full length of `a`; leading zeros of the
/// difference are stripped down to a single `"0"`.
///
/// # Panics
/// Debug builds panic if either operand contains anything but ASCII digits,
/// or if `a < b`.
///
/// # Example
/// ```
/// use exact_decimal::numeric::sub_digits;
///
/// assert_eq!(sub_digits("1000", "1"), "999");
/// assert_eq!(sub_digits("42", "42"), "0");
/// ```
pub fn sub_digits(a: &str, b: &str) -> String {
    debug_assert!(
        is_digits(a) && is_digits(b),
        "sub_digits requires ASCII digits only"
    );
    debug_assert!(
        super::compare::compare_digits(a, b).is_ge(),
        "sub_digits requires minuend >= subtrahend"
    );

    let mut out = DigitBuf::with_capacity(a.len());
    let mut rhs = digits_rev(b);
    let mut borrow = 0u8;

    for digit in digits_rev(a) {
        let subtrahend = rhs.next().unwrap_or(0) + borrow;
        if digit >= subtrahend {
            out.push(digit - subtrahend);
            borrow = 0;
        } else {
            out.push(digit + 10 - subtrahend);
            borrow = 1;
        }
    }

    let difference = collect_digits(&out);
    trim_leading_zeros(&difference).to_string()
}
