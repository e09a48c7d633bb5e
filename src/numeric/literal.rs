// ============================================================================
// Decimal Literal
// Grammar check and structural view of a signed decimal token
// ============================================================================
//
// Grammar:
//   literal  := sign? digits ( '.' digits )?
//   sign     := '+' | '-'
//   digits   := [0-9]+
//
// A digit before the point is mandatory (".5" is rejected) and a point must be
// followed by at least one digit ("5." is rejected).

use super::sign::Sign;

/// Borrowed, validated view of a decimal token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalLiteral<'a> {
    /// Sign of the token (`Positive` when no marker was written)
    pub sign: Sign,
    /// Digits before the decimal point; never empty
    pub integer: &'a str,
    /// Digits after the decimal point; `None` when no point was written
    pub fraction: Option<&'a str>,
}

impl<'a> DecimalLiteral<'a> {
    /// Split a token into sign, integer digits and fraction digits.
    ///
    /// Returns `None` if the token does not match the grammar.
    pub fn parse(token: &'a str) -> Option<Self> {
        let (sign, body) = match token.chars().next().and_then(Sign::from_char) {
            Some(sign) => (sign, &token[1..]),
            None => (Sign::Positive, token),
        };

        let (integer, fraction) = match body.split_once('.') {
            Some((int, frac)) => (int, Some(frac)),
            None => (body, None),
        };

        if !is_digit_run(integer) {
            return None;
        }
        if let Some(frac) = fraction {
            // Also rejects a second point, since '.' is not a digit.
            if !is_digit_run(frac) {
                return None;
            }
        }

        Some(Self {
            sign,
            integer,
            fraction,
        })
    }

    /// Number of digits written after the decimal point.
    #[inline]
    pub fn fraction_digits(&self) -> usize {
        self.fraction.map_or(0, str::len)
    }

    /// The token without its sign marker.
    pub fn magnitude(&self) -> String {
        match self.fraction {
            Some(frac) => format!("{}.{}", self.integer, frac),
            None => self.integer.to_string(),
        }
    }
}

/// Non-empty run of ASCII digits.
#[inline]
fn is_digit_run(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Check whether `token` is a valid decimal literal.
///
/// Never panics; any malformed input simply yields `false`.
#[inline]
pub fn is_valid_decimal(token: &str) -> bool {
    DecimalLiteral::parse(token).is_some()
}
