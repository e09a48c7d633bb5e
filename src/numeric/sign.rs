// ============================================================================
// Sign
// Two-variant sign tag carried next to an unsigned magnitude
// ============================================================================

use std::ops::Neg;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sign of a decimal value.
///
/// Magnitudes are always unsigned digit text; the sign travels beside them so
/// that the same-sign / opposite-sign split in addition is a plain `match`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Sign {
    #[default]
    Positive,
    Negative,
}

impl Sign {
    /// Parse a leading sign character, if any.
    #[inline]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Sign::Positive),
            '-' => Some(Sign::Negative),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        matches!(self, Sign::Negative)
    }

    /// Prefix used when rendering a value with this sign.
    ///
    /// Positive values are written without a marker.
    #[inline]
    pub const fn prefix(self) -> &'static str {
        match self {
            Sign::Positive => "",
            Sign::Negative => "-",
        }
    }
}

impl Neg for Sign {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_char() {
        assert_eq!(Sign::from_char('+'), Some(Sign::Positive));
        assert_eq!(Sign::from_char('-'), Some(Sign::Negative));
        assert_eq!(Sign::from_char('1'), None);
    }

    #[test]
    fn test_negation() {
        assert_eq!(-Sign::Positive, Sign::Negative);
        assert_eq!(-(-Sign::Negative), Sign::Negative);
    }

    #[test]
    fn test_default_is_positive() {
        assert_eq!(Sign::default(), Sign::Positive);
        assert_eq!(Sign::default().prefix(), "");
        assert_eq!(Sign::Negative.prefix(), "-");
    }
}
