// ============================================================================
// Numeric Errors
// Error types for decimal literal validation
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which of the two operands of an addition a value refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operand {
    /// Left-hand operand (`a` in `a + b`)
    First,
    /// Right-hand operand (`b` in `a + b`)
    Second,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::First => write!(f, "first"),
            Operand::Second => write!(f, "second"),
        }
    }
}

/// A token failed the decimal literal grammar check.
///
/// Carries the offending token and whether it was the first or second operand,
/// so batch callers can report the failure and carry on with the next pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InvalidLiteralError {
    operand: Operand,
    token: String,
}

impl InvalidLiteralError {
    pub fn new(operand: Operand, token: impl Into<String>) -> Self {
        Self {
            operand,
            token: token.into(),
        }
    }

    /// Position of the rejected token.
    #[inline]
    pub fn operand(&self) -> Operand {
        self.operand
    }

    /// The rejected token, verbatim.
    #[inline]
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Display for InvalidLiteralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid decimal literal in {} operand: {:?}",
            self.operand, self.token
        )
    }
}

impl std::error::Error for InvalidLiteralError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, InvalidLiteralError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = InvalidLiteralError::new(Operand::Second, "abc");
        assert_eq!(
            err.to_string(),
            "invalid decimal literal in second operand: \"abc\""
        );

        let empty = InvalidLiteralError::new(Operand::First, "");
        assert_eq!(
            empty.to_string(),
            "invalid decimal literal in first operand: \"\""
        );
    }

    #[test]
    fn test_error_accessors() {
        let err = InvalidLiteralError::new(Operand::First, "1.2.3");
        assert_eq!(err.operand(), Operand::First);
        assert_eq!(err.token(), "1.2.3");
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            InvalidLiteralError::new(Operand::First, "x"),
            InvalidLiteralError::new(Operand::First, "x")
        );
        assert_ne!(
            InvalidLiteralError::new(Operand::First, "x"),
            InvalidLiteralError::new(Operand::Second, "x")
        );
    }
}
