// ============================================================================
// Pair Outcome Domain Model
// ============================================================================

use crate::numeric::{add_decimals, NumericResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of evaluating one token pair from a batch source
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PairOutcome {
    /// First token, as read
    pub first: String,

    /// Second token, as read
    pub second: String,

    /// Canonical sum, or the validation failure
    pub result: NumericResult<String>,
}

impl PairOutcome {
    /// Validate and add a pair of tokens
    pub fn evaluate(first: impl Into<String>, second: impl Into<String>) -> Self {
        let first = first.into();
        let second = second.into();
        let result = add_decimals(&first, &second);
        Self {
            first,
            second,
            result,
        }
    }

    /// Whether both tokens were valid literals
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.result.is_ok()
    }

    /// The sum, if the pair was valid
    #[inline]
    pub fn sum(&self) -> Option<&str> {
        self.result.as_deref().ok()
    }

    /// Serialize this outcome as a JSON object
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Running counts for a batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BatchSummary {
    /// Pairs read from the source
    pub pairs: usize,

    /// Pairs that produced a sum
    pub summed: usize,

    /// Pairs rejected by validation
    pub rejected: usize,
}

impl BatchSummary {
    /// Account for one evaluated pair
    pub fn record(&mut self, outcome: &PairOutcome) {
        self.pairs += 1;
        if outcome.is_valid() {
            self.summed += 1;
        } else {
            self.rejected += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::Operand;

    #[test]
    fn test_evaluate_valid_pair() {
        let outcome = PairOutcome::evaluate("2.5", "0.5");
        assert_eq!(outcome.first, "2.5");
        assert_eq!(outcome.second, "0.5");
        assert!(outcome.is_valid());
        assert_eq!(outcome.sum(), Some("3"));
    }

    #[test]
    fn test_evaluate_invalid_pair() {
        let outcome = PairOutcome::evaluate("1.2", "abc");
        assert!(!outcome.is_valid());
        assert_eq!(outcome.sum(), None);
        let err = outcome.result.unwrap_err();
        assert_eq!(err.operand(), Operand::Second);
    }

    #[test]
    fn test_summary_counts() {
        let mut summary = BatchSummary::default();
        summary.record(&PairOutcome::evaluate("1", "2"));
        summary.record(&PairOutcome::evaluate("x", "2"));
        summary.record(&PairOutcome::evaluate("-1", "1"));

        assert_eq!(
            summary,
            BatchSummary {
                pairs: 3,
                summed: 2,
                rejected: 1,
            }
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_to_json() {
        let json = PairOutcome::evaluate("1.5", "1.5").to_json().unwrap();
        assert_eq!(json, r#"{"first":"1.5","second":"1.5","result":{"Ok":"3"}}"#);
    }
}
