// ============================================================================
// Exact Decimal Library
// Arbitrary-precision decimal addition on text, without binary floating point
// ============================================================================

//! # Exact Decimal
//!
//! Exact addition of decimal numbers written as text, with unbounded
//! magnitude and precision.
//!
//! ## Features
//!
//! - **Strict literal grammar**: optional sign, mandatory integer digit,
//!   optional fraction (`0.5` is accepted, `.5` and `5.` are not)
//! - **Sign-aware addition** built from unsigned carry/borrow digit loops
//! - **Canonical output**: no superfluous zeros, no negative zero
//! - **`ExactDecimal`** value type with `Add`, `Neg`, `Sum` and `Ord`
//! - **Batch processing** of whitespace-separated token pairs with
//!   configurable text reports
//!
//! ## Example
//!
//! ```rust
//! use exact_decimal::prelude::*;
//!
//! assert_eq!(add_decimals("2.5", "0.5").unwrap(), "3");
//! assert_eq!(add_decimals("-1.1", "1.1").unwrap(), "0");
//! assert_eq!(add_decimals("999", "1").unwrap(), "1000");
//!
//! let err = add_decimals("1.2", "abc").unwrap_err();
//! assert_eq!(err.operand(), Operand::Second);
//!
//! let total: ExactDecimal = ["19.99", "0.01", "-5"]
//!     .iter()
//!     .map(|s| s.parse::<ExactDecimal>().unwrap())
//!     .sum();
//! assert_eq!(total.to_string(), "15");
//! ```

pub mod batch;
pub mod domain;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::batch::{
        open_pairs, process_file, process_pairs, read_token, BatchError, PairReader, ReportWriter,
    };
    pub use crate::domain::{BatchSummary, PairOutcome, ReportConfig};
    pub use crate::interfaces::{LoggingSink, NoOpSink, PairSink};
    pub use crate::numeric::{
        add_decimals, canonical_form, is_valid_decimal, ExactDecimal, InvalidLiteralError,
        Operand, Sign,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use std::io::Cursor;

    #[test]
    fn test_validator_examples() {
        for token in ["", "1.2.3", "abc", ".5", "5.", "+-5"] {
            assert!(!is_valid_decimal(token), "{token:?} should be rejected");
        }
        for token in ["0", "-0.5", "123.456", "+7"] {
            assert!(is_valid_decimal(token), "{token:?} should be accepted");
        }
    }

    #[test]
    fn test_end_to_end_report() {
        let input = "2.5 0.5\n-1.1 1.1\n10 -3\n0.001 0.002\n999 1\n1.2 abc\n";
        let mut sink = ReportWriter::new(Vec::new(), ReportConfig::compact()).unwrap();
        let summary = process_pairs(PairReader::new(Cursor::new(input)), &mut sink).unwrap();

        assert_eq!(summary.pairs, 6);
        assert_eq!(summary.summed, 5);
        assert_eq!(summary.rejected, 1);

        let text = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "2.5 + 0.5 = 3",
                "-1.1 + 1.1 = 0",
                "10 + -3 = 7",
                "0.001 + 0.002 = 0.003",
                "999 + 1 = 1000",
                "1.2 + abc => invalid",
            ]
        );
    }

    #[test]
    fn test_string_and_value_apis_agree() {
        let pairs = [("0.1", "0.2"), ("-7.25", "7.2"), ("+003", "-0.0003")];
        for (a, b) in pairs {
            let by_text = add_decimals(a, b).unwrap();
            let x: ExactDecimal = a.parse().unwrap();
            let y: ExactDecimal = b.parse().unwrap();
            assert_eq!((x + y).as_str(), by_text);
        }
    }

    #[test]
    fn test_collected_outcomes() {
        let mut outcomes: Vec<PairOutcome> = Vec::new();
        process_pairs(PairReader::new(Cursor::new("1 x 2 3")), &mut outcomes).unwrap();

        assert_eq!(outcomes.len(), 2);
        let err = outcomes[0].result.as_ref().unwrap_err();
        assert_eq!(err, &InvalidLiteralError::new(Operand::Second, "x"));
        assert_eq!(outcomes[1].sum(), Some("5"));
    }
}
