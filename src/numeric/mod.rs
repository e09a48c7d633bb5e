// ============================================================================
// Numeric Module
// Exact arbitrary-precision decimal addition on text
// ============================================================================
//
// This module provides:
// - is_valid_decimal / DecimalLiteral: grammar check for decimal tokens
// - strip_sign / align_fractions / NormalizedPair: operand normalization
// - compare_abs: magnitude ordering
// - add_digits / sub_digits: unsigned carry/borrow arithmetic
// - add_decimals / canonicalize: signed addition with canonical output
// - ExactDecimal: owned canonical value type with Add/Neg/Sum/Ord
//
// Design principles:
// - No floating-point operations
// - Unbounded precision, so no overflow paths
// - Validation is a hard gate; failures are returned as values
// - Pure functions, no shared state

mod adder;
mod compare;
mod digits;
mod errors;
mod exact;
mod literal;
mod normalize;
mod sign;

pub use adder::{add_decimals, canonical_form, canonicalize, negate_sign, RawSum};
pub use compare::compare_abs;
pub use digits::{add_digits, sub_digits};
pub use errors::{InvalidLiteralError, NumericResult, Operand};
pub use exact::ExactDecimal;
pub use literal::{is_valid_decimal, DecimalLiteral};
pub use normalize::{align_fractions, fraction_digits, strip_sign, NormalizedPair};
pub use sign::Sign;
