// ============================================================================
// Domain Models Module
// Contains batch configuration and per-pair value objects
// ============================================================================

pub mod config;
pub mod outcome;

pub use config::ReportConfig;
pub use outcome::{BatchSummary, PairOutcome};
