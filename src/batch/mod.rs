// ============================================================================
// Batch Module
// Token-pair sources, report sinks and the driver between them
// ============================================================================

mod errors;
mod processor;
mod reader;
mod writer;

pub use errors::{BatchError, BatchResult};
pub use processor::{process_file, process_pairs};
pub use reader::{open_pairs, read_token, PairReader};
pub use writer::ReportWriter;
