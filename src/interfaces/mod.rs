// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod pair_sink;

pub use pair_sink::{LoggingSink, NoOpSink, PairSink};
