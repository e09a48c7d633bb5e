// ============================================================================
// Pair Sink Interface
// Defines the contract for consuming per-pair batch outcomes
// ============================================================================

use crate::domain::PairOutcome;
use std::io;

/// Receiver of evaluated token pairs
/// Implementations can write reports, log, collect results, etc.
pub trait PairSink {
    /// Handle one evaluated pair
    fn on_outcome(&mut self, outcome: &PairOutcome) -> io::Result<()>;

    /// Called once after the source is exhausted
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// No-op sink for testing
pub struct NoOpSink;

impl PairSink for NoOpSink {
    fn on_outcome(&mut self, _outcome: &PairOutcome) -> io::Result<()> {
        Ok(())
    }
}

/// Logging sink
pub struct LoggingSink;

impl PairSink for LoggingSink {
    fn on_outcome(&mut self, outcome: &PairOutcome) -> io::Result<()> {
        match &outcome.result {
            Ok(sum) => tracing::info!(
                first = %outcome.first,
                second = %outcome.second,
                %sum,
                "pair summed"
            ),
            Err(err) => tracing::warn!(
                first = %outcome.first,
                second = %outcome.second,
                error = %err,
                "pair rejected"
            ),
        }
        Ok(())
    }
}

/// Collects every outcome in memory
impl PairSink for Vec<PairOutcome> {
    fn on_outcome(&mut self, outcome: &PairOutcome) -> io::Result<()> {
        self.push(outcome.clone());
        Ok(())
    }
}
