// ============================================================================
// Report Writer
// Formats pair outcomes as text records
// ============================================================================

use super::errors::{BatchError, BatchResult};
use crate::domain::{PairOutcome, ReportConfig};
use crate::interfaces::PairSink;
use std::io::{self, Write};

/// Sink writing one text record per pair to any `io::Write`.
pub struct ReportWriter<W: Write> {
    writer: W,
    config: ReportConfig,
}

impl<W: Write> ReportWriter<W> {
    /// Create a report writer after validating `config`.
    ///
    /// # Errors
    /// Returns `InvalidConfig` if the configuration fails
    /// [`ReportConfig::validate`].
    pub fn new(writer: W, config: ReportConfig) -> BatchResult<Self> {
        config.validate().map_err(|reason| {
            tracing::warn!(%reason, "rejected report configuration");
            BatchError::InvalidConfig(reason)
        })?;
        Ok(Self { writer, config })
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> PairSink for ReportWriter<W> {
    fn on_outcome(&mut self, outcome: &PairOutcome) -> io::Result<()> {
        let c = &self.config;
        write!(
            self.writer,
            "{}{}{}{}{}",
            c.input_label, outcome.first, c.separator, outcome.second, c.line_break
        )?;
        match &outcome.result {
            Ok(sum) => write!(self.writer, "{}{}", c.sum_label, sum)?,
            Err(_) => write!(self.writer, "{}", c.invalid_message)?,
        }
        self.writer.write_all(c.record_terminator.as_bytes())
    }

    fn finish(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
