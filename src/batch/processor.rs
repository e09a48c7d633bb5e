// ============================================================================
// Batch Processor
// Drives token pairs from a source through the adder into a sink
// ============================================================================

use super::errors::{BatchError, BatchResult};
use super::reader::open_pairs;
use crate::domain::{BatchSummary, PairOutcome};
use crate::interfaces::PairSink;
use std::io;
use std::path::Path;

/// Evaluate every pair from `pairs` and hand each outcome to `sink`.
///
/// A malformed literal only affects its own pair. The run stops at the first
/// read or write failure.
///
/// # Errors
/// - `Read` if the source fails mid-stream
/// - `Write` if the sink rejects an outcome or fails to finish
pub fn process_pairs<I, S>(pairs: I, sink: &mut S) -> BatchResult<BatchSummary>
where
    I: IntoIterator<Item = io::Result<(String, String)>>,
    S: PairSink + ?Sized,
{
    let mut summary = BatchSummary::default();

    for pair in pairs {
        let (first, second) = pair.map_err(BatchError::Read)?;
        let outcome = PairOutcome::evaluate(first, second);
        tracing::debug!(
            first = %outcome.first,
            second = %outcome.second,
            valid = outcome.is_valid(),
            "evaluated pair"
        );
        summary.record(&outcome);
        sink.on_outcome(&outcome).map_err(BatchError::Write)?;
    }

    sink.finish().map_err(BatchError::Write)?;
    tracing::info!(
        pairs = summary.pairs,
        summed = summary.summed,
        rejected = summary.rejected,
        "batch complete"
    );
    Ok(summary)
}

/// Open `path` and process every token pair it contains.
///
/// # Errors
/// `SourceUnavailable` if the file cannot be opened, otherwise as
/// [`process_pairs`].
pub fn process_file<S>(path: impl AsRef<Path>, sink: &mut S) -> BatchResult<BatchSummary>
where
    S: PairSink + ?Sized,
{
    let reader = open_pairs(path)?;
    process_pairs(reader, sink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::{PairReader, ReportWriter};
    use crate::domain::ReportConfig;
    use crate::numeric::Operand;
    use std::io::{Cursor, Write};

    struct FailingSink;

    impl PairSink for FailingSink {
        fn on_outcome(&mut self, _outcome: &PairOutcome) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_invalid_pair_does_not_stop_batch() {
        let reader = PairReader::new(Cursor::new("1.2 abc\n10 -3\n"));
        let mut sink: Vec<PairOutcome> = Vec::new();
        let summary = process_pairs(reader, &mut sink).unwrap();

        assert_eq!(summary.pairs, 2);
        assert_eq!(summary.rejected, 1);
        assert_eq!(summary.summed, 1);
        assert_eq!(
            sink[0].result.as_ref().unwrap_err().operand(),
            Operand::Second
        );
        assert_eq!(sink[1].sum(), Some("7"));
    }

    #[test]
    fn test_read_error_surfaces() {
        let pairs = vec![
            Ok(("1".to_string(), "2".to_string())),
            Err(io::Error::new(io::ErrorKind::InvalidData, "bad")),
            Ok(("3".to_string(), "4".to_string())),
        ];
        let mut sink: Vec<PairOutcome> = Vec::new();
        let err = process_pairs(pairs, &mut sink).unwrap_err();

        assert!(matches!(err, BatchError::Read(_)));
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_write_error_surfaces() {
        let reader = PairReader::new(Cursor::new("1 2"));
        let err = process_pairs(reader, &mut FailingSink).unwrap_err();
        assert!(matches!(err, BatchError::Write(_)));
    }

    #[test]
    fn test_process_missing_file() {
        let mut sink: Vec<PairOutcome> = Vec::new();
        let err = process_file("no/such/input.txt", &mut sink).unwrap_err();
        assert!(err.is_source_unavailable());
        assert!(sink.is_empty());
    }

    #[test]
    fn test_process_file_report() {
        let path = std::env::temp_dir().join(format!(
            "exact-decimal-batch-{}.txt",
            std::process::id()
        ));
        {
            let mut file = std::fs::File::create(&path).unwrap();
            writeln!(file, "2.5 0.5").unwrap();
            writeln!(file, "-1.1 1.1").unwrap();
            writeln!(file, "0.001 0.002 999").unwrap();
            writeln!(file, "1").unwrap();
        }

        let mut sink = ReportWriter::new(Vec::new(), ReportConfig::classic()).unwrap();
        let summary = process_file(&path, &mut sink).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(summary.pairs, 4);
        assert_eq!(summary.rejected, 0);
        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(
            text,
            "Input: 2.5 , 0.5\nSum: 3\n\n\
             Input: -1.1 , 1.1\nSum: 0\n\n\
             Input: 0.001 , 0.002\nSum: 0.003\n\n\
             Input: 999 , 1\nSum: 1000\n\n"
        );
    }
}
