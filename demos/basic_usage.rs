// ============================================================================
// Basic Usage Example
// ============================================================================

use exact_decimal::batch::{process_pairs, PairReader, ReportWriter};
use exact_decimal::domain::ReportConfig;
use exact_decimal::numeric::{add_decimals, ExactDecimal};
use std::io::{self, Cursor};

fn main() {
    println!("=== Exact Decimal Example ===\n");

    // Plain string addition
    println!("Adding literals...");
    for (a, b) in [("2.5", "0.5"), ("-1.1", "1.1"), ("999", "1"), ("1.2", "abc")] {
        match add_decimals(a, b) {
            Ok(sum) => println!("  {} + {} = {}", a, b, sum),
            Err(err) => println!("  {} + {} -> {}", a, b, err),
        }
    }

    // Binary floating point drifts, exact decimals do not
    println!("\n=== Summing 0.1 ten times ===");
    let float_total: f64 = (0..10).map(|_| 0.1).sum();
    let tenth: ExactDecimal = "0.1".parse().unwrap();
    let exact_total: ExactDecimal = std::iter::repeat(tenth).take(10).sum();
    println!("  f64:          {}", float_total);
    println!("  ExactDecimal: {}", exact_total);

    // Precision far beyond any fixed-width type
    println!("\n=== Large operands ===");
    let big: ExactDecimal = format!("{}.{}", "9".repeat(30), "9".repeat(30))
        .parse()
        .unwrap();
    let step: ExactDecimal = format!("0.{}1", "0".repeat(29)).parse().unwrap();
    println!("  {} + {} =\n  {}", big, step, &big + &step);
    println!("  fits rust_decimal: {}", (&big + &step).to_decimal().is_ok());

    // Batch report over an in-memory source
    println!("\n=== Batch Report ===");
    let input = "10 -3\n0.001 0.002\n.5 1\n";
    let stdout = io::stdout();
    let mut sink = ReportWriter::new(stdout.lock(), ReportConfig::compact()).unwrap();
    let summary = process_pairs(PairReader::new(Cursor::new(input)), &mut sink).unwrap();
    drop(sink);

    println!(
        "\nProcessed {} pairs ({} summed, {} rejected)",
        summary.pairs, summary.summed, summary.rejected
    );
}
