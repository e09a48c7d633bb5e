// ============================================================================
// Exact Decimal Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Validation - Grammar check on literals of growing length
// 2. Digit Arithmetic - Raw carry/borrow loops
// 3. Full Addition - Validation, alignment, arithmetic and canonicalization
// 4. Aggregation - Summing many ExactDecimal values
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use exact_decimal::numeric::{
    add_decimals, add_digits, is_valid_decimal, sub_digits, ExactDecimal,
};
use std::hint::black_box;

/// Literal with `int_len` integer digits and `frac_len` fraction digits.
fn literal(int_len: usize, frac_len: usize, seed: u8) -> String {
    let digit = |i: usize| char::from(b'1' + ((i + seed as usize) % 9) as u8);
    let integer: String = (0..int_len).map(digit).collect();
    let fraction: String = (0..frac_len).map(|i| digit(i + int_len)).collect();
    if frac_len == 0 {
        integer
    } else {
        format!("{}.{}", integer, fraction)
    }
}

// ============================================================================
// Validation Benchmarks
// ============================================================================

fn benchmark_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("validation");

    for len in [8, 64, 1024].iter() {
        let token = literal(*len, *len, 1);
        group.bench_with_input(BenchmarkId::new("is_valid_decimal", len), &token, |b, t| {
            b.iter(|| black_box(is_valid_decimal(t)))
        });
    }

    group.finish();
}

// ============================================================================
// Digit Arithmetic Benchmarks
// ============================================================================

fn benchmark_digits(c: &mut Criterion) {
    let mut group = c.benchmark_group("digits");

    for len in [16, 256, 4096].iter() {
        let a = "9".repeat(*len);
        let b = literal(*len / 2, 0, 3);

        group.bench_with_input(BenchmarkId::new("add_digits", len), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| black_box(add_digits(a, b)))
        });

        group.bench_with_input(BenchmarkId::new("sub_digits", len), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| black_box(sub_digits(a, b)))
        });
    }

    group.finish();
}

// ============================================================================
// Full Addition Benchmarks
// ============================================================================

fn benchmark_add_decimals(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_decimals");

    for len in [8, 64, 1024].iter() {
        let a = literal(*len, *len / 2, 2);
        let b = format!("-{}", literal(*len / 2, *len, 5));

        group.bench_with_input(BenchmarkId::new("same_sign", len), &(&a, &a), |bench, (a, b)| {
            bench.iter(|| black_box(add_decimals(a, b)))
        });

        group.bench_with_input(BenchmarkId::new("mixed_sign", len), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| black_box(add_decimals(a, b)))
        });
    }

    group.finish();
}

// ============================================================================
// Aggregation Benchmarks
// ============================================================================

fn benchmark_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("sum");

    for count in [100, 1000].iter() {
        let values: Vec<ExactDecimal> = (0..*count)
            .map(|i| {
                let text = literal(6, 2, (i % 9) as u8);
                let value: ExactDecimal = text.parse().unwrap();
                if i % 3 == 0 {
                    -value
                } else {
                    value
                }
            })
            .collect();

        group.bench_with_input(BenchmarkId::new("exact_decimal", count), &values, |b, values| {
            b.iter(|| black_box(values.iter().sum::<ExactDecimal>()))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_validation,
    benchmark_digits,
    benchmark_add_decimals,
    benchmark_sum,
);
criterion_main!(benches);
