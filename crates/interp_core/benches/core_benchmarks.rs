//! Criterion benchmarks for interp_core.
//!
//! Measures radix decoding and constant-term recovery as sample magnitudes
//! grow, to characterise the cost of exact big-number arithmetic.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use interp_core::math::interpolators::{Interpolator, LagrangeInterpolator, QuadraticInterpolator};
use interp_core::math::radix::parse_radix;
use interp_core::types::{BigInt, Point};

/// Generate a base-36 digit string of the given length.
fn generate_digits(len: usize) -> String {
    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    (0..len)
        .map(|i| ALPHABET[(i * 7 + 1) % ALPHABET.len()] as char)
        .collect()
}

/// Generate `n` points with y-values of roughly `digits` base-36 digits.
fn generate_points(n: usize, digits: usize) -> Vec<Point> {
    let base = parse_radix(&generate_digits(digits), 36).unwrap();
    (1..=n)
        .map(|x| {
            let x = BigInt::from(x);
            let y = &base * &x * &x + &x;
            Point::from_integers(x, y)
        })
        .collect()
}

/// Benchmark radix decoding across value lengths.
fn bench_radix_decoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("radix_decoding");

    for len in [16, 256, 4096] {
        let digits = generate_digits(len);
        group.bench_with_input(BenchmarkId::new("base36", len), &digits, |b, digits| {
            b.iter(|| parse_radix(black_box(digits), 36).unwrap());
        });
    }

    group.finish();
}

/// Benchmark constant-term recovery for quadratic and general interpolators.
fn bench_constant_term(c: &mut Criterion) {
    let mut group = c.benchmark_group("constant_term");

    for digits in [16, 256, 4096] {
        let points = generate_points(3, digits);
        group.bench_with_input(
            BenchmarkId::new("quadratic", digits),
            &points,
            |b, points| {
                b.iter(|| {
                    QuadraticInterpolator::new(black_box(points))
                        .unwrap()
                        .constant_term()
                });
            },
        );
    }

    for n in [3, 8, 16] {
        let points = generate_points(n, 256);
        group.bench_with_input(BenchmarkId::new("lagrange", n), &points, |b, points| {
            b.iter(|| {
                LagrangeInterpolator::new(black_box(points))
                    .unwrap()
                    .constant_term()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_radix_decoding, bench_constant_term);
criterion_main!(benches);
