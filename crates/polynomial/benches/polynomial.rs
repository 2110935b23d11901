// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use polyrpc_polynomial::{add, mul, sub, Polynomial};

fn create_test_polynomials(degree: usize) -> (Polynomial, Polynomial) {
    let mut coeffs1 = Vec::new();
    let mut coeffs2 = Vec::new();

    for i in 0..=degree {
        coeffs1.push(i as f64 + 1.0);
        coeffs2.push((i + 1) as f64 * 2.0);
    }

    (Polynomial::new(coeffs1), Polynomial::new(coeffs2))
}

fn benchmark_polynomial_addition(c: &mut Criterion) {
    let mut group = c.benchmark_group("polynomial_addition");

    for degree in [10, 50, 100, 500] {
        let (poly1, poly2) = create_test_polynomials(degree);
        let polys = [poly1, poly2];

        group.bench_function(&format!("degree_{}", degree), |b| {
            b.iter(|| black_box(add(&polys)))
        });
    }

    group.finish();
}

fn benchmark_polynomial_subtraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("polynomial_subtraction");

    for degree in [10, 50, 100, 500] {
        let (poly1, poly2) = create_test_polynomials(degree);
        let polys = [poly1, poly2];

        group.bench_function(&format!("degree_{}", degree), |b| {
            b.iter(|| black_box(sub(&polys)))
        });
    }

    group.finish();
}

fn benchmark_polynomial_multiplication(c: &mut Criterion) {
    let mut group = c.benchmark_group("polynomial_multiplication");

    for degree in [5, 10, 20, 50] {
        let (poly1, poly2) = create_test_polynomials(degree);
        let polys = [poly1.clone(), poly2, poly1];

        group.bench_function(&format!("degree_{}", degree), |b| {
            b.iter(|| black_box(mul(&polys)))
        });
    }

    group.finish();
}

fn benchmark_text_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_codec");

    for degree in [10, 100] {
        let (poly1, _) = create_test_polynomials(degree);
        let line = poly1.to_coefficient_line();

        group.bench_function(&format!("decode_degree_{}", degree), |b| {
            b.iter(|| black_box(line.parse::<Polynomial>().unwrap()))
        });
        group.bench_function(&format!("encode_degree_{}", degree), |b| {
            b.iter(|| black_box(poly1.to_string()))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_polynomial_addition,
    benchmark_polynomial_subtraction,
    benchmark_polynomial_multiplication,
    benchmark_text_codec
);
criterion_main!(benches);
