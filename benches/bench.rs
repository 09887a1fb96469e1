extern crate criterion;

use criterion::*;
use big_value::BigInt;

fn operand(digits: usize) -> BigInt {
    "9876543210".repeat(digits / 10).parse().unwrap()
}

fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");
    for digits in [100, 1000, 10000] {
        let a = operand(digits);
        let b = operand(digits);
        group.bench_with_input(BenchmarkId::from_parameter(digits), &digits, |bench, _| {
            bench.iter(|| &a * &b)
        });
    }
    group.finish();

    let mut group = c.benchmark_group("to_string");
    group.sample_size(10);
    for digits in [100, 1000, 10000] {
        let a = operand(digits);
        group.bench_with_input(BenchmarkId::from_parameter(digits), &digits, |bench, _| {
            bench.iter(|| a.to_string())
        });
    }
    group.finish();

    c.bench_function("parse 10000 digits", |bench| {
        let s = "9876543210".repeat(1000);
        bench.iter(|| s.parse::<BigInt>().unwrap())
    });
}

criterion_group!(benches, bench);
criterion_main!(benches);
