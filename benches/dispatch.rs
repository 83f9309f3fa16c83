use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use serde_json::json;
use stubkit::{CallPattern, Stub};

/// Benchmark dispatch against a single expectation
fn bench_single_expectation(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    group.throughput(Throughput::Elements(1));

    let stub = Stub::new("bench");
    stub.when(CallPattern::operation("get")).then_return(json!(200));
    let args = json!(["https://x/1"]);

    group.bench_function("wildcard_match", |b| {
        b.iter(|| black_box(stub.call(black_box("get"), args.clone())))
    });

    let exact = Stub::new("bench");
    exact
        .when(CallPattern::operation("get").with_args(json!(["https://x/1"])))
        .then_return(json!(200));

    group.bench_function("exact_match", |b| {
        b.iter(|| black_box(exact.call(black_box("get"), args.clone())))
    });

    group.finish();
}

/// Benchmark the reverse scan with many stacked expectations
fn bench_stacked_expectations(c: &mut Criterion) {
    let mut group = c.benchmark_group("stacked_expectations");

    for count in [1usize, 16, 128] {
        let stub = Stub::new("bench");
        for i in 0..count {
            stub.when(CallPattern::operation("get").with_args(json!([format!("url/{}", i)])))
                .then_return(json!(i));
        }
        // Worst case: the argument only matches the oldest registration.
        let args = json!(["url/0"]);

        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::new("oldest_wins", count), &count, |b, _| {
            b.iter(|| black_box(stub.call("get", args.clone())))
        });
    }

    group.finish();
}

/// Benchmark verification over a long history
fn bench_verification(c: &mut Criterion) {
    let mut group = c.benchmark_group("verification");

    let stub = Stub::new("bench");
    stub.when(CallPattern::operation("get")).then_return(json!(200));
    for i in 0..10_000 {
        stub.call("get", json!([format!("url/{}", i % 10)])).unwrap();
    }
    let pattern = CallPattern::operation("get").with_args(json!(["url/3"]));

    group.throughput(Throughput::Elements(10_000));
    group.bench_function("scan_10k_records", |b| {
        b.iter(|| black_box(stub.verify(&pattern).count()))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_single_expectation,
    bench_stacked_expectations,
    bench_verification
);
criterion_main!(benches);
