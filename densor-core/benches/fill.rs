use criterion::{criterion_group, criterion_main, Criterion};
use densor_core::NdArray;

fn bench_fill_1m(c: &mut Criterion) {
    c.bench_function("fill_1024x1024", |bencher| {
        bencher.iter(|| NdArray::fill(3.5, [1024, 1024]));
    });
}

fn bench_fill_1m_single_thread(c: &mut Criterion) {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(1)
        .build()
        .unwrap();
    c.bench_function("fill_1024x1024_single_thread", |bencher| {
        bencher.iter(|| pool.install(|| NdArray::fill(3.5, [1024, 1024])));
    });
}

fn bench_arange_1m(c: &mut Criterion) {
    c.bench_function("arange_1m", |bencher| {
        bencher.iter(|| NdArray::arange(0.0, 1_000_000.0, 1.0).unwrap());
    });
}

fn bench_eye_1k(c: &mut Criterion) {
    c.bench_function("eye_1024", |bencher| {
        bencher.iter(|| NdArray::eye(1024));
    });
}

criterion_group!(
    benches,
    bench_fill_1m,
    bench_fill_1m_single_thread,
    bench_arange_1m,
    bench_eye_1k
);
criterion_main!(benches);
