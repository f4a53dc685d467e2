use criterion::{black_box, criterion_group, criterion_main, Criterion};
use euclid_vector::{utils::generate_random_vectors, AngleUnit};

fn bench_arithmetic(c: &mut Criterion) {
    let vectors = generate_random_vectors(128, 2).unwrap();
    let (a, b) = (&vectors[0], &vectors[1]);

    c.bench_function("plus_128d", |bench| {
        bench.iter(|| black_box(a).plus(black_box(b)).unwrap())
    });
    c.bench_function("dot_128d", |bench| {
        bench.iter(|| black_box(a).dot(black_box(b)).unwrap())
    });
    c.bench_function("normalized_128d", |bench| {
        bench.iter(|| black_box(a).normalized().unwrap())
    });
}

fn bench_geometry(c: &mut Criterion) {
    let vectors = generate_random_vectors(3, 2).unwrap();
    let (a, b) = (&vectors[0], &vectors[1]);

    c.bench_function("angle_with_3d", |bench| {
        bench.iter(|| black_box(a).angle_with(black_box(b), AngleUnit::Radians).unwrap())
    });
    c.bench_function("cross_3d", |bench| {
        bench.iter(|| black_box(a).cross(black_box(b)).unwrap())
    });
    c.bench_function("component_parallel_to_3d", |bench| {
        bench.iter(|| black_box(a).component_parallel_to(black_box(b)).unwrap())
    });
}

criterion_group!(benches, bench_arithmetic, bench_geometry);
criterion_main!(benches);
