use criterion::{Criterion, black_box, criterion_group, criterion_main};
use dasa_core::{ReferencePoint, active_path, full_schedule, years_to_days};

fn descend_bench(c: &mut Criterion) {
    let anchor = ReferencePoint::new(2_447_892.0, 3, 0.42).unwrap();
    let query = anchor.reference_jd + years_to_days(34.5);

    let mut group = c.benchmark_group("descend");
    group.bench_function("active_path_depth1", |b| {
        b.iter(|| active_path(black_box(&anchor), black_box(query), 1))
    });
    group.bench_function("active_path_depth4", |b| {
        b.iter(|| active_path(black_box(&anchor), black_box(query), 4))
    });
    group.finish();
}

fn schedule_bench(c: &mut Criterion) {
    let anchor = ReferencePoint::new(2_447_892.0, 3, 0.42).unwrap();

    let mut group = c.benchmark_group("schedule");
    group.bench_function("full_schedule", |b| {
        b.iter(|| full_schedule(black_box(&anchor)))
    });
    group.finish();
}

criterion_group!(benches, descend_bench, schedule_bench);
criterion_main!(benches);
