//! Sort engine benchmarks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use algovis_common::{ValueKind, ValueSource};
use algovis_core::sort::{sort, SortAlgorithm};

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");
    let mut source = ValueSource::with_seed(0xA15);
    let input = source.values(ValueKind::Int, 2_000);

    for algo in [
        SortAlgorithm::Bubble,
        SortAlgorithm::Insertion,
        SortAlgorithm::Shell,
        SortAlgorithm::Quick,
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(algo.name()), &algo, |b, &algo| {
            b.iter(|| {
                let mut data = input.clone();
                sort(black_box(&mut data), algo);
                data
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sort);
criterion_main!(benches);
