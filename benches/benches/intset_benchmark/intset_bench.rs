use std::{hint::black_box, io::Cursor, time::Duration};

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use intsets::{FastIntSet, CUTOFF};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use xxhash_rust::xxh64::Xxh64;

/// Только плотное окно, без выделений в куче.
fn create_dense_set() -> FastIntSet {
    (0..CUTOFF).step_by(3).collect()
}

/// Окно плюс значения за его пределами.
fn create_mixed_set(size: usize) -> FastIntSet {
    let mut rng = SmallRng::seed_from_u64(42);
    (0..size)
        .map(|i| {
            if i % 2 == 0 {
                rng.gen_range(0..CUTOFF)
            } else {
                rng.gen_range(-10_000..1_000_000)
            }
        })
        .collect()
}

fn bench_add_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_contains");

    group.bench_function("dense_add", |b| {
        b.iter(|| {
            let mut set = FastIntSet::new();
            for v in 0..CUTOFF {
                set.add(black_box(v));
            }
            black_box(set);
        });
    });

    group.bench_function("overflow_add", |b| {
        b.iter(|| {
            let mut set = FastIntSet::new();
            for v in CUTOFF..CUTOFF * 2 {
                set.add(black_box(v));
            }
            black_box(set);
        });
    });

    let set = create_mixed_set(1_000);
    group.bench_function("contains_mixed", |b| {
        b.iter(|| {
            let mut hits = 0;
            for v in -64..CUTOFF + 64 {
                hits += set.contains(black_box(v)) as usize;
            }
            black_box(hits);
        });
    });

    group.finish();
}

fn bench_add_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_range");

    for span in [16i64, 128, 1_024].iter() {
        group.throughput(Throughput::Elements(*span as u64));
        group.bench_with_input(BenchmarkId::from_parameter(span), span, |b, &span| {
            b.iter(|| {
                let mut set = FastIntSet::new();
                set.add_range(black_box(0), black_box(span - 1));
                black_box(set);
            });
        });
    }

    group.finish();
}

fn bench_algebra(c: &mut Criterion) {
    let mut group = c.benchmark_group("algebra");

    let dense_a = create_dense_set();
    let dense_b: FastIntSet = (0..CUTOFF).step_by(2).collect();
    group.bench_function("dense_union", |b| {
        b.iter(|| black_box(dense_a.union(&dense_b)));
    });
    group.bench_function("dense_intersects", |b| {
        b.iter(|| black_box(dense_a.intersects(&dense_b)));
    });

    let mixed_a = create_mixed_set(1_000);
    let mixed_b = create_mixed_set(500);
    group.bench_function("mixed_union", |b| {
        b.iter(|| black_box(mixed_a.union(&mixed_b)));
    });
    group.bench_function("mixed_intersection", |b| {
        b.iter(|| black_box(mixed_a.intersection(&mixed_b)));
    });
    group.bench_function("mixed_subset_of", |b| {
        b.iter(|| black_box(mixed_b.subset_of(&mixed_a)));
    });

    group.finish();
}

fn bench_iter_full_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("iter_full_scan");
    group.measurement_time(Duration::from_secs(5));

    for size in [100, 1_000, 10_000].iter() {
        let set = create_mixed_set(*size);

        group.throughput(Throughput::Elements(set.len() as u64));
        group.bench_with_input(BenchmarkId::new("iter", size), size, |b, _| {
            b.iter(|| {
                let sum: i64 = set.iter().fold(0i64, |acc, v| acc.wrapping_add(v));
                black_box(sum);
            });
        });
        group.bench_with_input(BenchmarkId::new("next_chain", size), size, |b, _| {
            b.iter(|| {
                let mut count = 0usize;
                let mut cur = set.next(i64::MIN);
                while let Some(v) = cur {
                    count += 1;
                    cur = v.checked_add(1).and_then(|n| set.next(n));
                }
                black_box(count);
            });
        });
    }

    group.finish();
}

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    let dense: FastIntSet = (0..64).step_by(5).collect();
    let wide: FastIntSet = (0..2_000).map(|i| i * 37).collect();

    for (name, set) in [("bitmap", &dense), ("list", &wide)] {
        let bytes = set.to_bytes().unwrap();
        group.throughput(Throughput::Bytes(bytes.len() as u64));

        group.bench_function(format!("encode_{name}"), |b| {
            let mut buf = Vec::with_capacity(bytes.len());
            b.iter(|| {
                buf.clear();
                set.encode(&mut buf).unwrap();
                black_box(&buf);
            });
        });

        group.bench_function(format!("decode_{name}"), |b| {
            let mut target = FastIntSet::new();
            b.iter(|| {
                target.decode(&mut Cursor::new(&bytes)).unwrap();
                black_box(&target);
            });
        });

        group.bench_function(format!("encode_base64_{name}"), |b| {
            b.iter(|| {
                let mut hasher = Xxh64::new(0);
                black_box(set.encode_base64_string(&mut hasher).unwrap());
            });
        });
    }

    group.finish();
}

fn bench_format(c: &mut Criterion) {
    let set = create_mixed_set(1_000);

    c.bench_function("display", |b| {
        b.iter(|| black_box(set.to_string()));
    });
}

criterion_group!(
    benches,
    bench_add_contains,
    bench_add_range,
    bench_algebra,
    bench_iter_full_scan,
    bench_codec,
    bench_format
);
criterion_main!(benches);
