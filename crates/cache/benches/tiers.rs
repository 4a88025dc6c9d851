//! Combined-path cache benchmarks
//!
//! Run with: cargo bench --bench tiers

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use std::time::Duration;
use tempfile::TempDir;
use tiercache::{CacheConfig, CacheInstance, InstanceRegistry};

fn instance(temp_dir: &TempDir) -> CacheInstance {
    InstanceRegistry::new(CacheConfig::new(temp_dir.path())).instance_with_name("bench")
}

/// Write-through cost by payload size
fn bench_writes(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_object");
    group.measurement_time(Duration::from_secs(10));

    for size in [16usize, 1024, 64 * 1024] {
        let temp_dir = TempDir::new().unwrap();
        let cache = instance(&temp_dir);
        let data = vec![0u8; size];

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            let mut i = 0u64;
            b.iter(|| {
                i += 1;
                cache
                    .set_object(data.clone(), &format!("key_{}", i % 100))
                    .unwrap();
            });
        });
    }

    group.finish();
}

/// Reads served from memory versus reads that promote from disk
fn bench_reads(c: &mut Criterion) {
    let mut group = c.benchmark_group("object_for_key");
    let temp_dir = TempDir::new().unwrap();
    let cache = instance(&temp_dir);
    cache.set_object(vec![7u8; 1024], "hot").unwrap();

    group.bench_function("memory_hit", |b| {
        b.iter(|| black_box(cache.object_for_key::<Vec<u8>>("hot")));
    });

    group.bench_function("disk_promotion", |b| {
        b.iter_batched(
            || cache.remove_all_objects_in_memory(),
            |()| black_box(cache.object_for_key::<Vec<u8>>("hot")),
            BatchSize::SmallInput,
        );
    });

    group.bench_function("miss", |b| {
        b.iter(|| black_box(cache.object_for_key::<Vec<u8>>("absent")));
    });

    group.finish();
}

criterion_group!(benches, bench_writes, bench_reads);
criterion_main!(benches);
