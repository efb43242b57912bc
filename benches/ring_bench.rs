//! Criterion benchmark untuk ketiga mode ring
//!
//! Run dengan: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use mnemo::{AtomicRing, LockedRing, RingStore};

const CAPACITY: usize = 65536;

fn bench_put(c: &mut Criterion) {
    let mut group = c.benchmark_group("put");
    group.throughput(Throughput::Elements(1));

    group.bench_function("ring_store", |b| {
        let mut store: RingStore<u64> = RingStore::new(CAPACITY);
        let mut i = 0u64;
        b.iter(|| {
            store.put(black_box(i));
            i = i.wrapping_add(1);
        });
    });

    group.bench_function("locked_ring", |b| {
        let ring: LockedRing<u64> = LockedRing::new(CAPACITY);
        let mut i = 0u64;
        b.iter(|| {
            ring.put(black_box(i));
            i = i.wrapping_add(1);
        });
    });

    group.bench_function("atomic_ring", |b| {
        let ring: AtomicRing<u64> = AtomicRing::new(CAPACITY);
        let mut i = 0u64;
        b.iter(|| {
            ring.put(black_box(i));
            i = i.wrapping_add(1);
        });
    });

    group.finish();
}

fn bench_reads(c: &mut Criterion) {
    let mut group = c.benchmark_group("read");
    group.throughput(Throughput::Elements(1));

    let mut store: RingStore<u64> = RingStore::new(CAPACITY);
    for i in 0..CAPACITY as u64 {
        store.put(i);
    }

    group.bench_function("newest", |b| {
        b.iter(|| black_box(store.newest()));
    });

    group.bench_function("nth_from_newest", |b| {
        b.iter(|| black_box(store.nth_from_newest(black_box(1024))));
    });

    group.bench_function("most_recent_16", |b| {
        b.iter(|| black_box(store.most_recent(16)));
    });

    let locked: LockedRing<u64> = LockedRing::new(CAPACITY);
    for i in 0..CAPACITY as u64 {
        locked.put(i);
    }

    group.bench_function("locked_newest", |b| {
        b.iter(|| black_box(locked.newest()));
    });

    group.finish();
}

fn bench_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapshot");

    for size in [1024usize, 16384, 65536] {
        let mut store: RingStore<u64> = RingStore::new(size);
        // Wrap sekali supaya snapshot mengambil jalur split-at-cursor
        for i in 0..(size as u64 * 2) {
            store.put(i);
        }

        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("all_items_{}", size), |b| {
            b.iter(|| black_box(store.all_items()));
        });
    }

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("throughput");

    for batch_size in [100usize, 1000, 10000] {
        group.throughput(Throughput::Elements(batch_size as u64));
        group.bench_function(format!("atomic_batch_{}", batch_size), |b| {
            let ring: AtomicRing<u64> = AtomicRing::new(CAPACITY);
            b.iter(|| {
                for i in 0..batch_size {
                    ring.put(black_box(i as u64));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_put, bench_reads, bench_snapshot, bench_batch);
criterion_main!(benches);
