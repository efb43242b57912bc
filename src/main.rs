//! Mnemo Demo - pengukuran in-process untuk ketiga write path
//!
//! Mengukur latency dan throughput:
//! - RingStore: baseline tanpa sinkronisasi
//! - LockedRing: shared/exclusive lock
//! - AtomicRing: CAS retry loop, single dan multi-writer
//!
//! Run dengan: cargo run --release

use std::sync::Arc;
use std::thread;
use std::time::Instant;

use mnemo::{AtomicRing, LockedRing, RingStore};

const CAPACITY: usize = 65536;
const ITERATIONS: usize = 1_000_000;

fn main() {
    println!("🚀 Mnemo Recent-Window Ring Buffer - Demo");
    println!("=========================================\n");

    benchmark_ring_store();
    benchmark_locked_ring();
    benchmark_atomic_ring();
    benchmark_atomic_multi_writer();

    println!("\n✅ All measurements complete!");
}

fn report_latency(label: &str, ops: usize, start: Instant) {
    let duration = start.elapsed();
    let ns_per_op = duration.as_nanos() as f64 / ops as f64;
    println!(
        "  {} latency: {:.2} ns/op ({:.2} M ops/sec)",
        label,
        ns_per_op,
        ops as f64 / duration.as_secs_f64() / 1_000_000.0
    );
}

fn benchmark_ring_store() {
    println!("📊 RingStore (plain, externally serialized)");
    println!("-------------------------------------------");

    let mut store: RingStore<u64> = RingStore::new(CAPACITY);

    // Warm up
    for i in 0..CAPACITY as u64 {
        store.put(i);
    }

    let start = Instant::now();
    for i in 0..ITERATIONS {
        store.put(i as u64);
    }
    report_latency("put   ", ITERATIONS, start);

    let start = Instant::now();
    for _ in 0..ITERATIONS {
        store.newest();
    }
    report_latency("newest", ITERATIONS, start);

    let snapshots = 1_000;
    let start = Instant::now();
    for _ in 0..snapshots {
        store.all_items();
    }
    report_latency("snap  ", snapshots, start);
    println!();
}

fn benchmark_locked_ring() {
    println!("📊 LockedRing (shared/exclusive lock)");
    println!("-------------------------------------");

    let ring: LockedRing<u64> = LockedRing::new(CAPACITY);

    let start = Instant::now();
    for i in 0..ITERATIONS {
        ring.put(i as u64);
    }
    report_latency("put   ", ITERATIONS, start);

    let start = Instant::now();
    for _ in 0..ITERATIONS {
        ring.newest();
    }
    report_latency("newest", ITERATIONS, start);
    println!();
}

fn benchmark_atomic_ring() {
    println!("📊 AtomicRing (lock-free, single writer)");
    println!("----------------------------------------");

    let ring: AtomicRing<u64> = AtomicRing::new(CAPACITY);

    let start = Instant::now();
    for i in 0..ITERATIONS {
        ring.put(i as u64);
    }
    report_latency("put   ", ITERATIONS, start);

    let start = Instant::now();
    for _ in 0..ITERATIONS {
        ring.newest();
    }
    report_latency("newest", ITERATIONS, start);
    println!();
}

fn benchmark_atomic_multi_writer() {
    println!("📊 AtomicRing (lock-free, contended writers)");
    println!("--------------------------------------------");

    for writers in [2usize, 4, 8] {
        let per_writer = ITERATIONS / writers;
        let ring: Arc<AtomicRing<u64>> = Arc::new(AtomicRing::new(CAPACITY));

        let start = Instant::now();
        let handles: Vec<_> = (0..writers)
            .map(|w| {
                let ring = Arc::clone(&ring);
                thread::spawn(move || {
                    for i in 0..per_writer {
                        ring.put((w * per_writer + i) as u64);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        let duration = start.elapsed();

        let total = writers * per_writer;
        println!(
            "  {} writers: {:.2} M puts/sec aggregate ({:.2} ns/op)",
            writers,
            total as f64 / duration.as_secs_f64() / 1_000_000.0,
            duration.as_nanos() as f64 / total as f64
        );
    }
}
