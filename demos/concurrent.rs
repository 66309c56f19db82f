//! Concurrent access example for partition-cache.
//!
//! Run with: cargo run --example concurrent

use partition_cache::{Options, PartitionCache};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

fn main() {
    let cache: Arc<PartitionCache<u32, String, String, Vec<String>>> =
        Arc::new(PartitionCache::new(Arc::new(Options::default())));
    let catalog_queries = Arc::new(AtomicUsize::new(0));

    println!("=== Concurrent Access Example ===\n");

    let num_workers = 8;
    let lookups_per_worker = 1000;
    let num_tables = 10u32;

    let start = Instant::now();
    let mut handles = vec![];

    for worker_id in 0..num_workers {
        let cache = Arc::clone(&cache);
        let catalog_queries = Arc::clone(&catalog_queries);
        handles.push(thread::spawn(move || {
            for i in 0..lookups_per_worker {
                let table = i % num_tables;
                cache.fetch_partitions(&table, i % 2 == 0, || {
                    // Simulate a slow catalog round trip
                    thread::sleep(Duration::from_millis(5));
                    catalog_queries.fetch_add(1, Ordering::SeqCst);
                    vec![format!("table{}_p0", table), format!("table{}_p1", table)]
                });
            }
            println!("Worker {} completed {} lookups", worker_id, lookups_per_worker);
        }));
    }

    for handle in handles {
        handle.join().expect("thread panicked");
    }

    let elapsed = start.elapsed();
    let total = num_workers * lookups_per_worker as usize;

    println!("\n--- Summary ---");
    println!("Workers: {}", num_workers);
    println!("Total lookups: {}", total);
    println!(
        "Catalog queries: {} (expected {})",
        catalog_queries.load(Ordering::SeqCst),
        num_tables * 2
    );
    println!("Hit rate: {:.4}", cache.stats().hit_rate());
    println!("Time: {:?}", elapsed);

    println!("\n=== Concurrent Access Example Complete ===");
}
