//! Basic usage example for partition-cache.
//!
//! Run with: cargo run --example basic

use std::sync::Arc;
use std::time::Duration;

use partition_cache::{ManualClock, OptionsBuilder, PartitionCache, SharedConfig};

/// Stand-in for a catalog query listing the partitions of a table.
fn query_partitions(table: &str, include_subpartitions: bool) -> Vec<String> {
    println!(
        "  -> querying catalog for {} (subpartitions: {})",
        table, include_subpartitions
    );
    let mut names = vec![format!("{}_2024", table), format!("{}_2025", table)];
    if include_subpartitions {
        names.push(format!("{}_2025_h1", table));
        names.push(format!("{}_2025_h2", table));
    }
    names
}

fn main() -> partition_cache::Result<()> {
    let options = OptionsBuilder::new().caching_ttl(300.0).build()?;
    let config = Arc::new(SharedConfig::new(options)?);
    let clock = Arc::new(ManualClock::new());

    let cache: PartitionCache<String, String, String, Vec<String>> =
        PartitionCache::with_clock(config.clone(), clock.clone());

    let orders = "orders".to_string();

    println!("First lookup:");
    let parts = cache.fetch_partitions(&orders, false, || query_partitions(&orders, false));
    println!("  partitions = {:?}", parts);

    println!("Second lookup (cached):");
    let parts = cache.fetch_partitions(&orders, false, || query_partitions(&orders, false));
    println!("  partitions = {:?}", parts);

    println!("Lookup including subpartitions (separate slot):");
    let parts = cache.fetch_partitions(&orders, true, || query_partitions(&orders, true));
    println!("  partitions = {:?}", parts);

    println!("Model lookup for a child table:");
    let model = cache.fetch_model(&orders, &"orders_2024".to_string(), || {
        println!("  -> building model for orders_2024");
        "Orders2024".to_string()
    });
    println!("  model = {}", model);

    println!("Advancing the clock past the TTL:");
    clock.advance(Duration::from_secs(301));
    let parts = cache.fetch_partitions(&orders, false, || query_partitions(&orders, false));
    println!("  partitions = {:?}", parts);

    println!("Lookup with a failing catalog:");
    let result: Result<String, String> =
        cache.try_fetch_model(&orders, &"orders_2026".to_string(), || {
            Err("relation \"orders_2026\" does not exist".to_string())
        });
    println!("  result = {:?}", result);

    println!("Disabling caching:");
    config.set_caching(false);
    cache.fetch_partitions(&orders, false, || query_partitions(&orders, false));
    config.set_caching(true);

    cache.clear();
    println!("Cache cleared, {} keys remain", cache.len());

    let stats = cache.stats();
    println!(
        "Hit rate: {:.2} ({} bypassed, {} failed)",
        stats.hit_rate(),
        stats.bypasses.load(std::sync::atomic::Ordering::Relaxed),
        stats.failures.load(std::sync::atomic::Ordering::Relaxed)
    );

    Ok(())
}
