use std::time::Instant;

fn main() {
    // Relative to the crate root when run via `cargo run --example scan_file` from throughput-core/
    let path = std::env::var("BENCH_FILE")
        .unwrap_or_else(|_| "../samples/criterion_output.txt".to_string());

    let start = Instant::now();
    match throughput_core::extract_file(&path, throughput_core::DEFAULT_TRIAL_COUNT) {
        Ok(set) => {
            println!(
                "{} transports, {} points in {:?}",
                set.len(),
                set.total_points(),
                start.elapsed()
            );
            for (transport, series) in set.iter() {
                let peak = series.throughputs().iter().copied().fold(0.0_f64, f64::max);
                println!("  {:<10} {:>3} points, peak {:.3} GB/s", transport, series.len(), peak);
            }
        }
        Err(e) => println!("Error: {}", e),
    }
}
