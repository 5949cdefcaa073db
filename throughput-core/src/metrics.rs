use crate::types::Measurement;

/// Messages sent per benchmark iteration. Has to match the benchmark setup or
/// every throughput is off by the same factor.
pub const DEFAULT_TRIAL_COUNT: u64 = 1000;

const BYTES_PER_GIGABYTE: f64 = 1_000_000_000.0;

/// Gigabytes per second moved by `trial_count` messages of `size` bytes in
/// `elapsed_secs`.
pub fn throughput_gbps(size: u64, elapsed_secs: f64, trial_count: u64) -> f64 {
    let total_bytes = size as f64 * trial_count as f64;
    let gigabytes = total_bytes / BYTES_PER_GIGABYTE;
    gigabytes / elapsed_secs
}

pub(crate) fn measurement_throughput(m: &Measurement, trial_count: u64) -> f64 {
    throughput_gbps(m.size, m.elapsed_secs(), trial_count)
}
