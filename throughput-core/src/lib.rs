//! Extraction of per-transport throughput series from criterion console output.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, warn};

mod error;
mod metrics;
mod parsing;
mod types;

pub use error::ExtractError;
pub use metrics::{throughput_gbps, DEFAULT_TRIAL_COUNT};
pub use parsing::classify_line;
pub use types::{LineOutcome, Measurement, Series, SeriesSet, SkipReason, TimeUnit};

#[derive(Debug, Default)]
struct ScanStats {
    matched: usize,
    skipped: usize,
    ignored: usize,
}

impl ScanStats {
    fn apply(&mut self, set: &mut SeriesSet, line_no: usize, outcome: LineOutcome) {
        match outcome {
            LineOutcome::Computed {
                measurement,
                throughput,
            } => {
                self.matched += 1;
                set.record(&measurement.category, measurement.size, throughput);
            }
            LineOutcome::Skipped { category, reason } => {
                self.skipped += 1;
                warn!(line = line_no, category = %category, "{reason}");
            }
            LineOutcome::Unmatched => self.ignored += 1,
        }
    }

    fn log(&self) {
        debug!(
            matched = self.matched,
            skipped = self.skipped,
            ignored = self.ignored,
            "scan complete"
        );
    }
}

/// Scan `reader` to the end and group every usable measurement by category.
pub fn extract<R: BufRead>(reader: R, trial_count: u64) -> Result<SeriesSet, ExtractError> {
    let mut set = SeriesSet::new();
    let mut stats = ScanStats::default();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|source| ExtractError::Read {
            line: line_no,
            source,
        })?;
        stats.apply(&mut set, line_no, classify_line(&line, trial_count));
    }

    stats.log();
    Ok(set)
}

pub fn extract_str(raw: &str, trial_count: u64) -> SeriesSet {
    let mut set = SeriesSet::new();
    let mut stats = ScanStats::default();
    for (idx, line) in raw.lines().enumerate() {
        stats.apply(&mut set, idx + 1, classify_line(line, trial_count));
    }
    stats.log();
    set
}

/// Open `path` and extract from it. The file is closed before this returns.
pub fn extract_file(path: impl AsRef<Path>, trial_count: u64) -> Result<SeriesSet, ExtractError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ExtractError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "reading benchmark output");
    extract(BufReader::new(file), trial_count)
}
