use once_cell::sync::OnceCell;
use regex::Regex;

use crate::metrics::measurement_throughput;
use crate::types::{LineOutcome, Measurement, SkipReason, TimeUnit};

// The unit group takes any token so unknown units can be reported instead of
// silently falling through as non-matching lines.
fn re_measurement() -> &'static Regex {
    static RE: OnceCell<Regex> = OnceCell::new();
    RE.get_or_init(|| {
        Regex::new(r"(?P<label>\w+)/(?P<size>\d+)\s+time:\s+\[(?P<time>\d+\.\d+)\s+(?P<unit>[^\s\]]+)")
            .expect("valid regex")
    })
}

pub fn classify_line(line: &str, trial_count: u64) -> LineOutcome {
    let Some(caps) = re_measurement().captures(line) else {
        return LineOutcome::Unmatched;
    };

    let category = caps.name("label").map(|m| m.as_str()).unwrap_or("");
    let size_text = caps.name("size").map(|m| m.as_str()).unwrap_or("");
    let time_text = caps.name("time").map(|m| m.as_str()).unwrap_or("");
    let unit_text = caps.name("unit").map(|m| m.as_str()).unwrap_or("");

    let skipped = |reason| LineOutcome::Skipped {
        category: category.to_string(),
        reason,
    };

    let Some(time_unit) = TimeUnit::parse(unit_text) else {
        return skipped(SkipReason::UnhandledUnit(unit_text.to_string()));
    };

    let size = match size_text.parse::<u64>() {
        Ok(size) if size > 0 => size,
        _ => return skipped(SkipReason::InvalidSize(size_text.to_string())),
    };

    let time_value = match time_text.parse::<f64>() {
        Ok(t) if t > 0.0 => t,
        _ => return skipped(SkipReason::ZeroTime),
    };

    let measurement = Measurement {
        category: category.to_string(),
        size,
        time_value,
        time_unit,
    };
    let throughput = measurement_throughput(&measurement, trial_count);
    LineOutcome::Computed {
        measurement,
        throughput,
    }
}
