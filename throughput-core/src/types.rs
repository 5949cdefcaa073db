use indexmap::IndexMap;

/// Time units criterion prints that we know how to convert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Milliseconds,
    Microseconds,
}

impl TimeUnit {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "ms" => Some(Self::Milliseconds),
            "µs" => Some(Self::Microseconds),
            _ => None,
        }
    }

    pub(crate) fn divisor(self) -> f64 {
        match self {
            Self::Milliseconds => 1_000.0,
            Self::Microseconds => 1_000_000.0,
        }
    }

    pub fn to_seconds(self, value: f64) -> f64 {
        value / self.divisor()
    }
}

/// One benchmark trial as read from a report line.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub category: String,
    pub size: u64,
    pub time_value: f64,
    pub time_unit: TimeUnit,
}

impl Measurement {
    pub fn elapsed_secs(&self) -> f64 {
        self.time_unit.to_seconds(self.time_value)
    }
}

/// Why a line that matched the report pattern contributed no data point.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SkipReason {
    #[error("unhandled time unit {0}")]
    UnhandledUnit(String),
    #[error("invalid message size {0}")]
    InvalidSize(String),
    #[error("zero elapsed time")]
    ZeroTime,
}

/// Result of scanning a single line.
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    Computed {
        measurement: Measurement,
        throughput: f64,
    },
    Skipped {
        category: String,
        reason: SkipReason,
    },
    Unmatched,
}

/// Points for one category, kept in the order they were read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    sizes: Vec<u64>,
    throughputs: Vec<f64>,
}

impl Series {
    pub(crate) fn push(&mut self, size: u64, throughput: f64) {
        self.sizes.push(size);
        self.throughputs.push(throughput);
    }

    pub fn sizes(&self) -> &[u64] {
        &self.sizes
    }

    pub fn throughputs(&self) -> &[f64] {
        &self.throughputs
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (u64, f64)> + '_ {
        self.sizes
            .iter()
            .copied()
            .zip(self.throughputs.iter().copied())
    }

    pub fn is_sorted_by_size(&self) -> bool {
        self.sizes.windows(2).all(|w| w[0] <= w[1])
    }

    /// Copy of this series ordered by size. Equal sizes keep their read order.
    pub fn sorted_by_size(&self) -> Series {
        let mut pairs: Vec<(u64, f64)> = self.points().collect();
        pairs.sort_by_key(|p| p.0);
        let (sizes, throughputs) = pairs.into_iter().unzip();
        Series { sizes, throughputs }
    }
}

/// Series keyed by category, iterated in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesSet {
    series: IndexMap<String, Series>,
}

impl SeriesSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, category: &str, size: u64, throughput: f64) {
        match self.series.get_mut(category) {
            Some(series) => series.push(size, throughput),
            None => {
                let mut series = Series::default();
                series.push(size, throughput);
                self.series.insert(category.to_string(), series);
            }
        }
    }

    pub fn get(&self, category: &str) -> Option<&Series> {
        self.series.get(category)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Series)> + '_ {
        self.series.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> + '_ {
        self.series.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn total_points(&self) -> usize {
        self.series.values().map(Series::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_unit_parses_only_known_tokens() {
        assert_eq!(TimeUnit::parse("ms"), Some(TimeUnit::Milliseconds));
        assert_eq!(TimeUnit::parse("µs"), Some(TimeUnit::Microseconds));
        assert_eq!(TimeUnit::parse("ns"), None);
        assert_eq!(TimeUnit::parse("s"), None);
        assert_eq!(TimeUnit::parse("us"), None);
    }

    #[test]
    fn time_unit_converts_to_seconds() {
        assert!((TimeUnit::Milliseconds.to_seconds(2.0) - 0.002).abs() < 1e-12);
        assert!((TimeUnit::Microseconds.to_seconds(500.0) - 0.0005).abs() < 1e-12);
    }

    #[test]
    fn record_keeps_first_seen_category_order() {
        let mut set = SeriesSet::new();
        set.record("zenoh", 32, 1.0);
        set.record("nats", 32, 2.0);
        set.record("zenoh", 128, 3.0);

        let order: Vec<&str> = set.categories().collect();
        assert_eq!(order, vec!["zenoh", "nats"]);
        assert_eq!(set.get("zenoh").unwrap().sizes(), &[32, 128]);
        assert_eq!(set.get("zenoh").unwrap().throughputs(), &[1.0, 3.0]);
        assert_eq!(set.total_points(), 3);
    }

    #[test]
    fn sorted_copy_leaves_original_untouched() {
        let mut series = Series::default();
        series.push(512, 3.0);
        series.push(32, 1.0);
        series.push(128, 2.0);
        assert!(!series.is_sorted_by_size());

        let sorted = series.sorted_by_size();
        assert!(sorted.is_sorted_by_size());
        assert_eq!(sorted.sizes(), &[32, 128, 512]);
        assert_eq!(sorted.throughputs(), &[1.0, 2.0, 3.0]);
        assert_eq!(series.sizes(), &[512, 32, 128]);
    }
}
