use polars::prelude::*; // for the summary tables
use throughput_core::SeriesSet;

/// One row per parsed point, grouped by transport.
pub(crate) fn points_frame(set: &SeriesSet) -> PolarsResult<DataFrame> {
    let mut transports: Vec<String> = Vec::with_capacity(set.total_points());
    let mut sizes: Vec<u64> = Vec::with_capacity(set.total_points());
    let mut throughputs: Vec<f64> = Vec::with_capacity(set.total_points());

    for (transport, series) in set.iter() {
        for (size, gbps) in series.points() {
            transports.push(transport.to_string());
            sizes.push(size);
            throughputs.push(gbps);
        }
    }

    df!(
        "transport" => transports,
        "size" => sizes,
        "throughput_gbps" => throughputs
    )
}

/// Point count and peak throughput per transport, in first-seen order.
/// Printed only; these two columns are the whole summary.
pub(crate) fn summary_frame(points: &DataFrame) -> PolarsResult<DataFrame> {
    points
        .clone()
        .lazy()
        .group_by_stable([col("transport")])
        .agg([
            col("size").count().alias("points"),
            col("throughput_gbps").max().alias("peak_gbps"),
        ])
        .collect()
}

pub(crate) fn print_tables(set: &SeriesSet) -> PolarsResult<()> {
    let points = points_frame(set)?;
    let summary = summary_frame(&points)?;
    println!("{points}");
    println!("{summary}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use throughput_core::extract_str;

    fn sample() -> SeriesSet {
        extract_str(
            "zenoh/32 time: [1.000 ms]\n\
             nats/32 time: [2.000 ms]\n\
             zenoh/1024 time: [2.000 ms]\n",
            1000,
        )
    }

    #[test]
    fn one_row_per_point() {
        let df = points_frame(&sample()).unwrap();
        assert_eq!(df.height(), 3);
        assert_eq!(df.width(), 3);
        let sizes = df.column("size").unwrap().u64().unwrap();
        assert_eq!(sizes.get(0), Some(32));
        assert_eq!(sizes.get(1), Some(1024));
        assert_eq!(sizes.get(2), Some(32));
    }

    #[test]
    fn summary_keeps_transport_order_and_peak() {
        let points = points_frame(&sample()).unwrap();
        let summary = summary_frame(&points).unwrap();
        assert_eq!(summary.height(), 2);

        let transports = summary.column("transport").unwrap().str().unwrap();
        assert_eq!(transports.get(0), Some("zenoh"));
        assert_eq!(transports.get(1), Some("nats"));

        let peaks = summary.column("peak_gbps").unwrap().f64().unwrap();
        assert!((peaks.get(0).unwrap() - 0.512).abs() < 1e-9);
        assert!((peaks.get(1).unwrap() - 0.016).abs() < 1e-9);
    }

    #[test]
    fn summary_is_count_and_peak_only() {
        let points = points_frame(&sample()).unwrap();
        let summary = summary_frame(&points).unwrap();
        assert_eq!(summary.width(), 3);
        assert!(summary.column("points").is_ok());
        assert!(summary.column("peak_gbps").is_ok());
    }
}
