use anyhow::anyhow;
use plotters::coord::combinators::BindKeyPoints;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;
use throughput_core::SeriesSet;
use tracing::{debug, warn};

const TITLE: &str = "Throughput vs. Message Size";
const X_DESC: &str = "Message Size (Bytes)";
const Y_DESC: &str = "Throughput (GB/s)";

pub(crate) const X_TICKS: [f64; 9] = [
    32.0, 128.0, 512.0, 1024.0, 4096.0, 8192.0, 32768.0, 131072.0, 524288.0,
];
pub(crate) const Y_TICKS: [f64; 8] = [0.1, 0.5, 2.0, 8.0, 16.0, 32.0, 64.0, 128.0];

// 10x6 inches at 100 dpi
const CANVAS: (u32, u32) = (1000, 600);
const AXIS_PAD: f64 = 1.5;
const MARKER_SIZE: i32 = 4;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Curve {
    pub(crate) label: String,
    pub(crate) points: Vec<(f64, f64)>,
}

/// Turn the parsed series into drawable curves, optionally sorted by size.
pub(crate) fn prepare_curves(set: &SeriesSet, sort: bool) -> Vec<Curve> {
    set.iter()
        .map(|(label, series)| {
            let series = if sort {
                series.sorted_by_size()
            } else {
                if !series.is_sorted_by_size() {
                    warn!(
                        transport = label,
                        "sizes are not ascending, the curve will zig-zag (use --sort)"
                    );
                }
                series.clone()
            };
            let points = series
                .points()
                .map(|(size, gbps)| (size as f64, gbps))
                .filter(|&(x, y)| x.is_finite() && y.is_finite() && x > 0.0 && y > 0.0)
                .collect();
            Curve {
                label: label.to_string(),
                points,
            }
        })
        .collect()
}

/// Log-space range covering both the ticks and the data, padded on each side.
pub(crate) fn axis_range(values: impl Iterator<Item = f64>, ticks: &[f64]) -> Range<f64> {
    let (lo, hi) = values
        .chain(ticks.iter().copied())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    (lo / AXIS_PAD)..(hi * AXIS_PAD)
}

pub(crate) fn format_tick(value: f64) -> String {
    format!("{value}")
}

pub(crate) fn render(set: &SeriesSet, path: &Path, sort: bool) -> anyhow::Result<()> {
    let curves = prepare_curves(set, sort);
    let is_svg = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("svg"))
        .unwrap_or(false);
    debug!(path = %path.display(), svg = is_svg, curves = curves.len(), "rendering chart");

    if is_svg {
        let root = SVGBackend::new(path, CANVAS).into_drawing_area();
        draw_chart(&root, &curves).map_err(|e| anyhow!("drawing failed: {e}"))
    } else {
        let root = BitMapBackend::new(path, CANVAS).into_drawing_area();
        draw_chart(&root, &curves).map_err(|e| anyhow!("drawing failed: {e}"))
    }
}

fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    curves: &[Curve],
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let x_range = axis_range(curves.iter().flat_map(|c| c.points.iter().map(|p| p.0)), &X_TICKS);
    let y_range = axis_range(curves.iter().flat_map(|c| c.points.iter().map(|p| p.1)), &Y_TICKS);

    let mut chart = ChartBuilder::on(root)
        .caption(TITLE, ("sans-serif", 24))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(
            x_range.log_scale().with_key_points(X_TICKS.to_vec()),
            y_range.log_scale().with_key_points(Y_TICKS.to_vec()),
        )?;

    chart
        .configure_mesh()
        .x_desc(X_DESC)
        .y_desc(Y_DESC)
        .x_label_formatter(&|v: &f64| format_tick(*v))
        .y_label_formatter(&|v: &f64| format_tick(*v))
        .draw()?;

    for (idx, curve) in curves.iter().enumerate() {
        let color = Palette99::pick(idx).mix(1.0);
        chart
            .draw_series(LineSeries::new(curve.points.iter().copied(), color.stroke_width(2)))?
            .label(curve.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        chart.draw_series(
            curve
                .points
                .iter()
                .map(|&p| Circle::new(p, MARKER_SIZE, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
