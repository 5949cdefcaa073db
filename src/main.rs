use anyhow::Context;
use clap::{ArgAction, Parser};
use std::path::{Path, PathBuf}; // for argv paths
use throughput_core::DEFAULT_TRIAL_COUNT;
use tracing::{info, warn};
use tracing_subscriber::filter::LevelFilter;

mod render;
mod table;
mod viewer;

const DEFAULT_INPUT: &str = "criterion_output.txt";

/// Plot throughput against message size from criterion console output.
#[derive(Debug, Parser)]
#[command(name = "throughput-graph", version, about)]
struct Cli {
    /// Criterion output captured from `cargo bench`
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Messages sent per measurement (must match the benchmark)
    #[arg(short = 'n', long, default_value_t = DEFAULT_TRIAL_COUNT,
          value_parser = clap::value_parser!(u64).range(1..))]
    trials: u64,

    /// Also keep the chart at this path; a .svg extension selects the SVG backend
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Do not open a viewer for the chart
    #[arg(long)]
    no_show: bool,

    /// Skip the chart entirely
    #[arg(long)]
    no_chart: bool,

    /// Sort every series by message size before plotting
    #[arg(long)]
    sort: bool,

    /// Print the parsed points and a per-transport summary
    #[arg(long)]
    table: bool,

    /// More logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::ERROR;
        }
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

fn init_logging(level: LevelFilter) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_max_level(level)
        .init();
}

/// Where to draw the chart: the user's `--output`, or a fresh file in the
/// system temp directory that outlives the run so the viewer can read it.
fn chart_path(output: Option<&Path>) -> anyhow::Result<PathBuf> {
    if let Some(path) = output {
        return Ok(path.to_path_buf());
    }
    let path = tempfile::Builder::new()
        .prefix("throughput-graph-")
        .suffix(".png")
        .tempfile()
        .context("unable to create a temporary chart file")?
        .into_temp_path()
        .keep()
        .context("unable to keep the temporary chart file")?;
    Ok(path)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level());

    let set = throughput_core::extract_file(&cli.input, cli.trials)
        .with_context(|| format!("unable to read data from {}", cli.input.display()))?;

    if set.is_empty() {
        println!("No valid data found in the benchmark output.");
        return Ok(());
    }
    info!(
        transports = set.len(),
        points = set.total_points(),
        "parsed benchmark output"
    );

    if cli.table {
        table::print_tables(&set).context("failed to build summary table")?;
    }

    if cli.no_chart {
        return Ok(());
    }

    let chart = chart_path(cli.output.as_deref())?;
    render::render(&set, &chart, cli.sort)
        .with_context(|| format!("failed to render {}", chart.display()))?;
    println!("Wrote {}", chart.display());

    if !cli.no_show {
        if let Err(e) = viewer::open(&chart) {
            warn!(error = %e, "could not open a viewer for the chart");
        }
    }

    Ok(())
}
