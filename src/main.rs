use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use env_logger::Env;
use lloyd::{
    initial_centroids, kmeans, load_tsv, EmptyClusterPolicy, InitStrategy, KmeansConfig,
    OutputFormat, Report,
};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum InitArg {
    First,
    Spaced,
    Random,
}

/// Cluster the rows of a whitespace-separated data file with k-means
#[derive(Debug, Parser)]
#[command(name = "lloyd", version, about)]
struct Cli {
    /// Data file; the first line is a header
    data: PathBuf,

    /// Number of leading columns to read from each row
    columns: usize,

    /// Number of clusters
    k: usize,

    /// Iteration cap
    #[arg(long, default_value_t = lloyd::clusterer::DEFAULT_MAX_ITERATIONS)]
    max_iterations: usize,

    /// Largest coordinate change still treated as converged
    #[arg(long, default_value_t = 0.0)]
    tolerance: f64,

    /// What to do with a centroid that receives no points
    #[arg(long, value_enum, default_value_t = EmptyClusterPolicy::Keep)]
    empty_cluster: EmptyClusterPolicy,

    /// How to choose the starting centroids
    #[arg(long, value_enum, default_value = "first")]
    init: InitArg,

    /// Seed for `--init random`
    #[arg(long, default_value_t = 42)]
    seed: u64,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write results here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::init_from_env(Env::default().filter_or("RUST_LOG", level));

    let data = load_tsv(&cli.data, cli.columns)
        .with_context(|| format!("Error reading data from {}", cli.data.display()))?;
    log::info!("loaded {} points from {}", data.len(), cli.data.display());

    let strategy = match cli.init {
        InitArg::First => InitStrategy::First,
        InitArg::Spaced => InitStrategy::Spaced,
        InitArg::Random => InitStrategy::Random { seed: cli.seed },
    };

    let centroids = initial_centroids(&data, cli.k, strategy)
        .context("Failed to choose initial centroids")?;
    if centroids.is_empty() {
        bail!("No initial centroids were selected");
    }

    let config = KmeansConfig::new()
        .max_iterations(cli.max_iterations)
        .tolerance(cli.tolerance)
        .empty_cluster(cli.empty_cluster);

    let result = kmeans(&data, centroids, cli.columns, &config).context("Clustering failed")?;
    log::info!(
        "{} clusters after {} iterations ({:?})",
        result.centroids.len(),
        result.iterations,
        result.termination
    );

    let report = Report::new(&data, &result, cli.columns, config, strategy)?
        .with_source(cli.data.display().to_string());

    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            let mut out = BufWriter::new(file);
            report.write(&mut out, cli.format)?;
            out.flush().context("Failed to flush output file")?;
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            report.write(&mut out, cli.format)?;
        }
    }

    Ok(())
}
