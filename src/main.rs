use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{info, Level};

use pixelgen::{
    evolution::{AcceptancePolicy, EvolutionOptions, LogLevel, Population},
    io::{load_target, SnapshotWriter},
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Acceptance {
    /// Compare the fittest genome of each generation
    Best,
    /// Compare the mean loss of the parent pool
    Mean,
}

impl From<Acceptance> for AcceptancePolicy {
    fn from(value: Acceptance) -> Self {
        match value {
            Acceptance::Best => AcceptancePolicy::BestOfGeneration,
            Acceptance::Mean => AcceptancePolicy::MeanOfParentPool,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Png,
    Bmp,
}

impl Format {
    fn extension(self) -> &'static str {
        match self {
            Format::Png => "png",
            Format::Bmp => "bmp",
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Evolve a pixel grid toward a target image", long_about = None)]
struct Args {
    /// Target image to approximate
    input: PathBuf,

    /// Number of fittest genomes mated each generation; each generation holds parents² genomes
    #[arg(short = 'k', long, default_value_t = 16)]
    parents: usize,

    /// Number of generations to run
    #[arg(short, long, default_value_t = 100_000)]
    generations: usize,

    /// Probability that any pixel of a child is replaced by a random color
    #[arg(short, long, default_value_t = 0.01)]
    mutation_rate: f64,

    /// Statistic compared when deciding whether offspring replace the current generation
    #[arg(short, long, value_enum, default_value_t = Acceptance::Best)]
    acceptance: Acceptance,

    /// Directory receiving snapshots and the final result
    #[arg(short, long, default_value = "results")]
    output_dir: PathBuf,

    /// Generations between snapshots and progress lines
    #[arg(short, long, default_value_t = 1000)]
    snapshot_every: usize,

    /// Image format of the written files
    #[arg(short, long, value_enum, default_value_t = Format::Png)]
    format: Format,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Worker threads, 0 for one per hardware thread
    #[arg(short, long, default_value_t = 0)]
    threads: usize,

    /// Log every generation's decision
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .with_target(false)
        .init();

    let mut builder = EvolutionOptions::builder()
        .parent_pool_size(args.parents)
        .num_generations(args.generations)
        .mutation_rate(args.mutation_rate)
        .acceptance(args.acceptance.into())
        .num_threads(args.threads)
        .report_interval(args.snapshot_every)
        .log_level(if args.verbose {
            LogLevel::Verbose
        } else {
            LogLevel::Minimal
        });
    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }
    let options = builder.build();
    options.validate()?;

    // Snapshots follow the progress cadence.
    let mut snapshots = SnapshotWriter::new(
        &args.output_dir,
        options.get_report_interval(),
        args.format.extension(),
    )?;

    let target = load_target(&args.input)
        .with_context(|| format!("Failed to load target image {}", args.input.display()))?;
    info!(
        input = %args.input.display(),
        width = target.width(),
        height = target.height(),
        "Target loaded"
    );

    let mut population = Population::new(Arc::new(target), options)?;
    let best = population.evolve(&mut snapshots)?;

    let result = snapshots
        .write("result", &best)
        .context("Failed to write final result")?;
    info!(
        path = %result.display(),
        loss = best.fitness(),
        snapshots = snapshots.written(),
        "Done"
    );

    Ok(())
}
