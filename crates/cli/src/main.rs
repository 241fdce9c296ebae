mod commands;
mod output;

use clap::{Parser, Subcommand};
use egg_scramble_shared::config::DEFAULT_OUTPUT;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "egg-scramble", about = "Egg scramble derangement simulator")]
struct Cli {
    /// Debug logging (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run box-size sweeps and write the results file
    Run {
        /// Comma-separated box sizes (replaces the default small and large sweeps)
        #[arg(long, value_delimiter = ',')]
        sizes: Vec<usize>,
        /// Trials per box size (defaults to each sweep's own count)
        #[arg(long)]
        trials: Option<u64>,
        /// Master seed; a random one is drawn and printed when omitted
        #[arg(long)]
        seed: Option<u64>,
        /// Number of parallel workers (0 = auto)
        #[arg(long, default_value = "0")]
        workers: usize,
        /// Results file
        #[arg(long, default_value = DEFAULT_OUTPUT)]
        output: String,
        /// Keep existing rows in the results file instead of starting fresh
        #[arg(long)]
        append: bool,
    },
    /// Scramble one box and show where the eggs landed
    Scramble {
        /// Number of eggs in the box
        eggs: usize,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Compare a results file with the exact derangement probabilities
    Report {
        /// Results file to read
        #[arg(default_value = DEFAULT_OUTPUT)]
        file: String,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Run {
            sizes,
            trials,
            seed,
            workers,
            output,
            append,
        } => commands::run::run(sizes, trials, seed, workers, &output, append),
        Commands::Scramble { eggs, seed } => commands::scramble::run(eggs, seed),
        Commands::Report { file } => commands::report::run(&file),
    }
}
