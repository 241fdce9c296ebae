use anyhow::Context;
use egg_scramble_shared::config::{SweepConfig, SMALL_NUM_TRIALS};
use egg_scramble_sim::writer::{ResultWriter, WriteMode};
use egg_scramble_sim::{runner, seed};
use tracing::info;

use crate::output;

fn build_sweeps(sizes: Vec<usize>, trials: Option<u64>, seed: u64) -> Vec<SweepConfig> {
    let sweeps = if sizes.is_empty() {
        SweepConfig::default_sweeps()
            .into_iter()
            .map(|sweep| match trials {
                Some(num_trials) => SweepConfig { num_trials, ..sweep },
                None => sweep,
            })
            .collect()
    } else {
        vec![SweepConfig::new(sizes, trials.unwrap_or(SMALL_NUM_TRIALS))]
    };
    sweeps
        .into_iter()
        .map(|sweep| sweep.with_seed(Some(seed)))
        .collect()
}

pub fn run(
    sizes: Vec<usize>,
    trials: Option<u64>,
    seed: Option<u64>,
    workers: usize,
    output_path: &str,
    append: bool,
) -> anyhow::Result<()> {
    let seed = seed::resolve(seed);
    let sweeps = build_sweeps(sizes, trials, seed);
    for sweep in &sweeps {
        sweep.validate()?;
    }
    let n_workers = if workers == 0 { None } else { Some(workers) };
    info!(seed, sweeps = sweeps.len(), output = output_path, append, "starting run");

    let start = std::time::Instant::now();
    let mut all = Vec::new();
    let mut rows_written = 0;
    for (i, sweep) in sweeps.iter().enumerate() {
        println!(
            "Running {} trials per box over {} box sizes...",
            sweep.num_trials,
            sweep.box_sizes.len(),
        );
        let results = runner::run_sweep(sweep, n_workers, output::print_row)?;

        // Later sweeps always land after the earlier ones.
        let mode = if i == 0 && !append {
            WriteMode::Truncate
        } else {
            WriteMode::Append
        };
        let mut writer = ResultWriter::open(output_path, mode)
            .with_context(|| format!("Failed to open results file {}", output_path))?;
        writer
            .write_results(&results)
            .with_context(|| format!("Failed to write results file {}", output_path))?;
        rows_written += writer.rows_written();
        all.extend(results);
    }

    output::print_summary(&all, seed, output_path, rows_written, start.elapsed());
    Ok(())
}
