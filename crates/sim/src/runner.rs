use rand::SeedableRng;
use rand_pcg::Pcg64;
use rayon::prelude::*;
use tracing::debug;

use egg_scramble_shared::config::{validate_run, SweepConfig, TRIALS_PER_CHUNK};
use egg_scramble_shared::result::{AggregateResult, ResultSet};
use egg_scramble_shared::SimError;

use crate::permutation::Scrambler;
use crate::seed;
use crate::trial::run_trial;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Totals {
    fixed_points: u64,
    derangements: u64,
}

impl Totals {
    fn merge(self, other: Totals) -> Totals {
        Totals {
            fixed_points: self.fixed_points + other.fixed_points,
            derangements: self.derangements + other.derangements,
        }
    }
}

fn build_pool(n_workers: Option<usize>) -> Result<rayon::ThreadPool, SimError> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(n_workers.unwrap_or_else(|| rayon::current_num_threads().min(8)))
        .build()?;
    Ok(pool)
}

fn run_chunk(box_size: usize, trials: u64, chunk_seed: u64) -> Totals {
    let mut rng = Pcg64::seed_from_u64(chunk_seed);
    let mut scrambler = Scrambler::new(box_size);
    let sequence = scrambler.sequence().to_vec();
    let mut totals = Totals::default();

    for _ in 0..trials {
        let trial = run_trial(&sequence, scrambler.draw(&mut rng));
        totals.fixed_points += trial.fixed_point_count as u64;
        if trial.is_derangement() {
            totals.derangements += 1;
        }
    }
    totals
}

fn run_box_size_in(
    pool: &rayon::ThreadPool,
    box_size: usize,
    num_trials: u64,
    seed: u64,
) -> AggregateResult {
    let n_chunks = num_trials.div_ceil(TRIALS_PER_CHUNK);
    debug!(box_size, num_trials, n_chunks, seed, "scrambling");

    let totals = pool.install(|| {
        (0..n_chunks)
            .into_par_iter()
            .map(|chunk| {
                let start = chunk * TRIALS_PER_CHUNK;
                let trials = TRIALS_PER_CHUNK.min(num_trials - start);
                run_chunk(box_size, trials, seed::chunk_seed(seed, box_size, chunk))
            })
            .reduce(Totals::default, Totals::merge)
    });

    let result = AggregateResult::from_totals(
        box_size,
        num_trials,
        totals.fixed_points,
        totals.derangements,
    );
    debug!(
        box_size,
        mean_fixed_points = result.mean_fixed_points,
        derangement_probability = result.derangement_probability,
        "box size complete"
    );
    result
}

/// Runs `num_trials` scrambles of a box of `box_size` eggs.
///
/// With a seed the result is reproducible regardless of `n_workers`.
pub fn run_box_size(
    box_size: usize,
    num_trials: u64,
    seed: Option<u64>,
    n_workers: Option<usize>,
) -> Result<AggregateResult, SimError> {
    validate_run(box_size, num_trials)?;
    let pool = build_pool(n_workers)?;
    let seed = seed::resolve(seed);
    Ok(run_box_size_in(&pool, box_size, num_trials, seed))
}

/// Runs every box size of a sweep in order, calling `on_result` as each completes.
/// The whole sweep is validated before the first trial.
pub fn run_sweep<F>(
    config: &SweepConfig,
    n_workers: Option<usize>,
    mut on_result: F,
) -> Result<ResultSet, SimError>
where
    F: FnMut(&AggregateResult),
{
    config.validate()?;
    let pool = build_pool(n_workers)?;
    let seed = seed::resolve(config.seed);

    let mut results = Vec::with_capacity(config.box_sizes.len());
    for &box_size in &config.box_sizes {
        let result = run_box_size_in(&pool, box_size, config.num_trials, seed);
        on_result(&result);
        results.push(result);
    }
    Ok(results)
}
