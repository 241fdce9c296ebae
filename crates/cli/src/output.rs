use std::time::Duration;

use egg_scramble_shared::result::{AggregateResult, TrialResult};
use egg_scramble_sim::permutation::Permutation;
use egg_scramble_sim::theory::{
    exact_derangement_probability, expected_fixed_points, standard_error,
};

pub fn print_row(result: &AggregateResult) {
    println!(
        "Eggs: {:4} | Avg same location: {:.4} | Derangement prob: {:.6} (±{:.6})",
        result.box_size,
        result.mean_fixed_points,
        result.derangement_probability,
        standard_error(result.derangement_probability, result.num_trials),
    );
}

pub fn print_summary(
    results: &[AggregateResult],
    seed: u64,
    path: &str,
    rows_written: usize,
    elapsed: Duration,
) {
    let trials: u64 = results.iter().map(|r| r.num_trials).sum();
    println!("\n========================================");
    println!("  Box sizes:   {}", results.len());
    println!("  Trials:      {}", trials);
    println!("  Seed:        {}", seed);
    println!("  Time:        {:.2}s", elapsed.as_secs_f64());
    println!("  Output:      {} ({} rows)", path, rows_written);
    println!("========================================");
}

pub fn print_scramble(eggs: usize, seed: u64, permutation: &Permutation, trial: &TrialResult) {
    println!("Box of {} eggs (seed {})", eggs, seed);
    println!("  Scrambled:      {}", permutation);
    println!("  Same location:  {}", trial.fixed_point_count);
    println!("  Derangement:    {}", trial.is_derangement());
}

pub fn print_report(results: &[AggregateResult]) {
    println!(
        "{:>6}  {:>10}  {:>10}  {:>10}  {:>10}  {:>10}",
        "Eggs", "Avg same", "Prob", "Exact", "Prob dev", "Mean dev"
    );
    for result in results {
        let exact = exact_derangement_probability(result.box_size);
        println!(
            "{:>6}  {:>10.6}  {:>10.6}  {:>10.6}  {:>+10.6}  {:>+10.6}",
            result.box_size,
            result.mean_fixed_points,
            result.derangement_probability,
            exact,
            result.derangement_probability - exact,
            result.mean_fixed_points - expected_fixed_points(result.box_size),
        );
    }
}
