use egg_scramble_sim::permutation::{scramble, sequence};
use egg_scramble_sim::seed;
use egg_scramble_sim::trial::run_trial;
use rand::SeedableRng;
use rand_pcg::Pcg64;

use crate::output;

pub fn run(eggs: usize, seed: Option<u64>) -> anyhow::Result<()> {
    let seed = seed::resolve(seed);
    let mut rng = Pcg64::seed_from_u64(seed);
    let permutation = scramble(eggs, &mut rng);
    let trial = run_trial(&sequence(eggs), permutation.as_slice());

    output::print_scramble(eggs, seed, &permutation, &trial);
    Ok(())
}
