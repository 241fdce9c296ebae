use egg_scramble_shared::result::TrialResult;

/// Counts eggs that landed back in their original slot.
#[inline]
pub fn count_fixed_points(sequence: &[usize], permutation: &[usize]) -> usize {
    sequence
        .iter()
        .zip(permutation)
        .filter(|(orig, new)| orig == new)
        .count()
}

#[inline]
pub fn run_trial(sequence: &[usize], permutation: &[usize]) -> TrialResult {
    TrialResult {
        fixed_point_count: count_fixed_points(sequence, permutation),
    }
}
