#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialResult {
    pub fixed_point_count: usize,
}

impl TrialResult {
    #[inline]
    pub fn is_derangement(&self) -> bool {
        self.fixed_point_count == 0
    }
}

/// Statistics for one box size. `num_trials` and the raw totals are not
/// stored in the results file and read back as zero.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateResult {
    pub box_size: usize,
    pub num_trials: u64,
    pub total_fixed_points: u64,
    pub derangement_count: u64,
    pub mean_fixed_points: f64,
    pub derangement_probability: f64,
}

impl AggregateResult {
    /// Derives the mean and probability from raw totals. `num_trials` must be positive.
    pub fn from_totals(
        box_size: usize,
        num_trials: u64,
        total_fixed_points: u64,
        derangement_count: u64,
    ) -> Self {
        let n = num_trials as f64;
        Self {
            box_size,
            num_trials,
            total_fixed_points,
            derangement_count,
            mean_fixed_points: total_fixed_points as f64 / n,
            derangement_probability: derangement_count as f64 / n,
        }
    }
}

pub type ResultSet = Vec<AggregateResult>;
