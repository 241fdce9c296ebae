use crate::error::SimError;

// Baseline sweep parameters
pub const SMALL_BOX_SIZES: [usize; 11] = [2, 3, 4, 5, 8, 10, 12, 15, 20, 30, 50];
pub const SMALL_NUM_TRIALS: u64 = 100_000;
pub const LARGE_BOX_SIZES: [usize; 4] = [100, 200, 500, 1000];
pub const LARGE_NUM_TRIALS: u64 = 10_000;

pub const DEFAULT_OUTPUT: &str = "results.csv";
pub const CSV_HEADER: &str = "Num_Eggs,Avg_Same_Loc,Prob_Derangement";
pub const CSV_PRECISION: usize = 6;

/// Trials sharing one derived RNG. Fixed so results do not depend on worker count.
pub const TRIALS_PER_CHUNK: u64 = 4096;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepConfig {
    pub box_sizes: Vec<usize>,
    pub num_trials: u64,
    pub seed: Option<u64>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self::small()
    }
}

impl SweepConfig {
    pub fn new(box_sizes: Vec<usize>, num_trials: u64) -> Self {
        Self {
            box_sizes,
            num_trials,
            seed: None,
        }
    }

    /// Many trials over small boxes.
    pub fn small() -> Self {
        Self::new(SMALL_BOX_SIZES.to_vec(), SMALL_NUM_TRIALS)
    }

    /// Fewer trials over large boxes.
    pub fn large() -> Self {
        Self::new(LARGE_BOX_SIZES.to_vec(), LARGE_NUM_TRIALS)
    }

    pub fn default_sweeps() -> Vec<SweepConfig> {
        vec![Self::small(), Self::large()]
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn validate(&self) -> Result<(), SimError> {
        if self.box_sizes.is_empty() {
            return Err(SimError::InvalidConfiguration(
                "sweep has no box sizes".to_string(),
            ));
        }
        for &box_size in &self.box_sizes {
            validate_run(box_size, self.num_trials)?;
        }
        Ok(())
    }
}

/// Rejects a box size or trial count of zero.
pub fn validate_run(box_size: usize, num_trials: u64) -> Result<(), SimError> {
    if box_size == 0 {
        return Err(SimError::InvalidConfiguration(
            "box_size must be positive".to_string(),
        ));
    }
    if num_trials == 0 {
        return Err(SimError::InvalidConfiguration(
            "num_trials must be positive".to_string(),
        ));
    }
    Ok(())
}
