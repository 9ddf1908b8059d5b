//! Annealing schedule configuration.

use crate::error::{Result, TspError};

/// Configuration of the annealing schedule.
///
/// Defaults reproduce the classic schedule: `t0 = 0.5`, geometric cooling
/// by `0.9` per level, `100 n` trials and at most `10 n` accepted moves per
/// level.
///
/// # Examples
///
/// ```
/// use u_tsp_anneal::anneal::AnnealConfig;
///
/// let config = AnnealConfig::default()
///     .with_initial_temperature(1.0)
///     .with_cooling_factor(0.95)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.max_trials(20), 2000);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealConfig {
    /// Temperature of the first level.
    pub initial_temperature: f64,

    /// Factor in (0, 1) applied to the temperature after every level.
    pub cooling_factor: f64,

    /// Candidate moves per level, per city.
    pub trials_per_city: usize,

    /// A level ends early once accepted moves exceed this many per city.
    pub successes_per_city: usize,

    /// Upper bound on levels per run. 0 = run until frozen.
    pub max_levels: usize,

    /// Recompute the running cost from scratch every this many levels.
    /// 0 = never; the cost is then purely incremental.
    pub resync_interval: usize,

    /// Random seed for reproducibility. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 0.5,
            cooling_factor: 0.9,
            trials_per_city: 100,
            successes_per_city: 10,
            max_levels: 0,
            resync_interval: 0,
            seed: None,
        }
    }
}

impl AnnealConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_factor(mut self, factor: f64) -> Self {
        self.cooling_factor = factor;
        self
    }

    pub fn with_trials_per_city(mut self, n: usize) -> Self {
        self.trials_per_city = n;
        self
    }

    pub fn with_successes_per_city(mut self, n: usize) -> Self {
        self.successes_per_city = n;
        self
    }

    pub fn with_max_levels(mut self, n: usize) -> Self {
        self.max_levels = n;
        self
    }

    pub fn with_resync_interval(mut self, levels: usize) -> Self {
        self.resync_interval = levels;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Candidate moves evaluated per level on a tour of `n` cities.
    pub fn max_trials(&self, n: usize) -> usize {
        self.trials_per_city * n
    }

    /// Accepted moves after which a level on `n` cities stops early.
    pub fn max_successes(&self, n: usize) -> usize {
        self.successes_per_city * n
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !(self.initial_temperature > 0.0 && self.initial_temperature.is_finite()) {
            return Err(TspError::invalid_config(format!(
                "initial_temperature must be positive and finite, got {}",
                self.initial_temperature
            )));
        }
        if !(self.cooling_factor > 0.0 && self.cooling_factor < 1.0) {
            return Err(TspError::invalid_config(format!(
                "cooling_factor must be in (0, 1), got {}",
                self.cooling_factor
            )));
        }
        if self.trials_per_city == 0 {
            return Err(TspError::invalid_config("trials_per_city must be positive"));
        }
        Ok(())
    }
}
