//! Annealing configuration and temperature schedules.

/// Temperature schedule over a fixed-length run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TemperatureSchedule {
    /// Linear decay to zero: `T_k = T_0 * (1 - (k+1) / steps)`.
    ///
    /// The classic fixed-duration demo schedule. The temperature
    /// reaches exactly zero on the final step.
    Linear,

    /// Geometric decay: `T_k = T_0 * alpha^k`.
    ///
    /// Typical `alpha`: 0.95–0.999. Never reaches zero.
    Geometric {
        /// Decay factor in (0, 1). Higher = slower cooling.
        alpha: f64,
    },
}

impl Default for TemperatureSchedule {
    fn default() -> Self {
        TemperatureSchedule::Linear
    }
}

impl TemperatureSchedule {
    /// Temperature used for the acceptance test at step `step` of a
    /// run of `steps` total steps.
    pub fn temperature(&self, initial: f64, step: usize, steps: usize) -> f64 {
        match *self {
            TemperatureSchedule::Linear => {
                if steps == 0 {
                    return 0.0;
                }
                let t = initial * (1.0 - (step + 1) as f64 / steps as f64);
                t.max(0.0)
            }
            TemperatureSchedule::Geometric { alpha } => initial * alpha.powi(step as i32),
        }
    }
}

/// Configuration for an annealing run.
///
/// # Examples
///
/// ```
/// use tsp_anneal::anneal::{AnnealConfig, TemperatureSchedule};
///
/// let config = AnnealConfig::default()
///     .with_steps(500)
///     .with_schedule(TemperatureSchedule::Geometric { alpha: 0.98 })
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealConfig {
    /// Total number of neighbor proposals. The run never stops early.
    pub steps: usize,

    /// Temperature at the start of the run.
    pub initial_temperature: f64,

    /// Temperature schedule.
    pub schedule: TemperatureSchedule,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            steps: 2000,
            initial_temperature: 1.0,
            schedule: TemperatureSchedule::default(),
            seed: None,
        }
    }
}

impl AnnealConfig {
    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_schedule(mut self, schedule: TemperatureSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.steps == 0 {
            return Err("steps must be at least 1".into());
        }
        if self.initial_temperature <= 0.0 {
            return Err("initial_temperature must be positive".into());
        }
        if let TemperatureSchedule::Geometric { alpha } = self.schedule {
            if alpha <= 0.0 || alpha >= 1.0 {
                return Err(format!("geometric alpha must be in (0, 1), got {alpha}"));
            }
        }
        Ok(())
    }
}
