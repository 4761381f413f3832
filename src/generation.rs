//! Synthetic process data.
//!
//! Produces `(burst_durations, priorities)` pairs and feeds them through
//! [`ProcessSet::new`], so generated data passes the same validation as
//! caller-supplied data. The random source is always injected; nothing in
//! the crate reads a global RNG.
//!
//! | Mode | Bursts | Priorities |
//! |------|--------|------------|
//! | `Random` | uniform in `1..=50` | permutation of `1..=N` |
//! | `Range` | uniform in `burst_min..=burst_max` | permutation of `1..=N` |
//!
//! Manual entry needs no generator: build the set with `ProcessSet::new`.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::GeneratorError;
use crate::models::ProcessSet;

/// Lowest burst drawn in `Random` mode.
pub const DEFAULT_BURST_MIN: i64 = 1;
/// Highest burst drawn in `Random` mode.
pub const DEFAULT_BURST_MAX: i64 = 50;

/// How burst durations are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DataMode {
    /// Bursts in `DEFAULT_BURST_MIN..=DEFAULT_BURST_MAX`.
    #[default]
    Random,
    /// Bursts in a caller-chosen inclusive range.
    Range {
        /// Inclusive lower bound (must be > 0).
        burst_min: i64,
        /// Inclusive upper bound.
        burst_max: i64,
    },
}

/// Generator settings.
///
/// # Example
/// ```
/// use awt_schedule::generation::{generate, DataMode, GeneratorConfig};
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
///
/// let config = GeneratorConfig::new(4).with_mode(DataMode::Range { burst_min: 3, burst_max: 9 });
/// let mut rng = SmallRng::seed_from_u64(7);
/// let set = generate(&config, &mut rng).unwrap();
/// assert_eq!(set.len(), 4);
/// assert!(set.has_unique_priorities());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Number of processes (N ≥ 1).
    pub num_processes: usize,
    /// Burst drawing mode.
    pub mode: DataMode,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_processes: 5,
            mode: DataMode::Random,
        }
    }
}

impl GeneratorConfig {
    /// Creates a `Random`-mode config for `num_processes` processes.
    pub fn new(num_processes: usize) -> Self {
        Self {
            num_processes,
            ..Default::default()
        }
    }

    /// Sets the process count.
    pub fn with_num_processes(mut self, num_processes: usize) -> Self {
        self.num_processes = num_processes;
        self
    }

    /// Sets the burst drawing mode.
    pub fn with_mode(mut self, mode: DataMode) -> Self {
        self.mode = mode;
        self
    }

    /// Inclusive burst range for the configured mode.
    pub fn burst_range(&self) -> (i64, i64) {
        match self.mode {
            DataMode::Random => (DEFAULT_BURST_MIN, DEFAULT_BURST_MAX),
            DataMode::Range {
                burst_min,
                burst_max,
            } => (burst_min, burst_max),
        }
    }

    /// Checks the settings without drawing anything.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if self.num_processes == 0 {
            return Err(GeneratorError::InvalidConfig(
                "num_processes must be greater than 0".into(),
            ));
        }
        if i32::try_from(self.num_processes).is_err() {
            return Err(GeneratorError::InvalidConfig(format!(
                "num_processes {} exceeds the priority range",
                self.num_processes
            )));
        }

        let (min, max) = self.burst_range();
        if min <= 0 {
            return Err(GeneratorError::InvalidConfig(format!(
                "burst_min must be positive, got {min}"
            )));
        }
        if min > max {
            return Err(GeneratorError::InvalidConfig(format!(
                "burst_min {min} is greater than burst_max {max}"
            )));
        }
        Ok(())
    }
}

/// Draws a process set according to `config`.
///
/// Priorities are a random permutation of `1..=N`, so they are always unique.
///
/// # Errors
/// `GeneratorError::InvalidConfig` for a zero process count or a bad burst range.
pub fn generate<R: Rng>(
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<ProcessSet, GeneratorError> {
    config.validate()?;

    let n = config.num_processes;
    let (min, max) = config.burst_range();

    let burst_durations: Vec<i64> = (0..n).map(|_| rng.random_range(min..=max)).collect();
    // n fits in i32 after validate()
    let mut priorities: Vec<i32> = (1..=n as i32).collect();
    priorities.shuffle(rng);

    debug!(
        processes = n,
        burst_min = min,
        burst_max = max,
        "synthetic process data generated"
    );

    Ok(ProcessSet::new(&burst_durations, &priorities)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_mode() {
        let mut rng = SmallRng::seed_from_u64(42);
        let set = generate(&GeneratorConfig::new(20), &mut rng).unwrap();

        assert_eq!(set.len(), 20);
        assert!(set
            .iter()
            .all(|p| (DEFAULT_BURST_MIN..=DEFAULT_BURST_MAX).contains(&p.burst_duration)));

        let mut prios = set.priorities();
        prios.sort_unstable();
        assert_eq!(prios, (1..=20).collect::<Vec<i32>>());
    }

    #[test]
    fn test_range_mode_respects_bounds() {
        let config = GeneratorConfig::new(50).with_mode(DataMode::Range {
            burst_min: 10,
            burst_max: 12,
        });
        let mut rng = SmallRng::seed_from_u64(1);
        let set = generate(&config, &mut rng).unwrap();
        assert!(set.iter().all(|p| (10..=12).contains(&p.burst_duration)));
        assert!(set.has_unique_priorities());
    }

    #[test]
    fn test_degenerate_range() {
        let config = GeneratorConfig::new(3).with_mode(DataMode::Range {
            burst_min: 7,
            burst_max: 7,
        });
        let mut rng = SmallRng::seed_from_u64(3);
        let set = generate(&config, &mut rng).unwrap();
        assert_eq!(set.burst_durations(), vec![7, 7, 7]);
    }

    #[test]
    fn test_same_seed_same_data() {
        let config = GeneratorConfig::new(8);
        let a = generate(&config, &mut SmallRng::seed_from_u64(99)).unwrap();
        let b = generate(&config, &mut SmallRng::seed_from_u64(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_processes_rejected() {
        let mut rng = SmallRng::seed_from_u64(0);
        let err = generate(&GeneratorConfig::new(0), &mut rng).unwrap_err();
        assert!(matches!(err, GeneratorError::InvalidConfig(_)));
    }

    #[test]
    fn test_bad_ranges_rejected() {
        let inverted = GeneratorConfig::new(3).with_mode(DataMode::Range {
            burst_min: 9,
            burst_max: 2,
        });
        assert!(matches!(
            inverted.validate(),
            Err(GeneratorError::InvalidConfig(msg)) if msg.contains("greater than")
        ));

        let zero_min = GeneratorConfig::new(3).with_mode(DataMode::Range {
            burst_min: 0,
            burst_max: 5,
        });
        assert!(matches!(
            zero_min.validate(),
            Err(GeneratorError::InvalidConfig(msg)) if msg.contains("positive")
        ));
    }

    #[test]
    fn test_config_defaults_and_builder() {
        let config = GeneratorConfig::default();
        assert_eq!(config.num_processes, 5);
        assert_eq!(config.mode, DataMode::Random);
        assert_eq!(config.burst_range(), (1, 50));

        let config = config.with_num_processes(9);
        assert_eq!(config.num_processes, 9);
    }

    #[test]
    fn test_config_deserialize() {
        let config: GeneratorConfig = serde_json::from_str(
            r#"{ "num_processes": 4, "mode": { "kind": "range", "burst_min": 2, "burst_max": 6 } }"#,
        )
        .unwrap();
        assert_eq!(config.num_processes, 4);
        assert_eq!(config.burst_range(), (2, 6));

        let partial: GeneratorConfig = serde_json::from_str(r#"{ "num_processes": 3 }"#).unwrap();
        assert_eq!(partial.mode, DataMode::Random);
    }
}
