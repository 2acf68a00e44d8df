use std::time::Duration;

use super::stats::MAX_LEVEL;

/// Invalid gravity timing.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    #[display("base gravity interval must be positive")]
    ZeroBaseInterval,
    #[display(
        "gravity interval at level {max_level} would not be positive \
         (base {}ms, step {}ms)",
        base.as_millis(),
        step.as_millis()
    )]
    IntervalUnderflow {
        base: Duration,
        step: Duration,
        max_level: usize,
    },
}

/// Gravity timing for a session.
///
/// The interval between gravity ticks is `base_interval - level * interval_step`.
///
/// # Example
///
/// ```
/// use std::time::Duration;
///
/// use blockfall_engine::GameConfig;
///
/// let config = GameConfig::default();
/// assert!(config.validate().is_ok());
/// assert_eq!(config.gravity_interval(0), Duration::from_millis(1000));
/// assert_eq!(config.gravity_interval(20), Duration::from_millis(100));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub base_interval: Duration,
    pub interval_step: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            base_interval: Duration::from_millis(1000),
            interval_step: Duration::from_millis(45),
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn from_millis(base_interval: u64, interval_step: u64) -> Self {
        Self {
            base_interval: Duration::from_millis(base_interval),
            interval_step: Duration::from_millis(interval_step),
        }
    }

    /// Checks that every reachable level has a positive gravity interval.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_interval.is_zero() {
            return Err(ConfigError::ZeroBaseInterval);
        }
        if self.max_reduction() >= self.base_interval {
            return Err(ConfigError::IntervalUnderflow {
                base: self.base_interval,
                step: self.interval_step,
                max_level: MAX_LEVEL,
            });
        }
        Ok(())
    }

    /// Returns the gravity interval at `level`, capped at the maximum level.
    ///
    /// Saturates at zero for configurations that fail [`validate`](Self::validate).
    #[must_use]
    pub fn gravity_interval(&self, level: usize) -> Duration {
        let reduction = self.interval_step * level_factor(level.min(MAX_LEVEL));
        self.base_interval.saturating_sub(reduction)
    }

    fn max_reduction(&self) -> Duration {
        self.interval_step * level_factor(MAX_LEVEL)
    }
}

fn level_factor(level: usize) -> u32 {
    u32::try_from(level).unwrap_or(u32::MAX)
}
