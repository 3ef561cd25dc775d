// Constants and startup configuration for the visualizer

use crate::dataset::Value;
use crate::error::{Result, VizError};
use std::time::Duration;

/// Number of bars in the working array
pub const DEFAULT_ARRAY_LEN: usize = 100;

/// Smallest generated value
pub const DEFAULT_MIN_VALUE: Value = 10;

/// Largest generated value
pub const DEFAULT_MAX_VALUE: Value = 530;

/// Controller ticks per second while sorting
pub const DEFAULT_TICK_RATE: u32 = 60;

/// Settings fixed at process start
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualizerConfig {
    pub array_len: usize,
    pub min_value: Value,
    pub max_value: Value,
    pub tick_rate: u32,
    /// Seed for the value generator; `None` draws one from the OS
    pub seed: Option<u64>,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        VisualizerConfig {
            array_len: DEFAULT_ARRAY_LEN,
            min_value: DEFAULT_MIN_VALUE,
            max_value: DEFAULT_MAX_VALUE,
            tick_rate: DEFAULT_TICK_RATE,
            seed: None,
        }
    }
}

impl VisualizerConfig {
    /// Check that the settings describe a usable value range and tick rate
    pub fn validate(&self) -> Result<()> {
        if self.min_value > self.max_value {
            return Err(VizError::config(format!(
                "value range is empty: {} > {}",
                self.min_value, self.max_value
            )));
        }
        if self.tick_rate == 0 {
            return Err(VizError::config("tick rate must be at least 1"));
        }
        Ok(())
    }

    /// Wall-clock time between two controller ticks
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = VisualizerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.array_len, 100);
        assert_eq!(config.tick_interval(), Duration::from_secs(1) / 60);
    }

    #[test]
    fn test_rejects_empty_range() {
        let config = VisualizerConfig {
            min_value: 50,
            max_value: 40,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(format!("{err}").contains("50 > 40"));
    }

    #[test]
    fn test_rejects_zero_tick_rate() {
        let config = VisualizerConfig {
            tick_rate: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(VizError::InvalidConfig(_))
        ));
    }
}
