//! Configuration shared by the producer, the renderer and the GUI.
//!
//! Every field has a default, so a config file only needs the keys it
//! changes. Files ending in `.json` are read as JSON, everything else as YAML.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::frame::{Channel, CHANNEL_COUNT};

/// Top-level configuration.
///
/// | Field                | Purpose |
/// |----------------------|---------|
/// | `sample_interval_ms` | Producer pacing between forwarded samples |
/// | `tick_interval_ms`   | Renderer redraw cadence |
/// | `y_range`            | Fixed vertical axis range |
/// | `channel_*`          | Legend names and RGB line colours |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotterConfig {
    /// Native window title.
    pub title: String,
    pub sample_interval_ms: u64,
    pub tick_interval_ms: u64,
    pub y_range: [f64; 2],
    pub channel_names: [String; CHANNEL_COUNT],
    pub channel_colors: [[u8; 3]; CHANNEL_COUNT],
    /// Initial window size in logical pixels.
    pub window_size: [f32; 2],
    /// Decimal places for the channel value labels.
    pub value_precision: usize,
}

impl Default for PlotterConfig {
    fn default() -> Self {
        Self {
            title: "Real Time Plotter".to_string(),
            sample_interval_ms: 10,
            tick_interval_ms: 100,
            y_range: [0.0, 10.0],
            channel_names: [
                "Channel 1".to_string(),
                "Channel 2".to_string(),
                "Channel 3".to_string(),
            ],
            channel_colors: [[220, 50, 47], [40, 160, 60], [38, 110, 210]],
            window_size: [1500.0, 500.0],
            value_precision: 3,
        }
    }
}

impl PlotterConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let cfg: PlotterConfig = if is_json {
            serde_json::from_str::<PlotterConfig>(&text).map_err(|e| e.to_string())
        } else {
            serde_yaml::from_str::<PlotterConfig>(&text).map_err(|e| e.to_string())
        }
        .map_err(|message| ConfigError::Parse {
            path: path.to_path_buf(),
            message,
        })?;
        cfg.validate()?;
        log::debug!("loaded config from {:?}", path);
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "tick_interval_ms must be greater than zero".into(),
            ));
        }
        let [lo, hi] = self.y_range;
        if !(lo.is_finite() && hi.is_finite() && lo < hi) {
            return Err(ConfigError::Invalid(format!(
                "y_range must be an increasing finite pair, got [{}, {}]",
                lo, hi
            )));
        }
        Ok(())
    }

    pub fn sample_interval(&self) -> Duration {
        Duration::from_millis(self.sample_interval_ms)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn channel_name(&self, channel: Channel) -> &str {
        &self.channel_names[channel.index()]
    }

    pub fn channel_color(&self, channel: Channel) -> [u8; 3] {
        self.channel_colors[channel.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_timing() {
        let cfg = PlotterConfig::default();
        assert_eq!(cfg.sample_interval(), Duration::from_millis(10));
        assert_eq!(cfg.tick_interval(), Duration::from_millis(100));
        assert_eq!(cfg.channel_name(Channel::Two), "Channel 2");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let cfg: PlotterConfig = serde_yaml::from_str("tick_interval_ms: 50\n").unwrap();
        assert_eq!(cfg.tick_interval_ms, 50);
        assert_eq!(cfg.y_range, [0.0, 10.0]);
    }

    #[test]
    fn rejects_zero_tick_and_inverted_range() {
        let mut cfg = PlotterConfig::default();
        cfg.tick_interval_ms = 0;
        assert!(matches!(cfg.validate(), Err(ConfigError::Invalid(_))));

        let mut cfg = PlotterConfig::default();
        cfg.y_range = [5.0, 5.0];
        assert!(cfg.validate().is_err());
    }
}
