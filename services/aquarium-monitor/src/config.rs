//! Configuration types for the aquarium monitor

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub polling: PollingConfig,
    #[serde(default)]
    pub thresholds: AlertThresholds,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

impl Config {
    /// Reject settings the poller or the alert rules cannot work with
    pub fn validate(&self) -> crate::Result<()> {
        if self.polling.interval.is_zero() {
            return Err(crate::AquariumError::Config(
                "polling interval must be greater than zero".to_string(),
            ));
        }
        let t = &self.thresholds;
        if t.temperature_low >= t.temperature_high {
            return Err(crate::AquariumError::Config(format!(
                "temperature_low ({}) must be below temperature_high ({})",
                t.temperature_low, t.temperature_high
            )));
        }
        if t.ph_low >= t.ph_high {
            return Err(crate::AquariumError::Config(format!(
                "ph_low ({}) must be below ph_high ({})",
                t.ph_low, t.ph_high
            )));
        }
        if t.feed_low > 100 {
            return Err(crate::AquariumError::Config(format!(
                "feed_low ({}) must be a percentage",
                t.feed_low
            )));
        }
        Ok(())
    }
}

/// Simulated snapshot source settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Delay before a generated snapshot is delivered
    #[serde(default = "default_simulated_latency", with = "humantime_serde")]
    pub simulated_latency: Duration,
    /// Fixed RNG seed; OS entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            simulated_latency: default_simulated_latency(),
            seed: None,
        }
    }
}

/// Refresh cycle settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollingConfig {
    #[serde(default = "default_polling_interval", with = "humantime_serde")]
    pub interval: Duration,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            interval: default_polling_interval(),
        }
    }
}

/// Limits outside of which an alert is raised. All comparisons are strict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertThresholds {
    #[serde(default = "default_temperature_high")]
    pub temperature_high: f64,
    #[serde(default = "default_temperature_low")]
    pub temperature_low: f64,
    #[serde(default = "default_ph_high")]
    pub ph_high: f64,
    #[serde(default = "default_ph_low")]
    pub ph_low: f64,
    #[serde(default = "default_feed_low")]
    pub feed_low: u8,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            temperature_high: default_temperature_high(),
            temperature_low: default_temperature_low(),
            ph_high: default_ph_high(),
            ph_low: default_ph_low(),
            feed_low: default_feed_low(),
        }
    }
}

/// Dashboard configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_dashboard_port")]
    pub port: u16,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            port: default_dashboard_port(),
        }
    }
}

fn default_simulated_latency() -> Duration {
    Duration::from_millis(800)
}

fn default_polling_interval() -> Duration {
    Duration::from_secs(30)
}

fn default_temperature_high() -> f64 {
    28.0
}

fn default_temperature_low() -> f64 {
    24.0
}

fn default_ph_high() -> f64 {
    7.5
}

fn default_ph_low() -> f64 {
    6.5
}

fn default_feed_low() -> u8 {
    30
}

fn default_true() -> bool {
    true
}

fn default_dashboard_port() -> u16 {
    11120
}

/// Load configuration from a JSON file
pub fn load_config(path: &Path) -> crate::Result<Config> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = serde_json::from_str(&content)?;
    Ok(config)
}
