//! Human-facing classification of current readings

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lower and upper bound of the pH gauge scale
const PH_GAUGE_MIN: f64 = 5.5;
const PH_GAUGE_MAX: f64 = 8.5;

/// Fill state of the feed storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedStatus {
    Full,
    Good,
    Low,
    Critical,
}

impl FeedStatus {
    pub fn from_level(level: u8) -> Self {
        match level {
            76.. => FeedStatus::Full,
            51..=75 => FeedStatus::Good,
            26..=50 => FeedStatus::Low,
            _ => FeedStatus::Critical,
        }
    }
}

impl fmt::Display for FeedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedStatus::Full => write!(f, "Full"),
            FeedStatus::Good => write!(f, "Good"),
            FeedStatus::Low => write!(f, "Low"),
            FeedStatus::Critical => write!(f, "Critical"),
        }
    }
}

/// Coarse three-step band of the feed level bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedBand {
    Good,
    Medium,
    Low,
}

impl FeedBand {
    pub fn from_level(level: u8) -> Self {
        match level {
            51.. => FeedBand::Good,
            26..=50 => FeedBand::Medium,
            _ => FeedBand::Low,
        }
    }
}

/// Where a pH value sits relative to the freshwater optimum of 6.5 to 7.5
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhStatus {
    TooAcidic,
    Optimal,
    TooAlkaline,
}

impl PhStatus {
    pub fn from_value(ph: f64) -> Self {
        if ph < 6.5 {
            PhStatus::TooAcidic
        } else if ph > 7.5 {
            PhStatus::TooAlkaline
        } else {
            PhStatus::Optimal
        }
    }
}

impl fmt::Display for PhStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhStatus::TooAcidic => write!(f, "Too Acidic"),
            PhStatus::Optimal => write!(f, "Optimal"),
            PhStatus::TooAlkaline => write!(f, "Too Alkaline"),
        }
    }
}

/// Position of `ph` on the 5.5 to 8.5 gauge, as a percentage clamped to 0..=100
pub fn ph_gauge_position(ph: f64) -> f64 {
    let position = (ph - PH_GAUGE_MIN) / (PH_GAUGE_MAX - PH_GAUGE_MIN) * 100.0;
    position.clamp(0.0, 100.0)
}
