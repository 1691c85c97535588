//! Threshold rules that turn current readings into notifications

use std::fmt;

use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::config::AlertThresholds;

/// Taxonomy tag of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationCategory {
    Temperature,
    Ph,
    Feed,
    System,
}

impl fmt::Display for NotificationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotificationCategory::Temperature => write!(f, "temperature"),
            NotificationCategory::Ph => write!(f, "ph"),
            NotificationCategory::Feed => write!(f, "feed"),
            NotificationCategory::System => write!(f, "system"),
        }
    }
}

/// A notification raised by one generation cycle.
///
/// Ids are fixed per category (`temp-1`, `ph-1`, ...) and repeat across
/// cycles, so they only identify an entry within a single snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub category: NotificationCategory,
    pub title: String,
    pub message: String,
    /// `HH:MM`, 24-hour clock
    pub time: String,
    pub read: bool,
}

impl Notification {
    fn new(
        id: &str,
        category: NotificationCategory,
        title: &str,
        message: String,
        at: NaiveDateTime,
    ) -> Self {
        Self {
            id: id.to_string(),
            category,
            title: title.to_string(),
            message,
            time: clock_label(at),
            read: false,
        }
    }
}

/// Current scalar values the rules are evaluated against
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Readings {
    pub temperature: f64,
    pub ph: f64,
    pub feed_level: u8,
}

/// Evaluate every rule in order: temperature, pH, feed, maintenance.
///
/// The maintenance reminder is unconditional, so the result always holds
/// between one and four entries.
pub fn evaluate(
    readings: &Readings,
    now: NaiveDateTime,
    thresholds: &AlertThresholds,
) -> Vec<Notification> {
    [
        temperature_alert(readings.temperature, now, thresholds),
        ph_alert(readings.ph, now, thresholds),
        feed_alert(readings.feed_level, now, thresholds),
        Some(maintenance_reminder(now)),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn temperature_alert(
    temperature: f64,
    now: NaiveDateTime,
    thresholds: &AlertThresholds,
) -> Option<Notification> {
    let message = if temperature > thresholds.temperature_high {
        format!(
            "Water temperature is high ({}°C). Consider cooling methods.",
            temperature
        )
    } else if temperature < thresholds.temperature_low {
        format!(
            "Water temperature is low ({}°C). Check heater functionality.",
            temperature
        )
    } else {
        return None;
    };

    Some(Notification::new(
        "temp-1",
        NotificationCategory::Temperature,
        "Temperature Alert",
        message,
        now,
    ))
}

fn ph_alert(ph: f64, now: NaiveDateTime, thresholds: &AlertThresholds) -> Option<Notification> {
    let message = if ph > thresholds.ph_high {
        format!("pH level is too alkaline ({}). Check water parameters.", ph)
    } else if ph < thresholds.ph_low {
        format!("pH level is too acidic ({}). Monitor water conditions.", ph)
    } else {
        return None;
    };

    Some(Notification::new(
        "ph-1",
        NotificationCategory::Ph,
        "pH Level Warning",
        message,
        now - TimeDelta::minutes(15),
    ))
}

fn feed_alert(
    feed_level: u8,
    now: NaiveDateTime,
    thresholds: &AlertThresholds,
) -> Option<Notification> {
    if feed_level >= thresholds.feed_low {
        return None;
    }

    Some(Notification::new(
        "feed-1",
        NotificationCategory::Feed,
        "Feed Level Low",
        format!("Feed storage at {}%. Refill recommended.", feed_level),
        now - TimeDelta::hours(2),
    ))
}

fn maintenance_reminder(now: NaiveDateTime) -> Notification {
    Notification::new(
        "system-1",
        NotificationCategory::System,
        "Scheduled Maintenance",
        "Weekly water change recommended within the next 24 hours.".to_string(),
        now - TimeDelta::hours(8),
    )
}

/// Zero-padded `HH:MM`
pub fn clock_label(time: NaiveDateTime) -> String {
    time.format("%H:%M").to_string()
}
