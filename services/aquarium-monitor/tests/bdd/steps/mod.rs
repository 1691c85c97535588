//! BDD step definitions for the aquarium monitor

pub mod alert_steps;
pub mod generator_steps;

use aquarium_monitor::NotificationCategory;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

pub fn parse_category(s: &str) -> NotificationCategory {
    match s {
        "temperature" => NotificationCategory::Temperature,
        "ph" => NotificationCategory::Ph,
        "feed" => NotificationCategory::Feed,
        "system" => NotificationCategory::System,
        other => panic!("Unknown category: {}", other),
    }
}

/// A fixed date at the given `HH:MM`
pub fn clock_at(hh_mm: &str) -> NaiveDateTime {
    let time = NaiveTime::parse_from_str(hh_mm, "%H:%M")
        .unwrap_or_else(|e| panic!("bad time {:?}: {}", hh_mm, e));
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap().and_time(time)
}

pub fn split_ids(list: &str) -> Vec<String> {
    list.split(',')
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .collect()
}
