//! Synthetic sensor series
//!
//! Each series is a bounded random walk: a randomized base value is nudged by a
//! small delta once per hour and clamped to the sensor's valid range.

use chrono::{NaiveDateTime, TimeDelta, Timelike};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of hourly points in a series: the last 24 hours plus the current hour
pub const SERIES_LEN: usize = 25;

/// A single hourly reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    /// Wall-clock hour label, e.g. `"9:00"` or `"23:00"`
    pub time: String,
    pub value: f64,
}

/// Hourly readings, oldest first
pub type SensorSeries = Vec<TimeSeriesPoint>;

/// Shape of a bounded random walk for one sensor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkParams {
    /// Center of the starting value
    pub base: f64,
    /// The starting value is drawn from `base ± base_jitter`
    pub base_jitter: f64,
    /// Each hour moves the value by at most `± step`
    pub step: f64,
    pub min: f64,
    pub max: f64,
}

impl WalkParams {
    /// Water temperature in °C
    pub const TEMPERATURE: WalkParams = WalkParams {
        base: 26.0,
        base_jitter: 1.0,
        step: 0.3,
        min: 22.0,
        max: 29.0,
    };

    /// Water pH
    pub const PH: WalkParams = WalkParams {
        base: 7.0,
        base_jitter: 0.3,
        step: 0.1,
        min: 6.0,
        max: 8.0,
    };

    fn starting_value<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.base + symmetric_offset(self.base_jitter, rng)
    }

    fn next_value<R: Rng + ?Sized>(&self, previous: f64, rng: &mut R) -> f64 {
        (previous + symmetric_offset(self.step, rng)).clamp(self.min, self.max)
    }
}

/// Uniform offset in `-width..=width`; a zero width yields no movement
fn symmetric_offset<R: Rng + ?Sized>(width: f64, rng: &mut R) -> f64 {
    let width = width.abs();
    if width > 0.0 {
        rng.random_range(-width..=width)
    } else {
        0.0
    }
}

/// Generate the hourly series ending at the hour containing `now`.
///
/// The walk itself carries full precision from step to step; only the emitted
/// points are rounded to one decimal.
pub fn generate_series<R: Rng + ?Sized>(
    params: &WalkParams,
    now: NaiveDateTime,
    rng: &mut R,
) -> SensorSeries {
    let mut value = params.starting_value(rng);
    let mut series = Vec::with_capacity(SERIES_LEN);

    for hours_ago in (0..SERIES_LEN as i64).rev() {
        value = params.next_value(value, rng);
        series.push(TimeSeriesPoint {
            time: hour_label(now - TimeDelta::hours(hours_ago)),
            value: round_one_decimal(value),
        });
    }

    series
}

/// Latest value of a series
pub fn current_reading(series: &[TimeSeriesPoint]) -> Option<f64> {
    series.last().map(|point| point.value)
}

/// `"{hour}:00"`, 24-hour clock, hour not zero-padded
pub fn hour_label(time: NaiveDateTime) -> String {
    format!("{}:00", time.hour())
}

pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
