//! Snapshot generation and the deferred-completion source boundary

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{Local, NaiveDateTime};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::alerts::{self, Notification, Readings};
use crate::config::{AlertThresholds, Config};
use crate::telemetry::{self, SensorSeries, WalkParams};

/// One complete refresh cycle worth of readings and notifications
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AquariumSnapshot {
    pub temperature_history: SensorSeries,
    pub current_temperature: f64,
    pub feed_level: u8,
    pub ph_value: f64,
    pub ph_history: SensorSeries,
    pub notifications: Vec<Notification>,
}

impl AquariumSnapshot {
    /// The scalar values the alert rules were evaluated against
    pub fn readings(&self) -> Readings {
        Readings {
            temperature: self.current_temperature,
            ph: self.ph_value,
            feed_level: self.feed_level,
        }
    }
}

/// Synthesize a snapshot: series, then current values, then rules.
pub fn generate_snapshot<R: Rng + ?Sized>(
    rng: &mut R,
    now: NaiveDateTime,
    thresholds: &AlertThresholds,
) -> AquariumSnapshot {
    let temperature_history = telemetry::generate_series(&WalkParams::TEMPERATURE, now, rng);
    let ph_history = telemetry::generate_series(&WalkParams::PH, now, rng);

    // Both series always hold SERIES_LEN points
    let current_temperature =
        telemetry::current_reading(&temperature_history).unwrap_or(WalkParams::TEMPERATURE.base);
    let ph_value = telemetry::current_reading(&ph_history).unwrap_or(WalkParams::PH.base);
    let feed_level: u8 = rng.random_range(0..=100);

    let readings = Readings {
        temperature: current_temperature,
        ph: ph_value,
        feed_level,
    };
    let notifications = alerts::evaluate(&readings, now, thresholds);

    AquariumSnapshot {
        temperature_history,
        current_temperature,
        feed_level,
        ph_value,
        ph_history,
        notifications,
    }
}

/// Source of local wall-clock time
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Local time of the host
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Anything that can deliver a snapshot, possibly after some delay
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    async fn fetch(&self) -> crate::Result<AquariumSnapshot>;
}

/// Random-walk snapshot generator standing in for real aquarium sensors
pub struct SimulatedSource {
    latency: Duration,
    thresholds: AlertThresholds,
    rng: Mutex<StdRng>,
    clock: Arc<dyn Clock>,
}

impl SimulatedSource {
    pub fn new(config: &Config) -> Self {
        let rng = match config.generator.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            latency: config.generator.simulated_latency,
            thresholds: config.thresholds.clone(),
            rng: Mutex::new(rng),
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Generate a snapshot immediately, without the simulated delay
    pub fn generate(&self) -> AquariumSnapshot {
        let now = self.clock.now();
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        generate_snapshot(&mut *rng, now, &self.thresholds)
    }
}

impl std::fmt::Debug for SimulatedSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulatedSource")
            .field("latency", &self.latency)
            .field("thresholds", &self.thresholds)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl SnapshotSource for SimulatedSource {
    async fn fetch(&self) -> crate::Result<AquariumSnapshot> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        let snapshot = self.generate();
        tracing::debug!(
            "Generated snapshot: temperature={} ph={} feed={} notifications={}",
            snapshot.current_temperature,
            snapshot.ph_value,
            snapshot.feed_level,
            snapshot.notifications.len()
        );
        Ok(snapshot)
    }
}
