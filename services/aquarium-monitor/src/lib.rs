//! Aquarium Monitor - simulated aquarium telemetry and alerting
//!
//! Generates random-walk temperature and pH series plus a feed level, evaluates
//! threshold rules into notifications, and keeps the latest snapshot fresh on a
//! polling interval behind a small JSON dashboard.

pub mod alerts;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod poller;
pub mod snapshot;
pub mod state;
pub mod status;
pub mod telemetry;

pub use alerts::{Notification, NotificationCategory, Readings};
pub use config::{load_config, AlertThresholds, Config};
pub use error::{AquariumError, Result};
pub use snapshot::{generate_snapshot, AquariumSnapshot, SimulatedSource, SnapshotSource};
pub use state::{new_state_handle, StateHandle, ViewState};
pub use telemetry::{SensorSeries, TimeSeriesPoint};

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::poller::Poller;

/// Builder for the aquarium monitor service.
///
/// Uses the simulated snapshot source unless another one is supplied.
pub struct AquariumBuilder {
    config: Config,
    source: Option<Arc<dyn SnapshotSource>>,
}

impl AquariumBuilder {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            source: None,
        }
    }

    pub fn with_source(mut self, source: Arc<dyn SnapshotSource>) -> Self {
        self.source = Some(source);
        self
    }

    pub fn build(self) -> Result<AquariumMonitor> {
        self.config.validate()?;

        let source = match self.source {
            Some(source) => source,
            None => Arc::new(SimulatedSource::new(&self.config)),
        };

        Ok(AquariumMonitor {
            config: self.config,
            source,
            state: new_state_handle(),
            cancel: CancellationToken::new(),
        })
    }
}

/// A configured monitor, ready to start polling
pub struct AquariumMonitor {
    config: Config,
    source: Arc<dyn SnapshotSource>,
    state: StateHandle,
    cancel: CancellationToken,
}

impl AquariumMonitor {
    pub fn state(&self) -> StateHandle {
        Arc::clone(&self.state)
    }

    /// Token that stops the monitor when cancelled
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Run until cancelled, either through the token or ctrl-c
    pub async fn start(self) -> Result<()> {
        tokio::spawn(cancel_on_ctrl_c(self.cancel.clone()));

        if self.config.dashboard.enabled {
            self.spawn_dashboard();
        }

        tracing::info!(
            "Aquarium monitor started, refreshing every {:?}",
            self.config.polling.interval
        );

        let poller = Poller::new(
            Arc::clone(&self.source),
            Arc::clone(&self.state),
            self.config.polling.interval,
            self.cancel.clone(),
        );
        poller.run().await;

        tracing::info!("Aquarium monitor stopped");
        Ok(())
    }

    fn spawn_dashboard(&self) {
        let dashboard_port = self.config.dashboard.port;
        let dashboard_state = Arc::clone(&self.state);
        let cancel_for_dashboard = self.cancel.clone();

        tokio::spawn(async move {
            let router = dashboard::build_router(dashboard_state);

            let listener = match dashboard::bind(dashboard_port).await {
                Ok(l) => l,
                Err(e) => {
                    tracing::error!("{}. Continuing without dashboard.", e);
                    return;
                }
            };
            tracing::info!("Dashboard listening on port {}", dashboard_port);

            axum::serve(listener, router)
                .with_graceful_shutdown(async move {
                    cancel_for_dashboard.cancelled().await;
                })
                .await
                .ok();

            tracing::debug!("Dashboard stopped");
        });
    }
}

/// Cancel `cancel` on ctrl-c; returns as soon as either happens
async fn cancel_on_ctrl_c(cancel: CancellationToken) {
    tokio::select! {
        _ = cancel.cancelled() => {}
        result = tokio::signal::ctrl_c() => match result {
            Ok(()) => {
                tracing::info!("Shutdown signal received");
                cancel.cancel();
            }
            Err(e) => tracing::error!("Failed to listen for ctrl-c: {}", e),
        },
    }
}
