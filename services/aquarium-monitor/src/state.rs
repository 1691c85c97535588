//! Shared view state: the latest snapshot and locally dismissed notifications

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::RwLock;

use crate::alerts::Notification;
use crate::snapshot::AquariumSnapshot;

/// State shared by the poller and the dashboard
#[derive(Debug)]
pub struct ViewState {
    pub snapshot: Option<AquariumSnapshot>,
    /// True until the first fetch completes, successfully or not
    pub loading: bool,
    pub dismissed: HashSet<String>,
    pub last_error: Option<String>,
    pub refresh_count: u64,
    pub consecutive_failures: u32,
    pub last_refresh_epoch_ms: Option<u64>,
    pub started_at: Instant,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            snapshot: None,
            loading: true,
            dismissed: HashSet::new(),
            last_error: None,
            refresh_count: 0,
            consecutive_failures: 0,
            last_refresh_epoch_ms: None,
            started_at: Instant::now(),
        }
    }

    /// Replace the current snapshot with a freshly generated one
    pub fn apply_snapshot(&mut self, snapshot: AquariumSnapshot, now_ms: u64) {
        self.snapshot = Some(snapshot);
        self.loading = false;
        self.last_error = None;
        self.refresh_count += 1;
        self.consecutive_failures = 0;
        self.last_refresh_epoch_ms = Some(now_ms);
    }

    /// Record a failed fetch. The previous snapshot stays in place.
    pub fn record_failure(&mut self, error: String) {
        self.loading = false;
        self.last_error = Some(error);
        self.consecutive_failures += 1;
    }

    /// Suppress a notification id from display, returning true if it was newly dismissed.
    ///
    /// Ids are per category, so the dismissal also hides that category in later
    /// snapshots.
    pub fn dismiss(&mut self, id: &str) -> bool {
        self.dismissed.insert(id.to_string())
    }

    pub fn is_dismissed(&self, id: &str) -> bool {
        self.dismissed.contains(id)
    }

    /// Notifications of the current snapshot that have not been dismissed, in source order
    pub fn active_notifications(&self) -> Vec<Notification> {
        self.snapshot
            .iter()
            .flat_map(|s| s.notifications.iter())
            .filter(|n| !self.dismissed.contains(&n.id))
            .cloned()
            .collect()
    }

    /// Whether the current snapshot contains a notification with this id
    pub fn has_notification(&self, id: &str) -> bool {
        self.snapshot
            .as_ref()
            .is_some_and(|s| s.notifications.iter().any(|n| n.id == id))
    }
}

/// Thread-safe shared state handle
pub type StateHandle = Arc<RwLock<ViewState>>;

pub fn new_state_handle() -> StateHandle {
    Arc::new(RwLock::new(ViewState::new()))
}
