//! BDD test world for the aquarium monitor

use aquarium_monitor::{AquariumSnapshot, Notification, Readings, SimulatedSource, StateHandle};
use cucumber::World;

#[derive(Debug, Default, World)]
pub struct AquariumWorld {
    // Alert rule testing
    pub readings: Option<Readings>,
    pub notifications: Vec<Notification>,

    // Generator testing
    pub source: Option<SimulatedSource>,
    pub snapshots: Vec<AquariumSnapshot>,

    // View state testing
    pub view: Option<StateHandle>,
}
