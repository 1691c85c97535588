//! BDD step definitions for the snapshot generator feature

use std::time::Duration;

use cucumber::{given, then, when};

use aquarium_monitor::{Config, SimulatedSource, SnapshotSource};

use crate::world::AquariumWorld;

#[given(expr = "a simulated source seeded with {int}")]
fn seeded_source(world: &mut AquariumWorld, seed: u64) {
    let mut config = Config::default();
    config.generator.seed = Some(seed);
    config.generator.simulated_latency = Duration::ZERO;
    world.source = Some(SimulatedSource::new(&config));
}

async fn fetch_into(world: &mut AquariumWorld) {
    let source = world.source.as_ref().expect("source not set");
    let snapshot = source.fetch().await.expect("simulated fetch failed");
    world.snapshots.push(snapshot);
}

#[when("a snapshot is fetched")]
async fn fetch_snapshot(world: &mut AquariumWorld) {
    fetch_into(world).await;
}

#[when(expr = "{int} snapshots are fetched")]
async fn fetch_snapshots(world: &mut AquariumWorld, count: usize) {
    for _ in 0..count {
        fetch_into(world).await;
    }
}

#[then(expr = "every snapshot should have {int} temperature and {int} pH points")]
fn series_lengths(world: &mut AquariumWorld, temperature: usize, ph: usize) {
    assert!(!world.snapshots.is_empty());
    for snapshot in &world.snapshots {
        assert_eq!(snapshot.temperature_history.len(), temperature);
        assert_eq!(snapshot.ph_history.len(), ph);
    }
}

#[then(expr = "every temperature reading should be between {float} and {float}")]
fn temperature_range(world: &mut AquariumWorld, low: f64, high: f64) {
    for snapshot in &world.snapshots {
        for point in &snapshot.temperature_history {
            assert!(
                (low..=high).contains(&point.value),
                "temperature {} out of range",
                point.value
            );
        }
    }
}

#[then(expr = "every pH reading should be between {float} and {float}")]
fn ph_range(world: &mut AquariumWorld, low: f64, high: f64) {
    for snapshot in &world.snapshots {
        for point in &snapshot.ph_history {
            assert!(
                (low..=high).contains(&point.value),
                "pH {} out of range",
                point.value
            );
        }
    }
}

#[then(expr = "every feed level should be between {int} and {int}")]
fn feed_range(world: &mut AquariumWorld, low: u8, high: u8) {
    for snapshot in &world.snapshots {
        assert!((low..=high).contains(&snapshot.feed_level));
    }
}

#[then(expr = "every snapshot should end with the {string} notification")]
fn ends_with(world: &mut AquariumWorld, id: String) {
    for snapshot in &world.snapshots {
        assert_eq!(snapshot.notifications.last().map(|n| n.id.as_str()), Some(id.as_str()));
    }
}

#[then("the current values should match the last series points")]
fn current_values(world: &mut AquariumWorld) {
    for snapshot in &world.snapshots {
        assert_eq!(
            Some(snapshot.current_temperature),
            snapshot.temperature_history.last().map(|p| p.value)
        );
        assert_eq!(
            Some(snapshot.ph_value),
            snapshot.ph_history.last().map(|p| p.value)
        );
    }
}

#[then("consecutive snapshots should have different temperature series")]
fn independent_snapshots(world: &mut AquariumWorld) {
    for pair in world.snapshots.windows(2) {
        assert_ne!(pair[0].temperature_history, pair[1].temperature_history);
    }
}
