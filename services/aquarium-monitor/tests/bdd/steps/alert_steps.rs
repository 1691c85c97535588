//! BDD step definitions for the alert rules feature

use cucumber::{given, then, when};

use aquarium_monitor::{alerts, AlertThresholds, Readings};

use super::{clock_at, parse_category, split_ids};
use crate::world::AquariumWorld;

fn readings(world: &mut AquariumWorld) -> &mut Readings {
    world.readings.get_or_insert(Readings {
        temperature: 26.0,
        ph: 7.0,
        feed_level: 80,
    })
}

#[given("nominal aquarium readings")]
fn nominal_readings(world: &mut AquariumWorld) {
    readings(world);
}

#[given(expr = "a water temperature of {float} degrees")]
fn water_temperature(world: &mut AquariumWorld, temperature: f64) {
    readings(world).temperature = temperature;
}

#[given(expr = "a pH of {float}")]
fn ph_value(world: &mut AquariumWorld, ph: f64) {
    readings(world).ph = ph;
}

#[given(expr = "a feed level of {int} percent")]
fn feed_level(world: &mut AquariumWorld, level: u8) {
    readings(world).feed_level = level;
}

#[when(expr = "the alert rules are evaluated at {string}")]
fn evaluate_rules(world: &mut AquariumWorld, hh_mm: String) {
    let readings = *readings(world);
    world.notifications =
        alerts::evaluate(&readings, clock_at(&hh_mm), &AlertThresholds::default());
}

#[then(expr = "there should be a {string} notification with message {string}")]
fn notification_with_message(world: &mut AquariumWorld, category: String, message: String) {
    let category = parse_category(&category);
    let notification = world
        .notifications
        .iter()
        .find(|n| n.category == category)
        .unwrap_or_else(|| panic!("no {} notification", category));
    assert_eq!(notification.message, message);
}

#[then(expr = "there should be no {string} notification")]
fn no_notification(world: &mut AquariumWorld, category: String) {
    let category = parse_category(&category);
    assert!(
        world.notifications.iter().all(|n| n.category != category),
        "unexpected {} notification",
        category
    );
}

#[then(expr = "the {string} notification should be timestamped {string}")]
fn notification_timestamp(world: &mut AquariumWorld, category: String, time: String) {
    let category = parse_category(&category);
    let notification = world
        .notifications
        .iter()
        .find(|n| n.category == category)
        .unwrap_or_else(|| panic!("no {} notification", category));
    assert_eq!(notification.time, time);
}

#[then(expr = "the notification ids should be {string}")]
fn notification_ids(world: &mut AquariumWorld, ids: String) {
    let actual: Vec<String> = world.notifications.iter().map(|n| n.id.clone()).collect();
    assert_eq!(actual, split_ids(&ids));
}

#[then("every notification should be unread")]
fn all_unread(world: &mut AquariumWorld) {
    assert!(world.notifications.iter().all(|n| !n.read));
}
