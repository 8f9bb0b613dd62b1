use std::sync::Arc;
use std::sync::Mutex;

use super::*;

fn recording(controller: &mut ThemeController) -> Arc<Mutex<Vec<ThemeState>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    controller.subscribe(move |theme| sink.lock().expect("lock").push(theme));
    seen
}

// =============================================================
// ThemeState
// =============================================================

#[test]
fn default_theme_is_dark() {
    assert_eq!(ThemeState::default(), ThemeState::Dark);
}

#[test]
fn toggled_flips_value() {
    assert_eq!(ThemeState::Light.toggled(), ThemeState::Dark);
    assert_eq!(ThemeState::Dark.toggled(), ThemeState::Light);
}

#[test]
fn icon_and_class_follow_theme() {
    assert_eq!(ThemeState::Dark.toggle_icon(), "☀");
    assert_eq!(ThemeState::Light.toggle_icon(), "☾");
    assert_eq!(ThemeState::Dark.as_str(), "dark");
    assert_eq!(ThemeState::Light.accent_class(), "accent--light");
}

#[test]
fn theme_deserializes_from_lowercase() {
    let theme: ThemeState = serde_json::from_str("\"light\"").expect("theme");
    assert_eq!(theme, ThemeState::Light);
}

// =============================================================
// ThemeController
// =============================================================

#[test]
fn toggle_twice_is_an_involution_with_two_notifications() {
    let mut controller = ThemeController::new(ThemeState::Light);
    let first = recording(&mut controller);
    let second = recording(&mut controller);

    assert_eq!(controller.toggle(), ThemeState::Dark);
    assert_eq!(controller.toggle(), ThemeState::Light);
    assert_eq!(controller.get(), ThemeState::Light);

    for seen in [first, second] {
        assert_eq!(*seen.lock().expect("lock"), vec![ThemeState::Dark, ThemeState::Light]);
    }
}

#[test]
fn listeners_see_new_value_before_toggle_returns() {
    let mut controller = ThemeController::new(ThemeState::Dark);
    let seen = recording(&mut controller);
    controller.toggle();
    assert_eq!(seen.lock().expect("lock").last().copied(), Some(controller.get()));
}

#[test]
fn subscribe_does_not_replay_current_value() {
    let mut controller = ThemeController::new(ThemeState::Dark);
    let seen = recording(&mut controller);
    assert!(seen.lock().expect("lock").is_empty());
}

#[test]
fn unsubscribed_listener_stops_receiving() {
    let mut controller = ThemeController::new(ThemeState::Dark);
    let seen = Arc::new(Mutex::new(0_usize));
    let sink = Arc::clone(&seen);
    let id = controller.subscribe(move |_| *sink.lock().expect("lock") += 1);

    controller.toggle();
    assert!(controller.unsubscribe(id));
    assert!(!controller.unsubscribe(id));
    controller.toggle();

    assert_eq!(*seen.lock().expect("lock"), 1);
    assert_eq!(controller.subscriber_count(), 0);
}
