//! Tilt gesture recognizer scenarios.

use charades::core::{TiltConfig, TiltRecognizer};
use charades::types::{AccelSample, TiltEvent};

fn feed(values: &[f32]) -> Vec<TiltEvent> {
    let mut r = TiltRecognizer::default();
    r.feed_all(values.iter().map(|&z| AccelSample::from_z(z)))
}

#[test]
fn test_away_then_toward() {
    assert_eq!(
        feed(&[0.0, 0.0, 0.9, 0.9, 0.0, -0.9]),
        vec![TiltEvent::Correct, TiltEvent::Skip]
    );
}

#[test]
fn test_dead_band_never_fires() {
    assert!(feed(&[0.5, 0.5, 0.5]).is_empty());
    assert!(feed(&[-0.5, 0.69, -0.69, 0.3]).is_empty());
}

#[test]
fn test_held_tilt_fires_once() {
    assert_eq!(feed(&[0.9; 20]), vec![TiltEvent::Correct]);
}

#[test]
fn test_dead_band_does_not_rearm() {
    // 0.5 is neither neutral nor tilted.
    assert_eq!(feed(&[0.9, 0.5, 0.9, 0.5, -0.9]), vec![TiltEvent::Correct]);
}

#[test]
fn test_fast_flip_needs_neutral() {
    assert_eq!(feed(&[0.9, -0.9, 0.0, -0.9]), vec![TiltEvent::Correct, TiltEvent::Skip]);
}

#[test]
fn test_other_axes_are_ignored() {
    let mut r = TiltRecognizer::default();
    assert_eq!(r.feed(AccelSample::new(1.0, -1.0, 0.0)), None);
    assert_eq!(r.feed(AccelSample::new(0.0, 0.0, 0.95)), Some(TiltEvent::Correct));
}

#[test]
fn test_armed_only_after_neutral() {
    let mut r = TiltRecognizer::default();
    assert!(r.feed(AccelSample::from_z(-0.9)).is_some());
    assert!(!r.is_armed());
    assert_eq!(r.feed(AccelSample::from_z(-0.5)), None);
    assert!(!r.is_armed());
    assert_eq!(r.feed(AccelSample::from_z(0.0)), None);
    assert!(r.is_armed());
    assert_eq!(r.feed(AccelSample::from_z(-0.9)), Some(TiltEvent::Skip));
}

#[test]
fn test_custom_thresholds() {
    let mut r = TiltRecognizer::new(TiltConfig {
        neutral_threshold: 0.1,
        tilt_threshold: 0.4,
    });
    let events = r.feed_all(
        [0.5, 0.2, 0.5, 0.05, -0.5]
            .into_iter()
            .map(AccelSample::from_z),
    );
    assert_eq!(events, vec![TiltEvent::Correct, TiltEvent::Skip]);
}
