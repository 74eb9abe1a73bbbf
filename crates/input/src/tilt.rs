//! Keyboard tilt simulator.
//!
//! Stands in for an accelerometer when playing in a terminal: holding Up/`w`
//! tilts the "phone" away from the face, Down/`s` tilts it toward the face.
//! Samples are produced at the sensor polling interval, like a real device.
//!
//! Many terminals never report key releases, so a held tilt falls back to
//! level once no key event has arrived for `hold_timeout_ms`.

use crossterm::event::KeyCode;

use arrayvec::ArrayVec;

use crate::types::{AccelSample, DEFAULT_KEY_TILT_HOLD_MS, SENSOR_INTERVAL_MS, SIMULATED_TILT_Z};

/// Simulated device pose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TiltDirection {
    /// Upright against the forehead.
    Level,
    /// Top edge away from the face.
    Away,
    /// Top edge toward the face.
    Toward,
}

impl TiltDirection {
    fn z(self) -> f32 {
        match self {
            TiltDirection::Level => 0.0,
            TiltDirection::Away => SIMULATED_TILT_Z,
            TiltDirection::Toward => -SIMULATED_TILT_Z,
        }
    }

    fn from_key(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char('k') | KeyCode::Char('K') => {
                Some(TiltDirection::Away)
            }
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('j') | KeyCode::Char('J') => {
                Some(TiltDirection::Toward)
            }
            _ => None,
        }
    }
}

/// Produces accelerometer samples from tilt keys.
#[derive(Debug, Clone)]
pub struct KeyTilt {
    direction: TiltDirection,
    since_key_ms: u32,
    hold_timeout_ms: u32,
    interval_ms: u32,
    sample_accumulator: u32,
}

impl Default for KeyTilt {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyTilt {
    pub fn new() -> Self {
        Self::with_config(DEFAULT_KEY_TILT_HOLD_MS, SENSOR_INTERVAL_MS)
    }

    pub fn with_config(hold_timeout_ms: u32, interval_ms: u32) -> Self {
        Self {
            direction: TiltDirection::Level,
            since_key_ms: 0,
            hold_timeout_ms,
            interval_ms: interval_ms.max(1),
            sample_accumulator: 0,
        }
    }

    pub fn direction(&self) -> TiltDirection {
        self.direction
    }

    /// Start (or keep) tilting. Returns `false` for keys that are not tilt keys.
    pub fn handle_key_press(&mut self, code: KeyCode) -> bool {
        let Some(direction) = TiltDirection::from_key(code) else {
            return false;
        };
        self.direction = direction;
        self.since_key_ms = 0;
        true
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        if TiltDirection::from_key(code) == Some(self.direction) {
            self.direction = TiltDirection::Level;
            self.since_key_ms = 0;
        }
    }

    /// Return to level immediately (e.g. when the game screen is left).
    pub fn level(&mut self) {
        self.direction = TiltDirection::Level;
        self.since_key_ms = 0;
        self.sample_accumulator = 0;
    }

    /// Advance time and emit one sample per elapsed polling interval.
    pub fn update(&mut self, elapsed_ms: u32) -> ArrayVec<AccelSample, 16> {
        let mut samples = ArrayVec::<AccelSample, 16>::new();

        if self.direction != TiltDirection::Level {
            self.since_key_ms = self.since_key_ms.saturating_add(elapsed_ms);
            if self.since_key_ms > self.hold_timeout_ms {
                self.direction = TiltDirection::Level;
                self.since_key_ms = 0;
            }
        }

        self.sample_accumulator = self.sample_accumulator.saturating_add(elapsed_ms);
        while self.sample_accumulator >= self.interval_ms {
            let _ = samples.try_push(AccelSample::from_z(self.direction.z()));
            self.sample_accumulator -= self.interval_ms;
        }

        samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_one_sample_per_interval() {
        let mut t = KeyTilt::with_config(600, 100);
        assert!(t.update(99).is_empty());
        let s = t.update(1);
        assert_eq!(s.len(), 1);
        assert_eq!(s[0].z, 0.0);
        assert_eq!(t.update(250).len(), 2);
    }

    #[test]
    fn held_key_reports_tilt() {
        let mut t = KeyTilt::with_config(600, 100);
        assert!(t.handle_key_press(KeyCode::Up));
        let s = t.update(100);
        assert_eq!(s[0].z, SIMULATED_TILT_Z);

        assert!(t.handle_key_press(KeyCode::Char('s')));
        let s = t.update(100);
        assert_eq!(s[0].z, -SIMULATED_TILT_Z);
    }

    #[test]
    fn non_tilt_keys_are_not_consumed() {
        let mut t = KeyTilt::new();
        assert!(!t.handle_key_press(KeyCode::Char('y')));
        assert_eq!(t.direction(), TiltDirection::Level);
    }

    #[test]
    fn release_returns_to_level() {
        let mut t = KeyTilt::with_config(600, 100);
        t.handle_key_press(KeyCode::Up);
        t.handle_key_release(KeyCode::Down);
        assert_eq!(t.direction(), TiltDirection::Away);
        t.handle_key_release(KeyCode::Up);
        assert_eq!(t.direction(), TiltDirection::Level);
    }

    #[test]
    fn hold_times_out_without_key_events() {
        let mut t = KeyTilt::with_config(300, 100);
        t.handle_key_press(KeyCode::Up);
        let zs: Vec<f32> = (0..5).flat_map(|_| t.update(100)).map(|s| s.z).collect();
        assert_eq!(
            zs,
            vec![SIMULATED_TILT_Z, SIMULATED_TILT_Z, SIMULATED_TILT_Z, 0.0, 0.0]
        );
    }

    #[test]
    fn repeated_presses_extend_the_hold() {
        let mut t = KeyTilt::with_config(300, 100);
        t.handle_key_press(KeyCode::Up);
        for _ in 0..10 {
            t.update(200);
            t.handle_key_press(KeyCode::Up);
        }
        assert_eq!(t.direction(), TiltDirection::Away);
    }

    #[test]
    fn long_stall_caps_samples() {
        let mut t = KeyTilt::with_config(600, 100);
        assert_eq!(t.update(10_000).len(), 16);
    }
}
