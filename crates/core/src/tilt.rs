//! Tilt gesture recognizer
//!
//! Turns a stream of accelerometer samples into discrete [`TiltEvent`]s using
//! neutral-zone hysteresis: a gesture may only fire while the recognizer is
//! armed, firing disarms it, and only a return to the neutral band
//! (`|z| < neutral_threshold`) re-arms it. Holding a tilt therefore fires once.
//!
//! Only the `z` axis is evaluated; see the crate-level orientation convention
//! in [`crate::types`].

use tracing::debug;

use crate::types::{AccelSample, TiltEvent, NEUTRAL_THRESHOLD, TILT_THRESHOLD};

/// Thresholds for the recognizer, in g.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltConfig {
    pub neutral_threshold: f32,
    pub tilt_threshold: f32,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            neutral_threshold: NEUTRAL_THRESHOLD,
            tilt_threshold: TILT_THRESHOLD,
        }
    }
}

/// Debounced tilt gesture recognizer.
#[derive(Debug, Clone)]
pub struct TiltRecognizer {
    config: TiltConfig,
    in_neutral: bool,
}

impl Default for TiltRecognizer {
    fn default() -> Self {
        Self::new(TiltConfig::default())
    }
}

impl TiltRecognizer {
    /// Create an armed recognizer.
    pub fn new(config: TiltConfig) -> Self {
        Self {
            config,
            in_neutral: true,
        }
    }

    pub fn config(&self) -> TiltConfig {
        self.config
    }

    /// Whether the next tilt past the threshold will fire.
    pub fn is_armed(&self) -> bool {
        self.in_neutral
    }

    /// Feed one sample; returns the gesture it completes, if any.
    pub fn feed(&mut self, sample: AccelSample) -> Option<TiltEvent> {
        let z = sample.z;

        if z.abs() < self.config.neutral_threshold {
            self.in_neutral = true;
            return None;
        }

        if !self.in_neutral {
            return None;
        }

        let event = if z > self.config.tilt_threshold {
            TiltEvent::Correct
        } else if z < -self.config.tilt_threshold {
            TiltEvent::Skip
        } else {
            return None;
        };

        self.in_neutral = false;
        debug!(z, event = event.as_str(), "tilt gesture");
        Some(event)
    }

    /// Feed a batch of samples and collect the fired events in order.
    pub fn feed_all<I>(&mut self, samples: I) -> Vec<TiltEvent>
    where
        I: IntoIterator<Item = AccelSample>,
    {
        samples.into_iter().filter_map(|s| self.feed(s)).collect()
    }
}
