//! Sensor hub: fan-in of accelerometer samples to a single subscriber.
//!
//! Producers (the TCP feed, the keyboard tilt simulator) call
//! [`SensorHub::publish`] at any time. Samples only flow while a
//! [`SensorSubscription`] is alive; otherwise they are dropped on the floor.
//! Dropping the subscription releases it, so a torn-down game screen can never
//! receive gestures.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::mpsc;
use tracing::debug;

use crate::types::AccelSample;

/// Default number of samples buffered for a slow subscriber.
pub const DEFAULT_BUFFER: usize = 64;

#[derive(Debug)]
struct HubState {
    sender: Option<mpsc::Sender<AccelSample>>,
    generation: u64,
    capacity: usize,
    published: u64,
    dropped: u64,
}

/// Cloneable handle shared by producers and the consumer.
#[derive(Debug, Clone)]
pub struct SensorHub {
    state: Arc<Mutex<HubState>>,
}

impl Default for SensorHub {
    fn default() -> Self {
        Self::new(DEFAULT_BUFFER)
    }
}

impl SensorHub {
    pub fn new(capacity: usize) -> Self {
        Self {
            state: Arc::new(Mutex::new(HubState {
                sender: None,
                generation: 0,
                capacity: capacity.max(1),
                published: 0,
                dropped: 0,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HubState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Start receiving samples. Replaces any previous subscription.
    pub fn subscribe(&self) -> SensorSubscription {
        let mut state = self.lock();
        let (tx, rx) = mpsc::channel(state.capacity);
        state.generation = state.generation.wrapping_add(1);
        state.sender = Some(tx);
        debug!(generation = state.generation, "sensor subscribed");

        SensorSubscription {
            rx,
            hub: self.clone(),
            generation: state.generation,
        }
    }

    /// Offer a sample to the current subscriber.
    ///
    /// Returns `false` when nobody is subscribed or the subscriber is full.
    pub fn publish(&self, sample: AccelSample) -> bool {
        let mut state = self.lock();
        let delivered = match state.sender.as_ref() {
            Some(tx) => tx.try_send(sample).is_ok(),
            None => false,
        };
        if delivered {
            state.published += 1;
        } else {
            state.dropped += 1;
        }
        delivered
    }

    pub fn is_subscribed(&self) -> bool {
        self.lock().sender.is_some()
    }

    /// `(delivered, dropped)` sample counters.
    pub fn counters(&self) -> (u64, u64) {
        let state = self.lock();
        (state.published, state.dropped)
    }

    fn release(&self, generation: u64) {
        let mut state = self.lock();
        if state.generation == generation {
            state.sender = None;
            debug!(generation, "sensor released");
        }
    }
}

/// Live subscription. Samples are delivered until this is dropped.
#[derive(Debug)]
pub struct SensorSubscription {
    rx: mpsc::Receiver<AccelSample>,
    hub: SensorHub,
    generation: u64,
}

impl SensorSubscription {
    /// Next buffered sample, without waiting.
    pub fn try_recv(&mut self) -> Option<AccelSample> {
        self.rx.try_recv().ok()
    }

    /// Wait for the next sample. `None` once the subscription was replaced.
    pub async fn recv(&mut self) -> Option<AccelSample> {
        self.rx.recv().await
    }

    /// Drain every buffered sample.
    pub fn drain(&mut self) -> Vec<AccelSample> {
        let mut out = Vec::new();
        while let Some(s) = self.try_recv() {
            out.push(s);
        }
        out
    }
}

impl Drop for SensorSubscription {
    fn drop(&mut self) {
        self.hub.release(self.generation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_without_subscriber_are_dropped() {
        let hub = SensorHub::default();
        assert!(!hub.publish(AccelSample::from_z(0.9)));
        assert_eq!(hub.counters(), (0, 1));

        let mut sub = hub.subscribe();
        assert!(sub.try_recv().is_none());
    }

    #[test]
    fn subscriber_receives_in_order() {
        let hub = SensorHub::default();
        let mut sub = hub.subscribe();
        for z in [0.0, 0.9, -0.9] {
            assert!(hub.publish(AccelSample::from_z(z)));
        }
        let zs: Vec<f32> = sub.drain().into_iter().map(|s| s.z).collect();
        assert_eq!(zs, vec![0.0, 0.9, -0.9]);
    }

    #[test]
    fn dropping_subscription_releases_it() {
        let hub = SensorHub::default();
        {
            let _sub = hub.subscribe();
            assert!(hub.is_subscribed());
        }
        assert!(!hub.is_subscribed());
        assert!(!hub.publish(AccelSample::from_z(0.9)));
    }

    #[test]
    fn stale_drop_does_not_release_newer_subscription() {
        let hub = SensorHub::default();
        let old = hub.subscribe();
        let mut new = hub.subscribe();
        drop(old);
        assert!(hub.is_subscribed());
        assert!(hub.publish(AccelSample::from_z(0.5)));
        assert_eq!(new.try_recv(), Some(AccelSample::from_z(0.5)));
    }

    #[test]
    fn full_buffer_drops_samples() {
        let hub = SensorHub::new(2);
        let mut sub = hub.subscribe();
        assert!(hub.publish(AccelSample::from_z(0.1)));
        assert!(hub.publish(AccelSample::from_z(0.2)));
        assert!(!hub.publish(AccelSample::from_z(0.3)));
        assert_eq!(sub.drain().len(), 2);
        assert_eq!(hub.counters(), (2, 1));
    }
}
