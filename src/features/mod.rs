//! Per-message feature extraction for command-prompt construction.
//!
//! Collects the raw material a downstream generative model needs to
//! produce a temporal-logic command: yaw turn rates from odometry, object
//! sightings from the detections channel, and the full timestamp list.
//! Collection is streaming; state grows only with the number of retained
//! features.

use crate::core::types::{Detection, Timestamped};
use crate::io::bag::BagMessage;

/// Features extracted from a recorded run.
#[derive(Debug, Clone, Default)]
pub struct TrajectoryFeatures {
    /// Yaw turn rate (rad/s) per odometry message, in log order
    pub turn_rates: Vec<Timestamped<f32>>,
    /// One entry per detected object, in log order
    pub object_events: Vec<Timestamped<Detection>>,
    /// Timestamp of every consumed message, in log order
    pub timestamps_us: Vec<u64>,
}

impl TrajectoryFeatures {
    /// Create an empty feature set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect features from a sequence of decoded messages.
    pub fn collect<I>(messages: I) -> Self
    where
        I: IntoIterator<Item = BagMessage>,
    {
        let mut features = Self::new();
        for msg in messages {
            features.push(&msg);
        }
        features
    }

    /// Consume one decoded message.
    pub fn push(&mut self, msg: &BagMessage) {
        self.timestamps_us.push(msg.timestamp_us());
        match msg {
            BagMessage::Odometry(sample) => {
                self.turn_rates
                    .push(Timestamped::new(sample.data.angular_rate_z, sample.timestamp_us));
            }
            BagMessage::Detections(set) => {
                for detection in &set.data {
                    self.object_events
                        .push(Timestamped::new(detection.clone(), set.timestamp_us));
                }
            }
        }
    }

    /// Number of messages consumed.
    pub fn message_count(&self) -> usize {
        self.timestamps_us.len()
    }

    /// True when no messages have been consumed.
    pub fn is_empty(&self) -> bool {
        self.timestamps_us.is_empty()
    }
}
