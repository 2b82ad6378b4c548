//! Core data types for the bag file format.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::types::{Detection, OdometrySample, Timestamped};

/// Magic bytes at start of bag file.
pub const BAG_MAGIC: [u8; 4] = *b"KBAG";

/// Current bag file format version.
pub const BAG_VERSION: u16 = 1;

/// Size of the bag file header in bytes.
pub const HEADER_SIZE: usize = 64;

/// Bag file header (64 bytes fixed size).
///
/// Stored at the beginning of every bag file. Contains metadata about
/// the recording and pointers to optional sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BagHeader {
    /// Magic bytes: "KBAG"
    pub magic: [u8; 4],
    /// File format version
    pub version: u16,
    /// Feature flags (reserved, currently always 0)
    pub flags: u16,
    /// Timestamp of first message (microseconds since epoch)
    pub start_time_us: u64,
    /// Timestamp of last message (microseconds since epoch)
    pub end_time_us: u64,
    /// Total number of messages in the file
    pub message_count: u64,
    /// Byte offset to index section (0 if no index)
    pub index_offset: u64,
    /// Reserved for future use
    pub reserved: [u8; 24],
}

impl BagHeader {
    /// Create a new header with default values.
    pub fn new() -> Self {
        Self {
            magic: BAG_MAGIC,
            version: BAG_VERSION,
            flags: 0,
            start_time_us: 0,
            end_time_us: 0,
            message_count: 0,
            index_offset: 0,
            reserved: [0; 24],
        }
    }

    /// Check if magic bytes are valid.
    pub fn is_valid(&self) -> bool {
        self.magic == BAG_MAGIC
    }

    /// Get recording duration in microseconds.
    pub fn duration_us(&self) -> u64 {
        self.end_time_us.saturating_sub(self.start_time_us)
    }

    /// Get recording duration in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.duration_us() as f64 / 1_000_000.0
    }
}

impl Default for BagHeader {
    fn default() -> Self {
        Self::new()
    }
}

/// Semantic channel of a bag message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelKind {
    /// Odometry pose estimates
    Odometry,
    /// Pre-computed object detections
    Detections,
}

impl ChannelKind {
    /// Stable lowercase name, as used in diagnostics and config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelKind::Odometry => "odometry",
            ChannelKind::Detections => "detections",
        }
    }
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Message types stored in bag files.
///
/// The tagged enum is decoded once at the reader boundary; each variant
/// corresponds to one channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum BagMessage {
    /// Odometry pose estimate
    Odometry(Timestamped<OdometrySample>),
    /// Object detections for one camera frame
    Detections(Timestamped<Vec<Detection>>),
}

impl BagMessage {
    /// Get the timestamp of this message in microseconds.
    pub fn timestamp_us(&self) -> u64 {
        match self {
            BagMessage::Odometry(msg) => msg.timestamp_us,
            BagMessage::Detections(msg) => msg.timestamp_us,
        }
    }

    /// The channel this message belongs to.
    pub fn channel(&self) -> ChannelKind {
        match self {
            BagMessage::Odometry(_) => ChannelKind::Odometry,
            BagMessage::Detections(_) => ChannelKind::Detections,
        }
    }

    /// Get as odometry if this is that channel.
    pub fn as_odometry(&self) -> Option<&Timestamped<OdometrySample>> {
        match self {
            BagMessage::Odometry(msg) => Some(msg),
            _ => None,
        }
    }

    /// Get as detections if this is that channel.
    pub fn as_detections(&self) -> Option<&Timestamped<Vec<Detection>>> {
        match self {
            BagMessage::Detections(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Information about a bag file.
///
/// Returned after writing or when inspecting a bag file.
#[derive(Debug, Clone)]
pub struct BagInfo {
    /// Path to the bag file
    pub path: PathBuf,
    /// Recording duration in microseconds
    pub duration_us: u64,
    /// Total number of messages
    pub message_count: u64,
    /// File size in bytes
    pub file_size_bytes: u64,
    /// Number of odometry messages
    pub odometry_count: u64,
    /// Number of detection messages
    pub detection_count: u64,
}

impl BagInfo {
    /// Get recording duration in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.duration_us as f64 / 1_000_000.0
    }

    /// Get file size in megabytes.
    pub fn file_size_mb(&self) -> f64 {
        self.file_size_bytes as f64 / 1_048_576.0
    }

    /// Get average message rate in Hz.
    pub fn message_rate_hz(&self) -> f64 {
        if self.duration_us == 0 {
            0.0
        } else {
            self.message_count as f64 / self.duration_secs()
        }
    }
}
