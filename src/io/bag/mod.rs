//! Bag file reading and writing for recorded sensor logs.
//!
//! A bag holds the time-ordered message stream of one robot run:
//! odometry poses and pre-computed object detections. The reader is the
//! single decode boundary — downstream code works with the typed
//! [`BagMessage`] enum and never inspects raw payloads.
//!
//! # File Format
//!
//! Bag files use a simple binary format with Postcard serialization:
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │ Header (64 bytes)                                │
//! │ - Magic: "KBAG" (4 bytes)                        │
//! │ - Version: u16                                   │
//! │ - Flags: u16                                     │
//! │ - Start time: u64 (microseconds)                 │
//! │ - End time: u64 (microseconds)                   │
//! │ - Message count: u64                             │
//! │ - Index offset: u64 (0 if no index)              │
//! │ - Reserved: 24 bytes                             │
//! ├──────────────────────────────────────────────────┤
//! │ Message Stream                                   │
//! │ [len:u32][postcard payload]...                   │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use katha_nav::io::bag::BagReader;
//!
//! let mut reader = BagReader::open("run.bag")?;
//! for sample in reader.odometry_iter() {
//!     let sample = sample?;
//!     println!("[{} us] {:?}", sample.timestamp_us, sample.data.position);
//! }
//! ```

mod reader;
mod types;
mod writer;

pub use reader::BagReader;
pub use types::{
    BagHeader, BagInfo, BagMessage, ChannelKind, BAG_MAGIC, BAG_VERSION, HEADER_SIZE,
};
pub use writer::BagWriter;
