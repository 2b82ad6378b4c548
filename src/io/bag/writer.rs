//! Bag file writer.

use std::fs::File;
use std::io::{BufWriter, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use crate::core::types::{Detection, OdometrySample, Timestamped};
use crate::error::Result;

use super::types::{BagHeader, BagInfo, BagMessage, HEADER_SIZE};

/// Bag file writer.
///
/// Appends length-prefixed Postcard messages after a reserved header
/// block; `finish()` seeks back and writes the header with final
/// statistics.
///
/// # Example
///
/// ```ignore
/// use katha_nav::io::bag::BagWriter;
/// use katha_nav::core::types::{OdometrySample, Position3D, Timestamped};
///
/// let mut writer = BagWriter::create("run.bag")?;
/// writer.write_odometry(&Timestamped::new(
///     OdometrySample::at_position(Position3D::new(0.0, 0.0, 0.0)),
///     1_000_000,
/// ))?;
/// let info = writer.finish()?;
/// println!("Wrote {} messages", info.message_count);
/// ```
pub struct BagWriter {
    writer: BufWriter<File>,
    path: PathBuf,
    message_count: u64,
    odometry_count: u64,
    detection_count: u64,
    start_time_us: Option<u64>,
    end_time_us: u64,
}

impl BagWriter {
    /// Create a new bag writer at the specified path.
    ///
    /// The file is created immediately with the header space reserved.
    /// Call `finish()` to write the final header and close the file.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path)?;
        let mut writer = BufWriter::new(file);

        writer.write_all(&[0u8; HEADER_SIZE])?;

        Ok(Self {
            writer,
            path,
            message_count: 0,
            odometry_count: 0,
            detection_count: 0,
            start_time_us: None,
            end_time_us: 0,
        })
    }

    /// Write an odometry sample.
    pub fn write_odometry(&mut self, sample: &Timestamped<OdometrySample>) -> Result<()> {
        self.odometry_count += 1;
        self.write_message(&BagMessage::Odometry(sample.clone()))
    }

    /// Write a detection set for one frame.
    pub fn write_detections(&mut self, detections: &Timestamped<Vec<Detection>>) -> Result<()> {
        self.detection_count += 1;
        self.write_message(&BagMessage::Detections(detections.clone()))
    }

    /// Write a generic bag message.
    pub fn write_message(&mut self, msg: &BagMessage) -> Result<()> {
        let timestamp = msg.timestamp_us();

        if self.start_time_us.is_none() {
            self.start_time_us = Some(timestamp);
        }
        self.end_time_us = timestamp;

        let bytes = postcard::to_allocvec(msg)?;

        let len = bytes.len() as u32;
        self.writer.write_all(&len.to_le_bytes())?;
        self.writer.write_all(&bytes)?;

        self.message_count += 1;
        Ok(())
    }

    /// Get current message count.
    pub fn message_count(&self) -> u64 {
        self.message_count
    }

    /// Get current recording duration in microseconds.
    pub fn duration_us(&self) -> u64 {
        self.end_time_us
            .saturating_sub(self.start_time_us.unwrap_or(0))
    }

    /// Finalize and close the bag file.
    ///
    /// Writes the header with final statistics and returns file info.
    /// This method consumes the writer.
    pub fn finish(mut self) -> Result<BagInfo> {
        self.writer.flush()?;

        let file_size = self.writer.stream_position()?;

        self.writer.seek(SeekFrom::Start(0))?;

        let header = BagHeader {
            start_time_us: self.start_time_us.unwrap_or(0),
            end_time_us: self.end_time_us,
            message_count: self.message_count,
            ..BagHeader::new()
        };

        // Serialize into the fixed-size reserved block.
        let header_bytes = postcard::to_allocvec(&header)?;
        let mut header_buffer = [0u8; HEADER_SIZE];
        let copy_len = header_bytes.len().min(HEADER_SIZE);
        header_buffer[..copy_len].copy_from_slice(&header_bytes[..copy_len]);
        self.writer.write_all(&header_buffer)?;

        self.writer.flush()?;

        let duration_us = self.duration_us();

        Ok(BagInfo {
            path: self.path,
            duration_us,
            message_count: self.message_count,
            file_size_bytes: file_size,
            odometry_count: self.odometry_count,
            detection_count: self.detection_count,
        })
    }
}
