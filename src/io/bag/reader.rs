//! Bag file reader.

use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;

use log::debug;

use crate::core::types::{Detection, OdometrySample, Timestamped};
use crate::error::{KathaError, Result};

use super::types::{BagHeader, BagMessage, ChannelKind, BAG_VERSION, HEADER_SIZE};

/// Maximum accepted size of a single message payload.
const MAX_MESSAGE_BYTES: usize = 10_000_000;

/// Sequential bag file reader.
///
/// Messages are decoded once into the typed [`BagMessage`] enum at this
/// boundary; per-channel iterators filter the stream for downstream
/// consumers. Reading is pull-based with no pacing: an offline analysis
/// reads as fast as the disk allows.
///
/// # Example
///
/// ```ignore
/// use katha_nav::io::bag::BagReader;
///
/// let mut reader = BagReader::open("run.bag")?;
/// while let Some(msg) = reader.next_message()? {
///     println!("[{:>12} us] {}", msg.timestamp_us(), msg.channel());
/// }
/// ```
pub struct BagReader {
    reader: BufReader<File>,
    header: BagHeader,
    messages_read: u64,
}

impl BagReader {
    /// Open a bag file and validate its header.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);

        let mut header_buffer = [0u8; HEADER_SIZE];
        reader.read_exact(&mut header_buffer)?;

        let header: BagHeader = postcard::from_bytes(&header_buffer)
            .map_err(|e| KathaError::InvalidFormat(format!("Failed to parse header: {}", e)))?;

        if !header.is_valid() {
            return Err(KathaError::InvalidFormat(
                "Invalid bag file magic bytes".to_string(),
            ));
        }
        if header.version != BAG_VERSION {
            return Err(KathaError::InvalidFormat(format!(
                "Unsupported bag version: {}",
                header.version
            )));
        }

        debug!(
            "Opened bag: {} messages, {:.3}s",
            header.message_count,
            header.duration_secs()
        );

        Ok(Self {
            reader,
            header,
            messages_read: 0,
        })
    }

    /// Get the bag file header.
    pub fn header(&self) -> &BagHeader {
        &self.header
    }

    /// Get total message count from the header.
    pub fn message_count(&self) -> u64 {
        self.header.message_count
    }

    /// Get number of messages read so far.
    pub fn messages_read(&self) -> u64 {
        self.messages_read
    }

    /// Get total duration in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.header.duration_secs()
    }

    /// Read the next message.
    ///
    /// Returns `None` when end of file is reached.
    pub fn next_message(&mut self) -> Result<Option<BagMessage>> {
        // Length prefix (4 bytes, little-endian)
        let mut len_bytes = [0u8; 4];
        match self.reader.read_exact(&mut len_bytes) {
            Ok(_) => {}
            Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => return Ok(None),
            Err(e) => return Err(e.into()),
        }

        let len = u32::from_le_bytes(len_bytes) as usize;
        if len > MAX_MESSAGE_BYTES {
            return Err(KathaError::InvalidFormat(format!(
                "Message too large: {} bytes",
                len
            )));
        }

        let mut payload = vec![0u8; len];
        self.reader.read_exact(&mut payload)?;

        let msg: BagMessage = postcard::from_bytes(&payload)?;

        self.messages_read += 1;

        Ok(Some(msg))
    }

    /// Reset to the beginning of the message stream.
    pub fn rewind(&mut self) -> Result<()> {
        self.reader.seek(SeekFrom::Start(HEADER_SIZE as u64))?;
        self.messages_read = 0;
        Ok(())
    }

    /// Iterate over only odometry messages.
    pub fn odometry_iter(
        &mut self,
    ) -> impl Iterator<Item = Result<Timestamped<OdometrySample>>> + '_ {
        std::iter::from_fn(move || loop {
            match self.next_message() {
                Ok(Some(BagMessage::Odometry(sample))) => return Some(Ok(sample)),
                Ok(Some(_)) => continue,
                Ok(None) => return None,
                Err(e) => return Some(Err(e)),
            }
        })
    }

    /// Iterate over only detection messages.
    pub fn detections_iter(
        &mut self,
    ) -> impl Iterator<Item = Result<Timestamped<Vec<Detection>>>> + '_ {
        std::iter::from_fn(move || loop {
            match self.next_message() {
                Ok(Some(BagMessage::Detections(set))) => return Some(Ok(set)),
                Ok(Some(_)) => continue,
                Ok(None) => return None,
                Err(e) => return Some(Err(e)),
            }
        })
    }

    /// Collect the whole odometry channel from the start of the bag.
    ///
    /// An empty odometry channel is a reader-level failure
    /// ([`KathaError::EmptyChannel`]), distinct from the segmenter's
    /// valid empty-input case: a caller asking for a track must be able
    /// to tell "nothing recorded" from "recorded but stationary".
    pub fn odometry_track(&mut self) -> Result<Vec<Timestamped<OdometrySample>>> {
        self.rewind()?;
        let track: Vec<_> = self
            .odometry_iter()
            .collect::<Result<Vec<_>>>()?;
        if track.is_empty() {
            return Err(KathaError::EmptyChannel(ChannelKind::Odometry));
        }
        Ok(track)
    }
}

/// Iterator implementation for convenient `for msg in reader { }` syntax.
impl Iterator for BagReader {
    type Item = Result<BagMessage>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_message() {
            Ok(Some(msg)) => Some(Ok(msg)),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}
