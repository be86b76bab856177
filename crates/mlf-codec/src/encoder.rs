//! The log session: header emission plus the cyclic sample encoder.

use bytes::BufMut;

use crate::error::{EncodeError, Result};
use crate::header::{self, DEFAULT_MAX_NAME_LEN};
use crate::types::{Channel, SampleValue};

/// Per-session configuration.
#[derive(Debug, Clone)]
pub struct EncoderConfig {
    /// Maximum channel name length L; each header name slot is L+1 bytes.
    pub max_name_len: usize,
    /// When true (default), over-long names are clipped to `max_name_len`
    /// bytes. When false, they fail with [`EncodeError::NameTooLong`].
    pub truncate_names: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            max_name_len: DEFAULT_MAX_NAME_LEN,
            truncate_names: true,
        }
    }
}

/// A single log session: owns the channel descriptors and the cyclic
/// cursor, and encodes the header and samples into caller-supplied sinks.
///
/// Samples must be fed one value per channel, in declared order; the
/// cursor rotates through the channels on every successful call, so a
/// steady `encode_sample` loop needs no channel bookkeeping on the caller
/// side. The encoder never retains a reference to a sink between calls —
/// each call writes at the sink's current position and reports its size,
/// and the caller persists the bytes however it likes.
///
/// Not synchronized: one session per log stream, accessed from one thread.
#[derive(Debug)]
pub struct LogEncoder {
    channels: Vec<Channel>,
    config: EncoderConfig,
    cursor: usize,
    header_written: bool,
}

impl LogEncoder {
    /// Create a session with default configuration.
    ///
    /// # Errors
    /// See [`LogEncoder::with_config`].
    pub fn new(channels: Vec<Channel>) -> Result<Self> {
        Self::with_config(channels, EncoderConfig::default())
    }

    /// Create a session with explicit configuration.
    ///
    /// # Errors
    /// [`EncodeError::InvalidChannelCount`] for an empty channel list;
    /// [`EncodeError::NameTooLong`] if a name exceeds the slot and
    /// truncation is disabled.
    pub fn with_config(channels: Vec<Channel>, config: EncoderConfig) -> Result<Self> {
        if channels.is_empty() {
            return Err(EncodeError::InvalidChannelCount);
        }
        if !config.truncate_names {
            for channel in &channels {
                let len = channel.name.len();
                if len > config.max_name_len {
                    return Err(EncodeError::NameTooLong {
                        name: channel.name.clone(),
                        len,
                        max: config.max_name_len,
                    });
                }
            }
        }
        Ok(Self {
            channels,
            config,
            cursor: 0,
            header_written: false,
        })
    }

    /// Size of this session's header in bytes, without encoding anything.
    #[must_use]
    pub fn header_size(&self) -> usize {
        header::header_size(self.channels.len(), self.config.max_name_len)
    }

    /// Write the file header and arm the sample cursor.
    ///
    /// Must be called before any sample, once per session; calling it
    /// again restarts the channel cycle from the first channel.
    ///
    /// # Errors
    /// [`EncodeError::BufferTooSmall`] if the sink cannot hold the whole
    /// header. Nothing is written on failure.
    pub fn write_header<B: BufMut>(&mut self, dst: &mut B) -> Result<usize> {
        let needed = self.header_size();
        let remaining = dst.remaining_mut();
        if remaining < needed {
            return Err(EncodeError::BufferTooSmall { needed, remaining });
        }

        let written = header::write_header(&self.channels, self.config.max_name_len, dst);
        self.cursor = 0;
        self.header_written = true;
        tracing::debug!(
            channels = self.channels.len(),
            header_bytes = written,
            "log header encoded"
        );
        Ok(written)
    }

    /// Encode one sample for the current channel and advance the cursor.
    ///
    /// Writes exactly `width` bytes at the sink's current position and
    /// returns `width`. Non-datetime values are copied in their
    /// little-endian fixed-width representation; datetime values go
    /// through the packed-word encoding.
    ///
    /// # Errors
    /// [`EncodeError::HeaderNotInitialized`] before [`Self::write_header`],
    /// [`EncodeError::TypeMismatch`] if the value's tag differs from the
    /// current channel's declared type, [`EncodeError::BufferTooSmall`] on
    /// short capacity, and [`EncodeError::Time`] for unpackable datetimes.
    /// The cursor does not advance on any failure.
    pub fn encode_sample<B: BufMut>(&mut self, value: SampleValue, dst: &mut B) -> Result<usize> {
        if !self.header_written {
            return Err(EncodeError::HeaderNotInitialized);
        }

        let expected = self.channels[self.cursor].ty;
        let got = value.channel_type();
        if got != expected {
            return Err(EncodeError::TypeMismatch { expected, got });
        }

        let width = expected.width();
        let remaining = dst.remaining_mut();
        if remaining < width {
            return Err(EncodeError::BufferTooSmall {
                needed: width,
                remaining,
            });
        }

        match value {
            SampleValue::Int8(v) => dst.put_i8(v),
            SampleValue::Int16(v) => dst.put_i16_le(v),
            SampleValue::Int32(v) => dst.put_i32_le(v),
            SampleValue::Int64(v) => dst.put_i64_le(v),
            SampleValue::UInt8(v) => dst.put_u8(v),
            SampleValue::UInt16(v) => dst.put_u16_le(v),
            SampleValue::UInt32(v) => dst.put_u32_le(v),
            SampleValue::UInt64(v) => dst.put_u64_le(v),
            SampleValue::Float32(v) => dst.put_f32_le(v),
            SampleValue::Float64(v) => dst.put_f64_le(v),
            SampleValue::Bool(v) => dst.put_u8(u8::from(v)),
            SampleValue::DateTime(v) => dst.put_slice(&v.to_le_bytes()?),
        }

        self.cursor = (self.cursor + 1) % self.channels.len();
        Ok(width)
    }

    /// Current position within the channel cycle.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of channels in the cycle.
    #[must_use]
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// The channel the next sample will be encoded for.
    #[must_use]
    pub fn current_channel(&self) -> &Channel {
        &self.channels[self.cursor]
    }

    /// The declared channels, in cycle order.
    #[must_use]
    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    /// Total encoded bytes of one full cycle (one sample per channel).
    #[must_use]
    pub fn cycle_size(&self) -> usize {
        self.channels.iter().map(|c| c.ty.width()).sum()
    }

    /// Current session configuration.
    #[must_use]
    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }
}
