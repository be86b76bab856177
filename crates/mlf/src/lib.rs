//! MLF (MAHDA Log File) binary log encoding.
//!
//! An MLF file is a self-describing header followed by a continuous,
//! delimiter-free stream of fixed-width sample records, one value per
//! channel per cycle. The encoder writes into caller-supplied byte sinks
//! and never performs I/O itself — file, flash or network persistence is
//! the caller's business.
//!
//! # Example
//! ```
//! use bytes::BytesMut;
//! use mlf::{Channel, ChannelType, DateTime, LogEncoder};
//!
//! let mut encoder = LogEncoder::new(vec![
//!     Channel::new("Channel Time", ChannelType::DateTime),
//!     Channel::new("Channel INT32", ChannelType::Int32),
//!     Channel::new("Channel FLOAT32", ChannelType::Float32),
//! ])?;
//!
//! let mut buf = BytesMut::new();
//! encoder.write_header(&mut buf)?;
//!
//! // One cycle: values in declared channel order.
//! encoder.encode_sample(DateTime::new(1_700_000_000, 0).into(), &mut buf)?;
//! encoder.encode_sample(123_456i32.into(), &mut buf)?;
//! encoder.encode_sample(123.456f32.into(), &mut buf)?;
//!
//! assert_eq!(buf.len(), encoder.header_size() + encoder.cycle_size());
//! # Ok::<(), mlf::EncodeError>(())
//! ```
//!
//! See `mlf-codec` for the wire layout and `mlf-time` for the calendar
//! and packed-datetime rules.

pub use mlf_codec::{
    header_size, Channel, ChannelType, EncodeError, EncoderConfig, LogEncoder, Result,
    SampleValue, DEFAULT_MAX_NAME_LEN, FIXED_HEADER_SIZE, FLAG_BIG_ENDIAN, FORMAT_VERSION,
    HEADER_TAG, LOG_TYPE,
};
pub use mlf_time::{
    civil_to_epoch_seconds, is_leap_year, CivilTime, DateTime, Epoch, TimeError, FRACTION_BITS,
    MAX_FRACTION, MAX_SECOND, SECOND_BITS,
};
