//! Header and cyclic sample encoding for the MLF binary log format.
//!
//! An MLF file is a fixed-layout header followed by a delimiter-free stream
//! of fixed-width sample records, one value per channel per cycle. The
//! encoder owns no I/O: every encode call writes into a caller-supplied
//! [`bytes::BufMut`] sink and reports how many bytes it produced. Pass a
//! `&mut [u8]` for a fixed-capacity buffer (writes fail with
//! [`EncodeError::BufferTooSmall`] instead of overflowing) or a
//! `&mut BytesMut` if growth is acceptable.
//!
//! Sample values carry their own type tag and are checked against the
//! declared channel type at encode time, so a call-order slip surfaces as
//! [`EncodeError::TypeMismatch`] rather than a silently corrupt stream.

pub mod encoder;
pub mod error;
pub mod header;
pub mod types;

pub use encoder::{EncoderConfig, LogEncoder};
pub use error::{EncodeError, Result};
pub use header::{
    header_size, DEFAULT_MAX_NAME_LEN, FIXED_HEADER_SIZE, FLAG_BIG_ENDIAN, FORMAT_VERSION,
    HEADER_TAG, LOG_TYPE,
};
pub use types::{Channel, ChannelType, SampleValue};
