//! Channel data types, descriptors, and tagged sample values.

use mlf_time::DateTime;

use crate::error::{EncodeError, Result};

/// Data type of a channel, one byte on the wire.
///
/// Code 0 is reserved as the invalid marker and must never appear in a
/// valid file, so it has no variant here; [`ChannelType::from_code`]
/// rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ChannelType {
    Int8 = 1,
    Int16 = 2,
    Int32 = 3,
    Int64 = 4,
    UInt8 = 5,
    UInt16 = 6,
    UInt32 = 7,
    UInt64 = 8,
    Float32 = 9,
    Float64 = 10,
    /// One byte per value, 0 or 1.
    Bool = 11,
    /// 8-byte packed word, see `mlf_time::DateTime`.
    DateTime = 12,
}

impl ChannelType {
    /// Encoded width of one sample of this type, in bytes.
    #[must_use]
    pub const fn width(self) -> usize {
        match self {
            Self::Int8 | Self::UInt8 | Self::Bool => 1,
            Self::Int16 | Self::UInt16 => 2,
            Self::Int32 | Self::UInt32 | Self::Float32 => 4,
            Self::Int64 | Self::UInt64 | Self::Float64 | Self::DateTime => 8,
        }
    }

    /// The wire code of this type.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Parse a raw wire code.
    ///
    /// # Errors
    /// [`EncodeError::InvalidChannelType`] for code 0 (the reserved invalid
    /// marker) or anything above 12.
    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            1 => Ok(Self::Int8),
            2 => Ok(Self::Int16),
            3 => Ok(Self::Int32),
            4 => Ok(Self::Int64),
            5 => Ok(Self::UInt8),
            6 => Ok(Self::UInt16),
            7 => Ok(Self::UInt32),
            8 => Ok(Self::UInt64),
            9 => Ok(Self::Float32),
            10 => Ok(Self::Float64),
            11 => Ok(Self::Bool),
            12 => Ok(Self::DateTime),
            _ => Err(EncodeError::InvalidChannelType { code }),
        }
    }
}

/// One named, typed data column. Immutable for the life of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Channel {
    pub name: String,
    pub ty: ChannelType,
}

impl Channel {
    pub fn new(name: impl Into<String>, ty: ChannelType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// A sample value carrying its own type tag.
///
/// The tag is validated against the declared channel type at encode time,
/// so a session fed values in the wrong order fails loudly instead of
/// writing a stream that only a hex dump can debug.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SampleValue {
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    UInt8(u8),
    UInt16(u16),
    UInt32(u32),
    UInt64(u64),
    Float32(f32),
    Float64(f64),
    Bool(bool),
    DateTime(DateTime),
}

impl SampleValue {
    /// The channel type this value encodes as.
    #[must_use]
    pub const fn channel_type(&self) -> ChannelType {
        match self {
            Self::Int8(_) => ChannelType::Int8,
            Self::Int16(_) => ChannelType::Int16,
            Self::Int32(_) => ChannelType::Int32,
            Self::Int64(_) => ChannelType::Int64,
            Self::UInt8(_) => ChannelType::UInt8,
            Self::UInt16(_) => ChannelType::UInt16,
            Self::UInt32(_) => ChannelType::UInt32,
            Self::UInt64(_) => ChannelType::UInt64,
            Self::Float32(_) => ChannelType::Float32,
            Self::Float64(_) => ChannelType::Float64,
            Self::Bool(_) => ChannelType::Bool,
            Self::DateTime(_) => ChannelType::DateTime,
        }
    }

    /// Encoded width in bytes.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.channel_type().width()
    }
}

macro_rules! impl_from_sample {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for SampleValue {
                fn from(v: $ty) -> Self {
                    Self::$variant(v)
                }
            }
        )*
    };
}

impl_from_sample! {
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    u8 => UInt8,
    u16 => UInt16,
    u32 => UInt32,
    u64 => UInt64,
    f32 => Float32,
    f64 => Float64,
    bool => Bool,
    DateTime => DateTime,
}
