use crate::types::ChannelType;

/// Errors that can occur while building a session or encoding.
///
/// All variants are local, synchronous and recoverable; a failed call never
/// advances the channel cursor.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// The channel list is empty.
    #[error("channel list is empty, a log needs at least one channel")]
    InvalidChannelCount,

    /// A raw type code is zero or outside the defined range.
    #[error("invalid channel type code {code} (valid codes are 1-12)")]
    InvalidChannelType { code: u8 },

    /// A channel name exceeds the name slot and truncation is disabled.
    #[error("channel name {name:?} too long ({len} bytes, max {max})")]
    NameTooLong {
        name: String,
        len: usize,
        max: usize,
    },

    /// The output sink has less capacity than the encoded size.
    #[error("output buffer too small ({remaining} bytes remaining, need {needed})")]
    BufferTooSmall { needed: usize, remaining: usize },

    /// A sample was encoded before the header was written.
    #[error("header must be written before encoding samples")]
    HeaderNotInitialized,

    /// The sample's tag does not match the current channel's declared type.
    #[error("sample type {got:?} does not match declared channel type {expected:?}")]
    TypeMismatch {
        expected: ChannelType,
        got: ChannelType,
    },

    /// A datetime value could not be packed.
    #[error("datetime encoding failed: {0}")]
    Time(#[from] mlf_time::TimeError),
}

pub type Result<T> = std::result::Result<T, EncodeError>;
