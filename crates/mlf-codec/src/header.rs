//! MLF header layout and emission.
//!
//! Header wire format (all multi-byte fields little-endian):
//!
//! | Offset | Size | Field |
//! |--------|------|-------|
//! | 0 | 12 | ASCII tag `MAHDALOGFILE`, no terminator |
//! | 12 | 4 | format version |
//! | 16 | 4 | log type |
//! | 20 | 4 | flags; bit 0 = endianness, 0 = little |
//! | 24 | 4 | channel count N |
//! | 28 | N | one type-code byte per channel |
//! | 28+N | N×(L+1) | name slots, zero-padded, truncated to L bytes + NUL |
//!
//! The sample stream follows immediately, with no delimiters; a reader
//! replays the channel type sequence to find record boundaries.

use bytes::BufMut;

use crate::types::Channel;

/// ASCII file tag, written without a terminator.
pub const HEADER_TAG: [u8; 12] = *b"MAHDALOGFILE";

/// Current format version.
pub const FORMAT_VERSION: u32 = 3;

/// Log type field. Only type 0 (cyclic sample log) is defined.
pub const LOG_TYPE: u32 = 0;

/// Flags bit 0: set for big-endian sample data. This encoder always
/// writes little-endian, so the flags word is always 0.
pub const FLAG_BIG_ENDIAN: u32 = 1;

/// Bytes before the per-channel tables: tag + version + log type + flags
/// + channel count.
pub const FIXED_HEADER_SIZE: usize = 28;

/// Default maximum channel name length L; each name slot is L+1 bytes.
pub const DEFAULT_MAX_NAME_LEN: usize = 20;

/// Total header size for a channel count and name slot length.
///
/// This is the size-only contract: callers sizing a buffer before any
/// encoding happens call this instead of a dry-run encode.
#[must_use]
pub const fn header_size(channel_count: usize, max_name_len: usize) -> usize {
    FIXED_HEADER_SIZE + channel_count + channel_count * (max_name_len + 1)
}

/// Emit the header. Capacity must already be checked by the caller.
///
/// Returns the number of bytes written, which always equals
/// [`header_size`] for the same arguments.
pub(crate) fn write_header<B: BufMut>(
    channels: &[Channel],
    max_name_len: usize,
    dst: &mut B,
) -> usize {
    dst.put_slice(&HEADER_TAG);
    dst.put_u32_le(FORMAT_VERSION);
    dst.put_u32_le(LOG_TYPE);
    dst.put_u32_le(0);
    dst.put_u32_le(channels.len() as u32);

    for channel in channels {
        dst.put_u8(channel.ty.code());
    }

    for channel in channels {
        let name = channel.name.as_bytes();
        let copy = name.len().min(max_name_len);
        dst.put_slice(&name[..copy]);
        // Zero padding fills the rest of the slot and guarantees the NUL
        // terminator, including for names truncated at exactly L bytes.
        dst.put_bytes(0, max_name_len + 1 - copy);
    }

    header_size(channels.len(), max_name_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_formula() {
        // 12 + 4 + 4 + 4 + 4 + N + N*(L+1)
        assert_eq!(header_size(1, 20), 28 + 1 + 21);
        assert_eq!(header_size(3, 20), 28 + 3 + 63);
        assert_eq!(header_size(5, 7), 28 + 5 + 40);
    }

    #[test]
    fn tag_is_twelve_ascii_bytes() {
        assert_eq!(HEADER_TAG.len(), 12);
        assert!(HEADER_TAG.iter().all(u8::is_ascii));
    }
}
