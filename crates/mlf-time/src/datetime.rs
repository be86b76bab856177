//! The packed MLF datetime word.
//!
//! Wire format (64-bit little-endian word, bit 0 = least significant):
//!
//! ```text
//! ┌────────────────────┬──────────────────────────────┐
//! │ bits 0-29          │ bits 30-63                   │
//! │ fraction (30 bits) │ second count (34 bits)       │
//! └────────────────────┴──────────────────────────────┘
//! ```
//!
//! The word is built as one `u64` composite and then byte-sliced, so the
//! non-byte-aligned split at bit 30 never has to be assembled by hand.

use crate::calendar::{civil_to_epoch_seconds, CivilTime, Epoch};
use crate::error::{Result, TimeError};

/// Bits reserved for the sub-second fraction.
pub const FRACTION_BITS: u32 = 30;

/// Bits available for the second count.
pub const SECOND_BITS: u32 = 34;

/// Largest encodable sub-second fraction.
pub const MAX_FRACTION: u32 = (1 << FRACTION_BITS) - 1;

/// Largest encodable second count.
pub const MAX_SECOND: u64 = (1 << SECOND_BITS) - 1;

/// A datetime channel value: seconds since the epoch plus a sub-second
/// fraction (caller-defined resolution, microseconds in practice).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DateTime {
    /// Seconds since the epoch, at most [`MAX_SECOND`].
    pub second: u64,
    /// Sub-second fraction, at most [`MAX_FRACTION`].
    pub fraction: u32,
}

impl DateTime {
    pub fn new(second: u64, fraction: u32) -> Self {
        Self { second, fraction }
    }

    /// Build a datetime from a civil date/time under the given epoch.
    ///
    /// # Errors
    /// Calendar errors from [`civil_to_epoch_seconds`].
    pub fn from_civil(epoch: Epoch, t: CivilTime, fraction: u32) -> Result<Self> {
        let second = civil_to_epoch_seconds(epoch, t)?;
        Ok(Self {
            second: second as u64,
            fraction,
        })
    }

    /// Pack into the 64-bit composite word.
    ///
    /// # Errors
    /// [`TimeError::FieldOverflow`] if either field exceeds its bit budget.
    /// Overflow is a hard failure — truncating here would silently corrupt
    /// every timestamp after the wrap.
    pub fn pack(self) -> Result<u64> {
        if self.fraction > MAX_FRACTION {
            return Err(TimeError::FieldOverflow {
                field: "fraction",
                value: u64::from(self.fraction),
                max: u64::from(MAX_FRACTION),
            });
        }
        if self.second > MAX_SECOND {
            return Err(TimeError::FieldOverflow {
                field: "second",
                value: self.second,
                max: MAX_SECOND,
            });
        }
        Ok(u64::from(self.fraction) | (self.second << FRACTION_BITS))
    }

    /// Pack and slice into the 8-byte little-endian wire form.
    ///
    /// # Errors
    /// Same as [`DateTime::pack`].
    pub fn to_le_bytes(self) -> Result<[u8; 8]> {
        Ok(self.pack()?.to_le_bytes())
    }

    /// Split a packed word back into its fields.
    #[must_use]
    pub fn unpack(word: u64) -> Self {
        Self {
            second: word >> FRACTION_BITS,
            fraction: (word & u64::from(MAX_FRACTION)) as u32,
        }
    }
}
