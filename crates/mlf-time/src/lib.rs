//! Civil calendar and packed datetime support for MLF logs.
//!
//! MLF datetime channels store an 8-byte little-endian word combining a
//! 30-bit sub-second fraction with a 34-bit second count measured from a
//! configurable epoch. This crate provides:
//! - The calendar conversion from a civil date/time to epoch seconds
//!   (proleptic Gregorian, explicit pre-epoch failure).
//! - The [`DateTime`] word with overflow-checked packing.
//!
//! No clock access happens here — callers supply civil time from whatever
//! RTC or host clock they have.

pub mod calendar;
pub mod datetime;
pub mod error;

pub use calendar::{civil_to_epoch_seconds, is_leap_year, CivilTime, Epoch};
pub use datetime::{DateTime, FRACTION_BITS, MAX_FRACTION, MAX_SECOND, SECOND_BITS};
pub use error::{Result, TimeError};
