//! Civil date to epoch-second conversion.
//!
//! The conversion counts whole days between the civil date and the epoch
//! date (year lengths summed across full years, plus day-of-year partial
//! sums at each end), then adds the time-of-day seconds. Leap years follow
//! the proleptic Gregorian rule, so century boundaries come out right:
//! 1900 is not a leap year, 2000 is.

use crate::error::{Result, TimeError};

const SECONDS_PER_DAY: i64 = 86_400;

/// A civil (wall-clock) date and time, no timezone attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CivilTime {
    pub year: i32,
    /// 1-based month.
    pub month: u8,
    /// 1-based day of month.
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl CivilTime {
    pub fn new(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }
}

/// Reference civil date from which second counts are measured.
///
/// Owned by the caller and passed per conversion — there is no process-wide
/// epoch constant. The epoch's time of day is always midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Epoch {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl Epoch {
    /// 1970-01-01T00:00:00, the default epoch.
    pub const UNIX: Epoch = Epoch {
        year: 1970,
        month: 1,
        day: 1,
    };
}

impl Default for Epoch {
    fn default() -> Self {
        Self::UNIX
    }
}

/// Proleptic Gregorian leap-year rule.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

const fn year_length(year: i32) -> i64 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

fn days_in_month(year: i32, month: u8) -> Option<u8> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => Some(if is_leap_year(year) { 29 } else { 28 }),
        _ => None,
    }
}

/// Zero-based day index within `year` (Jan 1 = 0).
fn day_of_year(year: i32, month: u8, day: u8) -> Result<i64> {
    let invalid = || TimeError::InvalidCivilDate { year, month, day };
    let month_len = days_in_month(year, month).ok_or_else(invalid)?;
    if day < 1 || day > month_len {
        return Err(invalid());
    }
    let mut days = i64::from(day) - 1;
    for m in 1..month {
        // Month validated above, every earlier month is valid too.
        days += i64::from(days_in_month(year, m).unwrap_or(0));
    }
    Ok(days)
}

/// Convert a civil date/time to seconds since `epoch` midnight.
///
/// Dates strictly before the epoch date fail with
/// [`TimeError::DateBeforeEpoch`] rather than wrapping or saturating; the
/// packed datetime word has no sign bit to spend on them.
///
/// # Errors
/// [`TimeError::InvalidCivilDate`] for out-of-range month or day,
/// [`TimeError::DateBeforeEpoch`] for dates preceding the epoch.
pub fn civil_to_epoch_seconds(epoch: Epoch, t: CivilTime) -> Result<i64> {
    let target_doy = day_of_year(t.year, t.month, t.day)?;
    let epoch_doy = day_of_year(epoch.year, epoch.month, epoch.day)?;

    if t.year < epoch.year || (t.year == epoch.year && target_doy < epoch_doy) {
        return Err(TimeError::DateBeforeEpoch {
            year: t.year,
            month: t.month,
            day: t.day,
        });
    }

    let mut days = target_doy - epoch_doy;
    for year in epoch.year..t.year {
        days += year_length(year);
    }

    Ok(days * SECONDS_PER_DAY
        + i64::from(t.hour) * 3600
        + i64::from(t.minute) * 60
        + i64::from(t.second))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unix(t: CivilTime) -> Result<i64> {
        civil_to_epoch_seconds(Epoch::UNIX, t)
    }

    #[test]
    fn epoch_itself_is_zero() {
        assert_eq!(unix(CivilTime::new(1970, 1, 1, 0, 0, 0)).unwrap(), 0);
    }

    #[test]
    fn time_of_day_adds_seconds() {
        assert_eq!(
            unix(CivilTime::new(1970, 1, 1, 1, 2, 3)).unwrap(),
            3600 + 120 + 3
        );
    }

    #[test]
    fn next_day_is_86400() {
        assert_eq!(unix(CivilTime::new(1970, 1, 2, 0, 0, 0)).unwrap(), 86_400);
    }

    #[test]
    fn known_unix_timestamps() {
        // Cross-checked against date -d ... +%s
        assert_eq!(
            unix(CivilTime::new(2000, 1, 1, 0, 0, 0)).unwrap(),
            946_684_800
        );
        assert_eq!(
            unix(CivilTime::new(2000, 3, 1, 0, 0, 0)).unwrap(),
            951_868_800
        );
        assert_eq!(
            unix(CivilTime::new(2024, 2, 29, 12, 0, 0)).unwrap(),
            1_709_208_000
        );
    }

    #[test]
    fn century_leap_rule() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(1996));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2100));
    }

    #[test]
    fn year_2000_has_february_29() {
        let feb29 = unix(CivilTime::new(2000, 2, 29, 0, 0, 0)).unwrap();
        let mar1 = unix(CivilTime::new(2000, 3, 1, 0, 0, 0)).unwrap();
        assert_eq!(mar1 - feb29, 86_400);
    }

    #[test]
    fn year_1900_skips_february_29() {
        let feb28 = unix(CivilTime::new(1900, 2, 28, 0, 0, 0));
        assert!(matches!(
            feb28,
            Err(TimeError::DateBeforeEpoch { year: 1900, .. })
        ));

        // With an epoch that can see 1900, Feb 28 -> Mar 1 is one day.
        let epoch = Epoch {
            year: 1900,
            month: 1,
            day: 1,
        };
        let feb28 = civil_to_epoch_seconds(epoch, CivilTime::new(1900, 2, 28, 0, 0, 0)).unwrap();
        let mar1 = civil_to_epoch_seconds(epoch, CivilTime::new(1900, 3, 1, 0, 0, 0)).unwrap();
        assert_eq!(mar1 - feb28, 86_400);
    }

    #[test]
    fn february_29_rejected_in_non_leap_year() {
        let result = unix(CivilTime::new(1999, 2, 29, 0, 0, 0));
        assert!(matches!(result, Err(TimeError::InvalidCivilDate { .. })));
    }

    #[test]
    fn month_zero_and_thirteen_rejected() {
        assert!(matches!(
            unix(CivilTime::new(1990, 0, 1, 0, 0, 0)),
            Err(TimeError::InvalidCivilDate { .. })
        ));
        assert!(matches!(
            unix(CivilTime::new(1990, 13, 1, 0, 0, 0)),
            Err(TimeError::InvalidCivilDate { .. })
        ));
    }

    #[test]
    fn pre_epoch_date_fails() {
        let result = unix(CivilTime::new(1969, 12, 31, 23, 59, 59));
        assert!(matches!(result, Err(TimeError::DateBeforeEpoch { .. })));
    }

    #[test]
    fn custom_epoch() {
        let epoch = Epoch {
            year: 2000,
            month: 1,
            day: 1,
        };
        assert_eq!(
            civil_to_epoch_seconds(epoch, CivilTime::new(2000, 1, 1, 0, 0, 0)).unwrap(),
            0
        );
        assert_eq!(
            civil_to_epoch_seconds(epoch, CivilTime::new(2000, 1, 2, 0, 0, 0)).unwrap(),
            86_400
        );
        assert!(matches!(
            civil_to_epoch_seconds(epoch, CivilTime::new(1999, 12, 31, 0, 0, 0)),
            Err(TimeError::DateBeforeEpoch { .. })
        ));
    }

    #[test]
    fn same_year_before_epoch_day_fails() {
        let epoch = Epoch {
            year: 2000,
            month: 6,
            day: 15,
        };
        assert!(matches!(
            civil_to_epoch_seconds(epoch, CivilTime::new(2000, 6, 14, 0, 0, 0)),
            Err(TimeError::DateBeforeEpoch { .. })
        ));
    }
}
