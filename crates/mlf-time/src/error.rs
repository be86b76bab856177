/// Errors that can occur during calendar conversion or datetime packing.
#[derive(Debug, thiserror::Error)]
pub enum TimeError {
    /// The civil date falls before the configured epoch.
    #[error("civil date {year:04}-{month:02}-{day:02} precedes the configured epoch")]
    DateBeforeEpoch { year: i32, month: u8, day: u8 },

    /// The month or day is outside the valid calendar range.
    #[error("invalid civil date {year:04}-{month:02}-{day:02}")]
    InvalidCivilDate { year: i32, month: u8, day: u8 },

    /// A datetime field exceeds the bits available in the packed word.
    #[error("datetime {field} out of range ({value}, max {max})")]
    FieldOverflow {
        field: &'static str,
        value: u64,
        max: u64,
    },
}

pub type Result<T> = std::result::Result<T, TimeError>;
