use thiserror::Error;

pub type Result<T> = std::result::Result<T, IrradianceError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum IrradianceError {
    #[error("latitude must be between -90 and 90 degrees, got {latitude}")]
    InvalidLatitude { latitude: f64 },

    #[error("year must be non-negative, got {year}")]
    NegativeYear { year: i32 },

    #[error("day of year must be between 1 and {days_in_year}, got {day_of_year}")]
    DayOfYearOutOfRange { day_of_year: i32, days_in_year: i32 },

    #[error("no such calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
}

impl IrradianceError {
    /// True for errors raised while building a model rather than while querying one.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidLatitude { .. } | Self::NegativeYear { .. }
        )
    }
}
