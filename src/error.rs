use thiserror::Error;

/// Errors raised by the business-hours calculation.
///
/// `diff` itself only ever fails with [`BusinessHoursError::HoursNotSet`]; the
/// remaining variants come from the validated constructors and unit parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BusinessHoursError {
    #[error("Business hours not set")]
    HoursNotSet,

    #[error("Unknown unit '{0}', expected one of: min, minutes")]
    UnknownUnit(String),

    #[error("Invalid hour {0}, expected a value between 0 and 23")]
    InvalidHour(u32),

    #[error(
        "Business hours must open before they close (opens at {opens_at}, closes at {closes_at})"
    )]
    EmptyWindow { opens_at: u32, closes_at: u32 },
}

pub type Result<T> = std::result::Result<T, BusinessHoursError>;
