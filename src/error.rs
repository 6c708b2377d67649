use thiserror::Error;

/// Reasons a rose cannot be rendered. Every check runs before any markup is
/// produced, so a failed render never yields a partial document.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RoseError {
    #[error("height is empty")]
    EmptyInput,

    #[error("height is not a number: {0:?}")]
    NotANumber(String),

    #[error("height must be greater than zero, got {0}")]
    NonPositiveHeight(f64),

    #[error("declination must be a finite number, got {0}")]
    NonFiniteDeclination(f64),

    #[error("declination must lie strictly between -360 and 360 degrees, got {0}")]
    DeclinationOutOfRange(f64),

    #[error("annual change must be a finite number, got {0}")]
    NonFiniteAnnualChange(f64),

    #[error("reference year must be empty or digits, got {0:?}")]
    InvalidYear(String),
}
