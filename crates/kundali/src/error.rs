use thiserror::Error;

/// Errors raised while reading or interpreting chart data
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("Unknown zodiac sign: {0:?}")]
    UnknownSign(String),
    #[error("Unknown ayanamsa: {0:?}")]
    UnknownAyanamsa(String),
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),
    #[error("Invalid event date: {0:?}")]
    InvalidEventDate(String),
}
