use thiserror::Error;

#[derive(Debug, Error)]
#[error("{self:?}")]
pub enum CodecError {
    InvalidClock(String),
    InvalidHour(String),
    InvalidMinute(String),
    InvalidFlag(String),
}
