use thiserror::Error;

#[derive(Debug, Error)]
pub enum AmountError {
    #[error("Amount error: {0}")]
    InvalidFormat(String),
    #[error("Amount error: [{0}] is not a whole number")]
    NotIntegral(String),
    #[error("Amount error: [{0}] is out of range")]
    Overflow(String)
}

#[derive(Debug, Error)]
#[error("Timestamp error: [{value}] is not a recognised timestamp")]
pub struct TimestampError {
    pub value: String
}
