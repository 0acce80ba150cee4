use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid country code: {0:?}")]
    InvalidCountryCode(String),
}
