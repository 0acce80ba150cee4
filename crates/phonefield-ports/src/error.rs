use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("unparsable phone number: {0}")]
    Unparsable(String),
    #[error("unknown region: {0}")]
    UnknownRegion(String),
}

/// The one failure a form framework sees from a data transformer.
///
/// The input has to change before the call can succeed; there is nothing to retry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("transformation failed: {message}")]
pub struct TransformationFailed {
    message: String,
}

impl TransformationFailed {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<ServiceError> for TransformationFailed {
    fn from(err: ServiceError) -> Self {
        Self::new(err.to_string())
    }
}
