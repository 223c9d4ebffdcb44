//! Error types surfaced by the catalog service.
//!
//! A missing id is not an error; lookups return `Option`.
use std::fmt;

use catalog_core::ValidationError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServiceError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The content source could not be reached or returned malformed data.
    /// Timed-out requests land here as well.
    #[error("catalog data unavailable: {reason}")]
    DataUnavailable { reason: String },
}

impl ServiceError {
    /// Wraps a retrieval failure, keeping its full context chain.
    pub fn unavailable(err: impl fmt::Display) -> Self {
        Self::DataUnavailable {
            reason: format!("{err:#}"),
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(err: ValidationError) -> Self {
        Self::DataUnavailable {
            reason: format!("malformed catalog data: {err}"),
        }
    }
}
