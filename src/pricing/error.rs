//! Pricing error types

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    /// The `datas` string does not follow the request grammar
    #[error("Malformed payload entry '{entry}': {reason}")]
    MalformedPayload { entry: String, reason: String },

    #[error("Unknown item id {0}")]
    UnknownItem(i64),
}

impl PricingError {
    pub(crate) fn malformed(entry: &str, reason: impl Into<String>) -> Self {
        PricingError::MalformedPayload {
            entry: entry.to_string(),
            reason: reason.into(),
        }
    }
}

pub type PricingResult<T> = Result<T, PricingError>;
