//! Errors reported by host services.

use thiserror::Error;

/// Rejections from host registries.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HostError {
    #[error("trader {0} is already registered")]
    DuplicateTrader(String),

    #[error("trader {0} not found in database")]
    UnknownTrader(String),

    #[error("trader {0} is already in the flea market config")]
    AlreadyListed(String),
}
