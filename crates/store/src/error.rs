//! Store-level failures (infrastructure, not domain).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store io failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot (de)serialization failed: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("store lock poisoned")]
    Poisoned,
}
