//! Error types for spigot-core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("prime index must be at least 1, got {n}")]
    InvalidIndex { n: u64 },

    #[error("ordinate dataset is empty")]
    EmptyDataset,

    #[error("ordinate {index} is not a positive finite real: {value}")]
    NonPositiveOrdinate { index: usize, value: f64 },
}
