//! Error types for the sizing calculator

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Sizing errors
#[derive(Debug, Error)]
pub enum SizerError {
    #[error("Total memory size must be > 0 KB")]
    ZeroMemory,

    #[error("Order {order} out of range (max: {max})")]
    OrderOutOfRange { order: u32, max: u32 },

    #[error("Cumulative bit count overflowed at order {order}")]
    Overflow { order: u32 },

    #[error("Failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid number (expected decimal or 0x-prefixed hex): {input}")]
    InvalidNumber { input: String },
}

pub type Result<T> = core::result::Result<T, SizerError>;
