//! Sizer configuration
//!
//! Defaults describe the machine the table was first worked out for:
//! 2,096,700 KB of memory and orders 0 through 17. A TOML file can change
//! either value:
//!
//! ```toml
//! sys_mem_kb = 0x100000
//! max_order = 10
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, SizerError};
use crate::estimate;

/// Total memory managed by the hypothetical allocator, in KB
pub const DEFAULT_SYS_MEM_KB: u64 = 2_096_700;

/// Highest order printed by default (18 rows: 0..=17)
pub const DEFAULT_MAX_ORDER: u32 = 17;

/// `2^order` must fit in a u64
pub const MAX_SUPPORTED_ORDER: u32 = 63;

/// Inputs to the estimator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SizerConfig {
    /// Total memory size in KB
    pub sys_mem_kb: u64,
    /// Highest order to estimate (inclusive)
    pub max_order: u32,
}

impl Default for SizerConfig {
    fn default() -> Self {
        Self {
            sys_mem_kb: DEFAULT_SYS_MEM_KB,
            max_order: DEFAULT_MAX_ORDER,
        }
    }
}

impl SizerConfig {
    /// Parse a config from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SizerError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loaded config from {}", path.display());
        Self::from_toml_str(&text)
    }

    /// Number of rows the table will have
    pub fn order_count(&self) -> usize {
        self.max_order as usize + 1
    }

    /// Check that every order in range can be computed without overflow.
    pub fn validate(&self) -> Result<()> {
        if self.sys_mem_kb == 0 {
            return Err(SizerError::ZeroMemory);
        }

        if self.max_order > MAX_SUPPORTED_ORDER {
            return Err(SizerError::OrderOutOfRange {
                order: self.max_order,
                max: MAX_SUPPORTED_ORDER,
            });
        }

        // The largest cumulative sum is at max_order; the rest are prefixes of it.
        estimate::cumulative_bits(self.sys_mem_kb, self.max_order)?;

        Ok(())
    }
}

/// Parse a CLI number, accepting decimal or `0x` hex
pub fn parse_hex_or_dec(s: &str) -> Result<u64> {
    let s = s.trim();
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(&hex.replace('_', ""), 16),
        None => s.replace('_', "").parse::<u64>(),
    };

    parsed.map_err(|_| SizerError::InvalidNumber {
        input: s.to_string(),
    })
}
