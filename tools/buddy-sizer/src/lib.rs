//! Buddy Sizer - bitmap metadata estimates for a buddy page allocator
//!
//! # Purpose
//! Answers one question ahead of writing an allocator: if a buddy allocator
//! keeps one occupancy bit per block at every order simultaneously, how big
//! does that bitmap get?
//!
//! # Architecture
//! - [`config`]: memory size and order range, with TOML loading
//! - [`estimate`]: per-order block counts and cumulative bitmap bits
//! - [`report`]: the plain-text table printed by the `buddy-sizer` binary
//!
//! Every division in the estimator rounds up. Nothing here allocates or
//! manages memory; the numbers are estimates only.
//!
//! # Example
//! ```
//! use buddy_sizer::{estimate_all, SizerConfig};
//!
//! let estimates = estimate_all(&SizerConfig::default()).unwrap();
//! assert_eq!(estimates.len(), 18);
//! assert_eq!(estimates[1].bitmap_kb, 384);
//! ```

pub mod config;
pub mod error;
pub mod estimate;
pub mod report;

pub use config::{SizerConfig, DEFAULT_MAX_ORDER, DEFAULT_SYS_MEM_KB, MAX_SUPPORTED_ORDER};
pub use error::{Result, SizerError};
pub use estimate::{
    block_count, block_size, ceil_div, cumulative_bits, estimate_all, estimate_order,
    running_totals, OrderEstimate,
};
pub use report::{format_line, write_table, Style, HEADER, SEPARATOR};
