//! Per-order bitmap estimates
//!
//! A buddy bitmap keeps one bit per block at every order at the same time,
//! so the bit cost at order `i` is the block count of every order from 0 up
//! to and including `i`:
//!
//! ```text
//! block_count(i)     = ceil(sys_mem / 2^i)
//! cumulative_bits(i) = sum(block_count(j) for j in 0..=i)
//! bitmap_bytes(i)    = ceil(cumulative_bits(i) / 8)
//! bitmap_kb(i)       = ceil(bitmap_bytes(i) / 1024)
//! ```
//!
//! Every division rounds up, including the ones that come out exact.

use crate::config::{SizerConfig, MAX_SUPPORTED_ORDER};
use crate::error::{Result, SizerError};

const BITS_PER_BYTE: u64 = 8;
const BYTES_PER_KB: u64 = 1024;

/// One row of the sizing table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderEstimate {
    pub order: u32,
    /// Block size at this order, in KB
    pub block_size: u64,
    /// Blocks of `block_size` needed to cover all of memory
    pub block_count: u64,
    /// Bitmap bits for orders `0..=order`
    pub cumulative_bits: u64,
    pub bitmap_bytes: u64,
    pub bitmap_kb: u64,
}

/// Integer division rounding toward positive infinity.
///
/// `d` must be non-zero. Callers only ever divide by powers of two, 8 or 1024.
#[inline]
pub const fn ceil_div(n: u64, d: u64) -> u64 {
    n.div_ceil(d)
}

/// Block size at `order`: `2^order`
pub fn block_size(order: u32) -> Result<u64> {
    1u64.checked_shl(order).ok_or(SizerError::OrderOutOfRange {
            order,
            max: MAX_SUPPORTED_ORDER,
        })
}

/// Blocks of size `2^order` needed to cover `sys_mem_kb`, partial block rounded up
pub fn block_count(sys_mem_kb: u64, order: u32) -> Result<u64> {
    Ok(ceil_div(sys_mem_kb, block_size(order)?))
}

/// Total bitmap bits for every order from 0 through `order`.
///
/// Sums from order 0 on every call rather than carrying a running total.
/// [`running_totals`] gives the same values in one pass.
pub fn cumulative_bits(sys_mem_kb: u64, order: u32) -> Result<u64> {
    let mut sum: u64 = 0;
    for j in 0..=order {
        sum = sum
            .checked_add(block_count(sys_mem_kb, j)?)
            .ok_or(SizerError::Overflow { order: j })?;
    }
    Ok(sum)
}

/// Compute the full table row for a single order
pub fn estimate_order(sys_mem_kb: u64, order: u32) -> Result<OrderEstimate> {
    let block_size = block_size(order)?;
    let block_count = block_count(sys_mem_kb, order)?;
    let cumulative_bits = cumulative_bits(sys_mem_kb, order)?;
    let bitmap_bytes = ceil_div(cumulative_bits, BITS_PER_BYTE);
    let bitmap_kb = ceil_div(bitmap_bytes, BYTES_PER_KB);

    Ok(OrderEstimate {
        order,
        block_size,
        block_count,
        cumulative_bits,
        bitmap_bytes,
        bitmap_kb,
    })
}

/// Estimate every order in `0..=config.max_order`, lowest order first
pub fn estimate_all(config: &SizerConfig) -> Result<Vec<OrderEstimate>> {
    config.validate()?;

    log::info!(
        "Estimating {} orders for {} KB",
        config.order_count(),
        config.sys_mem_kb
    );

    (0..=config.max_order)
        .map(|order| {
            let estimate = estimate_order(config.sys_mem_kb, order)?;
            log::debug!("{:?}", estimate);
            Ok(estimate)
        })
        .collect()
}

/// Cumulative bits for each order, carried as a running sum
pub fn running_totals(config: &SizerConfig) -> Result<Vec<u64>> {
    let mut totals = Vec::with_capacity(config.order_count());
    let mut sum: u64 = 0;

    for order in 0..=config.max_order {
        sum = sum
            .checked_add(block_count(config.sys_mem_kb, order)?)
            .ok_or(SizerError::Overflow { order })?;
        totals.push(sum);
    }

    Ok(totals)
}
