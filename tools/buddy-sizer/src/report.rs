//! Plain-text sizing table
//!
//! ```text
//! order  size    num    total blocks
//! ----------------------------------
//! 0 - 1 - 2096700 - 2096700 (262088bytes / 256 kb)
//! 1 - 2 - 1048350 - 3145050 (393132bytes / 384 kb)
//! ```
//!
//! The "total" column holds the cumulative bit count, not a block count. The
//! header wording is kept as-is so existing notes that quote it still match.

use std::io::{self, Write};

use colored::Colorize;

use crate::estimate::OrderEstimate;

pub const HEADER: &str = "order  size    num    total blocks";
pub const SEPARATOR: &str = "----------------------------------";

/// Terminal styling for the table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    /// Bold header. Row text is never styled.
    pub color: bool,
}

impl Style {
    pub const PLAIN: Self = Self { color: false };
}

/// Format one table row (no trailing newline)
pub fn format_line(e: &OrderEstimate) -> String {
    format!(
        "{} - {} - {} - {} ({}bytes / {} kb)",
        e.order, e.block_size, e.block_count, e.cumulative_bits, e.bitmap_bytes, e.bitmap_kb
    )
}

/// Write the header, separator and one row per estimate
pub fn write_table<W: Write>(
    out: &mut W,
    estimates: &[OrderEstimate],
    style: Style,
) -> io::Result<()> {
    if style.color {
        writeln!(out, "{}", HEADER.bold())?;
    } else {
        writeln!(out, "{}", HEADER)?;
    }
    writeln!(out, "{}", SEPARATOR)?;

    for e in estimates {
        writeln!(out, "{}", format_line(e))?;
    }

    out.flush()
}
