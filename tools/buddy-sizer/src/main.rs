//! buddy-sizer - bitmap size table for a buddy allocator
//!
//! Usage:
//!   buddy-sizer                        # 2096700 KB, orders 0..=17
//!   buddy-sizer --mem-kb 0x100000 --max-order 10
//!   buddy-sizer --config sizing.toml
//!
//! Set `RUST_LOG=debug` to see each order as it is computed.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use buddy_sizer::config::parse_hex_or_dec;
use buddy_sizer::{estimate_all, write_table, SizerConfig, Style};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "buddy-sizer")]
#[command(version)]
#[command(about = "Estimate buddy allocator bitmap size per order", long_about = None)]
struct Args {
    /// TOML file with `sys_mem_kb` and/or `max_order`
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Total memory in KB (decimal or 0x hex), overrides the config file
    #[arg(long, value_parser = parse_mem_kb)]
    mem_kb: Option<u64>,

    /// Highest order to print (inclusive), overrides the config file
    #[arg(long)]
    max_order: Option<u32>,

    /// Never style the header, even on a terminal
    #[arg(long)]
    no_color: bool,
}

fn parse_mem_kb(s: &str) -> std::result::Result<u64, String> {
    parse_hex_or_dec(s).map_err(|e| e.to_string())
}

fn resolve_config(args: &Args) -> Result<SizerConfig> {
    let mut config = match &args.config {
        Some(path) => SizerConfig::load(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => SizerConfig::default(),
    };

    if let Some(mem_kb) = args.mem_kb {
        config.sys_mem_kb = mem_kb;
    }
    if let Some(max_order) = args.max_order {
        config.max_order = max_order;
    }

    config.validate().context("Invalid sizing parameters")?;
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = resolve_config(&args)?;

    log::info!("Configuration:");
    log::info!("  Memory:    {} KB", config.sys_mem_kb);
    log::info!("  Max order: {}", config.max_order);

    let estimates = estimate_all(&config)?;

    let stdout = io::stdout();
    let style = Style {
        color: !args.no_color && stdout.is_terminal(),
    };
    write_table(&mut stdout.lock(), &estimates, style).context("Failed to write table")?;

    Ok(())
}
