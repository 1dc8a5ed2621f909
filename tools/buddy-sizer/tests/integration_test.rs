//! End-to-end tests for the sizing table
//!
//! These cover:
//! - The default 18-row table, library and binary
//! - Config file loading and CLI overrides
//! - Determinism of the output

use std::fs;
use std::process::Command;

use buddy_sizer::*;

/// Rows the table printed for the default machine
const DEFAULT_TABLE: &str = "\
order  size    num    total blocks
----------------------------------
0 - 1 - 2096700 - 2096700 (262088bytes / 256 kb)
1 - 2 - 1048350 - 3145050 (393132bytes / 384 kb)
2 - 4 - 524175 - 3669225 (458654bytes / 448 kb)
3 - 8 - 262088 - 3931313 (491415bytes / 480 kb)
4 - 16 - 131044 - 4062357 (507795bytes / 496 kb)
5 - 32 - 65522 - 4127879 (515985bytes / 504 kb)
6 - 64 - 32761 - 4160640 (520080bytes / 508 kb)
7 - 128 - 16381 - 4177021 (522128bytes / 510 kb)
8 - 256 - 8191 - 4185212 (523152bytes / 511 kb)
9 - 512 - 4096 - 4189308 (523664bytes / 512 kb)
10 - 1024 - 2048 - 4191356 (523920bytes / 512 kb)
11 - 2048 - 1024 - 4192380 (524048bytes / 512 kb)
12 - 4096 - 512 - 4192892 (524112bytes / 512 kb)
13 - 8192 - 256 - 4193148 (524144bytes / 512 kb)
14 - 16384 - 128 - 4193276 (524160bytes / 512 kb)
15 - 32768 - 64 - 4193340 (524168bytes / 512 kb)
16 - 65536 - 32 - 4193372 (524172bytes / 512 kb)
17 - 131072 - 16 - 4193388 (524174bytes / 512 kb)
";

fn render(config: &SizerConfig) -> String {
    let estimates = estimate_all(config).expect("Failed to estimate");
    let mut out = Vec::new();
    write_table(&mut out, &estimates, Style::PLAIN).expect("Failed to write table");
    String::from_utf8(out).expect("Table is not UTF-8")
}

/// Test the full default table against known-good output
#[test]
fn test_default_table() {
    assert_eq!(render(&SizerConfig::default()), DEFAULT_TABLE);
}

/// Test the properties every row must satisfy
#[test]
fn test_default_table_properties() {
    let estimates = estimate_all(&SizerConfig::default()).unwrap();
    assert_eq!(estimates.len(), 18);

    for (i, e) in estimates.iter().enumerate() {
        assert_eq!(e.order as usize, i);
        assert_eq!(e.block_size, 1 << i);
        assert_eq!(e.block_count, ceil_div(DEFAULT_SYS_MEM_KB, 1 << i));
        assert_eq!(e.bitmap_bytes, ceil_div(e.cumulative_bits, 8));
        assert_eq!(e.bitmap_kb, ceil_div(e.bitmap_bytes, 1024));
    }

    assert_eq!(estimates[0].cumulative_bits, estimates[0].block_count);
    for pair in estimates.windows(2) {
        assert!(pair[1].block_count <= pair[0].block_count);
        assert_eq!(
            pair[1].cumulative_bits,
            pair[0].cumulative_bits + pair[1].block_count
        );
    }
}

/// Test that two runs produce identical bytes
#[test]
fn test_output_is_deterministic() {
    let config = SizerConfig::default();
    assert_eq!(render(&config), render(&config));
}

/// Test loading a config file from disk
#[test]
fn test_config_file_roundtrip() {
    let path = std::env::temp_dir().join(format!("buddy-sizer-{}.toml", std::process::id()));
    fs::write(&path, "sys_mem_kb = 1024\nmax_order = 10\n").expect("Failed to write config");

    let config = SizerConfig::load(&path).expect("Failed to load config");
    fs::remove_file(&path).ok();

    assert_eq!(config.sys_mem_kb, 1024);
    assert_eq!(config.max_order, 10);

    let estimates = estimate_all(&config).unwrap();
    assert_eq!(estimates.len(), 11);
    // Power-of-two memory divides evenly down to one block
    assert_eq!(estimates[10].block_count, 1);
    assert_eq!(estimates[10].cumulative_bits, 2047);
    assert_eq!(estimates[10].bitmap_bytes, 256);
    assert_eq!(estimates[10].bitmap_kb, 1);
}

/// Test the binary with no arguments prints the default table
#[test]
fn test_binary_default_output() {
    let output = Command::new(env!("CARGO_BIN_EXE_buddy-sizer"))
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run buddy-sizer");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), DEFAULT_TABLE);
}

/// Test the binary honours overrides and rejects bad input
#[test]
fn test_binary_overrides() {
    let output = Command::new(env!("CARGO_BIN_EXE_buddy-sizer"))
        .args(["--mem-kb", "16", "--max-order", "2"])
        .output()
        .expect("Failed to run buddy-sizer");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 5);
    assert_eq!(stdout.lines().last(), Some("2 - 4 - 4 - 28 (4bytes / 1 kb)"));

    let output = Command::new(env!("CARGO_BIN_EXE_buddy-sizer"))
        .args(["--mem-kb", "0"])
        .output()
        .expect("Failed to run buddy-sizer");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
