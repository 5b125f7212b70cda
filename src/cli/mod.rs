//! CLI command handlers

pub mod commands;

pub use commands::{generate, report_error};

/// Spreadsheet read when `--input` is not given
pub const DEFAULT_INPUT: &str = "../yandex_market_template.xlsx";
/// Feed written when `--output` is not given
pub const DEFAULT_OUTPUT: &str = "../yandex_market.xml";
