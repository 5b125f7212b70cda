use crate::convert::{convert, ConvertOptions, ConvertReport};
use anyhow::bail;
use colored::Colorize;
use std::path::PathBuf;

/// Execute the conversion: spreadsheet at `input` → YML feed at `output`
pub fn generate(input: PathBuf, output: PathBuf) -> anyhow::Result<ConvertReport> {
    if !input.exists() {
        bail!("file {} does not exist", input.display());
    }

    let report = convert(&ConvertOptions { input, output })?;

    println!(
        "{} {}",
        "YML feed created:".bold().green(),
        report.output.display()
    );
    println!(
        "   {} currencies, {} categories, {} offers",
        report.currencies, report.categories, report.offers
    );

    Ok(report)
}

/// Print a failure the way the CLI reports it
pub fn report_error(err: &anyhow::Error) {
    println!("{} {}", "Error:".bold().red(), err);
}
