use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use yml_feed::cli::{self, DEFAULT_INPUT, DEFAULT_OUTPUT};

#[derive(Parser, Debug)]
#[command(name = "yml-feed")]
#[command(version)]
#[command(about = "Convert a shop spreadsheet (.xlsx) into a YML catalog feed")]
#[command(long_about = "Convert a shop spreadsheet (.xlsx) into a YML catalog feed.

The workbook must contain four sheets, each with a header in row 1:
  Настройки магазина  - shop settings (key | value)
  Валюты              - currencies (id | rate)
  Категории           - categories (id | name | parent id)
  Товары              - products, columns located by header text

Product columns named 'Параметр: Name (Unit)' become <param> elements.

Set RUST_LOG=yml_feed=debug to trace row-level decisions on stderr.

EXAMPLES:
  yml-feed
  yml-feed -i catalog.xlsx -o feed.xml")]
struct Cli {
    /// Path to the spreadsheet with shop data
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Path for the generated YML feed
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "yml_feed=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();

    match cli::generate(args.input, args.output) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            cli::report_error(&err);
            ExitCode::FAILURE
        }
    }
}
