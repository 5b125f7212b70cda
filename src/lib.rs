//! yml-feed - spreadsheet to YML catalog converter
//!
//! Reads four sheets of an .xlsx workbook (shop settings, currencies,
//! categories, products), maps them onto typed records and writes a YML
//! catalog XML feed.
//!
//! # Example
//!
//! ```no_run
//! use yml_feed::convert::{convert, ConvertOptions};
//!
//! let report = convert(&ConvertOptions {
//!     input: "catalog.xlsx".into(),
//!     output: "feed.xml".into(),
//! })?;
//!
//! println!("Offers: {}", report.offers);
//! # Ok::<(), yml_feed::error::FeedError>(())
//! ```

pub mod catalog;
pub mod cli;
pub mod convert;
pub mod error;
pub mod excel;
pub mod mapper;
pub mod types;
pub mod xml;

// Re-export commonly used types
pub use error::{FeedError, FeedResult};
pub use types::{Catalog, Category, Currency, Offer, Param, Product, ShopSettings};
