//! Spreadsheet access
//!
//! Sheets are read as rows of cell text. [`Workbook`] reads .xlsx files via calamine,
//! [`MemorySheets`] serves rows held in memory.

mod memory;
mod reader;

use crate::error::FeedResult;

pub use memory::MemorySheets;
pub use reader::Workbook;

/// Anything that can hand out the rows of a named sheet
pub trait SheetSource {
    /// Rows of `sheet`, header row included.
    ///
    /// Fails with `SheetNotFound` when the sheet is absent and `SheetRead`
    /// when it cannot be read.
    fn sheet_rows(&mut self, sheet: &str) -> FeedResult<Vec<Vec<String>>>;
}
