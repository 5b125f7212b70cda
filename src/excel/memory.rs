use crate::error::{FeedError, FeedResult};
use crate::excel::SheetSource;

/// In-memory sheets, for feeding the mapper without a workbook on disk.
///
/// Rows are returned exactly as given.
#[derive(Debug, Clone, Default)]
pub struct MemorySheets {
    sheets: Vec<(String, Vec<Vec<String>>)>,
}

impl MemorySheets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a sheet
    pub fn with_sheet<S: AsRef<str>>(mut self, name: &str, rows: Vec<Vec<S>>) -> Self {
        let rows: Vec<Vec<String>> = rows
            .into_iter()
            .map(|row| row.iter().map(|c| c.as_ref().to_string()).collect())
            .collect();
        self.sheets.retain(|(existing, _)| existing != name);
        self.sheets.push((name.to_string(), rows));
        self
    }
}

impl SheetSource for MemorySheets {
    fn sheet_rows(&mut self, sheet: &str) -> FeedResult<Vec<Vec<String>>> {
        self.sheets
            .iter()
            .find(|(name, _)| name == sheet)
            .map(|(_, rows)| rows.clone())
            .ok_or_else(|| FeedError::SheetNotFound(sheet.to_string()))
    }
}
