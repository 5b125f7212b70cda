//! Workbook reader implementation - Excel (.xlsx) → rows of cell text

use crate::error::{FeedError, FeedResult};
use crate::excel::SheetSource;
use calamine::{open_workbook, Data, Range, Reader, Xlsx, XlsxError};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::debug;

/// An opened .xlsx document. The underlying file is released on drop.
pub struct Workbook {
    path: PathBuf,
    inner: Xlsx<BufReader<File>>,
}

impl Workbook {
    /// Open an .xlsx workbook
    pub fn open<P: AsRef<Path>>(path: P) -> FeedResult<Self> {
        let path = path.as_ref().to_path_buf();
        let inner: Xlsx<BufReader<File>> =
            open_workbook(&path).map_err(|e: XlsxError| FeedError::DocumentOpen {
                path: path.clone(),
                message: e.to_string(),
            })?;
        debug!(path = %path.display(), "opened workbook");
        Ok(Self { path, inner })
    }

    /// Sheet names in workbook order
    pub fn sheet_names(&self) -> Vec<String> {
        self.inner.sheet_names()
    }
}

impl SheetSource for Workbook {
    fn sheet_rows(&mut self, sheet: &str) -> FeedResult<Vec<Vec<String>>> {
        if !self.inner.sheet_names().iter().any(|name| name == sheet) {
            return Err(FeedError::SheetNotFound(sheet.to_string()));
        }

        let range = self
            .inner
            .worksheet_range(sheet)
            .map_err(|e| FeedError::SheetRead {
                sheet: sheet.to_string(),
                message: e.to_string(),
            })?;

        let rows = materialize_rows(&range);
        debug!(
            workbook = %self.path.display(),
            sheet,
            rows = rows.len(),
            "read sheet"
        );
        Ok(rows)
    }
}

/// Turn a calamine range into rows anchored at A1.
///
/// Leading empty rows/columns are kept as empty cells so positions stay absolute;
/// trailing empty cells and trailing empty rows are dropped.
fn materialize_rows(range: &Range<Data>) -> Vec<Vec<String>> {
    let Some((start_row, start_col)) = range.start() else {
        return Vec::new();
    };

    let mut rows: Vec<Vec<String>> = vec![Vec::new(); start_row as usize];
    for row in range.rows() {
        let mut cells = vec![String::new(); start_col as usize];
        cells.extend(row.iter().map(cell_text));
        while cells.last().is_some_and(|c| c.is_empty()) {
            cells.pop();
        }
        rows.push(cells);
    }

    while rows.last().is_some_and(|r| r.is_empty()) {
        rows.pop();
    }
    rows
}

/// Render a single cell the way it reads in the sheet
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_text() {
        assert_eq!(cell_text(&Data::Empty), "");
        assert_eq!(cell_text(&Data::String("Стул".to_string())), "Стул");
        assert_eq!(cell_text(&Data::Float(19.5)), "19.5");
        assert_eq!(cell_text(&Data::Float(100.0)), "100");
        assert_eq!(cell_text(&Data::Int(42)), "42");
        assert_eq!(cell_text(&Data::Bool(true)), "true");
    }

    #[test]
    fn test_materialize_trims_trailing_cells() {
        let mut range: Range<Data> = Range::new((0, 0), (2, 2));
        range.set_value((0, 0), Data::String("ID".to_string()));
        range.set_value((0, 1), Data::String("Rate".to_string()));
        range.set_value((1, 0), Data::String("RUR".to_string()));
        range.set_value((1, 1), Data::Int(1));
        range.set_value((2, 0), Data::String("USD".to_string()));

        let rows = materialize_rows(&range);
        assert_eq!(
            rows,
            vec![
                vec!["ID".to_string(), "Rate".to_string()],
                vec!["RUR".to_string(), "1".to_string()],
                vec!["USD".to_string()],
            ]
        );
    }

    #[test]
    fn test_materialize_anchors_at_a1() {
        let mut range: Range<Data> = Range::new((1, 1), (1, 2));
        range.set_value((1, 1), Data::String("key".to_string()));
        range.set_value((1, 2), Data::String("value".to_string()));

        let rows = materialize_rows(&range);
        assert_eq!(rows.len(), 2);
        assert!(rows[0].is_empty());
        assert_eq!(rows[1], vec!["", "key", "value"]);
    }

    #[test]
    fn test_materialize_empty_range() {
        let range: Range<Data> = Range::empty();
        assert!(materialize_rows(&range).is_empty());
    }

    #[test]
    fn test_open_missing_file() {
        let result = Workbook::open("definitely/not/here.xlsx");
        assert!(matches!(result, Err(FeedError::DocumentOpen { .. })));
    }

    #[test]
    fn test_open_non_xlsx_reports_path_and_cause() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("broken.xlsx");
        std::fs::write(&path, b"plain text, not a zip archive").unwrap();

        match Workbook::open(&path) {
            Err(FeedError::DocumentOpen {
                path: reported,
                message,
            }) => {
                assert_eq!(reported, path);
                assert!(!message.is_empty());
            }
            Err(other) => panic!("Expected DocumentOpen, got {other}"),
            Ok(_) => panic!("Expected DocumentOpen, got a workbook"),
        }
    }
}
