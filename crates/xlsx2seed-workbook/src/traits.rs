use std::path::Path;

use xlsx2seed_core::CellValue;

/// Raw cell grid of one sheet, anchored at A1.
///
/// Row `0` is the first sheet row regardless of where the used range starts.
/// Rows may be ragged; [`crate::SheetLoader`] normalises them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SheetData {
    pub rows: Vec<Vec<CellValue>>,
}

impl SheetData {
    pub fn new(rows: Vec<Vec<CellValue>>) -> Self {
        Self { rows }
    }

    /// `(rows, columns)` of the grid, or `None` when it holds nothing.
    pub fn dimensions(&self) -> Option<(usize, usize)> {
        let width = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        if self.rows.is_empty() || width == 0 {
            None
        } else {
            Some((self.rows.len(), width))
        }
    }
}

pub trait SpreadsheetReader {
    type Error: std::error::Error + Send + Sync + 'static;

    fn open_path<P: AsRef<Path>>(path: P) -> Result<Self, Self::Error>
    where
        Self: Sized;

    /// Sheet names in workbook order.
    fn sheet_names(&self) -> Result<Vec<String>, Self::Error>;

    fn read_sheet(&mut self, sheet: &str) -> Result<SheetData, Self::Error>;
}
