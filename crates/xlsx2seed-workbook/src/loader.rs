use std::path::Path;
use std::time::Instant;

use xlsx2seed_core::{CellValue, SheetConfig, SheetModel};

use crate::backends::AnyWorkbook;
use crate::error::IoError;
use crate::traits::{SheetData, SpreadsheetReader};

#[derive(Debug, Default)]
pub struct LoaderStats {
    pub sheets_loaded: usize,
    pub rows_loaded: usize,
    pub open_time_ms: u64,
    pub backend_read_time_ms: u64,
}

/// Builds [`SheetModel`]s from a spreadsheet backend.
///
/// The header row is `column_names_row` from the sheet config (default `0`);
/// every row below it is a data row.
pub struct SheetLoader<B: SpreadsheetReader> {
    backend: B,
    stats: LoaderStats,
}

impl SheetLoader<AnyWorkbook> {
    /// Open a workbook, choosing the backend from the file extension.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, IoError> {
        let start = Instant::now();
        let backend = AnyWorkbook::open_path(path)?;
        let mut loader = Self::new(backend);
        loader.stats.open_time_ms = start.elapsed().as_millis() as u64;
        Ok(loader)
    }
}

impl<B: SpreadsheetReader> SheetLoader<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            stats: LoaderStats::default(),
        }
    }

    pub fn stats(&self) -> &LoaderStats {
        &self.stats
    }

    pub fn sheet_names(&self) -> Result<Vec<String>, B::Error> {
        self.backend.sheet_names()
    }

    pub fn load_sheet(&mut self, sheet: &str, config: &SheetConfig) -> Result<SheetModel, B::Error> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("load_sheet", sheet).entered();

        let start = Instant::now();
        let data = self.backend.read_sheet(sheet)?;
        self.stats.backend_read_time_ms += start.elapsed().as_millis() as u64;

        let model = sheet_model(sheet, data, config.column_names_row());
        self.stats.sheets_loaded += 1;
        self.stats.rows_loaded += model.rows().len();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            columns = model.column_names().len(),
            rows = model.rows().len(),
            "sheet loaded"
        );
        Ok(model)
    }
}

/// Split a raw grid into header and data rows.
///
/// A header row past the end of the grid yields a sheet with no columns.
pub fn sheet_model(sheet: &str, data: SheetData, column_names_row: usize) -> SheetModel {
    let mut rows = data.rows.into_iter().skip(column_names_row);
    let column_names: Vec<String> = rows
        .next()
        .map(|header| {
            let mut names: Vec<String> = header.iter().map(CellValue::to_string).collect();
            while names.last().is_some_and(String::is_empty) {
                names.pop();
            }
            names
        })
        .unwrap_or_default();
    SheetModel::new(sheet, column_names, rows.collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    #[test]
    fn header_row_offset() {
        let data = SheetData::new(vec![
            vec![text("description"), text("of"), text("columns")],
            vec![text("id"), text("name")],
            vec![1.into(), text("a"), text("extra")],
            vec![2.into()],
        ]);
        let model = sheet_model("items", data, 1);
        assert_eq!(model.column_names(), ["id".to_string(), "name".to_string()]);
        assert_eq!(model.rows().len(), 2);
        assert_eq!(model.rows()[0], vec![CellValue::Int(1), text("a")]);
        assert_eq!(model.rows()[1], vec![CellValue::Int(2), CellValue::Empty]);
    }

    #[test]
    fn trailing_blank_headers_are_dropped() {
        let data = SheetData::new(vec![vec![text("id"), CellValue::Empty, text("x"), CellValue::Empty]]);
        let model = sheet_model("s", data, 0);
        assert_eq!(
            model.column_names(),
            ["id".to_string(), String::new(), "x".to_string()]
        );
    }

    #[test]
    fn header_past_end() {
        let data = SheetData::new(vec![vec![text("id")]]);
        let model = sheet_model("s", data, 4);
        assert!(model.column_names().is_empty());
        assert!(!model.has_id_column());
    }

    #[test]
    fn numeric_headers_are_stringified() {
        let data = SheetData::new(vec![vec![text("id"), 2024.into()]]);
        let model = sheet_model("s", data, 0);
        assert_eq!(model.column_names()[1], "2024");
    }
}
