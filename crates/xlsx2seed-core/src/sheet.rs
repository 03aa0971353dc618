use crate::config::SheetConfig;
use crate::record::{RecordMapper, SeedData};
use crate::value::CellValue;

/// Name of the column whose value marks a row as a seed record.
pub const ID_COLUMN: &str = "id";

/// One parsed sheet: column names plus rows in source order.
///
/// Rows are normalised on construction so every row is exactly as wide as the
/// header. Longer rows are truncated and shorter rows padded with
/// [`CellValue::Empty`]; sparse trailing cells are normal in real sheets.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetModel {
    sheet_name: String,
    column_names: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl SheetModel {
    pub fn new(
        sheet_name: impl Into<String>,
        column_names: Vec<String>,
        rows: Vec<Vec<CellValue>>,
    ) -> Self {
        let width = column_names.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, CellValue::Empty);
                row
            })
            .collect();
        Self {
            sheet_name: sheet_name.into(),
            column_names,
            rows,
        }
    }

    pub fn sheet_name(&self) -> &str {
        &self.sheet_name
    }

    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn has_id_column(&self) -> bool {
        self.column_index(ID_COLUMN).is_some()
    }

    /// Position of the first column called `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.column_names.iter().position(|column| column == name)
    }

    /// Map the rows into keyed records.
    ///
    /// An empty `require_version` disables version filtering.
    pub fn data(&self, config: &SheetConfig, require_version: &str) -> SeedData {
        RecordMapper::new(config)
            .require_version(require_version)
            .map(self)
    }
}
