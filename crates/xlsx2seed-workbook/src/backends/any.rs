use std::path::Path;

use crate::error::IoError;
use crate::traits::{SheetData, SpreadsheetReader};

#[cfg(feature = "calamine")]
use super::CalamineAdapter;
#[cfg(feature = "csv")]
use super::CsvAdapter;

/// Backend picked from the file extension.
pub enum AnyWorkbook {
    #[cfg(feature = "calamine")]
    Calamine(CalamineAdapter),
    #[cfg(feature = "csv")]
    Csv(CsvAdapter),
}

impl SpreadsheetReader for AnyWorkbook {
    type Error = IoError;

    fn open_path<P: AsRef<Path>>(path: P) -> Result<Self, Self::Error>
    where
        Self: Sized,
    {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            #[cfg(feature = "csv")]
            "csv" | "tsv" => CsvAdapter::open_path(path).map(AnyWorkbook::Csv),
            #[cfg(feature = "calamine")]
            "xlsx" | "xlsm" | "xlam" | "xlsb" | "xls" | "xla" | "ods" => {
                CalamineAdapter::open_path(path).map(AnyWorkbook::Calamine)
            }
            _ => Err(IoError::UnsupportedFormat(path.display().to_string())),
        }
    }

    fn sheet_names(&self) -> Result<Vec<String>, Self::Error> {
        match self {
            #[cfg(feature = "calamine")]
            AnyWorkbook::Calamine(adapter) => adapter.sheet_names(),
            #[cfg(feature = "csv")]
            AnyWorkbook::Csv(adapter) => adapter.sheet_names(),
        }
    }

    fn read_sheet(&mut self, sheet: &str) -> Result<SheetData, Self::Error> {
        match self {
            #[cfg(feature = "calamine")]
            AnyWorkbook::Calamine(adapter) => adapter.read_sheet(sheet),
            #[cfg(feature = "csv")]
            AnyWorkbook::Csv(adapter) => adapter.read_sheet(sheet),
        }
    }
}
