#![cfg(feature = "calamine")]

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use ::calamine::{Data, Range, Reader, Sheets, open_workbook_auto};
use xlsx2seed_core::CellValue;

use crate::error::IoError;
use crate::traits::{SheetData, SpreadsheetReader};

/// Reader for every format calamine detects from the file extension
/// (xlsx, xlsm, xlsb, xls, ods).
pub struct CalamineAdapter {
    workbook: Sheets<BufReader<File>>,
    sheet_names: Vec<String>,
}

impl CalamineAdapter {
    fn convert_value(data: &Data) -> CellValue {
        match data {
            Data::Empty => CellValue::Empty,
            Data::String(s) if s.is_empty() => CellValue::Empty,
            Data::String(s) => CellValue::Text(s.clone()),
            Data::Float(f) => CellValue::Number(*f).normalized(),
            Data::Int(i) => CellValue::Int(*i),
            Data::Bool(b) => CellValue::Boolean(*b),
            Data::Error(e) => CellValue::Text(e.to_string()),
            // Date cells keep their serial number
            Data::DateTime(dt) => CellValue::Number(dt.as_f64()).normalized(),
            Data::DateTimeIso(s) => CellValue::Text(s.clone()),
            Data::DurationIso(s) => CellValue::Text(s.clone()),
        }
    }

    fn range_to_rows(range: &Range<Data>) -> Vec<Vec<CellValue>> {
        let Some((start_row, start_col)) = range.start() else {
            return Vec::new();
        };
        let start_row = start_row as usize;
        let start_col = start_col as usize;

        let mut rows = Vec::with_capacity(start_row + range.height());
        rows.resize_with(start_row, Vec::new);
        for source in range.rows() {
            let mut row = Vec::with_capacity(start_col + source.len());
            row.resize(start_col, CellValue::Empty);
            row.extend(source.iter().map(Self::convert_value));
            rows.push(row);
        }
        rows
    }
}

impl SpreadsheetReader for CalamineAdapter {
    type Error = IoError;

    fn open_path<P: AsRef<Path>>(path: P) -> Result<Self, Self::Error>
    where
        Self: Sized,
    {
        let workbook =
            open_workbook_auto(path.as_ref()).map_err(|e| IoError::from_backend("calamine", e))?;
        let sheet_names = workbook.sheet_names();
        Ok(Self {
            workbook,
            sheet_names,
        })
    }

    fn sheet_names(&self) -> Result<Vec<String>, Self::Error> {
        Ok(self.sheet_names.clone())
    }

    fn read_sheet(&mut self, sheet: &str) -> Result<SheetData, Self::Error> {
        if !self.sheet_names.iter().any(|name| name == sheet) {
            return Err(IoError::SheetNotFound(sheet.to_string()));
        }
        let range = self
            .workbook
            .worksheet_range(sheet)
            .map_err(|e| IoError::from_backend("calamine", e))?;
        Ok(SheetData::new(Self::range_to_rows(&range)))
    }
}
