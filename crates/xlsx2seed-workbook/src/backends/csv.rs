#![cfg(feature = "csv")]

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use xlsx2seed_core::CellValue;

use crate::error::IoError;
use crate::traits::{SheetData, SpreadsheetReader};

const DEFAULT_SHEET_NAME: &str = "Sheet1";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CsvTypeInference {
    /// Every non-empty field is text.
    Off,
    /// Booleans and unambiguous numbers are typed.
    #[default]
    Basic,
}

#[derive(Clone, Debug)]
pub struct CsvReadOptions {
    /// Field delimiter as a single byte. Use `b'\t'` for TSV.
    pub delimiter: u8,
    pub type_inference: CsvTypeInference,
}

impl Default for CsvReadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            type_inference: CsvTypeInference::Basic,
        }
    }
}

impl CsvReadOptions {
    /// Options suited to the file extension (`.tsv` switches to tabs).
    pub fn for_path(path: &Path) -> Self {
        let is_tsv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("tsv"));
        Self {
            delimiter: if is_tsv { b'\t' } else { b',' },
            ..Self::default()
        }
    }
}

/// CSV backend adapter.
///
/// A CSV file is a single-sheet workbook. The sheet takes the file stem as its
/// name when opened from a path, `Sheet1` otherwise. UTF-8 only.
pub struct CsvAdapter {
    sheet_name: String,
    rows: Vec<Vec<CellValue>>,
}

impl CsvAdapter {
    pub fn open_path_with_options<P: AsRef<Path>>(
        path: P,
        read_options: CsvReadOptions,
    ) -> Result<Self, IoError> {
        let path = path.as_ref();
        let sheet_name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(DEFAULT_SHEET_NAME)
            .to_string();
        let file = File::open(path)?;
        Self::from_reader(sheet_name, BufReader::new(file), &read_options)
    }

    pub fn open_bytes_with_options(
        bytes: Vec<u8>,
        read_options: CsvReadOptions,
    ) -> Result<Self, IoError> {
        Self::from_reader(
            DEFAULT_SHEET_NAME.to_string(),
            std::io::Cursor::new(bytes),
            &read_options,
        )
    }

    fn from_reader<R: Read>(
        sheet_name: String,
        reader: R,
        options: &CsvReadOptions,
    ) -> Result<Self, IoError> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .has_headers(false)
            // Ragged rows are normalised by the loader.
            .flexible(true)
            .from_reader(reader);

        let mut rows = Vec::new();
        for rec in rdr.records() {
            let rec = rec.map_err(|e| IoError::from_backend("csv", e))?;
            rows.push(
                rec.iter()
                    .map(|field| infer_field(field, options.type_inference))
                    .collect(),
            );
        }
        Ok(Self { sheet_name, rows })
    }
}

impl SpreadsheetReader for CsvAdapter {
    type Error = IoError;

    fn open_path<P: AsRef<Path>>(path: P) -> Result<Self, Self::Error>
    where
        Self: Sized,
    {
        let options = CsvReadOptions::for_path(path.as_ref());
        Self::open_path_with_options(path, options)
    }

    fn sheet_names(&self) -> Result<Vec<String>, Self::Error> {
        Ok(vec![self.sheet_name.clone()])
    }

    fn read_sheet(&mut self, sheet: &str) -> Result<SheetData, Self::Error> {
        if sheet != self.sheet_name {
            return Err(IoError::SheetNotFound(sheet.to_string()));
        }
        Ok(SheetData::new(self.rows.clone()))
    }
}

fn infer_field(field: &str, mode: CsvTypeInference) -> CellValue {
    if field.is_empty() {
        return CellValue::Empty;
    }
    if mode == CsvTypeInference::Off {
        return CellValue::Text(field.to_string());
    }
    if let Some(b) = parse_bool(field) {
        return CellValue::Boolean(b);
    }
    if let Some(i) = parse_unambiguous_i64(field) {
        return CellValue::Int(i);
    }
    if let Some(n) = parse_unambiguous_f64(field) {
        return CellValue::Number(n);
    }
    CellValue::Text(field.to_string())
}

fn parse_bool(s: &str) -> Option<bool> {
    if s.eq_ignore_ascii_case("true") {
        Some(true)
    } else if s.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

fn parse_unambiguous_i64(s: &str) -> Option<i64> {
    // Leading zeros ("007") stay text; they are usually codes, not numbers.
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return None;
    }
    s.parse().ok()
}

fn parse_unambiguous_f64(s: &str) -> Option<f64> {
    if !(s.contains('.') || s.contains('e') || s.contains('E')) {
        return None;
    }
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    if !unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return None;
    }
    if unsigned.len() > 1 && unsigned.starts_with('0') && !unsigned.starts_with("0.") {
        return None;
    }
    let n: f64 = s.parse().ok()?;
    n.is_finite().then_some(n)
}
