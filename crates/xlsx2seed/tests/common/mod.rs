#![allow(dead_code)]

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use xlsx2seed_core::KeyBasedRecord;

/// Workbook with an `items` sheet (4 records, one zero id) and an id-less `Sheet1`.
pub fn write_items_workbook(dir: &Path, file_name: &str) -> PathBuf {
    let path = dir.join(file_name);
    let mut book = umya_spreadsheet::new_file();
    {
        let memo = book.get_sheet_by_name_mut("Sheet1").unwrap();
        memo.get_cell_mut("A1").set_value("memo");
        memo.get_cell_mut("A2").set_value("not seed data");
    }
    {
        let items = book.new_sheet("items").unwrap();
        for (col, name) in ["id", "name", "ver", "note"].iter().enumerate() {
            items.get_cell_mut((col as u32 + 1, 1)).set_value(*name);
        }
        let rows: [(f64, &str, f64); 5] = [
            (1.0, "apple", 1.0),
            (2.0, "pear", 2.0),
            (0.0, "dropped", 2.0),
            (3.0, "plum", 2.0),
            (4.0, "fig", 1.0),
        ];
        for (i, (id, name, ver)) in rows.iter().enumerate() {
            let row = i as u32 + 2;
            items.get_cell_mut((1, row)).set_value_number(*id);
            items.get_cell_mut((2, row)).set_value(*name);
            items.get_cell_mut((3, row)).set_value_number(*ver);
            items.get_cell_mut((4, row)).set_value("n");
        }
    }
    umya_spreadsheet::writer::xlsx::write(&book, &path).expect("write xlsx");
    path
}

pub fn read_seed(path: &Path) -> KeyBasedRecord {
    let text = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("read {}: {e}", path.display()));
    serde_yaml::from_str(&text).expect("seed file is yaml")
}

pub fn keys(records: &KeyBasedRecord) -> Vec<&str> {
    records.keys().map(String::as_str).collect()
}

pub fn parse_stream(text: &str) -> IndexMap<String, KeyBasedRecord> {
    serde_yaml::from_str(text).expect("stdout is yaml")
}
