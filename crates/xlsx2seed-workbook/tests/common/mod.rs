use std::path::PathBuf;

use tempfile::TempDir;

/// Write an xlsx built by `f` into a fresh temp directory.
///
/// The returned `TempDir` must outlive any reader of the path.
pub fn build_workbook(f: impl FnOnce(&mut umya_spreadsheet::Spreadsheet)) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("fixture.xlsx");
    let mut book = umya_spreadsheet::new_file();
    f(&mut book);
    umya_spreadsheet::writer::xlsx::write(&book, &path).expect("write xlsx");
    (dir, path)
}
