use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indexmap::IndexMap;
use xlsx2seed_core::{KeyBasedRecord, SeedData, Subdivision};

pub const SEED_EXTENSION: &str = "yml";

pub fn render_key_based(records: &KeyBasedRecord) -> Result<String> {
    serde_yaml::to_string(records).context("failed to serialize seed records")
}

/// Render `{sheet_name: {dataN: record}}` for the combined stdout stream.
///
/// Documents for different sheets concatenate into one mapping.
pub fn render_sheet_document(data: &SeedData) -> Result<String> {
    let mut document: IndexMap<&str, KeyBasedRecord> = IndexMap::new();
    document.insert(data.sheet_name(), data.as_key_based());
    serde_yaml::to_string(&document).context("failed to serialize seed records")
}

pub fn seed_path(dir: &Path, group_name: &str) -> PathBuf {
    dir.join(format!("{group_name}.{SEED_EXTENSION}"))
}

/// Write one file per output group and return the written paths.
///
/// Without a subdivision the single group is named after the sheet.
pub fn write_single_or_separated(
    dir: &Path,
    data: &SeedData,
    subdivision: Subdivision,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;

    let mut written = Vec::new();
    for group in data.subdivide(subdivision) {
        let path = seed_path(dir, &group.name);
        let text = render_key_based(&group.as_key_based())?;
        std::fs::write(&path, text)
            .with_context(|| format!("failed to write {}", path.display()))?;
        written.push(path);
    }
    Ok(written)
}
