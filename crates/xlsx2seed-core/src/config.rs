use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Per-run sheet configuration, usually read from `xlsx2seed.yml`.
///
/// Every key is optional; a missing key has no effect on the transformation.
/// Keys other than the three below are ignored so the file can be shared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetConfig {
    /// Column holding the version marker consumed by `--require-version`.
    pub version_column: Option<String>,
    /// Columns dropped from every emitted record.
    pub ignore_columns: Vec<String>,
    /// Zero-origin row index holding the column names.
    pub column_names_row: Option<usize>,
}

impl SheetConfig {
    /// Decode a YAML document. A blank document yields the default config.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CoreError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Option<Self> = serde_yaml::from_str(yaml)?;
        Ok(config.unwrap_or_default())
    }

    /// Apply command-line overrides. Empty values leave the file settings alone.
    pub fn apply_overrides(&mut self, version_column: &str, ignore_columns: &[String]) {
        if !version_column.is_empty() {
            self.version_column = Some(version_column.to_string());
        }
        let ignore_columns: Vec<String> = ignore_columns
            .iter()
            .filter(|name| !name.is_empty())
            .cloned()
            .collect();
        if !ignore_columns.is_empty() {
            self.ignore_columns = ignore_columns;
        }
    }

    pub fn column_names_row(&self) -> usize {
        self.column_names_row.unwrap_or(0)
    }

    pub fn is_ignored(&self, column: &str) -> bool {
        self.ignore_columns.iter().any(|name| name == column)
    }
}
