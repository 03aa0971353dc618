use std::collections::HashSet;

use indexmap::IndexMap;

use crate::config::SheetConfig;
use crate::sheet::{ID_COLUMN, SheetModel};
use crate::subdivide::{GroupPlan, Subdivision};
use crate::value::CellValue;

/// Field map of one emitted row, in column order.
pub type Record = IndexMap<String, CellValue>;

/// `dataN -> record` mapping, the shape written to seed files.
pub type KeyBasedRecord = IndexMap<String, Record>;

/// Build the key for the `ordinal`-th emitted record (1-based).
pub fn record_key(ordinal: usize) -> String {
    format!("data{ordinal}")
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyedRecord {
    pub key: String,
    pub record: Record,
}

/// Column positions resolved once per sheet.
#[derive(Debug)]
struct ColumnRoles<'s> {
    id: usize,
    version: Option<usize>,
    emitted: Vec<(usize, &'s str)>,
}

impl<'s> ColumnRoles<'s> {
    fn resolve(sheet: &'s SheetModel, config: &SheetConfig) -> Option<Self> {
        let id = sheet.column_index(ID_COLUMN)?;
        // A configured version column that the sheet lacks disables filtering.
        let version = config
            .version_column
            .as_deref()
            .filter(|name| !name.is_empty())
            .and_then(|name| sheet.column_index(name));

        let mut seen = HashSet::new();
        let mut emitted = Vec::with_capacity(sheet.column_names().len());
        for (idx, name) in sheet.column_names().iter().enumerate() {
            if name.is_empty() || Some(idx) == version || config.is_ignored(name) {
                continue;
            }
            if seen.insert(name.as_str()) {
                emitted.push((idx, name.as_str()));
            }
        }

        Some(Self {
            id,
            version,
            emitted,
        })
    }
}

/// Turns sheet rows into keyed records.
///
/// Rows with a falsy id are dropped without consuming a key, so keys always
/// run `data1..dataN` without gaps.
#[derive(Debug, Clone)]
pub struct RecordMapper<'a> {
    config: &'a SheetConfig,
    require_version: &'a str,
}

impl<'a> RecordMapper<'a> {
    pub fn new(config: &'a SheetConfig) -> Self {
        Self {
            config,
            require_version: "",
        }
    }

    /// Keep only rows whose version cell stringifies to `version`.
    pub fn require_version(mut self, version: &'a str) -> Self {
        self.require_version = version;
        self
    }

    pub fn map(&self, sheet: &SheetModel) -> SeedData {
        let mut records = Vec::new();
        let Some(roles) = ColumnRoles::resolve(sheet, self.config) else {
            return SeedData::new(sheet.sheet_name(), records);
        };
        let version_filter = roles.version.filter(|_| !self.require_version.is_empty());

        for row in sheet.rows() {
            if !row[roles.id].is_truthy() {
                continue;
            }
            if let Some(version) = version_filter {
                if row[version].to_string() != self.require_version {
                    continue;
                }
            }

            let record: Record = roles
                .emitted
                .iter()
                .map(|&(idx, name)| (name.to_string(), row[idx].clone()))
                .collect();
            records.push(KeyedRecord {
                key: record_key(records.len() + 1),
                record,
            });
        }

        SeedData::new(sheet.sheet_name(), records)
    }
}

/// Ordered records of one sheet, ready for subdivision and writing.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedData {
    sheet_name: String,
    records: Vec<KeyedRecord>,
}

impl SeedData {
    pub fn new(sheet_name: impl Into<String>, records: Vec<KeyedRecord>) -> Self {
        Self {
            sheet_name: sheet_name.into(),
            records,
        }
    }

    pub fn sheet_name(&self) -> &str {
        &self.sheet_name
    }

    pub fn records(&self) -> &[KeyedRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn as_key_based(&self) -> KeyBasedRecord {
        to_key_based(&self.records)
    }

    /// Split the records into output groups. Keys are not renumbered.
    pub fn subdivide(&self, subdivision: Subdivision) -> Vec<SeedGroup<'_>> {
        subdivision
            .plan(&self.sheet_name, self.records.len())
            .into_iter()
            .map(|GroupPlan { name, range }| SeedGroup {
                name,
                records: &self.records[range],
            })
            .collect()
    }
}

/// One named output group borrowed from [`SeedData`].
#[derive(Debug, Clone, PartialEq)]
pub struct SeedGroup<'a> {
    pub name: String,
    pub records: &'a [KeyedRecord],
}

impl SeedGroup<'_> {
    pub fn as_key_based(&self) -> KeyBasedRecord {
        to_key_based(self.records)
    }
}

fn to_key_based(records: &[KeyedRecord]) -> KeyBasedRecord {
    records
        .iter()
        .map(|keyed| (keyed.key.clone(), keyed.record.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(columns: &[&str], rows: Vec<Vec<CellValue>>) -> SheetModel {
        SheetModel::new(
            "sheet",
            columns.iter().map(|s| s.to_string()).collect(),
            rows,
        )
    }

    #[test]
    fn roles_skip_version_ignored_and_blank_columns() {
        let s = sheet(&["id", "", "ver", "memo", "name", "name"], vec![]);
        let config = SheetConfig {
            version_column: Some("ver".into()),
            ignore_columns: vec!["memo".into()],
            column_names_row: None,
        };
        let roles = ColumnRoles::resolve(&s, &config).unwrap();
        assert_eq!(roles.id, 0);
        assert_eq!(roles.version, Some(2));
        assert_eq!(roles.emitted, vec![(0, "id"), (4, "name")]);
    }

    #[test]
    fn missing_version_column_disables_filter() {
        let s = sheet(
            &["id", "v"],
            vec![vec![1.into(), "1".into()], vec![2.into(), "2".into()]],
        );
        let config = SheetConfig {
            version_column: Some("release".into()),
            ..SheetConfig::default()
        };
        let data = s.data(&config, "2");
        assert_eq!(data.len(), 2);
    }

    #[test]
    fn no_id_column_yields_nothing() {
        let s = sheet(&["name"], vec![vec!["a".into()]]);
        assert!(s.data(&SheetConfig::default(), "").is_empty());
    }

    #[test]
    fn id_only_row_is_emitted_with_empty_fields() {
        let s = sheet(&["id", "a", "b"], vec![vec![9.into()]]);
        let data = s.data(&SheetConfig::default(), "");
        let record = &data.records()[0].record;
        assert_eq!(record["id"], CellValue::Int(9));
        assert_eq!(record["a"], CellValue::Empty);
        assert_eq!(record["b"], CellValue::Empty);
    }

    #[test]
    fn field_order_follows_columns() {
        let s = sheet(&["z", "id", "a"], vec![vec!["z1".into(), 1.into(), "a1".into()]]);
        let data = s.data(&SheetConfig::default(), "");
        let fields: Vec<&str> = data.records()[0].record.keys().map(String::as_str).collect();
        assert_eq!(fields, vec!["z", "id", "a"]);
    }
}
