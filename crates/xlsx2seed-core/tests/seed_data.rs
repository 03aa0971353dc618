use indexmap::IndexMap;
use xlsx2seed_core::{
    CellValue, KeyBasedRecord, Record, SheetConfig, SheetModel, SubdivideRule, Subdivision,
};

fn columns(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn record(fields: &[(&str, CellValue)]) -> Record {
    fields
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

fn basic_sheet() -> SheetModel {
    SheetModel::new(
        "sheet",
        columns(&["id", "col1", "col2"]),
        vec![
            vec![1.into(), "c1-1".into(), "c2-1".into()],
            vec![2.into(), "c1-2".into(), "c2-2".into()],
            vec![0.into(), "no".into(), "no-2".into()],
        ],
    )
}

fn numbered_sheet(n: i64) -> SheetModel {
    let rows = (1..=n)
        .map(|i| vec![CellValue::Int(i), CellValue::Text(format!("row{i}"))])
        .collect();
    SheetModel::new("sheet", columns(&["id", "name"]), rows)
}

#[test]
fn accessors() {
    let sheet = basic_sheet();
    assert_eq!(sheet.sheet_name(), "sheet");
    assert_eq!(sheet.column_names(), columns(&["id", "col1", "col2"]).as_slice());
    assert_eq!(sheet.rows().len(), 3);
    assert_eq!(sheet.rows()[2][1], CellValue::Text("no".into()));
}

#[test]
fn as_key_based_drops_zero_id() {
    let data = basic_sheet().data(&SheetConfig::default(), "");

    let mut expected: KeyBasedRecord = IndexMap::new();
    expected.insert(
        "data1".into(),
        record(&[
            ("id", 1.into()),
            ("col1", "c1-1".into()),
            ("col2", "c2-1".into()),
        ]),
    );
    expected.insert(
        "data2".into(),
        record(&[
            ("id", 2.into()),
            ("col1", "c1-2".into()),
            ("col2", "c2-2".into()),
        ]),
    );
    assert_eq!(data.as_key_based(), expected);
}

#[test]
fn falsy_ids_do_not_consume_keys() {
    let sheet = SheetModel::new(
        "sheet",
        columns(&["id", "v"]),
        vec![
            vec![CellValue::Empty, "a".into()],
            vec![10.into(), "b".into()],
            vec!["".into(), "c".into()],
            vec![CellValue::Number(0.0), "d".into()],
            vec!["x".into(), "e".into()],
            vec![false.into(), "f".into()],
            vec![11.into(), "g".into()],
        ],
    );
    let data = sheet.data(&SheetConfig::default(), "");
    let keys: Vec<&str> = data.records().iter().map(|r| r.key.as_str()).collect();
    assert_eq!(keys, vec!["data1", "data2", "data3"]);
    let values: Vec<String> = data
        .records()
        .iter()
        .map(|r| r.record["v"].to_string())
        .collect();
    assert_eq!(values, vec!["b", "e", "g"]);
}

#[test]
fn version_filter_matches_stringified_cell() {
    let sheet = SheetModel::new(
        "sheet",
        columns(&["id", "ver", "name"]),
        vec![
            vec![1.into(), 1.into(), "one".into()],
            vec![2.into(), CellValue::Number(2.0), "two".into()],
            vec![3.into(), "2".into(), "two-text".into()],
            vec![4.into(), CellValue::Empty, "none".into()],
        ],
    );
    let config = SheetConfig {
        version_column: Some("ver".into()),
        ..SheetConfig::default()
    };

    let filtered = sheet.data(&config, "2");
    let names: Vec<String> = filtered
        .records()
        .iter()
        .map(|r| r.record["name"].to_string())
        .collect();
    assert_eq!(names, vec!["two", "two-text"]);
    assert_eq!(filtered.records()[0].key, "data1");
    assert!(!filtered.records()[0].record.contains_key("ver"));

    let unfiltered = sheet.data(&config, "");
    assert_eq!(unfiltered.len(), 4);
    assert!(unfiltered.records().iter().all(|r| !r.record.contains_key("ver")));

    assert!(sheet.data(&config, "9").is_empty());
}

#[test]
fn ignored_columns_are_not_emitted() {
    let config = SheetConfig {
        ignore_columns: vec!["col2".into()],
        ..SheetConfig::default()
    };
    let data = basic_sheet().data(&config, "");
    for keyed in data.records() {
        assert_eq!(
            keyed.record.keys().collect::<Vec<_>>(),
            vec!["id", "col1"]
        );
    }
}

#[test]
fn subdivide_three_ways_preserves_keys() {
    let data = numbered_sheet(10).data(&SheetConfig::default(), "");
    let groups = data.subdivide(Subdivision::new(Some(3), Some(2)));

    let layout: Vec<(&str, Vec<&str>)> = groups
        .iter()
        .map(|g| {
            (
                g.name.as_str(),
                g.records.iter().map(|r| r.key.as_str()).collect(),
            )
        })
        .collect();
    assert_eq!(
        layout,
        vec![
            ("sheet1", vec!["data1", "data2", "data3"]),
            (
                "sheet2",
                vec!["data4", "data5", "data6", "data7", "data8"]
            ),
            ("sheet3", vec!["data9", "data10"]),
        ]
    );
}

#[test]
fn subdivide_prefix_larger_than_records() {
    let data = numbered_sheet(2).data(&SheetConfig::default(), "");
    let groups = data.subdivide(SubdivideRule::parse("5:sheet").unwrap().subdivision());
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].name, "sheet1");
    assert_eq!(groups[0].records.len(), 2);
}

#[test]
fn group_yaml_round_trip() {
    let sheet = SheetModel::new(
        "mixed",
        columns(&["id", "text", "num", "flag", "blank"]),
        vec![
            vec![1.into(), "a: b".into(), CellValue::Number(1.5), true.into()],
            vec![2.into(), "yes".into(), 3.into(), false.into(), CellValue::Empty],
            vec![3.into(), "0012".into(), CellValue::Number(-2.0), true.into()],
        ],
    );
    let data = sheet.data(&SheetConfig::default(), "");

    for group in data.subdivide(Subdivision::new(Some(1), None)) {
        let yaml = serde_yaml::to_string(&group.as_key_based()).unwrap();
        let parsed: KeyBasedRecord = serde_yaml::from_str(&yaml).unwrap();
        let expected: KeyBasedRecord = group
            .as_key_based()
            .into_iter()
            .map(|(k, r)| {
                let r = r.into_iter().map(|(f, v)| (f, v.normalized())).collect();
                (k, r)
            })
            .collect();
        assert_eq!(parsed, expected);
    }
}
