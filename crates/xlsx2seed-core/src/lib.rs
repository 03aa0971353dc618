//! Spreadsheet-to-seed transformation core.
//!
//! A [`SheetModel`] holds one sheet's column names and rows. [`RecordMapper`]
//! turns it into ordered `dataN` records ([`SeedData`]), and a [`Subdivision`]
//! splits those records into named output groups. Nothing here performs I/O.

pub mod config;
pub mod error;
pub mod record;
pub mod rule;
pub mod sheet;
pub mod subdivide;
pub mod value;

pub use config::SheetConfig;
pub use error::CoreError;
pub use record::{
    KeyBasedRecord, KeyedRecord, Record, RecordMapper, SeedData, SeedGroup, record_key,
};
pub use rule::{SubdivideRule, parse_rule_list};
pub use sheet::{ID_COLUMN, SheetModel};
pub use subdivide::{GroupPlan, Subdivision};
pub use value::CellValue;
