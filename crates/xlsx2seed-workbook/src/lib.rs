//! Workbook readers for xlsx2seed.
//!
//! Backends implement [`SpreadsheetReader`] and hand back raw cell grids;
//! [`SheetLoader`] turns those grids into [`xlsx2seed_core::SheetModel`]s using
//! the configured header row.

#[cfg(not(any(feature = "calamine", feature = "csv")))]
compile_error!("enable at least one of the `calamine` or `csv` features");

pub mod backends;
pub mod error;
pub mod loader;
pub mod traits;

pub use backends::AnyWorkbook;
#[cfg(feature = "calamine")]
pub use backends::CalamineAdapter;
#[cfg(feature = "csv")]
pub use backends::CsvAdapter;
#[cfg(feature = "csv")]
pub use backends::csv::{CsvReadOptions, CsvTypeInference};
pub use error::IoError;
pub use loader::{LoaderStats, SheetLoader, sheet_model};
pub use traits::{SheetData, SpreadsheetReader};

// Re-export for convenience
pub use xlsx2seed_core::{CellValue, SheetConfig, SheetModel};
