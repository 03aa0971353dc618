#[cfg(feature = "calamine")]
pub mod calamine;

#[cfg(feature = "calamine")]
pub use self::calamine::CalamineAdapter;

#[cfg(feature = "csv")]
pub mod csv;

#[cfg(feature = "csv")]
pub use self::csv::CsvAdapter;

mod any;

pub use any::AnyWorkbook;
