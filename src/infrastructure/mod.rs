//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod repository;
pub mod row_source;

pub use config::Config;
pub use repository::{ClimbRepository, FileSystemRepository};
pub use row_source::{parse_sheet_date, CsvRowSource, LogRow, RowSource};
