//! TCGCSV price export
//!
//! Fetches the Pokemon product catalog and current prices from the TCGCSV
//! JSON endpoints, merges them group by group and writes one flat CSV file.

pub mod api;
pub mod error;
pub mod export;
pub mod merge;

// Re-export commonly used items
pub use api::tcgcsv::{Group, PriceEntry, Product, TcgcsvClient, POKEMON_CATEGORY_ID};
pub use error::{ExportError, Result};
pub use export::{export_groups, CsvExporter, ExportSummary};
pub use merge::{merge_group, OutputRow};
