//! API client for the TCGCSV catalog endpoints

pub mod tcgcsv;

// Re-exports for public API convenience
pub use tcgcsv::{Group, PriceEntry, Product, TcgcsvClient, POKEMON_CATEGORY_ID};
