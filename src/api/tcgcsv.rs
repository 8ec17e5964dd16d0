//! TCGCSV catalog client: groups, products and prices for one category
//!
//! The JSON endpoints at tcgcsv.com mirror the TCGplayer catalog and are
//! publicly accessible without authentication.

use crate::error::{ExportError, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Number;
use std::time::Duration;

/// TCGCSV endpoint root
const BASE_URL: &str = "https://tcgcsv.com/tcgplayer";

/// TCGplayer category ID for Pokemon
pub const POKEMON_CATEGORY_ID: u32 = 3;

const USER_AGENT: &str = "tcgcsv_export/0.1";

/// A named sub-collection of a category (one expansion set)
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub group_id: u32,
    #[serde(default)]
    pub name: String,
}

/// A sellable item within a group
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub extended_data: Vec<ExtendedDataEntry>,
}

/// Name/value attribute pair from a product's extendedData list
#[derive(Debug, Deserialize, Clone)]
pub struct ExtendedDataEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
}

/// Current price quote for one product variant ("Normal", "Holofoil", ...)
///
/// Price values stay raw JSON numbers so the export reproduces the upstream
/// representation exactly instead of reformatting through a float.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PriceEntry {
    pub product_id: u32,
    #[serde(default)]
    pub sub_type_name: String,
    pub market_price: Option<Number>,
    pub mid_price: Option<Number>,
    pub low_price: Option<Number>,
    pub high_price: Option<Number>,
}

/// Response envelope shared by all TCGCSV endpoints. A missing `results`
/// field is an empty sequence, not an error.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    #[serde(default = "Vec::new")]
    results: Vec<T>,
}

/// Blocking TCGCSV client with a reusable connection pool and an optional
/// post-request delay
pub struct TcgcsvClient {
    http: reqwest::blocking::Client,
    base_url: String,
    delay: Duration,
}

impl TcgcsvClient {
    /// Create a client against the public TCGCSV endpoints
    pub fn new(delay: Duration) -> Self {
        Self::with_base_url(BASE_URL.to_string(), delay)
    }

    /// Creates a client against an arbitrary endpoint root (for testing
    /// with mock servers).
    pub(crate) fn with_base_url(base_url: String, delay: Duration) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            base_url,
            delay,
        }
    }

    /// List all groups of a category, in upstream order
    pub fn fetch_groups(&self, category_id: u32) -> Result<Vec<Group>> {
        self.get_results(&format!("{}/{}/groups", self.base_url, category_id))
    }

    /// List the products of one group
    pub fn fetch_products(&self, category_id: u32, group_id: u32) -> Result<Vec<Product>> {
        self.get_results(&format!(
            "{}/{}/{}/products",
            self.base_url, category_id, group_id
        ))
    }

    /// List the price entries of one group
    pub fn fetch_prices(&self, category_id: u32, group_id: u32) -> Result<Vec<PriceEntry>> {
        self.get_results(&format!(
            "{}/{}/{}/prices",
            self.base_url, category_id, group_id
        ))
    }

    /// Fetch products and prices for one group. Either fetch failing fails
    /// the pair, so a group is merged from complete data or not at all.
    pub fn fetch_group_data(
        &self,
        category_id: u32,
        group_id: u32,
    ) -> Result<(Vec<Product>, Vec<PriceEntry>)> {
        let products = self.fetch_products(category_id, group_id)?;
        let prices = self.fetch_prices(category_id, group_id)?;
        Ok((products, prices))
    }

    /// GET one endpoint and unwrap its `results` envelope, sleeping
    /// afterwards when a delay is configured
    fn get_results<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>> {
        log::debug!("GET {}", url);

        let response = self.http.get(url).header("User-Agent", USER_AGENT).send()?;

        if !response.status().is_success() {
            return Err(ExportError::HttpStatus(response.status()));
        }

        let body = response.text()?;
        let envelope: Envelope<T> = serde_json::from_str(&body)?;

        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }

        Ok(envelope.results)
    }
}

#[cfg(test)]
#[path = "tcgcsv_tests.rs"]
mod tests;
