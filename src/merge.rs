//! Merges one group's products with its price entries into flat output rows

use crate::api::tcgcsv::{PriceEntry, Product};
use serde_json::Number;
use std::collections::HashMap;

/// One flattened (product, price-variant) pair
///
/// Price fields are display strings: empty when the upstream value is
/// missing or null, otherwise the JSON number's own textual representation.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputRow {
    pub product_id: u32,
    pub set_name: String,
    pub product_name: String,
    pub rarity: String,
    pub sub_type_name: String,
    pub market_price: String,
    pub mid_price: String,
    pub low_price: String,
    pub high_price: String,
}

/// Extract the rarity from a product's attribute list: the first entry
/// named "Rarity" wins, value trimmed; no such entry yields an empty string.
pub fn extract_rarity(product: &Product) -> String {
    product
        .extended_data
        .iter()
        .find(|entry| entry.name == "Rarity")
        .map(|entry| entry.value.trim().to_string())
        .unwrap_or_default()
}

fn price_text(value: &Option<Number>) -> String {
    value.as_ref().map(Number::to_string).unwrap_or_default()
}

/// Produce the output rows for one group.
///
/// Every product yields at least one row: one per matching price variant,
/// in the order the variants first appear in the price sequence, or a
/// single row with empty variant and price fields when no price entry
/// matches. A repeated (product, variant) pair keeps its first position
/// but takes the later entry's values.
pub fn merge_group(set_name: &str, products: &[Product], prices: &[PriceEntry]) -> Vec<OutputRow> {
    // Variants per product, first-seen order, duplicates replaced in place
    let mut variants_by_product: HashMap<u32, Vec<&PriceEntry>> = HashMap::new();
    for price in prices {
        let variants = variants_by_product.entry(price.product_id).or_default();
        match variants
            .iter_mut()
            .find(|known| known.sub_type_name == price.sub_type_name)
        {
            Some(slot) => *slot = price,
            None => variants.push(price),
        }
    }

    let mut rows = Vec::with_capacity(products.len());
    for product in products {
        let name = product.name.trim().to_string();
        let rarity = extract_rarity(product);

        match variants_by_product.get(&product.product_id) {
            Some(variants) => {
                for price in variants {
                    rows.push(OutputRow {
                        product_id: product.product_id,
                        set_name: set_name.to_string(),
                        product_name: name.clone(),
                        rarity: rarity.clone(),
                        sub_type_name: price.sub_type_name.clone(),
                        market_price: price_text(&price.market_price),
                        mid_price: price_text(&price.mid_price),
                        low_price: price_text(&price.low_price),
                        high_price: price_text(&price.high_price),
                    });
                }
            }
            None => rows.push(OutputRow {
                product_id: product.product_id,
                set_name: set_name.to_string(),
                product_name: name,
                rarity,
                sub_type_name: String::new(),
                market_price: String::new(),
                mid_price: String::new(),
                low_price: String::new(),
                high_price: String::new(),
            }),
        }
    }

    rows
}

#[cfg(test)]
#[path = "merge_tests.rs"]
mod tests;
