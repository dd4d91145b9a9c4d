use std::path::Path;

use serde::Deserialize;

use stockroom_core::Money;
use stockroom_inventory::{PerishableStockItem, StockEntry, StockItem};

use crate::error::CliError;

// -------------------------
// Cart file DTOs
// -------------------------

/// One entry of a JSON cart file, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CartEntryDto {
    Standard {
        name: String,
        unit_price: Money,
        quantity: u32,
    },
    Perishable {
        name: String,
        unit_price: Money,
        quantity: u32,
        expiration_date: String,
    },
}

impl CartEntryDto {
    pub fn into_entry(self) -> Box<dyn StockEntry> {
        match self {
            CartEntryDto::Standard {
                name,
                unit_price,
                quantity,
            } => Box::new(StockItem::new(name, unit_price, quantity)),
            CartEntryDto::Perishable {
                name,
                unit_price,
                quantity,
                expiration_date,
            } => Box::new(PerishableStockItem::new(
                name,
                unit_price,
                quantity,
                expiration_date,
            )),
        }
    }
}

pub fn parse_cart(json: &str) -> Result<Vec<Box<dyn StockEntry>>, CliError> {
    let dtos: Vec<CartEntryDto> = serde_json::from_str(json)?;
    Ok(dtos.into_iter().map(CartEntryDto::into_entry).collect())
}

pub fn load_cart(path: &Path) -> Result<Vec<Box<dyn StockEntry>>, CliError> {
    let json = std::fs::read_to_string(path).map_err(|source| CliError::CartIo {
        path: path.to_path_buf(),
        source,
    })?;
    parse_cart(&json)
}
