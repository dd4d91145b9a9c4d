use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, Money};

use crate::entry::StockEntry;

/// A product kept in stock: name, unit price and quantity on hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockItem {
    name: String,
    unit_price: Money,
    quantity: u32,
}

impl StockItem {
    /// Stores the attributes verbatim. Never fails; see [`StockEntry::validate`].
    pub fn new(name: impl Into<String>, unit_price: impl Into<Money>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            unit_price: unit_price.into(),
            quantity,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// `Nome`, `Preço` and `Quantidade` lines, in that order.
    pub fn info_lines(&self) -> Vec<String> {
        vec![
            format!("Nome: {}", self.name),
            format!("Preço: {}", self.unit_price),
            format!("Quantidade: {}", self.quantity),
        ]
    }

    pub fn rounded_total(&self) -> Money {
        self.unit_price.times(self.quantity).round_to_cents()
    }

    pub(crate) fn check_attributes(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::invalid_attribute("name", "cannot be empty"));
        }
        if self.unit_price.is_negative() {
            return Err(DomainError::invalid_attribute(
                "unit_price",
                format!("cannot be negative (got {})", self.unit_price.format_amount()),
            ));
        }
        Ok(())
    }
}

impl StockEntry for StockItem {
    fn stock_item(&self) -> &StockItem {
        self
    }
}
