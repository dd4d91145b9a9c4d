use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, Money};

use crate::entry::StockEntry;
use crate::item::StockItem;

/// `chrono` format of expiration dates (`10/05/2023`).
pub const EXPIRATION_DATE_FORMAT: &str = "%d/%m/%Y";

const NOTICE_RULE_WIDTH: usize = 30;

/// A stock item that expires.
///
/// The expiration date is kept as given and only parsed on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerishableStockItem {
    #[serde(flatten)]
    item: StockItem,
    expiration_date: String,
}

impl PerishableStockItem {
    pub fn new(
        name: impl Into<String>,
        unit_price: impl Into<Money>,
        quantity: u32,
        expiration_date: impl Into<String>,
    ) -> Self {
        Self {
            item: StockItem::new(name, unit_price, quantity),
            expiration_date: expiration_date.into(),
        }
    }

    pub fn expiration_date(&self) -> &str {
        &self.expiration_date
    }

    pub fn describe_expiration(&self) -> String {
        format!("O produto vence no dia {}", self.expiration_date)
    }

    /// Parses the expiration date as `dd/mm/yyyy`.
    pub fn expires_on(&self) -> DomainResult<NaiveDate> {
        let raw = self.expiration_date.trim();
        if raw.is_empty() {
            return Err(DomainError::invalid_date(raw, "cannot be empty"));
        }
        NaiveDate::parse_from_str(raw, EXPIRATION_DATE_FORMAT)
            .map_err(|e| DomainError::invalid_date(raw, e.to_string()))
    }

    /// An item is still sellable on its expiration day.
    pub fn is_expired_on(&self, day: NaiveDate) -> DomainResult<bool> {
        Ok(day > self.expires_on()?)
    }
}

impl StockEntry for PerishableStockItem {
    fn stock_item(&self) -> &StockItem {
        &self.item
    }

    fn describe_info(&self) -> Vec<String> {
        let rule = "=".repeat(NOTICE_RULE_WIDTH);
        let mut lines = self.item.info_lines();
        lines.push(rule.clone());
        lines.push("Esse produto é perecível!".to_string());
        lines.push(rule);
        lines
    }

    fn validate(&self) -> DomainResult<()> {
        self.item.check_attributes()?;
        self.expires_on().map(|_| ())
    }
}
