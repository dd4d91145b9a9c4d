//! Shared capability of everything that can sit on a stock shelf.

use stockroom_core::{DomainResult, Money};

use crate::item::StockItem;

/// Common interface of stock items.
///
/// Implementors expose their underlying [`StockItem`]; the default methods
/// render from it. Specialized items override `describe_info` and keep the
/// base lines by calling [`StockItem::info_lines`] first.
pub trait StockEntry: core::fmt::Debug {
    /// The plain stock attributes (name, unit price, quantity).
    fn stock_item(&self) -> &StockItem;

    /// Human-readable description, one entry per output line.
    fn describe_info(&self) -> Vec<String> {
        self.stock_item().info_lines()
    }

    /// Unit price times quantity, rounded to cents.
    fn total_value(&self) -> Money {
        self.stock_item().rounded_total()
    }

    fn describe_total_value(&self) -> String {
        format!(
            "O valor total de estoque deste produto é {}",
            self.total_value()
        )
    }

    /// Opt-in validation; construction itself never rejects input.
    fn validate(&self) -> DomainResult<()> {
        self.stock_item().check_attributes()
    }
}
