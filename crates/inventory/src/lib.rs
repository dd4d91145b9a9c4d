//! Inventory domain module.
//!
//! Stock items and their textual reports, implemented as deterministic domain
//! logic (no IO). Callers decide where the rendered lines go.

pub mod entry;
pub mod item;
pub mod perishable;
pub mod report;

pub use entry::StockEntry;
pub use item::StockItem;
pub use perishable::{EXPIRATION_DATE_FORMAT, PerishableStockItem};
pub use report::{cart_total, describe_cart, separator_line};
