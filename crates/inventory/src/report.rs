//! Rendering of whole carts (heterogeneous item collections).

use stockroom_core::Money;

use crate::entry::StockEntry;

const SEPARATOR_PAIRS: usize = 30;

/// `-=` repeated 30 times; written after every cart entry.
pub fn separator_line() -> String {
    "-=".repeat(SEPARATOR_PAIRS)
}

/// Each entry's own description followed by a separator line, in cart order.
pub fn describe_cart<E>(entries: &[E]) -> Vec<String>
where
    E: AsRef<dyn StockEntry>,
{
    entries
        .iter()
        .flat_map(|entry| {
            let mut lines = entry.as_ref().describe_info();
            lines.push(separator_line());
            lines
        })
        .collect()
}

/// Sum of every entry's rounded total value.
pub fn cart_total<E>(entries: &[E]) -> Money
where
    E: AsRef<dyn StockEntry>,
{
    entries.iter().map(|entry| entry.as_ref().total_value()).sum()
}
