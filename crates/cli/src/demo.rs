//! The demo flow: individual item reports, then a polymorphic cart walk.

use std::io::Write;

use rust_decimal::Decimal;

use stockroom_inventory::{
    PerishableStockItem, StockEntry, StockItem, cart_total, describe_cart,
};

use crate::config::Config;
use crate::dto;
use crate::error::CliError;

/// The cart printed when no cart file is configured.
pub fn default_cart() -> Vec<Box<dyn StockEntry>> {
    vec![
        Box::new(StockItem::new("Água", Decimal::new(199, 2), 20)),
        Box::new(StockItem::new("Refrigerante", Decimal::new(499, 2), 25)),
        Box::new(PerishableStockItem::new(
            "Leite",
            Decimal::new(799, 2),
            10,
            "10/05/2023",
        )),
        Box::new(PerishableStockItem::new(
            "Maçã",
            Decimal::new(99, 2),
            15,
            "28/06/2025",
        )),
    ]
}

pub fn run<W: Write>(out: &mut W, config: &Config) -> Result<(), CliError> {
    write_showcase(out)?;

    let cart = match &config.cart_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading cart file");
            dto::load_cart(path)?
        }
        None => default_cart(),
    };

    if config.strict {
        validate_cart(&cart)?;
    }

    write_lines(out, describe_cart(&cart))?;
    out.flush()?;

    tracing::info!(
        entries = cart.len(),
        total = %cart_total(&cart),
        "cart described"
    );
    Ok(())
}

/// Each operation called directly on concrete items.
fn write_showcase<W: Write>(out: &mut W) -> Result<(), CliError> {
    let agua = StockItem::new("Água", Decimal::new(199, 2), 20);
    write_lines(out, agua.describe_info())?;
    writeln!(out, "{}", agua.describe_total_value())?;

    let refrigerante = StockItem::new("Refrigerante", Decimal::new(499, 2), 25);
    write_lines(out, refrigerante.describe_info())?;
    writeln!(out, "{}", refrigerante.describe_total_value())?;

    let leite = PerishableStockItem::new("Leite", Decimal::new(799, 2), 10, "10/05/2023");
    write_lines(out, leite.describe_info())?;
    writeln!(out, "{}", leite.describe_total_value())?;
    writeln!(out, "{}", leite.describe_expiration())?;

    Ok(())
}

fn validate_cart(cart: &[Box<dyn StockEntry>]) -> Result<(), CliError> {
    for (index, entry) in cart.iter().enumerate() {
        if let Err(source) = entry.validate() {
            let name = entry.stock_item().name().to_string();
            tracing::warn!(index, name = %name, error = %source, "invalid cart entry");
            return Err(CliError::InvalidEntry {
                index,
                name,
                source,
            });
        }
    }
    Ok(())
}

fn write_lines<W: Write>(out: &mut W, lines: Vec<String>) -> std::io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
