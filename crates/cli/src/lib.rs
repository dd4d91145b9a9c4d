//! `stockroom-cli` — the `stockroom` demo driver.
//!
//! Builds stock items, prints their reports, then walks a mixed cart through
//! the shared [`stockroom_inventory::StockEntry`] interface.

pub mod config;
pub mod demo;
pub mod dto;
pub mod error;

pub use config::Config;
pub use error::CliError;
