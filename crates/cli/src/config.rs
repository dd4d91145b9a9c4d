//! Environment-driven configuration.

use std::path::PathBuf;

use crate::error::CliError;

/// Path to a JSON cart file; the built-in cart is used when unset.
pub const CART_VAR: &str = "STOCKROOM_CART";

/// Enables validation of every cart entry before printing.
pub const STRICT_VAR: &str = "STOCKROOM_STRICT";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub cart_path: Option<PathBuf>,
    pub strict: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CliError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let cart_path = lookup(CART_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let strict = match lookup(STRICT_VAR) {
            Some(raw) => parse_flag(STRICT_VAR, &raw)?,
            None => false,
        };

        Ok(Self { cart_path, strict })
    }
}

fn parse_flag(key: &str, raw: &str) -> Result<bool, CliError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => Err(CliError::Config(format!(
            "{key} must be a boolean flag, got `{other}`"
        ))),
    }
}
