//! `stockroom-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no formatting of
//! whole reports).

pub mod error;
pub mod money;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use money::{CURRENCY_PREFIX, Money};
pub use value_object::ValueObject;
