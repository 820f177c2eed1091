//! Parsing of numeric answers typed at the console.

use thiserror::Error;

/// A numeric answer that could not be parsed. Aborts the current operation
/// only; the menu loop carries on.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid input. Price should be a number, and stock quantity should be an integer.")]
    ProductNumbers,

    #[error("Invalid input. Quantity should be an integer.")]
    Quantity,
}

/// Surrounding whitespace is tolerated; anything else must be a float.
pub fn parse_price(raw: &str) -> Result<f64, InputError> {
    raw.trim().parse().map_err(|_| InputError::ProductNumbers)
}

pub fn parse_stock(raw: &str) -> Result<i64, InputError> {
    raw.trim().parse().map_err(|_| InputError::ProductNumbers)
}

pub fn parse_quantity(raw: &str) -> Result<i64, InputError> {
    raw.trim().parse().map_err(|_| InputError::Quantity)
}

/// Empty answer means "skip".
pub fn parse_optional_price(raw: &str) -> Result<Option<f64>, InputError> {
    if raw.is_empty() {
        return Ok(None);
    }
    parse_price(raw).map(Some)
}

pub fn parse_optional_stock(raw: &str) -> Result<Option<i64>, InputError> {
    if raw.is_empty() {
        return Ok(None);
    }
    parse_stock(raw).map(Some)
}

pub fn optional_text(raw: String) -> Option<String> {
    if raw.is_empty() { None } else { Some(raw) }
}
