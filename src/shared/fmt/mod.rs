//! Human-readable number formatting.
//!
//! - `decimal` — full-precision plain form, plus a compact display with subscript notation
//! - `currency` — magnitude-suffixed (M/B/T) amounts, prices and change labels

pub mod currency;
pub mod decimal;

pub use currency::{change_text, format_large_number, format_price, formatted_value, LargeNumberUnit};
