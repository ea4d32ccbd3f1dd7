//! Currency formatting: magnitude suffixes for market figures, price and change labels.

use super::decimal;
use rust_decimal::{Decimal, RoundingStrategy};

/// Magnitude bucket used to abbreviate large amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LargeNumberUnit {
    Trillion,
    Billion,
    Million,
    /// Below one million; shown without a suffix.
    None,
}

impl LargeNumberUnit {
    pub fn value(&self) -> Decimal {
        match self {
            Self::Trillion => Decimal::from(1_000_000_000_000u64),
            Self::Billion => Decimal::from(1_000_000_000u64),
            Self::Million => Decimal::from(1_000_000u64),
            Self::None => Decimal::ONE,
        }
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Trillion => "T",
            Self::Billion => "B",
            Self::Million => "M",
            Self::None => "",
        }
    }

    /// The largest unit that `amount` (by magnitude) reaches once scaled and
    /// rounded to two places, so `999999.999` counts as a million.
    pub fn for_amount(amount: &Decimal) -> Self {
        let abs = amount.abs();
        [Self::Trillion, Self::Billion, Self::Million]
            .into_iter()
            .find(|unit| round_two(abs / unit.value()) >= Decimal::ONE)
            .unwrap_or(Self::None)
    }
}

fn round_two(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn two_places(value: Decimal) -> String {
    format!("{:.2}", round_two(value))
}

/// Abbreviate a large amount: `1500000` → `"1.50M"`, `2300000000` → `"2.30B"`.
///
/// Amounts under one million are not suffixed and keep their full precision via
/// [`decimal::plain`], so `999` stays `"999"` and `0.123456` stays `"0.123456"`.
pub fn format_large_number(amount: &Decimal) -> String {
    match LargeNumberUnit::for_amount(amount) {
        LargeNumberUnit::None => decimal::plain(amount),
        unit => format!("{}{}", two_places(*amount / unit.value()), unit.suffix()),
    }
}

/// [`format_large_number`] for figures the API may omit; missing values read `"N/A"`.
pub fn formatted_value(amount: Option<&Decimal>) -> String {
    amount
        .map(format_large_number)
        .unwrap_or_else(|| "N/A".to_string())
}

/// Dollar price with two decimals, e.g. `"$ 12.34"`.
pub fn format_price(price: &Decimal) -> String {
    format!("$ {}", two_places(*price))
}

/// Percent change with a direction arrow, e.g. `"▲ 5.23 %"` or `"▼ -1.2 %"`.
pub fn change_text(change: &Decimal) -> String {
    let arrow = if change.is_sign_negative() && !change.is_zero() {
        "▼"
    } else {
        "▲"
    };
    format!("{} {} %", arrow, change)
}
