//! Decimal formatting for display.
//!
//! [`plain`] keeps every significant digit. [`display`] is the compact form: values of 100 and above are shown without decimals, values from 1 to 100 with two,
//! and smaller values with just enough places to show three significant digits. Values with
//! more than five leading fractional zeros switch to subscript notation: `0.0(6)1` reads as
//! "zero, point, six zeros, then 1".

use rust_decimal::prelude::*;
use rust_decimal::RoundingStrategy;

const MAX_STANDARD_PLACES: u32 = 8;
const SUBSCRIPT_THRESHOLD: u32 = 5;
const SUBSCRIPT_DIGITS: u32 = 4;

enum DecimalFormat {
    Standard(u32),
    Subscript { zeros: u32, significant: String },
}

#[inline]
fn digit_count(n: u128) -> u32 {
    if n == 0 {
        1
    } else {
        n.ilog10() + 1
    }
}

fn decimal_format(value: &Decimal) -> DecimalFormat {
    let abs_value = value.abs();

    if abs_value.is_zero() || abs_value >= Decimal::ONE {
        let places = if abs_value >= Decimal::ONE_HUNDRED { 0 } else { 2 };
        return DecimalFormat::Standard(places);
    }

    let mantissa = abs_value.mantissa().unsigned_abs();
    let digits = digit_count(mantissa);
    let leading_zeros = abs_value.scale().saturating_sub(digits);

    if leading_zeros <= SUBSCRIPT_THRESHOLD {
        return DecimalFormat::Standard((leading_zeros + 3).min(MAX_STANDARD_PLACES));
    }

    let mut significant = if digits > SUBSCRIPT_DIGITS {
        mantissa / 10u128.pow(digits - SUBSCRIPT_DIGITS)
    } else {
        mantissa
    };
    while significant > 0 && significant % 10 == 0 {
        significant /= 10;
    }

    DecimalFormat::Subscript {
        zeros: leading_zeros,
        significant: significant.to_string(),
    }
}

/// Trims trailing fractional zeros (and a dangling point).
fn trim_fraction(formatted: String) -> String {
    if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    }
}

/// Inserts `,` between groups of three integer digits.
pub(crate) fn group_thousands(formatted: &str) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match fraction {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Every significant digit of `value`, trailing zeros trimmed and thousands grouped.
pub fn plain(value: &Decimal) -> String {
    let normalized = value.normalize();
    if normalized.is_zero() {
        return "0".to_string();
    }
    group_thousands(&trim_fraction(normalized.to_string()))
}

/// Format a `Decimal` for display.
pub fn display(value: &Decimal) -> String {
    match decimal_format(value) {
        DecimalFormat::Standard(places) => {
            let rounded =
                value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
            let trimmed = trim_fraction(rounded.to_string());
            if trimmed == "-0" {
                return "0".to_string();
            }
            group_thousands(&trimmed)
        }
        DecimalFormat::Subscript { zeros, significant } => {
            let sign = if value.is_sign_negative() { "-" } else { "" };
            format!("{}0.0({}){}", sign, zeros, significant)
        }
    }
}
