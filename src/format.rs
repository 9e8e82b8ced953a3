use rust_decimal::{Decimal, RoundingStrategy};

use crate::units::UnitAmount;

const TINY_FIAT: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Powers of ten and their suffixes, smallest first.
const MAGNITUDE_SUFFIXES: [(usize, &str); 3] = [(6, "M"), (9, "B"), (12, "T")];

/// Format a token amount for human display.
///
/// - zero renders as `"0"`, which is also the marker used to hide empty rows
/// - amounts below `0.000001` render as `"< 0.000001"`
/// - amounts below one keep up to 6 decimals, up to a million up to 4 decimals
///   with thousands separators
/// - larger amounts are scaled to `M`/`B`/`T` with 2 decimals
///
/// Tiers are picked after rounding, so `999999.99996` is `1M`. Trailing zeros
/// are always stripped.
pub fn format_amount(amount: &UnitAmount) -> String {
    if amount.is_zero() {
        return "0".to_string();
    }
    if !amount.at_least_pow10(-6) {
        return "< 0.000001".to_string();
    }

    let rounded = amount.round_dp(6);
    if !rounded.at_least_pow10(0) {
        return rounded.to_plain_string();
    }

    let rounded = amount.round_dp(4);
    if !rounded.at_least_pow10(6) {
        return group_number_string(&rounded.to_plain_string());
    }

    abbreviate(amount)
}

/// [`format_amount`] for a signed [`Decimal`].
pub fn format_floating_point_value(value: Decimal) -> String {
    if value.is_zero() {
        return "0".to_string();
    }
    let abs = value.abs();
    let amount = UnitAmount::from_base(&abs.mantissa().to_string(), abs.scale());
    match amount {
        Ok(amount) => with_sign(value, format_amount(&amount)),
        Err(_) => value.to_string(),
    }
}

/// Format a fiat value for human display: 2 fixed decimals with thousands
/// separators, `"0"` for zero and `"< 0.01"` for dust.
pub fn format_fiat_value(value: Decimal) -> String {
    if value.is_zero() {
        return "0".to_string();
    }

    let abs = value.abs();
    if abs < TINY_FIAT {
        return "< 0.01".to_string();
    }

    let s = pad_fraction_to_dp(&round(abs, 2).normalize().to_string(), 2);
    with_sign(value, group_number_string(&s))
}

fn round(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

fn with_sign(value: Decimal, body: String) -> String {
    if value.is_sign_negative() {
        format!("-{body}")
    } else {
        body
    }
}

fn abbreviate(amount: &UnitAmount) -> String {
    let mut out = String::new();
    for (exp, suffix) in MAGNITUDE_SUFFIXES {
        let scaled = amount.scale_down(exp).round_dp(2);
        out = format!("{}{suffix}", group_number_string(&scaled.to_plain_string()));
        if !scaled.at_least_pow10(3) {
            break;
        }
    }
    out
}

fn group_int_digits(int_part: &str) -> String {
    // Insert commas every 3 digits.
    let mut out = String::with_capacity(int_part.len() + int_part.len() / 3);
    let len = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        out.push(ch);
        let remaining = len.saturating_sub(i + 1);
        if remaining > 0 && remaining % 3 == 0 {
            out.push(',');
        }
    }
    out
}

fn pad_fraction_to_dp(s: &str, dp: usize) -> String {
    let (int_part, frac_part) = s.split_once('.').unwrap_or((s, ""));

    let mut out = String::with_capacity(int_part.len() + 1 + dp);
    out.push_str(int_part);
    out.push('.');
    out.extend(frac_part.chars().take(dp));
    for _ in frac_part.len().min(dp)..dp {
        out.push('0');
    }
    out
}

fn group_number_string(s: &str) -> String {
    match s.split_once('.') {
        Some((int_part, frac)) if !frac.is_empty() => {
            format!("{}.{frac}", group_int_digits(int_part))
        }
        Some((int_part, _)) => group_int_digits(int_part),
        None => group_int_digits(s),
    }
}
