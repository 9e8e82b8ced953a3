//! Conversions between on-chain integer amounts and display units.
//!
//! Raw amounts travel through the crate as base-10 integer strings (the
//! smallest unit, e.g. wei). [`UnitAmount`] keeps them exact at any width;
//! [`Decimal`] is only used where a price has to be multiplied in.

use std::cmp::Ordering;
use std::str::FromStr;

use alloy_primitives::U256;
use rust_decimal::Decimal;

/// Significant digits a [`Decimal`] can carry.
const DECIMAL_DIGITS: usize = 28;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UnitsError {
    #[error("amount is not a base-10 integer: {0:?}")]
    InvalidAmount(String),
    #[error("quantity is not a 0x-prefixed hex integer: {0:?}")]
    InvalidHex(String),
    #[error("amount does not fit the supported range: {0}")]
    OutOfRange(String),
}

/// Exact non-negative amount in display units: `digits / 10^scale`.
///
/// Kept normalized, so equal values compare equal field by field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitAmount {
    digits: String,
    scale: usize,
}

impl UnitAmount {
    /// Interpret a raw integer amount in units of `10^-decimals`.
    ///
    /// ```
    /// use skale_assets::units::UnitAmount;
    ///
    /// let amount = UnitAmount::from_base("1500000000000000000", 18).unwrap();
    /// assert_eq!(amount.to_plain_string(), "1.5");
    /// ```
    pub fn from_base(raw: &str, decimals: u32) -> Result<Self, UnitsError> {
        let digits = raw.trim();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(UnitsError::InvalidAmount(raw.to_string()));
        }
        Ok(Self::new(digits, decimals as usize))
    }

    /// Normalizes: no leading zeros, no trailing fractional zeros.
    fn new(digits: &str, scale: usize) -> Self {
        let mut digits = digits.trim_start_matches('0').to_string();
        let mut scale = scale;
        if digits.is_empty() {
            return Self {
                digits: "0".to_string(),
                scale: 0,
            };
        }
        while scale > 0 && digits.ends_with('0') {
            digits.pop();
            scale -= 1;
        }
        Self { digits, scale }
    }

    pub fn is_zero(&self) -> bool {
        self.digits == "0"
    }

    /// Power of ten of the leading digit, i.e. `floor(log10(self))`.
    /// `None` for zero.
    pub fn exponent(&self) -> Option<i64> {
        if self.is_zero() {
            return None;
        }
        Some(self.digits.len() as i64 - self.scale as i64 - 1)
    }

    /// True when `self >= 10^exp`.
    pub fn at_least_pow10(&self, exp: i64) -> bool {
        self.exponent().is_some_and(|e| e >= exp)
    }

    /// `self / 10^exp`, exactly.
    pub fn scale_down(&self, exp: usize) -> Self {
        Self::new(&self.digits, self.scale + exp)
    }

    /// Round to `dp` fractional digits, halves away from zero.
    pub fn round_dp(&self, dp: usize) -> Self {
        if self.scale <= dp {
            return self.clone();
        }
        let drop = self.scale - dp;
        let len = self.digits.len();
        if drop > len {
            return Self::new("0", dp);
        }

        let (keep, rest) = self.digits.split_at(len - drop);
        let keep = if keep.is_empty() { "0" } else { keep };
        if rest.as_bytes()[0] >= b'5' {
            Self::new(&increment(keep), dp)
        } else {
            Self::new(keep, dp)
        }
    }

    /// Plain decimal notation with trailing fractional zeros removed.
    pub fn to_plain_string(&self) -> String {
        if self.scale == 0 {
            return self.digits.clone();
        }

        let padded = if self.digits.len() <= self.scale {
            format!("{}{}", "0".repeat(self.scale + 1 - self.digits.len()), self.digits)
        } else {
            self.digits.clone()
        };
        let (int_part, frac_part) = padded.split_at(padded.len() - self.scale);
        let frac_part = frac_part.trim_end_matches('0');
        if frac_part.is_empty() {
            int_part.to_string()
        } else {
            format!("{int_part}.{frac_part}")
        }
    }

    /// Lossy conversion for price arithmetic. Fractional digits beyond what a
    /// [`Decimal`] can hold are rounded; integer parts wider than that fail.
    pub fn to_decimal(&self) -> Result<Decimal, UnitsError> {
        let int_digits = self.exponent().map_or(0, |e| (e + 1).max(0) as usize);
        if int_digits > DECIMAL_DIGITS {
            return Err(UnitsError::OutOfRange(self.to_plain_string()));
        }
        let rounded = self.round_dp(DECIMAL_DIGITS - int_digits);
        Decimal::from_str(&rounded.to_plain_string())
            .map_err(|_| UnitsError::OutOfRange(self.to_plain_string()))
    }
}

impl PartialOrd for UnitAmount {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for UnitAmount {
    fn cmp(&self, other: &Self) -> Ordering {
        let scale = self.scale.max(other.scale);
        let lhs = format!("{}{}", self.digits, "0".repeat(scale - self.scale));
        let rhs = format!("{}{}", other.digits, "0".repeat(scale - other.scale));
        lhs.len().cmp(&rhs.len()).then_with(|| lhs.cmp(&rhs))
    }
}

/// Add one to a base-10 digit string.
fn increment(digits: &str) -> String {
    let mut out: Vec<u8> = digits.bytes().collect();
    for b in out.iter_mut().rev() {
        if *b == b'9' {
            *b = b'0';
        } else {
            *b += 1;
            return String::from_utf8_lossy(&out).into_owned();
        }
    }
    format!("1{}", String::from_utf8_lossy(&out))
}

/// Convert a raw integer amount into a [`Decimal`] in display units
/// (`raw / 10^decimals`), for price arithmetic.
///
/// ```
/// use skale_assets::units::from_base;
///
/// assert_eq!(from_base("1000000000000000000", 18).unwrap().normalize().to_string(), "1");
/// assert_eq!(from_base("5", 2).unwrap().normalize().to_string(), "0.05");
/// ```
pub fn from_base(raw: &str, decimals: u32) -> Result<Decimal, UnitsError> {
    UnitAmount::from_base(raw, decimals)?.to_decimal()
}

/// Convert a JSON-RPC hex quantity (`0x1bc16d674ec80000`) into a base-10
/// integer string.
///
/// `eth_call` results arrive left-padded to 32 bytes, and some nodes answer
/// an empty `0x` for contracts without code; both are accepted. Values wider
/// than 256 bits are rejected.
pub fn hex_quantity_to_decimal(quantity: &str) -> Result<String, UnitsError> {
    let trimmed = quantity.trim();
    let hex = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .ok_or_else(|| UnitsError::InvalidHex(quantity.to_string()))?;

    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(UnitsError::InvalidHex(quantity.to_string()));
    }

    let significant = hex.trim_start_matches('0');
    if significant.is_empty() {
        return Ok("0".to_string());
    }
    if significant.len() > 64 {
        return Err(UnitsError::OutOfRange(quantity.to_string()));
    }

    let value = U256::from_str_radix(significant, 16)
        .map_err(|_| UnitsError::InvalidHex(quantity.to_string()))?;
    Ok(value.to_string())
}
