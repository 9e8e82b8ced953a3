//! Request timeouts written as short strings like "500ms", "10s", "2m".

use std::time::Duration;

use anyhow::{Context, Result};
use serde::{de, Deserialize, Deserializer, Serializer};

/// Unit suffixes and their length in milliseconds. `ms` must be tried before
/// `m` and `s`.
const UNITS: [(&str, u64); 4] = [("ms", 1), ("s", 1_000), ("m", 60_000), ("h", 3_600_000)];

/// Parse a timeout string like "500ms", "10s", "2m" or "1h".
///
/// The input is case-insensitive and whitespace is trimmed.
///
/// ```
/// use skale_assets::duration::parse_duration;
/// use std::time::Duration;
///
/// assert_eq!(parse_duration("10s").unwrap(), Duration::from_secs(10));
/// assert_eq!(parse_duration("250ms").unwrap(), Duration::from_millis(250));
/// ```
pub fn parse_duration(s: &str) -> Result<Duration> {
    let s = s.trim().to_lowercase();
    let (num, unit_ms) = UNITS
        .iter()
        .find_map(|(suffix, ms)| s.strip_suffix(suffix).map(|num| (num, *ms)))
        .context("Duration must end with ms, s, m, or h")?;

    let num: u64 = num.parse().with_context(|| "Invalid number in duration")?;
    let millis = num.checked_mul(unit_ms).context("Duration is too large")?;

    Ok(Duration::from_millis(millis))
}

/// Format a duration with the largest unit that divides it evenly.
pub fn format_duration(d: Duration) -> String {
    let millis = d.as_millis();
    for (suffix, unit_ms) in UNITS.iter().rev() {
        let unit_ms = u128::from(*unit_ms);
        if millis >= unit_ms && millis % unit_ms == 0 {
            return format!("{}{suffix}", millis / unit_ms);
        }
    }
    format!("{millis}ms")
}

/// Serde deserializer for duration strings.
///
/// Use with `#[serde(deserialize_with = "deserialize_duration")]`.
pub fn deserialize_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_duration(&s).map_err(de::Error::custom)
}

/// Serde serializer matching [`deserialize_duration`].
pub fn serialize_duration<S>(d: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_duration(*d))
}
