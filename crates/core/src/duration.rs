// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Duration strings such as `"2s"`, `"1.5s"`, `"500ms"` or `"1m30s"`.

use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DurationError {
    #[error("empty duration string")]
    Empty,
    #[error("invalid number in duration: {0}")]
    InvalidNumber(String),
    #[error("unknown duration suffix `{suffix}` in {input}")]
    UnknownSuffix { input: String, suffix: String },
    #[error("duration out of range: {0}")]
    Overflow(String),
}

/// Parse a duration string into a `Duration`.
///
/// A value is one or more `<number><unit>` segments; segments are summed, so
/// `"1m30s"` is ninety seconds. Numbers may be fractional (`"1.5s"`); digits
/// below a nanosecond are truncated. A segment without a unit is seconds.
pub fn parse_duration(s: &str) -> Result<Duration, DurationError> {
    let input = s.trim();
    if input.is_empty() {
        return Err(DurationError::Empty);
    }
    let overflow = || DurationError::Overflow(input.to_string());

    let mut total: u128 = 0;
    let mut rest = input;
    while !rest.is_empty() {
        let (whole, fraction, after) =
            split_number(rest).ok_or_else(|| DurationError::InvalidNumber(input.to_string()))?;

        let after = after.trim_start();
        let unit_len = after
            .find(|c: char| c.is_ascii_digit() || c.is_whitespace())
            .unwrap_or(after.len());
        let suffix = &after[..unit_len];

        let per_unit = unit_nanos(suffix).ok_or_else(|| DurationError::UnknownSuffix {
            input: input.to_string(),
            suffix: suffix.to_string(),
        })?;
        let nanos = segment_nanos(whole, fraction, per_unit).ok_or_else(overflow)?;
        total = total.checked_add(nanos).ok_or_else(overflow)?;

        rest = after[unit_len..].trim_start();
    }

    let secs = u64::try_from(total / NANOS_PER_SEC).map_err(|_| overflow())?;
    let subsec = u32::try_from(total % NANOS_PER_SEC).map_err(|_| overflow())?;
    Ok(Duration::new(secs, subsec))
}

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Fraction digits kept; finer digits are below a nanosecond for every unit.
const MAX_FRACTION_DIGITS: usize = 18;

/// Split a leading `123`, `1.5`, `.5` or `5.` off `s`.
fn split_number(s: &str) -> Option<(&str, &str, &str)> {
    let whole_len = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    let (whole, rest) = s.split_at(whole_len);
    let (fraction, rest) = match rest.strip_prefix('.') {
        Some(rest) => rest.split_at(rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len())),
        None => ("", rest),
    };
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    Some((whole, fraction, rest))
}

fn segment_nanos(whole: &str, fraction: &str, per_unit: u128) -> Option<u128> {
    let whole: u128 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
    let mut nanos = whole.checked_mul(per_unit)?;

    let digits = &fraction[..fraction.len().min(MAX_FRACTION_DIGITS)];
    if !digits.is_empty() {
        let numerator: u128 = digits.parse().ok()?;
        let scale = 10u128.checked_pow(u32::try_from(digits.len()).ok()?)?;
        nanos = nanos.checked_add(numerator * per_unit / scale)?;
    }
    Some(nanos)
}

/// Nanoseconds per unit.
fn unit_nanos(suffix: &str) -> Option<u128> {
    match suffix {
        "ns" | "nanos" | "nanosecond" | "nanoseconds" => Some(1),
        "us" | "\u{b5}s" | "\u{3bc}s" | "micros" | "microsecond" | "microseconds" => Some(1_000),
        "ms" | "millis" | "millisecond" | "milliseconds" => Some(1_000_000),
        "" | "s" | "sec" | "secs" | "second" | "seconds" => Some(NANOS_PER_SEC),
        "m" | "min" | "mins" | "minute" | "minutes" => Some(60 * NANOS_PER_SEC),
        "h" | "hr" | "hrs" | "hour" | "hours" => Some(3_600 * NANOS_PER_SEC),
        "d" | "day" | "days" => Some(86_400 * NANOS_PER_SEC),
        _ => None,
    }
}

#[cfg(test)]
#[path = "duration_tests.rs"]
mod tests;
