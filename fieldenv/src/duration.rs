//! Human readable duration parsing
//!
//! A duration is a sequence of decimal numbers, each with an optional
//! fraction and a mandatory unit suffix, such as `"300ms"`, `"1.5h"` or
//! `"2h45m"`. Valid units are `ns`, `us` (or `µs`/`μs`), `ms`, `s`, `m`
//! and `h`. The single value `"0"` needs no unit.

use std::time::Duration;

/// Largest representable duration, in nanoseconds.
const MAX_NANOS: u128 = i64::MAX as u128;

const UNITS: &[(&str, u64)] = &[
    ("ns", 1),
    ("us", 1_000),
    ("\u{00b5}s", 1_000),
    ("\u{03bc}s", 1_000),
    ("ms", 1_000_000),
    ("s", 1_000_000_000),
    ("m", 60 * 1_000_000_000),
    ("h", 60 * 60 * 1_000_000_000),
];

/// Errors produced by [`parse_duration`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DurationError {
    /// Malformed input
    #[error("invalid duration {0:?}")]
    Invalid(String),

    /// A number was not followed by a unit
    #[error("missing unit in duration {0:?}")]
    MissingUnit(String),

    /// A unit suffix is not recognised
    #[error("unknown unit {unit:?} in duration {input:?}")]
    UnknownUnit {
        /// The offending unit
        unit: String,
        /// The whole input
        input: String,
    },

    /// The duration is below zero
    #[error("negative duration {0:?}")]
    Negative(String),

    /// The duration does not fit in 64 bits of nanoseconds
    #[error("duration {0:?} out of range")]
    Overflow(String),
}

/// Parse a duration string such as `"5s"` or `"2h30m"`.
///
/// ```rust
/// use fieldenv::parse_duration;
/// use std::time::Duration;
///
/// assert_eq!(parse_duration("2h30m").unwrap(), Duration::from_secs(9000));
/// assert_eq!(parse_duration("1.5s").unwrap(), Duration::from_millis(1500));
/// assert!(parse_duration("10").is_err());
/// ```
pub fn parse_duration(input: &str) -> Result<Duration, DurationError> {
    let invalid = || DurationError::Invalid(input.to_string());

    let (negative, mut rest) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };

    if rest == "0" {
        return Ok(Duration::ZERO);
    }
    if rest.is_empty() {
        return Err(invalid());
    }

    let mut total: u128 = 0;
    while !rest.is_empty() {
        let int_len = leading_digits(rest);
        let (int_part, after) = rest.split_at(int_len);

        let (frac_part, after) = match after.strip_prefix('.') {
            Some(after) => {
                let frac_len = leading_digits(after);
                after.split_at(frac_len)
            }
            None => ("", after),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(invalid());
        }

        let unit_len = after
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(after.len());
        if unit_len == 0 {
            return Err(DurationError::MissingUnit(input.to_string()));
        }
        let (unit, after) = after.split_at(unit_len);
        let scale = UNITS
            .iter()
            .find(|(name, _)| *name == unit)
            .map(|(_, nanos)| u128::from(*nanos))
            .ok_or_else(|| DurationError::UnknownUnit {
                unit: unit.to_string(),
                input: input.to_string(),
            })?;

        let overflow = || DurationError::Overflow(input.to_string());
        let whole = if int_part.is_empty() {
            0
        } else {
            int_part.parse::<u128>().map_err(|_| overflow())?
        };
        if whole > MAX_NANOS {
            return Err(overflow());
        }
        let nanos = whole
            .checked_mul(scale)
            .and_then(|n| n.checked_add(fraction_nanos(frac_part, scale)))
            .ok_or_else(overflow)?;

        total = total.checked_add(nanos).ok_or_else(overflow)?;
        if total > MAX_NANOS {
            return Err(overflow());
        }
        rest = after;
    }

    if negative && total > 0 {
        return Err(DurationError::Negative(input.to_string()));
    }

    // `total` is bounded by MAX_NANOS above.
    Ok(Duration::new(
        (total / 1_000_000_000) as u64,
        (total % 1_000_000_000) as u32,
    ))
}

fn leading_digits(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}

/// Nanoseconds contributed by the digits after the decimal point.
fn fraction_nanos(digits: &str, scale: u128) -> u128 {
    let mut value: u128 = 0;
    let mut divisor: u128 = 1;
    for digit in digits.bytes() {
        // Digits past this point cannot change a nanosecond result.
        if divisor >= 10u128.pow(20) {
            break;
        }
        value = value * 10 + u128::from(digit - b'0');
        divisor *= 10;
    }
    value * scale / divisor
}
