//! Coercion of raw string values into typed fields

use crate::duration::parse_duration;
use crate::reflect::Slot;
use std::str::FromStr;

/// Error produced when a raw value cannot be parsed into its field's kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub(crate) struct CoerceError(String);

/// Parse a boolean.
///
/// Accepts `1`, `t`, `true` and `0`, `f`, `false`, in any letter case.
///
/// ```rust
/// use fieldenv::parse_bool;
///
/// assert_eq!(parse_bool("T"), Some(true));
/// assert_eq!(parse_bool("False"), Some(false));
/// assert_eq!(parse_bool("yes"), None);
/// ```
pub fn parse_bool(raw: &str) -> Option<bool> {
    const TRUE: [&str; 3] = ["1", "t", "true"];
    const FALSE: [&str; 3] = ["0", "f", "false"];

    if TRUE.iter().any(|s| s.eq_ignore_ascii_case(raw)) {
        Some(true)
    } else if FALSE.iter().any(|s| s.eq_ignore_ascii_case(raw)) {
        Some(false)
    } else {
        None
    }
}

/// Parse `raw` into the slot's kind and assign it.
///
/// On failure the slot is left untouched. [`Slot::Other`] is never assigned
/// and always succeeds.
pub(crate) fn coerce(slot: Slot<'_>, raw: &str) -> Result<(), CoerceError> {
    match slot {
        Slot::Str(field) => {
            *field = raw.to_string();
            Ok(())
        }
        Slot::Bool(field) => {
            *field = parse_bool(raw)
                .ok_or_else(|| CoerceError(format!("invalid boolean {raw:?}")))?;
            Ok(())
        }
        Slot::I8(field) => parse_into(field, raw),
        Slot::I16(field) => parse_into(field, raw),
        Slot::I32(field) => parse_into(field, raw),
        Slot::I64(field) => parse_into(field, raw),
        Slot::Isize(field) => parse_into(field, raw),
        Slot::U8(field) => parse_into(field, raw),
        Slot::U16(field) => parse_into(field, raw),
        Slot::U32(field) => parse_into(field, raw),
        Slot::U64(field) => parse_into(field, raw),
        Slot::Usize(field) => parse_into(field, raw),
        Slot::F32(field) => parse_into(field, raw),
        Slot::F64(field) => parse_into(field, raw),
        Slot::Duration(field) => {
            *field = parse_duration(raw).map_err(|e| CoerceError(e.to_string()))?;
            Ok(())
        }
        Slot::Other => Ok(()),
    }
}

fn parse_into<T>(field: &mut T, raw: &str) -> Result<(), CoerceError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    *field = raw.parse::<T>().map_err(|e| CoerceError(e.to_string()))?;
    Ok(())
}
