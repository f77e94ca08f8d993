//! Route parameter coercion.
//!
//! Unit pages are addressed as `/unit/:unit`. The parameter is read the way a
//! browser router would: leading whitespace, an optional sign, then as many
//! decimal digits as are present. Anything unreadable becomes unit 1, so the
//! content core only ever sees a plain integer.

use crate::curriculum::types::DEFAULT_UNIT;

/// Parse a unit route parameter, defaulting to unit 1.
///
/// # Examples
/// ```
/// use edp_curriculum::parse_unit_param;
///
/// assert_eq!(parse_unit_param(Some("4")), 4);
/// assert_eq!(parse_unit_param(Some("7-legal")), 7);
/// assert_eq!(parse_unit_param(Some("abc")), 1);
/// assert_eq!(parse_unit_param(None), 1);
/// ```
pub fn parse_unit_param(raw: Option<&str>) -> i64 {
    match raw.and_then(leading_integer) {
        Some(unit) => unit,
        None => {
            tracing::debug!(raw = ?raw, "unreadable unit parameter, using default");
            DEFAULT_UNIT
        }
    }
}

/// Integer prefix of a string, or None when there are no leading digits.
fn leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
