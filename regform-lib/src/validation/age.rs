//! Integer parsing for the age field.

use serde::{Deserialize, Serialize};

/// How age text is converted to a number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeParsing {
    /// Take the leading integer and ignore the rest: `"20abc"` parses as 20.
    #[default]
    Lenient,
    /// The whole value must be an integer: `"20abc"` is rejected.
    Strict,
}

/// Parse an (already trimmed) age value.
///
/// Accepts an optional `+`/`-` sign followed by ASCII digits. Values too large
/// for `i64` saturate. Returns `None` when no integer can be read.
pub fn parse_age(value: &str, mode: AgeParsing) -> Option<i64> {
    let (negative, rest) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    if mode == AgeParsing::Strict && digits_len != rest.len() {
        return None;
    }

    let magnitude = rest[..digits_len].bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });

    Some(if negative { -magnitude } else { magnitude })
}
