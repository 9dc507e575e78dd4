//! Form Text Coercion
//!
//! Numbers are read off text inputs the way a browser's `parseInt` would:
//! skip leading whitespace, accept one sign, take the leading digits, ignore
//! the rest. No digits means no value, which is sent to the service as `null`.
//! Digit runs too long for an `i64` also yield no value rather than a
//! rounded float, so the service rejects them instead of storing a wrong id.

pub fn coerce_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
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

/// Coerce, substituting `default` when the field is blank
pub fn coerce_int_or(text: &str, default: i64) -> Option<i64> {
    if is_blank(text) {
        Some(default)
    } else {
        coerce_int(text)
    }
}

pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
