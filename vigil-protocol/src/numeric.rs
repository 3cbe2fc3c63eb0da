//! Best-effort numeric parsing with C `strtod`/`atoi` semantics.
//!
//! The monitor must keep running on whatever the host sends, so these
//! parsers never fail: they skip leading whitespace, consume the longest
//! leading numeric prefix, and fall back to zero when no digits lead.

/// Parse a decimal float prefix, returning 0.0 when none is present.
///
/// Accepts an optional sign, digits, and at most one decimal point.
/// Trailing garbage is ignored (`"45.2abc"` parses as `45.2`).
pub fn parse_f32(text: &str) -> f32 {
    let text = text.trim_start_matches([' ', '\t']);
    let bytes = text.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    let mut seen_digit = false;
    let mut seen_dot = false;
    while let Some(&b) = bytes.get(end) {
        match b {
            b'0'..=b'9' => {
                seen_digit = true;
                end += 1;
            }
            b'.' if !seen_dot => {
                seen_dot = true;
                end += 1;
            }
            _ => break,
        }
    }

    if !seen_digit {
        return 0.0;
    }
    text[..end].parse().unwrap_or(0.0)
}

/// Parse a decimal integer prefix, returning 0 when none is present.
pub fn parse_i32(text: &str) -> i32 {
    let text = text.trim_start_matches([' ', '\t']);
    let bytes = text.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    let start = end;
    while bytes.get(end).is_some_and(|b| b.is_ascii_digit()) {
        end += 1;
    }

    if end == start {
        return 0;
    }
    text[..end].parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_float() {
        assert_eq!(parse_f32("45.2"), 45.2);
        assert_eq!(parse_f32("0"), 0.0);
        assert_eq!(parse_f32("-3.5"), -3.5);
        assert_eq!(parse_f32("+1.25"), 1.25);
    }

    #[test]
    fn test_float_with_trailing_garbage() {
        assert_eq!(parse_f32("45.2abc"), 45.2);
        assert_eq!(parse_f32("3.8GHz"), 3.8);
        assert_eq!(parse_f32("11.9/31.3"), 11.9);
    }

    #[test]
    fn test_float_garbage_yields_zero() {
        assert_eq!(parse_f32(""), 0.0);
        assert_eq!(parse_f32("abc"), 0.0);
        assert_eq!(parse_f32("-"), 0.0);
        assert_eq!(parse_f32("."), 0.0);
        assert_eq!(parse_f32("+."), 0.0);
    }

    #[test]
    fn test_float_leading_whitespace() {
        assert_eq!(parse_f32(" 58.5"), 58.5);
        assert_eq!(parse_f32("\t12"), 12.0);
    }

    #[test]
    fn test_second_dot_stops_the_parse() {
        assert_eq!(parse_f32("1.2.3"), 1.2);
    }

    #[test]
    fn test_plain_int() {
        assert_eq!(parse_i32("1500"), 1500);
        assert_eq!(parse_i32("-1"), -1);
        assert_eq!(parse_i32("+85"), 85);
    }

    #[test]
    fn test_int_with_trailing_garbage() {
        assert_eq!(parse_i32("85%"), 85);
        assert_eq!(parse_i32("123abc"), 123);
        // Integer parse stops at the decimal point
        assert_eq!(parse_i32("85.9"), 85);
    }

    #[test]
    fn test_int_garbage_yields_zero() {
        assert_eq!(parse_i32(""), 0);
        assert_eq!(parse_i32("rpm"), 0);
        assert_eq!(parse_i32("-"), 0);
    }

    #[test]
    fn test_int_overflow_yields_zero() {
        assert_eq!(parse_i32("99999999999"), 0);
    }
}
