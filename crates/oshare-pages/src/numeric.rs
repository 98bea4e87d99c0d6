//! Lenient number parsing for sheet cells.
//!
//! Content editors type prices and scores by hand, so cells like `"4 stars"`
//! or `" 1280元"` are common. These helpers read the longest numeric prefix
//! after leading whitespace and ignore the rest, returning `None` only when
//! no digits lead the value.

/// Parses a leading base-10 integer, e.g. `"4 stars"` → `4`, `"3.9"` → `3`.
///
/// Values beyond the `i64` range saturate.
#[must_use]
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for b in digits.bytes() {
        if !b.is_ascii_digit() {
            break;
        }
        seen_digit = true;
        let d = i64::from(b - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(d)
        } else {
            value.saturating_mul(10).saturating_add(d)
        };
    }

    seen_digit.then_some(value)
}

/// Parses a leading decimal number, e.g. `"1280.50 NTD"` → `1280.5`.
///
/// Accepts an optional sign, digits with an optional fraction, and an
/// optional exponent. Thousands separators end the number (`"1,280"` → `1`).
#[must_use]
pub fn parse_leading_float(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        mantissa_digits += frac_end - frac_start;
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }

    if mantissa_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// Formats a number the way the storefront displays amounts: integers without
/// a fractional part, other values in shortest round-trip form.
#[must_use]
pub fn format_amount(value: f64) -> String {
    if value == 0.0 {
        // Avoids rendering "-0".
        return "0".to_string();
    }
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_int_plain_values() {
        assert_eq!(parse_leading_int("3"), Some(3));
        assert_eq!(parse_leading_int("  5"), Some(5));
        assert_eq!(parse_leading_int("-2"), Some(-2));
        assert_eq!(parse_leading_int("+4"), Some(4));
    }

    #[test]
    fn leading_int_ignores_trailing_text() {
        assert_eq!(parse_leading_int("4 stars"), Some(4));
        assert_eq!(parse_leading_int("3.9"), Some(3));
    }

    #[test]
    fn leading_int_rejects_non_numeric() {
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("five"), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int("★4"), None);
    }

    #[test]
    fn leading_int_saturates() {
        assert_eq!(parse_leading_int("99999999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_leading_int("-99999999999999999999999"), Some(i64::MIN));
    }

    #[test]
    fn leading_float_values() {
        assert_eq!(parse_leading_float("150"), Some(150.0));
        assert_eq!(parse_leading_float(" 99.5"), Some(99.5));
        assert_eq!(parse_leading_float(".5"), Some(0.5));
        assert_eq!(parse_leading_float("5."), Some(5.0));
        assert_eq!(parse_leading_float("-12.25"), Some(-12.25));
        assert_eq!(parse_leading_float("1e3"), Some(1000.0));
    }

    #[test]
    fn leading_float_stops_at_first_invalid_char() {
        assert_eq!(parse_leading_float("1280元"), Some(1280.0));
        assert_eq!(parse_leading_float("1,280"), Some(1.0));
        assert_eq!(parse_leading_float("2e"), Some(2.0));
        assert_eq!(parse_leading_float("2e+"), Some(2.0));
    }

    #[test]
    fn leading_float_rejects_non_numeric() {
        assert_eq!(parse_leading_float(""), None);
        assert_eq!(parse_leading_float("."), None);
        assert_eq!(parse_leading_float("NT$100"), None);
        assert_eq!(parse_leading_float("-"), None);
    }

    #[test]
    fn format_amount_drops_integral_fraction() {
        assert_eq!(format_amount(50.0), "50");
        assert_eq!(format_amount(-20.0), "-20");
        assert_eq!(format_amount(12.5), "12.5");
        assert_eq!(format_amount(-0.0), "0");
    }
}
