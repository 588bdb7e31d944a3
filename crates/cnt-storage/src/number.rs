//! Text <-> number conversion with browser `Number()` / `String(n)` rules.
//!
//! Balances are persisted as text, so both directions must agree with what a
//! browser would produce and accept for the same storage entry.

/// Converts text to a number the way the browser's `Number(text)` does.
///
/// Surrounding whitespace is ignored, empty text is zero, and anything that is
/// not a complete numeric literal is `NaN`.
pub fn parse_number(text: &str) -> f64 {
    let trimmed = text.trim_matches(is_js_whitespace);
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some(value) = parse_prefixed_integer(trimmed) {
        return value;
    }

    if is_decimal_literal(trimmed) {
        trimmed.parse::<f64>().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

/// Formats a number the way the browser's `String(n)` does.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_owned();
    }
    if value == 0.0 {
        // covers -0 as well
        return "0".to_owned();
    }

    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let formatted = format!("{value:e}");
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => formatted,
        };
    }

    format!("{value}")
}

fn is_js_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// `0x`, `0o` and `0b` literals. Signs are not allowed in front of them.
///
/// Digits are accumulated exactly and rounded once. Past `u128::MAX` the
/// remaining digits are folded in as floats, which may round differently from
/// the browser in the last bit.
fn parse_prefixed_integer(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }

    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };

    let digits = &text[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }

    let mut exact: Option<u128> = Some(0);
    let mut value = 0.0_f64;
    for c in digits.chars() {
        let Some(d) = c.to_digit(radix) else {
            return Some(f64::NAN);
        };
        exact = match exact {
            Some(n) => match n
                .checked_mul(u128::from(radix))
                .and_then(|n| n.checked_add(u128::from(d)))
            {
                Some(next) => Some(next),
                None => {
                    value = n as f64 * f64::from(radix) + f64::from(d);
                    None
                }
            },
            None => {
                value = value * f64::from(radix) + f64::from(d);
                None
            }
        };
    }
    Some(exact.map_or(value, |n| n as f64))
}

/// `[+-]? (digits [. digits?] | . digits) ([eE] [+-]? digits)?`
fn is_decimal_literal(text: &str) -> bool {
    let mut chars = text.chars().peekable();

    if matches!(chars.peek(), Some('+' | '-')) {
        chars.next();
    }

    let mut mantissa_digits = 0;
    while chars.peek().is_some_and(|c| c.is_ascii_digit()) {
        chars.next();
        mantissa_digits += 1;
    }
    if chars.peek() == Some(&'.') {
        chars.next();
        while chars.peek().is_some_and(|c| c.is_ascii_digit()) {
            chars.next();
            mantissa_digits += 1;
        }
    }
    if mantissa_digits == 0 {
        return false;
    }

    if matches!(chars.peek(), Some('e' | 'E')) {
        chars.next();
        if matches!(chars.peek(), Some('+' | '-')) {
            chars.next();
        }
        let mut exponent_digits = 0;
        while chars.peek().is_some_and(|c| c.is_ascii_digit()) {
            chars.next();
            exponent_digits += 1;
        }
        if exponent_digits == 0 {
            return false;
        }
    }

    chars.next().is_none()
}
