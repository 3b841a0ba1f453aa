//! Number parsing and formatting helpers shared by the lookup tables and
//! the ratio calculation.
//!
//! The reference API and the input fields deal exclusively in strings, so
//! these helpers define how a string becomes a number (and back) in one
//! place.

/// Digits requested from the float formatter. An `f64` has at most 767
/// significant decimal digits, so this expansion is always exact.
const EXACT_DIGITS: usize = 800;

/// Parse the leading integer of `input`, ignoring leading whitespace and
/// anything after the first non-digit.
///
/// # Examples
/// ```
/// use pf_ratio::utils::parse_int_prefix;
/// assert_eq!(parse_int_prefix(" 42abc"), Some(42));
/// assert_eq!(parse_int_prefix("-7"), Some(-7));
/// assert_eq!(parse_int_prefix("abc"), None);
/// ```
pub fn parse_int_prefix(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }

    // Keys too long for an i64 saturate instead of dropping out.
    let value = rest[..digits_end].bytes().fold(0i64, |acc, b| {
        let digit = i64::from(b - b'0');
        let acc = acc.saturating_mul(10);
        if negative {
            acc.saturating_sub(digit)
        } else {
            acc.saturating_add(digit)
        }
    });
    Some(value)
}

/// Coerce a string to a number the way a browser form would: surrounding
/// whitespace is ignored, an empty string is zero and anything unparsable
/// is NaN.
pub fn coerce_number(input: &str) -> f64 {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match trimmed.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &trimmed[2..];
        if digits.is_empty() {
            return f64::NAN;
        }
        // No sign after the prefix, and no upper bound on the magnitude.
        return digits
            .chars()
            .try_fold(0.0_f64, |acc, c| {
                c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
            })
            .unwrap_or(f64::NAN);
    }

    // Rust accepts spellings like "inf" and "NaN" that a form field would not.
    if trimmed.bytes().any(|b| b.is_ascii_alphabetic() && b != b'e' && b != b'E') {
        return f64::NAN;
    }

    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Format `value` with `precision` significant digits.
///
/// Ties round away from zero on the exact binary value, and exponential
/// notation (`1.2e+2`) is used when the decimal exponent is below -6 or at
/// least `precision`. Non-finite values render as `NaN`, `Infinity` and
/// `-Infinity`.
///
/// # Examples
/// ```
/// use pf_ratio::utils::format_significant;
/// assert_eq!(format_significant(2.0, 2), "2.0");
/// assert_eq!(format_significant(1.0 / 3.0, 2), "0.33");
/// assert_eq!(format_significant(123.0, 2), "1.2e+2");
/// ```
pub fn format_significant(value: f64, precision: usize) -> String {
    let precision = precision.max(1);

    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return pad_fraction("0".to_string(), precision - 1);
    }

    let (mut digits, mut exponent) = exact_decimal(value.abs());

    // Round the exact expansion to `precision` digits, half away from zero.
    let round_up = digits.get(precision).is_some_and(|&d| d >= 5);
    digits.truncate(precision);
    digits.resize(precision, 0);
    if round_up {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == 9 {
                *d = 0;
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
            digits.truncate(precision);
            exponent += 1;
        }
    }

    let text: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
    let body = if exponent < -6 || exponent >= precision as i32 {
        let (lead, rest) = text.split_at(1);
        let sign = if exponent >= 0 { '+' } else { '-' };
        if rest.is_empty() {
            format!("{}e{}{}", lead, sign, exponent.abs())
        } else {
            format!("{}.{}e{}{}", lead, rest, sign, exponent.abs())
        }
    } else if exponent >= 0 {
        let (int_part, frac_part) = text.split_at(exponent as usize + 1);
        if frac_part.is_empty() {
            int_part.to_string()
        } else {
            format!("{}.{}", int_part, frac_part)
        }
    } else {
        format!("0.{}{}", "0".repeat((-exponent - 1) as usize), text)
    };

    if value < 0.0 {
        format!("-{}", body)
    } else {
        body
    }
}

fn pad_fraction(int_part: String, zeros: usize) -> String {
    if zeros == 0 {
        int_part
    } else {
        format!("{}.{}", int_part, "0".repeat(zeros))
    }
}

/// Exact decimal digits and base-10 exponent of a finite, positive value.
fn exact_decimal(value: f64) -> (Vec<u8>, i32) {
    let formatted = format!("{:.*e}", EXACT_DIGITS, value);
    let (mantissa, exponent) = formatted
        .split_once('e')
        .unwrap_or((formatted.as_str(), "0"));
    let digits = mantissa
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();
    (digits, exponent.parse().unwrap_or(0))
}
