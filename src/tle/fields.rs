//! Decoders for the fixed-column fields of a two-line element set.
//!
//! Column ranges are zero-based and half-open. Lines are checked for
//! ASCII and length before any field is sliced.

use super::tle_errors::TleErrors;
use std::ops::Range;

pub fn column(line: &str, range: Range<usize>) -> &str {
    &line[range]
}

fn is_numeric_text(text: &str) -> bool {
    !text.is_empty()
        && text
            .bytes()
            .all(|c| c.is_ascii_digit() || matches!(c, b'.' | b'+' | b'-'))
}

/// A plain decimal number, e.g. ` 51.6439` or `-.00002182`.
pub fn decimal(line: &str, range: Range<usize>, field: &'static str) -> Result<f64, TleErrors> {
    let text = column(line, range).trim();
    let invalid = || TleErrors::InvalidField {
        field,
        text: text.to_string(),
    };

    if !is_numeric_text(text) {
        return Err(invalid());
    }
    text.parse::<f64>().map_err(|_| invalid())
}

/// Digits with an implied leading decimal point, e.g. `0007417` -> 0.0007417.
pub fn implied_decimal(
    line: &str,
    range: Range<usize>,
    field: &'static str,
) -> Result<f64, TleErrors> {
    let text = column(line, range).trim();
    if text.is_empty() || !text.bytes().all(|c| c.is_ascii_digit()) {
        return Err(TleErrors::InvalidField {
            field,
            text: text.to_string(),
        });
    }
    let digits = text.len() as i32;
    let value = text.parse::<u64>().map_err(|_| TleErrors::InvalidField {
        field,
        text: text.to_string(),
    })?;
    Ok(value as f64 / 10f64.powi(digits))
}

/// A signed mantissa with implied leading decimal point followed by a
/// signed power-of-ten exponent, e.g. ` 38792-4` -> 0.38792e-4.
/// A blank field decodes to zero.
pub fn exponential(
    line: &str,
    range: Range<usize>,
    field: &'static str,
) -> Result<f64, TleErrors> {
    let raw = column(line, range);
    let text = raw.trim();
    if text.is_empty() {
        return Ok(0.0);
    }
    let invalid = || TleErrors::InvalidField {
        field,
        text: raw.to_string(),
    };

    let (sign, body) = match text.as_bytes()[0] {
        b'-' => (-1.0, &text[1..]),
        b'+' => (1.0, &text[1..]),
        _ => (1.0, text),
    };

    // Some generators leave the exponent sign blank for positive exponents
    let body = body.replace(' ', "+");
    let split = body
        .char_indices()
        .skip(1)
        .filter(|(_, c)| *c == '-' || *c == '+')
        .map(|(i, _)| i)
        .last();

    let (mantissa_text, exponent) = match split {
        Some(i) => (
            &body[..i],
            body[i..].parse::<i32>().map_err(|_| invalid())?,
        ),
        None => (body.as_str(), 0),
    };

    let mantissa = if mantissa_text.contains('.') {
        if !is_numeric_text(mantissa_text) {
            return Err(invalid());
        }
        mantissa_text.parse::<f64>().map_err(|_| invalid())?
    } else {
        if mantissa_text.is_empty() || !mantissa_text.bytes().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let digits = mantissa_text.len() as i32;
        mantissa_text.parse::<u64>().map_err(|_| invalid())? as f64 / 10f64.powi(digits)
    };

    Ok(sign * mantissa * 10f64.powi(exponent))
}

/// An unsigned integer that must be present.
pub fn required_integer(
    line: &str,
    range: Range<usize>,
    field: &'static str,
) -> Result<u32, TleErrors> {
    let text = column(line, range).trim();
    let invalid = || TleErrors::InvalidField {
        field,
        text: text.to_string(),
    };
    if text.is_empty() || !text.bytes().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    text.parse::<u32>().map_err(|_| invalid())
}

/// An unsigned integer; a blank field decodes to zero.
pub fn integer(line: &str, range: Range<usize>, field: &'static str) -> Result<u32, TleErrors> {
    let text = column(line, range).trim();
    if text.is_empty() {
        return Ok(0);
    }
    text.parse::<u32>().map_err(|_| TleErrors::InvalidField {
        field,
        text: text.to_string(),
    })
}

/// Modulo-10 checksum over the first 68 columns: digits count their
/// value, minus signs count one, everything else zero.
pub fn checksum(line: &str) -> u8 {
    let sum: u32 = line
        .bytes()
        .take(68)
        .map(|c| match c {
            b'0'..=b'9' => (c - b'0') as u32,
            b'-' => 1,
            _ => 0,
        })
        .sum();
    (sum % 10) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use test_case::test_case;

    #[test_case(" 00000-0", 0.0; "zero")]
    #[test_case(" 28098-4", 0.28098e-4; "positive mantissa")]
    #[test_case("-11606-4", -0.11606e-4; "negative mantissa")]
    #[test_case(" 14311-1", 0.14311e-1; "small exponent")]
    #[test_case(" 12345+1", 1.2345; "positive exponent")]
    #[test_case(" 12345 1", 1.2345; "blank exponent sign")]
    #[test_case("-.5000-3", -0.5e-3; "explicit decimal point")]
    #[test_case("        ", 0.0; "blank field")]
    fn exponential_fields(text: &str, expected: f64) {
        let value = exponential(text, 0..text.len(), "bstar").unwrap();
        assert_relative_eq!(value, expected, max_relative = 1e-12);
    }

    #[test_case(" 2809x-4"; "letter in mantissa")]
    #[test_case(" 28098-x"; "letter in exponent")]
    #[test_case("    +-4"; "sign without mantissa")]
    fn exponential_rejects(text: &str) {
        assert!(matches!(
            exponential(text, 0..text.len(), "bstar"),
            Err(TleErrors::InvalidField { field: "bstar", .. })
        ));
    }

    #[test_case("19", Some(19); "two digits")]
    #[test_case(" 7", Some(7); "padded")]
    #[test_case("  ", None; "blank")]
    #[test_case("+5", None; "signed")]
    #[test_case("1x", None; "letter")]
    fn required_integer_fields(text: &str, expected: Option<u32>) {
        let value = required_integer(text, 0..text.len(), "epoch year");
        match expected {
            Some(expected) => assert_eq!(value.unwrap(), expected),
            None => assert!(matches!(
                value,
                Err(TleErrors::InvalidField { field: "epoch year", .. })
            )),
        }
    }

    #[test]
    fn optional_integer_blank_is_zero() {
        assert_eq!(integer("     ", 0..5, "revolution number").unwrap(), 0);
    }

    #[test]
    fn implied_decimal_eccentricity() {
        assert_relative_eq!(implied_decimal("1859667", 0..7, "e").unwrap(), 0.1859667);
        assert!(implied_decimal("18 9667", 0..7, "e").is_err());
        assert!(implied_decimal("       ", 0..7, "e").is_err());
        // Too many digits for a u64 is a field error, not zero
        let long = "9".repeat(25);
        assert!(matches!(
            implied_decimal(&long, 0..25, "e"),
            Err(TleErrors::InvalidField { field: "e", .. })
        ));
    }

    #[test_case(" .00000023", 0.00000023; "leading decimal point")]
    #[test_case("-.00002182", -0.00002182; "negative")]
    #[test_case(" 51.6439", 51.6439; "plain")]
    fn decimal_fields(text: &str, expected: f64) {
        assert_relative_eq!(decimal(text, 0..text.len(), "x").unwrap(), expected);
    }

    #[test_case(" 51.64e9"; "exponent letter")]
    #[test_case("     nan"; "nan")]
    #[test_case("        "; "blank")]
    fn decimal_rejects(text: &str) {
        assert!(decimal(text, 0..text.len(), "x").is_err());
    }

    #[test]
    fn checksum_counts_digits_and_minus_signs() {
        let line = "1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927";
        assert_eq!(checksum(line), 7);
        let line = "2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537";
        assert_eq!(checksum(line), 7);
    }
}
