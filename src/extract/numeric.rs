// src/extract/numeric.rs

use once_cell::sync::Lazy;
use regex::Regex;

use super::CellValue;

static NON_NUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\d.\-]").expect("invalid numeric-strip pattern"));

/// Convert a heterogeneous cell token (currency, percentage, thousands
/// separators) into a number. Lossy on purpose: anything unparseable becomes
/// `Int(0)`, so callers cannot distinguish "zero" from "garbage". Percentages
/// always come back as floats; plain tokens are integers unless a decimal
/// point survives the stripping.
pub fn normalize(text: &str) -> CellValue {
    if text.trim().is_empty() {
        return CellValue::Int(0);
    }

    let cleaned = NON_NUMERIC.replace_all(text, "");

    if text.contains('%') {
        return match cleaned.parse::<f64>() {
            Ok(v) => CellValue::Float(v),
            Err(_) => CellValue::Int(0),
        };
    }

    if cleaned.is_empty() {
        return CellValue::Int(0);
    }
    if cleaned.contains('.') {
        match cleaned.parse::<f64>() {
            Ok(v) => CellValue::Float(v),
            Err(_) => CellValue::Int(0),
        }
    } else {
        match cleaned.parse::<i64>() {
            Ok(v) => CellValue::Int(v),
            // e.g. stray interior '-' that f64 tolerates no better; keep the
            // float fallback for symmetry with truncating parses
            Err(_) => match cleaned.parse::<f64>() {
                Ok(v) => CellValue::Int(v as i64),
                Err(_) => CellValue::Int(0),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_with_separators() {
        assert_eq!(normalize("$1,234.50"), CellValue::Float(1234.5));
    }

    #[test]
    fn percentage_parses_as_float() {
        assert_eq!(normalize("12%"), CellValue::Float(12.0));
        assert_eq!(normalize("-3.4%"), CellValue::Float(-3.4));
    }

    #[test]
    fn plain_integer_stays_integral() {
        assert_eq!(normalize("42"), CellValue::Int(42));
        assert_eq!(normalize("1,000,000"), CellValue::Int(1_000_000));
    }

    #[test]
    fn empty_and_unparseable_degrade_to_zero() {
        assert_eq!(normalize(""), CellValue::Int(0));
        assert_eq!(normalize("   "), CellValue::Int(0));
        assert_eq!(normalize("n/a"), CellValue::Int(0));
        assert_eq!(normalize("%"), CellValue::Int(0));
        assert_eq!(normalize("-"), CellValue::Int(0));
    }

    #[test]
    fn negative_values() {
        assert_eq!(normalize("-$500"), CellValue::Int(-500));
        assert_eq!(normalize("-0.5"), CellValue::Float(-0.5));
    }
}
