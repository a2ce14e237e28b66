use rust_decimal::Decimal;
use std::str::FromStr;

/// Find the first numeric token in `text` at or after byte offset `from`.
///
/// A token is a maximal run of ASCII digits, optionally split by a single
/// decimal separator (`.` or `,`) that must be followed by another digit:
/// - "85" -> "85"
/// - "11.0" -> "11.0"
/// - "1,0" -> "1,0" (comma decimal notation)
/// - "1.2.3" -> "1.2" (second separator ends the token)
/// - "85." -> "85" (trailing separator is not consumed)
pub fn find_numeric_token(text: &str, from: usize) -> Option<&str> {
    let bytes = text.as_bytes();
    let mut i = from;

    while i < bytes.len() {
        if bytes[i].is_ascii_digit() {
            let start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            if i + 1 < bytes.len()
                && (bytes[i] == b'.' || bytes[i] == b',')
                && bytes[i + 1].is_ascii_digit()
            {
                i += 1;
                while i < bytes.len() && bytes[i].is_ascii_digit() {
                    i += 1;
                }
            }
            return Some(&text[start..i]);
        }
        i += 1;
    }

    None
}

/// True if the text contains any numeric token at all.
pub fn contains_number(text: &str) -> bool {
    find_numeric_token(text, 0).is_some()
}

/// Parse a numeric token, accepting `,` as a decimal separator.
///
/// Returns None when the token does not fit a `Decimal` (e.g. more digits
/// than its 96-bit mantissa holds, as OCR noise sometimes produces).
pub fn parse_decimal(token: &str) -> Option<Decimal> {
    let normalized = token.replace(',', ".");
    Decimal::from_str(&normalized).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_integer_token() {
        assert_eq!(find_numeric_token("glucose 85 mg/dl", 0), Some("85"));
    }

    #[test]
    fn test_decimal_token() {
        assert_eq!(find_numeric_token("hemoglobin 11.0 g/dl", 0), Some("11.0"));
    }

    #[test]
    fn test_comma_decimal_token() {
        assert_eq!(find_numeric_token("creatinine 1,0 mg/dl", 0), Some("1,0"));
    }

    #[test]
    fn test_offset_skips_earlier_numbers() {
        let text = "page 2 of 3 glucose 85";
        let idx = text.find("glucose").unwrap();
        assert_eq!(find_numeric_token(text, idx), Some("85"));
    }

    #[test]
    fn test_single_separator_only() {
        assert_eq!(find_numeric_token("version 1.2.3", 0), Some("1.2"));
    }

    #[test]
    fn test_trailing_separator_not_consumed() {
        assert_eq!(find_numeric_token("value 85.", 0), Some("85"));
    }

    #[test]
    fn test_digit_led() {
        // A bare ".5" only yields the digit run, not the separator.
        assert_eq!(find_numeric_token("x .5", 0), Some("5"));
    }

    #[test]
    fn test_no_digits() {
        assert_eq!(find_numeric_token("no numbers here", 0), None);
        assert!(!contains_number("no numbers here"));
    }

    #[test]
    fn test_digits_inside_words_still_match() {
        // Greedy tolerance: digits embedded in identifiers are taken as-is.
        assert_eq!(find_numeric_token("sample id 492837", 0), Some("492837"));
    }

    #[test]
    fn test_parse_plain() {
        assert_eq!(parse_decimal("85"), Some(dec!(85)));
    }

    #[test]
    fn test_parse_keeps_scale() {
        assert_eq!(parse_decimal("11.0").unwrap().to_string(), "11.0");
    }

    #[test]
    fn test_parse_comma_separator() {
        assert_eq!(parse_decimal("1,0"), Some(dec!(1.0)));
        assert_eq!(parse_decimal("1,0").unwrap().to_string(), "1.0");
    }

    #[test]
    fn test_parse_overflow_fails() {
        let token = "9".repeat(40);
        assert_eq!(parse_decimal(&token), None);
    }
}
