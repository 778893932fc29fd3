//! Display formatting for satoshi-denominated amounts

/// Placeholder character repeated in place of a collapsed zero run
const COLLAPSE_PLACEHOLDER: char = '.';
const COLLAPSE_LEN: usize = 3;

/// Format an integer amount string at the given decimal precision.
///
/// `"123456789"` at precision 8 renders `"1.23456789"`; `"0"` renders `"0"`
/// at any precision. An all-zero fraction with precision >= 3 collapses to
/// its first and last zero with the middle replaced by a repeated
/// placeholder (`"100000000"` at precision 8 renders `"1.0...0"`). Mixed
/// fractions have trailing zeros trimmed.
///
/// Non-numeric values (such as the `"N/A"` placeholder) pass through
/// unchanged.
pub fn format_decimals(value: &str, precision: usize) -> String {
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        return value.to_string();
    }

    let trimmed = value.trim_start_matches('0');
    if trimmed.is_empty() {
        return "0".to_string();
    }
    if precision == 0 {
        return trimmed.to_string();
    }

    let digits = if trimmed.len() > precision {
        trimmed.to_string()
    } else {
        // left-pad so a fraction-only value keeps a leading integer zero
        format!("{:0>width$}", trimmed, width = precision + 1)
    };

    let split = digits.len() - precision;
    let int_part = &digits[..split];
    let fraction = &digits[split..];

    if fraction.chars().all(|c| c == '0') {
        if precision >= COLLAPSE_LEN {
            let placeholder: String = std::iter::repeat(COLLAPSE_PLACEHOLDER)
                .take(COLLAPSE_LEN)
                .collect();
            return format!("{int_part}.0{placeholder}0");
        }
        return int_part.to_string();
    }

    format!("{int_part}.{}", fraction.trim_end_matches('0'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_fraction() {
        assert_eq!(format_decimals("123456789", 8), "1.23456789");
        assert_eq!(format_decimals("123456789", 2), "1234567.89");
    }

    #[test]
    fn test_zero_is_zero_at_any_precision() {
        assert_eq!(format_decimals("0", 8), "0");
        assert_eq!(format_decimals("0", 0), "0");
        assert_eq!(format_decimals("000", 3), "0");
    }

    #[test]
    fn test_all_zero_fraction_collapses() {
        // first and last zero preserved, middle replaced by the placeholder
        assert_eq!(format_decimals("100000000", 8), "1.0...0");
        assert_eq!(format_decimals("2000", 3), "2.0...0");
    }

    #[test]
    fn test_short_all_zero_fraction_drops_fraction() {
        assert_eq!(format_decimals("100", 2), "1");
    }

    #[test]
    fn test_trailing_zeros_trimmed() {
        assert_eq!(format_decimals("120000000", 8), "1.2");
        assert_eq!(format_decimals("100000001", 8), "1.00000001");
    }

    #[test]
    fn test_fraction_only_value() {
        assert_eq!(format_decimals("42", 8), "0.00000042");
    }

    #[test]
    fn test_non_numeric_passthrough() {
        assert_eq!(format_decimals("N/A", 8), "N/A");
    }
}
