//! Shared numeric parsing for free-text money fields. Users paste amounts in
//! both EU ("2.500,50") and US ("2,500.50") styles; when both separators are
//! present the later one in the string is the decimal separator, and a lone
//! comma is a decimal separator.

/// Parse a flexible human-entered number. Returns `None` for empty or
/// unparsable input; callers decide whether that is an error (required
/// fields) or zero (optional fields).
pub(crate) fn parse_flexible_number(raw: &str) -> Option<f64> {
    let compact: String = raw.split_whitespace().collect();
    if compact.is_empty() {
        return None;
    }

    let last_comma = compact.rfind(',');
    let last_dot = compact.rfind('.');

    let normalized = match (last_comma, last_dot) {
        (Some(comma), Some(dot)) if comma > dot => {
            compact.replace('.', "").replace(',', ".")
        }
        (Some(_), Some(_)) => compact.replace(',', ""),
        (Some(_), None) => compact.replace(',', "."),
        _ => compact,
    };

    let cleaned: String = normalized
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Non-required fields normalize unparsable input to zero.
pub(crate) fn parse_or_zero(raw: &str) -> f64 {
    parse_flexible_number(raw).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_numbers() {
        assert_eq!(parse_flexible_number("3000"), Some(3000.0));
        assert_eq!(parse_flexible_number(" 3000.25 "), Some(3000.25));
    }

    #[test]
    fn lone_comma_is_decimal() {
        assert_eq!(parse_flexible_number("2500,5"), Some(2500.5));
    }

    #[test]
    fn later_separator_wins_when_both_present() {
        assert_eq!(parse_flexible_number("2.500,50"), Some(2500.5));
        assert_eq!(parse_flexible_number("2,500.50"), Some(2500.5));
    }

    #[test]
    fn strips_currency_noise() {
        assert_eq!(parse_flexible_number("€1 234.56"), Some(1234.56));
    }

    #[test]
    fn keeps_sign_for_manual_margins() {
        assert_eq!(parse_flexible_number("-5000"), Some(-5000.0));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_flexible_number(""), None);
        assert_eq!(parse_flexible_number("   "), None);
        assert_eq!(parse_flexible_number("abc"), None);
        assert_eq!(parse_or_zero("abc"), 0.0);
    }
}
