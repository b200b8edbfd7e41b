//! Display formatting shared by the console pages

use chrono::{DateTime, Utc};

const NARROW_NBSP: char = '\u{202f}';
const NBSP: char = '\u{a0}';

/// Formats a price the way fr-FR currency formatting does: `1 234,50 €`
/// (narrow no-break space between thousands, no-break space before the sign).
pub fn format_price(price: f64) -> String {
    let cents = (price.abs() * 100.0).round() as u64;
    let units = cents / 100;
    let fraction = cents % 100;

    let digits = units.to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(NARROW_NBSP);
        }
        grouped.push(ch);
    }

    let sign = if price < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}{},{:02}{}€", sign, grouped, fraction, NBSP)
}

/// Parses a price typed into a form. Unparsable input becomes `0`,
/// anything else is rounded to two decimals.
pub fn parse_price(input: &str) -> f64 {
    match input.trim().replace(',', ".").parse::<f64>() {
        Ok(value) if value.is_finite() => round_price(value),
        _ => 0.0,
    }
}

pub fn round_price(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Appends a plural `s` when `count > 1` (French rule: 0 and 1 stay singular)
pub fn pluralize(word: &str, count: u64) -> String {
    if count > 1 {
        format!("{}s", word)
    } else {
        word.to_string()
    }
}

/// `DD/MM/YYYY`
pub fn format_date(dt: &DateTime<Utc>) -> String {
    dt.format("%d/%m/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0.0), "0,00\u{a0}€");
        assert_eq!(format_price(12.5), "12,50\u{a0}€");
        assert_eq!(format_price(999.999), "1\u{202f}000,00\u{a0}€");
        assert_eq!(format_price(1234567.891), "1\u{202f}234\u{202f}567,89\u{a0}€");
        assert_eq!(format_price(-3.2), "-3,20\u{a0}€");
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("12.346"), 12.35);
        assert_eq!(parse_price("7,5"), 7.5);
        assert_eq!(parse_price(""), 0.0);
        assert_eq!(parse_price("abc"), 0.0);
        assert_eq!(parse_price("NaN"), 0.0);
        assert_eq!(parse_price("-4"), -4.0);
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("produit", 0), "produit");
        assert_eq!(pluralize("produit", 1), "produit");
        assert_eq!(pluralize("produit", 2), "produits");
    }

    #[test]
    fn test_format_date() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 5, 23, 10, 0).unwrap();
        assert_eq!(format_date(&dt), "05/03/2024");
    }
}
