//! Locale-aware number, percentage and currency formatting.
//!
//! Non-finite input never fails: it renders a fixed placeholder instead
//! ("0.00", "0.00%", "$0.00").

use serde::{Deserialize, Serialize};

/// Placeholder for non-numeric values passed to the number formatters.
const NUMBER_PLACEHOLDER: &str = "0.00";

/// Placeholder for non-numeric values passed to the currency formatters.
const CURRENCY_PLACEHOLDER: &str = "$0.00";

/// Upper bound on fraction digits, matching `Intl.NumberFormat`.
pub const MAX_DECIMALS: usize = 100;

/// Supported formatting locales.
///
/// Unknown tags fall back to `en-US`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "en-GB")]
    EnGb,
    #[serde(rename = "de-DE")]
    DeDe,
    #[serde(rename = "fr-FR")]
    FrFr,
}

impl Locale {
    /// Parse a BCP 47 tag, case-insensitively. Unknown tags map to `en-US`.
    pub fn parse(tag: &str) -> Self {
        match tag.to_ascii_lowercase().replace('_', "-").as_str() {
            "en-gb" => Locale::EnGb,
            "de" | "de-de" => Locale::DeDe,
            "fr" | "fr-fr" => Locale::FrFr,
            _ => Locale::EnUs,
        }
    }

    fn group_separator(self) -> &'static str {
        match self {
            Locale::EnUs | Locale::EnGb => ",",
            Locale::DeDe => ".",
            Locale::FrFr => "\u{202f}",
        }
    }

    fn decimal_separator(self) -> char {
        match self {
            Locale::EnUs | Locale::EnGb => '.',
            Locale::DeDe | Locale::FrFr => ',',
        }
    }

    /// Whether the currency symbol goes after the amount.
    fn symbol_trails(self) -> bool {
        matches!(self, Locale::DeDe | Locale::FrFr)
    }
}

/// Formatting options accepted from script callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormatOptions {
    pub locale: Locale,
    pub decimals: usize,
    pub currency: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            locale: Locale::EnUs,
            decimals: 2,
            currency: "USD".to_string(),
        }
    }
}

impl FormatOptions {
    pub fn number(&self, value: f64) -> String {
        format_number_in(value, self.decimals, self.locale)
    }

    pub fn percentage(&self, value: f64) -> String {
        format!("{}%", self.number(value))
    }

    pub fn currency(&self, value: f64) -> String {
        format_currency_in(value, &self.currency, self.locale)
    }
}

/// Format a number with `en-US` grouping and a fixed number of decimals.
pub fn format_number(value: f64, decimals: usize) -> String {
    format_number_in(value, decimals, Locale::EnUs)
}

/// Format a number with the given locale's separators.
pub fn format_number_in(value: f64, decimals: usize, locale: Locale) -> String {
    if !value.is_finite() {
        return NUMBER_PLACEHOLDER.to_string();
    }
    let digits = group_digits(value.abs(), decimals, locale);
    if value < 0.0 && !rounds_to_zero(&digits) {
        format!("-{digits}")
    } else {
        digits
    }
}

/// Format a percentage value (already scaled, so `50.0` renders "50.00%").
pub fn format_percentage(value: f64, decimals: usize) -> String {
    format!("{}%", format_number(value, decimals))
}

/// Format a currency amount in `en-US` conventions.
pub fn format_currency(value: f64, currency: &str) -> String {
    format_currency_in(value, currency, Locale::EnUs)
}

/// Format a currency amount for the given locale and ISO 4217 code.
pub fn format_currency_in(value: f64, currency: &str, locale: Locale) -> String {
    if !value.is_finite() {
        return CURRENCY_PLACEHOLDER.to_string();
    }
    let code = currency.trim().to_ascii_uppercase();
    let (symbol, decimals) = match code.as_str() {
        "USD" => ("$".to_string(), 2),
        "EUR" => ("€".to_string(), 2),
        "GBP" => ("£".to_string(), 2),
        "JPY" => ("¥".to_string(), 0),
        _ => (format!("{code}\u{a0}"), 2),
    };
    let digits = group_digits(value.abs(), decimals, locale);
    let sign = if value < 0.0 && !rounds_to_zero(&digits) {
        "-"
    } else {
        ""
    };
    if locale.symbol_trails() {
        format!("{sign}{digits}\u{a0}{}", symbol.trim_end())
    } else {
        format!("{sign}{symbol}{digits}")
    }
}

/// Render a non-negative value with grouped integer digits.
///
/// `decimals` is clamped to `MAX_DECIMALS`.
fn group_digits(abs: f64, decimals: usize, locale: Locale) -> String {
    let decimals = decimals.min(MAX_DECIMALS);
    let fixed = format!("{abs:.decimals$}");
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3);
    let len = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(locale.group_separator());
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push(locale.decimal_separator());
        out.push_str(frac);
    }
    out
}

fn rounds_to_zero(digits: &str) -> bool {
    digits.chars().all(|c| !c.is_ascii_digit() || c == '0')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_grouping() {
        assert_eq!(format_number(1234.5, 2), "1,234.50");
        assert_eq!(format_number(1234567.891, 2), "1,234,567.89");
        assert_eq!(format_number(999.0, 0), "999");
        assert_eq!(format_number(0.0, 2), "0.00");
    }

    #[test]
    fn test_format_number_negative() {
        assert_eq!(format_number(-1234.5, 2), "-1,234.50");
        // Rounds away to zero, so no sign.
        assert_eq!(format_number(-0.001, 2), "0.00");
    }

    #[test]
    fn test_format_number_non_finite() {
        assert_eq!(format_number(f64::NAN, 2), "0.00");
        assert_eq!(format_number(f64::INFINITY, 4), "0.00");
    }

    #[test]
    fn test_format_number_locales() {
        assert_eq!(format_number_in(1234.5, 2, Locale::DeDe), "1.234,50");
        assert_eq!(format_number_in(1234.5, 2, Locale::FrFr), "1\u{202f}234,50");
        assert_eq!(format_number_in(1234.5, 2, Locale::EnGb), "1,234.50");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(50.0, 2), "50.00%");
        assert_eq!(format_percentage(-12.345, 1), "-12.3%");
        assert_eq!(format_percentage(f64::NAN, 2), "0.00%");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1234.5, "USD"), "$1,234.50");
        assert_eq!(format_currency(-50.0, "usd"), "-$50.00");
        assert_eq!(format_currency(1000.0, "GBP"), "£1,000.00");
        assert_eq!(format_currency(1500.4, "JPY"), "¥1,500");
        assert_eq!(format_currency(12.0, "CHF"), "CHF\u{a0}12.00");
        assert_eq!(format_currency(f64::NAN, "EUR"), "$0.00");
    }

    #[test]
    fn test_format_currency_trailing_symbol() {
        assert_eq!(
            format_currency_in(1234.5, "EUR", Locale::DeDe),
            "1.234,50\u{a0}€"
        );
    }

    #[test]
    fn test_locale_parse() {
        assert_eq!(Locale::parse("de-DE"), Locale::DeDe);
        assert_eq!(Locale::parse("fr_fr"), Locale::FrFr);
        assert_eq!(Locale::parse("xx-YY"), Locale::EnUs);
    }

    #[test]
    fn test_format_options() {
        let options = FormatOptions {
            locale: Locale::FrFr,
            decimals: 1,
            currency: "EUR".to_string(),
        };
        assert_eq!(options.number(1234.56), "1\u{202f}234,6");
        assert_eq!(options.percentage(12.34), "12,3%");
        assert_eq!(options.currency(-5.0), "-5,00\u{a0}€");

        let defaults = FormatOptions::default();
        assert_eq!(defaults.currency(f64::INFINITY), "$0.00");
        assert_eq!(defaults.number(0.004), "0.00");
    }

    #[test]
    fn test_decimals_are_clamped() {
        let formatted = format_number(1.0, 2_000_000);
        assert_eq!(formatted, format!("1.{}", "0".repeat(MAX_DECIMALS)));
        assert_eq!(
            format_percentage(-0.5, usize::MAX),
            format!("-0.5{}%", "0".repeat(MAX_DECIMALS - 1))
        );

        let options = FormatOptions {
            decimals: 70_000,
            ..FormatOptions::default()
        };
        assert_eq!(options.number(2.5).len(), "2.".len() + MAX_DECIMALS);
    }
}
