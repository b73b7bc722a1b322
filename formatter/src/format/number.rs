// Currency, percent, number and quantity rendering.
use super::{parse_number, Formatter, MAX_DECIMALS};
use shared::RawValue;

impl Formatter {
    /// `"R$ 1.234,56"`. `currency` is an ISO code; `None` means the locale default.
    pub fn format_currency<'a>(&self, value: impl Into<RawValue<'a>>, currency: Option<&str>) -> String {
        let raw = value.into();
        let result = parse_number(&raw).map(|n| self.currency_of(n, currency));
        self.or_placeholder("currency", &raw, result)
    }

    /// Currency of the absolute value with an explicit `+`/`-` in front: `"+R$ 10,00"`.
    pub fn format_currency_with_sign<'a>(&self, value: impl Into<RawValue<'a>>, currency: Option<&str>) -> String {
        let raw = value.into();
        let result = parse_number(&raw).map(|n| {
            let sign = if n < 0.0 { '-' } else { '+' };
            format!("{}{}", sign, self.currency_of(n.abs(), currency))
        });
        self.or_placeholder("currency_with_sign", &raw, result)
    }

    /// Fixed-point percentage: `"+12.35%"`, `"-5.00%"`.
    pub fn format_percent<'a>(&self, value: impl Into<RawValue<'a>>, decimals: usize, show_sign: bool) -> String {
        let raw = value.into();
        let result = parse_number(&raw).map(|n| {
            let sign = if show_sign && n >= 0.0 { "+" } else { "" };
            format!("{}{:.*}%", sign, decimals.min(MAX_DECIMALS), n)
        });
        self.or_placeholder("percent", &raw, result)
    }

    /// Grouped number padded to exactly `decimals` fraction digits: `"1,50"`.
    pub fn format_number<'a>(&self, value: impl Into<RawValue<'a>>, decimals: usize) -> String {
        let raw = value.into();
        let decimals = decimals.min(MAX_DECIMALS);
        let result = parse_number(&raw).map(|n| self.render_signed(n, decimals, decimals));
        self.or_placeholder("number", &raw, result)
    }

    /// Grouped number with up to `max_decimals` fraction digits, trailing zeros dropped: `"1,5"`.
    pub fn format_quantity<'a>(&self, value: impl Into<RawValue<'a>>, max_decimals: usize) -> String {
        let raw = value.into();
        let result = parse_number(&raw).map(|n| self.render_signed(n, 0, max_decimals.min(MAX_DECIMALS)));
        self.or_placeholder("quantity", &raw, result)
    }

    fn currency_of(&self, value: f64, currency: Option<&str>) -> String {
        let symbol = self.locale().currency_symbol(currency);
        let body = self.render_decimal(value.abs(), 2, 2);
        let sign = if value < 0.0 && !is_zero_rendering(&body) { "-" } else { "" };
        format!("{}{} {}", sign, symbol, body)
    }

    fn render_signed(&self, value: f64, min_frac: usize, max_frac: usize) -> String {
        let body = self.render_decimal(value.abs(), min_frac, max_frac);
        if value < 0.0 && !is_zero_rendering(&body) {
            format!("-{}", body)
        } else {
            body
        }
    }

    // Rounds to max_frac digits, drops trailing zeros down to min_frac, then applies
    // the locale's grouping and decimal separators. `abs` must be non-negative.
    fn render_decimal(&self, abs: f64, min_frac: usize, max_frac: usize) -> String {
        let locale = self.locale();
        let fixed = format!("{:.*}", max_frac, abs);
        let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

        let mut frac = frac_part.trim_end_matches('0');
        if frac.len() < min_frac {
            frac = &frac_part[..min_frac.min(frac_part.len())];
        }

        let mut out = group_digits(int_part, locale.group_separator);
        if !frac.is_empty() {
            out.push(locale.decimal_separator);
            out.push_str(frac);
        }
        out
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

// A value that rounds to zero carries no sign.
fn is_zero_rendering(body: &str) -> bool {
    !body.chars().any(|c| c.is_ascii_digit() && c != '0')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FormatConfig;
    use crate::format::{DEFAULT_DECIMALS, DEFAULT_QUANTITY_DECIMALS};

    fn fmt() -> Formatter {
        Formatter::default()
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits("0", '.'), "0");
        assert_eq!(group_digits("123", '.'), "123");
        assert_eq!(group_digits("1234", '.'), "1.234");
        assert_eq!(group_digits("123456", '.'), "123.456");
        assert_eq!(group_digits("1234567", '.'), "1.234.567");
    }

    #[test]
    fn test_currency_default_brl() {
        assert_eq!(fmt().format_currency(1234.56, Some("BRL")), "R$ 1.234,56");
        assert_eq!(fmt().format_currency(1234.56, None), "R$ 1.234,56");
        assert_eq!(fmt().format_currency(1234567.891, None), "R$ 1.234.567,89");
        assert_eq!(fmt().format_currency(0.5, None), "R$ 0,50");
    }

    #[test]
    fn test_currency_negative_and_tiny() {
        assert_eq!(fmt().format_currency(-1234.5, None), "-R$ 1.234,50");
        assert_eq!(fmt().format_currency(-0.004, None), "R$ 0,00");
    }

    #[test]
    fn test_currency_code_override() {
        assert_eq!(fmt().format_currency(10, Some("USD")), "US$ 10,00");
        assert_eq!(fmt().format_currency(10, Some("eur")), "€ 10,00");
        assert_eq!(fmt().format_currency(10, Some("chf")), "CHF 10,00");
    }

    #[test]
    fn test_currency_from_text() {
        assert_eq!(fmt().format_currency("1234.56", None), "R$ 1.234,56");
        assert_eq!(fmt().format_currency(" 42 ", None), "R$ 42,00");
        assert_eq!(fmt().format_currency("abc", None), "-");
        assert_eq!(fmt().format_currency("", None), "-");
        assert_eq!(fmt().format_currency(None::<f64>, None), "-");
    }

    #[test]
    fn test_currency_with_sign() {
        assert_eq!(fmt().format_currency_with_sign(1234.56, None), "+R$ 1.234,56");
        assert_eq!(fmt().format_currency_with_sign(-50, None), "-R$ 50,00");
        assert_eq!(fmt().format_currency_with_sign(0, None), "+R$ 0,00");
        assert_eq!(fmt().format_currency_with_sign("-0.5", Some("USD")), "-US$ 0,50");
        assert_eq!(fmt().format_currency_with_sign(None::<f64>, None), "-");
    }

    #[test]
    fn test_currency_with_sign_never_doubles_minus() {
        for value in [-0.01, -1.0, -1234.56, -1e9] {
            let out = fmt().format_currency_with_sign(value, None);
            assert!(out.starts_with('-'), "{}", out);
            assert!(!out.starts_with("--"), "{}", out);
            assert_eq!(out.matches('-').count(), 1, "{}", out);
        }
    }

    #[test]
    fn test_percent() {
        assert_eq!(fmt().format_percent(12.345, 2, true), "+12.35%");
        assert_eq!(fmt().format_percent(-5, 2, true), "-5.00%");
        assert_eq!(fmt().format_percent(7.49, 0, false), "7%");
        assert_eq!(fmt().format_percent(5, 1, false), "5.0%");
        assert_eq!(fmt().format_percent(0, DEFAULT_DECIMALS, true), "+0.00%");
        assert_eq!(fmt().format_percent(-0.0, DEFAULT_DECIMALS, true), "+0.00%");
        assert_eq!(fmt().format_percent("7.5", DEFAULT_DECIMALS, true), "+7.50%");
        assert_eq!(fmt().format_percent("abc", DEFAULT_DECIMALS, true), "-");
    }

    #[test]
    fn test_number_pads_to_precision() {
        assert_eq!(fmt().format_number(1.5, 2), "1,50");
        assert_eq!(fmt().format_number(1234567.891, DEFAULT_DECIMALS), "1.234.567,89");
        assert_eq!(fmt().format_number(-9876.54, 1), "-9.876,5");
        assert_eq!(fmt().format_number(42, 0), "42");
    }

    #[test]
    fn test_quantity_suppresses_trailing_zeros() {
        assert_eq!(fmt().format_quantity(1.5, 6), "1,5");
        assert_eq!(fmt().format_quantity(2.0, DEFAULT_QUANTITY_DECIMALS), "2");
        assert_eq!(fmt().format_quantity(0.12345678, 6), "0,123457");
        assert_eq!(fmt().format_quantity(1234.5, 6), "1.234,5");
        assert_eq!(fmt().format_quantity(-0.0000001, 6), "0");
    }

    #[test]
    fn test_exact_binary_ties_round_to_even() {
        // 0.125 and 2.5 are exact in binary; `{:.N}` breaks the tie toward even.
        assert_eq!(fmt().format_number(0.125, 2), "0,12");
        assert_eq!(fmt().format_number(0.375, 2), "0,38");
        assert_eq!(fmt().format_percent(2.5, 0, true), "+2%");
        assert_eq!(fmt().format_percent(3.5, 0, true), "+4%");
        assert_eq!(fmt().format_currency(0.125, None), "R$ 0,12");
    }

    #[test]
    fn test_quantity_and_number_diverge() {
        assert_ne!(fmt().format_quantity(1.5, 6), fmt().format_number(1.5, 2));
    }

    #[test]
    fn test_precision_is_clamped() {
        let out = fmt().format_number(1.0, 500);
        assert_eq!(out, format!("1,{}", "0".repeat(MAX_DECIMALS)));
    }

    #[test]
    fn test_custom_separators() {
        let mut config = FormatConfig::default();
        config.locale.decimal_separator = '.';
        config.locale.group_separator = ',';
        let formatter = Formatter::new(config);
        assert_eq!(formatter.format_number(1234.5, 2), "1,234.50");
        assert_eq!(formatter.format_currency(1234.5, Some("USD")), "US$ 1,234.50");
    }
}
