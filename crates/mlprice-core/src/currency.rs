//! Locale-specific rendering of minor-unit amounts.

/// Presentation rules for one currency/locale pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub symbol: &'static str,
    pub decimal_separator: char,
    pub group_separator: char,
    /// Number of minor-unit digits (2 for centavos).
    pub minor_digits: u32,
}

impl CurrencyFormat {
    /// Brazilian real, `pt-BR` conventions: `R$ 1.234,56`.
    pub const BRL: Self = Self {
        symbol: "R$",
        decimal_separator: ',',
        group_separator: '.',
        minor_digits: 2,
    };

    /// Renders `minor` units as a currency string, e.g. `123456` → `"R$ 1.234,56"`.
    #[must_use]
    pub fn format(&self, minor: u64) -> String {
        let scale = 10u64.pow(self.minor_digits);
        let major = group_digits(minor / scale, self.group_separator);

        if self.minor_digits == 0 {
            return format!("{} {major}", self.symbol);
        }

        let fraction = minor % scale;
        let width = self.minor_digits as usize;
        format!(
            "{} {major}{}{fraction:0width$}",
            self.symbol, self.decimal_separator
        )
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::BRL
    }
}

/// Inserts `separator` between every group of three digits, counting from
/// the right.
fn group_digits(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_amount_below_one_thousand() {
        assert_eq!(CurrencyFormat::BRL.format(999), "R$ 9,99");
    }

    #[test]
    fn formats_amount_with_two_digit_major() {
        assert_eq!(CurrencyFormat::BRL.format(1_234), "R$ 12,34");
    }

    #[test]
    fn formats_zero() {
        assert_eq!(CurrencyFormat::BRL.format(0), "R$ 0,00");
    }

    #[test]
    fn pads_single_digit_fraction() {
        assert_eq!(CurrencyFormat::BRL.format(5), "R$ 0,05");
        assert_eq!(CurrencyFormat::BRL.format(8_000), "R$ 80,00");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(CurrencyFormat::BRL.format(123_456), "R$ 1.234,56");
        assert_eq!(CurrencyFormat::BRL.format(123_456_789), "R$ 1.234.567,89");
        assert_eq!(CurrencyFormat::BRL.format(100_000_000), "R$ 1.000.000,00");
    }

    #[test]
    fn formats_without_minor_digits() {
        let whole = CurrencyFormat {
            symbol: "¥",
            decimal_separator: '.',
            group_separator: ',',
            minor_digits: 0,
        };
        assert_eq!(whole.format(1_234_567), "¥ 1,234,567");
    }

    #[test]
    fn group_digits_short_values_untouched() {
        assert_eq!(group_digits(0, '.'), "0");
        assert_eq!(group_digits(999, '.'), "999");
        assert_eq!(group_digits(1_000, '.'), "1.000");
    }
}
