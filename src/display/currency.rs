//! Currency formatting
//!
//! Maps a display currency to the way amounts are written in its usual
//! locale: symbol and its placement, separators, and fraction digits.

use crate::models::{CurrencyCode, Money};

/// How digits are grouped in the whole part
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Grouping {
    /// 1,234,567
    Thousands,
    /// 12,34,567
    Indian,
}

/// Locale conventions for one currency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyFormat {
    symbol: &'static str,
    symbol_after: bool,
    decimal_separator: char,
    group_separator: char,
    fraction_digits: u8,
    grouping: Grouping,
}

impl CurrencyFormat {
    const fn prefixed(symbol: &'static str) -> Self {
        Self {
            symbol,
            symbol_after: false,
            decimal_separator: '.',
            group_separator: ',',
            fraction_digits: 2,
            grouping: Grouping::Thousands,
        }
    }

    pub fn for_code(code: CurrencyCode) -> Self {
        match code {
            CurrencyCode::Usd | CurrencyCode::Aud | CurrencyCode::Cad | CurrencyCode::Sgd => {
                Self::prefixed("$")
            }
            CurrencyCode::Eur => Self {
                symbol_after: true,
                decimal_separator: ',',
                group_separator: '.',
                ..Self::prefixed("€")
            },
            CurrencyCode::Gbp => Self::prefixed("£"),
            CurrencyCode::Jpy => Self {
                fraction_digits: 0,
                ..Self::prefixed("¥")
            },
            CurrencyCode::Inr => Self {
                grouping: Grouping::Indian,
                ..Self::prefixed("₹")
            },
            CurrencyCode::Lkr => Self::prefixed("Rs. "),
            CurrencyCode::Cny => Self::prefixed("¥"),
            CurrencyCode::Myr => Self::prefixed("RM"),
            CurrencyCode::Thb => Self::prefixed("฿"),
            CurrencyCode::Idr => Self {
                decimal_separator: ',',
                group_separator: '.',
                ..Self::prefixed("Rp")
            },
            CurrencyCode::Php => Self::prefixed("₱"),
            CurrencyCode::Vnd => Self {
                symbol_after: true,
                decimal_separator: ',',
                group_separator: '.',
                fraction_digits: 0,
                ..Self::prefixed("₫")
            },
            CurrencyCode::Krw => Self {
                fraction_digits: 0,
                ..Self::prefixed("₩")
            },
            CurrencyCode::Aed => Self::prefixed("AED "),
            CurrencyCode::Sar => Self::prefixed("SAR "),
            CurrencyCode::Qar => Self::prefixed("QAR "),
        }
    }

    /// Format an amount, e.g. `$1,234.50` or `1.234,50 €`
    pub fn format(&self, amount: Money) -> String {
        let cents = amount.cents().unsigned_abs();

        let number = if self.fraction_digits == 0 {
            // Half-up to whole units
            self.group((cents + 50) / 100)
        } else {
            format!(
                "{}{}{:02}",
                self.group(cents / 100),
                self.decimal_separator,
                cents % 100
            )
        };

        let body = if self.symbol_after {
            format!("{} {}", number, self.symbol)
        } else {
            format!("{}{}", self.symbol, number)
        };

        if amount.is_negative() {
            format!("-{}", body)
        } else {
            body
        }
    }

    fn group(&self, whole: u64) -> String {
        let digits = whole.to_string();
        if digits.len() <= 3 {
            return digits;
        }

        let (head, tail) = digits.split_at(digits.len() - 3);
        let step = match self.grouping {
            Grouping::Thousands => 3,
            Grouping::Indian => 2,
        };

        let mut parts: Vec<&str> = Vec::new();
        let mut end = head.len();
        while end > 0 {
            let start = end.saturating_sub(step);
            parts.push(&head[start..end]);
            end = start;
        }
        parts.reverse();

        let separator = self.group_separator.to_string();
        format!("{}{}{}", parts.join(&separator), self.group_separator, tail)
    }
}

/// Format an amount in the given currency
pub fn format_money(amount: Money, currency: CurrencyCode) -> String {
    CurrencyFormat::for_code(currency).format(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cents(n: i64) -> Money {
        Money::from_cents(n)
    }

    #[test]
    fn test_usd() {
        assert_eq!(format_money(cents(0), CurrencyCode::Usd), "$0.00");
        assert_eq!(format_money(cents(123_450), CurrencyCode::Usd), "$1,234.50");
        assert_eq!(format_money(cents(-5), CurrencyCode::Usd), "-$0.05");
        assert_eq!(
            format_money(cents(123_456_789), CurrencyCode::Usd),
            "$1,234,567.89"
        );
    }

    #[test]
    fn test_euro_layout() {
        assert_eq!(format_money(cents(123_450), CurrencyCode::Eur), "1.234,50 €");
    }

    #[test]
    fn test_zero_fraction_currencies_round() {
        assert_eq!(format_money(cents(123_450), CurrencyCode::Jpy), "¥1,235");
        assert_eq!(format_money(cents(123_449), CurrencyCode::Krw), "₩1,234");
        assert_eq!(format_money(cents(5_000_000), CurrencyCode::Vnd), "50.000 ₫");
    }

    #[test]
    fn test_indian_grouping() {
        assert_eq!(
            format_money(cents(1_234_567_00), CurrencyCode::Inr),
            "₹12,34,567.00"
        );
        assert_eq!(format_money(cents(99_900), CurrencyCode::Inr), "₹999.00");
    }

    #[test]
    fn test_spaced_prefixes() {
        assert_eq!(format_money(cents(1000), CurrencyCode::Lkr), "Rs. 10.00");
        assert_eq!(format_money(cents(1000), CurrencyCode::Aed), "AED 10.00");
    }
}
