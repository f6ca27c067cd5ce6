//! Display currency selection
//!
//! The selected currency only affects formatting; amounts themselves are
//! currency agnostic.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported display currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    #[default]
    Usd,
    Eur,
    Gbp,
    Jpy,
    Inr,
    Aud,
    Cad,
    Lkr,
    Cny,
    Sgd,
    Myr,
    Thb,
    Idr,
    Php,
    Vnd,
    Krw,
    Aed,
    Sar,
    Qar,
}

impl CurrencyCode {
    pub const ALL: [CurrencyCode; 19] = [
        Self::Usd,
        Self::Eur,
        Self::Gbp,
        Self::Jpy,
        Self::Inr,
        Self::Aud,
        Self::Cad,
        Self::Lkr,
        Self::Cny,
        Self::Sgd,
        Self::Myr,
        Self::Thb,
        Self::Idr,
        Self::Php,
        Self::Vnd,
        Self::Krw,
        Self::Aed,
        Self::Sar,
        Self::Qar,
    ];

    /// ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Jpy => "JPY",
            Self::Inr => "INR",
            Self::Aud => "AUD",
            Self::Cad => "CAD",
            Self::Lkr => "LKR",
            Self::Cny => "CNY",
            Self::Sgd => "SGD",
            Self::Myr => "MYR",
            Self::Thb => "THB",
            Self::Idr => "IDR",
            Self::Php => "PHP",
            Self::Vnd => "VND",
            Self::Krw => "KRW",
            Self::Aed => "AED",
            Self::Sar => "SAR",
            Self::Qar => "QAR",
        }
    }

    /// Parse a code, falling back to USD for anything unrecognised
    pub fn from_code_or_default(code: &str) -> Self {
        code.parse().unwrap_or_default()
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for CurrencyCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.code() == upper)
            .ok_or_else(|| format!("Unsupported currency: {}", s.trim()))
    }
}
