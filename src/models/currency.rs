//! Currency model.
//!
//! Each supported currency is bound to a single display locale. The locale
//! decides the symbol, where it goes and which separators are used.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// The currencies a salary can be displayed in.
///
/// # Example
///
/// ```
/// use salary_accrual::models::Currency;
///
/// let currency: Currency = "gbp".parse().unwrap();
/// assert_eq!(currency, Currency::Gbp);
/// assert_eq!(currency.locale(), "en-GB");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// US dollar, displayed as en-US.
    Usd,
    /// Pound sterling, displayed as en-GB.
    #[default]
    Gbp,
    /// Euro, displayed as de-DE.
    Eur,
    /// Japanese yen, displayed as ja-JP.
    Jpy,
}

/// How a locale lays out a currency amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleStyle {
    /// The currency symbol.
    pub symbol: &'static str,
    /// Whether the symbol follows the number (separated by a no-break space).
    pub symbol_after: bool,
    /// Thousands separator.
    pub group_separator: char,
    /// Decimal separator.
    pub decimal_separator: char,
}

impl Currency {
    /// All supported currencies, in display order.
    pub const ALL: [Currency; 4] = [Currency::Usd, Currency::Gbp, Currency::Eur, Currency::Jpy];

    /// Returns the ISO 4217 code.
    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Gbp => "GBP",
            Currency::Eur => "EUR",
            Currency::Jpy => "JPY",
        }
    }

    /// Returns the BCP 47 locale tag the currency is displayed with.
    pub fn locale(self) -> &'static str {
        match self {
            Currency::Usd => "en-US",
            Currency::Gbp => "en-GB",
            Currency::Eur => "de-DE",
            Currency::Jpy => "ja-JP",
        }
    }

    /// Returns the layout rules of the bound locale.
    pub fn style(self) -> LocaleStyle {
        match self {
            Currency::Usd => LocaleStyle {
                symbol: "$",
                symbol_after: false,
                group_separator: ',',
                decimal_separator: '.',
            },
            Currency::Gbp => LocaleStyle {
                symbol: "£",
                symbol_after: false,
                group_separator: ',',
                decimal_separator: '.',
            },
            Currency::Eur => LocaleStyle {
                symbol: "€",
                symbol_after: true,
                group_separator: '.',
                decimal_separator: ',',
            },
            Currency::Jpy => LocaleStyle {
                symbol: "￥",
                symbol_after: false,
                group_separator: ',',
                decimal_separator: '.',
            },
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Currency::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| EngineError::InvalidInput {
                field: "currency".to_string(),
                message: format!(
                    "unsupported currency '{}' (expected one of USD, GBP, EUR, JPY)",
                    code
                ),
            })
    }
}
