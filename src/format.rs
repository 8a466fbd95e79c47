//! Currency formatting.
//!
//! Renders amounts the way each currency's bound locale writes them:
//! grouping and decimal separators, symbol placement, and a fixed number of
//! fraction digits. The live counter also gets a cosmetic sub-cent digit.

use std::fmt;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::Currency;

const NO_BREAK_SPACE: char = '\u{a0}';
const SUPERSCRIPT_DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];

/// How many fraction digits an amount is shown with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FractionDigits {
    /// No fraction digits, for summaries such as the monthly salary.
    Whole,
    /// Two fraction digits, for running counters.
    Cents,
}

impl FractionDigits {
    /// Returns the number of digits after the decimal separator.
    pub fn scale(self) -> u32 {
        match self {
            FractionDigits::Whole => 0,
            FractionDigits::Cents => 2,
        }
    }
}

/// Formats an amount as a localized currency string.
///
/// Rounds half away from zero to the requested number of fraction digits.
///
/// # Example
///
/// ```
/// use salary_accrual::format::{FractionDigits, format_currency};
/// use salary_accrual::models::Currency;
/// use rust_decimal::Decimal;
///
/// let amount = Decimal::new(123456, 2); // 1234.56
/// assert_eq!(format_currency(amount, Currency::Usd, FractionDigits::Cents), "$1,234.56");
/// assert_eq!(format_currency(amount, Currency::Gbp, FractionDigits::Whole), "£1,235");
/// assert_eq!(format_currency(amount, Currency::Eur, FractionDigits::Cents), "1.234,56\u{a0}€");
/// ```
pub fn format_currency(amount: Decimal, currency: Currency, digits: FractionDigits) -> String {
    let rounded =
        amount.round_dp_with_strategy(digits.scale(), RoundingStrategy::MidpointAwayFromZero);
    render(rounded, currency, digits)
}

fn render(amount: Decimal, currency: Currency, digits: FractionDigits) -> String {
    let style = currency.style();
    let negative = amount.is_sign_negative() && !amount.is_zero();
    let magnitude = amount.abs();

    let whole = magnitude.trunc();
    let integer = whole.to_u128().unwrap_or(0).to_string();
    let mut number = group_digits(&integer, style.group_separator);

    let scale = digits.scale();
    if scale > 0 {
        let fraction = ((magnitude - whole) * Decimal::from(10u64.pow(scale)))
            .trunc()
            .to_u64()
            .unwrap_or(0);
        number.push(style.decimal_separator);
        number.push_str(&format!("{:0width$}", fraction, width = scale as usize));
    }

    let sign = if negative { "-" } else { "" };
    if style.symbol_after {
        format!("{}{}{}{}", sign, number, NO_BREAK_SPACE, style.symbol)
    } else {
        format!("{}{}{}", sign, style.symbol, number)
    }
}

/// Inserts a separator between every group of three integer digits.
fn group_digits(integer: &str, separator: char) -> String {
    let len = integer.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (index, c) in integer.chars().enumerate() {
        if index > 0 && (len - index) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }
    grouped
}

/// Returns the thousandths digit of an amount: `trunc(amount * 1000) mod 10`.
///
/// Display-only; it plays no part in any rounding.
///
/// # Example
///
/// ```
/// use salary_accrual::format::sub_cent_digit;
/// use rust_decimal::Decimal;
///
/// assert_eq!(sub_cent_digit(Decimal::new(123456, 4)), 5); // 12.3456
/// ```
pub fn sub_cent_digit(amount: Decimal) -> u8 {
    let thousandths = (amount.abs().fract() * Decimal::from(1000)).trunc();
    (thousandths % Decimal::from(10)).to_u8().unwrap_or(0)
}

/// A running amount split into its cents display and a sub-cent digit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveAmount {
    /// The amount truncated to cents and formatted for its locale.
    pub formatted: String,
    /// The thousandths digit shown beside the formatted amount.
    pub sub_cent: u8,
}

impl fmt::Display for LiveAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digit = SUPERSCRIPT_DIGITS[usize::from(self.sub_cent % 10)];
        write!(f, "{}{}", self.formatted, digit)
    }
}

/// Formats a running counter with its sub-cent digit.
///
/// The cents part is truncated rather than rounded so that it reads
/// continuously with the digit that follows it.
///
/// # Example
///
/// ```
/// use salary_accrual::format::format_live;
/// use salary_accrual::models::Currency;
/// use rust_decimal::Decimal;
///
/// let live = format_live(Decimal::new(123456, 4), Currency::Gbp); // 12.3456
/// assert_eq!(live.formatted, "£12.34");
/// assert_eq!(live.sub_cent, 5);
/// assert_eq!(live.to_string(), "£12.34⁵");
/// ```
pub fn format_live(amount: Decimal, currency: Currency) -> LiveAmount {
    let cents = amount.round_dp_with_strategy(2, RoundingStrategy::ToZero);
    LiveAmount {
        formatted: render(cents, currency, FractionDigits::Cents),
        sub_cent: sub_cent_digit(amount),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_sub_cent_digit_of_largest_amount() {
        assert_eq!(sub_cent_digit(Decimal::MAX), 0);
        assert_eq!(sub_cent_digit(dec("70000000000000000000000000.0049")), 4);
    }

    #[test]
    fn test_live_format_of_largest_amount() {
        let live = format_live(Decimal::MAX, Currency::Usd);

        assert_eq!(live.sub_cent, 0);
        assert_eq!(live.formatted, "$79,228,162,514,264,337,593,543,950,335.00");
    }

    #[test]
    fn test_usd_uses_en_us_layout() {
        assert_eq!(
            format_currency(dec("1234567.891"), Currency::Usd, FractionDigits::Cents),
            "$1,234,567.89"
        );
    }

    #[test]
    fn test_gbp_whole_pounds() {
        assert_eq!(
            format_currency(dec("30000"), Currency::Gbp, FractionDigits::Whole),
            "£30,000"
        );
    }

    #[test]
    fn test_eur_uses_de_de_layout() {
        assert_eq!(
            format_currency(dec("1234.5"), Currency::Eur, FractionDigits::Cents),
            "1.234,50\u{a0}€"
        );
        assert_eq!(
            format_currency(dec("999"), Currency::Eur, FractionDigits::Whole),
            "999\u{a0}€"
        );
    }

    #[test]
    fn test_jpy_uses_ja_jp_layout() {
        assert_eq!(
            format_currency(dec("1234.5"), Currency::Jpy, FractionDigits::Whole),
            "￥1,235"
        );
        assert_eq!(
            format_currency(dec("1234.5"), Currency::Jpy, FractionDigits::Cents),
            "￥1,234.50"
        );
    }

    #[test]
    fn test_zero_amount() {
        assert_eq!(format_currency(Decimal::ZERO, Currency::Gbp, FractionDigits::Cents), "£0.00");
        assert_eq!(format_currency(Decimal::ZERO, Currency::Gbp, FractionDigits::Whole), "£0");
    }

    #[test]
    fn test_rounding_carries_into_grouping() {
        assert_eq!(
            format_currency(dec("999.995"), Currency::Usd, FractionDigits::Cents),
            "$1,000.00"
        );
    }

    #[test]
    fn test_half_rounds_away_from_zero() {
        assert_eq!(format_currency(dec("2.5"), Currency::Gbp, FractionDigits::Whole), "£3");
        assert_eq!(format_currency(dec("0.125"), Currency::Gbp, FractionDigits::Cents), "£0.13");
    }

    #[test]
    fn test_negative_amount_has_leading_sign() {
        assert_eq!(format_currency(dec("-5"), Currency::Usd, FractionDigits::Cents), "-$5.00");
        assert_eq!(
            format_currency(dec("-1234"), Currency::Eur, FractionDigits::Whole),
            "-1.234\u{a0}€"
        );
    }

    #[test]
    fn test_tiny_negative_rounds_to_unsigned_zero() {
        assert_eq!(format_currency(dec("-0.001"), Currency::Gbp, FractionDigits::Cents), "£0.00");
    }

    #[test]
    fn test_group_digits_boundaries() {
        assert_eq!(group_digits("1", ','), "1");
        assert_eq!(group_digits("123", ','), "123");
        assert_eq!(group_digits("1234", ','), "1,234");
        assert_eq!(group_digits("123456", '.'), "123.456");
        assert_eq!(group_digits("1234567", ','), "1,234,567");
    }

    #[test]
    fn test_sub_cent_digit() {
        assert_eq!(sub_cent_digit(dec("12.3456")), 5);
        assert_eq!(sub_cent_digit(dec("12.349")), 9);
        assert_eq!(sub_cent_digit(dec("0.0009")), 0);
        assert_eq!(sub_cent_digit(dec("7")), 0);
    }

    #[test]
    fn test_live_amount_truncates_cents() {
        let live = format_live(dec("12.349"), Currency::Usd);
        assert_eq!(live.formatted, "$12.34");
        assert_eq!(live.sub_cent, 9);
        assert_eq!(live.to_string(), "$12.34⁹");
    }

    #[test]
    fn test_live_amount_for_euro() {
        let live = format_live(dec("1000.0051"), Currency::Eur);
        assert_eq!(live.formatted, "1.000,00\u{a0}€");
        assert_eq!(live.sub_cent, 5);
    }
}
