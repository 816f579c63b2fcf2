//! Type-safe price representation using decimal arithmetic.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Currencies the catalog is priced in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurrencyCode {
    /// South Korean won, the local currency. No minor unit is shown.
    KRW,
    /// US dollar.
    USD,
}

impl CurrencyCode {
    /// Display symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::KRW => "₩",
            Self::USD => "$",
        }
    }

    /// Number of fraction digits shown.
    #[must_use]
    pub const fn fraction_digits(self) -> usize {
        match self {
            Self::KRW => 0,
            Self::USD => 2,
        }
    }
}

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (won, dollars).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// A whole-won price.
    #[must_use]
    pub fn krw(won: i64) -> Self {
        Self::new(Decimal::from(won), CurrencyCode::KRW)
    }

    /// A dollar price given in cents.
    #[must_use]
    pub fn usd_cents(cents: i64) -> Self {
        Self::new(Decimal::new(cents, 2), CurrencyCode::USD)
    }

    /// Price of `quantity` units.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self::new(self.amount * Decimal::from(quantity), self.currency_code)
    }

    /// Format for display with thousands separators, e.g. `₩12,000` or `$1,234.50`.
    #[must_use]
    pub fn display(&self) -> String {
        let digits = self.currency_code.fraction_digits();
        #[allow(clippy::cast_possible_truncation)] // at most 2
        let rounded = self.amount.abs().round_dp(digits as u32);
        let fixed = format!("{rounded:.digits$}");
        let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

        let mut out = String::with_capacity(fixed.len() + 4);
        if self.amount.is_sign_negative() && !self.amount.is_zero() {
            out.push('-');
        }
        out.push_str(self.currency_code.symbol());
        out.push_str(&group_thousands(whole));
        if !fraction.is_empty() {
            out.push('.');
            out.push_str(fraction);
        }
        out
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// Insert `,` every three digits from the right.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_krw_display() {
        assert_eq!(Price::krw(0).display(), "₩0");
        assert_eq!(Price::krw(900).display(), "₩900");
        assert_eq!(Price::krw(12_000).display(), "₩12,000");
        assert_eq!(Price::krw(1_250_000).display(), "₩1,250,000");
    }

    #[test]
    fn test_usd_display() {
        assert_eq!(Price::usd_cents(950).display(), "$9.50");
        assert_eq!(Price::usd_cents(123_450).display(), "$1,234.50");
        assert_eq!(Price::usd_cents(5).display(), "$0.05");
    }

    #[test]
    fn test_times() {
        assert_eq!(Price::krw(12_000).times(3), Price::krw(36_000));
        assert_eq!(Price::usd_cents(950).times(2).display(), "$19.00");
    }

    #[test]
    fn test_negative_display() {
        assert_eq!(Price::krw(-5_000).display(), "-₩5,000");
    }
}
