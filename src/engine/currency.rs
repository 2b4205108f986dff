use super::Amount;

use rust_decimal_macros::dec;
use serde::Deserialize;
use std::fmt;

/// The closed set of currencies we hold balances in.
///
/// Modelling this as an enum (rather than a free string) means an unsupported
/// code like `USD` already fails at the parsing stage: there is no way to
/// construct a balance or a payment for a currency we don't support.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Eur,
    Gbp,
    Isk,
}

impl Currency {
    /// The divisor D of the processing fee: fee = amount / 100 / D.
    /// In other words, a fee of 1/D percent of the requested amount.
    pub fn fee_divisor(self) -> Amount {
        match self {
            Currency::Eur => dec!(2),
            Currency::Gbp => dec!(3),
            // No negotiated rate for this currency: flat 1% fallback.
            Currency::Isk => dec!(1),
        }
    }

    /// ISK has no minor unit, so its amounts display without decimals.
    pub fn decimal_places(self) -> u32 {
        match self {
            Currency::Isk => 0,
            _ => 2,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Eur => "€",
            Currency::Gbp => "£",
            // ISK has no dedicated sign; it renders as a code prefix instead.
            Currency::Isk => "ISK",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Isk => "ISK",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[test]
// The fee is 1/2 percent for EUR, 1/3 percent for GBP, and the flat 1%
// fallback for everything else.
fn test_fee_divisor() {
    assert_eq!(dec!(2), Currency::Eur.fee_divisor());
    assert_eq!(dec!(3), Currency::Gbp.fee_divisor());
    assert_eq!(dec!(1), Currency::Isk.fee_divisor());
}

#[test]
fn test_decimal_places() {
    assert_eq!(2, Currency::Eur.decimal_places());
    assert_eq!(2, Currency::Gbp.decimal_places());
    assert_eq!(0, Currency::Isk.decimal_places());
}

#[test]
fn test_display_is_the_iso_code() {
    assert_eq!("EUR", Currency::Eur.to_string());
    assert_eq!("GBP", Currency::Gbp.to_string());
    assert_eq!("ISK", Currency::Isk.to_string());
}
