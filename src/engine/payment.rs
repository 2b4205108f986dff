use super::currency::Currency;
use super::{Amount, PaymentId};

use rust_decimal_macros::dec;

/// One payment request, as parsed from a single input entry. The id is
/// carried through unchanged; it is not required to be unique.
#[derive(Clone, Debug, PartialEq)]
pub struct PaymentRequest {
    pub id: PaymentId,
    pub currency: Currency,
    pub amount: Amount,
}

/// An accepted payment. `amount` is the settled amount: what was actually
/// debited from the balance, after the fee came off the requested amount.
#[derive(Clone, Debug, PartialEq)]
pub struct Payment {
    pub id: PaymentId,
    pub currency: Currency,
    pub amount: Amount,
}

impl PaymentRequest {
    /// Computes the settled amount for this request.
    ///
    /// The fee is 1/D percent of the requested amount (D being the currency's
    /// fee divisor), and it is deducted from what the payer is charged: the
    /// balance is debited the settled, lower amount. The fee is never added
    /// on top of the request.
    ///
    /// The result keeps full decimal precision; rounding only happens at
    /// display time.
    pub fn settle(&self) -> Payment {
        let fee = self.amount / dec!(100) / self.currency.fee_divisor();

        Payment {
            id: self.id,
            currency: self.currency,
            amount: self.amount - fee,
        }
    }
}

#[test]
// EUR pays a 1/2 percent fee: 100 requested settles at 99.50.
fn test_settle_eur() {
    let payment = PaymentRequest {
        id: 764,
        currency: Currency::Eur,
        amount: dec!(100),
    }
    .settle();

    assert_eq!(764, payment.id);
    assert_eq!(Currency::Eur, payment.currency);
    assert_eq!(dec!(99.50), payment.amount);
}

#[test]
// GBP pays a 1/3 percent fee: 100 requested settles at 99.666..., which only
// gets rounded when displayed.
fn test_settle_gbp_keeps_full_precision() {
    let payment = PaymentRequest {
        id: 764,
        currency: Currency::Gbp,
        amount: dec!(100),
    }
    .settle();

    assert_eq!(dec!(100) - dec!(1) / dec!(3), payment.amount);
    assert!(payment.amount > dec!(99.66));
    assert!(payment.amount < dec!(99.67));
}

#[test]
// The fallback 1% fee applies to currencies without a negotiated divisor.
fn test_settle_fallback_fee() {
    let payment = PaymentRequest {
        id: 1,
        currency: Currency::Isk,
        amount: dec!(100),
    }
    .settle();

    assert_eq!(dec!(99), payment.amount);
}

#[test]
// Settling a non-positive request yields a non-positive amount, which the
// processor then rejects.
fn test_settle_non_positive_amounts() {
    for amount in [dec!(0), dec!(-20)] {
        let payment = PaymentRequest {
            id: 765,
            currency: Currency::Eur,
            amount,
        }
        .settle();

        assert!(payment.amount <= dec!(0));
    }
}
