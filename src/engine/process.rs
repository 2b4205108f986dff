use super::ledger::Ledger;
use super::payment::{Payment, PaymentRequest};
use super::Amount;

/// Note: I chose to keep rejection reasons simple here. The batch contract is
/// silent-drop (the only observable signal is absence from the output), so
/// these never leave the engine; they exist to keep each check explicit and
/// testable.
#[derive(Debug, PartialEq)]
pub enum Rejection {
    /// No balance exists for the payment's currency.
    UnknownAccount,

    /// The settled amount is zero or negative.
    NonPositiveAmount,

    /// The remaining balance doesn't cover the settled amount.
    NotEnoughFunds,
}

/// Applies a batch of payment requests against a snapshot of the ledger.
///
/// The batch is processed strictly in input order against a running
/// remaining-balance accumulator, not against the pre-batch snapshot: an
/// accepted payment immediately reduces the funds seen by later requests in
/// the same batch. Rejected requests are skipped with no effect, and never
/// block the requests after them.
///
/// Returns the accepted payments (settled amounts, input order preserved) and
/// the new ledger snapshot. This function holds no state between calls; the
/// caller owns both the ledger and the append-only payment history.
pub fn process(requests: Vec<PaymentRequest>, ledger: &Ledger) -> (Vec<Payment>, Ledger) {
    let mut remaining = ledger.clone();
    let mut accepted = Vec::new();

    for request in requests {
        if let Ok(payment) = settle(&request, &mut remaining) {
            accepted.push(payment);
        }
    }

    (accepted, remaining)
}

// Settles one request against the running balances: a payment is entirely
// accepted (and debited) or entirely dropped, never partially settled.
fn settle(request: &PaymentRequest, remaining: &mut Ledger) -> Result<Payment, Rejection> {
    let available = remaining
        .amount(request.currency)
        .ok_or(Rejection::UnknownAccount)?;

    let payment = request.settle();
    if payment.amount <= Amount::ZERO {
        return Err(Rejection::NonPositiveAmount);
    }
    if payment.amount > available {
        return Err(Rejection::NotEnoughFunds);
    }

    remaining.debit(request.currency, payment.amount);
    Ok(payment)
}

#[cfg(test)]
mod process_tests {
    use super::*;
    use crate::engine::currency::Currency;
    use crate::engine::ledger::TopUp;
    use crate::engine::PaymentId;
    use rust_decimal_macros::dec;

    fn ledger(balances: Vec<(Currency, Amount)>) -> Ledger {
        Ledger::new().apply_top_ups(
            balances
                .into_iter()
                .map(|(currency, amount)| TopUp { currency, amount }),
        )
    }

    fn request(id: PaymentId, currency: Currency, amount: Amount) -> PaymentRequest {
        PaymentRequest {
            id,
            currency,
            amount,
        }
    }

    #[test]
    fn test_accepted_payment_debits_the_settled_amount() {
        let (accepted, after) = process(
            vec![request(764, Currency::Eur, dec!(100))],
            &ledger(vec![(Currency::Eur, dec!(1000))]),
        );

        assert_eq!(
            vec![Payment {
                id: 764,
                currency: Currency::Eur,
                amount: dec!(99.50),
            }],
            accepted
        );
        assert_eq!(Some(dec!(900.50)), after.amount(Currency::Eur));
    }

    #[test]
    // Within one batch, the second request sees the funds left by the first:
    // 100 - 9.95 - 19.90 = 70.15.
    fn test_running_balance_within_a_batch() {
        let (accepted, after) = process(
            vec![
                request(764, Currency::Eur, dec!(10)),
                request(765, Currency::Eur, dec!(20)),
            ],
            &ledger(vec![(Currency::Eur, dec!(100))]),
        );

        let amounts: Vec<Amount> = accepted.iter().map(|payment| payment.amount).collect();
        assert_eq!(vec![dec!(9.95), dec!(19.90)], amounts);
        assert_eq!(Some(dec!(70.15)), after.amount(Currency::Eur));
    }

    #[test]
    // Two payments that each fit the pre-batch balance, but not together:
    // the second one must be rejected against the running total.
    fn test_second_payment_rejected_against_running_total() {
        let (accepted, after) = process(
            vec![
                request(1, Currency::Eur, dec!(60)),
                request(2, Currency::Eur, dec!(60)),
            ],
            &ledger(vec![(Currency::Eur, dec!(100))]),
        );

        assert_eq!(1, accepted.len());
        assert_eq!(1, accepted[0].id);
        assert_eq!(Some(dec!(100) - dec!(59.70)), after.amount(Currency::Eur));
    }

    #[test]
    // Each currency runs its own accumulator.
    fn test_multiple_currencies_in_one_batch() {
        let (accepted, after) = process(
            vec![
                request(764, Currency::Eur, dec!(10)),
                request(765, Currency::Gbp, dec!(20)),
            ],
            &ledger(vec![(Currency::Eur, dec!(100)), (Currency::Gbp, dec!(100))]),
        );

        assert_eq!(2, accepted.len());
        assert_eq!(dec!(9.95), accepted[0].amount);
        assert_eq!(dec!(20) - dec!(20) / dec!(300), accepted[1].amount);
        assert_eq!(Some(dec!(90.05)), after.amount(Currency::Eur));
    }

    #[test]
    // A rejection in the middle of the batch must not block later requests.
    fn test_rejection_does_not_block_later_requests() {
        let (accepted, after) = process(
            vec![
                request(764, Currency::Eur, dec!(10)),
                request(765, Currency::Gbp, dec!(20)), // no GBP balance
                request(766, Currency::Eur, dec!(10)),
            ],
            &ledger(vec![(Currency::Eur, dec!(100))]),
        );

        let ids: Vec<PaymentId> = accepted.iter().map(|payment| payment.id).collect();
        assert_eq!(vec![764, 766], ids);
        assert_eq!(Some(dec!(80.10)), after.amount(Currency::Eur));
    }

    #[test]
    // An empty batch, or one where everything is rejected, still yields a
    // valid (unchanged) result.
    fn test_fully_rejected_batch_leaves_the_ledger_unchanged() {
        let before = ledger(vec![(Currency::Eur, dec!(10))]);

        let (accepted, after) = process(
            vec![
                request(763, Currency::Eur, dec!(20)), // not enough funds
                request(764, Currency::Gbp, dec!(20)), // no such balance
                request(765, Currency::Eur, dec!(-20)),
                request(766, Currency::Eur, dec!(0)),
            ],
            &before,
        );

        assert!(accepted.is_empty());
        assert_eq!(before, after);
    }
}
