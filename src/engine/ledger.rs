use super::currency::Currency;
use super::Amount;

/// A credit request against one currency's balance. Consumed immediately by
/// [`Ledger::apply_top_ups`], never retained.
#[derive(Debug, PartialEq)]
pub struct TopUp {
    pub currency: Currency,
    pub amount: Amount,
}

/// The current funds held in one currency. There is at most one `Balance` per
/// currency, its amount never goes below zero, and it is never removed once
/// created (it may sit at 0 after payments drain it).
#[derive(Clone, Debug, PartialEq)]
pub struct Balance {
    pub currency: Currency,
    pub amount: Amount,
}

/// The full set of per-currency balances.
///
/// A `Vec` instead of a map: the set holds at most a handful of currencies,
/// and it keeps the first-top-up order, which is the order balances are
/// reported in.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ledger {
    balances: Vec<Balance>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn balances(&self) -> &[Balance] {
        &self.balances
    }

    /// The funds currently held for `currency`, or `None` if no balance
    /// exists for it yet. A missing balance is not the same as a zero one:
    /// only a valid top-up brings a currency into existence.
    pub fn amount(&self, currency: Currency) -> Option<Amount> {
        self.balances
            .iter()
            .find(|balance| balance.currency == currency)
            .map(|balance| balance.amount)
    }

    /// Merges a batch of top-ups into a new snapshot of the ledger.
    ///
    /// A top-up must be strictly positive to take effect; anything else is
    /// dropped with no effect on the rest of the batch. Top-ups accumulate
    /// sequentially, so several entries for the same currency in one batch
    /// compose exactly as if they were applied one at a time.
    ///
    /// `self` is left untouched: callers get a full replacement set and
    /// decide themselves whether to commit it.
    pub fn apply_top_ups(&self, top_ups: impl IntoIterator<Item = TopUp>) -> Self {
        let mut next = self.clone();

        for top_up in top_ups {
            if top_up.amount <= Amount::ZERO {
                continue;
            }

            match next
                .balances
                .iter_mut()
                .find(|balance| balance.currency == top_up.currency)
            {
                Some(balance) => balance.amount += top_up.amount,
                None => next.balances.push(Balance {
                    currency: top_up.currency,
                    amount: top_up.amount,
                }),
            }
        }

        next
    }

    // The caller is responsible for checking the funds first; this only does
    // the subtraction on the running balance.
    pub(super) fn debit(&mut self, currency: Currency, amount: Amount) {
        if let Some(balance) = self
            .balances
            .iter_mut()
            .find(|balance| balance.currency == currency)
        {
            balance.amount -= amount;
        }
    }
}
