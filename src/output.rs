//! Rendering of the two output surfaces: the balance report and the accepted
//! payments report.

use crate::engine::ledger::Ledger;
use crate::engine::payment::Payment;
use crate::format;

use std::io::{self, Write};

/// Writes one line per balance, in first-top-up order, or a sentinel line
/// when no balance exists yet.
pub fn write_balances(mut output: impl Write, ledger: &Ledger) -> io::Result<()> {
    if ledger.balances().is_empty() {
        return writeln!(output, "No balances");
    }

    for balance in ledger.balances() {
        writeln!(
            output,
            "{} Account {}",
            balance.currency,
            format::money(balance.amount, Some(balance.currency))
        )?;
    }

    Ok(())
}

/// Writes one line per accepted payment, in acceptance order, showing the
/// settled amount, or a sentinel line when nothing was accepted.
pub fn write_payments(mut output: impl Write, payments: &[Payment]) -> io::Result<()> {
    if payments.is_empty() {
        return writeln!(output, "No payments");
    }

    for payment in payments {
        writeln!(
            output,
            "Payments ID {} {}",
            payment.id,
            format::money(payment.amount, Some(payment.currency))
        )?;
    }

    Ok(())
}
