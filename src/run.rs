//! The orchestrator: owns the session state and wires parsing, the engine and
//! the report together.

use crate::engine::ledger::Ledger;
use crate::engine::payment::Payment;
use crate::engine::process::process;
use crate::input;
use crate::output;

use std::io::{self, Read, Write};

/// One session's worth of state: the current balances and the accepted
/// payments history.
///
/// The engine never mutates anything in place; each call hands back a fresh
/// snapshot, and this is the single writer that commits it. The payments
/// history is append-only: accepted payments are never mutated or removed.
#[derive(Debug, Default)]
pub struct App {
    ledger: Ledger,
    payments: Vec<Payment>,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one raw batch of top-up entries to the balances.
    pub fn top_up(&mut self, raw: &str) {
        // Entries that fail to parse are dropped: one bad entry must never
        // discard the valid ones in the same batch.
        let (top_ups, _errors) = input::parse_top_ups(raw);
        self.ledger = self.ledger.apply_top_ups(top_ups);
    }

    /// Processes one raw batch of payment entries against the current
    /// balances, appending whatever was accepted to the history.
    pub fn process_payments(&mut self, raw: &str) {
        let (requests, _errors) = input::parse_payments(raw);
        let (accepted, ledger) = process(requests, &self.ledger);
        self.ledger = ledger;
        self.payments.extend(accepted);
    }

    /// Writes the balance report followed by the payments report.
    pub fn write_to(&self, mut output: impl Write) -> io::Result<()> {
        output::write_balances(&mut output, &self.ledger)?;
        output::write_payments(&mut output, &self.payments)
    }
}

/// Runs one full session: a batch of top-ups, then a batch of payments, then
/// the report.
pub fn run(
    mut top_ups: impl Read,
    mut payments: impl Read,
    output: impl Write,
) -> io::Result<()> {
    let mut app = App::new();
    let mut raw = String::new();

    top_ups.read_to_string(&mut raw)?;
    app.top_up(&raw);

    raw.clear();
    payments.read_to_string(&mut raw)?;
    app.process_payments(&raw);

    app.write_to(output)
}
