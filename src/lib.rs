//! A batch payments engine.
//!
//! Per-currency account balances are credited by `CURRENCY:AMOUNT` top-up
//! entries and debited by `ID:CURRENCY:AMOUNT` payment requests, each payment
//! paying a currency-specific processing fee deducted from the requested
//! amount. Entries that fail validation (unsupported currency, malformed
//! fields, non-positive amount, no balance for the currency, insufficient
//! funds) are dropped silently; the rest of their batch goes through.

pub mod engine;
pub mod format;
pub mod input;
pub mod output;
pub mod run;
