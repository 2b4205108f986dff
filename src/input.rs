//! Parsing of the two raw input surfaces.
//!
//! Both surfaces are lists of colon-separated entries, split by commas or
//! newlines: `CURRENCY:AMOUNT` for top-ups, `ID:CURRENCY:AMOUNT` for
//! payments. Parsing never aborts a batch: each entry parses on its own, and
//! the ones that don't are returned as errors for the caller to drop.

use crate::engine::currency::Currency;
use crate::engine::ledger::TopUp;
use crate::engine::payment::PaymentRequest;
use crate::engine::{Amount, PaymentId};

#[derive(Debug, PartialEq)]
pub enum Error {
    /// The entry is malformed: wrong number of fields, a non-numeric amount,
    /// or a currency code outside the supported set.
    Entry(String),
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Self::Entry(err.to_string())
    }
}

/// Parses a batch of `CURRENCY:AMOUNT` top-up entries.
///
/// Malformed entries are reported, not applied; they have no effect on the
/// entries around them. Note that a parsed top-up is not yet a valid one:
/// the ledger still rejects non-positive amounts.
pub fn parse_top_ups(raw: &str) -> (Vec<TopUp>, Vec<Error>) {
    let normalised = normalise(raw);
    let mut top_ups = Vec::new();
    let mut errors = Vec::new();

    for record in entry_reader(&normalised).deserialize::<(Currency, Amount)>() {
        match record {
            Ok((currency, amount)) => top_ups.push(TopUp { currency, amount }),
            Err(err) => errors.push(err.into()),
        }
    }

    (top_ups, errors)
}

/// Parses a batch of `ID:CURRENCY:AMOUNT` payment entries.
pub fn parse_payments(raw: &str) -> (Vec<PaymentRequest>, Vec<Error>) {
    let normalised = normalise(raw);
    let mut requests = Vec::new();
    let mut errors = Vec::new();

    for record in entry_reader(&normalised).deserialize::<(PaymentId, Currency, Amount)>() {
        match record {
            Ok((id, currency, amount)) => requests.push(PaymentRequest {
                id,
                currency,
                amount,
            }),
            Err(err) => errors.push(err.into()),
        }
    }

    (requests, errors)
}

// Entries separate on commas as well as newlines; with the commas rewritten,
// every entry sits on its own line.
fn normalise(raw: &str) -> String {
    raw.replace(',', "\n")
}

// Fields separate on colons, so a headerless `:`-delimited CSV reader does
// the field splitting and the typed decoding for us.
//
// The reader is flexible on purpose: field counts are enforced per entry by
// the tuple deserialisation, so one entry with a bad shape can't drag down
// the well-formed entries around it.
fn entry_reader(normalised: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b':')
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(normalised.as_bytes())
}

#[cfg(test)]
mod top_up_tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_single_entry() {
        let (top_ups, errors) = parse_top_ups("EUR:100");

        assert_eq!(
            vec![TopUp {
                currency: Currency::Eur,
                amount: dec!(100),
            }],
            top_ups
        );
        assert!(errors.is_empty());
    }

    #[test]
    // Entries split on commas and newlines alike.
    fn test_parse_comma_and_newline_separated_entries() {
        for raw in ["EUR:100,GBP:50.5", "EUR:100\nGBP:50.5"] {
            let (top_ups, errors) = parse_top_ups(raw);

            assert_eq!(
                vec![
                    TopUp {
                        currency: Currency::Eur,
                        amount: dec!(100),
                    },
                    TopUp {
                        currency: Currency::Gbp,
                        amount: dec!(50.5),
                    },
                ],
                top_ups
            );
            assert!(errors.is_empty());
        }
    }

    #[test]
    fn test_parse_with_whitespace() {
        let (top_ups, errors) = parse_top_ups(" EUR : 100 ,  GBP:50");

        assert_eq!(2, top_ups.len());
        assert!(errors.is_empty());
    }

    #[test]
    // Negative and zero amounts parse fine; rejecting them is the ledger's
    // job, not the parser's.
    fn test_parse_non_positive_amounts() {
        let (top_ups, errors) = parse_top_ups("EUR:-100,GBP:0");

        assert_eq!(dec!(-100), top_ups[0].amount);
        assert_eq!(dec!(0), top_ups[1].amount);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_parse_unsupported_currency() {
        let (top_ups, errors) = parse_top_ups("USD:100");

        assert!(top_ups.is_empty());
        assert_eq!(1, errors.len());
        let Error::Entry(msg) = &errors[0];
        assert!(msg.contains("unknown variant `USD`"), "{:?}", msg);
    }

    #[test]
    fn test_parse_malformed_entries() {
        for raw in [
            "USD:100",     // unsupported currency
            "EUR:abc",     // non-numeric amount
            "EUR",         // missing amount
            "EUR:100:100", // too many fields
        ] {
            let (top_ups, errors) = parse_top_ups(raw);

            assert!(top_ups.is_empty(), "{:?}", raw);
            assert_eq!(1, errors.len(), "{:?}", raw);
        }
    }

    #[test]
    // One bad entry must never discard the valid entries around it.
    fn test_bad_entry_does_not_block_the_batch() {
        let (top_ups, errors) = parse_top_ups("EUR:50,USD:100,bogus,GBP:30");

        assert_eq!(2, top_ups.len());
        assert_eq!(Currency::Eur, top_ups[0].currency);
        assert_eq!(Currency::Gbp, top_ups[1].currency);
        assert_eq!(2, errors.len());
    }

    #[test]
    fn test_parse_empty_input() {
        let (top_ups, errors) = parse_top_ups("");

        assert!(top_ups.is_empty());
        assert!(errors.is_empty());
    }
}
