pub mod currency;
pub mod ledger;
pub mod payment;
pub mod process;

// Using named types doesn't provide any compiler help, but it helps a lot with
// readability: `Vec<(PaymentId, Amount)>` is self-explanatory where
// `Vec<(u32, Decimal)>` would need a comment.
pub type PaymentId = u32;

// I decided to use a decimal library instead of the built-in float types, to be
// safer when dealing with money: amounts must not accumulate floating point
// drift across many top-ups and payments.
pub type Amount = rust_decimal::Decimal;
