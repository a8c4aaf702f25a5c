pub mod currency_balance;

pub use currency_balance::{CurrencyBalance, RevenueSummary};
