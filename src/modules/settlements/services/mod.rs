pub mod settlement_service;

pub use settlement_service::{SettlementOutcome, SettlementService};
