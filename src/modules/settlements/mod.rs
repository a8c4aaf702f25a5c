pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{AccessGrant, PaymentNotification};
pub use repositories::{
    AccessGrantRepository, BalanceRepository, InMemoryAccessGrantRepository,
    InMemoryBalanceRepository,
};
pub use services::{SettlementOutcome, SettlementService};
