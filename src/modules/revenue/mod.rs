pub mod controllers;
pub mod models;
pub mod services;

pub use models::{CurrencyBalance, RevenueSummary};
pub use services::{aggregate_revenue, RevenueService};
