pub mod revenue_service;

pub use revenue_service::{aggregate_revenue, RevenueService};
