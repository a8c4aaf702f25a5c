pub mod access_grant_repository;
pub mod balance_repository;

pub use access_grant_repository::{AccessGrantRepository, InMemoryAccessGrantRepository};
pub use balance_repository::{BalanceRepository, InMemoryBalanceRepository};
