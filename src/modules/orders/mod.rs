pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Order, OrderStatus};
pub use repositories::{InMemoryOrderRepository, OrderRepository};
pub use services::correct_sale_amount;
