pub mod order;

pub use order::{Order, OrderStatus};
