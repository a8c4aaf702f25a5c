pub mod models;
pub mod services;

pub use models::{KambaLevel, LevelProgress};
pub use services::level_progress;
