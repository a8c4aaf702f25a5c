pub mod level;

pub use level::{KambaLevel, LevelProgress};
