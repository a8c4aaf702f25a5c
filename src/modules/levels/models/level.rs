use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Seller revenue milestones shown on the dashboard.
///
/// Thresholds are lifetime revenue in Kwanza, ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KambaLevel {
    Bronze,
    Zinga,
    Prata,
    Ouro,
    Diamante,
}

impl KambaLevel {
    /// All levels in ascending threshold order
    pub const fn ladder() -> [KambaLevel; 5] {
        [
            KambaLevel::Bronze,
            KambaLevel::Zinga,
            KambaLevel::Prata,
            KambaLevel::Ouro,
            KambaLevel::Diamante,
        ]
    }

    /// Lifetime Kwanza revenue required to reach this level
    pub fn threshold(&self) -> Decimal {
        match self {
            KambaLevel::Bronze => Decimal::new(1_000_000, 0),
            KambaLevel::Zinga => Decimal::new(5_000_000, 0),
            KambaLevel::Prata => Decimal::new(20_000_000, 0),
            KambaLevel::Ouro => Decimal::new(50_000_000, 0),
            KambaLevel::Diamante => Decimal::new(100_000_000, 0),
        }
    }

    /// Dashboard display name
    pub fn name(&self) -> &'static str {
        match self {
            KambaLevel::Bronze => "Bronze",
            KambaLevel::Zinga => "Zinga",
            KambaLevel::Prata => "Prata",
            KambaLevel::Ouro => "Ouro",
            KambaLevel::Diamante => "Diamante",
        }
    }
}

impl std::fmt::Display for KambaLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Where a seller sits on the ladder, recomputed from current revenue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelProgress {
    /// Highest level reached; `None` below Bronze
    pub current_level: Option<KambaLevel>,
    /// Next level to chase; `None` once Diamante is reached
    pub next_level: Option<KambaLevel>,
    /// Progress toward the next threshold, 0–100
    pub progress_percent: Decimal,
    /// Every level already reached, ascending
    pub achieved_levels: Vec<KambaLevel>,
}
