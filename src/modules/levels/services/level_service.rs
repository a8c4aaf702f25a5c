use rust_decimal::Decimal;

use super::super::models::{KambaLevel, LevelProgress};

/// Locate a seller on the level ladder from lifetime Kwanza revenue.
///
/// Pure lookup over the five fixed thresholds; nothing is persisted, the
/// dashboard recomputes this whenever the revenue total changes.
pub fn level_progress(total_revenue_kz: Decimal) -> LevelProgress {
    let total = total_revenue_kz.max(Decimal::ZERO);

    let achieved_levels: Vec<KambaLevel> = KambaLevel::ladder()
        .into_iter()
        .filter(|level| total >= level.threshold())
        .collect();

    let current_level = achieved_levels.last().copied();

    let next_level = KambaLevel::ladder()
        .into_iter()
        .find(|level| total < level.threshold());

    let progress_percent = match next_level {
        Some(next) => {
            let percent = total / next.threshold() * Decimal::ONE_HUNDRED;
            percent.min(Decimal::ONE_HUNDRED)
        }
        // past the last rung there is nothing left to fill
        None => Decimal::ONE_HUNDRED,
    };

    LevelProgress {
        current_level,
        next_level,
        progress_percent,
        achieved_levels,
    }
}
