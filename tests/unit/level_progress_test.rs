// Tests for the seller level ladder.
//
// Pure lookup over five fixed Kwanza thresholds; progress is the filled
// fraction of the next threshold, capped at 100.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use kamba_payments::levels::{level_progress, KambaLevel};

#[test]
fn test_fresh_seller() {
    let progress = level_progress(dec!(0));

    assert_eq!(progress.current_level, None);
    assert_eq!(progress.next_level, Some(KambaLevel::Bronze));
    assert_eq!(progress.progress_percent, dec!(0));
    assert!(progress.achieved_levels.is_empty());
}

#[test]
fn test_bronze_threshold_exactly() {
    let progress = level_progress(dec!(1000000));

    assert_eq!(progress.current_level, Some(KambaLevel::Bronze));
    assert_eq!(progress.next_level, Some(KambaLevel::Zinga));
    // 1,000,000 of the 5,000,000 Zinga threshold
    assert_eq!(progress.progress_percent, dec!(20));
    assert_eq!(progress.achieved_levels, vec![KambaLevel::Bronze]);
}

#[test]
fn test_every_threshold_is_inclusive() {
    for level in KambaLevel::ladder() {
        let progress = level_progress(level.threshold());
        assert_eq!(progress.current_level, Some(level));

        let progress = level_progress(level.threshold() - dec!(0.01));
        assert_ne!(progress.current_level, Some(level));
    }
}

#[test]
fn test_top_of_the_ladder() {
    let progress = level_progress(KambaLevel::Diamante.threshold());

    assert_eq!(progress.current_level, Some(KambaLevel::Diamante));
    assert_eq!(progress.next_level, None);
    assert_eq!(progress.progress_percent, dec!(100));
    assert_eq!(progress.achieved_levels.len(), 5);
}

proptest! {
    #[test]
    fn test_progress_stays_in_range(kz in 0u64..1_000_000_000u64) {
        let progress = level_progress(Decimal::from(kz));

        prop_assert!(progress.progress_percent >= Decimal::ZERO);
        prop_assert!(progress.progress_percent <= Decimal::ONE_HUNDRED);
    }

    #[test]
    fn test_achievements_grow_with_revenue(
        low in 0u64..500_000_000u64,
        extra in 0u64..500_000_000u64
    ) {
        let poorer = level_progress(Decimal::from(low));
        let richer = level_progress(Decimal::from(low + extra));

        prop_assert!(richer.achieved_levels.len() >= poorer.achieved_levels.len());
    }

    #[test]
    fn test_achieved_levels_are_a_prefix_of_the_ladder(kz in 0u64..1_000_000_000u64) {
        let progress = level_progress(Decimal::from(kz));
        let ladder = KambaLevel::ladder();

        prop_assert_eq!(
            progress.achieved_levels.as_slice(),
            &ladder[..progress.achieved_levels.len()]
        );
        prop_assert_eq!(progress.current_level, progress.achieved_levels.last().copied());
    }

    #[test]
    fn test_negative_revenue_behaves_like_zero(kz in 1u64..1_000_000u64) {
        let negative = level_progress(-Decimal::from(kz));
        let zero = level_progress(Decimal::ZERO);

        prop_assert_eq!(negative.current_level, zero.current_level);
        prop_assert_eq!(negative.progress_percent, zero.progress_percent);
    }
}
