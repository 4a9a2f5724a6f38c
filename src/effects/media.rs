//! Media scaling: how geography bonuses change a MEDIA card's Truth swing.
//!
//! One formula covers every MEDIA play:
//!
//! 1. The authored `truth_delta` (positive for Truth cards, negative for
//!    Government cards) is multiplied by `truth_multiplier_pct / 100`,
//!    rounding half away from zero.
//! 2. A Government actor with a `government_truth_bonus` pushes the result
//!    further down by that bonus.
//!
//! With no active combinations the delta is returned unchanged.

use crate::core::Faction;
use crate::geography::CombinationSummary;

/// Truth change produced by a MEDIA card for an actor of `faction`.
#[must_use]
pub fn scaled_truth_delta(truth_delta: i32, faction: Faction, summary: &CombinationSummary) -> i32 {
    let pct = i64::from(summary.truth_multiplier_pct);
    let product = i64::from(truth_delta) * pct;
    let half = product.signum() * 50;
    let mut delta = (product + half) / 100;

    if faction == Faction::Government && summary.government_truth_bonus > 0 {
        delta -= i64::from(summary.government_truth_bonus);
    }

    delta.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(pct: u32, gov_bonus: i32) -> CombinationSummary {
        CombinationSummary {
            truth_multiplier_pct: pct,
            government_truth_bonus: gov_bonus,
            ..CombinationSummary::default()
        }
    }

    #[test]
    fn test_unscaled_is_identity() {
        let plain = CombinationSummary::default();

        for delta in [-7, -1, 0, 1, 4, 12] {
            assert_eq!(scaled_truth_delta(delta, Faction::Truth, &plain), delta);
            assert_eq!(scaled_truth_delta(delta, Faction::Government, &plain), delta);
        }
    }

    #[test]
    fn test_multiplier_rounds_away_from_zero() {
        let academic = summary(150, 0);

        assert_eq!(scaled_truth_delta(4, Faction::Truth, &academic), 6);
        assert_eq!(scaled_truth_delta(3, Faction::Truth, &academic), 5);
        assert_eq!(scaled_truth_delta(-3, Faction::Government, &academic), -5);
    }

    #[test]
    fn test_government_bonus_only_for_government() {
        let south = summary(100, 2);

        assert_eq!(scaled_truth_delta(-3, Faction::Government, &south), -5);
        assert_eq!(scaled_truth_delta(3, Faction::Truth, &south), 3);
    }
}
