//! Start-of-turn income.
//!
//! Income is the base grant plus the base IP of every owned state plus
//! active combination bonuses, minus upkeep on large reserves, minus the
//! swing tax charged to a leader, plus the catch-up bonus paid to the side
//! that is behind. The net never goes below zero.

use serde::{Deserialize, Serialize};

use crate::core::{CatchUpSettings, GameState, PlayerId, RulesConfig};
use crate::geography::Geography;

/// Every term of one player's income.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeBreakdown {
    pub base: u32,
    /// Base IP of the owned states.
    pub state_income: u32,
    pub combination_bonus: u32,
    pub maintenance: u32,
    pub swing_tax: u32,
    pub catch_up_bonus: u32,
    /// Player IP minus opponent IP.
    pub ip_gap: i64,
    /// Player states minus opponent states.
    pub state_gap: i64,
    pub net: u32,
}

impl IncomeBreakdown {
    /// Game-log lines describing the non-zero terms.
    #[must_use]
    pub fn log_lines(&self, player: PlayerId, reserves: u32) -> Vec<String> {
        let mut lines = vec![format!(
            "{player} income +{} IP (base {}; states {}; combinations {})",
            self.base + self.state_income + self.combination_bonus,
            self.base,
            self.state_income,
            self.combination_bonus
        )];
        if self.maintenance > 0 {
            lines.push(format!("{player} maintenance -{} IP (reserves {reserves})", self.maintenance));
        }
        if self.swing_tax > 0 {
            lines.push(format!(
                "{player} swing tax -{} IP{}",
                self.swing_tax,
                gap_reason("lead", self.ip_gap, self.state_gap)
            ));
        }
        if self.catch_up_bonus > 0 {
            lines.push(format!(
                "{player} catch-up bonus +{} IP{}",
                self.catch_up_bonus,
                gap_reason("behind", -self.ip_gap, -self.state_gap)
            ));
        }
        lines
    }
}

fn gap_reason(word: &str, ip_gap: i64, state_gap: i64) -> String {
    let mut parts = Vec::new();
    if ip_gap > 0 {
        parts.push(format!("{word} {ip_gap} IP"));
    }
    if state_gap > 0 {
        let label = if state_gap == 1 { "state" } else { "states" };
        parts.push(format!("{word} {state_gap} {label}"));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

/// Compute the income `player` would receive at the start of their turn.
#[must_use]
pub fn compute_income(
    state: &GameState,
    player: PlayerId,
    config: &RulesConfig,
    geography: &Geography,
) -> IncomeBreakdown {
    let me = state.player(player);
    let opponent = state.player(player.opponent());

    let state_income = geography.states.state_income(&me.states);
    let combination_bonus = geography
        .summary_for(state, player)
        .income_bonus(me.states.len(), state.neutral_state_count());

    let maintenance = match config.maintenance.divisor {
        0 => 0,
        divisor => me.ip.saturating_sub(config.maintenance.threshold) / divisor,
    };

    let ip_gap = i64::from(me.ip) - i64::from(opponent.ip);
    let state_gap = count(me.states.len()) - count(opponent.states.len());
    let (swing_tax, catch_up_bonus) = catch_up(ip_gap, state_gap, &config.catch_up);

    let gross = i64::from(config.base_income) + i64::from(state_income) + i64::from(combination_bonus)
        - i64::from(maintenance)
        - i64::from(swing_tax)
        + i64::from(catch_up_bonus);

    IncomeBreakdown {
        base: config.base_income,
        state_income,
        combination_bonus,
        maintenance,
        swing_tax,
        catch_up_bonus,
        ip_gap,
        state_gap,
        net: u32::try_from(gross.max(0)).unwrap_or(u32::MAX),
    }
}

fn count(len: usize) -> i64 {
    i64::try_from(len).unwrap_or(i64::MAX)
}

/// (swing tax, catch-up bonus) for the given leads. Negative gaps mean trailing.
fn catch_up(ip_gap: i64, state_gap: i64, settings: &CatchUpSettings) -> (u32, u32) {
    let ip_grace = i64::from(settings.ip_grace);
    let ip_step = i64::from(settings.ip_step.max(1));
    let state_grace = i64::from(settings.state_grace);

    let ip_points = |gap: i64| if gap <= ip_grace { 0 } else { (gap - ip_grace) / ip_step };
    let state_points = |gap: i64| if gap <= state_grace { 0 } else { gap - state_grace };

    let mut tax = 0;
    let mut bonus = 0;
    if ip_gap > 0 {
        tax += ip_points(ip_gap);
    } else {
        bonus += ip_points(-ip_gap);
    }
    if state_gap > 0 {
        tax += state_points(state_gap);
    } else {
        bonus += state_points(-state_gap);
    }

    let cap = i64::from(settings.max_modifier);
    let clamp = |points: i64| u32::try_from(points.clamp(0, cap)).unwrap_or(0);
    (clamp(tax), clamp(bonus))
}
