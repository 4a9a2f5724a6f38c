//! Ruleset configuration.
//!
//! Every tunable constant of the base ruleset lives in `RulesConfig`.
//! The defaults are the standard game; hosts may load overrides from JSON:
//!
//! ```
//! use truth_engine::core::RulesConfig;
//!
//! let config = RulesConfig::from_json(r#"{ "max_plays_per_turn": 4 }"#).unwrap();
//! assert_eq!(config.max_plays_per_turn, 4);
//! assert_eq!(config.hand_limit, 5); // untouched fields keep their defaults
//! ```

use serde::{Deserialize, Serialize};

use super::error::{EngineError, EngineResult};

/// Victory thresholds checked by `win_check`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WinThresholds {
    /// Controlled states needed for a territorial win.
    pub states: usize,
    /// Truth at or above this wins for the Truth faction.
    pub truth_high: i32,
    /// Truth at or below this wins for the Government faction.
    pub truth_low: i32,
    /// IP reserve needed for an economic win.
    pub ip: u32,
}

impl Default for WinThresholds {
    fn default() -> Self {
        Self {
            states: 10,
            truth_high: 95,
            truth_low: 5,
            ip: 300,
        }
    }
}

/// Upkeep charged on large IP reserves at the start of a turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaintenanceSettings {
    /// Reserves above this are taxed.
    pub threshold: u32,
    /// One IP of upkeep per `divisor` IP above the threshold. Zero disables upkeep.
    pub divisor: u32,
}

impl Default for MaintenanceSettings {
    fn default() -> Self {
        Self {
            threshold: 40,
            divisor: 10,
        }
    }
}

/// Swing tax on the leader and catch-up bonus for the trailing side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatchUpSettings {
    /// IP lead ignored before the tax starts.
    pub ip_grace: u32,
    /// Each full step of IP lead beyond the grace adds one point.
    pub ip_step: u32,
    /// State lead ignored before the tax starts.
    pub state_grace: u32,
    /// Cap applied separately to the tax and to the bonus.
    pub max_modifier: u32,
}

impl Default for CatchUpSettings {
    fn default() -> Self {
        Self {
            ip_grace: 10,
            ip_step: 5,
            state_grace: 1,
            max_modifier: 4,
        }
    }
}

/// Public Frenzy momentum driven by Truth swings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MomentumSettings {
    /// Truth movement per frenzy step. Smaller swings are ignored. Zero disables momentum.
    pub swing_step: i32,
    /// Crossing this frenzy value upward grants the Truth side a bonus play.
    pub frenzy_spike: i32,
}

impl Default for MomentumSettings {
    fn default() -> Self {
        Self {
            swing_step: 10,
            frenzy_spike: 60,
        }
    }
}

/// Complete ruleset configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Plays allowed per turn before bonuses.
    pub max_plays_per_turn: u32,
    /// Hand size `start_turn` refills to.
    pub hand_limit: usize,
    /// Income granted every turn before state income.
    pub base_income: u32,
    /// IP charged for each discard after the first in a turn.
    pub discard_cost: u32,
    /// IP each side starts the game with.
    pub starting_ip: u32,
    /// Initial position of the Truth meter.
    pub starting_truth: i32,
    /// Size of the fallback deck generated when deck and discard run dry.
    pub refill_deck_size: usize,
    /// Victory thresholds.
    pub win: WinThresholds,
    /// Reserve upkeep.
    pub maintenance: MaintenanceSettings,
    /// Leader tax / trailer bonus.
    pub catch_up: CatchUpSettings,
    /// Public Frenzy bonus plays.
    pub momentum: MomentumSettings,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            max_plays_per_turn: 3,
            hand_limit: 5,
            base_income: 5,
            discard_cost: 1,
            starting_ip: 5,
            starting_truth: 50,
            refill_deck_size: 40,
            win: WinThresholds::default(),
            maintenance: MaintenanceSettings::default(),
            catch_up: CatchUpSettings::default(),
            momentum: MomentumSettings::default(),
        }
    }
}

impl RulesConfig {
    /// Parse a (possibly partial) JSON document over the defaults.
    pub fn from_json(json: &str) -> EngineResult<Self> {
        serde_json::from_str(json).map_err(|err| EngineError::Config {
            message: err.to_string(),
        })
    }

    /// Set the per-turn play limit.
    #[must_use]
    pub fn with_max_plays(mut self, plays: u32) -> Self {
        self.max_plays_per_turn = plays;
        self
    }

    /// Set the refill hand size.
    #[must_use]
    pub fn with_hand_limit(mut self, limit: usize) -> Self {
        self.hand_limit = limit;
        self
    }

    /// Set the starting IP for both sides.
    #[must_use]
    pub fn with_starting_ip(mut self, ip: u32) -> Self {
        self.starting_ip = ip;
        self
    }

    /// Set the starting Truth value.
    #[must_use]
    pub fn with_starting_truth(mut self, truth: i32) -> Self {
        self.starting_truth = truth.clamp(0, 100);
        self
    }

    /// Turn off reserve upkeep and the swing tax / catch-up bonus,
    /// leaving income as base plus state income.
    #[must_use]
    pub fn without_income_adjustments(mut self) -> Self {
        self.maintenance.divisor = 0;
        self.catch_up.max_modifier = 0;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_base_ruleset() {
        let config = RulesConfig::default();

        assert_eq!(config.max_plays_per_turn, 3);
        assert_eq!(config.hand_limit, 5);
        assert_eq!(config.base_income, 5);
        assert_eq!(config.discard_cost, 1);
        assert_eq!(config.win.states, 10);
        assert_eq!(config.win.truth_high, 95);
        assert_eq!(config.win.truth_low, 5);
        assert_eq!(config.win.ip, 300);
        assert_eq!(config.momentum.swing_step, 10);
        assert_eq!(config.momentum.frenzy_spike, 60);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = RulesConfig::from_json(r#"{ "win": { "ip": 150 }, "discard_cost": 2 }"#).unwrap();

        assert_eq!(config.win.ip, 150);
        assert_eq!(config.win.states, 10);
        assert_eq!(config.discard_cost, 2);
        assert_eq!(config.maintenance, MaintenanceSettings::default());
    }

    #[test]
    fn test_bad_json_is_config_error() {
        let err = RulesConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, EngineError::Config { .. }));
    }

    #[test]
    fn test_builder() {
        let config = RulesConfig::default()
            .with_max_plays(5)
            .with_hand_limit(7)
            .with_starting_truth(140)
            .without_income_adjustments();

        assert_eq!(config.max_plays_per_turn, 5);
        assert_eq!(config.hand_limit, 7);
        assert_eq!(config.starting_truth, 100);
        assert_eq!(config.maintenance.divisor, 0);
        assert_eq!(config.catch_up.max_modifier, 0);
    }
}
