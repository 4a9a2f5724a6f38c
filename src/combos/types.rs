//! Combo definitions, triggers, rewards and evaluation results.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{CardType, Rarity};
use crate::geography::StateId;

/// Catalog family a combo belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComboCategory {
    Sequence,
    Count,
    Threshold,
    State,
    Hybrid,
}

/// Comparison used by count triggers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CountOperator {
    #[default]
    #[serde(rename = ">=")]
    AtLeast,
    #[serde(rename = "<=")]
    AtMost,
    #[serde(rename = "==")]
    Exactly,
}

impl CountOperator {
    #[must_use]
    pub fn compare(self, actual: usize, expected: usize) -> bool {
        match self {
            CountOperator::AtLeast => actual >= expected,
            CountOperator::AtMost => actual <= expected,
            CountOperator::Exactly => actual == expected,
        }
    }
}

/// Aggregate measured by threshold triggers. All are "at least" comparisons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdMetric {
    /// Total IP spent on plays.
    IpSpent,
    AttackSpent,
    MediaSpent,
    ZoneSpent,
    /// Distinct states targeted.
    UniqueStatesTargeted,
    /// Number of plays.
    Plays,
    /// Plays costing 2 or less.
    LowCostCount,
    /// Plays costing 6 or more.
    HighCostCount,
}

/// How a hybrid trigger combines its parts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HybridMode {
    #[default]
    All,
    Any,
}

/// Pattern a turn's resolved plays must match.
///
/// `card_type: None` means any type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ComboTrigger {
    /// Card types in order: a contiguous run, or a subsequence when gaps are allowed.
    Sequence {
        pattern: SmallVec<[CardType; 4]>,
        #[serde(default)]
        allow_gaps: bool,
    },
    /// Number of plays of a type (and optionally a minimum rarity class).
    Count {
        card_type: Option<CardType>,
        count: usize,
        #[serde(default)]
        rarity: Option<Rarity>,
        #[serde(default)]
        operator: CountOperator,
    },
    Threshold { metric: ThresholdMetric, value: u32 },
    /// Targeted plays: the same state `same_state_count` times, or at least
    /// `unique_states_count` distinct states, optionally limited to a list.
    State {
        #[serde(default)]
        card_type: Option<CardType>,
        #[serde(default)]
        targets: Vec<StateId>,
        #[serde(default)]
        same_state_count: Option<usize>,
        #[serde(default)]
        unique_states_count: Option<usize>,
    },
    Hybrid {
        triggers: Vec<ComboTrigger>,
        #[serde(default)]
        mode: HybridMode,
    },
}

impl ComboTrigger {
    /// Contiguous card-type run.
    #[must_use]
    pub fn sequence(pattern: &[CardType]) -> Self {
        ComboTrigger::Sequence {
            pattern: SmallVec::from_slice(pattern),
            allow_gaps: false,
        }
    }

    /// At least `count` plays of `card_type` (any type when `None`).
    #[must_use]
    pub fn count(card_type: Option<CardType>, count: usize) -> Self {
        ComboTrigger::Count {
            card_type,
            count,
            rarity: None,
            operator: CountOperator::AtLeast,
        }
    }

    /// At least `count` plays of a rarity class.
    #[must_use]
    pub fn count_rarity(count: usize, rarity: Rarity) -> Self {
        ComboTrigger::Count {
            card_type: None,
            count,
            rarity: Some(rarity),
            operator: CountOperator::AtLeast,
        }
    }

    #[must_use]
    pub fn threshold(metric: ThresholdMetric, value: u32) -> Self {
        ComboTrigger::Threshold { metric, value }
    }

    /// One state targeted `times` times.
    #[must_use]
    pub fn same_state(card_type: Option<CardType>, targets: &[&str], times: usize) -> Self {
        ComboTrigger::State {
            card_type,
            targets: targets.iter().map(|&s| StateId::new(s)).collect(),
            same_state_count: Some(times),
            unique_states_count: None,
        }
    }

    /// At least `states` distinct states targeted.
    #[must_use]
    pub fn unique_states(card_type: Option<CardType>, targets: &[&str], states: usize) -> Self {
        ComboTrigger::State {
            card_type,
            targets: targets.iter().map(|&s| StateId::new(s)).collect(),
            same_state_count: None,
            unique_states_count: Some(states),
        }
    }

    /// Every part must match.
    #[must_use]
    pub fn all(triggers: Vec<ComboTrigger>) -> Self {
        ComboTrigger::Hybrid {
            triggers,
            mode: HybridMode::All,
        }
    }

    /// Any part may match.
    #[must_use]
    pub fn any(triggers: Vec<ComboTrigger>) -> Self {
        ComboTrigger::Hybrid {
            triggers,
            mode: HybridMode::Any,
        }
    }
}

/// What a matched combo grants.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboReward {
    /// IP added to the player (a negative value drains, never below zero).
    #[serde(default)]
    pub ip: i32,
    /// Truth magnitude, pushed in the player's faction direction when applied.
    #[serde(default)]
    pub truth: i32,
    /// Multiplier for the player's next ATTACK.
    #[serde(default)]
    pub next_attack_multiplier: Option<u32>,
    /// Line appended to the game log when applied.
    #[serde(default)]
    pub log: Option<String>,
}

impl ComboReward {
    #[must_use]
    pub fn ip(ip: i32) -> Self {
        Self {
            ip,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn truth(truth: i32) -> Self {
        Self {
            truth,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn ip_and_truth(ip: i32, truth: i32) -> Self {
        Self {
            ip,
            truth,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn attack_multiplier(multiplier: u32) -> Self {
        Self {
            next_attack_multiplier: Some(multiplier),
            ..Self::default()
        }
    }

    /// Clamp positive IP and Truth to `cap`.
    #[must_use]
    pub fn capped(&self, cap: Option<i32>) -> Self {
        let Some(cap) = cap else {
            return self.clone();
        };
        let clamp = |value: i32| if value > 0 { value.min(cap) } else { value };
        Self {
            ip: clamp(self.ip),
            truth: clamp(self.truth),
            ..self.clone()
        }
    }

    /// Short description, e.g. `(+3 IP, ±2 Truth)`.
    #[must_use]
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if self.ip != 0 {
            parts.push(format!("{:+} IP", self.ip));
        }
        if self.truth > 0 {
            parts.push(format!("±{} Truth", self.truth));
        } else if self.truth < 0 {
            parts.push(format!("{} Truth", self.truth));
        }
        if let Some(multiplier) = self.next_attack_multiplier.filter(|&m| m > 1) {
            parts.push(format!("Next attack x{multiplier}"));
        }

        if parts.is_empty() {
            String::new()
        } else {
            format!("({})", parts.join(", "))
        }
    }
}

/// One catalog entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboDefinition {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: ComboCategory,
    /// Higher priorities are evaluated first.
    pub priority: u32,
    /// Ceiling applied to positive IP and Truth rewards.
    #[serde(default)]
    pub cap: Option<i32>,
    pub enabled_by_default: bool,
    pub trigger: ComboTrigger,
    pub reward: ComboReward,
}

impl ComboDefinition {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: ComboCategory,
        priority: u32,
        trigger: ComboTrigger,
        reward: ComboReward,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            category,
            priority,
            cap: None,
            enabled_by_default: true,
            trigger,
            reward,
        }
    }

    /// Set the description (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the reward cap (builder pattern).
    #[must_use]
    pub fn with_cap(mut self, cap: i32) -> Self {
        self.cap = Some(cap);
        self
    }

    /// Disable unless toggled on (builder pattern).
    #[must_use]
    pub fn disabled_by_default(mut self) -> Self {
        self.enabled_by_default = false;
        self
    }
}

/// A combo that matched this turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboResult {
    pub combo_id: String,
    pub name: String,
    /// Reward after the definition's cap.
    pub reward: ComboReward,
    /// Sequence numbers of the plays that formed the match.
    pub matched: Vec<u32>,
}

/// Outcome of `ComboEvaluator::evaluate`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboEvaluation {
    /// Matched combos in priority order.
    pub results: Vec<ComboResult>,
    /// Summed IP and Truth; the highest multiplier granted.
    pub total_reward: ComboReward,
    /// One line per matched combo.
    pub logs: Vec<String>,
}

impl ComboEvaluation {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_operator() {
        assert!(CountOperator::AtLeast.compare(3, 3));
        assert!(!CountOperator::AtLeast.compare(2, 3));
        assert!(CountOperator::AtMost.compare(1, 3));
        assert!(CountOperator::Exactly.compare(3, 3));
        assert!(!CountOperator::Exactly.compare(4, 3));
    }

    #[test]
    fn test_reward_cap_only_clamps_positive_values() {
        let reward = ComboReward::ip_and_truth(6, -3);

        let capped = reward.capped(Some(4));
        assert_eq!(capped.ip, 4);
        assert_eq!(capped.truth, -3);

        assert_eq!(reward.capped(None), reward);
    }

    #[test]
    fn test_describe() {
        assert_eq!(ComboReward::ip_and_truth(3, 2).describe(), "(+3 IP, ±2 Truth)");
        assert_eq!(ComboReward::attack_multiplier(2).describe(), "(Next attack x2)");
        assert_eq!(ComboReward::default().describe(), "");
    }

    #[test]
    fn test_trigger_json_shape() {
        let trigger = ComboTrigger::count(Some(CardType::Media), 3);
        let json = serde_json::to_value(&trigger).unwrap();

        assert_eq!(json["kind"], "count");
        assert_eq!(json["card_type"], "MEDIA");
        assert_eq!(json["operator"], ">=");

        let back: ComboTrigger = serde_json::from_value(json).unwrap();
        assert_eq!(back, trigger);
    }
}
