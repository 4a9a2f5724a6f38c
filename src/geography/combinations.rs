//! State combinations: bonuses for holding a complete set of states.
//!
//! A combination is active while its owner controls every required state.
//! Nothing is persisted; `CombinationCatalog::summarize` recomputes the
//! aggregate from the owned set whenever income or card cost needs it.

use im::OrdSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::data;
use super::states::StateId;

/// Thematic grouping, for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CombinationCategory {
    Economic,
    Military,
    Intelligence,
    Cultural,
    Energy,
    Transport,
}

/// Mechanical bonus granted on top of the flat bonus IP.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombinationEffect {
    /// Extra IP every turn.
    FlatIp(u32),
    /// IP per state the owner controls.
    IpPerControlledState(u32),
    /// IP per state nobody controls.
    IpPerNeutralState(u32),
    /// Added to the cost of the owner's MEDIA cards.
    MediaCostModifier(i32),
    /// Percentage applied to the owner's MEDIA truth swings.
    TruthMultiplierPct(u32),
    /// Extra downward Truth push on Government MEDIA plays.
    GovernmentTruthBonus(i32),
}

/// One catalog entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateCombination {
    pub id: String,
    pub name: String,
    pub description: String,
    pub required: SmallVec<[StateId; 6]>,
    pub bonus_ip: u32,
    pub effect: Option<CombinationEffect>,
    pub category: CombinationCategory,
}

impl StateCombination {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        required: &[&str],
        bonus_ip: u32,
        category: CombinationCategory,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            required: required.iter().map(|&s| StateId::new(s)).collect(),
            bonus_ip,
            effect: None,
            category,
        }
    }

    /// Set the description (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the mechanical effect (builder pattern).
    #[must_use]
    pub fn with_effect(mut self, effect: CombinationEffect) -> Self {
        self.effect = Some(effect);
        self
    }

    /// Are all required states in `controlled`?
    #[must_use]
    pub fn is_complete(&self, controlled: &OrdSet<StateId>) -> bool {
        self.required.iter().all(|id| controlled.contains(id))
    }
}

/// Aggregated effect of every active combination.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinationSummary {
    /// Ids of the active combinations, in catalog order.
    pub active: Vec<String>,
    pub total_bonus_ip: u32,
    pub flat_ip_bonus: u32,
    pub ip_per_controlled_state: u32,
    pub ip_per_neutral_state: u32,
    pub media_cost_modifier: i32,
    /// 100 means unscaled.
    pub truth_multiplier_pct: u32,
    pub government_truth_bonus: i32,
}

impl Default for CombinationSummary {
    fn default() -> Self {
        Self {
            active: Vec::new(),
            total_bonus_ip: 0,
            flat_ip_bonus: 0,
            ip_per_controlled_state: 0,
            ip_per_neutral_state: 0,
            media_cost_modifier: 0,
            truth_multiplier_pct: 100,
            government_truth_bonus: 0,
        }
    }
}

impl CombinationSummary {
    /// Per-turn IP from combinations, given the owner's and the neutral state counts.
    #[must_use]
    pub fn income_bonus(&self, controlled: usize, neutral: usize) -> u32 {
        let per_state = |rate: u32, count: usize| rate.saturating_mul(u32::try_from(count).unwrap_or(u32::MAX));

        self.total_bonus_ip
            .saturating_add(self.flat_ip_bonus)
            .saturating_add(per_state(self.ip_per_controlled_state, controlled))
            .saturating_add(per_state(self.ip_per_neutral_state, neutral))
    }

    fn absorb(&mut self, combination: &StateCombination) {
        self.active.push(combination.id.clone());
        self.total_bonus_ip += combination.bonus_ip;

        match combination.effect {
            Some(CombinationEffect::FlatIp(ip)) => self.flat_ip_bonus += ip,
            Some(CombinationEffect::IpPerControlledState(ip)) => self.ip_per_controlled_state += ip,
            Some(CombinationEffect::IpPerNeutralState(ip)) => self.ip_per_neutral_state += ip,
            Some(CombinationEffect::MediaCostModifier(delta)) => self.media_cost_modifier += delta,
            Some(CombinationEffect::TruthMultiplierPct(pct)) => {
                self.truth_multiplier_pct = self.truth_multiplier_pct.max(pct);
            }
            Some(CombinationEffect::GovernmentTruthBonus(bonus)) => self.government_truth_bonus += bonus,
            None => {}
        }
    }
}

/// The set of known combinations.
#[derive(Clone, Debug, Default)]
pub struct CombinationCatalog {
    combinations: Vec<StateCombination>,
}

impl CombinationCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard combinations.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            combinations: data::standard_combinations(),
        }
    }

    /// Add a combination.
    pub fn push(&mut self, combination: StateCombination) {
        self.combinations.push(combination);
    }

    pub fn iter(&self) -> impl Iterator<Item = &StateCombination> {
        self.combinations.iter()
    }

    /// Combinations completed by `controlled`.
    pub fn active<'a>(&'a self, controlled: &'a OrdSet<StateId>) -> impl Iterator<Item = &'a StateCombination> {
        self.combinations.iter().filter(move |c| c.is_complete(controlled))
    }

    /// Aggregate every active combination.
    #[must_use]
    pub fn summarize(&self, controlled: &OrdSet<StateId>) -> CombinationSummary {
        let mut summary = CombinationSummary::default();
        for combination in self.active(controlled) {
            summary.absorb(combination);
        }
        summary
    }
}
