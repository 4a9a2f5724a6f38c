//! Combo evaluation over the current turn's log.
//!
//! `evaluate` is pure: it reads the `Resolve` entries a player made this
//! turn and reports which catalog combos matched. `apply_rewards` is the
//! separate step that writes the rewards into a new state.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::catalog::standard_combos;
use super::types::{
    ComboDefinition, ComboEvaluation, ComboResult, ComboReward, ComboTrigger, HybridMode, ThresholdMetric,
};
use crate::cards::CardType;
use crate::core::{Faction, GameState, PlayerId, TurnPlay};
use crate::geography::StateId;

/// Player-facing combo switches.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComboSettings {
    /// Master switch.
    pub enabled: bool,
    /// Most combos granted in one turn.
    pub max_combos_per_turn: usize,
    /// Per-combo overrides of `enabled_by_default`.
    pub toggles: FxHashMap<String, bool>,
}

impl Default for ComboSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            max_combos_per_turn: 2,
            toggles: FxHashMap::default(),
        }
    }
}

impl ComboSettings {
    /// Set the per-turn combo limit (builder pattern).
    #[must_use]
    pub fn with_max_combos(mut self, max: usize) -> Self {
        self.max_combos_per_turn = max;
        self
    }

    /// Override one combo's switch (builder pattern).
    #[must_use]
    pub fn with_toggle(mut self, combo_id: impl Into<String>, enabled: bool) -> Self {
        self.toggles.insert(combo_id.into(), enabled);
        self
    }

    /// Switch one combo off (builder pattern).
    #[must_use]
    pub fn disable(self, combo_id: impl Into<String>) -> Self {
        self.with_toggle(combo_id, false)
    }

    #[must_use]
    pub fn is_enabled(&self, definition: &ComboDefinition) -> bool {
        self.toggles
            .get(&definition.id)
            .copied()
            .unwrap_or(definition.enabled_by_default)
    }
}

/// Aggregates over one player's resolved plays.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct TurnMetrics {
    ip_spent: u32,
    attack_spent: u32,
    media_spent: u32,
    zone_spent: u32,
    unique_states_targeted: u32,
    plays: u32,
    low_cost: u32,
    high_cost: u32,
}

impl TurnMetrics {
    fn measure(plays: &[&TurnPlay]) -> Self {
        let mut metrics = Self::default();
        let mut targeted: FxHashSet<&StateId> = FxHashSet::default();

        for play in plays {
            metrics.plays += 1;
            metrics.ip_spent += play.cost;
            match play.card_type {
                CardType::Attack => metrics.attack_spent += play.cost,
                CardType::Media => metrics.media_spent += play.cost,
                CardType::Zone => {
                    metrics.zone_spent += play.cost;
                    if let Some(target) = &play.target_state_id {
                        targeted.insert(target);
                    }
                }
            }
            if play.cost <= 2 {
                metrics.low_cost += 1;
            }
            if play.cost >= 6 {
                metrics.high_cost += 1;
            }
        }

        metrics.unique_states_targeted = u32::try_from(targeted.len()).unwrap_or(u32::MAX);
        metrics
    }

    fn get(&self, metric: ThresholdMetric) -> u32 {
        match metric {
            ThresholdMetric::IpSpent => self.ip_spent,
            ThresholdMetric::AttackSpent => self.attack_spent,
            ThresholdMetric::MediaSpent => self.media_spent,
            ThresholdMetric::ZoneSpent => self.zone_spent,
            ThresholdMetric::UniqueStatesTargeted => self.unique_states_targeted,
            ThresholdMetric::Plays => self.plays,
            ThresholdMetric::LowCostCount => self.low_cost,
            ThresholdMetric::HighCostCount => self.high_cost,
        }
    }
}

/// Matches a combo catalog against a player's turn.
///
/// ## Example
///
/// ```
/// use truth_engine::combos::{ComboEvaluator, ComboSettings};
///
/// let evaluator = ComboEvaluator::standard().with_settings(ComboSettings::default().with_max_combos(3));
/// assert_eq!(evaluator.settings().max_combos_per_turn, 3);
/// ```
#[derive(Clone, Debug)]
pub struct ComboEvaluator {
    /// Sorted by priority, highest first. Ties keep catalog order.
    definitions: Vec<ComboDefinition>,
    settings: ComboSettings,
}

impl ComboEvaluator {
    #[must_use]
    pub fn new(mut definitions: Vec<ComboDefinition>) -> Self {
        definitions.sort_by(|a, b| b.priority.cmp(&a.priority));
        Self {
            definitions,
            settings: ComboSettings::default(),
        }
    }

    /// Evaluator over the built-in catalog.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(standard_combos())
    }

    /// Replace the settings (builder pattern).
    #[must_use]
    pub fn with_settings(mut self, settings: ComboSettings) -> Self {
        self.settings = settings;
        self
    }

    #[must_use]
    pub fn settings(&self) -> &ComboSettings {
        &self.settings
    }

    /// Definitions in evaluation order.
    #[must_use]
    pub fn definitions(&self) -> &[ComboDefinition] {
        &self.definitions
    }

    /// Find the combos `player` triggered this turn. Does not modify `state`.
    #[must_use]
    pub fn evaluate(&self, state: &GameState, player: PlayerId) -> ComboEvaluation {
        let mut plays: Vec<&TurnPlay> = state
            .turn_plays
            .iter()
            .filter(|play| play.is_resolved() && play.owner == player)
            .collect();
        plays.sort_by_key(|play| play.sequence);

        let mut evaluation = ComboEvaluation::default();
        if !self.settings.enabled || plays.is_empty() {
            return evaluation;
        }

        let metrics = TurnMetrics::measure(&plays);
        debug!(player = %player, plays = metrics.plays, ip_spent = metrics.ip_spent, "evaluating combos");

        for definition in &self.definitions {
            if !self.settings.is_enabled(definition) {
                continue;
            }
            if evaluation.results.len() >= self.settings.max_combos_per_turn {
                break;
            }
            let Some(matched) = match_trigger(&definition.trigger, &plays, &metrics) else {
                continue;
            };

            let reward = definition.reward.capped(definition.cap);
            let total = &mut evaluation.total_reward;
            total.ip += reward.ip;
            total.truth += reward.truth;
            total.next_attack_multiplier = total.next_attack_multiplier.max(reward.next_attack_multiplier);

            let text = reward.describe();
            evaluation.logs.push(if text.is_empty() {
                definition.name.clone()
            } else {
                format!("{} {text}", definition.name)
            });

            info!(player = %player, combo = %definition.id, ip = reward.ip, truth = reward.truth, "combo triggered");
            evaluation.results.push(ComboResult {
                combo_id: definition.id.clone(),
                name: definition.name.clone(),
                reward,
                matched,
            });
        }

        evaluation
    }

    /// Write an evaluation's rewards for `player` into a new state.
    ///
    /// IP never drops below zero, Truth moves in the player's faction
    /// direction and stays clamped, and a granted attack multiplier replaces
    /// the pending one only when larger.
    #[must_use]
    pub fn apply_rewards(&self, state: &GameState, player: PlayerId, evaluation: &ComboEvaluation) -> GameState {
        let mut next = state.clone();
        if evaluation.is_empty() {
            return next;
        }

        let total = &evaluation.total_reward;
        let seat = next.player_mut(player);
        if total.ip > 0 {
            seat.gain_ip(total.ip.unsigned_abs());
        } else if total.ip < 0 {
            seat.spend_ip(total.ip.unsigned_abs());
        }

        if total.truth != 0 {
            let signed = match next.player(player).faction {
                Faction::Truth => total.truth,
                Faction::Government => -total.truth,
            };
            next.shift_truth(signed);
        }

        let mut granted: Option<u32> = None;
        for result in &evaluation.results {
            if let Some(line) = &result.reward.log {
                next.push_log(line.clone());
            }
            granted = granted.max(result.reward.next_attack_multiplier.filter(|&m| m > 0));
        }
        if let Some(granted) = granted {
            let seat = next.player_mut(player);
            seat.next_attack_multiplier = seat.next_attack_multiplier.max(Some(granted));
        }

        next
    }
}

impl Default for ComboEvaluator {
    fn default() -> Self {
        Self::standard()
    }
}

/// Sequence numbers of the plays forming a match, or `None` when the
/// trigger does not fire.
fn match_trigger(trigger: &ComboTrigger, plays: &[&TurnPlay], metrics: &TurnMetrics) -> Option<Vec<u32>> {
    match trigger {
        ComboTrigger::Sequence { pattern, allow_gaps } => {
            if *allow_gaps {
                match_subsequence(pattern, plays)
            } else {
                match_window(pattern, plays)
            }
        }
        ComboTrigger::Count {
            card_type,
            count,
            rarity,
            operator,
        } => {
            let filtered: Vec<&&TurnPlay> = plays
                .iter()
                .filter(|play| card_type.map_or(true, |t| play.card_type == t))
                .filter(|play| rarity.map_or(true, |r| play.card_rarity.satisfies(r)))
                .collect();
            operator
                .compare(filtered.len(), *count)
                .then(|| filtered.iter().take(*count).map(|play| play.sequence).collect())
        }
        ComboTrigger::Threshold { metric, value } => {
            (metrics.get(*metric) >= *value).then(|| plays.iter().map(|play| play.sequence).collect())
        }
        ComboTrigger::State {
            card_type,
            targets,
            same_state_count,
            unique_states_count,
        } => match_states(*card_type, targets, *same_state_count, *unique_states_count, plays),
        ComboTrigger::Hybrid { triggers, mode } => {
            let mut merged: Vec<u32> = Vec::new();
            let mut any = false;
            for inner in triggers {
                match match_trigger(inner, plays, metrics) {
                    Some(matched) => {
                        any = true;
                        merged.extend(matched);
                    }
                    None if *mode == HybridMode::All => return None,
                    None => {}
                }
            }
            if !any {
                return None;
            }
            merged.sort_unstable();
            merged.dedup();
            Some(merged)
        }
    }
}

fn match_window(pattern: &[CardType], plays: &[&TurnPlay]) -> Option<Vec<u32>> {
    if pattern.is_empty() {
        return Some(Vec::new());
    }
    plays
        .windows(pattern.len())
        .find(|window| window.iter().zip(pattern).all(|(play, t)| play.card_type == *t))
        .map(|window| window.iter().map(|play| play.sequence).collect())
}

fn match_subsequence(pattern: &[CardType], plays: &[&TurnPlay]) -> Option<Vec<u32>> {
    let mut matched = Vec::with_capacity(pattern.len());
    let mut wanted = pattern.iter().copied();
    let mut next = wanted.next();
    for play in plays {
        let Some(card_type) = next else {
            break;
        };
        if play.card_type == card_type {
            matched.push(play.sequence);
            next = wanted.next();
        }
    }
    next.is_none().then_some(matched)
}

fn match_states(
    card_type: Option<CardType>,
    targets: &[StateId],
    same_state_count: Option<usize>,
    unique_states_count: Option<usize>,
    plays: &[&TurnPlay],
) -> Option<Vec<u32>> {
    // (state, sequences) in first-targeted order
    let mut by_state: Vec<(&StateId, Vec<u32>)> = Vec::new();
    for play in plays {
        if card_type.is_some_and(|t| play.card_type != t) {
            continue;
        }
        let Some(target) = &play.target_state_id else {
            continue;
        };
        if !targets.is_empty() && !targets.contains(target) {
            continue;
        }
        match by_state.iter_mut().find(|(state, _)| *state == target) {
            Some((_, sequences)) => sequences.push(play.sequence),
            None => by_state.push((target, vec![play.sequence])),
        }
    }

    if let Some(times) = same_state_count {
        return by_state
            .iter()
            .find(|(_, sequences)| sequences.len() >= times)
            .map(|(_, sequences)| sequences.iter().take(times).copied().collect());
    }

    if let Some(states) = unique_states_count {
        return (by_state.len() >= states).then(|| {
            by_state
                .iter()
                .take(states)
                .map(|(_, sequences)| sequences[0])
                .collect()
        });
    }

    (!by_state.is_empty()).then(|| {
        let mut all: Vec<u32> = by_state.into_iter().flat_map(|(_, sequences)| sequences).collect();
        all.sort_unstable();
        all
    })
}

/// Total reward if every result in `results` were applied.
#[must_use]
pub fn sum_rewards(results: &[ComboResult]) -> ComboReward {
    results.iter().fold(ComboReward::default(), |mut total, result| {
        total.ip += result.reward.ip;
        total.truth += result.reward.truth;
        total.next_attack_multiplier = total.next_attack_multiplier.max(result.reward.next_attack_multiplier);
        total
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Rarity};
    use crate::combos::ComboCategory;
    use crate::core::{PlayStage, PlayerState};
    use crate::geography::StateCatalog;

    use CardType::{Attack, Media, Zone};

    fn game(faction: Faction) -> GameState {
        GameState::new(
            PlayerState::new(PlayerId::P1, faction).with_ip(10),
            PlayerState::new(PlayerId::P2, faction.opposing()).with_ip(10),
            StateCatalog::standard().defense_table(),
            50,
        )
    }

    fn card(card_type: CardType, rarity: Rarity) -> Card {
        match card_type {
            Attack => Card::attack("a", "Strike", Faction::Truth, rarity, 2, 1),
            Media => Card::media("m", "Leak", Faction::Truth, rarity, 3, 1),
            Zone => Card::zone("z", "Rally", Faction::Truth, rarity, 4, 1),
        }
    }

    /// Append a play/resolve pair.
    fn play(state: &mut GameState, owner: PlayerId, card_type: CardType, cost: u32, target: Option<&str>) {
        play_rare(state, owner, card_type, Rarity::Common, cost, target);
    }

    fn play_rare(
        state: &mut GameState,
        owner: PlayerId,
        card_type: CardType,
        rarity: Rarity,
        cost: u32,
        target: Option<&str>,
    ) {
        let card = card(card_type, rarity);
        let target = target.map(StateId::new);
        for stage in [PlayStage::Play, PlayStage::Resolve] {
            let sequence = state.next_sequence();
            state
                .turn_plays
                .push_back(TurnPlay::new(sequence, stage, owner, &card, cost, target.as_ref()));
        }
    }

    fn only(definition: ComboDefinition) -> ComboEvaluator {
        ComboEvaluator::new(vec![definition]).with_settings(ComboSettings::default().with_max_combos(10))
    }

    fn ids(evaluation: &ComboEvaluation) -> Vec<&str> {
        evaluation.results.iter().map(|r| r.combo_id.as_str()).collect()
    }

    #[test]
    fn test_no_plays_no_combos() {
        let evaluation = ComboEvaluator::standard().evaluate(&game(Faction::Truth), PlayerId::P1);
        assert!(evaluation.is_empty());
        assert_eq!(evaluation.total_reward, ComboReward::default());
    }

    #[test]
    fn test_attack_blitz_grants_multiplier() {
        let mut state = game(Faction::Truth);
        for _ in 0..3 {
            play(&mut state, PlayerId::P1, Attack, 2, None);
        }

        let evaluator = ComboEvaluator::standard();
        let evaluation = evaluator.evaluate(&state, PlayerId::P1);

        assert_eq!(evaluation.results[0].combo_id, "sequence_attack_blitz");
        assert_eq!(evaluation.results[0].matched, vec![2, 4, 6]);
        assert_eq!(evaluation.total_reward.next_attack_multiplier, Some(2));
        assert_eq!(evaluation.logs[0], "Attack Blitz (Next attack x2)");

        let next = evaluator.apply_rewards(&state, PlayerId::P1, &evaluation);
        assert_eq!(next.player(PlayerId::P1).next_attack_multiplier, Some(2));
        assert!(next
            .log
            .contains(&"Attack Blitz primes your next strike for double damage.".to_string()));
    }

    #[test]
    fn test_opponent_plays_ignored() {
        let mut state = game(Faction::Truth);
        for _ in 0..3 {
            play(&mut state, PlayerId::P2, Media, 3, None);
        }

        assert!(ComboEvaluator::standard().evaluate(&state, PlayerId::P1).is_empty());
        assert!(!ComboEvaluator::standard().evaluate(&state, PlayerId::P2).is_empty());
    }

    #[test]
    fn test_max_combos_per_turn() {
        let mut state = game(Faction::Truth);
        for _ in 0..3 {
            play(&mut state, PlayerId::P1, Media, 3, None);
        }

        let evaluation = ComboEvaluator::standard().evaluate(&state, PlayerId::P1);
        assert_eq!(evaluation.results.len(), 2);
        // highest priority first
        assert_eq!(evaluation.results[0].combo_id, "sequence_media_wave");
    }

    #[test]
    fn test_disabled_settings() {
        let mut state = game(Faction::Truth);
        for _ in 0..3 {
            play(&mut state, PlayerId::P1, Media, 3, None);
        }

        let off = ComboSettings {
            enabled: false,
            ..ComboSettings::default()
        };
        assert!(ComboEvaluator::standard()
            .with_settings(off)
            .evaluate(&state, PlayerId::P1)
            .is_empty());

        let evaluation = ComboEvaluator::standard()
            .with_settings(ComboSettings::default().disable("sequence_media_wave"))
            .evaluate(&state, PlayerId::P1);
        assert!(!ids(&evaluation).contains(&"sequence_media_wave"));
    }

    #[test]
    fn test_disabled_by_default_needs_toggle() {
        let mut state = game(Faction::Truth);
        play(&mut state, PlayerId::P1, Attack, 2, None);
        let definition = ComboDefinition::new(
            "solo",
            "Solo",
            ComboCategory::Count,
            1,
            ComboTrigger::count(Some(Attack), 1),
            ComboReward::ip(1),
        )
        .disabled_by_default();

        assert!(only(definition.clone()).evaluate(&state, PlayerId::P1).is_empty());

        let toggled = only(definition).with_settings(ComboSettings::default().with_toggle("solo", true));
        assert_eq!(toggled.evaluate(&state, PlayerId::P1).results.len(), 1);
    }

    #[test]
    fn test_sequence_must_be_contiguous() {
        let mut state = game(Faction::Truth);
        play(&mut state, PlayerId::P1, Attack, 2, None);
        play(&mut state, PlayerId::P1, Zone, 4, Some("OH"));
        play(&mut state, PlayerId::P1, Media, 3, None);

        let plays: Vec<&TurnPlay> = state.turn_plays.iter().filter(|p| p.is_resolved()).collect();
        let metrics = TurnMetrics::measure(&plays);

        let strict = ComboTrigger::sequence(&[Attack, Media]);
        assert_eq!(match_trigger(&strict, &plays, &metrics), None);

        let gapped = ComboTrigger::Sequence {
            pattern: smallvec::smallvec![Attack, Media],
            allow_gaps: true,
        };
        assert_eq!(match_trigger(&gapped, &plays, &metrics), Some(vec![2, 6]));

        let empty = ComboTrigger::sequence(&[]);
        assert_eq!(match_trigger(&empty, &plays, &metrics), Some(Vec::new()));
    }

    #[test]
    fn test_count_with_rarity() {
        let mut state = game(Faction::Truth);
        play_rare(&mut state, PlayerId::P1, Attack, Rarity::Legendary, 5, None);
        play_rare(&mut state, PlayerId::P1, Media, Rarity::Rare, 5, None);

        let plays: Vec<&TurnPlay> = state.turn_plays.iter().filter(|p| p.is_resolved()).collect();
        let metrics = TurnMetrics::measure(&plays);

        assert!(match_trigger(&ComboTrigger::count_rarity(2, Rarity::Rare), &plays, &metrics).is_some());
        assert_eq!(
            match_trigger(&ComboTrigger::count_rarity(1, Rarity::Legendary), &plays, &metrics),
            Some(vec![2])
        );
        assert!(match_trigger(&ComboTrigger::count_rarity(2, Rarity::Legendary), &plays, &metrics).is_none());
    }

    #[test]
    fn test_metrics() {
        let mut state = game(Faction::Truth);
        play(&mut state, PlayerId::P1, Attack, 2, None);
        play(&mut state, PlayerId::P1, Zone, 6, Some("OH"));
        play(&mut state, PlayerId::P1, Zone, 4, Some("OH"));
        play(&mut state, PlayerId::P1, Zone, 4, Some("PA"));

        let plays: Vec<&TurnPlay> = state.turn_plays.iter().filter(|p| p.is_resolved()).collect();
        let metrics = TurnMetrics::measure(&plays);

        assert_eq!(metrics.ip_spent, 16);
        assert_eq!(metrics.attack_spent, 2);
        assert_eq!(metrics.zone_spent, 14);
        assert_eq!(metrics.unique_states_targeted, 2);
        assert_eq!(metrics.plays, 4);
        assert_eq!(metrics.low_cost, 1);
        assert_eq!(metrics.high_cost, 1);
    }

    #[test]
    fn test_state_triggers() {
        let mut state = game(Faction::Truth);
        play(&mut state, PlayerId::P1, Zone, 4, Some("CA"));
        play(&mut state, PlayerId::P1, Zone, 4, Some("TX"));
        play(&mut state, PlayerId::P1, Zone, 4, Some("CA"));

        let plays: Vec<&TurnPlay> = state.turn_plays.iter().filter(|p| p.is_resolved()).collect();
        let metrics = TurnMetrics::measure(&plays);

        let double = ComboTrigger::same_state(Some(Zone), &[], 2);
        assert_eq!(match_trigger(&double, &plays, &metrics), Some(vec![2, 6]));

        let border = ComboTrigger::unique_states(Some(Zone), &["CA", "AZ", "NM", "TX"], 2);
        assert_eq!(match_trigger(&border, &plays, &metrics), Some(vec![2, 4]));

        let capital = ComboTrigger::same_state(Some(Zone), &["DC"], 1);
        assert_eq!(match_trigger(&capital, &plays, &metrics), None);
    }

    #[test]
    fn test_hybrid_modes() {
        let mut state = game(Faction::Truth);
        play(&mut state, PlayerId::P1, Attack, 3, None);
        play(&mut state, PlayerId::P1, Zone, 4, Some("OH"));

        let plays: Vec<&TurnPlay> = state.turn_plays.iter().filter(|p| p.is_resolved()).collect();
        let metrics = TurnMetrics::measure(&plays);

        let parts = vec![
            ComboTrigger::sequence(&[Attack, Zone]),
            ComboTrigger::threshold(ThresholdMetric::AttackSpent, 6),
        ];
        assert_eq!(match_trigger(&ComboTrigger::all(parts.clone()), &plays, &metrics), None);
        assert_eq!(match_trigger(&ComboTrigger::any(parts), &plays, &metrics), Some(vec![2, 4]));
    }

    #[test]
    fn test_cap_limits_reward() {
        let mut state = game(Faction::Truth);
        for _ in 0..3 {
            play(&mut state, PlayerId::P1, Attack, 2, None);
        }

        let evaluator = ComboEvaluator::standard()
            .with_settings(ComboSettings::default().disable("sequence_attack_blitz"));
        let evaluation = evaluator.evaluate(&state, PlayerId::P1);

        let barrage = evaluation
            .results
            .iter()
            .find(|r| r.combo_id == "count_attack_barrage")
            .unwrap();
        assert_eq!(barrage.reward.ip, 4);
    }

    #[test]
    fn test_government_truth_reward_pushes_down() {
        let mut state = game(Faction::Government);
        for _ in 0..3 {
            play(&mut state, PlayerId::P1, Media, 3, None);
        }

        let evaluator = ComboEvaluator::standard();
        let evaluation = evaluator.evaluate(&state, PlayerId::P1);
        assert!(evaluation.total_reward.truth > 0);

        let next = evaluator.apply_rewards(&state, PlayerId::P1, &evaluation);
        assert_eq!(next.truth, 50 - evaluation.total_reward.truth);
        assert_eq!(state.truth, 50);
    }

    #[test]
    fn test_multiplier_does_not_stack() {
        let mut state = game(Faction::Truth);
        for _ in 0..3 {
            play(&mut state, PlayerId::P1, Attack, 2, None);
        }

        let evaluator = ComboEvaluator::standard();
        let evaluation = evaluator.evaluate(&state, PlayerId::P1);
        let once = evaluator.apply_rewards(&state, PlayerId::P1, &evaluation);
        let twice = evaluator.apply_rewards(&once, PlayerId::P1, &evaluation);

        assert_eq!(twice.player(PlayerId::P1).next_attack_multiplier, Some(2));
    }

    #[test]
    fn test_sum_rewards_matches_total() {
        let mut state = game(Faction::Truth);
        play(&mut state, PlayerId::P1, Attack, 2, None);
        play(&mut state, PlayerId::P1, Media, 3, None);
        play(&mut state, PlayerId::P1, Zone, 4, Some("OH"));

        let evaluation = ComboEvaluator::standard().evaluate(&state, PlayerId::P1);
        assert_eq!(sum_rewards(&evaluation.results), evaluation.total_reward);
    }
}
