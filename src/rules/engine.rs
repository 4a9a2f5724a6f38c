//! The turn engine: the mechanical contract a human or AI actor drives.
//!
//! Every operation borrows the current `GameState` and returns the next one.
//! Nothing is mutated in place, so a failed `play_card` leaves the caller's
//! state exactly as it was.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::income::{compute_income, IncomeBreakdown};
use super::victory::{check_victory, Victory};
use crate::cards::{Card, CardId, CardType, DeckFactory, WeightedDeckFactory};
use crate::combos::{ComboEvaluation, ComboEvaluator};
use crate::core::error::{EngineError, EngineResult, PlayBlock};
use crate::core::{GameRng, GameState, PlayStage, PlayerId, RulesConfig, TurnPlay};
use crate::draw::{refill_hand, DrawStacks};
use crate::effects::{track_truth_swing, EffectResolver, Resolution};
use crate::geography::{Geography, StateId};

/// One playable option: a card from hand and, for ZONE cards, its target.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LegalPlay {
    pub card_id: CardId,
    pub target: Option<StateId>,
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `can_play` is pure and reports the first failing check
/// - `play_card` re-validates and never trusts a prior `can_play`
/// - `end_turn` clears the finishing side's bonus plays and passes control;
///   the next side calls `start_turn`
/// - targets are only meaningful for ZONE cards and are ignored otherwise
/// - `win_check` returns at most one winner
pub trait RulesEngine {
    /// Income, owed bonus plays, hand refill and counter reset for the current player.
    fn start_turn(&self, state: &GameState, rng: &mut GameRng) -> GameState;

    /// Can the current player play `card` at `target` right now?
    fn can_play(&self, state: &GameState, card: &Card, target: Option<&StateId>) -> Result<(), PlayBlock>;

    /// Play a card from the current player's hand.
    fn play_card(
        &self,
        state: &GameState,
        card_id: &CardId,
        target: Option<&StateId>,
        rng: &mut GameRng,
    ) -> EngineResult<GameState>;

    /// Pass control to the other side.
    fn end_turn(&self, state: &GameState) -> GameState;

    /// Has someone won?
    fn win_check(&self, state: &GameState) -> Option<Victory>;

    // === Convenience Methods ===

    /// Every play `can_play` accepts for the current player.
    ///
    /// ZONE cards are offered once per known state. Duplicate copies of a
    /// card in hand are listed once.
    fn legal_plays(&self, state: &GameState) -> Vec<LegalPlay> {
        let mut seen = FxHashSet::default();
        let mut plays = Vec::new();

        for card in state.current().hand.iter() {
            if !seen.insert(card.id.clone()) {
                continue;
            }
            if card.card_type() == CardType::Zone {
                for target in state.state_defense.keys() {
                    if self.can_play(state, card, Some(target)).is_ok() {
                        plays.push(LegalPlay {
                            card_id: card.id.clone(),
                            target: Some(target.clone()),
                        });
                    }
                }
            } else if self.can_play(state, card, None).is_ok() {
                plays.push(LegalPlay {
                    card_id: card.id.clone(),
                    target: None,
                });
            }
        }

        plays
    }
}

/// What `TurnEngine::finish_turn` did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnSummary {
    /// The player whose turn ended.
    pub player: PlayerId,
    /// State after rewards and the hand-over.
    pub state: GameState,
    pub combos: ComboEvaluation,
    /// States captured by the player this turn, in play order.
    pub captures: Vec<StateId>,
    pub victory: Option<Victory>,
}

/// The base ruleset.
///
/// Owns the configuration, the geography catalogs and the fallback deck
/// factory; holds no per-game data, so one engine can drive any number of
/// games.
#[derive(Clone, Debug)]
pub struct TurnEngine<F = WeightedDeckFactory> {
    config: RulesConfig,
    geography: Geography,
    factory: F,
}

impl TurnEngine<WeightedDeckFactory> {
    /// Default rules, standard map, core-set fallback decks.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(RulesConfig::default(), Geography::standard(), WeightedDeckFactory::default())
    }
}

impl Default for TurnEngine<WeightedDeckFactory> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<F: DeckFactory> TurnEngine<F> {
    #[must_use]
    pub fn new(config: RulesConfig, geography: Geography, factory: F) -> Self {
        Self {
            config,
            geography,
            factory,
        }
    }

    /// Replace the configuration (builder pattern).
    #[must_use]
    pub fn with_config(mut self, config: RulesConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    #[must_use]
    pub fn geography(&self) -> &Geography {
        &self.geography
    }

    #[must_use]
    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Cost `player` pays for `card`: printed cost plus the player's type
    /// modifier plus, for MEDIA, the combination modifier. Never negative.
    #[must_use]
    pub fn effective_cost(&self, state: &GameState, player: PlayerId, card: &Card) -> u32 {
        let seat = state.player(player);
        let mut cost = i64::from(card.cost) + i64::from(seat.cost_modifier(card.card_type()));
        if card.card_type() == CardType::Media {
            cost += i64::from(self.geography.summary_for(state, player).media_cost_modifier);
        }
        u32::try_from(cost.max(0)).unwrap_or(u32::MAX)
    }

    /// Income the current player would receive from `start_turn`.
    #[must_use]
    pub fn compute_income(&self, state: &GameState, player: PlayerId) -> IncomeBreakdown {
        compute_income(state, player, &self.config, &self.geography)
    }

    /// Move a card from the current player's hand to their discard pile.
    ///
    /// The first discard of a turn is free; later ones cost `discard_cost`
    /// unless `free` is set. Returns the new state and the IP actually paid.
    pub fn discard_from_hand(&self, state: &GameState, card_id: &CardId, free: bool) -> EngineResult<(GameState, u32)> {
        let actor = state.current_player;
        let position = state
            .current()
            .hand_position(card_id)
            .ok_or_else(|| EngineError::CardNotInHand(card_id.clone()))?;

        let mut next = state.clone();
        let fee = if free || next.discards_this_turn == 0 {
            0
        } else {
            self.config.discard_cost
        };

        let seat = next.player_mut(actor);
        let card = seat.hand.remove(position);
        let paid = seat.spend_ip(fee);
        let name = card.name.clone();
        seat.discard.push_back(card);
        next.discards_this_turn += 1;

        if paid > 0 {
            next.push_log(format!("{actor} discarded {name} (paid {paid} IP)"));
        } else {
            next.push_log(format!("{actor} discarded {name}"));
        }
        debug!(player = %actor, card = %card_id, paid, "card discarded");

        Ok((next, paid))
    }

    /// Close the current player's turn: grant combos, check for a winner,
    /// then pass control.
    #[must_use]
    pub fn finish_turn(&self, state: &GameState, combos: &ComboEvaluator) -> TurnSummary {
        let actor = state.current_player;
        let evaluation = combos.evaluate(state, actor);
        let mut next = combos.apply_rewards(state, actor, &evaluation);
        if !evaluation.is_empty() {
            next.push_log(format!("Combos triggered: {}", evaluation.logs.join("; ")));
        }

        let captures = state
            .turn_plays
            .iter()
            .filter(|play| play.is_resolved() && play.owner == actor)
            .filter_map(|play| play.captured.clone())
            .collect();

        let victory = self.win_check(&next);
        if let Some(victory) = victory {
            next.push_log(format!("{} wins by {}", victory.winner, victory.reason));
        }

        TurnSummary {
            player: actor,
            state: self.end_turn(&next),
            combos: evaluation,
            captures,
            victory,
        }
    }
}

impl<F: DeckFactory> RulesEngine for TurnEngine<F> {
    fn start_turn(&self, state: &GameState, rng: &mut GameRng) -> GameState {
        let mut next = state.clone();
        let actor = next.current_player;

        let income = self.compute_income(&next, actor);
        let reserves = next.player(actor).ip;
        for line in income.log_lines(actor, reserves) {
            next.push_log(line);
        }

        let owed = next.frenzy.bonus_play_for == Some(actor);
        if owed {
            next.frenzy.bonus_play_for = None;
            next.push_log(format!("{actor} gains a bonus play this turn"));
        }

        let seat = next.player_mut(actor);
        seat.gain_ip(income.net);
        if owed {
            seat.bonus_plays += 1;
        }
        let faction = seat.faction;
        let outcome = refill_hand(
            DrawStacks::of(seat),
            faction,
            self.config.hand_limit,
            self.config.refill_deck_size,
            &self.factory,
            rng,
        );
        outcome.apply_to(seat);
        for line in outcome.log_lines(self.config.hand_limit) {
            next.push_log(line);
        }

        next.plays_this_turn = 0;
        next.discards_this_turn = 0;
        next.turn_plays.clear();

        info!(
            player = %actor,
            turn = next.turn,
            income = income.net,
            ip = next.player(actor).ip,
            drawn = outcome.drawn.len(),
            "turn started"
        );
        next
    }

    fn can_play(&self, state: &GameState, card: &Card, target: Option<&StateId>) -> Result<(), PlayBlock> {
        let player = state.current();
        let limit = self.config.max_plays_per_turn.saturating_add(player.bonus_plays);
        if state.plays_this_turn >= limit {
            return Err(PlayBlock::PlayLimit);
        }
        if self.effective_cost(state, state.current_player, card) > player.ip {
            return Err(PlayBlock::InsufficientIp);
        }
        if card.card_type() == CardType::Zone && target.map_or(true, |t| t.as_str().is_empty()) {
            return Err(PlayBlock::MissingTarget);
        }
        Ok(())
    }

    fn play_card(
        &self,
        state: &GameState,
        card_id: &CardId,
        target: Option<&StateId>,
        rng: &mut GameRng,
    ) -> EngineResult<GameState> {
        let actor = state.current_player;
        let position = state
            .current()
            .hand_position(card_id)
            .ok_or_else(|| EngineError::CardNotInHand(card_id.clone()))?;
        let card = state.current().hand[position].clone();

        self.can_play(state, &card, target).map_err(EngineError::PlayRejected)?;
        let target = target.filter(|_| card.card_type() == CardType::Zone);
        if let Some(target) = target {
            if !state.state_defense.contains_key(target) {
                return Err(EngineError::UnknownState(target.clone()));
            }
        }

        let cost = self.effective_cost(state, actor, &card);
        let mut next = state.clone();
        let seat = next.player_mut(actor);
        seat.hand.remove(position);
        seat.spend_ip(cost);

        let sequence = next.next_sequence();
        next.turn_plays
            .push_back(TurnPlay::new(sequence, PlayStage::Play, actor, &card, cost, target));

        let resolution = EffectResolver::new(&self.geography.combinations).resolve(&mut next, actor, &card, target, rng)?;
        if let Resolution::Media { .. } = resolution {
            track_truth_swing(&mut next, &self.config.momentum);
        }

        let sequence = next.next_sequence();
        next.turn_plays.push_back(
            TurnPlay::new(sequence, PlayStage::Resolve, actor, &card, cost, target)
                .with_capture(resolution.captured().cloned()),
        );
        next.push_log(format!("{actor} played {}", card.name));
        next.player_mut(actor).discard.push_back(card);
        next.plays_this_turn += 1;

        info!(player = %actor, card = %card_id, cost, plays = next.plays_this_turn, "card played");
        Ok(next)
    }

    fn end_turn(&self, state: &GameState) -> GameState {
        let mut next = state.clone();
        next.player_mut(state.current_player).bonus_plays = 0;
        next.current_player = state.current_player.opponent();
        if next.current_player == PlayerId::P1 {
            next.turn += 1;
        }
        debug!(player = %next.current_player, turn = next.turn, "control passed");
        next
    }

    fn win_check(&self, state: &GameState) -> Option<Victory> {
        let victory = check_victory(state, &self.config.win);
        if let Some(victory) = victory {
            info!(winner = %victory.winner, reason = %victory.reason, "victory");
        }
        victory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardRegistry, Rarity};
    use crate::core::{Faction, PlayerState};
    use crate::rules::VictoryReason;

    fn engine() -> TurnEngine {
        TurnEngine::new(
            RulesConfig::default(),
            Geography::standard(),
            WeightedDeckFactory::new(CardRegistry::new()),
        )
    }

    fn game(hand: Vec<Card>, ip: u32) -> GameState {
        GameState::new(
            PlayerState::new(PlayerId::P1, Faction::Truth).with_ip(ip).with_hand(hand),
            PlayerState::new(PlayerId::P2, Faction::Government).with_ip(10),
            Geography::standard().states.defense_table(),
            50,
        )
    }

    fn attack(id: &str, cost: u32, damage: i32) -> Card {
        Card::attack(id, "Leak", Faction::Truth, Rarity::Common, cost, damage)
    }

    fn media(id: &str, cost: u32, delta: i32) -> Card {
        Card::media(id, "Broadcast", Faction::Truth, Rarity::Common, cost, delta)
    }

    fn zone(id: &str, cost: u32, pressure: i32) -> Card {
        Card::zone(id, "Rally", Faction::Truth, Rarity::Common, cost, pressure)
    }

    #[test]
    fn test_play_attack_card() {
        let engine = engine();
        let state = game(vec![attack("a1", 3, 2)], 5);

        let next = engine
            .play_card(&state, &CardId::new("a1"), None, &mut GameRng::new(0))
            .unwrap();

        assert_eq!(next.player(PlayerId::P2).ip, 8);
        assert_eq!(next.player(PlayerId::P1).ip, 2);
        assert!(next.player(PlayerId::P1).hand.is_empty());
        assert_eq!(next.player(PlayerId::P1).discard.len(), 1);
        assert_eq!(next.plays_this_turn, 1);

        let stages: Vec<_> = next.turn_plays.iter().map(|p| (p.sequence, p.stage)).collect();
        assert_eq!(stages, vec![(1, PlayStage::Play), (2, PlayStage::Resolve)]);

        // input untouched
        assert_eq!(state.player(PlayerId::P2).ip, 10);
        assert_eq!(state.player(PlayerId::P1).hand.len(), 1);
    }

    #[test]
    fn test_can_play_check_order() {
        let engine = engine();
        let card = zone("z1", 9, 1);
        let mut state = game(vec![card.clone()], 5);

        assert_eq!(engine.can_play(&state, &card, None), Err(PlayBlock::InsufficientIp));

        state.plays_this_turn = 3;
        assert_eq!(engine.can_play(&state, &card, None), Err(PlayBlock::PlayLimit));

        state.plays_this_turn = 0;
        state.player_mut(PlayerId::P1).ip = 9;
        assert_eq!(engine.can_play(&state, &card, None), Err(PlayBlock::MissingTarget));
        assert_eq!(engine.can_play(&state, &card, Some(&StateId::new("OH"))), Ok(()));
    }

    #[test]
    fn test_bonus_plays_raise_limit() {
        let engine = engine();
        let card = attack("a1", 1, 1);
        let mut state = game(vec![card.clone()], 5);
        state.plays_this_turn = 3;
        state.player_mut(PlayerId::P1).bonus_plays = 1;

        assert_eq!(engine.can_play(&state, &card, None), Ok(()));
    }

    #[test]
    fn test_play_card_errors() {
        let engine = engine();
        let mut rng = GameRng::new(0);
        let state = game(vec![zone("z1", 4, 1), attack("a1", 9, 1)], 5);

        assert_eq!(
            engine.play_card(&state, &CardId::new("nope"), None, &mut rng),
            Err(EngineError::CardNotInHand(CardId::new("nope")))
        );
        assert_eq!(
            engine.play_card(&state, &CardId::new("a1"), None, &mut rng),
            Err(EngineError::PlayRejected(PlayBlock::InsufficientIp))
        );
        assert_eq!(
            engine.play_card(&state, &CardId::new("z1"), None, &mut rng),
            Err(EngineError::PlayRejected(PlayBlock::MissingTarget))
        );
        assert_eq!(
            engine.play_card(&state, &CardId::new("z1"), Some(&StateId::new("ZZ")), &mut rng),
            Err(EngineError::UnknownState(StateId::new("ZZ")))
        );
    }

    #[test]
    fn test_zone_capture_recorded_on_resolve_entry() {
        let engine = engine();
        let fl = StateId::new("FL");
        let state = game(vec![zone("z1", 4, 2)], 5);

        let next = engine
            .play_card(&state, &CardId::new("z1"), Some(&fl), &mut GameRng::new(0))
            .unwrap();

        assert!(next.player(PlayerId::P1).states.contains(&fl));
        let resolve = next.turn_plays.last().unwrap();
        assert_eq!(resolve.stage, PlayStage::Resolve);
        assert_eq!(resolve.captured, Some(fl.clone()));
        assert_eq!(next.turn_plays[0].captured, None);
    }

    #[test]
    fn test_effective_cost_modifiers() {
        let engine = engine();
        let card = media("m1", 3, 2);
        let mut state = game(vec![card.clone()], 5);

        assert_eq!(engine.effective_cost(&state, PlayerId::P1, &card), 3);

        // Silicon Valley Network: MEDIA -1
        for id in ["CA", "WA", "OR"] {
            state.player_mut(PlayerId::P1).states.insert(StateId::new(id));
        }
        assert_eq!(engine.effective_cost(&state, PlayerId::P1, &card), 2);

        state.player_mut(PlayerId::P1).cost_modifiers.insert(CardType::Media, -5);
        assert_eq!(engine.effective_cost(&state, PlayerId::P1, &card), 0);
    }

    #[test]
    fn test_play_pays_effective_cost() {
        let engine = engine();
        let mut state = game(vec![attack("a1", 3, 1)], 5);
        state.player_mut(PlayerId::P1).cost_modifiers.insert(CardType::Attack, 1);

        let next = engine
            .play_card(&state, &CardId::new("a1"), None, &mut GameRng::new(0))
            .unwrap();

        assert_eq!(next.player(PlayerId::P1).ip, 1);
        assert_eq!(next.turn_plays[0].cost, 4);
    }

    #[test]
    fn test_discard_economy() {
        let engine = engine();
        let state = game(vec![attack("a1", 1, 1), attack("a2", 1, 1), attack("a3", 1, 1)], 5);

        let (state, paid) = engine.discard_from_hand(&state, &CardId::new("a1"), false).unwrap();
        assert_eq!(paid, 0);

        let (state, paid) = engine.discard_from_hand(&state, &CardId::new("a2"), false).unwrap();
        assert_eq!(paid, 1);
        assert_eq!(state.player(PlayerId::P1).ip, 4);

        let (state, paid) = engine.discard_from_hand(&state, &CardId::new("a3"), true).unwrap();
        assert_eq!(paid, 0);
        assert_eq!(state.discards_this_turn, 3);
        assert_eq!(state.player(PlayerId::P1).discard.len(), 3);

        assert!(matches!(
            engine.discard_from_hand(&state, &CardId::new("a1"), false),
            Err(EngineError::CardNotInHand(_))
        ));
    }

    #[test]
    fn test_start_turn() {
        let engine = engine();
        let deck: Vec<Card> = (0..8).map(|i| attack(&format!("d{i}"), 1, 1)).collect();
        let mut state = game(Vec::new(), 5);
        state.player_mut(PlayerId::P1).deck = deck.into_iter().collect();
        state.plays_this_turn = 2;
        state.discards_this_turn = 1;
        state.turn_plays.push_back(TurnPlay::new(
            1,
            PlayStage::Play,
            PlayerId::P1,
            &attack("x", 1, 1),
            1,
            None,
        ));

        let next = engine.start_turn(&state, &mut GameRng::new(0));

        let me = next.player(PlayerId::P1);
        assert_eq!(me.ip, 10);
        assert_eq!(me.hand.len(), 5);
        assert_eq!(me.deck.len(), 3);
        assert_eq!(next.plays_this_turn, 0);
        assert_eq!(next.discards_this_turn, 0);
        assert!(next.turn_plays.is_empty());
        assert_eq!(next.player(PlayerId::P2), state.player(PlayerId::P2));
    }

    #[test]
    fn test_bonus_play_kept_until_used() {
        let engine = engine();
        let card = attack("a1", 1, 1);
        let mut state = engine.end_turn(&game(vec![card.clone()], 5));
        state.player_mut(PlayerId::P1).bonus_plays = 1;

        let state = engine.end_turn(&state);
        let mut state = engine.start_turn(&state, &mut GameRng::new(0));
        assert_eq!(state.player(PlayerId::P1).bonus_plays, 1);

        state.plays_this_turn = 3;
        assert_eq!(engine.can_play(&state, &card, None), Ok(()));

        let after = engine.end_turn(&state);
        assert_eq!(after.player(PlayerId::P1).bonus_plays, 0);
    }

    #[test]
    fn test_media_swing_grants_bonus_play_next_turn() {
        let engine = engine();
        let mut rng = GameRng::new(0);
        let jab = attack("a1", 1, 1);
        let state = game(vec![media("m1", 1, 10), jab.clone()], 5);

        let mut state = engine.play_card(&state, &CardId::new("m1"), None, &mut rng).unwrap();
        assert_eq!(state.truth, 60);
        assert_eq!(state.frenzy.value, 60);
        assert_eq!(state.frenzy.bonus_play_for, Some(PlayerId::P1));
        assert_eq!(state.player(PlayerId::P1).bonus_plays, 0);
        state.plays_this_turn = 3;
        assert_eq!(engine.can_play(&state, &jab, None), Err(PlayBlock::PlayLimit));

        let state = engine.end_turn(&state);
        let state = engine.start_turn(&state, &mut rng);
        assert_eq!(state.player(PlayerId::P2).bonus_plays, 0);
        let state = engine.end_turn(&state);

        let mut state = engine.start_turn(&state, &mut rng);
        assert_eq!(state.player(PlayerId::P1).bonus_plays, 1);
        assert_eq!(state.frenzy.bonus_play_for, None);
        state.plays_this_turn = 3;
        assert_eq!(engine.can_play(&state, &jab, None), Ok(()));
        let state = engine.play_card(&state, &CardId::new("a1"), None, &mut rng).unwrap();
        assert_eq!(state.plays_this_turn, 4);
    }

    #[test]
    fn test_target_ignored_for_non_zone_cards() {
        let engine = engine();
        let card = attack("a1", 1, 1);
        let state = game(vec![card.clone()], 5);

        for target in ["", "ZZ"] {
            let target = StateId::new(target);
            assert_eq!(engine.can_play(&state, &card, Some(&target)), Ok(()));

            let next = engine
                .play_card(&state, &CardId::new("a1"), Some(&target), &mut GameRng::new(0))
                .unwrap();
            assert_eq!(next.player(PlayerId::P2).ip, 9);
            assert!(next.turn_plays.iter().all(|p| p.target_state_id.is_none()));
        }
    }

    #[test]
    fn test_start_turn_short_hand_is_logged() {
        let engine = engine();
        let state = game(Vec::new(), 5);

        let next = engine.start_turn(&state, &mut GameRng::new(0));

        assert!(next.player(PlayerId::P1).hand.is_empty());
        assert!(next
            .log
            .iter()
            .any(|line| line == "Deck exhausted: unable to draw enough cards for new turn"));
    }

    #[test]
    fn test_end_turn_wraps() {
        let engine = engine();
        let state = game(Vec::new(), 5);

        let after_p1 = engine.end_turn(&state);
        assert_eq!(after_p1.current_player, PlayerId::P2);
        assert_eq!(after_p1.turn, 1);

        let after_p2 = engine.end_turn(&after_p1);
        assert_eq!(after_p2.current_player, PlayerId::P1);
        assert_eq!(after_p2.turn, 2);
    }

    #[test]
    fn test_legal_plays() {
        let engine = engine();
        let state = game(vec![attack("a1", 1, 1), attack("a1", 1, 1), zone("z1", 4, 1), attack("big", 9, 1)], 5);

        let plays = engine.legal_plays(&state);

        let attacks = plays.iter().filter(|p| p.card_id == CardId::new("a1")).count();
        let zones = plays.iter().filter(|p| p.card_id == CardId::new("z1")).count();
        assert_eq!(attacks, 1);
        assert_eq!(zones, state.state_defense.len());
        assert!(plays.iter().all(|p| p.card_id != CardId::new("big")));
    }

    #[test]
    fn test_finish_turn() {
        let engine = engine();
        let hand = vec![media("m1", 1, 2), media("m2", 1, 2), media("m3", 1, 2)];
        let mut state = game(hand, 10);
        let mut rng = GameRng::new(0);
        for id in ["m1", "m2", "m3"] {
            state = engine.play_card(&state, &CardId::new(id), None, &mut rng).unwrap();
        }
        assert_eq!(state.truth, 56);

        let summary = engine.finish_turn(&state, &ComboEvaluator::standard());

        assert_eq!(summary.player, PlayerId::P1);
        assert_eq!(summary.combos.results[0].combo_id, "sequence_media_wave");
        assert!(summary.state.truth > 56);
        assert_eq!(summary.state.current_player, PlayerId::P2);
        assert!(summary.captures.is_empty());
        assert_eq!(summary.victory, None);
    }

    #[test]
    fn test_finish_turn_reports_victory() {
        let engine = engine();
        let mut state = game(vec![media("m1", 1, 5)], 10);
        state.truth = 92;
        let state = engine
            .play_card(&state, &CardId::new("m1"), None, &mut GameRng::new(0))
            .unwrap();

        let summary = engine.finish_turn(&state, &ComboEvaluator::standard());

        assert_eq!(summary.victory.map(|v| v.reason), Some(VictoryReason::Truth));
        assert_eq!(summary.victory.map(|v| v.winner), Some(PlayerId::P1));
    }
}
