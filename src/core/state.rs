//! Game state: the aggregate threaded through every engine call.
//!
//! ## PlayerState
//!
//! One side of the table: faction, card piles, IP reserve, owned states and
//! transient combo buffs. A card is in exactly one of deck, hand or discard.
//!
//! ## GameState
//!
//! Turn counter, active seat, the global Truth meter, both players, the
//! per-state pressure and defense tables, and the current turn's play log.
//!
//! All collections are `im` persistent structures, so cloning a state to
//! build the next one is O(1). Engine operations never mutate their input;
//! they clone, modify the clone and hand it back.

use im::{OrdMap, OrdSet, Vector};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::error::{EngineError, EngineResult};
use super::player::{Faction, PlayerId, PlayerMap};
use super::turn_play::TurnPlay;
use crate::cards::{Card, CardId, CardType};
use crate::geography::StateId;

/// Lowest value of the Truth meter.
pub const TRUTH_MIN: i32 = 0;
/// Highest value of the Truth meter.
pub const TRUTH_MAX: i32 = 100;

/// Per-side record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub id: PlayerId,
    pub faction: Faction,
    /// Draw pile; the front is the next draw.
    pub deck: Vector<Card>,
    pub hand: Vector<Card>,
    /// Discard pile; the most recent card is last.
    pub discard: Vector<Card>,
    pub ip: u32,
    /// Owned state ids.
    pub states: OrdSet<StateId>,
    /// Pending ATTACK multiplier granted by a combo, consumed by the next ATTACK.
    pub next_attack_multiplier: Option<u32>,
    /// Persistent per-type cost adjustments.
    pub cost_modifiers: OrdMap<CardType, i32>,
    /// Extra plays allowed this turn. Cleared when the player's turn ends.
    pub bonus_plays: u32,
}

impl PlayerState {
    /// Create an empty player record.
    #[must_use]
    pub fn new(id: PlayerId, faction: Faction) -> Self {
        Self {
            id,
            faction,
            deck: Vector::new(),
            hand: Vector::new(),
            discard: Vector::new(),
            ip: 0,
            states: OrdSet::new(),
            next_attack_multiplier: None,
            cost_modifiers: OrdMap::new(),
            bonus_plays: 0,
        }
    }

    /// Set the IP reserve (builder pattern).
    #[must_use]
    pub fn with_ip(mut self, ip: u32) -> Self {
        self.ip = ip;
        self
    }

    /// Replace the deck (builder pattern).
    #[must_use]
    pub fn with_deck(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.deck = cards.into_iter().collect();
        self
    }

    /// Replace the hand (builder pattern).
    #[must_use]
    pub fn with_hand(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.hand = cards.into_iter().collect();
        self
    }

    /// Replace the discard pile (builder pattern).
    #[must_use]
    pub fn with_discard(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.discard = cards.into_iter().collect();
        self
    }

    /// Grant ownership of states (builder pattern).
    #[must_use]
    pub fn with_states<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<StateId>,
    {
        self.states.extend(states.into_iter().map(Into::into));
        self
    }

    /// Set a persistent cost modifier for a card type (builder pattern).
    #[must_use]
    pub fn with_cost_modifier(mut self, card_type: CardType, delta: i32) -> Self {
        self.cost_modifiers.insert(card_type, delta);
        self
    }

    /// Position of a card in hand.
    #[must_use]
    pub fn hand_position(&self, card_id: &CardId) -> Option<usize> {
        self.hand.iter().position(|card| &card.id == card_id)
    }

    /// Find a card in hand by id.
    #[must_use]
    pub fn hand_card(&self, card_id: &CardId) -> Option<&Card> {
        self.hand.iter().find(|card| &card.id == card_id)
    }

    /// Cards across deck, hand and discard.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.deck.len() + self.hand.len() + self.discard.len()
    }

    /// Deduct IP, saturating at zero. Returns the amount actually removed.
    pub fn spend_ip(&mut self, amount: u32) -> u32 {
        let spent = amount.min(self.ip);
        self.ip -= spent;
        spent
    }

    /// Add IP.
    pub fn gain_ip(&mut self, amount: u32) {
        self.ip = self.ip.saturating_add(amount);
    }

    /// Cost modifier stored for a card type.
    #[must_use]
    pub fn cost_modifier(&self, card_type: CardType) -> i32 {
        self.cost_modifiers.get(&card_type).copied().unwrap_or(0)
    }
}

/// Public Frenzy meter, moved by large swings of the Truth meter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicFrenzy {
    /// Meter value in `[0, 100]`.
    pub value: i32,
    /// Truth value at the last MEDIA resolution.
    pub last_truth_sample: i32,
    /// Seat owed one extra play, paid out by its next `start_turn`.
    pub bonus_play_for: Option<PlayerId>,
}

impl PublicFrenzy {
    /// Starting meter value.
    pub const START: i32 = 50;

    #[must_use]
    pub fn new(truth: i32) -> Self {
        Self {
            value: Self::START,
            last_truth_sample: truth,
            bonus_play_for: None,
        }
    }
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Round counter, starting at 1. Advances when control returns to P1.
    pub turn: u32,
    pub current_player: PlayerId,
    /// Global Truth meter, always within `[TRUTH_MIN, TRUTH_MAX]`.
    pub truth: i32,
    pub players: PlayerMap<PlayerState>,
    /// Accumulated pressure per contested state and side.
    pub pressure_by_state: OrdMap<StateId, PlayerMap<i32>>,
    /// Capture threshold per state.
    pub state_defense: OrdMap<StateId, i32>,
    pub plays_this_turn: u32,
    pub discards_this_turn: u32,
    pub frenzy: PublicFrenzy,
    /// Plays made in the current turn.
    pub turn_plays: Vector<TurnPlay>,
    /// Human-readable trace. Never read by the rules.
    pub log: Vector<String>,
}

impl GameState {
    /// Create a state at turn 1 with P1 to act.
    ///
    /// Every state in `defense` starts with zero pressure for both sides.
    #[must_use]
    pub fn new(p1: PlayerState, p2: PlayerState, defense: OrdMap<StateId, i32>, truth: i32) -> Self {
        let pressure_by_state = defense
            .keys()
            .map(|id| (id.clone(), PlayerMap::with_value(0)))
            .collect();
        let truth = truth.clamp(TRUTH_MIN, TRUTH_MAX);

        Self {
            turn: 1,
            current_player: PlayerId::P1,
            truth,
            players: PlayerMap::from_parts(p1, p2),
            pressure_by_state,
            state_defense: defense,
            plays_this_turn: 0,
            discards_this_turn: 0,
            frenzy: PublicFrenzy::new(truth),
            turn_plays: Vector::new(),
            log: Vector::new(),
        }
    }

    /// Get a player's record.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &PlayerState {
        &self.players[id]
    }

    /// Get a mutable player record.
    pub fn player_mut(&mut self, id: PlayerId) -> &mut PlayerState {
        &mut self.players[id]
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current(&self) -> &PlayerState {
        &self.players[self.current_player]
    }

    /// The seat playing a faction, if either does.
    #[must_use]
    pub fn seat_of(&self, faction: Faction) -> Option<PlayerId> {
        self.players
            .iter()
            .find(|(_, player)| player.faction == faction)
            .map(|(id, _)| id)
    }

    /// Move the Truth meter by `delta`, clamped to the valid range.
    /// Returns the change actually applied.
    pub fn shift_truth(&mut self, delta: i32) -> i32 {
        let before = self.truth;
        self.truth = before.saturating_add(delta).clamp(TRUTH_MIN, TRUTH_MAX);
        self.truth - before
    }

    /// Append a line to the trace log.
    pub fn push_log(&mut self, line: impl Into<String>) {
        self.log.push_back(line.into());
    }

    /// Who owns a state, if anyone.
    #[must_use]
    pub fn owner_of(&self, state_id: &StateId) -> Option<PlayerId> {
        PlayerId::all().find(|&id| self.players[id].states.contains(state_id))
    }

    /// States owned by neither side.
    #[must_use]
    pub fn neutral_state_count(&self) -> usize {
        let owned = self.players.iter().map(|(_, p)| p.states.len()).sum::<usize>();
        self.state_defense.len().saturating_sub(owned)
    }

    /// Pressure a side holds on a state.
    #[must_use]
    pub fn pressure(&self, state_id: &StateId, player: PlayerId) -> i32 {
        self.pressure_by_state
            .get(state_id)
            .map_or(0, |pressure| pressure[player])
    }

    /// Sequence number for the next turn-log entry.
    #[must_use]
    pub fn next_sequence(&self) -> u32 {
        self.turn_plays.last().map_or(1, |play| play.sequence + 1)
    }

    /// Serialize to a JSON document.
    pub fn to_json(&self) -> EngineResult<String> {
        serde_json::to_string(self).map_err(snapshot_error)
    }

    /// Restore from a JSON document.
    pub fn from_json(json: &str) -> EngineResult<Self> {
        serde_json::from_str(json).map_err(snapshot_error)
    }

    /// Serialize to compact binary.
    pub fn to_bytes(&self) -> EngineResult<Vec<u8>> {
        bincode::serialize(self).map_err(snapshot_error)
    }

    /// Restore from compact binary.
    pub fn from_bytes(bytes: &[u8]) -> EngineResult<Self> {
        bincode::deserialize(bytes).map_err(snapshot_error)
    }

    /// Check structural invariants and list every violation found.
    ///
    /// An empty result means the state is consistent. Useful after loading a
    /// snapshot from an untrusted source.
    #[must_use]
    pub fn audit(&self) -> Vec<StateViolation> {
        let mut violations = Vec::new();

        if !(TRUTH_MIN..=TRUTH_MAX).contains(&self.truth) {
            violations.push(StateViolation::TruthOutOfRange(self.truth));
        }

        let p1_states = &self.players[PlayerId::P1].states;
        let p2_states = &self.players[PlayerId::P2].states;
        for state_id in p1_states.iter().filter(|id| p2_states.contains(*id)) {
            violations.push(StateViolation::OwnedTwice(state_id.clone()));
        }

        for (_, player) in self.players.iter() {
            for state_id in player.states.iter() {
                if !self.state_defense.contains_key(state_id) {
                    violations.push(StateViolation::UnknownState(state_id.clone()));
                }
            }
        }

        for state_id in self.pressure_by_state.keys() {
            if !self.state_defense.contains_key(state_id) {
                violations.push(StateViolation::UnknownState(state_id.clone()));
            }
        }

        let mut last = 0;
        for play in self.turn_plays.iter() {
            if play.sequence <= last {
                violations.push(StateViolation::SequenceOutOfOrder {
                    previous: last,
                    found: play.sequence,
                });
            }
            last = play.sequence;
        }

        violations
    }
}

fn snapshot_error(err: impl std::fmt::Display) -> EngineError {
    EngineError::Snapshot {
        message: err.to_string(),
    }
}

/// A broken structural invariant reported by `GameState::audit`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StateViolation {
    #[error("truth {0} is outside 0..=100")]
    TruthOutOfRange(i32),

    #[error("state {0} is owned by both players")]
    OwnedTwice(StateId),

    #[error("state {0} has no defense entry")]
    UnknownState(StateId),

    #[error("turn-play sequence {found} follows {previous}")]
    SequenceOutOfOrder { previous: u32, found: u32 },
}
