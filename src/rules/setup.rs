//! New-game construction.

use tracing::info;

use super::engine::TurnEngine;
use crate::cards::DeckFactory;
use crate::core::{Faction, GameRng, GameState, PlayerId, PlayerState};
use crate::draw::{refill_hand, DrawStacks};

/// Builder for the opening position.
///
/// Both sides get a freshly generated deck from the engine's deck factory,
/// the configured starting IP and an opening hand. Every state starts
/// neutral with zero pressure.
///
/// ## Example
///
/// ```
/// use truth_engine::core::{Faction, GameRng, PlayerId};
/// use truth_engine::rules::{GameSetup, TurnEngine};
///
/// let engine = TurnEngine::standard();
/// let mut rng = GameRng::new(7);
/// let state = GameSetup::new().with_p1_faction(Faction::Government).build(&engine, &mut rng);
///
/// assert_eq!(state.player(PlayerId::P1).faction, Faction::Government);
/// assert_eq!(state.player(PlayerId::P2).hand.len(), 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSetup {
    p1_faction: Faction,
    deck_size: usize,
    deal_opening_hands: bool,
}

impl Default for GameSetup {
    fn default() -> Self {
        Self {
            p1_faction: Faction::Truth,
            deck_size: 40,
            deal_opening_hands: true,
        }
    }
}

impl GameSetup {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Faction of the opening seat; P2 takes the other (builder pattern).
    #[must_use]
    pub fn with_p1_faction(mut self, faction: Faction) -> Self {
        self.p1_faction = faction;
        self
    }

    /// Size of each starting deck (builder pattern).
    #[must_use]
    pub fn with_deck_size(mut self, size: usize) -> Self {
        self.deck_size = size;
        self
    }

    /// Skip the opening hands; decks stay whole (builder pattern).
    #[must_use]
    pub fn without_opening_hands(mut self) -> Self {
        self.deal_opening_hands = false;
        self
    }

    /// Build the opening state. The same seed always yields the same game.
    #[must_use]
    pub fn build<F: DeckFactory>(&self, engine: &TurnEngine<F>, rng: &mut GameRng) -> GameState {
        let config = engine.config();
        let mut seat = |id: PlayerId, faction: Faction| {
            let deck = engine.factory().generate(faction, self.deck_size, rng);
            PlayerState::new(id, faction).with_ip(config.starting_ip).with_deck(deck)
        };
        let p1 = seat(PlayerId::P1, self.p1_faction);
        let p2 = seat(PlayerId::P2, self.p1_faction.opposing());

        let mut state = GameState::new(
            p1,
            p2,
            engine.geography().states.defense_table(),
            config.starting_truth,
        );

        if self.deal_opening_hands {
            for id in PlayerId::all() {
                let player = state.player_mut(id);
                let outcome = refill_hand(
                    DrawStacks::of(player),
                    player.faction,
                    config.hand_limit,
                    config.refill_deck_size,
                    engine.factory(),
                    rng,
                );
                outcome.apply_to(player);
            }
        }

        state.push_log(format!(
            "Game started: P1 {} vs P2 {}",
            self.p1_faction,
            self.p1_faction.opposing()
        ));
        info!(seed = rng.seed(), p1 = %self.p1_faction, deck_size = self.deck_size, "game created");
        state
    }
}
