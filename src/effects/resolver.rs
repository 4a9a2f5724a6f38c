//! Effect resolution - applying one card's payload to the game state.
//!
//! The resolver matches exhaustively on `CardEffects`. It works on a state
//! the caller already owns (the turn engine clones before resolving), so a
//! failed resolution never leaks into the caller's copy.

use tracing::debug;

use super::media::scaled_truth_delta;
use super::pressure::{apply_pressure, PressureOutcome};
use crate::cards::{Card, CardEffects, CardId};
use crate::core::error::{EngineError, EngineResult};
use crate::core::{GameRng, GameState, PlayerId};
use crate::geography::{CombinationCatalog, StateId};

/// What a resolved card did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    Attack {
        /// IP actually removed from the opponent.
        damage: u32,
        /// Multiplier applied (1 when none was pending).
        multiplier: u32,
        /// Cards forced out of the opponent's hand.
        discarded: Vec<CardId>,
    },
    Media {
        /// Change actually applied to Truth after clamping.
        truth_delta: i32,
    },
    Zone(PressureOutcome),
}

impl Resolution {
    /// State captured by this resolution, if any.
    #[must_use]
    pub fn captured(&self) -> Option<&StateId> {
        match self {
            Resolution::Zone(outcome) if outcome.captured => Some(&outcome.state_id),
            _ => None,
        }
    }
}

/// Applies card effects using the combination bonuses of the acting player.
#[derive(Clone, Copy, Debug)]
pub struct EffectResolver<'a> {
    combinations: &'a CombinationCatalog,
}

impl<'a> EffectResolver<'a> {
    #[must_use]
    pub fn new(combinations: &'a CombinationCatalog) -> Self {
        Self { combinations }
    }

    /// Apply `card`'s effect for `actor`.
    pub fn resolve(
        &self,
        state: &mut GameState,
        actor: PlayerId,
        card: &Card,
        target: Option<&StateId>,
        rng: &mut GameRng,
    ) -> EngineResult<Resolution> {
        match card.effects {
            CardEffects::Attack {
                ip_delta_opponent,
                discard_opponent,
            } => Ok(Self::resolve_attack(state, actor, ip_delta_opponent, discard_opponent, rng)),
            CardEffects::Media { truth_delta } => Ok(self.resolve_media(state, actor, truth_delta)),
            CardEffects::Zone { pressure_delta } => {
                let target = target.ok_or_else(|| EngineError::MissingTarget(card.id.clone()))?;
                let outcome = apply_pressure(state, actor, target, pressure_delta)?;
                debug!(
                    player = %actor,
                    state = %target,
                    pressure = outcome.pressure,
                    defense = outcome.defense,
                    "pressure applied"
                );
                Ok(Resolution::Zone(outcome))
            }
        }
    }

    fn resolve_attack(
        state: &mut GameState,
        actor: PlayerId,
        ip_delta_opponent: i32,
        discard_opponent: u32,
        rng: &mut GameRng,
    ) -> Resolution {
        let multiplier = state.player_mut(actor).next_attack_multiplier.take().unwrap_or(1);
        let base = u32::try_from(ip_delta_opponent.max(0)).unwrap_or(0);
        let opponent = state.player_mut(actor.opponent());
        let damage = opponent.spend_ip(base.saturating_mul(multiplier));

        let mut discarded = Vec::new();
        for _ in 0..discard_opponent {
            if opponent.hand.is_empty() {
                break;
            }
            let index = rng.gen_index(opponent.hand.len());
            let card = opponent.hand.remove(index);
            discarded.push(card.id.clone());
            opponent.discard.push_back(card);
        }

        debug!(player = %actor, damage, multiplier, discards = discarded.len(), "attack resolved");
        Resolution::Attack {
            damage,
            multiplier,
            discarded,
        }
    }

    fn resolve_media(&self, state: &mut GameState, actor: PlayerId, truth_delta: i32) -> Resolution {
        let player = state.player(actor);
        let summary = self.combinations.summarize(&player.states);
        let delta = scaled_truth_delta(truth_delta, player.faction, &summary);
        let applied = state.shift_truth(delta);

        debug!(player = %actor, requested = delta, applied, truth = state.truth, "truth shifted");
        Resolution::Media { truth_delta: applied }
    }
}
