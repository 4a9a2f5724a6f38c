//! Turn log entries.
//!
//! Every successful `play_card` writes two `TurnPlay` records: a `Play` entry
//! before the effect runs and a `Resolve` entry after it. Combo matching only
//! looks at `Resolve` entries; `Play` entries keep the ordering of actions for
//! whoever renders the turn.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::cards::{Card, CardId, CardType, Rarity};
use crate::geography::StateId;

/// Which half of a play an entry records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayStage {
    /// The card left the hand and its cost was paid.
    Play,
    /// The card's effect has been applied.
    Resolve,
}

/// One immutable entry in the current turn's log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnPlay {
    /// Position within the turn, strictly increasing.
    pub sequence: u32,
    pub stage: PlayStage,
    pub owner: PlayerId,
    pub card_id: CardId,
    pub card_name: String,
    pub card_type: CardType,
    pub card_rarity: Rarity,
    /// Effective cost actually paid.
    pub cost: u32,
    pub target_state_id: Option<StateId>,
    /// State captured by this play (resolve stage only).
    pub captured: Option<StateId>,
}

impl TurnPlay {
    /// Record a card play.
    #[must_use]
    pub fn new(
        sequence: u32,
        stage: PlayStage,
        owner: PlayerId,
        card: &Card,
        cost: u32,
        target: Option<&StateId>,
    ) -> Self {
        Self {
            sequence,
            stage,
            owner,
            card_id: card.id.clone(),
            card_name: card.name.clone(),
            card_type: card.card_type(),
            card_rarity: card.rarity,
            cost,
            target_state_id: target.cloned(),
            captured: None,
        }
    }

    /// Attach the captured state (builder pattern).
    #[must_use]
    pub fn with_capture(mut self, captured: Option<StateId>) -> Self {
        self.captured = captured;
        self
    }

    /// Is this a resolve-stage entry?
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.stage == PlayStage::Resolve
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Faction;

    #[test]
    fn test_turn_play_from_card() {
        let card = Card::zone("z", "Ground Game", Faction::Truth, Rarity::Uncommon, 5, 2);
        let target = StateId::new("OH");

        let entry = TurnPlay::new(3, PlayStage::Resolve, PlayerId::P1, &card, 5, Some(&target))
            .with_capture(Some(target.clone()));

        assert_eq!(entry.sequence, 3);
        assert_eq!(entry.card_type, CardType::Zone);
        assert_eq!(entry.card_rarity, Rarity::Uncommon);
        assert_eq!(entry.target_state_id, Some(target.clone()));
        assert_eq!(entry.captured, Some(target));
        assert!(entry.is_resolved());
    }

    #[test]
    fn test_stage_serialization() {
        assert_eq!(serde_json::to_string(&PlayStage::Play).unwrap(), r#""play""#);
        assert_eq!(serde_json::to_string(&PlayStage::Resolve).unwrap(), r#""resolve""#);
    }
}
