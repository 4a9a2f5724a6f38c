//! Card registry for definition lookup.
//!
//! The `CardRegistry` stores every card definition a game can draw from.
//! It provides fast lookup by `CardId` and filtered iteration, and ships the
//! built-in core set for both factions.

use rustc_hash::FxHashMap;

use super::data;
use super::definition::{Card, CardEffects, CardId, CardType};
use crate::core::error::{EngineError, EngineResult};
use crate::core::Faction;

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use truth_engine::cards::{Card, CardId, CardRegistry, Rarity};
/// use truth_engine::core::Faction;
///
/// let mut registry = CardRegistry::new();
/// registry
///     .register(Card::media("tip", "Anonymous Tip", Faction::Truth, Rarity::Common, 3, 2))
///     .unwrap();
///
/// let found = registry.get(&CardId::new("tip")).unwrap();
/// assert_eq!(found.name, "Anonymous Tip");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, Card>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in core set for both factions.
    #[must_use]
    pub fn core_set() -> Self {
        let mut registry = Self::new();
        for &(id, name, faction, rarity, kind, amount, discard) in data::CORE_SET {
            let cost = rarity.standard_cost(kind);
            let effects = match kind {
                CardType::Attack => CardEffects::Attack {
                    ip_delta_opponent: amount,
                    discard_opponent: discard,
                },
                CardType::Media => CardEffects::Media {
                    truth_delta: amount * faction.truth_sign(),
                },
                CardType::Zone => CardEffects::Zone { pressure_delta: amount },
            };
            let card = Card::new(id, name, faction, rarity, cost, effects);
            registry.cards.insert(card.id.clone(), card);
        }
        registry
    }

    /// Register a card definition.
    ///
    /// Fails if the card is inconsistent or its id is already taken.
    pub fn register(&mut self, card: Card) -> EngineResult<()> {
        card.validate()?;
        if self.cards.contains_key(&card.id) {
            return Err(EngineError::InvalidCard {
                id: card.id,
                reason: "duplicate id".to_string(),
            });
        }
        self.cards.insert(card.id.clone(), card);
        Ok(())
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&Card> {
        self.cards.get(id)
    }

    /// Get a card definition by ID, or `UnknownCard`.
    pub fn lookup(&self, id: &CardId) -> EngineResult<&Card> {
        self.cards
            .get(id)
            .ok_or_else(|| EngineError::UnknownCard(id.clone()))
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.cards.contains_key(id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }

    /// Find cards by type.
    pub fn find_by_type(&self, card_type: CardType) -> impl Iterator<Item = &Card> {
        self.cards.values().filter(move |c| c.card_type() == card_type)
    }

    /// Find cards by faction.
    pub fn find_by_faction(&self, faction: Faction) -> impl Iterator<Item = &Card> {
        self.cards.values().filter(move |c| c.faction == faction)
    }

    /// Find cards matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &Card>
    where
        F: Fn(&Card) -> bool,
    {
        self.cards.values().filter(move |c| predicate(c))
    }
}
