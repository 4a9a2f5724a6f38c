//! Deck generation.
//!
//! `DeckFactory` is the seam the draw routine calls when a player's deck and
//! discard are both empty. `WeightedDeckFactory` builds decks from a
//! registry with rarity weights and a per-card copy limit.

use super::definition::{Card, Rarity};
use super::registry::CardRegistry;
use crate::core::{Faction, GameRng};

/// Produces fresh decks for a faction.
pub trait DeckFactory {
    /// Build a deck of up to `size` cards. May return fewer if the pool is empty.
    fn generate(&self, faction: Faction, size: usize, rng: &mut GameRng) -> Vec<Card>;
}

/// Relative weight of each rarity when filling a deck slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RarityWeights {
    pub common: u32,
    pub uncommon: u32,
    pub rare: u32,
    pub legendary: u32,
}

impl Default for RarityWeights {
    fn default() -> Self {
        Self {
            common: 65,
            uncommon: 25,
            rare: 8,
            legendary: 2,
        }
    }
}

impl RarityWeights {
    fn weight(&self, rarity: Rarity) -> u32 {
        match rarity {
            Rarity::Common => self.common,
            Rarity::Uncommon => self.uncommon,
            Rarity::Rare => self.rare,
            Rarity::Legendary => self.legendary,
        }
    }
}

/// Rarity-weighted random decks drawn from a card registry.
///
/// Each slot picks a target rarity by weight, then a card of that rarity
/// that has not hit the copy limit. When no such card exists the rarity is
/// relaxed, and finally the copy limit.
#[derive(Clone, Debug)]
pub struct WeightedDeckFactory {
    registry: CardRegistry,
    weights: RarityWeights,
    copy_limit: usize,
}

impl WeightedDeckFactory {
    #[must_use]
    pub fn new(registry: CardRegistry) -> Self {
        Self {
            registry,
            weights: RarityWeights::default(),
            copy_limit: 2,
        }
    }

    /// Set rarity weights (builder pattern).
    #[must_use]
    pub fn with_weights(mut self, weights: RarityWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Set the maximum copies of one card before the limit is relaxed (builder pattern).
    #[must_use]
    pub fn with_copy_limit(mut self, limit: usize) -> Self {
        self.copy_limit = limit;
        self
    }

    #[must_use]
    pub fn registry(&self) -> &CardRegistry {
        &self.registry
    }

    /// Faction cards sorted by id so generation only depends on the RNG.
    fn pool(&self, faction: Faction) -> Vec<&Card> {
        let mut pool: Vec<&Card> = self.registry.find_by_faction(faction).collect();
        pool.sort_by(|a, b| a.id.cmp(&b.id));
        pool
    }
}

impl Default for WeightedDeckFactory {
    fn default() -> Self {
        Self::new(CardRegistry::core_set())
    }
}

impl DeckFactory for WeightedDeckFactory {
    fn generate(&self, faction: Faction, size: usize, rng: &mut GameRng) -> Vec<Card> {
        let pool = self.pool(faction);
        if pool.is_empty() {
            return Vec::new();
        }

        let rarity_weights: Vec<u32> = Rarity::ALL.iter().map(|&r| self.weights.weight(r)).collect();
        let mut copies = vec![0usize; pool.len()];
        let mut deck = Vec::with_capacity(size);

        for _ in 0..size {
            let target = rng
                .choose_weighted(&rarity_weights)
                .map_or(Rarity::Common, |i| Rarity::ALL[i]);

            let under_limit = |i: &usize| copies[*i] < self.copy_limit;
            let candidates: Vec<usize> = {
                let exact: Vec<usize> = (0..pool.len())
                    .filter(|i| pool[*i].rarity == target)
                    .filter(under_limit)
                    .collect();
                if !exact.is_empty() {
                    exact
                } else {
                    let any: Vec<usize> = (0..pool.len()).filter(under_limit).collect();
                    if any.is_empty() {
                        (0..pool.len()).collect()
                    } else {
                        any
                    }
                }
            };

            let chosen = candidates[rng.gen_index(candidates.len())];
            copies[chosen] += 1;
            deck.push(pool[chosen].clone());
        }

        deck
    }
}
