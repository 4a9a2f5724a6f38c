//! Card system: definitions, registry, and deck generation.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card definitions
//! - `Card`: Immutable card data with a typed effect payload
//! - `CardRegistry`: Card definition lookup, including the core set
//! - `DeckFactory`: Fallback deck generation when a player runs dry

mod data;
pub mod deck;
pub mod definition;
pub mod registry;

pub use deck::{DeckFactory, RarityWeights, WeightedDeckFactory};
pub use definition::{Card, CardEffects, CardId, CardType, Rarity};
pub use registry::CardRegistry;
