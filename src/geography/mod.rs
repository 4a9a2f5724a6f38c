//! Geography: contested states and the combinations built from them.
//!
//! ## Key Types
//!
//! - `StateId`: postal abbreviation identifying a state
//! - `StateCatalog`: defense and base IP per state
//! - `CombinationCatalog`: required-state sets and their bonuses
//! - `Geography`: both catalogs, as owned by the turn engine

pub mod combinations;
mod data;
pub mod states;

pub use combinations::{
    CombinationCatalog, CombinationCategory, CombinationEffect, CombinationSummary, StateCombination,
};
pub use states::{StateCatalog, StateId, StateInfo};

use crate::core::{GameState, PlayerId};

/// State and combination catalogs used together by income and cost rules.
#[derive(Clone, Debug, Default)]
pub struct Geography {
    pub states: StateCatalog,
    pub combinations: CombinationCatalog,
}

impl Geography {
    #[must_use]
    pub fn new(states: StateCatalog, combinations: CombinationCatalog) -> Self {
        Self { states, combinations }
    }

    /// Standard US map with the standard combinations.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(StateCatalog::standard(), CombinationCatalog::standard())
    }

    /// Active combination bonuses for a player.
    #[must_use]
    pub fn summary_for(&self, state: &GameState, player: PlayerId) -> CombinationSummary {
        self.combinations.summarize(&state.player(player).states)
    }
}
