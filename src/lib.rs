//! # truth-engine
//!
//! Rules engine for a two-faction card game: Truth against Government.
//!
//! Players spend IP to play ATTACK, MEDIA and ZONE cards. Attacks drain the
//! opponent's IP, media swings the global Truth meter, and zone plays build
//! pressure on US states until they are captured. Matching patterns of plays
//! within a turn trigger combos. A side wins by territory, by the Truth
//! meter, or by IP reserves.
//!
//! ## Design Principles
//!
//! 1. **Value In, Value Out**: Every operation borrows a `GameState` and
//!    returns the next one. Failed operations leave the input untouched.
//!
//! 2. **Persistent Data Structures**: O(1) cloning via `im-rs`, so building
//!    the next state is cheap.
//!
//! 3. **Injected Randomness**: Shuffles, random discards and fallback decks
//!    draw from a caller-supplied `GameRng`. The same seed replays the same game.
//!
//! 4. **No Globals**: Rules config, catalogs and combo settings are values
//!    owned by `TurnEngine` and `ComboEvaluator`.
//!
//! ## Modules
//!
//! - `core`: Players, state, turn log, RNG, configuration, errors
//! - `cards`: Card definitions, the core set, deck generation
//! - `geography`: States, defenses and state combinations
//! - `effects`: Card effect resolution and pressure/capture
//! - `draw`: Hand refill
//! - `combos`: In-turn combo catalog and evaluation
//! - `rules`: Turn engine, income, victory, game setup

pub mod cards;
pub mod combos;
pub mod core;
pub mod draw;
pub mod effects;
pub mod geography;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    EngineError, EngineResult, Faction, GameRng, GameRngState, GameState, PlayBlock, PlayStage, PlayerId,
    PlayerMap, PlayerState, PublicFrenzy, RulesConfig, TurnPlay,
};

pub use crate::cards::{Card, CardEffects, CardId, CardRegistry, CardType, DeckFactory, Rarity, WeightedDeckFactory};

pub use crate::geography::{CombinationCatalog, CombinationSummary, Geography, StateCatalog, StateId};

pub use crate::effects::{EffectResolver, Resolution};

pub use crate::draw::{refill_hand, DrawOutcome};

pub use crate::combos::{ComboDefinition, ComboEvaluation, ComboEvaluator, ComboSettings};

pub use crate::rules::{
    GameSetup, IncomeBreakdown, LegalPlay, RulesEngine, TurnEngine, TurnSummary, Victory, VictoryReason,
};
