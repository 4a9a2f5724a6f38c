//! Core engine types: players, state, turn log, RNG, configuration, errors.
//!
//! Everything here is plain data. The rules that move a `GameState` forward
//! live in `rules`, `effects`, `combos` and `draw`.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;
pub mod turn_play;

pub use config::{CatchUpSettings, MaintenanceSettings, MomentumSettings, RulesConfig, WinThresholds};
pub use error::{EngineError, EngineResult, PlayBlock};
pub use player::{Faction, PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, PlayerState, PublicFrenzy, StateViolation, TRUTH_MAX, TRUTH_MIN};
pub use turn_play::{PlayStage, TurnPlay};
