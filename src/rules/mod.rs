//! Turn rules for the base game.
//!
//! ## Key Types
//!
//! - `RulesEngine`: the mechanical contract (`start_turn`, `can_play`,
//!   `play_card`, `end_turn`, `win_check`)
//! - `TurnEngine`: the standard implementation, owning config and catalogs
//! - `IncomeBreakdown`: start-of-turn income terms
//! - `Victory`: winner and reason
//! - `GameSetup`: builder for the opening position

pub mod engine;
pub mod income;
pub mod setup;
pub mod victory;

pub use engine::{LegalPlay, RulesEngine, TurnEngine, TurnSummary};
pub use income::{compute_income, IncomeBreakdown};
pub use setup::GameSetup;
pub use victory::{check_victory, Victory, VictoryReason};
