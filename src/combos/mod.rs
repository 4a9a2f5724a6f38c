//! In-turn combos.
//!
//! At the end of a turn the current player's resolved plays are matched
//! against a catalog of patterns. Matching is pure (`ComboEvaluator::evaluate`);
//! granting the rewards is a separate step (`ComboEvaluator::apply_rewards`).
//!
//! ## Key Types
//!
//! - `ComboDefinition`: one catalog entry (trigger, reward, priority, cap)
//! - `ComboTrigger`: sequence, count, threshold, state or hybrid pattern
//! - `ComboSettings`: global switch, per-combo toggles, per-turn limit
//! - `ComboEvaluation`: matched combos plus the aggregated reward

pub mod catalog;
pub mod evaluator;
pub mod types;

pub use catalog::standard_combos;
pub use evaluator::{sum_rewards, ComboEvaluator, ComboSettings};
pub use types::{
    ComboCategory, ComboDefinition, ComboEvaluation, ComboResult, ComboReward, ComboTrigger, CountOperator,
    HybridMode, ThresholdMetric,
};
