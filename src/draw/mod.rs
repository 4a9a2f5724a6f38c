//! Start-of-turn hand refill, shared by every seat.

pub mod refill;

pub use refill::{refill_hand, DrawOutcome, DrawStacks};
