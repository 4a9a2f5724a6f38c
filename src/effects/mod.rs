//! Card effects.
//!
//! - `EffectResolver`: dispatches a card's payload onto the state
//! - `pressure`: per-state pressure tallies and captures
//! - `media`: geography scaling of MEDIA Truth swings
//! - `momentum`: Public Frenzy bonus plays

pub mod media;
pub mod momentum;
pub mod pressure;
pub mod resolver;

pub use media::scaled_truth_delta;
pub use momentum::track_truth_swing;
pub use pressure::{apply_pressure, PressureOutcome};
pub use resolver::{EffectResolver, Resolution};
