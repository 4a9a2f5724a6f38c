//! Public Frenzy momentum.
//!
//! After every MEDIA resolution the Truth meter is compared with the last
//! sample. Each full `swing_step` of movement moves the frenzy meter by the
//! same amount. When the meter climbs through `frenzy_spike`, the Truth side
//! is owed one extra play on its next turn.

use tracing::info;

use crate::core::{Faction, GameState, MomentumSettings, PlayerId};

/// Update the frenzy meter after a Truth change. Returns the seat granted a
/// bonus play, if the spike was crossed.
pub fn track_truth_swing(state: &mut GameState, settings: &MomentumSettings) -> Option<PlayerId> {
    let truth = state.truth;
    let swing = truth - state.frenzy.last_truth_sample;
    state.frenzy.last_truth_sample = truth;

    if settings.swing_step <= 0 {
        return None;
    }
    // truncates toward zero
    let steps = swing / settings.swing_step;
    if steps == 0 {
        return None;
    }

    let previous = state.frenzy.value;
    let updated = (previous + steps * settings.swing_step).clamp(0, 100);
    state.frenzy.value = updated;

    if previous < settings.frenzy_spike && updated >= settings.frenzy_spike {
        let seat = state.seat_of(Faction::Truth)?;
        state.frenzy.bonus_play_for = Some(seat);
        state.push_log("Public Frenzy erupts! Truth side gains a bonus play.");
        info!(player = %seat, frenzy = updated, "bonus play granted");
        return Some(seat);
    }
    None
}
