//! Pressure and capture.
//!
//! Each side accumulates pressure on a state independently. When the
//! actor's updated tally reaches the state's defense, the state changes
//! hands and both tallies on it drop to zero in the same step.

use tracing::info;

use crate::core::error::{EngineError, EngineResult};
use crate::core::{GameState, PlayerId, PlayerMap};
use crate::geography::StateId;

/// What a pressure application did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PressureOutcome {
    pub state_id: StateId,
    /// Actor's pressure after the update (zero after a capture).
    pub pressure: i32,
    pub defense: i32,
    pub captured: bool,
}

/// Add `delta` pressure from `actor` to `target`, capturing it if the
/// threshold is met.
pub fn apply_pressure(
    state: &mut GameState,
    actor: PlayerId,
    target: &StateId,
    delta: i32,
) -> EngineResult<PressureOutcome> {
    let defense = *state
        .state_defense
        .get(target)
        .ok_or_else(|| EngineError::UnknownState(target.clone()))?;

    let tally = state
        .pressure_by_state
        .entry(target.clone())
        .or_insert_with(|| PlayerMap::with_value(0));
    tally[actor] = tally[actor].saturating_add(delta);
    let updated = tally[actor];

    if updated < defense {
        return Ok(PressureOutcome {
            state_id: target.clone(),
            pressure: updated,
            defense,
            captured: false,
        });
    }

    *tally = PlayerMap::with_value(0);
    capture(state, actor, target);

    Ok(PressureOutcome {
        state_id: target.clone(),
        pressure: 0,
        defense,
        captured: true,
    })
}

/// Transfer ownership of `target` to `actor`.
fn capture(state: &mut GameState, actor: PlayerId, target: &StateId) {
    state.player_mut(actor.opponent()).states.remove(target);
    state.player_mut(actor).states.insert(target.clone());

    info!(player = %actor, state = %target, "state captured");
    state.push_log(format!("{actor} captured {target}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Faction, PlayerState};
    use im::OrdMap;

    fn state_with(defense: i32) -> GameState {
        let table: OrdMap<StateId, i32> = [(StateId::new("OH"), defense)].into_iter().collect();
        GameState::new(
            PlayerState::new(PlayerId::P1, Faction::Truth),
            PlayerState::new(PlayerId::P2, Faction::Government).with_states(["OH"]),
            table,
            50,
        )
    }

    #[test]
    fn test_below_threshold_accumulates() {
        let mut state = state_with(3);
        let oh = StateId::new("OH");

        let outcome = apply_pressure(&mut state, PlayerId::P1, &oh, 2).unwrap();

        assert!(!outcome.captured);
        assert_eq!(outcome.pressure, 2);
        assert_eq!(state.pressure(&oh, PlayerId::P1), 2);
        assert_eq!(state.owner_of(&oh), Some(PlayerId::P2));
    }

    #[test]
    fn test_meeting_defense_captures_and_zeroes_both_sides() {
        let mut state = state_with(3);
        let oh = StateId::new("OH");
        state.pressure_by_state.insert(oh.clone(), PlayerMap::from_parts(1, 2));

        let outcome = apply_pressure(&mut state, PlayerId::P1, &oh, 2).unwrap();

        assert!(outcome.captured);
        assert_eq!(state.owner_of(&oh), Some(PlayerId::P1));
        assert!(!state.player(PlayerId::P2).states.contains(&oh));
        assert_eq!(state.pressure(&oh, PlayerId::P1), 0);
        assert_eq!(state.pressure(&oh, PlayerId::P2), 0);
        assert_eq!(state.log.len(), 1);
    }

    #[test]
    fn test_opponent_pressure_untouched_without_capture() {
        let mut state = state_with(5);
        let oh = StateId::new("OH");
        state.pressure_by_state.insert(oh.clone(), PlayerMap::from_parts(0, 4));

        apply_pressure(&mut state, PlayerId::P1, &oh, 1).unwrap();

        assert_eq!(state.pressure(&oh, PlayerId::P2), 4);
    }

    #[test]
    fn test_unknown_state() {
        let mut state = state_with(3);

        let err = apply_pressure(&mut state, PlayerId::P1, &StateId::new("ZZ"), 1).unwrap_err();
        assert_eq!(err, EngineError::UnknownState(StateId::new("ZZ")));
    }
}
