//! Victory conditions.

use serde::{Deserialize, Serialize};

use crate::core::{Faction, GameState, PlayerId, WinThresholds};

/// Why a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VictoryReason {
    States,
    Truth,
    Ip,
}

impl std::fmt::Display for VictoryReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VictoryReason::States => write!(f, "states"),
            VictoryReason::Truth => write!(f, "truth"),
            VictoryReason::Ip => write!(f, "ip"),
        }
    }
}

/// The single winner of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Victory {
    pub winner: PlayerId,
    pub reason: VictoryReason,
}

impl Victory {
    #[must_use]
    pub const fn new(winner: PlayerId, reason: VictoryReason) -> Self {
        Self { winner, reason }
    }
}

/// Check the victory conditions in priority order.
///
/// Territory first (P1 before P2), then the Truth meter, then IP reserves
/// (P1 before P2). At most one winner is reported.
#[must_use]
pub fn check_victory(state: &GameState, thresholds: &WinThresholds) -> Option<Victory> {
    if let Some(winner) = PlayerId::all().find(|&id| state.player(id).states.len() >= thresholds.states) {
        return Some(Victory::new(winner, VictoryReason::States));
    }

    if state.truth >= thresholds.truth_high {
        if let Some(winner) = state.seat_of(Faction::Truth) {
            return Some(Victory::new(winner, VictoryReason::Truth));
        }
    }
    if state.truth <= thresholds.truth_low {
        if let Some(winner) = state.seat_of(Faction::Government) {
            return Some(Victory::new(winner, VictoryReason::Truth));
        }
    }

    PlayerId::all()
        .find(|&id| state.player(id).ip >= thresholds.ip)
        .map(|winner| Victory::new(winner, VictoryReason::Ip))
}
