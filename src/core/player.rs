//! Player identification, factions, and per-player data storage.
//!
//! ## PlayerId
//!
//! The game always has exactly two seats, `P1` and `P2`. P1 opens every round.
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexed by `PlayerId`. Serializes as
//! `{"P1": .., "P2": ..}` so save files read naturally.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    P1,
    P2,
}

impl PlayerId {
    /// Both seats in turn order.
    pub const ALL: [PlayerId; 2] = [PlayerId::P1, PlayerId::P2];

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerId::P1 => PlayerId::P2,
            PlayerId::P2 => PlayerId::P1,
        }
    }

    /// Iterate over both seats in turn order.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        Self::ALL.into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerId::P1 => write!(f, "P1"),
            PlayerId::P2 => write!(f, "P2"),
        }
    }
}

/// The two sides of the conflict.
///
/// Truth pushes the global meter up, Government pushes it down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Faction {
    Truth,
    Government,
}

impl Faction {
    /// The opposing faction.
    #[must_use]
    pub const fn opposing(self) -> Self {
        match self {
            Faction::Truth => Faction::Government,
            Faction::Government => Faction::Truth,
        }
    }

    /// Direction this faction moves the Truth meter: +1 or -1.
    #[must_use]
    pub const fn truth_sign(self) -> i32 {
        match self {
            Faction::Truth => 1,
            Faction::Government => -1,
        }
    }
}

impl std::fmt::Display for Faction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Faction::Truth => write!(f, "truth"),
            Faction::Government => write!(f, "government"),
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use truth_engine::core::{PlayerId, PlayerMap};
///
/// let mut pressure: PlayerMap<i32> = PlayerMap::with_value(0);
/// pressure[PlayerId::P2] += 3;
///
/// assert_eq!(pressure[PlayerId::P1], 0);
/// assert_eq!(pressure[PlayerId::P2], 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    #[serde(rename = "P1")]
    p1: T,
    #[serde(rename = "P2")]
    p2: T,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            p1: factory(PlayerId::P1),
            p2: factory(PlayerId::P2),
        }
    }

    /// Create a PlayerMap from explicit P1 and P2 values.
    pub fn from_parts(p1: T, p2: T) -> Self {
        Self { p1, p2 }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            p1: value.clone(),
            p2: value,
        }
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        match player {
            PlayerId::P1 => &self.p1,
            PlayerId::P2 => &self.p2,
        }
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        match player {
            PlayerId::P1 => &mut self.p1,
            PlayerId::P2 => &mut self.p2,
        }
    }

    /// Iterate over (PlayerId, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        [(PlayerId::P1, &self.p1), (PlayerId::P2, &self.p2)].into_iter()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
