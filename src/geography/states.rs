//! US state catalog: capture thresholds and per-turn income.
//!
//! States are identified by their postal abbreviation. The catalog is plain
//! data; a game copies its defense table into `GameState::state_defense` at
//! setup and asks the catalog for income when a turn starts.

use im::{OrdMap, OrdSet};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::data;

/// Identifier of a contested state (postal abbreviation, e.g. `"CA"`).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(pub String);

impl StateId {
    /// Create a new state ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StateId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for StateId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Static data for one state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateInfo {
    pub id: StateId,
    pub name: String,
    /// IP granted each turn to the owner.
    pub base_ip: u32,
    /// Pressure needed to capture.
    pub defense: i32,
}

impl StateInfo {
    #[must_use]
    pub fn new(id: impl Into<StateId>, name: impl Into<String>, base_ip: u32, defense: i32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            base_ip,
            defense,
        }
    }
}

/// Lookup table of states.
///
/// ## Example
///
/// ```
/// use truth_engine::geography::{StateCatalog, StateId};
///
/// let catalog = StateCatalog::standard();
/// let ny = catalog.get(&StateId::new("NY")).unwrap();
/// assert_eq!(ny.defense, 5);
/// ```
#[derive(Clone, Debug, Default)]
pub struct StateCatalog {
    states: FxHashMap<StateId, StateInfo>,
}

impl StateCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The 50 states plus DC.
    #[must_use]
    pub fn standard() -> Self {
        data::STANDARD_STATES
            .iter()
            .map(|&(id, name, base_ip, defense)| StateInfo::new(id, name, base_ip, defense))
            .collect()
    }

    /// Add a state, replacing any previous entry with the same id.
    pub fn insert(&mut self, info: StateInfo) {
        self.states.insert(info.id.clone(), info);
    }

    #[must_use]
    pub fn get(&self, id: &StateId) -> Option<&StateInfo> {
        self.states.get(id)
    }

    #[must_use]
    pub fn contains(&self, id: &StateId) -> bool {
        self.states.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Iterate over all states (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &StateInfo> {
        self.states.values()
    }

    /// Capture thresholds keyed by state, as stored in `GameState`.
    #[must_use]
    pub fn defense_table(&self) -> OrdMap<StateId, i32> {
        self.states
            .values()
            .map(|info| (info.id.clone(), info.defense))
            .collect()
    }

    /// Sum of base IP over the owned states. Unknown ids contribute nothing.
    #[must_use]
    pub fn state_income(&self, owned: &OrdSet<StateId>) -> u32 {
        owned
            .iter()
            .filter_map(|id| self.states.get(id))
            .map(|info| info.base_ip)
            .sum()
    }
}

impl FromIterator<StateInfo> for StateCatalog {
    fn from_iter<I: IntoIterator<Item = StateInfo>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for info in iter {
            catalog.insert(info);
        }
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog() {
        let catalog = StateCatalog::standard();

        assert_eq!(catalog.len(), 51);
        assert_eq!(catalog.get(&StateId::new("CA")).unwrap().base_ip, 4);
        assert_eq!(catalog.get(&StateId::new("DC")).unwrap().defense, 5);
        assert_eq!(catalog.get(&StateId::new("WY")).unwrap().name, "Wyoming");
        assert!(!catalog.contains(&StateId::new("PR")));
    }

    #[test]
    fn test_defense_table() {
        let table = StateCatalog::standard().defense_table();

        assert_eq!(table.len(), 51);
        assert_eq!(table.get(&StateId::new("TX")), Some(&4));
    }

    #[test]
    fn test_state_income() {
        let catalog = StateCatalog::standard();
        let owned: OrdSet<StateId> = ["NY", "FL", "ZZ"].into_iter().map(StateId::from).collect();

        assert_eq!(catalog.state_income(&owned), 7);
        assert_eq!(catalog.state_income(&OrdSet::new()), 0);
    }

    #[test]
    fn test_custom_catalog() {
        let catalog: StateCatalog = [StateInfo::new("AA", "Alpha", 1, 9)].into_iter().collect();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.defense_table().get(&StateId::new("AA")), Some(&9));
    }

    #[test]
    fn test_state_id_display() {
        assert_eq!(StateId::new("OH").to_string(), "OH");
        assert_eq!(serde_json::to_string(&StateId::new("OH")).unwrap(), r#""OH""#);
    }
}
