//! Card definitions - static card data.
//!
//! A `Card` is immutable. Its effect payload is a tagged union keyed by the
//! card type, so the type can never disagree with the fields present:
//!
//! ```
//! use truth_engine::cards::{Card, CardType, Rarity};
//! use truth_engine::core::Faction;
//!
//! let leak = Card::attack("leak", "Leaked Memo", Faction::Truth, Rarity::Common, 2, 3);
//! assert_eq!(leak.card_type(), CardType::Attack);
//! assert_eq!(leak.cost, 2);
//! ```

use serde::{Deserialize, Serialize};

use crate::core::error::{EngineError, EngineResult};
use crate::core::Faction;

/// Unique identifier for a card definition.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card ID.
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

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for CardId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// The three playable card kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CardType {
    Attack,
    Media,
    Zone,
}

impl CardType {
    pub const ALL: [CardType; 3] = [CardType::Attack, CardType::Media, CardType::Zone];
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardType::Attack => write!(f, "ATTACK"),
            CardType::Media => write!(f, "MEDIA"),
            CardType::Zone => write!(f, "ZONE"),
        }
    }
}

/// Card rarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Legendary,
}

impl Rarity {
    pub const ALL: [Rarity; 4] = [Rarity::Common, Rarity::Uncommon, Rarity::Rare, Rarity::Legendary];

    /// Does this rarity satisfy a requirement? `Rare` also accepts `Legendary`.
    #[must_use]
    pub fn satisfies(self, required: Rarity) -> bool {
        match required {
            Rarity::Rare => matches!(self, Rarity::Rare | Rarity::Legendary),
            other => self == other,
        }
    }

    /// Standard cost for a card of this rarity and type.
    #[must_use]
    pub const fn standard_cost(self, card_type: CardType) -> u32 {
        let base = match card_type {
            CardType::Attack => 2,
            CardType::Media => 3,
            CardType::Zone => 4,
        };
        base + self as u32
    }
}

/// Effect payload, keyed by card type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CardEffects {
    /// Drain the opponent's IP and optionally strip cards from their hand.
    Attack {
        ip_delta_opponent: i32,
        discard_opponent: u32,
    },
    /// Move the global Truth meter.
    Media { truth_delta: i32 },
    /// Add pressure to a targeted state.
    Zone { pressure_delta: i32 },
}

impl CardEffects {
    #[must_use]
    pub const fn card_type(&self) -> CardType {
        match self {
            CardEffects::Attack { .. } => CardType::Attack,
            CardEffects::Media { .. } => CardType::Media,
            CardEffects::Zone { .. } => CardType::Zone,
        }
    }
}

/// Static card definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub name: String,
    pub faction: Faction,
    pub rarity: Rarity,
    pub cost: u32,
    pub effects: CardEffects,
    /// Rules text (presentation only).
    #[serde(default)]
    pub text: Option<String>,
    /// Flavor text (presentation only).
    #[serde(default)]
    pub flavor: Option<String>,
}

impl Card {
    /// Create a card from its parts.
    #[must_use]
    pub fn new(
        id: impl Into<CardId>,
        name: impl Into<String>,
        faction: Faction,
        rarity: Rarity,
        cost: u32,
        effects: CardEffects,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            faction,
            rarity,
            cost,
            effects,
            text: None,
            flavor: None,
        }
    }

    /// ATTACK card dealing `damage` IP to the opponent.
    #[must_use]
    pub fn attack(
        id: impl Into<CardId>,
        name: impl Into<String>,
        faction: Faction,
        rarity: Rarity,
        cost: u32,
        damage: i32,
    ) -> Self {
        Self::new(
            id,
            name,
            faction,
            rarity,
            cost,
            CardEffects::Attack {
                ip_delta_opponent: damage,
                discard_opponent: 0,
            },
        )
    }

    /// MEDIA card moving Truth by `truth_delta`.
    #[must_use]
    pub fn media(
        id: impl Into<CardId>,
        name: impl Into<String>,
        faction: Faction,
        rarity: Rarity,
        cost: u32,
        truth_delta: i32,
    ) -> Self {
        Self::new(id, name, faction, rarity, cost, CardEffects::Media { truth_delta })
    }

    /// ZONE card adding `pressure_delta` to its target.
    #[must_use]
    pub fn zone(
        id: impl Into<CardId>,
        name: impl Into<String>,
        faction: Faction,
        rarity: Rarity,
        cost: u32,
        pressure_delta: i32,
    ) -> Self {
        Self::new(id, name, faction, rarity, cost, CardEffects::Zone { pressure_delta })
    }

    /// Add a forced discard to an ATTACK card (builder pattern).
    ///
    /// Has no effect on other card types.
    #[must_use]
    pub fn with_discard(mut self, count: u32) -> Self {
        if let CardEffects::Attack { discard_opponent, .. } = &mut self.effects {
            *discard_opponent = count;
        }
        self
    }

    /// Attach rules text (builder pattern).
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Attach flavor text (builder pattern).
    #[must_use]
    pub fn with_flavor(mut self, flavor: impl Into<String>) -> Self {
        self.flavor = Some(flavor.into());
        self
    }

    /// The card kind, derived from the effect payload.
    #[must_use]
    pub const fn card_type(&self) -> CardType {
        self.effects.card_type()
    }

    /// Check that the definition is internally consistent.
    ///
    /// MEDIA cards must push Truth in their faction's direction and ZONE
    /// cards must add positive pressure.
    pub fn validate(&self) -> EngineResult<()> {
        let invalid = |reason: &str| EngineError::InvalidCard {
            id: self.id.clone(),
            reason: reason.to_string(),
        };

        if self.id.as_str().trim().is_empty() {
            return Err(invalid("missing id"));
        }
        if self.name.trim().is_empty() {
            return Err(invalid("missing name"));
        }

        match self.effects {
            CardEffects::Attack { ip_delta_opponent, .. } if ip_delta_opponent < 0 => {
                Err(invalid("ATTACK damage must not be negative"))
            }
            CardEffects::Media { truth_delta } if truth_delta.signum() != self.faction.truth_sign() => {
                Err(invalid("MEDIA truth delta points away from the card's faction"))
            }
            CardEffects::Zone { pressure_delta } if pressure_delta <= 0 => {
                Err(invalid("ZONE pressure must be positive"))
            }
            _ => Ok(()),
        }
    }
}
