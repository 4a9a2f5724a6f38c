//! Hand refill from deck and discard.
//!
//! Draws from the front of the deck until the hand reaches its target size.
//! An empty deck is rebuilt by shuffling the discard pile into it; when
//! both are empty the deck factory is asked once for a fresh deck. If cards
//! still run out the outcome carries `deck_shortage` instead of an error.

use im::Vector;
use tracing::{debug, info};

use crate::cards::{Card, DeckFactory};
use crate::core::{Faction, GameRng, PlayerState};

/// The three piles a refill works on.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DrawStacks {
    pub hand: Vector<Card>,
    pub deck: Vector<Card>,
    pub discard: Vector<Card>,
}

impl DrawStacks {
    /// Copy the piles out of a player record.
    #[must_use]
    pub fn of(player: &PlayerState) -> Self {
        Self {
            hand: player.hand.clone(),
            deck: player.deck.clone(),
            discard: player.discard.clone(),
        }
    }
}

/// Result of a refill.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrawOutcome {
    pub hand: Vector<Card>,
    pub deck: Vector<Card>,
    pub discard: Vector<Card>,
    /// Cards drawn this refill, in draw order.
    pub drawn: Vec<Card>,
    /// The discard pile was shuffled into the deck.
    pub reshuffled: bool,
    /// The hand is still below target.
    pub deck_shortage: bool,
    /// The deck factory supplied a new deck.
    pub replenished_from_factory: bool,
}

impl DrawOutcome {
    /// Write the piles back into a player record.
    pub fn apply_to(&self, player: &mut PlayerState) {
        player.hand = self.hand.clone();
        player.deck = self.deck.clone();
        player.discard = self.discard.clone();
    }

    /// Human-readable summary for the game log.
    #[must_use]
    pub fn log_lines(&self, target: usize) -> Vec<String> {
        let mut lines = Vec::new();
        if self.reshuffled {
            lines.push("Deck reshuffled from discard pile".to_string());
        }
        if self.replenished_from_factory {
            lines.push("Deck replenished from reserves".to_string());
        }

        let drawn = self.drawn.len();
        if drawn > 0 {
            let plural = if drawn == 1 { "" } else { "s" };
            lines.push(format!(
                "Drew {drawn} card{plural} to start turn (hand {}/{target})",
                self.hand.len()
            ));
        } else {
            lines.push(format!("Ready to act (hand {}/{target})", self.hand.len()));
        }

        if self.deck_shortage {
            lines.push("Deck exhausted: unable to draw enough cards for new turn".to_string());
        }
        lines
    }
}

/// Refill `stacks.hand` up to `target` cards.
///
/// `factory_size` is the size of the deck requested from `factory` when the
/// deck and discard are both empty. The factory is called at most once.
pub fn refill_hand(
    stacks: DrawStacks,
    faction: Faction,
    target: usize,
    factory_size: usize,
    factory: &dyn DeckFactory,
    rng: &mut GameRng,
) -> DrawOutcome {
    let DrawStacks {
        mut hand,
        mut deck,
        mut discard,
    } = stacks;
    let mut drawn = Vec::new();
    let mut reshuffled = false;
    let mut factory_attempted = false;
    let mut replenished_from_factory = false;

    while hand.len() < target {
        if deck.is_empty() {
            if !discard.is_empty() {
                let mut cards: Vec<Card> = std::mem::take(&mut discard).into_iter().collect();
                rng.shuffle(&mut cards);
                deck = cards.into_iter().collect();
                reshuffled = true;
                debug!(%faction, cards = deck.len(), "discard reshuffled into deck");
            } else if !factory_attempted {
                factory_attempted = true;
                deck = factory.generate(faction, factory_size, rng).into_iter().collect();
                replenished_from_factory = !deck.is_empty();
                info!(%faction, cards = deck.len(), "deck replenished from factory");
            } else {
                break;
            }
        }

        match deck.pop_front() {
            Some(card) => {
                drawn.push(card.clone());
                hand.push_back(card);
            }
            None => break,
        }
    }

    let deck_shortage = hand.len() < target;
    if deck_shortage {
        info!(%faction, hand = hand.len(), target, "deck shortage");
    }

    DrawOutcome {
        hand,
        deck,
        discard,
        drawn,
        reshuffled,
        deck_shortage,
        replenished_from_factory,
    }
}
