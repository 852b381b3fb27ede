//! The deck: canonical card set, shuffling and dealing.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::card::{Card, Rank, Suit};
use crate::core::rng::GameRng;
use crate::error::{Result, WarError};

/// Cards in one standard deck.
pub const STANDARD_DECK_SIZE: usize = 52;

/// Result of dealing a deck.
///
/// `undealt` holds the remainder cards when the deck size is not a multiple
/// of the player count. They are out of play but still owned by the game.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DealtHands {
    /// One hand per player, in draw order.
    pub hands: Vec<Vec<Card>>,
    /// Remainder cards nobody receives.
    pub undealt: Vec<Card>,
}

/// An ordered collection of cards.
///
/// A deck is consumed by [`Deck::deal`]; afterwards it is empty and is not
/// reused.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build the canonical deck in suit-major, rank-minor order.
    ///
    /// With `double` set, two identical 52-card sets are concatenated.
    #[must_use]
    pub fn new(double: bool) -> Self {
        let copies = if double { 2 } else { 1 };
        let mut cards = Vec::with_capacity(STANDARD_DECK_SIZE * copies);
        for _ in 0..copies {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    cards.push(Card::new(rank, suit));
                }
            }
        }
        Self { cards }
    }

    /// A single unshuffled 52-card deck.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(false)
    }

    /// A deck holding exactly these cards, in this order.
    ///
    /// Useful for scripted games: dealing is round-robin, so card `i` goes
    /// to player `i % num_players`.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Permute the cards with the given RNG.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Deal the deck round-robin into `num_players` hands.
    ///
    /// Card `i` goes to hand `i % num_players`, so each hand keeps the deck
    /// order as its draw order. Only `floor(len / num_players) * num_players`
    /// cards are dealt; the rest are returned as `undealt`. The deck is
    /// empty afterwards.
    pub fn deal(&mut self, num_players: usize) -> Result<DealtHands> {
        if num_players < 2 {
            return Err(WarError::InsufficientPlayers {
                players: num_players,
            });
        }

        let per_player = self.cards.len() / num_players;
        if per_player == 0 {
            return Err(WarError::InsufficientCards {
                cards: self.cards.len(),
                players: num_players,
            });
        }

        let dealt = per_player * num_players;
        let mut hands: Vec<Vec<Card>> = (0..num_players)
            .map(|_| Vec::with_capacity(per_player))
            .collect();

        let mut cards = std::mem::take(&mut self.cards);
        let undealt = cards.split_off(dealt);
        for (i, card) in cards.into_iter().enumerate() {
            hands[i % num_players].push(card);
        }

        Ok(DealtHands { hands, undealt })
    }

    /// The cards in their current order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Deck of {} cards", self.len())
    }
}
