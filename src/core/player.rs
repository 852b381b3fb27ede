//! Seats, per-seat storage and players.
//!
//! ## PlayerId
//!
//! Seat index. Names are not required to be unique, so the engine keys
//! every per-player result (round winner, table placement) by seat.
//!
//! ## PlayerMap
//!
//! Per-seat storage backed by a `Vec`, indexable by `PlayerId`.
//!
//! ## Player
//!
//! A name and a FIFO hand. The oldest received card is played first.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

use crate::cards::Card;
use crate::error::{Result, WarError};

/// Seat identifier. The first seat is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// All seats of a `player_count` table, in seat order.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// Per-seat data with O(1) access.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Build from one value per seat, in seat order.
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!(data.len() <= 255, "At most 255 players supported");
        Self { data }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs in seat order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.data.len())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

/// A player: a name and a FIFO hand.
///
/// The hand is an `im::Vector`, so snapshots of a player are O(1) clones
/// and both ends are cheap to touch.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    name: String,
    hand: Vector<Card>,
}

impl Player {
    /// A player with an empty hand.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Vector::new(),
        }
    }

    /// A player holding `cards` in draw order.
    pub fn with_hand(name: impl Into<String>, cards: impl IntoIterator<Item = Card>) -> Self {
        let mut player = Self::new(name);
        player.receive_cards(cards);
        player
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Remove and return the oldest card in hand.
    pub fn play_card(&mut self) -> Result<Card> {
        self.hand.pop_front().ok_or_else(|| WarError::EmptyHand {
            player: self.name.clone(),
        })
    }

    /// Append cards to the back of the hand, keeping their order.
    ///
    /// Received cards go into the hand face up.
    pub fn receive_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        for mut card in cards {
            card.set_face_down(false);
            self.hand.push_back(card);
        }
    }

    #[must_use]
    pub fn has_cards(&self) -> bool {
        !self.hand.is_empty()
    }

    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    /// The hand in draw order.
    pub fn hand(&self) -> impl Iterator<Item = &Card> {
        self.hand.iter()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} cards)", self.name, self.hand.len())
    }
}
