//! The table: cards in play for the current comparison step.
//!
//! ## Two slots
//!
//! `played` holds the placements of the step in progress. `clear` moves them
//! into the `last` slot, a `TableSlot::Resolved` snapshot, so the round winner
//! can still be read and the cards collected after the table has been cleared
//! for the next step.
//!
//! ## Custody
//!
//! Cards never leave the table except through `collect_cards` /
//! `collect_cards_won_by`, which return every card placed since the last
//! collection and leave both slots empty. A second placement for the same
//! seat hands the displaced card back to the caller, and clearing over an
//! uncollected snapshot carries the older cards along.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::warn;

use crate::cards::Card;
use crate::core::PlayerId;

/// One seat's face-up card in a comparison step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub player: PlayerId,
    pub card: Card,
}

/// Placements of one step. Two seats is the common case.
pub type Placements = SmallVec<[Placement; 2]>;

/// The snapshot slot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableSlot {
    /// Nothing uncollected from an earlier step.
    #[default]
    Empty,
    /// Placements of the step before the last `clear`.
    Resolved(Placements),
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Table {
    played: Placements,
    last: TableSlot,
    /// Cards from snapshots that were replaced before being collected.
    carried: Vec<Card>,
}

impl Table {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a seat's card for the current step.
    ///
    /// At most one card per seat per step. If the seat already has a card
    /// placed, it is replaced and the displaced card is returned.
    #[must_use = "a displaced card must be kept by the caller"]
    pub fn place_card(&mut self, player: PlayerId, card: Card) -> Option<Card> {
        if let Some(existing) = self.played.iter_mut().find(|p| p.player == player) {
            warn!(%player, displaced = %existing.card, "card placed twice in one step");
            return Some(std::mem::replace(&mut existing.card, card));
        }
        self.played.push(Placement { player, card });
        None
    }

    /// Snapshot the current step into the `last` slot and empty it.
    ///
    /// Clearing an empty step keeps the existing snapshot.
    pub fn clear(&mut self) {
        if self.played.is_empty() {
            return;
        }

        let current = std::mem::take(&mut self.played);
        if let TableSlot::Resolved(older) =
            std::mem::replace(&mut self.last, TableSlot::Resolved(current))
        {
            warn!(cards = older.len(), "snapshot replaced before collection");
            self.carried.extend(older.into_iter().map(|p| p.card));
        }
    }

    /// The seat with the unique highest card.
    ///
    /// Evaluates the current step, or the snapshot when the current step is
    /// empty. Returns `None` on a tie for the highest rank or when there is
    /// nothing to compare.
    #[must_use]
    pub fn get_round_winner(&self) -> Option<PlayerId> {
        let placements = self.comparison_step();
        let best = placements.iter().map(|p| p.card.value()).max()?;

        let mut leaders = placements.iter().filter(|p| p.card.value() == best);
        let leader = leaders.next()?;
        match leaders.next() {
            Some(_) => None,
            None => Some(leader.player),
        }
    }

    /// Take every card on the table, oldest first.
    pub fn collect_cards(&mut self) -> Vec<Card> {
        let mut cards = std::mem::take(&mut self.carried);
        if let TableSlot::Resolved(last) = std::mem::take(&mut self.last) {
            cards.extend(last.into_iter().map(|p| p.card));
        }
        cards.extend(self.played.drain(..).map(|p| p.card));

        debug_assert!(self.is_empty());
        cards
    }

    /// Take every card on the table for `winner`.
    ///
    /// The winner's own cards come first, then the rest in the order they
    /// reached the table.
    pub fn collect_cards_won_by(&mut self, winner: PlayerId) -> Vec<Card> {
        let carried = std::mem::take(&mut self.carried);
        let mut placements: Placements = match std::mem::take(&mut self.last) {
            TableSlot::Resolved(last) => last,
            TableSlot::Empty => Placements::new(),
        };
        placements.extend(self.played.drain(..));

        let mut cards: Vec<Card> = placements
            .iter()
            .filter(|p| p.player == winner)
            .map(|p| p.card)
            .collect();
        cards.extend(carried);
        cards.extend(
            placements
                .iter()
                .filter(|p| p.player != winner)
                .map(|p| p.card),
        );

        debug_assert!(self.is_empty());
        cards
    }

    /// Placements of the step in progress.
    #[must_use]
    pub fn played_cards(&self) -> &[Placement] {
        &self.played
    }

    /// Placements of the snapshot slot (empty when there is none).
    #[must_use]
    pub fn last_played_cards(&self) -> &[Placement] {
        match &self.last {
            TableSlot::Resolved(placements) => placements,
            TableSlot::Empty => &[],
        }
    }

    #[must_use]
    pub fn last_slot(&self) -> &TableSlot {
        &self.last
    }

    /// The card to show for a seat: current step first, then the snapshot.
    #[must_use]
    pub fn card_for(&self, player: PlayerId) -> Option<&Card> {
        self.played
            .iter()
            .chain(self.last_played_cards())
            .find(|p| p.player == player)
            .map(|p| &p.card)
    }

    /// Every card held by the table, in no particular order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.carried.iter().chain(
            self.last_played_cards()
                .iter()
                .chain(self.played.iter())
                .map(|p| &p.card),
        )
    }

    #[must_use]
    pub fn card_count(&self) -> usize {
        self.carried.len() + self.last_played_cards().len() + self.played.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.card_count() == 0
    }

    fn comparison_step(&self) -> &[Placement] {
        if self.played.is_empty() {
            self.last_played_cards()
        } else {
            &self.played
        }
    }
}
