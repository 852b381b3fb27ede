//! The war sub-protocol.
//!
//! A war runs as a loop over escalation steps with an explicit pot, so a
//! long run of ties never deepens the call stack. Each step takes at least
//! one card from every participant's hand, so the loop ends.

use smallvec::SmallVec;
use tracing::debug;

use super::game::Game;
use super::snapshot::{OutcomeKind, RoundOutcome};
use crate::cards::Card;
use crate::core::PlayerId;
use crate::error::{Result, WarError};
use crate::zones::Placement;

type Seats = SmallVec<[PlayerId; 2]>;

impl Game {
    /// Resolve the pending war.
    ///
    /// The tied round cards go into the pot. Then, per escalation step:
    ///
    /// 1. Participants are the players with cards left. If fewer than two
    ///    remain, or any of them holds fewer than `cards_down + 1` cards, the
    ///    participant with the most cards takes the pot (lowest seat among
    ///    equals; every seat is a candidate when nobody has cards).
    /// 2. Each participant commits `cards_down` cards face down to the pot,
    ///    in hand order, then plays one card face up.
    /// 3. A unique highest face-up card takes the pot and the face-up cards.
    ///    A tie adds the face-up cards to the pot and the loop repeats.
    ///
    /// Returns the game winner, if there is one.
    pub fn resolve_war(&mut self) -> Result<Option<PlayerId>> {
        if !self.war_in_progress {
            return Err(WarError::NoWarInProgress);
        }

        let cards_down = self.rules.cards_down_for_war();
        self.wars_fought += 1;

        let opening = self.table.collect_cards();
        self.pending_war_cards.extend(opening);

        let mut escalations = 0u32;
        loop {
            let participants: Seats = self
                .players
                .iter()
                .filter(|(_, p)| p.has_cards())
                .map(|(id, _)| id)
                .collect();

            let short_handed = participants.len() < 2
                || participants
                    .iter()
                    .any(|&seat| self.players[seat].hand_size() < cards_down + 1);
            if short_handed {
                let candidates: Seats = if participants.is_empty() {
                    self.players.player_ids().collect()
                } else {
                    participants
                };
                let winner = self
                    .most_cards(&candidates)
                    .ok_or(WarError::InsufficientPlayers { players: 0 })?;
                debug!(winner = %winner, pot = self.pending_war_cards.len(), escalations, "war won by elimination");
                self.award_pot(
                    winner,
                    Vec::new(),
                    OutcomeKind::Elimination { escalations },
                    Vec::new(),
                );
                break;
            }

            escalations += 1;
            for &seat in &participants {
                for _ in 0..cards_down {
                    let card = self.players[seat].play_card()?;
                    self.pending_war_cards.push(card.turned_down());
                }
            }

            self.table.clear();
            for &seat in &participants {
                let card = self.players[seat].play_card()?;
                self.place_on_table(seat, card);
            }

            let placements = self.table.played_cards().to_vec();
            match self.table.get_round_winner() {
                Some(winner) => {
                    let face_up = self.table.collect_cards_won_by(winner);
                    debug!(winner = %winner, pot = self.pending_war_cards.len() + face_up.len(), escalations, "war won");
                    self.award_pot(
                        winner,
                        face_up,
                        OutcomeKind::War { escalations },
                        placements,
                    );
                    break;
                }
                None => {
                    let tied = self.table.collect_cards();
                    self.pending_war_cards.extend(tied);
                    debug!(pot = self.pending_war_cards.len(), escalations, "war tied again");
                }
            }
        }

        debug_assert!(self.table.is_empty() && self.pending_war_cards.is_empty());
        Ok(self.finish_step())
    }

    /// Seat with the largest hand among `seats`, lowest seat on ties.
    fn most_cards(&self, seats: &[PlayerId]) -> Option<PlayerId> {
        seats.iter().copied().max_by(|&a, &b| {
            self.players[a]
                .hand_size()
                .cmp(&self.players[b].hand_size())
                .then(b.cmp(&a))
        })
    }

    /// Hand the whole pot plus `face_up` to `winner` and end the war.
    fn award_pot(
        &mut self,
        winner: PlayerId,
        face_up: Vec<Card>,
        kind: OutcomeKind,
        placements: Vec<Placement>,
    ) {
        let mut cards = std::mem::take(&mut self.pending_war_cards);
        cards.extend(face_up);
        let awarded = cards.len();
        self.players[winner].receive_cards(cards);

        self.war_in_progress = false;
        self.last_outcome = Some(RoundOutcome {
            kind,
            placements,
            winner: Some(winner),
            cards_awarded: awarded,
        });
    }
}
