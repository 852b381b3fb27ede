//! The game: deck, players, table and the round state machine.
//!
//! ## Flow
//!
//! ```text
//! AwaitingDeal --deal--> Idle --play_round--> Idle          (unique winner)
//!                                          \-> WarPending    (tie)
//! WarPending --resolve_war--> Idle
//! any --(one hand holds every card)--> GameOver
//! ```
//!
//! Every call runs to completion; the caller reads the new state afterwards.
//! A game is single-threaded. To share one across threads, wrap the whole
//! `Game` in one lock.

use rustc_hash::FxHashMap;
use tracing::{debug, info, warn};

use super::snapshot::{GamePhase, GameSnapshot, OutcomeKind, PlayerView, RoundOutcome};
use crate::cards::{Card, Deck, Rank, Suit};
use crate::core::{GameRng, Player, PlayerId, PlayerMap};
use crate::error::{Result, WarError};
use crate::rules::RuleSet;
use crate::zones::{Placement, Table};

/// Builder for a two-player game.
#[derive(Clone, Debug)]
pub struct GameBuilder {
    names: [String; 2],
    rules: RuleSet,
    seed: Option<u64>,
    deck: Option<Deck>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            names: ["Player 1".to_string(), "Player 2".to_string()],
            rules: RuleSet::default(),
            seed: None,
            deck: None,
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn player_names(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.names = [first.into(), second.into()];
        self
    }

    pub fn rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    /// Seed the shuffle RNG. Unseeded games draw a seed from OS entropy.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Play with exactly this deck instead of the one the rules call for.
    pub fn deck(mut self, deck: Deck) -> Self {
        self.deck = Some(deck);
        self
    }

    pub fn build(self) -> Game {
        let rng = self.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        self.build_with_rng(rng)
    }

    fn build_with_rng(self, rng: GameRng) -> Game {
        let deck = self
            .deck
            .unwrap_or_else(|| Deck::new(self.rules.use_double_deck));
        let [first, second] = self.names;

        Game {
            rules: self.rules,
            deck,
            players: PlayerMap::from_vec(vec![Player::new(first), Player::new(second)]),
            table: Table::new(),
            war_in_progress: false,
            pending_war_cards: Vec::new(),
            undealt: Vec::new(),
            cards_in_play: None,
            rng,
            last_outcome: None,
            rounds_played: 0,
            wars_fought: 0,
        }
    }
}

/// A match of War between two players.
#[derive(Clone, Debug)]
pub struct Game {
    pub(super) rules: RuleSet,
    deck: Deck,
    pub(super) players: PlayerMap<Player>,
    pub(super) table: Table,
    pub(super) war_in_progress: bool,
    /// Cards taken out of play by an unresolved war.
    pub(super) pending_war_cards: Vec<Card>,
    /// Remainder cards that were not dealt.
    undealt: Vec<Card>,
    /// Number of cards dealt; `None` until `deal`.
    cards_in_play: Option<usize>,
    rng: GameRng,
    pub(super) last_outcome: Option<RoundOutcome>,
    rounds_played: u32,
    pub(super) wars_fought: u32,
}

impl Game {
    /// New game with an entropy-seeded shuffle.
    pub fn new(player1: impl Into<String>, player2: impl Into<String>, rules: RuleSet) -> Self {
        GameBuilder::new()
            .player_names(player1, player2)
            .rules(rules)
            .build()
    }

    /// Shuffle the undealt deck. Does nothing once the deck has been dealt.
    pub fn shuffle(&mut self) {
        self.deck.shuffle(&mut self.rng);
    }

    /// Deal the whole deck round-robin to the players.
    pub fn deal(&mut self) -> Result<()> {
        let dealt = self.deck.deal(self.players.player_count())?;

        let mut total = 0;
        for ((_, player), hand) in self.players.iter_mut().zip(dealt.hands) {
            total += hand.len();
            player.receive_cards(hand);
        }
        if !dealt.undealt.is_empty() {
            debug!(cards = dealt.undealt.len(), "remainder left undealt");
        }
        self.undealt.extend(dealt.undealt);
        self.cards_in_play = Some(total + self.cards_in_play.unwrap_or(0));

        info!(cards = total, rules = %self.rules, "cards dealt");
        Ok(())
    }

    /// Play one round: every player puts their top card face up.
    ///
    /// A unique highest card takes the table. A tie, or an adjacent-rank
    /// pair when the speed-war trigger is on, leaves the cards on the table
    /// and puts the game into `WarPending`.
    ///
    /// If a player is out of cards nothing is played. Returns the game
    /// winner, if there is one.
    pub fn play_round(&mut self) -> Result<Option<PlayerId>> {
        if self.war_in_progress {
            return Err(WarError::WarPending);
        }
        if self.players.values().any(|p| !p.has_cards()) {
            return Ok(self.get_winner());
        }

        debug_assert!(self.table.is_empty(), "table not collected before a new round");
        self.table.clear();

        let seats: Vec<PlayerId> = self.players.player_ids().collect();
        for seat in seats {
            let card = self.players[seat].play_card()?;
            self.place_on_table(seat, card);
        }
        self.rounds_played += 1;

        let placements = self.table.played_cards().to_vec();
        let mut winner = self.table.get_round_winner();
        if winner.is_some() && self.is_speed_war(&placements) {
            debug!(round = self.rounds_played, "adjacent ranks, speed war");
            winner = None;
        }

        match winner {
            Some(seat) => {
                let cards = self.table.collect_cards_won_by(seat);
                let awarded = cards.len();
                self.players[seat].receive_cards(cards);
                debug!(round = self.rounds_played, winner = %seat, cards = awarded, "round won");
                self.last_outcome = Some(RoundOutcome {
                    kind: OutcomeKind::Round,
                    placements,
                    winner: Some(seat),
                    cards_awarded: awarded,
                });
            }
            None => {
                debug!(round = self.rounds_played, "round tied, war pending");
                self.war_in_progress = true;
                self.last_outcome = Some(RoundOutcome {
                    kind: OutcomeKind::Tie,
                    placements,
                    winner: None,
                    cards_awarded: 0,
                });
            }
        }

        Ok(self.finish_step())
    }

    #[must_use]
    pub fn is_war_in_progress(&self) -> bool {
        self.war_in_progress
    }

    /// The player holding every card in play, if any.
    #[must_use]
    pub fn get_winner(&self) -> Option<PlayerId> {
        let total = self.cards_in_play?;
        self.players
            .iter()
            .find(|(_, p)| p.hand_size() == total)
            .map(|(id, _)| id)
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.get_winner().is_some()
    }

    /// A fresh game with the same players, new rules and a forked RNG.
    pub fn rematch(&mut self, rules: RuleSet) -> Game {
        let first = self.players[PlayerId::new(0)].name().to_string();
        let second = self.players[PlayerId::new(1)].name().to_string();
        GameBuilder::new()
            .player_names(first, second)
            .rules(rules)
            .build_with_rng(self.rng.fork())
    }

    // === Queries ===

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        if self.is_game_over() {
            GamePhase::GameOver
        } else if self.war_in_progress {
            GamePhase::WarPending
        } else if self.cards_in_play.is_none() {
            GamePhase::AwaitingDeal
        } else {
            GamePhase::Idle
        }
    }

    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    pub fn players(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.players.iter()
    }

    #[must_use]
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Cards committed to the unresolved war.
    #[must_use]
    pub fn pending_war_cards(&self) -> &[Card] {
        &self.pending_war_cards
    }

    #[must_use]
    pub fn undealt_cards(&self) -> &[Card] {
        &self.undealt
    }

    #[must_use]
    pub fn last_outcome(&self) -> Option<&RoundOutcome> {
        self.last_outcome.as_ref()
    }

    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    #[must_use]
    pub fn wars_fought(&self) -> u32 {
        self.wars_fought
    }

    /// Seed of the shuffle RNG, for replaying a game.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Every card the game owns, wherever it is.
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> {
        self.deck
            .cards()
            .iter()
            .chain(self.players.values().flat_map(|p| p.hand()))
            .chain(self.table.cards())
            .chain(self.pending_war_cards.iter())
            .chain(self.undealt.iter())
    }

    /// Count of each exact card across deck, hands, table, pot and undealt
    /// remainder. Constant for the lifetime of a game.
    #[must_use]
    pub fn card_census(&self) -> FxHashMap<(Rank, Suit), usize> {
        let mut census = FxHashMap::default();
        for card in self.all_cards() {
            *census.entry(card.identity()).or_insert(0) += 1;
        }
        census
    }

    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.all_cards().count()
    }

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            phase: self.phase(),
            players: self
                .players
                .iter()
                .map(|(id, p)| PlayerView {
                    id,
                    name: p.name().to_string(),
                    hand_size: p.hand_size(),
                })
                .collect(),
            table: self
                .table
                .played_cards()
                .iter()
                .chain(self.table.last_played_cards())
                .copied()
                .collect(),
            pot_size: self.pending_war_cards.len(),
            rules: self.rules.to_string(),
            last_outcome: self.last_outcome.clone(),
            winner: self.get_winner(),
            rounds_played: self.rounds_played,
            wars_fought: self.wars_fought,
        }
    }

    // === Internals shared with the war protocol ===

    /// Put a card on the table. A displaced card goes back to its owner.
    pub(super) fn place_on_table(&mut self, seat: PlayerId, card: Card) {
        if let Some(displaced) = self.table.place_card(seat, card) {
            warn!(%seat, card = %displaced, "returning displaced card to hand");
            self.players[seat].receive_cards([displaced]);
        }
    }

    /// Log the end of the game and return the winner.
    pub(super) fn finish_step(&self) -> Option<PlayerId> {
        let winner = self.get_winner();
        if let Some(seat) = winner {
            info!(
                winner = %seat,
                name = self.players[seat].name(),
                rounds = self.rounds_played,
                wars = self.wars_fought,
                "game over"
            );
        }
        winner
    }

    fn is_speed_war(&self, placements: &[Placement]) -> bool {
        match placements {
            [a, b] => self.rules.is_speed_war(&a.card, &b.card),
            _ => false,
        }
    }
}
