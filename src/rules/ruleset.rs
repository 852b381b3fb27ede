//! Rule configuration for a game.
//!
//! A `RuleSet` is fixed for the lifetime of a game and may be swapped
//! between games (see `Game::rematch`).
//!
//! ## Two independent speed rules
//!
//! - `WarPolicy::Speed` changes *how* a war is fought: no face-down cards,
//!   each escalation is a single face-up card.
//! - `speed_war_enabled` changes *when* a war starts: an opening round whose
//!   two cards are adjacent ranks is treated as a tie. War escalations
//!   themselves only ever continue on exact ties.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::cards::{Card, STANDARD_DECK_SIZE};
use crate::error::WarError;

/// How a war is fought.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WarPolicy {
    /// One card face down, then one face up.
    #[default]
    Standard,
    /// Two cards face down.
    Double,
    /// Four cards face down.
    Quadruple,
    /// No face-down phase.
    Speed,
}

impl WarPolicy {
    pub const ALL: [WarPolicy; 4] = [
        WarPolicy::Standard,
        WarPolicy::Double,
        WarPolicy::Quadruple,
        WarPolicy::Speed,
    ];

    /// Face-down cards each participant commits per escalation.
    #[must_use]
    pub const fn cards_down(self) -> usize {
        match self {
            WarPolicy::Standard => 1,
            WarPolicy::Double => 2,
            WarPolicy::Quadruple => 4,
            WarPolicy::Speed => 0,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            WarPolicy::Standard => "Standard",
            WarPolicy::Double => "Double",
            WarPolicy::Quadruple => "Quadruple",
            WarPolicy::Speed => "Speed",
        }
    }
}

impl fmt::Display for WarPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WarPolicy {
    type Err = WarError;

    /// Accepts policy names (`standard`, `double`, `quadruple`, `speed`) or
    /// face-down counts (`1`, `2`, `4`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        WarPolicy::ALL
            .into_iter()
            .find(|p| {
                p.name().eq_ignore_ascii_case(s)
                    || (*p != WarPolicy::Speed && s.parse::<usize>() == Ok(p.cards_down()))
            })
            .ok_or_else(|| WarError::UnknownWarPolicy(s.to_string()))
    }
}

/// Rule configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RuleSet {
    pub war_policy: WarPolicy,
    pub use_double_deck: bool,
    pub speed_war_enabled: bool,
}

impl RuleSet {
    /// Standard war, single deck, no speed-war trigger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_war_policy(mut self, policy: WarPolicy) -> Self {
        self.war_policy = policy;
        self
    }

    #[must_use]
    pub fn with_double_deck(mut self, enabled: bool) -> Self {
        self.use_double_deck = enabled;
        self
    }

    #[must_use]
    pub fn with_speed_war(mut self, enabled: bool) -> Self {
        self.speed_war_enabled = enabled;
        self
    }

    /// Face-down cards per escalation (0 for `Speed`).
    #[must_use]
    pub fn cards_down_for_war(&self) -> usize {
        self.war_policy.cards_down()
    }

    /// Size of the deck these rules play with.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        if self.use_double_deck {
            STANDARD_DECK_SIZE * 2
        } else {
            STANDARD_DECK_SIZE
        }
    }

    /// Whether two opening cards trigger a speed war.
    ///
    /// Always false unless `speed_war_enabled` is set.
    #[must_use]
    pub fn is_speed_war(&self, a: &Card, b: &Card) -> bool {
        self.speed_war_enabled && a.rank().is_adjacent(b.rank())
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "War Resolution: {}, Double Deck: {}, Speed War: {}",
            self.war_policy,
            if self.use_double_deck { "Yes" } else { "No" },
            if self.speed_war_enabled { "Enabled" } else { "Disabled" },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn test_default_rules() {
        let rules = RuleSet::default();
        assert_eq!(rules.war_policy, WarPolicy::Standard);
        assert!(!rules.use_double_deck);
        assert!(!rules.speed_war_enabled);
        assert_eq!(rules.cards_down_for_war(), 1);
        assert_eq!(rules.deck_size(), 52);
    }

    #[test]
    fn test_cards_down_per_policy() {
        let down: Vec<_> = WarPolicy::ALL
            .iter()
            .map(|&p| RuleSet::new().with_war_policy(p).cards_down_for_war())
            .collect();
        assert_eq!(down, vec![1, 2, 4, 0]);
    }

    #[test]
    fn test_builder_pattern() {
        let rules = RuleSet::new()
            .with_war_policy(WarPolicy::Quadruple)
            .with_double_deck(true)
            .with_speed_war(true);

        assert_eq!(rules.war_policy, WarPolicy::Quadruple);
        assert_eq!(rules.deck_size(), 104);
        assert!(rules.speed_war_enabled);
    }

    #[test]
    fn test_parse_policy() {
        assert_eq!("standard".parse::<WarPolicy>(), Ok(WarPolicy::Standard));
        assert_eq!("SPEED".parse::<WarPolicy>(), Ok(WarPolicy::Speed));
        assert_eq!("2".parse::<WarPolicy>(), Ok(WarPolicy::Double));
        assert_eq!("4".parse::<WarPolicy>(), Ok(WarPolicy::Quadruple));
        assert_eq!(
            "3".parse::<WarPolicy>(),
            Err(WarError::UnknownWarPolicy("3".to_string()))
        );
        assert!("0".parse::<WarPolicy>().is_err());
    }

    #[test]
    fn test_speed_war_trigger() {
        let seven = Card::new(Rank::Seven, Suit::Hearts);
        let eight = Card::new(Rank::Eight, Suit::Clubs);
        let two = Card::new(Rank::Two, Suit::Clubs);
        let ace = Card::new(Rank::Ace, Suit::Spades);

        let off = RuleSet::new();
        assert!(!off.is_speed_war(&seven, &eight));

        let on = RuleSet::new().with_speed_war(true);
        assert!(on.is_speed_war(&seven, &eight));
        assert!(on.is_speed_war(&ace, &two));
        assert!(!on.is_speed_war(&seven, &seven));
        assert!(!on.is_speed_war(&two, &seven));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            RuleSet::default().to_string(),
            "War Resolution: Standard, Double Deck: No, Speed War: Disabled"
        );
        let rules = RuleSet::new()
            .with_war_policy(WarPolicy::Speed)
            .with_double_deck(true)
            .with_speed_war(true);
        assert_eq!(
            rules.to_string(),
            "War Resolution: Speed, Double Deck: Yes, Speed War: Enabled"
        );
    }

    #[test]
    fn test_serialization() {
        let rules = RuleSet::new().with_war_policy(WarPolicy::Double);
        let json = serde_json::to_string(&rules).unwrap();
        let deserialized: RuleSet = serde_json::from_str(&json).unwrap();
        assert_eq!(rules, deserialized);
    }
}
