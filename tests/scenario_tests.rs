//! Scripted game scenarios.
//!
//! Hands are set up through an unshuffled deck: dealing is round-robin, so
//! deck card `2i` goes to the first player and `2i + 1` to the second.

use warzone::{
    Card, Deck, Game, GameBuilder, GamePhase, OutcomeKind, PlayerId, Rank, RuleSet, Suit,
    WarError, WarPolicy,
};

const A: PlayerId = PlayerId::new(0);
const B: PlayerId = PlayerId::new(1);

fn scripted_game(first: &[Card], second: &[Card], rules: RuleSet) -> Game {
    let cards = first
        .iter()
        .zip(second)
        .flat_map(|(&a, &b)| [a, b])
        .collect();
    let mut game = GameBuilder::new()
        .player_names("A", "B")
        .rules(rules)
        .deck(Deck::from_cards(cards))
        .seed(1)
        .build();
    game.deal().unwrap();
    game
}

fn cards(notation: &[&str]) -> Vec<Card> {
    notation.iter().map(|n| n.parse().unwrap()).collect()
}

fn hand(game: &Game, seat: PlayerId) -> Vec<(Rank, Suit)> {
    game.player(seat).unwrap().hand().map(Card::identity).collect()
}

/// The two-round walkthrough: each player wins one round.
#[test]
fn test_end_to_end_two_rounds() {
    let mut game = scripted_game(&cards(&["10H", "2C"]), &cards(&["5D", "AS"]), RuleSet::default());

    assert_eq!(game.play_round(), Ok(None));
    assert_eq!(game.last_outcome().unwrap().winner, Some(A));
    assert_eq!(
        hand(&game, A),
        vec![
            (Rank::Two, Suit::Clubs),
            (Rank::Ten, Suit::Hearts),
            (Rank::Five, Suit::Diamonds),
        ]
    );
    assert_eq!(hand(&game, B), vec![(Rank::Ace, Suit::Spades)]);

    assert_eq!(game.play_round(), Ok(None));
    assert_eq!(game.last_outcome().unwrap().winner, Some(B));
    assert_eq!(
        hand(&game, B),
        vec![(Rank::Ace, Suit::Spades), (Rank::Two, Suit::Clubs)]
    );
    assert_eq!(
        hand(&game, A),
        vec![(Rank::Ten, Suit::Hearts), (Rank::Five, Suit::Diamonds)]
    );
    assert!(!game.is_game_over());
    assert_eq!(game.get_winner(), None);
}

/// Every pair of distinct ranks: the higher card wins exactly the two cards played.
#[test]
fn test_higher_rank_always_wins_round() {
    for &high in &Rank::ALL {
        for &low in Rank::ALL.iter().filter(|&&r| r < high) {
            for (first, second, expected) in [(high, low, A), (low, high, B)] {
                let mut game = scripted_game(
                    &[Card::new(first, Suit::Clubs), Card::new(Rank::Two, Suit::Hearts)],
                    &[Card::new(second, Suit::Clubs), Card::new(Rank::Two, Suit::Spades)],
                    RuleSet::default(),
                );
                game.play_round().unwrap();

                let outcome = game.last_outcome().unwrap();
                assert_eq!(outcome.winner, Some(expected), "{first} vs {second}");
                assert_eq!(outcome.cards_awarded, 2);
                assert_eq!(game.player(expected).unwrap().hand_size(), 3);
                assert!(!game.is_war_in_progress());
            }
        }
    }
}

/// Equal ranks tie regardless of suit.
#[test]
fn test_equal_ranks_always_start_war() {
    for &rank in &Rank::ALL {
        for &suit_a in &Suit::ALL {
            for &suit_b in Suit::ALL.iter().filter(|&&s| s != suit_a) {
                let mut game = scripted_game(
                    &[Card::new(rank, suit_a), Card::new(Rank::Two, Suit::Hearts)],
                    &[Card::new(rank, suit_b), Card::new(Rank::Three, Suit::Hearts)],
                    RuleSet::default(),
                );
                assert_eq!(game.play_round(), Ok(None));
                assert!(game.is_war_in_progress());
                assert_eq!(game.last_outcome().unwrap().winner, None);
                assert_eq!(game.phase(), GamePhase::WarPending);
            }
        }
    }
}

/// A tie must be resolved before another round can be played.
#[test]
fn test_war_cannot_be_skipped() {
    let mut game = scripted_game(
        &cards(&["7H", "KC", "4H"]),
        &cards(&["7C", "2D", "3S"]),
        RuleSet::default(),
    );
    game.play_round().unwrap();

    for _ in 0..3 {
        assert_eq!(game.play_round(), Err(WarError::WarPending));
    }
    assert_eq!(game.rounds_played(), 1);
    assert_eq!(game.table().card_count(), 2);

    assert_eq!(game.resolve_war(), Ok(Some(A)));
    assert!(!game.is_war_in_progress());
    assert!(game.is_game_over());
}

/// One face down: with two cards each entering the war, the face-up card
/// decides and the loser is emptied.
#[test]
fn test_standard_war_empties_loser() {
    let mut game = scripted_game(
        &cards(&["7H", "3C", "9H"]),
        &cards(&["7S", "4D", "2C"]),
        RuleSet::default(),
    );
    game.play_round().unwrap();
    assert_eq!(game.player(A).unwrap().hand_size(), 2);
    assert_eq!(game.player(B).unwrap().hand_size(), 2);

    assert_eq!(game.resolve_war(), Ok(Some(A)));

    let outcome = game.last_outcome().unwrap();
    assert_eq!(outcome.kind, OutcomeKind::War { escalations: 1 });
    // 2 tied cards + 2 face down + 2 face up
    assert_eq!(outcome.cards_awarded, 6);
    assert_eq!(game.player(B).unwrap().hand_size(), 0);
    assert!(game.is_game_over());
}

/// A player who cannot afford the war loses the pot without playing.
#[test]
fn test_elimination_by_insufficient_cards() {
    // After a first round A holds 2 cards and B holds 4
    let mut game = scripted_game(
        &cards(&["2H", "7H", "QC"]),
        &cards(&["KD", "7S", "3D"]),
        RuleSet::new().with_war_policy(WarPolicy::Double),
    );
    game.play_round().unwrap();
    assert_eq!(game.last_outcome().unwrap().winner, Some(B));

    game.play_round().unwrap();
    assert!(game.is_war_in_progress());
    let a_before = hand(&game, A);
    assert_eq!(a_before.len(), 1);

    game.resolve_war().unwrap();

    let outcome = game.last_outcome().unwrap();
    assert_eq!(outcome.kind, OutcomeKind::Elimination { escalations: 0 });
    assert_eq!(outcome.winner, Some(B));
    assert_eq!(hand(&game, A), a_before);
    assert_eq!(game.player(B).unwrap().hand_size(), 5);
}

/// The speed-war trigger only fires on the opening comparison.
#[test]
fn test_speed_trigger_with_speed_policy() {
    let rules = RuleSet::new()
        .with_war_policy(WarPolicy::Speed)
        .with_speed_war(true);
    let mut game = scripted_game(&cards(&["8H", "9C", "2S"]), &cards(&["7D", "8S", "3S"]), rules);

    game.play_round().unwrap();
    assert!(game.is_war_in_progress());

    // 9 vs 8 is adjacent but decides the war
    game.resolve_war().unwrap();
    let outcome = game.last_outcome().unwrap();
    assert_eq!(outcome.kind, OutcomeKind::War { escalations: 1 });
    assert_eq!(outcome.winner, Some(A));
    assert_eq!(outcome.cards_awarded, 4);
}

/// Same deck, same calls, same result.
#[test]
fn test_scripted_game_is_deterministic() {
    let run = || {
        let mut game = scripted_game(
            &cards(&["7H", "2C", "QH", "3C", "AH", "9D"]),
            &cards(&["7S", "2D", "QS", "4D", "5S", "9S"]),
            RuleSet::default(),
        );
        let mut history = Vec::new();
        for _ in 0..50 {
            let result = if game.is_war_in_progress() {
                game.resolve_war()
            } else {
                game.play_round()
            };
            history.push((result, game.snapshot()));
            if game.is_game_over() {
                break;
            }
        }
        history
    };

    assert_eq!(run(), run());
}
