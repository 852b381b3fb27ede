//! Warzone - headless match runner
//!
//! Plays seeded games of War to completion and prints the results.

use anyhow::{bail, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use warzone::{Game, GameBuilder, OutcomeKind, RuleSet, WarPolicy};

#[derive(Parser, Debug)]
#[command(name = "warzone")]
#[command(about = "Warzone: The Battle of Cards - headless match runner", long_about = None)]
struct Cli {
    /// Player 1 name
    #[arg(long, default_value = "Player 1")]
    p1_name: String,

    /// Player 2 name
    #[arg(long, default_value = "Player 2")]
    p2_name: String,

    /// War resolution policy: standard/1, double/2, quadruple/4, speed
    #[arg(long, default_value = "standard")]
    policy: WarPolicy,

    /// Play with two decks (104 cards)
    #[arg(long)]
    double_deck: bool,

    /// Adjacent ranks in a round also start a war
    #[arg(long)]
    speed_war: bool,

    /// Random seed for deterministic games
    #[arg(long)]
    seed: Option<u64>,

    /// Number of games to play
    #[arg(long, default_value_t = 1)]
    games: u32,

    /// Give up on a game after this many rounds and wars
    #[arg(long, default_value_t = 10_000)]
    max_turns: u32,

    /// Print every round (also enables debug logging)
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "warzone=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    if cli.games == 0 {
        bail!("--games must be at least 1");
    }

    let rules = RuleSet::new()
        .with_war_policy(cli.policy)
        .with_double_deck(cli.double_deck)
        .with_speed_war(cli.speed_war);

    let mut builder = GameBuilder::new()
        .player_names(cli.p1_name.clone(), cli.p2_name.clone())
        .rules(rules);
    if let Some(seed) = cli.seed {
        builder = builder.seed(seed);
    }
    let mut game = builder.build();

    println!("{rules}");

    let mut wins = [0u32; 2];
    let mut unfinished = 0u32;
    for index in 1..=cli.games {
        match play_to_end(&mut game, cli.max_turns, cli.verbose)? {
            Some(winner) => {
                wins[winner] += 1;
                println!(
                    "Game {index} (seed {}): {} wins after {} rounds and {} wars",
                    game.seed(),
                    name_of(&game, winner),
                    game.rounds_played(),
                    game.wars_fought(),
                );
            }
            None => {
                unfinished += 1;
                let sizes: Vec<String> = game.players().map(|(_, p)| p.to_string()).collect();
                println!(
                    "Game {index} (seed {}): no winner after {} turns ({})",
                    game.seed(),
                    cli.max_turns,
                    sizes.join(", "),
                );
            }
        }
        if index < cli.games {
            game = game.rematch(rules);
        }
    }

    if cli.games > 1 {
        println!(
            "{}: {} wins, {}: {} wins, {} unfinished",
            cli.p1_name, wins[0], cli.p2_name, wins[1], unfinished
        );
    }

    Ok(())
}

/// Shuffle, deal and play until someone holds every card.
///
/// Returns the winning seat index, or `None` if `max_turns` ran out.
fn play_to_end(game: &mut Game, max_turns: u32, verbose: bool) -> Result<Option<usize>> {
    game.shuffle();
    game.deal()?;

    for _ in 0..max_turns {
        let winner = if game.is_war_in_progress() {
            game.resolve_war()?
        } else {
            game.play_round()?
        };

        if verbose {
            report(game);
        }
        if let Some(seat) = winner {
            return Ok(Some(seat.index()));
        }
    }
    Ok(None)
}

fn report(game: &Game) {
    let Some(outcome) = game.last_outcome() else {
        return;
    };
    let cards: Vec<String> = outcome
        .placements
        .iter()
        .map(|p| format!("{}: {}", name_of(game, p.player.index()), p.card))
        .collect();

    match (outcome.kind, outcome.winner) {
        (OutcomeKind::Tie, _) => println!("  [{}] It's a tie! War!", cards.join(" | ")),
        (OutcomeKind::Elimination { .. }, Some(w)) => println!(
            "  {} wins the war by elimination ({} cards)",
            name_of(game, w.index()),
            outcome.cards_awarded
        ),
        (_, Some(w)) => println!(
            "  [{}] {} wins {} cards",
            cards.join(" | "),
            name_of(game, w.index()),
            outcome.cards_awarded
        ),
        (_, None) => {}
    }
}

fn name_of(game: &Game, seat: usize) -> &str {
    game.players()
        .nth(seat)
        .map(|(_, p)| p.name())
        .unwrap_or("?")
}
