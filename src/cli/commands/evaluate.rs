//! Evaluate command - play the engine against a baseline opponent

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};
use serde::{Deserialize, Serialize};

use crate::{
    board::{Board, Player},
    cli::{commands::parse_player_token, output},
    lines::{self, GameOutcome},
    selector::Selector,
};

#[derive(Parser, Debug)]
#[command(about = "Play the engine against a baseline opponent")]
pub struct EvaluateArgs {
    /// Opponent policy (`random` or `engine`)
    #[arg(long, short = 'o', default_value = "random")]
    pub opponent: String,

    /// Number of evaluation games
    #[arg(long, short = 'g', default_value_t = 1000)]
    pub games: usize,

    /// Mark the engine plays (`x` or `o`); X always moves first
    #[arg(long, default_value = "x")]
    pub mark: String,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Export results to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

/// Aggregated results of an evaluation run, from the engine's perspective
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub total_games: usize,
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
    pub win_rate: f64,
    pub draw_rate: f64,
    pub loss_rate: f64,
}

impl EvaluationResult {
    pub fn new(total_games: usize, wins: usize, draws: usize, losses: usize) -> Self {
        let rate = |n: usize| {
            if total_games > 0 {
                n as f64 / total_games as f64
            } else {
                0.0
            }
        };
        Self {
            total_games,
            wins,
            draws,
            losses,
            win_rate: rate(wins),
            draw_rate: rate(draws),
            loss_rate: rate(losses),
        }
    }

    /// Save result to JSON file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> crate::Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load result from JSON file
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> crate::Result<Self> {
        let file = std::fs::File::open(path)?;
        let result = serde_json::from_reader(file)?;
        Ok(result)
    }
}

/// Move policy for the non-engine side
enum OpponentPolicy {
    Random(StdRng),
    Engine(Selector),
}

impl OpponentPolicy {
    fn choose(&mut self, board: &Board) -> crate::Result<Option<usize>> {
        match self {
            OpponentPolicy::Random(rng) => Ok(board.legal_moves().choose(rng).copied()),
            OpponentPolicy::Engine(selector) => selector.best_move(board),
        }
    }
}

/// Play one game from the empty board; X moves first.
fn play_game(engine: &Selector, opponent: &mut OpponentPolicy) -> crate::Result<GameOutcome> {
    let mut board = Board::empty();
    let mut to_move = Player::X;

    loop {
        if let Some(outcome) = lines::outcome(&board) {
            return Ok(outcome);
        }

        let pos = if to_move == engine.ai() {
            engine.best_move(&board)?
        } else {
            opponent.choose(&board)?
        }
        .expect("non-terminal board always has a legal move");

        board.apply(pos, to_move)?;
        to_move = to_move.opponent();
    }
}

pub fn execute(args: EvaluateArgs) -> Result<()> {
    let engine_mark = parse_player_token(&args.mark, "--mark")?;
    let engine = Selector::new(engine_mark);

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut opponent = match args.opponent.to_lowercase().as_str() {
        "random" => OpponentPolicy::Random(StdRng::seed_from_u64(seed)),
        "engine" => OpponentPolicy::Engine(Selector::new(engine_mark.opponent())),
        other => {
            return Err(anyhow::anyhow!(
                "Unknown opponent type: '{other}'. Supported: random, engine"
            ));
        }
    };

    output::print_section("Evaluation Configuration");
    output::print_kv("opponent", &args.opponent);
    output::print_kv("engine plays", &engine_mark.to_string());
    output::print_kv("games", &args.games.to_string());
    if matches!(opponent, OpponentPolicy::Random(_)) {
        output::print_kv("seed", &seed.to_string());
    }

    let pb = output::create_game_progress(args.games as u64);
    let mut wins = 0;
    let mut draws = 0;
    let mut losses = 0;

    for game_num in 0..args.games {
        match play_game(&engine, &mut opponent)? {
            GameOutcome::Win(winner) if winner == engine_mark => wins += 1,
            GameOutcome::Win(_) => losses += 1,
            GameOutcome::Draw => draws += 1,
        }
        pb.set_position(game_num as u64 + 1);
        pb.set_message(format!("W:{wins} D:{draws} L:{losses}"));
    }
    pb.finish_with_message(format!("W:{wins} D:{draws} L:{losses}"));

    let result = EvaluationResult::new(args.games, wins, draws, losses);

    output::print_section("Evaluation Results");
    output::print_kv("total games", &result.total_games.to_string());
    output::print_kv(
        "wins",
        &format!("{} ({:.1}%)", result.wins, result.win_rate * 100.0),
    );
    output::print_kv(
        "draws",
        &format!("{} ({:.1}%)", result.draws, result.draw_rate * 100.0),
    );
    output::print_kv(
        "losses",
        &format!("{} ({:.1}%)", result.losses, result.loss_rate * 100.0),
    );

    if let Some(export_path) = &args.export {
        result.save(export_path)?;
        println!("\nResults exported to: {}", export_path.display());
    }

    Ok(())
}
