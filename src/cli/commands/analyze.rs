//! Analyze command - score every legal move of a position

use anyhow::Result;
use clap::Parser;

use crate::{
    board::Board,
    cli::{commands::parse_player_token, output},
    lines::{self, GameOutcome},
    selector::Selector,
};

#[derive(Parser, Debug)]
#[command(about = "Score every legal move of a position")]
pub struct AnalyzeArgs {
    /// Board as 9 cell characters ('.', 'X', 'O'), row-major
    #[arg(long, short = 'b', default_value = ".........")]
    pub board: String,

    /// Mark whose moves are scored (`x` or `o`)
    #[arg(long, short = 'm', default_value = "x")]
    pub mark: String,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let board = Board::from_string(&args.board)?;
    let ai = parse_player_token(&args.mark, "--mark")?;

    output::print_section(&format!("Position analysis, {ai} to move"));
    println!("{board}");

    match lines::outcome(&board) {
        Some(GameOutcome::Win(winner)) => {
            output::print_kv("outcome", &format!("{winner} has already won"));
            return Ok(());
        }
        Some(GameOutcome::Draw) => {
            output::print_kv("outcome", "draw (board full)");
            return Ok(());
        }
        None => {}
    }

    let selector = Selector::new(ai);
    for (pos, value) in selector.evaluate_moves(&board)? {
        output::print_kv(&format!("move {pos}"), &value.to_string());
    }

    let winning = lines::winning_moves(&board, ai);
    if !winning.is_empty() {
        output::print_kv(
            "immediate wins",
            &winning
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", "),
        );
    }

    match selector.best_move(&board)? {
        Some(pos) => output::print_kv("best move", &pos.to_string()),
        None => output::print_kv("best move", "none (board full)"),
    }

    Ok(())
}
