//! Play command - interactive game against the engine

use anyhow::Result;
use clap::Parser;

use crate::{
    adapters::{ConsoleRenderer, StdinMoveSource},
    cli::commands::parse_player_token,
    controller::GameController,
    lines::GameOutcome,
};

#[derive(Parser, Debug)]
#[command(about = "Play an interactive game against the engine")]
pub struct PlayArgs {
    /// Mark the human plays (`x` or `o`); X always moves first
    #[arg(long, short = 'm', default_value = "x")]
    pub mark: String,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let human = parse_player_token(&args.mark, "--mark")?;
    let ai = human.opponent();

    println!("You play {human}, the engine plays {ai}. X moves first.");
    println!("Cells are numbered 0-8, row by row.");

    let mut session = GameController::new(ai, ConsoleRenderer, StdinMoveSource::new());
    match session.run()? {
        GameOutcome::Win(winner) if winner == human => println!("You win."),
        GameOutcome::Win(_) => println!("The engine wins."),
        GameOutcome::Draw => println!("Draw."),
    }

    Ok(())
}
