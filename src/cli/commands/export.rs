//! Export command - solved-position table for every reachable state

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::{
    board::Player,
    cli::output,
    selector,
    tree::{self, ReachableState},
};

#[derive(Parser, Debug)]
#[command(about = "Export the solved-position table")]
pub struct ExportArgs {
    /// Output file
    pub output: PathBuf,

    /// Output format (`csv` or `json`)
    #[arg(long, short = 'f', default_value = "csv")]
    pub format: String,
}

/// One solved position: the side to move and its optimal play
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolvedPosition {
    pub board: String,
    pub to_move: String,
    pub best_move: usize,
    pub score: i32,
}

/// Solve every reachable non-terminal position, X opening.
fn solve_all() -> crate::Result<Vec<SolvedPosition>> {
    let states: Vec<ReachableState> = tree::reachable_states(Player::X)
        .into_iter()
        .filter(|state| !state.is_terminal())
        .collect();

    let pb = output::create_solve_progress(states.len() as u64);
    let mut solved = Vec::with_capacity(states.len());

    for state in states {
        let mover = state.to_move;
        let values = selector::evaluate_moves(&state.board, mover, mover.opponent())?;
        let (best_move, score) = values
            .into_iter()
            .fold(None, |best: Option<(usize, i32)>, (pos, value)| match best {
                Some((_, best_value)) if value <= best_value => best,
                _ => Some((pos, value)),
            })
            .expect("non-terminal position always has a legal move");

        solved.push(SolvedPosition {
            board: state.board.encode(),
            to_move: mover.to_string(),
            best_move,
            score,
        });
        pb.inc(1);
    }
    pb.finish();

    Ok(solved)
}

fn write_csv(path: &PathBuf, solved: &[SolvedPosition]) -> crate::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in solved {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

fn write_json(path: &PathBuf, solved: &[SolvedPosition]) -> crate::Result<()> {
    let file = std::fs::File::create(path)?;
    serde_json::to_writer_pretty(file, solved)?;
    Ok(())
}

pub fn execute(args: ExportArgs) -> Result<()> {
    let solved = solve_all()?;

    match args.format.to_lowercase().as_str() {
        "csv" => write_csv(&args.output, &solved)?,
        "json" => write_json(&args.output, &solved)?,
        other => {
            return Err(anyhow::anyhow!(
                "Unknown export format: '{other}'. Supported: csv, json"
            ));
        }
    }

    output::print_section("Export");
    output::print_kv("positions", &solved.len().to_string());
    output::print_kv("file", &args.output.display().to_string());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("solved.csv");

        let solved = vec![
            SolvedPosition {
                board: ".........".to_string(),
                to_move: "X".to_string(),
                best_move: 0,
                score: 0,
            },
            SolvedPosition {
                board: "OO.XX....".to_string(),
                to_move: "O".to_string(),
                best_move: 2,
                score: 10,
            },
        ];
        write_csv(&path, &solved).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let read: Vec<SolvedPosition> = reader
            .deserialize()
            .collect::<std::result::Result<_, _>>()
            .unwrap();
        assert_eq!(read.len(), 2);
        assert_eq!(read[1].board, "OO.XX....");
        assert_eq!(read[1].best_move, 2);
        assert_eq!(read[1].score, 10);
    }

    #[test]
    fn test_json_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("solved.json");

        let solved = vec![SolvedPosition {
            board: "X........".to_string(),
            to_move: "O".to_string(),
            best_move: 4,
            score: 0,
        }];
        write_json(&path, &solved).unwrap();

        let file = std::fs::File::open(&path).unwrap();
        let read: Vec<SolvedPosition> = serde_json::from_reader(file).unwrap();
        assert_eq!(read.len(), 1);
        assert_eq!(read[0].best_move, 4);
    }
}
