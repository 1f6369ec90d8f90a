use bloxorz_search::{
    bloxorz::{parse_moves, BloxorzProblem, Board},
    search::validate,
};
use clap::Parser;
use std::{path::PathBuf, process::ExitCode};

#[derive(Parser)]
#[command(version)]
/// Check that a sequence of moves solves a Bloxorz board.
struct Cli {
    #[arg(help = "The board file")]
    board: PathBuf,
    #[arg(help = "The moves to replay, e.g. RULDRRULDR")]
    moves: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let board = match Board::from_path(&cli.board) {
        Ok(board) => board,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    let moves = match parse_moves(&cli.moves) {
        Ok(moves) => moves,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let problem = BloxorzProblem::new(board);
    match validate(&problem, &moves) {
        Ok(path) => {
            println!("Plan is valid, {} moves with cost {}", path.len(), path.cost());
            println!("{}", path);
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("Plan is invalid: {}", e);
            ExitCode::FAILURE
        }
    }
}
