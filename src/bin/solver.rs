use bloxorz_search::{
    bloxorz::{BloxorzHeuristic, BloxorzProblem, Board, Direction},
    config::{SolverConfig, SolverSettings, TimeLimit},
    search::{validate, SearchEngineName, SearchResult, Verbosity},
};
use clap::Parser;
use std::{path::PathBuf, process::ExitCode};
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(version)]
/// Solve every Bloxorz board in a directory with one or more search engines.
struct Cli {
    #[arg(help = "Directory containing the *.blx board files", id = "BOARDS_DIR")]
    boards_dir: PathBuf,
    #[arg(
        value_enum,
        help = "A search engine to run, may be given multiple times \
        [default: bfs-multi-prune, astar-multi-prune, astar]",
        short = 'e',
        long = "engine",
        id = "ENGINE"
    )]
    engines: Vec<SearchEngineName>,
    #[arg(
        value_enum,
        help = "The heuristic used by the A* engines [default: split-distance]",
        long = "heuristic",
        id = "HEURISTIC"
    )]
    heuristic: Option<BloxorzHeuristic>,
    #[arg(
        help = "Time limit per board and engine, e.g. 20s or 1m 30s, or none \
        [default: 20s]",
        short = 't',
        long = "time-limit",
        id = "TIME_LIMIT"
    )]
    time_limit: Option<TimeLimit>,
    #[arg(
        value_enum,
        help = "The verbosity level [default: normal]",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY"
    )]
    verbosity: Option<Verbosity>,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
    #[arg(
        help = "A TOML file with default settings, command line flags take precedence",
        long = "config",
        id = "CONFIG"
    )]
    config: Option<PathBuf>,
}

impl Cli {
    fn overrides(&self) -> SolverConfig {
        SolverConfig {
            engines: (!self.engines.is_empty()).then(|| self.engines.clone()),
            heuristic: self.heuristic,
            time_limit: self.time_limit,
            verbosity: self.verbosity,
            colour: self.colour.then_some(true),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let file_config = match &cli.config {
        Some(path) => match SolverConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => SolverConfig::default(),
    };
    let settings = file_config.override_with(cli.overrides()).resolve();

    let level: tracing::Level = settings.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(settings.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let boards = match Board::load_dir(&cli.boards_dir) {
        Ok(boards) => boards,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    if boards.is_empty() {
        warn!("no board files found in {}", cli.boards_dir.display());
    }

    for board in boards {
        solve(board, &settings);
    }
    println!();
    ExitCode::SUCCESS
}

fn solve(board: Board, settings: &SolverSettings) {
    info!("loading board file {}", board.name());
    let problem = BloxorzProblem::new(board).with_heuristic(settings.heuristic);
    let name = problem.board().name();

    for engine_name in &settings.engines {
        let description = engine_name.description();
        let mut engine = engine_name.create(&problem, settings.verbosity);
        match engine.search(settings.time_limit.duration()) {
            SearchResult::Success(path) => {
                let moves: Vec<Direction> = path.actions().copied().collect();
                if let Err(e) = validate(&problem, &moves) {
                    error!("{} returned an invalid solution: {}", description, e);
                }
                println!(
                    "For board {} using {}, found solution with length {} using {} expansions",
                    name,
                    description,
                    moves.len(),
                    engine.num_expanded()
                );
                info!(
                    "solution: {}",
                    moves.iter().map(|m| m.to_string()).collect::<String>()
                );
            }
            SearchResult::Exhausted => {
                println!(
                    "For board {}, found no solution using {} after {} expansions",
                    name,
                    description,
                    engine.num_expanded()
                );
            }
            SearchResult::TimeLimitExceeded => {
                println!(
                    "For board {}, {} ran out of time ({}) after {} expansions",
                    name,
                    description,
                    settings.time_limit,
                    engine.num_expanded()
                );
            }
        }
    }
}
