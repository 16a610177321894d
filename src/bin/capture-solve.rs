use std::error::Error;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use capture_solver::core::{Board, Stone, Topology};
use capture_solver::error::ConfigError;
use capture_solver::solver::{Hint, Solver, SolverConfig, TerminationPolicy, VerdictRecord};
use capture_solver::store::ResultStore;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "capture-solve", about = "Exhaustive solver for a small-board capture game")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Solve a position and everything reachable from it
    Solve {
        /// Board size: N for a strip, RxC for a grid
        #[arg(long)]
        board_size: Option<String>,

        /// first-capture or no-legal-move-loses
        #[arg(long)]
        policy: Option<String>,

        /// Side to move: black or white
        #[arg(long, default_value = "black")]
        player: String,

        /// Starting cells, e.g. "0,1,0" (empty board if omitted)
        #[arg(long, allow_hyphen_values = true)]
        board: Option<String>,

        /// JSON solver configuration; flags override its fields
        #[arg(long)]
        config: Option<PathBuf>,

        /// Zobrist seed
        #[arg(long)]
        seed: Option<u64>,

        /// Write the verdict table as CSV
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Write a bincode snapshot of the verdict table
        #[arg(long)]
        snapshot: Option<PathBuf>,

        /// Print search statistics as JSON
        #[arg(long)]
        stats: bool,
    },

    /// Query a saved snapshot
    Lookup {
        #[arg(long)]
        snapshot: PathBuf,

        /// Cells of the position, e.g. "1,-1,0"
        #[arg(long, allow_hyphen_values = true)]
        board: String,

        /// Side to move: black or white
        #[arg(long, default_value = "black")]
        player: String,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Solve {
            board_size,
            policy,
            player,
            board,
            config,
            seed,
            csv,
            snapshot,
            stats,
        } => {
            let config = resolve_config(config, board_size, policy, seed)?;
            let player = parse_player(&player)?;
            let board = match board {
                Some(text) => Board::parse(config.topology, &text)?,
                None => Board::empty(config.topology),
            };

            eprintln!(
                "Solving {} board, {} to move, policy {}",
                config.topology, player, config.policy
            );
            let mut solver = Solver::new(config)?;
            let record = solver.solve(&board, player)?;
            eprintln!(
                "Solved {} positions in {:.3}s",
                solver.table().len(),
                solver.stats().time_us as f64 / 1_000_000.0
            );

            print_record(&board, &record);
            if stats {
                println!("{}", serde_json::to_string_pretty(solver.stats())?);
            }

            let store = solver.into_store();
            if let Some(path) = csv {
                store.write_csv(&mut BufWriter::new(File::create(&path)?))?;
                eprintln!("Wrote {} rows to {}", store.len(), path.display());
            }
            if let Some(path) = snapshot {
                store.save(BufWriter::new(File::create(&path)?))?;
                eprintln!("Wrote snapshot to {}", path.display());
            }
        }

        Command::Lookup {
            snapshot,
            board,
            player,
        } => {
            let store = ResultStore::load(BufReader::new(File::open(&snapshot)?))?;
            let board = Board::parse(store.config().topology, &board)?;
            let player = parse_player(&player)?;

            match store.lookup(&board, player) {
                Some(record) => print_record(&board, &record),
                None => {
                    return Err(format!(
                        "position {} with {player} to move is not in {}",
                        board.serialize(),
                        snapshot.display()
                    )
                    .into())
                }
            }
        }
    }

    Ok(())
}

fn resolve_config(
    path: Option<PathBuf>,
    board_size: Option<String>,
    policy: Option<String>,
    seed: Option<u64>,
) -> Result<SolverConfig, Box<dyn Error>> {
    let mut config = match (path, board_size.as_deref()) {
        (Some(path), _) => SolverConfig::from_json(&fs::read_to_string(path)?)?,
        (None, Some(size)) => SolverConfig::new(size.parse::<Topology>()?),
        (None, None) => return Err("either --board-size or --config is required".into()),
    };

    if let Some(size) = board_size {
        config.topology = size.parse()?;
    }
    if let Some(policy) = policy {
        config.policy = policy.parse::<TerminationPolicy>()?;
    }
    if let Some(seed) = seed {
        config.zobrist_seed = seed;
    }
    config.validate()?;
    Ok(config)
}

fn parse_player(text: &str) -> Result<Stone, Box<dyn Error>> {
    match text.parse::<Stone>()? {
        Stone::Empty => Err(ConfigError::InvalidPlayer.into()),
        stone => Ok(stone),
    }
}

fn print_record(board: &Board, record: &VerdictRecord) {
    println!("{board}");
    println!("verdict: {}", record.verdict);
    println!("moves:   {:?}", record.moves.as_slice());
    println!("hints:   {}", Hint::codes(&record.hints(board.len())));
}
