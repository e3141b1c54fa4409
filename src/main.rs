use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use crossterm::style::{style, Stylize};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use npuzzle::format::{self, Puzzle};
use npuzzle::{scramble, solve, Board, Move, SearchConfig, SearchOutcome};

#[derive(Parser)]
#[command(name = "npuzzle")]
#[command(version, about = "Optimal sliding tile puzzle solver", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). Logs go to stderr.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a puzzle read from a file or stdin
    Solve(SolveArgs),

    /// Print a random solvable puzzle in input format
    Scramble(ScrambleArgs),
}

#[derive(Args)]
struct SolveArgs {
    /// Puzzle file; reads stdin when omitted
    input: Option<PathBuf>,

    /// Give up after this many node expansions
    #[arg(long)]
    max_expansions: Option<usize>,

    /// Skip the parity precheck and rely on exhausting the search
    #[arg(long)]
    no_parity_check: bool,

    /// Draw every intermediate board on stderr
    #[arg(long)]
    show: bool,
}

#[derive(Args)]
struct ScrambleArgs {
    /// Board side length
    #[arg(long, default_value_t = 3)]
    size: usize,

    /// Number of random blank moves away from the goal
    #[arg(long, default_value_t = 40, conflicts_with = "shuffle")]
    steps: usize,

    /// Draw a uniformly random solvable arrangement instead of walking
    #[arg(long)]
    shuffle: bool,

    /// Goal blank index; the last cell when omitted
    #[arg(long)]
    blank: Option<usize>,

    /// RNG seed for reproducible puzzles
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Solve(args) => run_solve(args),
        Commands::Scramble(args) => run_scramble(args),
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_solve(args: SolveArgs) -> Result<ExitCode> {
    let puzzle = match &args.input {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
            format::read_puzzle(file)
        }
        None => format::read_puzzle(io::stdin().lock()),
    }
    .context("failed to load puzzle")?;

    let mut config = SearchConfig::new();
    if let Some(limit) = args.max_expansions {
        config = config.with_max_expansions(limit);
    }
    if args.no_parity_check {
        config = config.without_parity_precheck();
    }

    match solve(&puzzle.initial, &puzzle.goal, &config)? {
        SearchOutcome::Solved(solution) => {
            io::stdout()
                .write_all(format::render_moves(&solution.moves).as_bytes())
                .context("failed to write solution")?;
            if args.show {
                show_steps(&puzzle.initial, &solution.moves)?;
            }
            Ok(ExitCode::SUCCESS)
        }
        SearchOutcome::Unsolvable { .. } => {
            eprintln!("unsolvable");
            Ok(ExitCode::from(2))
        }
        SearchOutcome::LimitReached { stats } => {
            eprintln!("gave up after {} expansions", stats.expanded);
            Ok(ExitCode::from(3))
        }
    }
}

fn run_scramble(args: ScrambleArgs) -> Result<ExitCode> {
    let goal = match args.blank {
        Some(blank) => Board::with_blank_at(args.size, blank),
        None => Board::solved(args.size),
    }
    .context("invalid goal")?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let initial = if args.shuffle {
        scramble::shuffle_solvable(&goal, &mut rng)
    } else {
        scramble::random_walk(&goal, args.steps, &mut rng)
    };

    let text = format::render_puzzle(&Puzzle { initial, goal })?;
    io::stdout()
        .write_all(text.as_bytes())
        .context("failed to write puzzle")?;
    Ok(ExitCode::SUCCESS)
}

fn show_steps(initial: &Board, moves: &[Move]) -> Result<()> {
    let mut err = io::stderr().lock();
    let mut board = initial.clone();
    writeln!(err, "start")?;
    write_board(&mut err, &board, None)?;
    for (i, &m) in moves.iter().enumerate() {
        let from = board.blank_location();
        if !board.apply_move(m) {
            bail!("move {} ({m}) leaves the board", i + 1);
        }
        writeln!(err, "\n{}. {m}", i + 1)?;
        write_board(&mut err, &board, board.get(from))?;
    }
    Ok(())
}

/// Blank drawn reversed, the tile that just slid in bold.
fn write_board(out: &mut impl Write, board: &Board, moved: Option<u8>) -> Result<()> {
    let width = (board.cells().len() - 1).to_string().len();
    for row in board.rows() {
        let cells: Vec<String> = row
            .iter()
            .map(|&v| {
                let text = format!("{v:>width$}");
                if v == 0 {
                    style(text).reverse().to_string()
                } else if Some(v) == moved {
                    style(text).bold().to_string()
                } else {
                    text
                }
            })
            .collect();
        writeln!(out, "{}", cells.join(" "))?;
    }
    Ok(())
}
