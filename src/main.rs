use std::io::{self, Write};

use clap::Parser;
use maze_engine::{generate_maze, generate_maze_with_rng, GeneratedMaze, MazeResult};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

mod preview;

// 640x480 viewport, 32px tiles, one tile of padding on each side.
const DEFAULT_ROWS: usize = 13;
const DEFAULT_COLS: usize = 18;

/// Generate a perfect maze and preview it in the terminal.
#[derive(Parser, Debug)]
#[command(name = "maze", version)]
struct Cli {
    /// Number of maze rows
    #[arg(long, env = "MAZE_ROWS", default_value_t = DEFAULT_ROWS)]
    rows: usize,

    /// Number of maze columns
    #[arg(long, env = "MAZE_COLS", default_value_t = DEFAULT_COLS)]
    cols: usize,

    /// Seed for a reproducible maze
    #[arg(long, env = "MAZE_SEED")]
    seed: Option<u64>,

    /// Size the maze to the terminal, ignoring --rows/--cols
    #[arg(long)]
    fit: bool,

    /// Print the maze as JSON instead of drawing it
    #[arg(long)]
    json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let (rows, cols) = if cli.fit {
        preview::fit_terminal()?
    } else {
        (cli.rows, cli.cols)
    };

    let maze = build_checked(rows, cols, cli.seed)?;
    info!(
        rows,
        cols,
        seed = ?cli.seed,
        start = ?maze.start(),
        end = ?maze.end(),
        path = ?maze.path_len(),
        "generated maze"
    );

    let mut stdout = io::stdout().lock();
    if cli.json {
        serde_json::to_writer(&mut stdout, &maze)?;
        writeln!(stdout)?;
        stdout.flush()
    } else {
        preview::draw(&mut stdout, &maze)
    }
}

/// Generates and structurally checks a maze. Bad dimensions map to
/// `InvalidInput`; a failed check maps to `Other`.
fn build_checked(rows: usize, cols: usize, seed: Option<u64>) -> io::Result<GeneratedMaze> {
    let maze =
        build(rows, cols, seed).map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;
    maze.check_invariants().map_err(io::Error::other)?;
    debug!("maze passed structural checks");
    Ok(maze)
}

fn build(rows: usize, cols: usize, seed: Option<u64>) -> MazeResult<GeneratedMaze> {
    match seed {
        Some(seed) => {
            debug!(seed, "using seeded rng");
            generate_maze_with_rng(rows, cols, &mut ChaCha8Rng::seed_from_u64(seed))
        }
        None => generate_maze(rows, cols),
    }
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_dimensions_are_invalid_input() {
        let err = build_checked(0, 3, None).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(err.to_string().contains("0x3"), "{err}");
    }

    #[test]
    fn seeded_build_matches_library_and_passes_checks() {
        let maze = build_checked(6, 9, Some(17)).unwrap();
        let expected =
            generate_maze_with_rng(6, 9, &mut ChaCha8Rng::seed_from_u64(17)).unwrap();
        assert_eq!(maze, expected);
    }
}
