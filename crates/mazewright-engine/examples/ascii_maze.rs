//! ASCII maze: generate a maze on the worker thread and print it.
//!
//! Demonstrates:
//!   1. Configuring a `Generator` with a fixed seed and algorithm
//!   2. Streaming progress events while the worker carves
//!   3. Collecting the published `Maze` and rendering it from wall flags
//!
//! Run with:
//!   cargo run --example ascii_maze -- [width] [height] [dfs|fifo|random]
//!
//! Set `RUST_LOG=debug` to see the generator's log output.

use mazewright_carve::{Algorithm, FrontierOrder};
use mazewright_core::Direction;
use mazewright_engine::{GenerationRequest, Generator, GeneratorConfig, Maze, ProgressGranularity};
use tracing_subscriber::EnvFilter;

// ─── Defaults ───────────────────────────────────────────────────

const WIDTH: u32 = 24;
const HEIGHT: u32 = 12;
const SEED: u64 = 2024;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let width = args.next().map(|s| s.parse()).transpose()?.unwrap_or(WIDTH);
    let height = args.next().map(|s| s.parse()).transpose()?.unwrap_or(HEIGHT);
    let algorithm = match args.next().as_deref() {
        None | Some("dfs") => Algorithm::DepthFirst,
        Some("fifo") => Algorithm::Frontier(FrontierOrder::Fifo),
        Some("random") => Algorithm::Frontier(FrontierOrder::Random),
        Some(other) => return Err(format!("unknown algorithm {other:?}").into()),
    };

    let mut generator = Generator::new(GeneratorConfig {
        seed: Some(SEED),
        algorithm,
        progress: ProgressGranularity::PercentChange,
        ..GeneratorConfig::default()
    })?;

    let handle = generator.generate(GenerationRequest::new(width, height))?;
    let summary = handle.wait_with(|p| {
        if p % 25 == 0 {
            eprintln!("  carving... {p:>3}%");
        }
    })?;
    let maze = generator.finish()?;

    print!("{}", render(maze));
    println!(
        "{algorithm}: {}x{} cells, {} steps, {} backtracks, {} us",
        maze.width(),
        maze.height(),
        summary.metrics.stats.steps,
        summary.metrics.stats.backtracks,
        summary.metrics.elapsed_us,
    );
    Ok(())
}

// ─── Rendering ──────────────────────────────────────────────────
//
// Each cell is drawn as a 3-character body plus its east wall; each row is
// followed by a line of south walls. `S` marks the origin, `E` the exit.

fn render(maze: &Maze) -> String {
    let mut out = String::new();
    out.push('+');
    for _ in 0..maze.width() {
        out.push_str("---+");
    }
    out.push('\n');

    for row in 0..maze.height() {
        let mut body = String::from("|");
        let mut floor = String::from("+");
        for col in 0..maze.width() {
            let Some(cell) = maze.cell_at(row, col) else {
                continue;
            };
            let mark = if cell.is_origin() {
                'S'
            } else if cell.is_exit() {
                'E'
            } else {
                ' '
            };
            body.push(' ');
            body.push(mark);
            body.push(' ');
            body.push(if cell.has_wall(Direction::East) { '|' } else { ' ' });
            floor.push_str(if cell.has_wall(Direction::South) {
                "---"
            } else {
                "   "
            });
            floor.push('+');
        }
        out.push_str(&body);
        out.push('\n');
        out.push_str(&floor);
        out.push('\n');
    }
    out
}
