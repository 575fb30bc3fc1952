//! CLI for maze generation and solving

use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use perfect_maze::{parse_dimensions, render_maze, render_solution, solve, Grid, MazeGenerator};

/// Generate a perfect maze and show the way through it
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze width in cells. Asked on stdin if not given.
    #[arg(long, allow_hyphen_values = true)]
    width: Option<String>,

    /// Maze height in cells. Asked on stdin if not given.
    #[arg(long, allow_hyphen_values = true)]
    height: Option<String>,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Only print the maze, do not solve it
    #[arg(long)]
    maze_only: bool,
}

/// Print `prompt` and read one line from stdin
fn ask(prompt: &str) -> anyhow::Result<String> {
    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", prompt)?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .with_context(|| format!("Failed to read answer to `{}`", prompt.trim()))?;
    Ok(line)
}

/// Read dimensions, print maze and solution
fn main() -> anyhow::Result<()> {
    if std::env::var("MAZE_LOG").is_ok() {
        let env = env_logger::Env::new()
            .filter("MAZE_LOG")
            .write_style("MAZE_LOG_STYLE");
        env_logger::init_from_env(env);
    }

    let args = Args::parse();
    log::debug!("Arguments: {:?}", args);

    let width = match args.width {
        Some(width) => width,
        None => ask("Enter width: ")?,
    };
    let height = match args.height {
        Some(height) => height,
        None => ask("Enter height: ")?,
    };
    let (width, height) = parse_dimensions(&width, &height)?;

    let mut grid = Grid::new(width, height)?;
    let mut gen = MazeGenerator::new(args.seed);
    gen.generate(&mut grid);
    print!("{}", render_maze(&grid));

    if args.maze_only {
        return Ok(());
    }

    println!("\nThe way through the maze");
    let solution = solve(&mut grid).context("No way from entry to exit")?;
    print!("{}", render_solution(&grid));
    solution.print_report();
    Ok(())
}
