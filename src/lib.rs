//! Generate a perfect maze and find the way through it
//!
//! The maze is carved by randomized depth-first backtracking, which yields
//! a spanning tree over all cells: there is exactly one route between any
//! two cells. The route from the top-left entry to the bottom-right exit is
//! then found by depth-first search.
//!
//! # Examples
//! ```
//! use perfect_maze::{render_solution, solve, Grid, MazeGenerator};
//!
//! let mut grid = Grid::new(8, 5).unwrap();
//! let mut gen = MazeGenerator::new(Some(42));
//! gen.generate(&mut grid);
//! assert_eq!(grid.passage_count(), 8 * 5 - 1);
//!
//! let solution = solve(&mut grid).unwrap();
//! assert_eq!(solution.steps.first(), Some(&grid.entry()));
//! assert_eq!(solution.steps.last(), Some(&grid.exit()));
//! print!("{}", render_solution(&grid));
//! ```
//!
//! ## Rendering
//! ```
//! use perfect_maze::{render_maze, Grid, MazeGenerator};
//!
//! let mut grid = Grid::new(2, 1).unwrap();
//! MazeGenerator::new(Some(0)).generate(&mut grid);
//! assert_eq!(
//!     render_maze(&grid),
//!     "#___#___#\n        |\n#___#___#\n"
//! );
//! ```

use std::fmt::Display;

use thiserror::Error;

pub mod grid;
pub mod maze_generator;
pub mod render;
pub mod solver;

pub use grid::{Cell, Direction, Grid, Point};
pub use maze_generator::MazeGenerator;
pub use render::{render_maze, render_solution};
pub use solver::{solve, MazeSolution};

/// Errors raised when setting up a maze
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MazeError {
    /// Width and height must both be positive integers
    #[error("invalid maze dimensions: width `{width}`, height `{height}` (expected positive integers)")]
    InvalidDimensions { width: String, height: String },
}

impl MazeError {
    pub(crate) fn invalid_dimensions(width: impl Display, height: impl Display) -> Self {
        MazeError::InvalidDimensions {
            width: width.to_string(),
            height: height.to_string(),
        }
    }
}

/// Parse raw width and height input into grid dimensions.
///
/// Surrounding whitespace is ignored. Zero, negative and non-numeric values
/// are rejected with [MazeError::InvalidDimensions], as are dimensions whose
/// cells would not fit into memory addressable by a single allocation.
///
/// # Examples
/// ```
/// use perfect_maze::parse_dimensions;
///
/// assert_eq!(parse_dimensions("12", " 7\n").unwrap(), (12, 7));
/// assert!(parse_dimensions("-3", "7").is_err());
/// assert!(parse_dimensions("ten", "7").is_err());
/// ```
pub fn parse_dimensions(width: &str, height: &str) -> Result<(usize, usize), MazeError> {
    let (width, height) = (width.trim(), height.trim());
    let parse = |value: &str| value.parse::<usize>().ok().filter(|&v| v > 0);
    match (parse(width), parse(height)) {
        (Some(w), Some(h)) if Grid::cell_count(w, h).is_some() => Ok((w, h)),
        _ => Err(MazeError::invalid_dimensions(width, height)),
    }
}
