//! Maze generation

use log::{debug, trace};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::grid::{Direction, Grid, Point};

/// Perfect maze generator.
///
/// The random source is created once, and shared by all mazes generated
/// with the same generator.
pub struct MazeGenerator {
    random: StdRng,
}

impl MazeGenerator {
    const DIRECTIONS: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Create generator with a fixed seed, or seeded from OS entropy.
    ///
    /// With a seed, the sequence of mazes is reproducible, which the tests
    /// and the `--seed` option rely on.
    pub fn new(seed: Option<u64>) -> Self {
        let random = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { random }
    }

    /// Carve a perfect maze into a fully walled `grid`.
    ///
    /// Randomized depth-first backtracking from the entry, with an explicit
    /// stack: from the cell on top of the stack, knock down the wall towards
    /// a random unvisited neighbour and continue from there. When no
    /// unvisited neighbour is left, backtrack. Afterwards, the outer walls
    /// at the entry (left) and the exit (right) are opened.
    pub fn generate(&mut self, grid: &mut Grid) {
        let mut visited = vec![false; grid.size()];
        let mut stack = Vec::with_capacity(grid.size());

        let start = grid.entry();
        visited[grid.index(start)] = true;
        stack.push(start);

        while let Some(&current) = stack.last() {
            let candidates: Vec<(Direction, Point)> = Self::DIRECTIONS
                .into_iter()
                .filter_map(|d| grid.neighbour(current, d).map(|p| (d, p)))
                .filter(|&(_, p)| !visited[grid.index(p)])
                .collect();

            if let Some(&(direction, next)) = candidates.choose(&mut self.random) {
                grid.remove_wall(current, direction);
                visited[grid.index(next)] = true;
                stack.push(next);
            } else {
                trace!("Backtrack from {:?}", current);
                stack.pop();
            }
        }

        let (entry, exit) = (grid.entry(), grid.exit());
        grid.open_outer_wall(entry, Direction::Left);
        grid.open_outer_wall(exit, Direction::Right);

        debug!(
            "Generated {}x{} maze with {} passages",
            grid.width(),
            grid.height(),
            grid.passage_count()
        );
    }
}
