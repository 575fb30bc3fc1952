//! Find the way from the entry to the exit

use log::debug;

use crate::grid::{Direction, Grid, Point};

/// Route from the entry to the exit
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MazeSolution {
    /// Cells along the route, including entry and exit
    pub steps: Vec<Point>,
}

impl MazeSolution {
    /// Number of moves between entry and exit
    pub fn step_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// Print report
    pub fn print_report(&self) {
        println!("The way out is {} steps.", self.step_count());
    }
}

/// Search order of the neighbours of each cell
const PRIORITY: [Direction; 4] = [
    Direction::Up,
    Direction::Right,
    Direction::Down,
    Direction::Left,
];

/// Solve maze with depth-first search
///
/// Neighbours are explored in the order up, right, down, left, through
/// open walls only. Every explored cell gets `visited`; the cells on the
/// route from entry to exit get `on_path`. Previous search marks are
/// cleared first, so solving the same grid again gives the same result.
///
/// The search keeps an explicit stack of `(cell, next direction)` frames
/// and a came-from table, so deep mazes do not grow the call stack.
///
/// Returns `None` when the exit cannot be reached, which does not happen
/// for mazes carved by [crate::MazeGenerator].
pub fn solve(grid: &mut Grid) -> Option<MazeSolution> {
    grid.reset_visited();
    grid.clear_path();

    let (entry, exit) = (grid.entry(), grid.exit());
    let mut came_from: Vec<Option<Point>> = vec![None; grid.size()];
    let mut stack: Vec<(Point, usize)> = Vec::new();

    if entry != exit {
        grid.cell_mut(entry).visited = true;
        stack.push((entry, 0));
    }
    let mut reached = entry == exit;

    while let Some(frame) = stack.last_mut() {
        let (current, next) = *frame;
        let Some(&direction) = PRIORITY.get(next) else {
            // Dead end, nothing left to try from here
            stack.pop();
            continue;
        };
        frame.1 += 1;

        if !grid.is_open(current, direction) {
            continue;
        }
        // Open outer walls lead out of the grid
        let Some(neighbour) = grid.neighbour(current, direction) else {
            continue;
        };
        if neighbour == exit {
            came_from[grid.index(neighbour)] = Some(current);
            reached = true;
            break;
        }
        if !grid.cell(neighbour).visited {
            grid.cell_mut(neighbour).visited = true;
            came_from[grid.index(neighbour)] = Some(current);
            stack.push((neighbour, 0));
        }
    }

    if !reached {
        debug!("No route from {:?} to {:?}", entry, exit);
        return None;
    }

    let mut steps = vec![exit];
    while let Some(prev) = came_from[grid.index(steps[steps.len() - 1])] {
        steps.push(prev);
    }
    steps.reverse();
    for &p in &steps {
        grid.cell_mut(p).on_path = true;
    }

    debug!(
        "Solved {}x{} maze in {} steps, explored {} cells",
        grid.width(),
        grid.height(),
        steps.len() - 1,
        grid.points().filter(|&p| grid.cell(p).visited).count()
    );
    Some(MazeSolution { steps })
}

#[cfg(test)]
mod tests {
    use crate::grid::{Direction, Grid, Point};
    use crate::maze_generator::MazeGenerator;
    use crate::solver::{solve, MazeSolution};

    fn generated(width: usize, height: usize, seed: u64) -> Grid {
        let mut grid = Grid::new(width, height).unwrap();
        MazeGenerator::new(Some(seed)).generate(&mut grid);
        grid
    }

    /// Direction from `a` to the adjacent `b`
    fn direction_between(grid: &Grid, a: Point, b: Point) -> Option<Direction> {
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right]
            .into_iter()
            .find(|&d| grid.neighbour(a, d) == Some(b))
    }

    #[test]
    fn solves_generated_mazes() {
        for size in 1..=50 {
            for (w, h) in [(size, size), (size, 51 - size)] {
                let mut grid = generated(w, h, size as u64);
                let solution = solve(&mut grid);
                assert!(solution.is_some(), "{w}x{h}");
            }
        }
    }

    #[test]
    fn path_is_contiguous_chain_of_open_passages() {
        for seed in 0..10 {
            let mut grid = generated(21, 14, seed);
            let solution = solve(&mut grid).unwrap();

            assert_eq!(solution.steps[0], grid.entry());
            assert_eq!(*solution.steps.last().unwrap(), grid.exit());
            for pair in solution.steps.windows(2) {
                let d = direction_between(&grid, pair[0], pair[1])
                    .expect("consecutive steps are adjacent");
                assert!(grid.is_open(pair[0], d));
            }

            // Marked cells are exactly the steps
            let mut marked: Vec<Point> = grid.path_points().collect();
            let mut steps = solution.steps.clone();
            marked.sort_by_key(|p| (p.y, p.x));
            steps.sort_by_key(|p| (p.y, p.x));
            assert_eq!(marked, steps);
        }
    }

    #[test]
    fn walk_marked_cells_from_entry_to_exit() {
        let mut grid = generated(12, 9, 4);
        solve(&mut grid).unwrap();

        let mut previous = None;
        let mut current = grid.entry();
        let mut walked = 1;
        while current != grid.exit() {
            let next = [Direction::Up, Direction::Right, Direction::Down, Direction::Left]
                .into_iter()
                .filter(|&d| grid.is_open(current, d))
                .filter_map(|d| grid.neighbour(current, d))
                .filter(|&n| Some(n) != previous && grid.cell(n).on_path)
                .collect::<Vec<_>>();
            // Unique route: exactly one way forward along the marks
            assert_eq!(next.len(), 1, "at {:?}", current);
            previous = Some(current);
            current = next[0];
            walked += 1;
        }
        assert_eq!(walked, grid.path_points().count());
    }

    #[test]
    fn single_cell_solved_without_steps() {
        let mut grid = generated(1, 1, 0);
        let solution = solve(&mut grid).unwrap();
        assert_eq!(solution.steps, vec![Point::new(0, 0)]);
        assert_eq!(solution.step_count(), 0);
        assert!(grid.cell(Point::new(0, 0)).on_path);
    }

    #[test]
    fn empty_solution_has_no_steps() {
        let solution = MazeSolution { steps: vec![] };
        assert_eq!(solution.step_count(), 0);
    }

    #[test]
    fn two_cells_solved_in_one_step() {
        let mut grid = generated(2, 1, 0);
        let solution = solve(&mut grid).unwrap();
        assert_eq!(solution.steps, vec![Point::new(0, 0), Point::new(1, 0)]);
        assert_eq!(solution.step_count(), 1);
    }

    #[test]
    fn dead_ends_are_not_on_path() {
        // 3x2 grid, route along the top row, dead end below the entry:
        // (0,0) - (1,0) - (2,0)
        //   |
        // (0,1)   (1,1) - (2,1)
        // with (2,0) - (2,1) connecting to the exit
        let mut grid = Grid::new(3, 2).unwrap();
        grid.remove_wall(Point::new(0, 0), Direction::Down);
        grid.remove_wall(Point::new(0, 0), Direction::Right);
        grid.remove_wall(Point::new(1, 0), Direction::Right);
        grid.remove_wall(Point::new(2, 0), Direction::Down);
        grid.remove_wall(Point::new(1, 1), Direction::Right);

        let solution = solve(&mut grid).unwrap();
        assert_eq!(
            solution.steps,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(2, 1)
            ]
        );
        assert!(!grid.cell(Point::new(0, 1)).on_path);
        assert!(!grid.cell(Point::new(1, 1)).on_path);
        // Right is tried before down, so the dead end is never entered
        assert!(!grid.cell(Point::new(0, 1)).visited);
    }

    #[test]
    fn backtracks_out_of_dead_end() {
        // Right from the entry leads to a dead end, the exit is below
        let mut grid = Grid::new(2, 2).unwrap();
        grid.remove_wall(Point::new(0, 0), Direction::Right);
        grid.remove_wall(Point::new(0, 0), Direction::Down);
        grid.remove_wall(Point::new(0, 1), Direction::Right);

        let solution = solve(&mut grid).unwrap();
        assert_eq!(
            solution.steps,
            vec![Point::new(0, 0), Point::new(0, 1), Point::new(1, 1)]
        );
        assert!(grid.cell(Point::new(1, 0)).visited);
        assert!(!grid.cell(Point::new(1, 0)).on_path);
    }

    #[test]
    fn unreachable_exit_is_not_solved() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.remove_wall(Point::new(0, 0), Direction::Right);
        grid.remove_wall(Point::new(1, 0), Direction::Down);
        assert_eq!(solve(&mut grid), None);
        assert_eq!(grid.path_points().count(), 0);
    }

    #[test]
    fn solving_twice_gives_same_route() {
        let mut grid = generated(15, 15, 8);
        let first = solve(&mut grid).unwrap();
        let second = solve(&mut grid).unwrap();
        assert_eq!(first, second);
        assert_eq!(grid.path_points().count(), first.steps.len());
    }

    #[test]
    fn large_maze_does_not_overflow_stack() {
        let mut grid = generated(400, 400, 1);
        let solution = solve(&mut grid).unwrap();
        assert!(solution.step_count() >= 798);
    }
}
