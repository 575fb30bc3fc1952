//! Grid of maze cells and their walls

use crate::MazeError;

/// Location in the maze
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Compass direction from one cell to an adjacent one
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Direction pointing back to the source cell
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Single maze cell
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    /// Search mark, owned by the solver
    pub visited: bool,
    pub wall_up: bool,
    pub wall_down: bool,
    pub wall_left: bool,
    pub wall_right: bool,
    /// Cell lies on the discovered route from entry to exit
    pub on_path: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            visited: false,
            wall_up: true,
            wall_down: true,
            wall_left: true,
            wall_right: true,
            on_path: false,
        }
    }
}

impl Cell {
    /// Is there a wall on the given side of the cell
    pub fn has_wall(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.wall_up,
            Direction::Down => self.wall_down,
            Direction::Left => self.wall_left,
            Direction::Right => self.wall_right,
        }
    }

    fn clear_wall(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.wall_up = false,
            Direction::Down => self.wall_down = false,
            Direction::Left => self.wall_left = false,
            Direction::Right => self.wall_right = false,
        }
    }
}

/// Fixed-size rectangular grid of cells
///
/// Cells are stored row by row, so that `(x, y)` lives at index
/// `y * width + x`. The grid is never resized after construction.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Allocate a fully walled grid.
    ///
    /// Returns [MazeError::InvalidDimensions] if either dimension is zero,
    /// or if the cells cannot be allocated.
    ///
    /// # Examples
    /// ```
    /// use perfect_maze::Grid;
    ///
    /// let grid = Grid::new(3, 2).unwrap();
    /// assert_eq!(grid.size(), 6);
    /// assert!(Grid::new(0, 2).is_err());
    /// ```
    pub fn new(width: usize, height: usize) -> Result<Self, MazeError> {
        let size = Self::cell_count(width, height)
            .ok_or_else(|| MazeError::invalid_dimensions(width, height))?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(size)
            .map_err(|_| MazeError::invalid_dimensions(width, height))?;
        cells.resize(size, Cell::default());
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Number of cells in a `width` x `height` grid, if such a grid is
    /// non-empty and its cells fit into a single allocation
    pub(crate) fn cell_count(width: usize, height: usize) -> Option<usize> {
        let size = width.checked_mul(height).filter(|&size| size > 0)?;
        let bytes = size.checked_mul(std::mem::size_of::<Cell>())?;
        (bytes <= isize::MAX as usize).then_some(size)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Top-left cell
    pub fn entry(&self) -> Point {
        Point::new(0, 0)
    }

    /// Bottom-right cell
    pub fn exit(&self) -> Point {
        Point::new(self.width - 1, self.height - 1)
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    /// Flat index of a point, used for side tables of per-cell state
    ///
    /// Panics if `point` is outside the grid.
    pub fn index(&self, point: Point) -> usize {
        assert!(
            self.contains(point),
            "{:?} outside {}x{} grid",
            point,
            self.width,
            self.height
        );
        point.y * self.width + point.x
    }

    /// Inverse of [Self::index]
    pub fn point(&self, index: usize) -> Point {
        Point::new(index % self.width, index / self.width)
    }

    /// Panics if `point` is outside the grid.
    pub fn cell(&self, point: Point) -> &Cell {
        &self.cells[self.index(point)]
    }

    /// Panics if `point` is outside the grid.
    pub fn cell_mut(&mut self, point: Point) -> &mut Cell {
        let index = self.index(point);
        &mut self.cells[index]
    }

    /// Adjacent point in `direction`, if it is inside the grid
    pub fn neighbour(&self, point: Point, direction: Direction) -> Option<Point> {
        let next = match direction {
            Direction::Up => Point::new(point.x, point.y.checked_sub(1)?),
            Direction::Down => Point::new(point.x, point.y + 1),
            Direction::Left => Point::new(point.x.checked_sub(1)?, point.y),
            Direction::Right => Point::new(point.x + 1, point.y),
        };
        self.contains(next).then_some(next)
    }

    /// Is the side of `point` facing `direction` free of a wall.
    ///
    /// Open outer walls (entry and exit) count as open, even though there
    /// is no cell behind them.
    pub fn is_open(&self, point: Point, direction: Direction) -> bool {
        !self.cell(point).has_wall(direction)
    }

    /// Remove the wall between `from` and its neighbour in `direction`.
    ///
    /// Both facing walls are cleared, e.g. moving left clears the left wall
    /// of `from` and the right wall of the neighbour. The neighbour must
    /// exist.
    pub fn remove_wall(&mut self, from: Point, direction: Direction) {
        let Some(to) = self.neighbour(from, direction) else {
            debug_assert!(false, "no neighbour {:?} of {:?}", direction, from);
            return;
        };
        self.cell_mut(from).clear_wall(direction);
        self.cell_mut(to).clear_wall(direction.opposite());
    }

    /// Clear an outer wall on the grid boundary, with no neighbour behind it
    pub(crate) fn open_outer_wall(&mut self, point: Point, direction: Direction) {
        debug_assert!(self.neighbour(point, direction).is_none());
        self.cell_mut(point).clear_wall(direction);
    }

    /// Clear the `visited` flag of every cell
    pub fn reset_visited(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.visited = false;
        }
    }

    /// Clear the `on_path` flag of every cell
    pub fn clear_path(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.on_path = false;
        }
    }

    /// Number of removed internal walls, i.e. edges of the passage graph
    pub fn passage_count(&self) -> usize {
        self.points()
            .map(|p| {
                [Direction::Right, Direction::Down]
                    .into_iter()
                    .filter(|&d| self.neighbour(p, d).is_some() && self.is_open(p, d))
                    .count()
            })
            .sum()
    }

    /// All points, row by row
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.size()).map(|i| self.point(i))
    }

    /// Points marked as lying on the solution path, row by row
    pub fn path_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.points().filter(|&p| self.cell(p).on_path)
    }
}
