//! ASCII rendering of the maze
//!
//! Each cell is four characters wide and two lines tall: a top line with
//! `#` corners and `___` for a top wall, and a body line starting with `|`
//! for a left wall. The right edge and the bottom border are always drawn
//! closed.

use itertools::Itertools;

use crate::grid::{Grid, Point};

/// Render walls only
pub fn render_maze(grid: &Grid) -> String {
    render_with(grid, |grid, p| {
        if grid.cell(p).wall_left {
            "|   "
        } else {
            "    "
        }
    })
}

/// Render walls, with cells on the solution path marked by a dot
pub fn render_solution(grid: &Grid) -> String {
    render_with(grid, |grid, p| {
        let cell = grid.cell(p);
        match (cell.wall_left, cell.on_path) {
            (true, true) => "| . ",
            (true, false) => "|   ",
            (false, true) => "  . ",
            (false, false) => "    ",
        }
    })
}

fn render_with(grid: &Grid, body: impl Fn(&Grid, Point) -> &'static str) -> String {
    let mut out = String::new();
    for y in 0..grid.height() {
        let top = (0..grid.width())
            .map(|x| {
                if grid.cell(Point::new(x, y)).wall_up {
                    "#___"
                } else {
                    "#   "
                }
            })
            .join("");
        out.push_str(&top);
        out.push_str("#\n");

        let row = (0..grid.width())
            .map(|x| body(grid, Point::new(x, y)))
            .join("");
        out.push_str(&row);
        out.push_str("|\n");
    }
    out.push_str(&"#___".repeat(grid.width()));
    out.push_str("#\n");
    out
}
