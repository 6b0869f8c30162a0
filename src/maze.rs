use serde::Serialize;

use crate::endpoints::distance_map;
use crate::error::{MazeError, MazeResult};
use crate::grid::{Coord, Grid};

/// A finished maze and the two cells chosen as its start and end.
///
/// Serialized with the field names the browser client reads:
/// `maze`, `startCoordinates`, `endCoordinates`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GeneratedMaze {
    #[serde(rename = "maze")]
    grid: Grid,
    #[serde(rename = "startCoordinates")]
    start: Coord,
    #[serde(rename = "endCoordinates")]
    end: Coord,
}

impl GeneratedMaze {
    pub fn new(grid: Grid, start: Coord, end: Coord) -> Self {
        Self { grid, start, end }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn end(&self) -> Coord {
        self.end
    }

    /// Number of steps from start to end along the maze, or `None` if the
    /// end cannot be reached.
    pub fn path_len(&self) -> Option<usize> {
        if !self.grid.contains(self.start) || !self.grid.contains(self.end) {
            return None;
        }
        distance_map(&self.grid, self.start)[self.end.row][self.end.col]
    }

    /// Checks that the grid is a perfect maze: every passage is in bounds,
    /// between 4-adjacent cells, recorded on both sides and not repeated;
    /// there are `rows * cols - 1` of them and every cell is reachable. Also
    /// checks that both endpoints lie inside the grid.
    pub fn check_invariants(&self) -> MazeResult<()> {
        let grid = &self.grid;
        for c in grid.coords() {
            let ns = grid.neighbors(c);
            for (i, &n) in ns.iter().enumerate() {
                if !grid.contains(n) {
                    return Err(violation(format!("{c:?} opens onto out-of-bounds {n:?}")));
                }
                if !c.is_adjacent(n) {
                    return Err(violation(format!("{c:?} opens onto non-adjacent {n:?}")));
                }
                if !grid.is_open(n, c) {
                    return Err(violation(format!("{c:?} -> {n:?} has no reverse passage")));
                }
                if ns[..i].contains(&n) {
                    return Err(violation(format!("{c:?} lists {n:?} twice")));
                }
            }
        }

        let expected = grid.rows() * grid.cols() - 1;
        if grid.edge_count() != expected {
            return Err(violation(format!(
                "{} passages, expected {expected}",
                grid.edge_count()
            )));
        }

        let unreachable = distance_map(grid, Coord::new(0, 0))
            .iter()
            .flatten()
            .filter(|d| d.is_none())
            .count();
        if unreachable > 0 {
            return Err(violation(format!("{unreachable} cells unreachable")));
        }

        for (name, c) in [("start", self.start), ("end", self.end)] {
            if !grid.contains(c) {
                return Err(violation(format!("{name} {c:?} outside grid")));
            }
        }
        Ok(())
    }
}

fn violation(msg: String) -> MazeError {
    MazeError::Invariant(msg)
}
