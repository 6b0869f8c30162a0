//! Grid graph model.
//!
//! A `Grid` is a fixed `rows x cols` block of cells. Each cell records the
//! cells it opens onto through a removed wall. Passages are always stored on
//! both sides, so the open-neighbour relation is symmetric.

use serde::ser::SerializeSeq;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{MazeError, MazeResult};

/// Largest accepted side length.
pub const MAX_SIDE: usize = 1024;

/// A `(row, col)` position. Serialized as `[row, col]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The neighbouring position in `dir`, if it lies inside a
    /// `rows x cols` grid.
    pub fn step(self, dir: Dir, rows: usize, cols: usize) -> Option<Coord> {
        let (dr, dc) = dir.delta();
        let nr = self.row as isize + dr;
        let nc = self.col as isize + dc;
        if nr < 0 || nc < 0 {
            return None;
        }
        let (nr, nc) = (nr as usize, nc as usize);
        if nr >= rows || nc >= cols {
            return None;
        }
        Some(Coord::new(nr, nc))
    }

    pub fn is_adjacent(self, other: Coord) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Coord::new(row, col)
    }
}

impl From<Coord> for (usize, usize) {
    fn from(c: Coord) -> Self {
        (c.row, c.col)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Dir {
    pub const ALL: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

    pub fn delta(self) -> (isize, isize) {
        match self {
            Dir::Up => (-1, 0),
            Dir::Down => (1, 0),
            Dir::Left => (0, -1),
            Dir::Right => (0, 1),
        }
    }
}

/// In-bounds 4-neighbours of `coord`, ordered up, down, left, right.
pub fn neighbors4(coord: Coord, rows: usize, cols: usize) -> Vec<Coord> {
    Dir::ALL
        .iter()
        .filter_map(|&dir| coord.step(dir, rows, cols))
        .collect()
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Cell {
    neighbours: Vec<Coord>,
}

impl Cell {
    pub fn neighbours(&self) -> &[Coord] {
        &self.neighbours
    }
}

/// The maze structure. Serializes as a list of rows of cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> MazeResult<Self> {
        if rows == 0 || cols == 0 || rows > MAX_SIDE || cols > MAX_SIDE {
            return Err(MazeError::InvalidDimensions {
                rows,
                cols,
                max: MAX_SIDE,
            });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::default(); rows * cols],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    fn index(&self, coord: Coord) -> usize {
        coord.row * self.cols + coord.col
    }

    pub fn neighbors(&self, coord: Coord) -> &[Coord] {
        assert!(self.contains(coord), "{coord:?} outside {}x{} grid", self.rows, self.cols);
        self.cells[self.index(coord)].neighbours()
    }

    pub fn cell(&self, coord: Coord) -> Option<&Cell> {
        if self.contains(coord) {
            Some(&self.cells[self.index(coord)])
        } else {
            None
        }
    }

    pub fn is_open(&self, a: Coord, b: Coord) -> bool {
        self.cell(a).is_some_and(|cell| cell.neighbours.contains(&b))
    }

    /// Removes the wall between two adjacent cells.
    ///
    /// # Panics
    ///
    /// If either cell is out of bounds, the cells are not 4-adjacent, or they
    /// are already connected. Callers only connect cells they have checked.
    pub fn connect(&mut self, a: Coord, b: Coord) {
        assert!(
            self.contains(a) && self.contains(b),
            "connect {a:?} - {b:?} outside {}x{} grid",
            self.rows,
            self.cols
        );
        assert!(a.is_adjacent(b), "connect {a:?} - {b:?}: cells are not adjacent");
        assert!(!self.is_open(a, b), "connect {a:?} - {b:?}: already connected");

        let ia = self.index(a);
        let ib = self.index(b);
        self.cells[ia].neighbours.push(b);
        self.cells[ib].neighbours.push(a);
    }

    pub fn edge_count(&self) -> usize {
        // each passage is stored on both of its cells
        self.cells.iter().map(|c| c.neighbours.len()).sum::<usize>() / 2
    }

    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Coord::new(row, col)))
    }
}

impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.rows))?;
        for row in self.cells.chunks(self.cols) {
            seq.serialize_element(row)?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_oversized_grids() {
        for (rows, cols) in [(0, 5), (5, 0), (0, 0), (MAX_SIDE + 1, 1), (1, MAX_SIDE + 1)] {
            assert_eq!(
                Grid::new(rows, cols),
                Err(MazeError::InvalidDimensions {
                    rows,
                    cols,
                    max: MAX_SIDE
                })
            );
        }
        assert!(Grid::new(MAX_SIDE, 1).is_ok());
    }

    #[test]
    fn new_grid_has_no_passages() {
        let grid = Grid::new(3, 4).unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 4);
        assert_eq!(grid.edge_count(), 0);
        assert_eq!(grid.coords().count(), 12);
        assert!(grid.coords().all(|c| grid.neighbors(c).is_empty()));
    }

    #[test]
    fn neighbors4_order_and_bounds() {
        let c = Coord::new(1, 1);
        assert_eq!(
            neighbors4(c, 3, 3),
            vec![
                Coord::new(0, 1),
                Coord::new(2, 1),
                Coord::new(1, 0),
                Coord::new(1, 2)
            ]
        );
        assert_eq!(
            neighbors4(Coord::new(0, 0), 3, 3),
            vec![Coord::new(1, 0), Coord::new(0, 1)]
        );
        assert_eq!(
            neighbors4(Coord::new(2, 2), 3, 3),
            vec![Coord::new(1, 2), Coord::new(2, 1)]
        );
        assert!(neighbors4(Coord::new(0, 0), 1, 1).is_empty());
    }

    #[test]
    fn connect_is_symmetric() {
        let mut grid = Grid::new(2, 2).unwrap();
        let a = Coord::new(0, 0);
        let b = Coord::new(0, 1);
        grid.connect(a, b);
        assert_eq!(grid.neighbors(a), &[b]);
        assert_eq!(grid.neighbors(b), &[a]);
        assert!(grid.is_open(a, b));
        assert!(grid.is_open(b, a));
        assert!(!grid.is_open(a, Coord::new(1, 0)));
        assert_eq!(grid.edge_count(), 1);
    }

    #[test]
    #[should_panic(expected = "not adjacent")]
    fn connect_rejects_diagonal() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.connect(Coord::new(0, 0), Coord::new(1, 1));
    }

    #[test]
    #[should_panic(expected = "not adjacent")]
    fn connect_rejects_self_loop() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.connect(Coord::new(1, 1), Coord::new(1, 1));
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn connect_rejects_out_of_bounds() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.connect(Coord::new(1, 1), Coord::new(1, 2));
    }

    #[test]
    #[should_panic(expected = "already connected")]
    fn connect_rejects_duplicate() {
        let mut grid = Grid::new(1, 2).unwrap();
        grid.connect(Coord::new(0, 0), Coord::new(0, 1));
        grid.connect(Coord::new(0, 1), Coord::new(0, 0));
    }

    #[test]
    fn serializes_as_rows_of_cells() {
        let mut grid = Grid::new(1, 2).unwrap();
        grid.connect(Coord::new(0, 0), Coord::new(0, 1));
        let json = serde_json::to_value(&grid).unwrap();
        assert_eq!(
            json,
            serde_json::json!([[{"neighbours": [[0, 1]]}, {"neighbours": [[0, 0]]}]])
        );
    }

    #[test]
    fn coord_round_trips_through_tuple() {
        let c: Coord = serde_json::from_str("[3, 7]").unwrap();
        assert_eq!(c, Coord::new(3, 7));
    }
}
