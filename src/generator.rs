//! Randomized depth-first maze construction.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::endpoints::start_and_end;
use crate::error::MazeResult;
use crate::grid::{neighbors4, Coord, Grid};
use crate::maze::GeneratedMaze;

#[derive(Clone, Copy, Debug)]
struct StackEntry {
    coord: Coord,
    came_from: Option<Coord>,
}

/// Carves a spanning tree into a fully walled `grid` from a random root.
///
/// A cell may sit on the stack several times; only its first pop counts and
/// opens the wall towards the cell that pushed it.
pub fn carve_spanning_tree(grid: &mut Grid, rng: &mut impl Rng) {
    let rows = grid.rows();
    let cols = grid.cols();
    let root = Coord::new(rng.gen_range(0..rows), rng.gen_range(0..cols));

    let mut visited = vec![vec![false; cols]; rows];
    let mut stack = vec![StackEntry {
        coord: root,
        came_from: None,
    }];
    let mut stale = 0usize;

    while let Some(StackEntry { coord, came_from }) = stack.pop() {
        if visited[coord.row][coord.col] {
            stale += 1;
            continue;
        }
        visited[coord.row][coord.col] = true;

        if let Some(parent) = came_from {
            grid.connect(parent, coord);
        }

        let unvisited = shuffled_unvisited(coord, &visited, rng);
        if unvisited.is_empty() {
            continue;
        }

        stack.extend(unvisited.into_iter().map(|n| StackEntry {
            coord: n,
            came_from: Some(coord),
        }));
    }

    debug!(
        rows,
        cols,
        root = ?root,
        edges = grid.edge_count(),
        stale,
        "carved spanning tree"
    );
}

/// Unvisited 4-neighbours of `coord` in a uniformly random order.
fn shuffled_unvisited(coord: Coord, visited: &[Vec<bool>], rng: &mut impl Rng) -> Vec<Coord> {
    let rows = visited.len();
    let cols = visited.first().map_or(0, Vec::len);
    let mut unvisited: Vec<Coord> = neighbors4(coord, rows, cols)
        .into_iter()
        .filter(|n| !visited[n.row][n.col])
        .collect();
    unvisited.shuffle(rng);
    unvisited
}

pub fn generate_maze(rows: usize, cols: usize) -> MazeResult<GeneratedMaze> {
    generate_maze_with_rng(rows, cols, &mut rand::thread_rng())
}

/// Same as [`generate_maze`] with every random choice drawn from `rng`.
pub fn generate_maze_with_rng(
    rows: usize,
    cols: usize,
    rng: &mut impl Rng,
) -> MazeResult<GeneratedMaze> {
    let mut grid = Grid::new(rows, cols)?;
    carve_spanning_tree(&mut grid, rng);
    let (start, end) = start_and_end(&grid, rng);
    Ok(GeneratedMaze::new(grid, start, end))
}
