//! Start/end selection by a double breadth-first sweep.
//!
//! On a tree the cell farthest from any starting cell is one end of a
//! longest path, and the cell farthest from that one is the other end. This
//! only holds because generated mazes are spanning trees; on a graph with
//! cycles the sweep is merely a lower bound.

use std::collections::VecDeque;

use rand::Rng;
use tracing::debug;

use crate::grid::{Coord, Grid};

/// Last cell dequeued by a level-order traversal from `from`, which is a
/// cell at maximum path distance. Ties go to whichever such cell the
/// traversal reaches last.
pub fn bfs_farthest(grid: &Grid, from: Coord) -> Coord {
    assert!(grid.contains(from), "bfs from {from:?} outside {}x{} grid", grid.rows(), grid.cols());
    let mut seen = vec![vec![false; grid.cols()]; grid.rows()];
    let mut q = VecDeque::new();
    seen[from.row][from.col] = true;
    q.push_back(from);

    let mut last = from;
    while let Some(pos) = q.pop_front() {
        last = pos;
        for &next in grid.neighbors(pos) {
            if !seen[next.row][next.col] {
                seen[next.row][next.col] = true;
                q.push_back(next);
            }
        }
    }
    last
}

/// Path length from `from` to every cell, `None` where unreachable.
pub fn distance_map(grid: &Grid, from: Coord) -> Vec<Vec<Option<usize>>> {
    assert!(grid.contains(from), "bfs from {from:?} outside {}x{} grid", grid.rows(), grid.cols());
    let mut dist = vec![vec![None; grid.cols()]; grid.rows()];
    let mut q = VecDeque::new();
    dist[from.row][from.col] = Some(0);
    q.push_back(from);

    while let Some(pos) = q.pop_front() {
        let base = dist[pos.row][pos.col].unwrap_or_default();
        for &next in grid.neighbors(pos) {
            if dist[next.row][next.col].is_none() {
                dist[next.row][next.col] = Some(base + 1);
                q.push_back(next);
            }
        }
    }
    dist
}

pub fn farthest_pair(grid: &Grid, origin: Coord) -> (Coord, Coord) {
    let x = bfs_farthest(grid, origin);
    let y = bfs_farthest(grid, x);
    (x, y)
}

/// Picks a random sweep origin and returns `(start, end)`. Which diameter
/// end becomes the start is not specified.
pub fn start_and_end(grid: &Grid, rng: &mut impl Rng) -> (Coord, Coord) {
    let origin = Coord::new(rng.gen_range(0..grid.rows()), rng.gen_range(0..grid.cols()));
    let (start, end) = farthest_pair(grid, origin);
    debug!(origin = ?origin, start = ?start, end = ?end, "selected endpoints");
    (start, end)
}
