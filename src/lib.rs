//! Perfect-maze generation for the browser maze game.
//!
//! [`generate_maze`] carves a spanning tree over a `rows x cols` grid with a
//! randomized depth-first walk, then picks the two cells farthest apart along
//! its passages as start and end.

pub mod endpoints;
pub mod error;
pub mod generator;
pub mod grid;
pub mod maze;

pub use endpoints::{bfs_farthest, distance_map, farthest_pair, start_and_end};
pub use error::{MazeError, MazeResult};
pub use generator::{carve_spanning_tree, generate_maze, generate_maze_with_rng};
pub use grid::{neighbors4, Cell, Coord, Dir, Grid, MAX_SIDE};
pub use maze::GeneratedMaze;
