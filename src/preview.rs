//! Terminal drawing of a generated maze.
//!
//! Each maze cell becomes one tile, with a wall tile between neighbours and
//! around the border, so an `R x C` maze draws as `(2R+1) x (2C+1)` tiles.

use std::io::{self, Write};

use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::{terminal, QueueableCommand};
use maze_engine::{Coord, GeneratedMaze};
use unicode_width::UnicodeWidthStr;

const CELL_W: usize = 2;
/// Terminal rows kept free for the header and the shell prompt.
const RESERVED_ROWS: usize = 2;

#[derive(Clone, Copy, PartialEq, Debug)]
enum Tile {
    Wall,
    Open,
    Start,
    End,
}

/// Largest `(rows, cols)` whose drawing fits the current terminal.
pub fn fit_terminal() -> io::Result<(usize, usize)> {
    let (term_w, term_h) = terminal::size()?;
    Ok(fit(term_w as usize, term_h as usize))
}

fn fit(term_w: usize, term_h: usize) -> (usize, usize) {
    let tiles_w = term_w / CELL_W;
    let tiles_h = term_h.saturating_sub(RESERVED_ROWS);
    let cols = tiles_w.saturating_sub(1) / 2;
    let rows = tiles_h.saturating_sub(1) / 2;
    (rows.max(1), cols.max(1))
}

fn tile_at(maze: &GeneratedMaze, y: usize, x: usize) -> Tile {
    let grid = maze.grid();
    let cell = |ty: usize, tx: usize| Coord::new((ty - 1) / 2, (tx - 1) / 2);
    match (y % 2, x % 2) {
        // cell tile
        (1, 1) => {
            let c = cell(y, x);
            if c == maze.start() {
                Tile::Start
            } else if c == maze.end() {
                Tile::End
            } else {
                Tile::Open
            }
        }
        // wall between horizontal neighbours
        (1, 0) if x > 0 && x < grid.cols() * 2 => {
            if grid.is_open(cell(y, x - 1), cell(y, x + 1)) {
                Tile::Open
            } else {
                Tile::Wall
            }
        }
        // wall between vertical neighbours
        (0, 1) if y > 0 && y < grid.rows() * 2 => {
            if grid.is_open(cell(y - 1, x), cell(y + 1, x)) {
                Tile::Open
            } else {
                Tile::Wall
            }
        }
        _ => Tile::Wall,
    }
}

pub fn draw<W: Write>(out: &mut W, maze: &GeneratedMaze) -> io::Result<()> {
    let grid = maze.grid();
    let (start, end) = (maze.start(), maze.end());
    let path = maze
        .path_len()
        .map_or_else(|| "-".to_string(), |n| n.to_string());
    let header = format!(
        "Maze: {}x{}  Start: ({}, {})  End: ({}, {})  Path: {}",
        grid.rows(),
        grid.cols(),
        start.row,
        start.col,
        end.row,
        end.col,
        path
    );
    out.queue(SetForegroundColor(Color::White))?;
    out.queue(Print(header))?;
    out.queue(ResetColor)?;
    out.queue(Print("\n"))?;

    for y in 0..=grid.rows() * 2 {
        for x in 0..=grid.cols() * 2 {
            draw_tile(out, tile_at(maze, y, x))?;
        }
        out.queue(Print("\n"))?;
    }
    out.flush()
}

fn draw_tile<W: Write>(out: &mut W, tile: Tile) -> io::Result<()> {
    let (text, color) = match tile {
        Tile::Wall => ("██", Color::Blue),
        Tile::Open => ("  ", Color::Reset),
        Tile::Start => ("S", Color::Green),
        Tile::End => ("E", Color::Red),
    };
    out.queue(SetForegroundColor(color))?;
    out.queue(Print(text))?;
    let w = UnicodeWidthStr::width(text);
    for _ in w..CELL_W {
        out.queue(Print(' '))?;
    }
    out.queue(ResetColor)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_engine::Grid;

    fn line_maze() -> GeneratedMaze {
        let mut grid = Grid::new(1, 3).unwrap();
        grid.connect(Coord::new(0, 0), Coord::new(0, 1));
        grid.connect(Coord::new(0, 1), Coord::new(0, 2));
        GeneratedMaze::new(grid, Coord::new(0, 0), Coord::new(0, 2))
    }

    #[test]
    fn tiles_follow_passages() {
        let maze = line_maze();
        let row: Vec<Tile> = (0..7).map(|x| tile_at(&maze, 1, x)).collect();
        assert_eq!(
            row,
            vec![
                Tile::Wall,
                Tile::Start,
                Tile::Open,
                Tile::Open,
                Tile::Open,
                Tile::End,
                Tile::Wall
            ]
        );
        assert!((0..7).all(|x| tile_at(&maze, 0, x) == Tile::Wall));
        assert!((0..7).all(|x| tile_at(&maze, 2, x) == Tile::Wall));
    }

    #[test]
    fn closed_wall_between_cells() {
        let mut grid = Grid::new(2, 1).unwrap();
        grid.connect(Coord::new(0, 0), Coord::new(1, 0));
        let open = GeneratedMaze::new(grid, Coord::new(0, 0), Coord::new(1, 0));
        assert_eq!(tile_at(&open, 2, 1), Tile::Open);

        let closed = GeneratedMaze::new(
            Grid::new(2, 1).unwrap(),
            Coord::new(0, 0),
            Coord::new(1, 0),
        );
        assert_eq!(tile_at(&closed, 2, 1), Tile::Wall);
    }

    #[test]
    fn draw_writes_header_and_picture() {
        let mut buf = Vec::new();
        draw(&mut buf, &line_maze()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Maze: 1x3"));
        assert!(text.contains("Path: 2"));
        assert_eq!(text.lines().count(), 1 + 3);
    }

    #[test]
    fn fit_leaves_room_for_walls_and_header() {
        assert_eq!(fit(80, 24), (10, 19));
        assert_eq!(fit(0, 0), (1, 1));
    }
}
