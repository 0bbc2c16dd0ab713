//! Maze generation using a randomized depth-first carve.
//!
//! This module provides the [`Maze`] occupancy grid and the carve that fills
//! it in. Generation starts from a single interior cell and repeatedly tunnels
//! two cells at a time through still-solid wall, visiting the four directions
//! in a freshly shuffled order at every cell. The shuffle order is what gives
//! each maze its shape, so it is a uniform random permutation per cell.
//!
//! The carve is driven by an explicit stack rather than recursion: a large
//! grid would otherwise nest up to `rows * cols / 4` calls deep. The stack
//! frames hold the same per-cell direction order a recursive version would,
//! so the two formulations produce identical grids for identical RNG streams.
//!
//! # Examples
//!
//! ```rust
//! use cubequest::maze::generator::{Cell, Maze};
//!
//! let maze = Maze::generate_seeded(15, 15, Cell::new(1, 1), 7).unwrap();
//! assert!(maze.is_open(&Cell::new(1, 1)));
//! ```

use crate::config::ConfigError;
use crate::math::coordinates::{CARDINALS, Direction};
use chrono::Local;
use rand::prelude::*;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Represents a cell in the maze grid
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Row index of the cell
    pub row: usize,
    /// Column index of the cell
    pub col: usize,
}

impl Cell {
    /// Creates a new Cell with the given coordinates
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Binary occupancy state of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// Solid; blocks movement.
    Wall,
    /// Carved out; walkable.
    Open,
}

/// A square occupancy grid of [`CellState`] values.
///
/// The grid is immutable after generation: cells only ever transition from
/// wall to open, and only inside [`Maze::generate`]. Every open cell is
/// reachable from the carve's start cell through 4-directional adjacency.
#[derive(Debug, Clone)]
pub struct Maze {
    /// Number of rows in the grid.
    pub rows: usize,
    /// Number of columns in the grid.
    pub cols: usize,
    cells: Vec<Vec<CellState>>,
    start: Cell,
}

/// One in-flight carve step: a cell, its private direction order, and how many
/// of those directions have been tried so far.
struct CarveFrame {
    cell: Cell,
    directions: [Direction; 4],
    next: usize,
}

impl Maze {
    /// Generates a maze with the supplied RNG.
    ///
    /// # Arguments
    /// * `rows`, `cols` - Grid dimensions; both must be odd and at least 5.
    /// * `start` - Interior cell the carve begins from. It is always open in
    ///   the result.
    /// * `rng` - Randomness source for the per-cell direction shuffles.
    ///
    /// # Errors
    /// Rejects even or undersized dimensions and a start cell on (or outside)
    /// the outer wall ring. Generation itself cannot fail: the grid is finite
    /// and cells only transition wall to open, so the carve always terminates.
    pub fn generate<R: Rng>(
        rows: usize,
        cols: usize,
        start: Cell,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        if rows < 5 || cols < 5 {
            return Err(ConfigError::MazeTooSmall { rows, cols });
        }
        if rows % 2 == 0 || cols % 2 == 0 {
            return Err(ConfigError::EvenMazeDimensions { rows, cols });
        }

        let mut maze = Self {
            rows,
            cols,
            cells: vec![vec![CellState::Wall; cols]; rows],
            start,
        };

        if !maze.is_interior(&start) {
            return Err(ConfigError::StartCellOutsideInterior {
                row: start.row,
                col: start.col,
            });
        }

        maze.carve(start, rng);
        Ok(maze)
    }

    /// Generates a reproducible maze from a fixed seed.
    pub fn generate_seeded(
        rows: usize,
        cols: usize,
        start: Cell,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::generate(rows, cols, start, &mut rng)
    }

    /// Depth-first carve with an explicit stack.
    ///
    /// Each frame owns the shuffled direction order for its cell. A frame
    /// advances through its directions one at a time; when a direction leads
    /// to an uncarved interior cell two steps away, the wall between is
    /// opened and a new frame for that neighbor is pushed. A frame with no
    /// directions left is popped, which is exactly the return of the
    /// recursive formulation.
    fn carve<R: Rng>(&mut self, start: Cell, rng: &mut R) {
        self.cells[start.row][start.col] = CellState::Open;

        let mut stack = vec![self.new_frame(start, rng)];

        while let Some(frame) = stack.last_mut() {
            if frame.next >= frame.directions.len() {
                stack.pop();
                continue;
            }

            let direction = frame.directions[frame.next];
            frame.next += 1;
            let cell = frame.cell;

            if let Some((between, neighbor)) = self.carve_target(&cell, direction) {
                if self.cells[neighbor.row][neighbor.col] == CellState::Wall {
                    self.cells[between.row][between.col] = CellState::Open;
                    self.cells[neighbor.row][neighbor.col] = CellState::Open;
                    let next_frame = self.new_frame(neighbor, rng);
                    stack.push(next_frame);
                }
            }
        }
    }

    fn new_frame<R: Rng>(&self, cell: Cell, rng: &mut R) -> CarveFrame {
        let mut directions = CARDINALS;
        directions.shuffle(rng);
        CarveFrame {
            cell,
            directions,
            next: 0,
        }
    }

    /// The intermediate cell and the cell two steps away in `direction`, or
    /// `None` when the far cell leaves the carvable interior.
    fn carve_target(&self, cell: &Cell, direction: Direction) -> Option<(Cell, Cell)> {
        let (dr, dc) = direction.offset();
        let far_row = cell.row as isize + dr * 2;
        let far_col = cell.col as isize + dc * 2;

        if far_row < 1
            || far_col < 1
            || far_row as usize >= self.rows - 1
            || far_col as usize >= self.cols - 1
        {
            return None;
        }

        let between = Cell::new(
            (cell.row as isize + dr) as usize,
            (cell.col as isize + dc) as usize,
        );
        Some((between, Cell::new(far_row as usize, far_col as usize)))
    }

    /// The cell the carve started from. Always open.
    pub fn start_cell(&self) -> Cell {
        self.start
    }

    /// Whether the cell is open. Out-of-range cells count as walls.
    pub fn is_open(&self, cell: &Cell) -> bool {
        self.cells
            .get(cell.row)
            .and_then(|row| row.get(cell.col))
            .is_some_and(|state| *state == CellState::Open)
    }

    /// Whether the cell lies strictly inside the outer wall ring.
    pub fn is_interior(&self, cell: &Cell) -> bool {
        cell.row >= 1 && cell.row < self.rows - 1 && cell.col >= 1 && cell.col < self.cols - 1
    }

    /// Builds a maze directly from an ASCII drawing, `#` for walls and
    /// anything else for open cells. Rows must all have the same width. The
    /// first open interior cell becomes the start cell.
    ///
    /// Intended for fixtures and debugging; grids built this way skip the
    /// generator and carry no connectivity guarantee.
    pub fn from_ascii(text: &str) -> Self {
        let cells: Vec<Vec<CellState>> = text
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.chars()
                    .map(|c| {
                        if c == '#' {
                            CellState::Wall
                        } else {
                            CellState::Open
                        }
                    })
                    .collect()
            })
            .collect();

        let rows = cells.len();
        let cols = cells.first().map_or(0, |row| row.len());

        let mut maze = Self {
            rows,
            cols,
            cells,
            start: Cell::default(),
        };
        for row in 1..rows.saturating_sub(1) {
            for col in 1..cols.saturating_sub(1) {
                let cell = Cell::new(row, col);
                if maze.is_open(&cell) {
                    maze.start = cell;
                    return maze;
                }
            }
        }
        maze
    }

    /// Renders the grid as ASCII art, `#` for walls and spaces for open
    /// cells, one grid row per line.
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(self.rows * (self.cols + 1));
        for row in &self.cells {
            for state in row {
                out.push(match state {
                    CellState::Wall => '#',
                    CellState::Open => ' ',
                });
            }
            out.push('\n');
        }
        out
    }

    /// Saves the maze as a timestamped ASCII file under the given directory.
    ///
    /// The file is named from the current local time, e.g.
    /// `Maze_06-24-25_11-24PM.mz`. Useful for inspecting generated layouts
    /// offline; nothing in the game reads these back at runtime.
    ///
    /// # Errors
    /// Returns any I/O error from creating the directory or writing the file.
    pub fn save_to_file(&self, dir: &Path) -> Result<PathBuf, std::io::Error> {
        let timestamp = Local::now().format("Maze_%m-%d-%y_%I-%M%p.mz").to_string();
        let output_path = dir.join(timestamp);

        fs::create_dir_all(dir)?;
        let mut file = fs::File::create(&output_path)?;
        file.write_all(self.to_ascii().as_bytes())?;

        Ok(output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashSet, VecDeque};

    /// Collects every open cell reachable from the start by 4-directional
    /// moves through open cells.
    fn reachable_open_cells(maze: &Maze) -> HashSet<Cell> {
        let mut seen = HashSet::new();
        let mut queue = VecDeque::new();
        seen.insert(maze.start_cell());
        queue.push_back(maze.start_cell());

        while let Some(cell) = queue.pop_front() {
            for direction in CARDINALS {
                let (dr, dc) = direction.offset();
                let row = cell.row as isize + dr;
                let col = cell.col as isize + dc;
                if row < 0 || col < 0 {
                    continue;
                }
                let next = Cell::new(row as usize, col as usize);
                if maze.is_open(&next) && seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        seen
    }

    fn all_open_cells(maze: &Maze) -> HashSet<Cell> {
        let mut open = HashSet::new();
        for row in 0..maze.rows {
            for col in 0..maze.cols {
                let cell = Cell::new(row, col);
                if maze.is_open(&cell) {
                    open.insert(cell);
                }
            }
        }
        open
    }

    /// Every open cell must be reachable from the start, for a spread of odd
    /// sizes and seeds.
    #[test]
    fn test_generated_maze_is_connected() {
        for (n, seed) in [(5, 1), (9, 2), (15, 3), (25, 99)] {
            let maze = Maze::generate_seeded(n, n, Cell::new(1, 1), seed).unwrap();
            assert!(maze.is_open(&Cell::new(1, 1)), "start must be open");
            assert_eq!(
                reachable_open_cells(&maze),
                all_open_cells(&maze),
                "disconnected open cells in {n}x{n} maze with seed {seed}"
            );
        }
    }

    /// The carve must never open a cell on the outer ring.
    #[test]
    fn test_outer_ring_stays_walled() {
        let maze = Maze::generate_seeded(15, 15, Cell::new(1, 1), 5).unwrap();
        for row in 0..maze.rows {
            assert!(!maze.is_open(&Cell::new(row, 0)));
            assert!(!maze.is_open(&Cell::new(row, maze.cols - 1)));
        }
        for col in 0..maze.cols {
            assert!(!maze.is_open(&Cell::new(0, col)));
            assert!(!maze.is_open(&Cell::new(maze.rows - 1, col)));
        }
    }

    /// Same seed, same maze.
    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = Maze::generate_seeded(15, 15, Cell::new(1, 1), 42).unwrap();
        let b = Maze::generate_seeded(15, 15, Cell::new(1, 1), 42).unwrap();
        assert_eq!(a.to_ascii(), b.to_ascii());
    }

    #[test]
    fn test_even_dimensions_rejected() {
        let result = Maze::generate_seeded(10, 15, Cell::new(1, 1), 0);
        assert_eq!(
            result.err(),
            Some(ConfigError::EvenMazeDimensions { rows: 10, cols: 15 })
        );
    }

    #[test]
    fn test_start_on_outer_ring_rejected() {
        let result = Maze::generate_seeded(15, 15, Cell::new(0, 3), 0);
        assert_eq!(
            result.err(),
            Some(ConfigError::StartCellOutsideInterior { row: 0, col: 3 })
        );
    }

    #[test]
    fn test_ascii_round_trip() {
        let maze = Maze::generate_seeded(9, 9, Cell::new(1, 1), 17).unwrap();
        let text = maze.to_ascii();
        let parsed = Maze::from_ascii(&text);
        assert_eq!(parsed.to_ascii(), text);
    }

    #[test]
    fn test_save_to_file_round_trips() {
        let maze = Maze::generate_seeded(9, 9, Cell::new(1, 1), 23).unwrap();
        let dir = std::env::temp_dir().join("cubequest_maze_export_test");

        let path = maze.save_to_file(&dir).unwrap();
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("mz"));

        let saved = fs::read_to_string(&path).unwrap();
        assert_eq!(Maze::from_ascii(&saved).to_ascii(), maze.to_ascii());

        fs::remove_file(&path).unwrap();
        let _ = fs::remove_dir(&dir);
    }
}
