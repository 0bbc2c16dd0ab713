//! Coordinate system transformations for the maze.
//!
//! This module converts between the two coordinate systems used in the game:
//! - Maze grid coordinates: rows and columns of the occupancy grid
//! - World coordinates: the 3D space the player moves in (x, y, z)
//!
//! Cell `(row, col)` is centered at world `(col * cell_size, y, row * cell_size)`,
//! so a world position maps back to a grid cell by dividing each horizontal
//! component by the cell size and rounding to the nearest integer.

use crate::maze::generator::Cell;

/// Cardinal directions over the maze grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward decreasing rows.
    North,
    /// Toward increasing columns.
    East,
    /// Toward increasing rows.
    South,
    /// Toward decreasing columns.
    West,
}

/// All four directions, in a fixed order. Carving shuffles a copy of this per
/// cell, so the order here never influences maze shape.
pub const CARDINALS: [Direction; 4] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
];

impl Direction {
    /// The (row, col) step for this direction.
    pub fn offset(&self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }
}

/// Converts a maze grid cell to world coordinates at the given height.
///
/// # Coordinate System
/// - X increases with columns
/// - Y increases upwards
/// - Z increases with rows
pub fn cell_to_world(cell: &Cell, cell_size: f32, y_position: f32) -> [f32; 3] {
    [
        cell.col as f32 * cell_size,
        y_position,
        cell.row as f32 * cell_size,
    ]
}

/// Converts horizontal world coordinates to the nearest maze grid cell.
///
/// Returns `None` when the rounded coordinates fall outside the grid, which
/// collision treats the same as a wall.
pub fn world_to_cell(
    x: f32,
    z: f32,
    cell_size: f32,
    maze_dimensions: (usize, usize),
) -> Option<Cell> {
    let (rows, cols) = maze_dimensions;
    let col = (x / cell_size).round() as isize;
    let row = (z / cell_size).round() as isize;

    if row < 0 || col < 0 || row as usize >= rows || col as usize >= cols {
        return None;
    }

    Some(Cell::new(row as usize, col as usize))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_world_round_trip() {
        let cell = Cell::new(3, 7);
        let [x, _, z] = cell_to_world(&cell, 2.0, 1.0);
        assert_eq!(world_to_cell(x, z, 2.0, (9, 9)), Some(cell));
    }

    #[test]
    fn test_world_to_cell_rounds_to_nearest() {
        // 2.9 / 2.0 rounds to cell 1, 3.1 / 2.0 rounds to cell 2
        assert_eq!(world_to_cell(2.9, 0.0, 2.0, (9, 9)), Some(Cell::new(0, 1)));
        assert_eq!(world_to_cell(3.1, 0.0, 2.0, (9, 9)), Some(Cell::new(0, 2)));
    }

    #[test]
    fn test_world_to_cell_out_of_range() {
        assert_eq!(world_to_cell(-3.0, 0.0, 2.0, (9, 9)), None);
        assert_eq!(world_to_cell(0.0, 100.0, 2.0, (9, 9)), None);
    }
}
