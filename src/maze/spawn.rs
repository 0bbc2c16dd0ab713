//! Spawn-point selection over a generated maze.

use crate::maze::generator::{Cell, Maze};
use rand::Rng;

/// Picks a uniformly random open interior cell by rejection sampling.
///
/// Samples cells strictly inside the outer ring until an open one turns up.
/// Termination is almost sure for any generated maze, since the carve always
/// leaves its interior start cell open. A hand-built grid with a fully solid
/// interior would loop forever; callers own that precondition.
pub fn find_open_cell<R: Rng>(maze: &Maze, rng: &mut R) -> Cell {
    loop {
        let cell = Cell::new(
            rng.gen_range(1..maze.rows - 1),
            rng.gen_range(1..maze.cols - 1),
        );
        if maze.is_open(&cell) {
            return cell;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_finds_open_interior_cell() {
        let maze = Maze::generate_seeded(15, 15, Cell::new(1, 1), 11).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let cell = find_open_cell(&maze, &mut rng);
            assert!(maze.is_open(&cell));
            assert!(maze.is_interior(&cell));
        }
    }

    #[test]
    fn test_single_open_cell_is_always_found() {
        // Interior with exactly one open cell, so sampling must reject until
        // it lands there.
        let maze = Maze::from_ascii("#####\n#####\n## ##\n#####\n#####");
        let mut rng = StdRng::seed_from_u64(8);
        assert_eq!(find_open_cell(&maze, &mut rng), Cell::new(2, 2));
    }
}
