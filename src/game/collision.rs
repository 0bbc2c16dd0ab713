//! Movement resolution and collision checking.
//!
//! # Overview
//!
//! This module turns held directional input into a validated new player
//! position. Movement is computed in the camera's horizontal frame: the
//! camera's forward direction is flattened onto the XZ plane and normalized,
//! a right vector is derived from it by crossing with world-up, and each held
//! direction contributes one unit along those axes. The summed displacement
//! is scaled by speed and elapsed time and applied to x/z only.
//!
//! The candidate position is then validated against an [`ObstacleSource`]:
//!
//! * [`MazeWorld`] rounds the candidate to the nearest grid cell and accepts
//!   it only when that cell is open.
//! * [`ArenaWorld`] rejects a candidate that falls strictly inside the
//!   rectangular footprint of any obstacle.
//!
//! Either way the check is all-or-nothing: a rejected candidate leaves the
//! position untouched. There is no per-axis separation and no sliding along
//! walls; the player stops dead.

use crate::math::coordinates::world_to_cell;
use crate::math::vec::Vec3;
use crate::maze::generator::Maze;

const WORLD_UP: Vec3 = Vec3::new(0.0, 1.0, 0.0);

/// Anything that can veto a horizontal position.
pub trait ObstacleSource {
    /// Whether standing at `(x, z)` is blocked.
    fn blocks(&self, x: f32, z: f32) -> bool;
}

/// An axis-aligned rectangular footprint blocking movement in the open arena.
///
/// Only the horizontal extent matters for collision; building height is a
/// rendering concern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    /// Footprint center, x.
    pub center_x: f32,
    /// Footprint center, z.
    pub center_z: f32,
    /// Half the footprint width along x.
    pub half_width: f32,
    /// Half the footprint depth along z.
    pub half_depth: f32,
}

impl Obstacle {
    /// Creates an obstacle from its center and full width/depth.
    pub fn new(center_x: f32, center_z: f32, width: f32, depth: f32) -> Self {
        Self {
            center_x,
            center_z,
            half_width: width / 2.0,
            half_depth: depth / 2.0,
        }
    }

    /// Whether the point lies strictly inside the footprint.
    ///
    /// Both axes must overlap; the boundary itself does not count.
    pub fn contains(&self, x: f32, z: f32) -> bool {
        x > self.center_x - self.half_width
            && x < self.center_x + self.half_width
            && z > self.center_z - self.half_depth
            && z < self.center_z + self.half_depth
    }
}

/// A generated maze plus the world-space size of its cells.
#[derive(Debug, Clone)]
pub struct MazeWorld {
    /// The occupancy grid.
    pub maze: Maze,
    /// World-space width of one grid cell.
    pub cell_size: f32,
}

impl ObstacleSource for MazeWorld {
    /// Open cells admit the player; walls and anything off the grid block.
    fn blocks(&self, x: f32, z: f32) -> bool {
        match world_to_cell(x, z, self.cell_size, (self.maze.rows, self.maze.cols)) {
            Some(cell) => !self.maze.is_open(&cell),
            None => true,
        }
    }
}

/// An open square arena bounded by border walls and dotted with buildings.
#[derive(Debug, Clone)]
pub struct ArenaWorld {
    /// Every footprint that blocks movement, buildings and borders alike.
    pub obstacles: Vec<Obstacle>,
    /// Half the side length of the play area, used for spawn sampling.
    pub half_extent: f32,
}

impl ObstacleSource for ArenaWorld {
    /// A single overlapping footprint rejects the position outright.
    fn blocks(&self, x: f32, z: f32) -> bool {
        self.obstacles.iter().any(|o| o.contains(x, z))
    }
}

lazy_static::lazy_static! {
    /// The stock arena: four buildings and the four border walls that keep
    /// the player inside the 100x100 play area.
    pub static ref DEFAULT_ARENA_OBSTACLES: Vec<Obstacle> = vec![
        // Buildings
        Obstacle::new(-10.0, -10.0, 10.0, 10.0),
        Obstacle::new(15.0, 5.0, 15.0, 10.0),
        Obstacle::new(-20.0, 20.0, 20.0, 15.0),
        Obstacle::new(5.0, -15.0, 10.0, 10.0),
        // Border walls
        Obstacle::new(-50.0, 0.0, 2.0, 100.0),
        Obstacle::new(50.0, 0.0, 2.0, 100.0),
        Obstacle::new(0.0, -50.0, 100.0, 2.0),
        Obstacle::new(0.0, 50.0, 100.0, 2.0),
    ];
}

impl ArenaWorld {
    /// The stock arena layout.
    pub fn standard() -> Self {
        Self {
            obstacles: DEFAULT_ARENA_OBSTACLES.clone(),
            half_extent: 50.0,
        }
    }
}

/// Resolves one frame of horizontal movement.
///
/// # Arguments
/// * `position` - The player's current position.
/// * `camera_forward` - The camera's forward direction; only its horizontal
///   projection matters.
/// * `forward`, `backward`, `left`, `right` - Which directions are held.
/// * `speed` - Movement speed in units per second.
/// * `delta_time` - Elapsed time since the previous frame, in seconds.
/// * `world` - Obstacle source the candidate is validated against.
///
/// # Returns
/// The accepted position: the candidate when it lands in free space, or the
/// original position unchanged when anything blocks it. The y component is
/// never touched here.
pub fn resolve_movement(
    position: Vec3,
    camera_forward: Vec3,
    forward: bool,
    backward: bool,
    left: bool,
    right: bool,
    speed: f32,
    delta_time: f32,
    world: &dyn ObstacleSource,
) -> Vec3 {
    let flat_forward = camera_forward.with_y(0.0).normalize();
    if flat_forward == Vec3::zero() {
        // Camera pointing straight up or down; no horizontal frame to move in.
        return position;
    }
    let flat_right = flat_forward.cross(&WORLD_UP).normalize();

    let mut displacement = Vec3::zero();
    if forward {
        displacement = displacement + flat_forward;
    }
    if backward {
        displacement = displacement - flat_forward;
    }
    if left {
        displacement = displacement - flat_right;
    }
    if right {
        displacement = displacement + flat_right;
    }

    let step = displacement * (speed * delta_time);
    let candidate_x = position.x() + step.x();
    let candidate_z = position.z() + step.z();

    if world.blocks(candidate_x, candidate_z) {
        position
    } else {
        Vec3::new(candidate_x, position.y(), candidate_z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::generator::Maze;

    fn maze_world() -> MazeWorld {
        // Cell (1, 1) open, cell (1, 2) walled.
        let maze = Maze::from_ascii("#####\n# ###\n# ###\n#   #\n#####");
        MazeWorld {
            maze,
            cell_size: 1.0,
        }
    }

    #[test]
    fn test_maze_blocks_wall_cell() {
        let world = maze_world();
        assert!(!world.blocks(1.0, 1.0)); // open cell (1,1)
        assert!(world.blocks(2.0, 1.0)); // wall cell (1,2)
        assert!(world.blocks(-5.0, 1.0)); // off the grid
    }

    #[test]
    fn test_maze_move_into_wall_is_full_stop() {
        let world = maze_world();
        let start = Vec3::new(1.0, 1.0, 1.0);
        // Camera looks along -x, so "backward" heads toward +x into the wall
        // at cell (1,2).
        let resolved = resolve_movement(
            start,
            Vec3::new(-1.0, 0.0, 0.0),
            false,
            true,
            false,
            false,
            7.0,
            0.1,
            &world,
        );
        assert_eq!(resolved, start);
    }

    #[test]
    fn test_maze_move_into_open_cell_is_accepted() {
        let world = maze_world();
        let start = Vec3::new(1.0, 1.0, 1.0);
        // Camera looks along +z; the corridor below (1,1) is open.
        let resolved = resolve_movement(
            start,
            Vec3::new(0.0, 0.0, 1.0),
            true,
            false,
            false,
            false,
            7.0,
            0.1,
            &world,
        );
        assert_eq!(resolved, Vec3::new(1.0, 1.0, 1.7));
    }

    #[test]
    fn test_arena_footprint_rejection() {
        let world = ArenaWorld {
            obstacles: vec![Obstacle {
                center_x: 0.0,
                center_z: 0.0,
                half_width: 5.0,
                half_depth: 5.0,
            }],
            half_extent: 50.0,
        };
        assert!(world.blocks(3.0, 3.0));
        assert!(!world.blocks(10.0, 10.0));
        // A single overlapping axis is not enough.
        assert!(!world.blocks(3.0, 10.0));
    }

    #[test]
    fn test_arena_no_sliding_on_diagonal_move() {
        // Moving diagonally into a wall stops entirely, even though the
        // z-only component of the move would have been legal.
        let world = ArenaWorld {
            obstacles: vec![Obstacle {
                center_x: 2.0,
                center_z: 0.0,
                half_width: 1.0,
                half_depth: 100.0,
            }],
            half_extent: 50.0,
        };
        let start = Vec3::new(0.5, 1.0, 0.0);
        let resolved = resolve_movement(
            start,
            Vec3::new(1.0, 0.0, 1.0),
            true,
            false,
            false,
            false,
            10.0,
            0.1,
            &world,
        );
        assert_eq!(resolved, start);
    }

    #[test]
    fn test_standard_arena_keeps_player_in_bounds() {
        let world = ArenaWorld::standard();
        assert!(world.blocks(50.0, 0.0)); // east border wall
        assert!(world.blocks(-10.0, -10.0)); // first building
        assert!(!world.blocks(0.0, 0.0)); // spawn area is clear
    }
}
