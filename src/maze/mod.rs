//! Maze generation and spawn-point selection.
//!
//! [`generator`] produces the occupancy grid the maze world is built from,
//! and [`spawn`] picks open interior cells for placing the player and
//! collectibles.

pub mod generator;
pub mod spawn;
