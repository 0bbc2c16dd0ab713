//! Game configuration and construction-time validation.
//!
//! Everything tunable about a session lives in [`GameConfig`]. A config is
//! validated once, before any game state is built; a malformed value (even
//! maze dimensions, zero collectibles, a non-positive speed) is rejected with
//! a descriptive [`ConfigError`] instead of surfacing later as out-of-range
//! grid access.

use crate::game::collision::Obstacle;
use thiserror::Error;

/// Error raised when a [`GameConfig`] cannot produce a valid game.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Maze dimensions must be odd so the carve pattern stays in range.
    #[error("maze dimensions must be odd, got {rows}x{cols}")]
    EvenMazeDimensions {
        /// Configured row count.
        rows: usize,
        /// Configured column count.
        cols: usize,
    },
    /// A maze needs at least a 5x5 grid to have a carvable interior.
    #[error("maze dimensions must be at least 5x5, got {rows}x{cols}")]
    MazeTooSmall {
        /// Configured row count.
        rows: usize,
        /// Configured column count.
        cols: usize,
    },
    /// The carve must begin strictly inside the grid's outer wall ring.
    #[error("start cell ({row}, {col}) is not in the maze interior")]
    StartCellOutsideInterior {
        /// Row of the rejected start cell.
        row: usize,
        /// Column of the rejected start cell.
        col: usize,
    },
    /// The collectible count is held constant and must start above zero.
    #[error("collectible count must be greater than zero")]
    ZeroCollectibles,
    /// A scalar parameter that must be strictly positive was not.
    #[error("{name} must be positive, got {value}")]
    NonPositive {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f32,
    },
}

/// Which kind of world the player explores.
#[derive(Debug, Clone)]
pub enum WorldConfig {
    /// A generated maze; movement is validated against grid cells.
    Maze {
        /// Grid rows, must be odd and at least 5.
        rows: usize,
        /// Grid columns, must be odd and at least 5.
        cols: usize,
        /// World-space width of one grid cell.
        cell_size: f32,
    },
    /// An open arena; movement is validated against rectangular footprints.
    OpenArena {
        /// Buildings and border walls blocking movement.
        obstacles: Vec<Obstacle>,
        /// Half the side length of the square play area, used for spawning.
        half_extent: f32,
    },
}

/// Orbit camera parameters.
#[derive(Debug, Clone, Copy)]
pub struct CameraConfig {
    /// Distance from the player to the camera.
    pub radius: f32,
    /// Extra height added to the camera position.
    pub height_offset: f32,
    /// Height above the player position the camera aims at.
    pub eye_height: f32,
    /// Radians of rotation per unit of mouse movement.
    pub sensitivity: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            radius: 8.0,
            height_offset: 1.0,
            eye_height: 1.0,
            sensitivity: 0.002,
        }
    }
}

/// Vertical motion parameters.
#[derive(Debug, Clone, Copy)]
pub struct PhysicsConfig {
    /// Constant downward acceleration in units per second squared.
    pub gravity: f32,
    /// Instantaneous upward velocity applied by a jump.
    pub jump_strength: f32,
    /// Resting height of the player above the floor.
    pub ground_height: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: -120.0,
            jump_strength: 30.0,
            ground_height: 1.0,
        }
    }
}

/// Full configuration for one game session.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// The world variant to build.
    pub world: WorldConfig,
    /// Horizontal movement speed in units per second.
    pub move_speed: f32,
    /// How many collectibles are live at any moment.
    pub collectible_count: usize,
    /// Distance at which a collectible is picked up.
    pub capture_radius: f32,
    /// Orbit camera parameters.
    pub camera: CameraConfig,
    /// Vertical motion parameters.
    pub physics: PhysicsConfig,
    /// Seed for maze generation and spawning; `None` uses a thread-local RNG
    /// seed so every session differs.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world: WorldConfig::Maze {
                rows: 15,
                cols: 15,
                cell_size: 4.0,
            },
            move_speed: 7.0,
            collectible_count: 5,
            capture_radius: 1.5,
            camera: CameraConfig::default(),
            physics: PhysicsConfig::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Checks every parameter, returning the first violation found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match &self.world {
            WorldConfig::Maze {
                rows,
                cols,
                cell_size,
            } => {
                if *rows < 5 || *cols < 5 {
                    return Err(ConfigError::MazeTooSmall {
                        rows: *rows,
                        cols: *cols,
                    });
                }
                if rows % 2 == 0 || cols % 2 == 0 {
                    return Err(ConfigError::EvenMazeDimensions {
                        rows: *rows,
                        cols: *cols,
                    });
                }
                Self::positive("cell_size", *cell_size)?;
            }
            WorldConfig::OpenArena { half_extent, .. } => {
                Self::positive("half_extent", *half_extent)?;
            }
        }

        if self.collectible_count == 0 {
            return Err(ConfigError::ZeroCollectibles);
        }

        Self::positive("move_speed", self.move_speed)?;
        Self::positive("capture_radius", self.capture_radius)?;
        Self::positive("camera radius", self.camera.radius)?;
        Self::positive("camera sensitivity", self.camera.sensitivity)?;
        Self::positive("jump_strength", self.physics.jump_strength)?;
        Ok(())
    }

    fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
        if value > 0.0 {
            Ok(())
        } else {
            Err(ConfigError::NonPositive { name, value })
        }
    }
}
