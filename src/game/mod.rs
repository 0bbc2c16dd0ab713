//! Game state management module.
//!
//! This module defines the [`GameState`] struct, which tracks all mutable
//! state for one session: the player, the orbit camera, the world being
//! explored, the live collectibles, held keys, timing, and the score. All of
//! it lives here as fields rather than module globals, and the frame driver
//! in [`crate::app`] is the single writer outside the input entry points.

pub mod camera;
pub mod collectible;
pub mod collision;
pub mod keys;
pub mod player;

use self::camera::OrbitCamera;
use self::collectible::CollectibleField;
use self::collision::{ArenaWorld, MazeWorld, ObstacleSource};
use self::keys::KeyState;
use self::player::Player;
use crate::config::{ConfigError, GameConfig, PhysicsConfig, WorldConfig};
use crate::math::coordinates::cell_to_world;
use crate::math::vec::Vec3;
use crate::maze::generator::{Cell, Maze};
use crate::maze::spawn::find_open_cell;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

/// The environment the player moves through.
#[derive(Debug, Clone)]
pub enum World {
    /// A generated maze validated cell by cell.
    Maze(MazeWorld),
    /// An open arena validated against rectangular footprints.
    Arena(ArenaWorld),
}

impl World {
    /// The obstacle source movement is validated against.
    pub fn source(&self) -> &dyn ObstacleSource {
        match self {
            World::Maze(maze) => maze,
            World::Arena(arena) => arena,
        }
    }

    /// Picks an unblocked spawn position at the given height.
    ///
    /// Maze worlds sample open interior cells; arena worlds rejection-sample
    /// points inside the play area until one clears every footprint. Both
    /// terminate almost surely because each world has open space by
    /// construction.
    pub fn spawn_point<R: Rng>(&self, rng: &mut R, y: f32) -> Vec3 {
        match self {
            World::Maze(world) => {
                let cell = find_open_cell(&world.maze, rng);
                cell_to_world(&cell, world.cell_size, y).into()
            }
            World::Arena(world) => loop {
                let x = rng.gen_range(-world.half_extent..world.half_extent);
                let z = rng.gen_range(-world.half_extent..world.half_extent);
                if !world.blocks(x, z) {
                    return Vec3::new(x, y, z);
                }
            },
        }
    }
}

/// The entire mutable state of one game session.
///
/// Updated every frame by [`crate::app::GameLoop`]; input handlers touch only
/// the key state and camera angles.
#[derive(Debug)]
pub struct GameState {
    /// The player character.
    pub player: Player,
    /// The orbiting camera, which also owns yaw/pitch.
    pub camera: OrbitCamera,
    /// The world being explored.
    pub world: World,
    /// Live collectibles.
    pub collectibles: CollectibleField,
    /// Currently held keys.
    pub key_state: KeyState,
    /// Pickups collected so far.
    pub score: u32,
    /// Vertical motion parameters.
    pub physics: PhysicsConfig,
    /// Randomness for spawning; seeded when the config asks for it.
    pub rng: StdRng,
    /// Host timestamp of the previous frame, if any.
    pub last_frame_time: Option<Duration>,
    /// Seconds elapsed between the two most recent frames.
    pub delta_time: f32,
}

impl GameState {
    /// Builds the full session state from a validated configuration.
    ///
    /// # Errors
    /// Returns the first [`ConfigError`] found; no state is built from a
    /// malformed config.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let ground = config.physics.ground_height;
        let (world, player_start) = match &config.world {
            WorldConfig::Maze {
                rows,
                cols,
                cell_size,
            } => {
                let start = Cell::new(1, 1);
                let maze = Maze::generate(*rows, *cols, start, &mut rng)?;
                let player_start: Vec3 = cell_to_world(&start, *cell_size, ground).into();
                (
                    World::Maze(MazeWorld {
                        maze,
                        cell_size: *cell_size,
                    }),
                    player_start,
                )
            }
            WorldConfig::OpenArena {
                obstacles,
                half_extent,
            } => (
                World::Arena(ArenaWorld {
                    obstacles: obstacles.clone(),
                    half_extent: *half_extent,
                }),
                Vec3::new(0.0, ground, 0.0),
            ),
        };

        let collectibles = CollectibleField::new(
            config.collectible_count,
            config.capture_radius,
            ground,
            &world,
            &mut rng,
        );

        Ok(Self {
            player: Player::new(player_start, config.move_speed),
            camera: OrbitCamera::new(&config.camera),
            world,
            collectibles,
            key_state: KeyState::new(),
            score: 0,
            physics: config.physics,
            rng,
            last_frame_time: None,
            delta_time: 0.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    #[test]
    fn test_maze_session_spawns_player_on_open_cell() {
        let config = GameConfig {
            seed: Some(4),
            ..GameConfig::default()
        };
        let state = GameState::new(&config).unwrap();

        let World::Maze(world) = &state.world else {
            panic!("default config builds a maze world");
        };
        assert!(!world.blocks(state.player.position.x(), state.player.position.z()));
        assert_eq!(state.collectibles.items().len(), 5);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_arena_session_spawns_clear_collectibles() {
        let config = GameConfig {
            world: crate::config::WorldConfig::OpenArena {
                obstacles: collision::DEFAULT_ARENA_OBSTACLES.clone(),
                half_extent: 50.0,
            },
            seed: Some(9),
            ..GameConfig::default()
        };
        let state = GameState::new(&config).unwrap();

        for collectible in state.collectibles.items() {
            assert!(
                !state
                    .world
                    .source()
                    .blocks(collectible.position.x(), collectible.position.z())
            );
        }
    }

    #[test]
    fn test_invalid_config_builds_nothing() {
        let config = GameConfig {
            collectible_count: 0,
            ..GameConfig::default()
        };
        assert!(GameState::new(&config).is_err());
    }
}
