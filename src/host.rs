//! Interfaces to the host rendering and input environment.
//!
//! The game core never draws, opens windows, or reads raw events; it tells
//! the host what changed and the host does the rest. Hosts implement
//! [`SceneHost`] to mirror game objects into their scene graph and
//! [`ScoreDisplay`] to surface the score to the user. Input flows the other
//! way, through the entry points on [`crate::app::GameLoop`].

use crate::math::vec::Vec3;

/// Identifies one renderable object across scene mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderableId(pub u64);

/// The player cube's renderable id; collectibles use ids from 1 upward.
pub const PLAYER_RENDERABLE: RenderableId = RenderableId(0);

/// What a renderable represents, so hosts can pick geometry and materials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderableKind {
    /// The player cube.
    Player,
    /// A score-granting pickup.
    Collectible,
}

/// Scene-graph mutation, implemented by the host renderer.
pub trait SceneHost {
    /// A new renderable entered the world at the given position.
    fn renderable_added(&mut self, id: RenderableId, kind: RenderableKind, position: Vec3);
    /// An existing renderable moved.
    fn renderable_moved(&mut self, id: RenderableId, position: Vec3);
    /// A renderable left the world.
    fn renderable_removed(&mut self, id: RenderableId);
}

/// Human-readable score output, implemented by the host UI.
pub trait ScoreDisplay {
    /// The score changed; show the new value.
    fn show_score(&mut self, score: u32);
}
