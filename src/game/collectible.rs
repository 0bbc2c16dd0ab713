//! Collectibles and their pickup lifecycle.
//!
//! A fixed number of collectibles is live at all times. Each one is created
//! at an open spawn point, destroyed when the player comes within the capture
//! radius, and immediately replaced by a fresh instance somewhere else. They
//! are never batch-regenerated, so the live count configured at startup holds
//! for the whole session.

use crate::game::World;
use crate::host::RenderableId;
use crate::math::vec::Vec3;
use rand::Rng;

/// One live pickup in the world.
#[derive(Debug, Clone, Copy)]
pub struct Collectible {
    /// Renderable id the host knows this pickup by.
    pub id: RenderableId,
    /// World position.
    pub position: Vec3,
}

/// A pickup that happened this frame: which renderable vanished and which
/// replaced it.
#[derive(Debug, Clone, Copy)]
pub struct PickupEvent {
    /// The collected pickup's renderable id.
    pub removed: RenderableId,
    /// The freshly spawned replacement.
    pub spawned: Collectible,
}

/// The set of live collectibles.
#[derive(Debug)]
pub struct CollectibleField {
    items: Vec<Collectible>,
    capture_radius: f32,
    next_id: u64,
    spawn_height: f32,
}

impl CollectibleField {
    /// Spawns the initial set of `count` collectibles at open points.
    pub fn new<R: Rng>(
        count: usize,
        capture_radius: f32,
        spawn_height: f32,
        world: &World,
        rng: &mut R,
    ) -> Self {
        let mut field = Self {
            items: Vec::with_capacity(count),
            capture_radius,
            // Id 0 belongs to the player.
            next_id: 1,
            spawn_height,
        };
        for _ in 0..count {
            let collectible = field.spawn(world, rng);
            field.items.push(collectible);
        }
        field
    }

    fn spawn<R: Rng>(&mut self, world: &World, rng: &mut R) -> Collectible {
        let id = RenderableId(self.next_id);
        self.next_id += 1;
        Collectible {
            id,
            position: world.spawn_point(rng, self.spawn_height),
        }
    }

    /// Collects every pickup within the capture radius of the player.
    ///
    /// Each collected pickup is replaced in place by a newly spawned one, so
    /// the live count never changes. Returns one event per pickup; the caller
    /// adds the score and forwards the scene changes to the host.
    pub fn collect_near<R: Rng>(
        &mut self,
        player_position: Vec3,
        world: &World,
        rng: &mut R,
    ) -> Vec<PickupEvent> {
        let mut events = Vec::new();
        for index in 0..self.items.len() {
            if self.items[index].position.distance(&player_position) < self.capture_radius {
                let removed = self.items[index].id;
                let spawned = self.spawn(world, rng);
                self.items[index] = spawned;
                events.push(PickupEvent { removed, spawned });
            }
        }
        events
    }

    /// The live collectibles, for scene sync and tests.
    pub fn items(&self) -> &[Collectible] {
        &self.items
    }
}
