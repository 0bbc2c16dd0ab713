//! Player state and vertical motion.
//!
//! The player is a ground-locked cube: horizontal position changes go through
//! the collision resolver in [`crate::game::collision`], while this module
//! owns the vertical axis (gravity, jumping, and the grounded flag that gates
//! jump impulses). Orientation lives with the orbit camera, which both aims
//! the view and supplies the movement frame.

use crate::math::vec::Vec3;

/// The player character's state in the world.
#[derive(Debug, Clone)]
pub struct Player {
    /// World position of the player's center.
    pub position: Vec3,
    /// Horizontal movement speed in units per second.
    pub speed: f32,
    /// Current vertical velocity, units per second. Positive is up.
    pub vertical_velocity: f32,
    /// Whether the player is resting on the ground. Jumping clears this and
    /// only landing sets it again, so a jump impulse cannot re-trigger while
    /// airborne.
    pub grounded: bool,
}

impl Player {
    /// Creates a player at rest at the given position.
    pub fn new(position: Vec3, speed: f32) -> Self {
        Self {
            position,
            speed,
            vertical_velocity: 0.0,
            grounded: true,
        }
    }

    /// Applies a jump impulse if the player is grounded.
    ///
    /// The impulse is an instantaneous velocity set; while airborne the call
    /// is a no-op. Returns whether a jump started.
    pub fn try_jump(&mut self, jump_strength: f32) -> bool {
        if !self.grounded {
            return false;
        }
        self.vertical_velocity = jump_strength;
        self.grounded = false;
        true
    }

    /// Integrates vertical velocity over one frame.
    ///
    /// Position moves by the current velocity, then gravity accelerates the
    /// velocity. On reaching or passing the ground plane the player is
    /// clamped to ground height and marked grounded, making the next jump
    /// impulse eligible.
    pub fn integrate_vertical(&mut self, gravity: f32, ground_height: f32, delta_time: f32) {
        self.position = self
            .position
            .with_y(self.position.y() + self.vertical_velocity * delta_time);
        self.vertical_velocity += gravity * delta_time;

        if self.position.y() <= ground_height {
            self.position = self.position.with_y(ground_height);
            self.vertical_velocity = 0.0;
            self.grounded = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRAVITY: f32 = -120.0;
    const GROUND: f32 = 1.0;

    fn player() -> Player {
        Player::new(Vec3::new(0.0, GROUND, 0.0), 7.0)
    }

    #[test]
    fn test_jump_only_when_grounded() {
        let mut player = player();
        assert!(player.try_jump(30.0));
        assert!(!player.grounded);

        // A second impulse while airborne must not re-trigger.
        assert!(!player.try_jump(30.0));
        assert_eq!(player.vertical_velocity, 30.0);
    }

    #[test]
    fn test_gravity_returns_player_to_ground() {
        let mut player = player();
        player.try_jump(30.0);

        let mut rose = false;
        for _ in 0..600 {
            player.integrate_vertical(GRAVITY, GROUND, 1.0 / 60.0);
            if player.position.y() > GROUND {
                rose = true;
            }
        }

        assert!(rose, "jump should have lifted the player");
        assert_eq!(player.position.y(), GROUND);
        assert!(player.grounded);
        assert_eq!(player.vertical_velocity, 0.0);
    }

    #[test]
    fn test_grounded_player_stays_put() {
        let mut player = player();
        player.integrate_vertical(GRAVITY, GROUND, 1.0 / 60.0);
        assert_eq!(player.position.y(), GROUND);
        assert!(player.grounded);
    }
}
