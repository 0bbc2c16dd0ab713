//! The frame driver and input entry points.
//!
//! [`GameLoop`] owns the [`GameState`] and exposes two surfaces to the host:
//!
//! * **Input entry points** ([`GameLoop::key_event`], [`GameLoop::mouse_button`],
//!   [`GameLoop::cursor_moved`], [`GameLoop::pointer_delta`]) that the host
//!   calls from its event handlers. These only mutate bookkeeping state (held
//!   keys, camera angles); nothing heavier runs there.
//! * **[`GameLoop::frame`]**, called once per scheduled animation frame with a
//!   monotonically increasing timestamp. One call is one tick: elapsed time is
//!   computed (the first frame counts as zero), held keys become movement
//!   through the collision resolver, vertical motion integrates, pickups are
//!   collected and replaced, and the camera transform is recomputed and
//!   returned for the host to draw with. The loop has no stop condition of its
//!   own; it ends when the host stops scheduling frames.

use crate::config::{ConfigError, GameConfig};
use crate::game::GameState;
use crate::game::camera::CameraTransform;
use crate::game::collision::resolve_movement;
use crate::game::keys::{GameKey, winit_key_to_game_key};
use crate::host::{PLAYER_RENDERABLE, RenderableKind, SceneHost, ScoreDisplay};
use std::time::Duration;
use winit::event::MouseButton;
use winit::keyboard::Key;

/// Drives one game session, one frame at a time.
#[derive(Debug)]
pub struct GameLoop {
    state: GameState,
}

impl GameLoop {
    /// Builds a session from the given configuration.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] for a malformed configuration; nothing is
    /// constructed in that case.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            state: GameState::new(&config)?,
        })
    }

    /// Read access to the session state, mainly for hosts that render world
    /// geometry (maze walls, arena buildings) themselves.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Replays the current scene into a freshly attached host: the player,
    /// every live collectible, and the current score.
    pub fn sync_scene<H: SceneHost + ScoreDisplay>(&self, host: &mut H) {
        host.renderable_added(
            PLAYER_RENDERABLE,
            RenderableKind::Player,
            self.state.player.position,
        );
        for collectible in self.state.collectibles.items() {
            host.renderable_added(
                collectible.id,
                RenderableKind::Collectible,
                collectible.position,
            );
        }
        host.show_score(self.state.score);
    }

    /// Routes a winit keyboard event into the key state.
    pub fn key_event(&mut self, key: &Key, pressed: bool) {
        if let Some(game_key) = winit_key_to_game_key(key) {
            if pressed {
                self.state.key_state.press_key(game_key);
            } else {
                self.state.key_state.release_key(game_key);
            }
        }
    }

    /// Routes a mouse button event; the left button gates drag-mode camera
    /// rotation.
    pub fn mouse_button(&mut self, button: MouseButton, pressed: bool, x: f64, y: f64) {
        if button == MouseButton::Left {
            if pressed {
                self.state.camera.begin_drag(x, y);
            } else {
                self.state.camera.end_drag();
            }
        }
    }

    /// Routes an absolute cursor position (drag mode).
    pub fn cursor_moved(&mut self, x: f64, y: f64) {
        self.state.camera.drag_to(x, y);
    }

    /// Routes a raw relative movement delta (pointer-lock mode).
    pub fn pointer_delta(&mut self, delta_x: f64, delta_y: f64) {
        self.state.camera.apply_delta(delta_x, delta_y);
    }

    /// Runs one tick and returns the camera transform to draw with.
    ///
    /// `now` must come from the host's frame scheduler and increase
    /// monotonically across calls.
    pub fn frame<H: SceneHost + ScoreDisplay>(
        &mut self,
        now: Duration,
        host: &mut H,
    ) -> CameraTransform {
        let state = &mut self.state;

        state.delta_time = match state.last_frame_time {
            Some(previous) => now.saturating_sub(previous).as_secs_f32(),
            None => 0.0,
        };
        state.last_frame_time = Some(now);

        if state.key_state.is_pressed(GameKey::Jump) {
            state.player.try_jump(state.physics.jump_strength);
        }

        let (forward, backward, left, right) = state.key_state.held_directions();
        state.player.position = resolve_movement(
            state.player.position,
            state.camera.forward(),
            forward,
            backward,
            left,
            right,
            state.player.speed,
            state.delta_time,
            state.world.source(),
        );
        state.player.integrate_vertical(
            state.physics.gravity,
            state.physics.ground_height,
            state.delta_time,
        );
        host.renderable_moved(PLAYER_RENDERABLE, state.player.position);

        let pickups =
            state
                .collectibles
                .collect_near(state.player.position, &state.world, &mut state.rng);
        for pickup in pickups {
            state.score += 1;
            host.renderable_removed(pickup.removed);
            host.renderable_added(
                pickup.spawned.id,
                RenderableKind::Collectible,
                pickup.spawned.position,
            );
            host.show_score(state.score);
        }

        state.camera.update(state.player.position)
    }
}
