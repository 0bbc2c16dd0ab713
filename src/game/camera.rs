//! Orbit camera following the player.
//!
//! The camera sits on a sphere of fixed radius around the player, positioned
//! by two accumulated angles. Yaw and pitch are stored in radians and pitch
//! is clamped to [-pi/2, pi/2] at the moment a delta is applied, never when
//! the transform is read. Computing the transform is a pure function of the
//! stored angles and the player position, so calling it twice with the same
//! inputs yields the same camera twice.
//!
//! Two orientation-update modes feed the same yaw/pitch state:
//! - drag mode: angles change only while a mouse button is held, from
//!   frame-to-frame cursor deltas ([`OrbitCamera::begin_drag`],
//!   [`OrbitCamera::drag_to`], [`OrbitCamera::end_drag`])
//! - pointer-lock mode: angles change continuously from raw relative deltas
//!   ([`OrbitCamera::apply_delta`])

use crate::config::CameraConfig;
use crate::math::vec::Vec3;
use std::f32::consts::FRAC_PI_2;

/// A camera position and the point it looks at, ready for the host renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTransform {
    /// World-space camera position.
    pub position: Vec3,
    /// World-space look-at target.
    pub target: Vec3,
}

/// Accumulated orientation state for the orbiting camera.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    /// Horizontal angle around the player, radians.
    pub yaw: f32,
    /// Vertical angle, radians, clamped to [-pi/2, pi/2] on write.
    pub pitch: f32,
    /// Distance from the player.
    pub radius: f32,
    /// Extra height added to the camera position.
    pub height_offset: f32,
    /// Height above the player position the camera aims at.
    pub eye_height: f32,
    /// Radians per unit of mouse movement.
    pub sensitivity: f32,
    drag_anchor: Option<(f64, f64)>,
}

impl OrbitCamera {
    /// Creates a camera with the configured parameters and the stock starting
    /// orientation (45 degrees around, 22.5 degrees up).
    pub fn new(config: &CameraConfig) -> Self {
        Self {
            yaw: std::f32::consts::FRAC_PI_4,
            pitch: std::f32::consts::PI / 8.0,
            radius: config.radius,
            height_offset: config.height_offset,
            eye_height: config.eye_height,
            sensitivity: config.sensitivity,
            drag_anchor: None,
        }
    }

    /// Applies a raw relative movement delta (pointer-lock mode).
    ///
    /// Pitch is clamped here, before storing, so the stored state never holds
    /// an out-of-range angle.
    pub fn apply_delta(&mut self, delta_x: f64, delta_y: f64) {
        self.yaw += delta_x as f32 * self.sensitivity;
        self.pitch =
            (self.pitch + delta_y as f32 * self.sensitivity).clamp(-FRAC_PI_2, FRAC_PI_2);
    }

    /// Starts a drag at the given cursor position (drag mode).
    pub fn begin_drag(&mut self, x: f64, y: f64) {
        self.drag_anchor = Some((x, y));
    }

    /// Ends the current drag; subsequent cursor movement is ignored.
    pub fn end_drag(&mut self) {
        self.drag_anchor = None;
    }

    /// Feeds an absolute cursor position while dragging.
    ///
    /// Does nothing unless a drag is active; the frame-to-frame difference is
    /// routed through [`OrbitCamera::apply_delta`] so both modes share the
    /// same clamping and sensitivity.
    pub fn drag_to(&mut self, x: f64, y: f64) {
        if let Some((last_x, last_y)) = self.drag_anchor {
            self.apply_delta(x - last_x, y - last_y);
            self.drag_anchor = Some((x, y));
        }
    }

    /// The direction the camera looks in, from camera toward the player.
    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            -self.yaw.cos() * self.pitch.cos(),
            -self.pitch.sin(),
            -self.yaw.sin() * self.pitch.cos(),
        )
    }

    /// Computes the camera transform for the given player position.
    ///
    /// The camera sits at
    /// `player + radius * (cos yaw * cos pitch, sin pitch, sin yaw * cos pitch)`
    /// with the height offset added, aiming at the player's eye height. Pure:
    /// no state is read besides the stored angles and parameters, and none is
    /// written.
    pub fn update(&self, player_position: Vec3) -> CameraTransform {
        let position = Vec3::new(
            player_position.x() + self.radius * self.yaw.cos() * self.pitch.cos(),
            player_position.y() + self.radius * self.pitch.sin() + self.height_offset,
            player_position.z() + self.radius * self.yaw.sin() * self.pitch.cos(),
        );
        let target = player_position.with_y(player_position.y() + self.eye_height);

        CameraTransform { position, target }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> OrbitCamera {
        let mut camera = OrbitCamera::new(&CameraConfig {
            radius: 8.0,
            height_offset: 0.0,
            eye_height: 0.0,
            sensitivity: 0.002,
        });
        camera.yaw = 0.0;
        camera.pitch = 0.0;
        camera
    }

    #[test]
    fn test_zero_angles_put_camera_on_x_axis() {
        let transform = camera().update(Vec3::zero());
        assert!((transform.position.x() - 8.0).abs() < 1e-5);
        assert!(transform.position.y().abs() < 1e-5);
        assert!(transform.position.z().abs() < 1e-5);
        assert_eq!(transform.target, Vec3::zero());
    }

    #[test]
    fn test_update_is_idempotent() {
        let camera = camera();
        let player = Vec3::new(3.0, 1.0, -2.0);
        assert_eq!(camera.update(player), camera.update(player));
    }

    #[test]
    fn test_pitch_clamped_on_write() {
        let mut camera = camera();
        camera.apply_delta(0.0, 10_000.0);
        assert_eq!(camera.pitch, FRAC_PI_2);
        camera.apply_delta(0.0, -100_000.0);
        assert_eq!(camera.pitch, -FRAC_PI_2);
    }

    #[test]
    fn test_drag_requires_held_button() {
        let mut camera = camera();
        camera.drag_to(50.0, 0.0);
        assert_eq!(camera.yaw, 0.0);

        camera.begin_drag(0.0, 0.0);
        camera.drag_to(50.0, 0.0);
        assert!((camera.yaw - 0.1).abs() < 1e-6);

        camera.end_drag();
        camera.drag_to(500.0, 0.0);
        assert!((camera.yaw - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_forward_points_at_player() {
        let mut camera = camera();
        camera.apply_delta(300.0, -150.0);
        let transform = camera.update(Vec3::zero());
        let toward_player = (Vec3::zero() - transform.position).normalize();
        // Unit vectors aligned iff their dot product is 1.
        assert!((camera.forward().dot(&toward_player) - 1.0).abs() < 1e-5);
    }
}
