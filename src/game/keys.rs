//! Keyboard input handling for the game.
//!
//! This module defines the [`GameKey`] enum for abstracting game actions from
//! physical keys, and provides [`KeyState`] for tracking which actions are
//! currently held. It also includes utilities for mapping winit key events to
//! game actions. Event handlers only mutate this state; the per-frame tick is
//! what turns held directions into movement.

use std::collections::HashSet;
use winit::keyboard;

/// Enum representing all in-game actions that can be triggered by keyboard input.
///
/// This abstraction keeps the game logic decoupled from specific physical keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKey {
    /// Move player forward (W or Up Arrow).
    MoveForward,
    /// Move player backward (S or Down Arrow).
    MoveBackward,
    /// Move player left (A or Left Arrow).
    MoveLeft,
    /// Move player right (D or Right Arrow).
    MoveRight,
    /// Jump (Space).
    Jump,
}

/// Tracks the set of currently held game keys.
///
/// Use [`KeyState::press_key`] and [`KeyState::release_key`] to update the
/// state from events, and [`KeyState::is_pressed`] to query it. Held keys
/// persist between frames until released.
#[derive(Debug, Default)]
pub struct KeyState {
    pressed_keys: HashSet<GameKey>,
}

impl KeyState {
    /// Creates a new, empty [`KeyState`].
    pub fn new() -> Self {
        Self {
            pressed_keys: HashSet::new(),
        }
    }

    /// Marks a key as pressed.
    pub fn press_key(&mut self, key: GameKey) {
        self.pressed_keys.insert(key);
    }

    /// Marks a key as released.
    pub fn release_key(&mut self, key: GameKey) {
        self.pressed_keys.remove(&key);
    }

    /// Checks if a key is currently pressed.
    pub fn is_pressed(&self, key: GameKey) -> bool {
        self.pressed_keys.contains(&key)
    }

    /// The four held movement directions as (forward, backward, left, right).
    pub fn held_directions(&self) -> (bool, bool, bool, bool) {
        (
            self.is_pressed(GameKey::MoveForward),
            self.is_pressed(GameKey::MoveBackward),
            self.is_pressed(GameKey::MoveLeft),
            self.is_pressed(GameKey::MoveRight),
        )
    }
}

macro_rules! match_char_key {
    ($c:expr, {
        $($key:literal => $variant:expr),* $(,)?
    }) => {{
        match $c.to_ascii_lowercase().as_str() {
            $($key => Some($variant),)*
            _ => None,
        }
    }};
}

macro_rules! match_named_key {
    ($k:expr, {
        $($key:ident => $variant:expr),* $(,)?
    }) => {{
        match $k {
            $(winit::keyboard::NamedKey::$key => Some($variant),)*
            _ => None,
        }
    }};
}

/// Converts a winit [`keyboard::Key`] to a [`GameKey`] if it maps to an action.
///
/// Supports both named keys (arrows, space) and character keys (WASD).
///
/// # Returns
/// * `Some(GameKey)` if the key maps to a game action.
/// * `None` otherwise.
pub fn winit_key_to_game_key(key: &keyboard::Key) -> Option<GameKey> {
    match key {
        keyboard::Key::Named(named) => match_named_key!(named, {
            ArrowUp => GameKey::MoveForward,
            ArrowDown => GameKey::MoveBackward,
            ArrowLeft => GameKey::MoveLeft,
            ArrowRight => GameKey::MoveRight,
            Space => GameKey::Jump,
        }),

        keyboard::Key::Character(c) => match_char_key!(c, {
            "w" => GameKey::MoveForward,
            "s" => GameKey::MoveBackward,
            "a" => GameKey::MoveLeft,
            "d" => GameKey::MoveRight,
        }),

        _ => None,
    }
}
