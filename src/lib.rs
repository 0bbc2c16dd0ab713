//! Cubequest - the simulation core of a small 3D exploration/collection game.
//!
//! A player-controlled cube moves through either a procedurally generated maze
//! or an open arena scattered with buildings, collecting score-granting pickups
//! while an orbiting, mouse-driven camera follows it. This crate owns the game
//! logic only; windowing, rendering, and raw event delivery belong to a host
//! environment that drives the loop through [`app::GameLoop`] and receives
//! scene changes through the traits in [`host`].
//!
//! # Architecture
//! The crate follows a modular layout:
//! - `app/`: the frame driver and input entry points
//! - `game/`: player, camera, collision, collectibles, and key state
//! - `maze/`: occupancy-grid generation and spawn-point selection
//! - `math/`: vector and coordinate utilities shared by the above
//!
//! # Usage
//! Build a [`config::GameConfig`], hand it to [`app::GameLoop::new`], replay
//! the initial scene into your renderer with [`app::GameLoop::sync_scene`],
//! then call [`app::GameLoop::frame`] once per scheduled animation frame with
//! a monotonically increasing timestamp. The loop never stops on its own; it
//! runs for as long as the host keeps scheduling frames.

#![warn(missing_docs)]

pub mod app;
pub mod config;
pub mod game;
pub mod host;
pub mod math;
pub mod maze;
