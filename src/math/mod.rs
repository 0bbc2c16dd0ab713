//! Math utilities and types for the game core.
//!
//! This module provides the vector type used throughout the simulation and the
//! coordinate transformations between maze grid cells and world space. The
//! vector type keeps a GPU-compatible memory layout so hosts can hand
//! positions straight to their rendering backend.
//!
//! # Module Organization
//!
//! - [`vec`] module contains the [`vec::Vec3`] type and its operations
//! - [`coordinates`] module maps between grid cells and world positions

pub mod coordinates;
pub mod vec;
