//! Grid snake simulation core.
//!
//! This library exposes the game's ECS components, resources, systems, and
//! the world factory for use by the binary and the integration tests.

pub mod components;
pub mod events;
pub mod game;
pub mod maths;
pub mod platform;
pub mod resources;
pub mod systems;
