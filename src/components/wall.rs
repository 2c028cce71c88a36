//! Wall marker component.
//!
//! Border and obstacle entities carry this marker. Walls are spawned once
//! at world setup and are immutable for the game's lifetime; colliding the
//! head with one stops the snake permanently.

use bevy_ecs::prelude::Component;

/// Marker for immovable wall entities.
#[derive(Component, Debug, Default)]
pub struct Wall;
