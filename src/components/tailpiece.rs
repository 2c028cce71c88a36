//! Tail piece marker component.
//!
//! Distinguishes snake body segments from the head and from walls when the
//! movement system classifies what the head collided with. Head-into-body
//! contact stops the snake just like a wall does.

use bevy_ecs::prelude::Component;

/// Marker for snake body segment entities.
#[derive(Component, Debug, Default)]
pub struct TailPiece;
