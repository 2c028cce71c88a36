//! Fruit marker component.
//!
//! Denotes a consumable entity. At most one fruit exists at any time: the
//! movement system despawns it on consumption and the fruit lifecycle
//! system spawns a replacement when none is left.

use bevy_ecs::prelude::Component;

/// Marker for the consumable fruit entity.
#[derive(Component, Debug, Default)]
pub struct Fruit;
