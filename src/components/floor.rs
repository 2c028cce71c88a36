//! Floor walkability component.
//!
//! World-boundary tiles carry this component; `walkable: false` marks cells
//! the fruit spawner must never pick (wall tiles). Cells without any Floor
//! entity are walkable by default.

use bevy_ecs::prelude::Component;

/// Walkability of a world tile.
#[derive(Component, Clone, Copy, Debug)]
pub struct Floor {
    pub walkable: bool,
}

impl Floor {
    pub fn blocked() -> Self {
        Self { walkable: false }
    }
}
