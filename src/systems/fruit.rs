//! Fruit lifecycle system.
//!
//! Each tick, check whether any entity still holds both [`Fruit`] and
//! [`Sprite`]. If none does (the movement system consumed it earlier this
//! tick, or the world just started), spawn exactly one replacement at a
//! random unoccupied walkable cell. Resolution despawns before this check
//! runs, so never more than one fruit is outstanding.

use bevy_ecs::prelude::*;
use log::{debug, warn};
use rustc_hash::FxHashSet;

use crate::components::floor::Floor;
use crate::components::fruit::Fruit;
use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::game;
use crate::maths::Cell;
use crate::resources::gameconfig::GameConfig;

/// Respawn the fruit when none is left in the world.
pub fn fruit_lifecycle_system(
    fruit_q: Query<(), (With<Fruit>, With<Sprite>)>,
    occupied_q: Query<&MapPosition>,
    floor_q: Query<(&Floor, &MapPosition)>,
    config: Res<GameConfig>,
    mut commands: Commands,
) {
    if !fruit_q.is_empty() {
        return;
    }

    let occupied: FxHashSet<Cell> = occupied_q.iter().map(MapPosition::grid).collect();
    let blocked: FxHashSet<Cell> = floor_q
        .iter()
        .filter(|(floor, _)| !floor.walkable)
        .map(|(_, position)| position.grid())
        .collect();

    match game::pick_free_cell(&config, &occupied, &blocked) {
        Some(cell) => {
            commands.spawn(game::fruit_bundle(cell));
            debug!("fruit spawned at {:?}", cell);
        }
        None => warn!("no free cell left for a fruit"),
    }
}
