//! World factory: arena, player, fruit, and tail growth.
//!
//! Builds the entities the simulation operates on. The bordered arena and
//! the player are created once at startup; fruit entities and tail segments
//! are created during play by the fruit lifecycle and movement systems
//! through the helpers here.
//!
//! An optional JSON level layout can add interior wall cells on top of the
//! default border:
//!
//! ```json
//! {
//!   "grid_width": 32,
//!   "grid_height": 24,
//!   "walls": [[10, 5], [10, 6], [10, 7]]
//! }
//! ```

use bevy_ecs::prelude::*;
use log::info;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::components::floor::Floor;
use crate::components::fruit::Fruit;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::segment::Segment;
use crate::components::sprite::Sprite;
use crate::components::tailpiece::TailPiece;
use crate::components::wall::Wall;
use crate::maths::Cell;
use crate::resources::gameconfig::GameConfig;

/// Optional level layout loaded from JSON.
///
/// Grid dimensions override the config; `walls` lists interior wall cells
/// added on top of the default border.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LevelLayout {
    pub grid_width: u32,
    pub grid_height: u32,
    #[serde(default)]
    pub walls: Vec<[i32; 2]>,
}

impl LevelLayout {
    /// Load a layout from a JSON file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read layout {}: {}", path.display(), e))?;
        serde_json::from_str(&data)
            .map_err(|e| format!("Failed to parse layout {}: {}", path.display(), e))
    }
}

/// Components shared by every wall tile.
fn wall_bundle(cell: Cell) -> impl Bundle {
    (
        Wall,
        Floor::blocked(),
        Sprite::cell("wall"),
        MapPosition::at_cell(cell),
    )
}

/// Components of a fruit entity at the given cell.
pub fn fruit_bundle(cell: Cell) -> impl Bundle {
    (Fruit, Sprite::cell("fruit"), MapPosition::at_cell(cell))
}

/// Spawn the bordered arena and the player entity.
///
/// Walls cover the grid perimeter plus any interior cells from `layout`.
/// The player starts at the grid centre, heading right, with the speed
/// taken from [`GameConfig`].
pub fn setup_map(world: &mut World, layout: Option<&LevelLayout>) {
    let (width, height, speed) = {
        let config = world.resource::<GameConfig>();
        (
            config.grid_width as i32,
            config.grid_height as i32,
            config.speed,
        )
    };

    let mut wall_cells: Vec<Cell> = Vec::new();
    for y in 0..height {
        for x in 0..width {
            if x == 0 || x == width - 1 || y == 0 || y == height - 1 {
                wall_cells.push(Cell::new(x, y));
            }
        }
    }
    if let Some(layout) = layout {
        for &[x, y] in &layout.walls {
            wall_cells.push(Cell::new(x, y));
        }
    }
    for cell in wall_cells {
        world.spawn(wall_bundle(cell));
    }

    let centre = Cell::new(width / 2, height / 2);
    let head = world
        .spawn((
            Segment::new(centre),
            Sprite::cell("player"),
            MapPosition::at_cell(centre),
        ))
        .id();
    // The head entity carries the Player state and references itself.
    world.entity_mut(head).insert(Player::new(head, speed));

    info!(
        "arena {}x{} built, player at {:?}, speed {}",
        width, height, centre, speed
    );
}

/// Spawn one tail segment on the cell the tail end last vacated.
///
/// The caller appends the returned entity to [`Player::tail`]. The segment
/// sits behind the chain, outside the head's cell, and stays put until the
/// chain's propagation reaches it, which is exactly the "just grown" grace
/// the tail walk relies on.
pub fn attach_tail(commands: &mut Commands, cell: Cell) -> Entity {
    commands
        .spawn((
            TailPiece,
            Segment::new(cell),
            Sprite::cell("tail"),
            MapPosition::at_cell(cell),
        ))
        .id()
}

/// Pick a random grid cell that is neither occupied nor blocked.
///
/// `occupied` holds the cells of every positioned entity this tick;
/// `blocked` the cells of non-walkable floor tiles. Returns `None` when the
/// arena is completely full.
pub fn pick_free_cell(
    config: &GameConfig,
    occupied: &FxHashSet<Cell>,
    blocked: &FxHashSet<Cell>,
) -> Option<Cell> {
    let mut candidates: Vec<Cell> = Vec::new();
    for y in 0..config.grid_height as i32 {
        for x in 0..config.grid_width as i32 {
            let cell = Cell::new(x, y);
            if !occupied.contains(&cell) && !blocked.contains(&cell) {
                candidates.push(cell);
            }
        }
    }
    if candidates.is_empty() {
        None
    } else {
        Some(candidates[fastrand::usize(..candidates.len())])
    }
}
