//! Player (snake) component.
//!
//! There is exactly one Player entity in the world. It owns the snake's
//! shared movement state: the current direction, the speed in cells per
//! tick, and the ordered chain of body segment entities.
//!
//! # Invariants
//!
//! - `direction` is never set to a value that would retrace into the first
//!   body segment; the movement system validates candidates before writing.
//! - `speed == 0.0` is the terminal stopped state after hitting a wall or
//!   the snake's own body. Nothing in the core revives a stopped player.
//! - `tail` is ordered head-adjacent first; segments are appended on growth
//!   and never removed in normal play.

use bevy_ecs::prelude::{Component, Entity};
use smallvec::SmallVec;

use crate::events::input::Direction;

/// The single snake entity's movement state and body chain.
#[derive(Component, Debug)]
pub struct Player {
    /// Current movement direction.
    pub direction: Direction,
    /// Movement speed in grid cells per tick. Zero means stopped.
    pub speed: f32,
    /// Entity carrying the head's sprite and segment record.
    pub head: Entity,
    /// Body segment entities, head-adjacent first.
    pub tail: SmallVec<[Entity; 8]>,
}

impl Player {
    pub fn new(head: Entity, speed: f32) -> Self {
        Self {
            direction: Direction::Right,
            speed,
            head,
            tail: SmallVec::new(),
        }
    }

    /// Whether the snake has stopped for good.
    pub fn is_stopped(&self) -> bool {
        self.speed == 0.0
    }
}
