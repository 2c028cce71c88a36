//! Snake segment record.
//!
//! Present on the head entity and on every tail entity. Tracks the grid
//! cell the segment occupied before its last grid-crossing event; the next
//! segment in the chain moves to that cell when propagation runs, giving
//! the lag-one follow-the-leader behavior.

use bevy_ecs::prelude::Component;

use crate::maths::Cell;

/// Per-segment propagation record.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    /// Cell occupied before the last grid-crossing event.
    pub old_position: Cell,
}

impl Segment {
    pub fn new(cell: Cell) -> Self {
        Self { old_position: cell }
    }
}
