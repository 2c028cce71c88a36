//! World-space position component.
//!
//! Stores the continuous position of an entity in grid units. Movement
//! advances it by sub-cell amounts; everything that needs a discrete cell
//! (collision classification, tail propagation, fruit placement) goes
//! through [`MapPosition::grid`].

use bevy_ecs::prelude::Component;

use crate::maths::{Cell, Vec2};

/// Continuous position of an entity, in grid units.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct MapPosition {
    pub pos: Vec2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
        }
    }

    /// Position exactly on a grid cell.
    pub fn at_cell(cell: Cell) -> Self {
        Self {
            pos: cell.as_vec2(),
        }
    }

    /// The grid cell this position currently falls in.
    pub fn grid(&self) -> Cell {
        self.pos.cell()
    }

    /// Continuous advance by `delta` grid units.
    pub fn move_by(&mut self, delta: Vec2) {
        self.pos += delta;
    }

    /// Teleport exactly onto a grid cell.
    pub fn snap_to(&mut self, cell: Cell) {
        self.pos = cell.as_vec2();
    }
}
