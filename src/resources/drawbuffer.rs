//! Per-tick draw list resource.
//!
//! The render system fills this with one command per renderable entity;
//! the frontend flushes it to the terminal after the tick. Keeping the
//! draw list as plain data means the publisher stays testable without a
//! terminal attached.

use bevy_ecs::prelude::Resource;

use crate::maths::Cell;

/// One cell to draw, identified by the sprite's texture key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawCmd {
    pub cell: Cell,
    pub tex_key: String,
}

/// Draw commands for the current tick, in publish order.
#[derive(Resource, Debug, Default)]
pub struct DrawBuffer {
    commands: Vec<DrawCmd>,
}

impl DrawBuffer {
    pub fn begin_frame(&mut self) {
        self.commands.clear();
    }

    pub fn push(&mut self, cell: Cell, tex_key: impl Into<String>) {
        self.commands.push(DrawCmd {
            cell,
            tex_key: tex_key.into(),
        });
    }

    pub fn commands(&self) -> &[DrawCmd] {
        &self.commands
    }
}
