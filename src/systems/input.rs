//! Input pump system.
//!
//! Drains the [`InputBridge`] channel (fed by the frontend input thread)
//! into the per-tick [`InputQueue`]. Quit signals raise the [`RunState`]
//! flag instead of entering the queue; everything else is handed to the
//! movement system in arrival order.

use bevy_ecs::prelude::*;

use crate::events::input::InputEvent;
use crate::resources::input::{InputBridge, InputQueue};
use crate::resources::runstate::RunState;

/// Move pending input events from the bridge into this tick's queue.
pub fn pump_input_system(
    bridge: Res<InputBridge>,
    mut queue: ResMut<InputQueue>,
    mut run_state: ResMut<RunState>,
) {
    for event in bridge.rx.try_iter() {
        match event {
            InputEvent::Quit => run_state.quit = true,
            other => queue.push(other),
        }
    }
}
