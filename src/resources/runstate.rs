//! Run state resource.
//!
//! Carries the quit flag raised by the input pump when a quit signal
//! arrives. The main loop checks it once per tick, between system
//! execution and frame pacing; there is no mid-tick cancellation.

use bevy_ecs::prelude::Resource;

/// Tick-loop control flags.
#[derive(Resource, Debug, Default)]
pub struct RunState {
    /// Set when a quit signal (escape, `q`, terminal close) was observed.
    pub quit: bool,
}
