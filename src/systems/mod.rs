//! Game systems.
//!
//! This module groups the per-tick ECS systems. They run single-threaded in
//! a fixed order every tick: input pump, render pass (publisher), snake
//! movement and collision, fruit lifecycle.
//!
//! Submodules overview
//! - [`fruit`] – respawn the fruit when none is left
//! - [`input`] – drain the frontend input channel into the tick queue
//! - [`movement`] – direction intake, collision, head advance, tail chain
//! - [`render`] – draw pass and frame-context publication

pub mod fruit;
pub mod input;
pub mod movement;
pub mod render;
