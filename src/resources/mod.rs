//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution.
//!
//! Overview
//! - `drawbuffer` – per-tick draw commands consumed by the frontend
//! - `framecontext` – tick-scoped published renderable geometry
//! - `gameconfig` – arena dimensions, speed, and pacing from config.ini
//! - `input` – input bridge channel and the per-tick event queue
//! - `runstate` – quit flag checked once per tick by the main loop

pub mod drawbuffer;
pub mod framecontext;
pub mod gameconfig;
pub mod input;
pub mod runstate;
