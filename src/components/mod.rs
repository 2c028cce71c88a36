//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities
//! in the game world.
//!
//! Submodules overview:
//! - [`floor`] – walkability marker for world-boundary tiles
//! - [`fruit`] – marker for the single consumable fruit entity
//! - [`mapposition`] – continuous world-space position in grid units
//! - [`player`] – the snake's direction, speed, and body chain
//! - [`segment`] – per-segment grid-crossing record for tail propagation
//! - [`sprite`] – texture key, size, and derived bounding geometry
//! - [`tailpiece`] – marker distinguishing body segments for collision kind
//! - [`wall`] – marker for immovable border entities

pub mod floor;
pub mod fruit;
pub mod mapposition;
pub mod player;
pub mod segment;
pub mod sprite;
pub mod tailpiece;
pub mod wall;
