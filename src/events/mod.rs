//! Plain event and data types exchanged between frontend and systems.
//!
//! Submodules overview
//! - [`input`] – movement directions and discrete input events

pub mod input;
