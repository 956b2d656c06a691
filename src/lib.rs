//! DialogueTime library.
//!
//! This module exposes the demo's ECS components, resources, and systems
//! for use in integration tests.

pub mod components;
pub mod game;
pub mod resources;
pub mod systems;
