//! ECS resources made available to systems.
//!
//! Overview
//! - `input` – per-frame keyboard state of the keys relevant to the demo
//! - `screensize` – framebuffer dimensions in pixels
//! - `texturestore` – loaded textures keyed by string IDs
//! - `worldtime` – simulation time and delta

pub mod input;
pub mod screensize;
pub mod texturestore;
pub mod worldtime;
