//! Engine systems.
//!
//! Submodules overview
//! - [`animation`] – advance sprite animations on the frame-delay clock
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`inputsimplecontroller`] – translate input state into velocity, variant and facing
//! - [`movement`] – integrate positions from rigid body velocities and time
//! - [`render`] – draw the world using Raylib
//! - [`time`] – update simulation time and delta

pub mod animation;
pub mod input;
pub mod inputsimplecontroller;
pub mod movement;
pub mod render;
pub mod time;
