//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the demo world.
//!
//! Submodules overview:
//! - [`animation`] – playback state (variant, facing, frame index) for sprite animations
//! - [`inputcontrolled`] – input-driven movement intent for the keyboard
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`rigidbody`] – simple kinematic body storing velocity
//! - [`sprite`] – per-variant sprite sheet clips and frame geometry

pub mod animation;
pub mod inputcontrolled;
pub mod mapposition;
pub mod rigidbody;
pub mod sprite;
