//! Input-controlled movement component.
//!
//! Describes how an entity responds to keyboard input. The
//! [`input_simple_controller`](crate::systems::inputsimplecontroller::input_simple_controller)
//! system reads this component to update the entity's velocity, animation
//! variant and facing.

use bevy_ecs::prelude::Component;

/// Movement intent derived from player keyboard input.
///
/// `speed` is the horizontal movement speed in pixels per second applied
/// while a directional key is held.
#[derive(Component, Clone, Copy, Debug)]
pub struct InputControlled {
    /// Movement speed in pixels per second.
    pub speed: f32,
}

impl InputControlled {
    /// Create an InputControlled component with the given speed.
    pub fn new(speed: f32) -> Self {
        Self { speed }
    }
}
