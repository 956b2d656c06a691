//! Simple input-to-velocity controller.
//!
//! Reads the shared [`InputState`](crate::resources::input::InputState) and
//! applies horizontal velocity, animation variant and facing to entities
//! with an [`InputControlled`](crate::components::inputcontrolled::InputControlled)
//! component.
use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::animation::{Animation, AnimationVariant, Facing};
use crate::components::inputcontrolled::InputControlled;
use crate::components::rigidbody::RigidBody;
use crate::resources::input::InputState;

/// Update each controlled entity's velocity and animation state from input.
///
/// Left takes priority when both directions are held. With no direction
/// held the entity idles and keeps its last facing.
pub fn input_simple_controller(
    mut query: Query<(&InputControlled, &mut RigidBody, &mut Animation)>,
    input_state: Res<InputState>,
) {
    for (controlled, mut rigidbody, mut animation) in query.iter_mut() {
        // Reset velocity
        rigidbody.velocity = Vector2 { x: 0.0, y: 0.0 };

        if input_state.move_left.active {
            rigidbody.velocity.x = -controlled.speed;
            animation.facing = Facing::Left;
            animation.set_variant(AnimationVariant::Run);
        } else if input_state.move_right.active {
            rigidbody.velocity.x = controlled.speed;
            animation.facing = Facing::Right;
            animation.set_variant(AnimationVariant::Run);
        } else {
            animation.set_variant(AnimationVariant::Idle);
        }
    }
}
