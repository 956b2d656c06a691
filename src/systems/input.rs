//! Input system.
//!
//! [`update_input_state`] reads hardware input from Raylib each frame and
//! writes the results into [`crate::resources::input::InputState`]. All
//! other keys are ignored; the quit path (Escape / window close) is observed
//! by the main loop through `window_should_close`.
use bevy_ecs::prelude::*;

use crate::resources::input::InputState;

/// Poll Raylib for keyboard input and update the `InputState` resource.
pub fn update_input_state(mut input: ResMut<InputState>, rl: NonSendMut<raylib::RaylibHandle>) {
    let left_key = input.move_left.key_binding;
    input.move_left.active = rl.is_key_down(left_key);
    input.move_left.just_pressed = rl.is_key_pressed(left_key);
    input.move_left.just_released = rl.is_key_released(left_key);

    let right_key = input.move_right.key_binding;
    input.move_right.active = rl.is_key_down(right_key);
    input.move_right.just_pressed = rl.is_key_pressed(right_key);
    input.move_right.just_released = rl.is_key_released(right_key);
}
