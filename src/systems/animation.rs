//! Animation system.
//!
//! [`animate`] advances each entity's animation on a fixed per-frame delay
//! and wraps the frame index at the active clip's frame count.
//!
//! # Animation Flow
//!
//! 1. Clip data lives in the entity's [`AnimationSet`](crate::components::sprite::AnimationSet)
//! 2. The [`Animation`](crate::components::animation::Animation) component tracks playback state
//! 3. `animate` accumulates [`WorldTime`](crate::resources::worldtime::WorldTime) delta
//!    and steps `frame_index` once per elapsed `frame_delay`
//! 4. Variant switching (and the playback reset that comes with it) happens in
//!    [`input_simple_controller`](crate::systems::inputsimplecontroller::input_simple_controller)

use bevy_ecs::prelude::*;

use crate::components::animation::Animation;
use crate::components::sprite::AnimationSet;
use crate::resources::worldtime::WorldTime;

/// Advance animation playback.
///
/// Contract
/// - Reads [`WorldTime`] for the frame delta.
/// - Mutates [`Animation`] playback state.
/// - The timer keeps its remainder on each advance so frame timing does not
///   drift; the frame index wraps modulo the active clip's frame count.
pub fn animate(mut query: Query<(&mut Animation, &AnimationSet)>, time: Res<WorldTime>) {
    for (mut anim, set) in query.iter_mut() {
        let clip = set.clip(anim.variant);

        anim.elapsed_time += time.delta;
        while anim.elapsed_time >= clip.frame_delay {
            anim.elapsed_time -= clip.frame_delay;
            anim.frame_index = (anim.frame_index + 1) % clip.frame_count;
        }
    }
}
