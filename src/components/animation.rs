//! Animation playback state.

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// Named animation clip an entity can play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimationVariant {
    Idle,
    Run,
}

/// Horizontal orientation controlling mirrored rendering.
///
/// Facing only affects the draw flip, never which sheet is sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    Left,
    Right,
}

/// Per-entity animation playback state.
///
/// `frame_index` is only meaningful relative to the active variant's clip,
/// so [`set_variant`](Animation::set_variant) resets playback whenever the
/// variant changes.
#[derive(Debug, Clone, Component, Serialize, Deserialize)]
pub struct Animation {
    pub variant: AnimationVariant,
    pub facing: Facing,
    pub frame_index: usize,
    pub elapsed_time: f32,
}

impl Animation {
    pub fn new(variant: AnimationVariant) -> Self {
        Self {
            variant,
            facing: Facing::Right,
            frame_index: 0,
            elapsed_time: 0.0,
        }
    }

    /// Switch to another variant, restarting playback from frame 0.
    ///
    /// Setting the current variant again is a no-op, so holding a key does
    /// not freeze the animation on its first frame.
    pub fn set_variant(&mut self, variant: AnimationVariant) {
        if self.variant != variant {
            self.variant = variant;
            self.frame_index = 0;
            self.elapsed_time = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_at_frame_zero_facing_right() {
        let anim = Animation::new(AnimationVariant::Idle);
        assert_eq!(anim.variant, AnimationVariant::Idle);
        assert_eq!(anim.facing, Facing::Right);
        assert_eq!(anim.frame_index, 0);
        assert_eq!(anim.elapsed_time, 0.0);
    }

    #[test]
    fn test_set_variant_resets_playback() {
        let mut anim = Animation::new(AnimationVariant::Idle);
        anim.frame_index = 4;
        anim.elapsed_time = 0.07;
        anim.set_variant(AnimationVariant::Run);
        assert_eq!(anim.variant, AnimationVariant::Run);
        assert_eq!(anim.frame_index, 0);
        assert_eq!(anim.elapsed_time, 0.0);
    }

    #[test]
    fn test_set_same_variant_keeps_playback() {
        let mut anim = Animation::new(AnimationVariant::Run);
        anim.frame_index = 3;
        anim.elapsed_time = 0.05;
        anim.set_variant(AnimationVariant::Run);
        assert_eq!(anim.frame_index, 3);
        assert_eq!(anim.elapsed_time, 0.05);
    }
}
