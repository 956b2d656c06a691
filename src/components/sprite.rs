//! Sprite sheet clips and frame geometry.
//!
//! A [`SpriteClip`] describes one vertical-strip sprite sheet: the texture it
//! samples, the size of a single frame, how many frames the strip holds and
//! how long each frame is shown. The [`AnimationSet`] component binds one
//! clip per [`AnimationVariant`](super::animation::AnimationVariant) so that
//! selecting the active sheet is a single table lookup.

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::components::animation::AnimationVariant;

/// Error building a [`SpriteClip`] from sheet dimensions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClipError {
    #[error("sprite sheet '{tex_key}' declares zero frames")]
    ZeroFrames { tex_key: String },
    #[error(
        "sprite sheet '{tex_key}' height {height}px is not divisible by {frame_count} frames"
    )]
    UnevenFrames {
        tex_key: String,
        height: u32,
        frame_count: usize,
    },
}

/// Immutable data describing one animation clip of a vertical-strip sheet.
///
/// Frames are stacked top to bottom, so the frame width equals the sheet
/// width and the frame height is the sheet height divided by the frame
/// count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteClip {
    /// Texture key in [`crate::resources::texturestore::TextureStore`].
    pub tex_key: String,
    /// Width of a single frame in pixels.
    pub frame_width: f32,
    /// Height of a single frame in pixels.
    pub frame_height: f32,
    /// Number of frames in the strip.
    pub frame_count: usize,
    /// Seconds each frame stays on screen.
    pub frame_delay: f32,
}

impl SpriteClip {
    /// Derive a clip's frame geometry from the sheet's native dimensions.
    ///
    /// Rejects a zero frame count and any sheet height not evenly divisible
    /// by the frame count, since a truncated division would corrupt the last
    /// frame's sampling.
    pub fn from_sheet(
        tex_key: impl Into<String>,
        tex_width: u32,
        tex_height: u32,
        frame_count: usize,
        frame_delay: f32,
    ) -> Result<Self, ClipError> {
        let tex_key = tex_key.into();
        if frame_count == 0 {
            return Err(ClipError::ZeroFrames { tex_key });
        }
        if tex_height as usize % frame_count != 0 {
            return Err(ClipError::UnevenFrames {
                tex_key,
                height: tex_height,
                frame_count,
            });
        }
        Ok(Self {
            tex_key,
            frame_width: tex_width as f32,
            frame_height: (tex_height as usize / frame_count) as f32,
            frame_count,
            frame_delay,
        })
    }
}

/// One [`SpriteClip`] per animation variant.
///
/// The active sheet, frame geometry and frame count all come from the clip
/// selected by the entity's current variant.
#[derive(Component, Clone, Debug)]
pub struct AnimationSet {
    pub idle: SpriteClip,
    pub run: SpriteClip,
}

impl AnimationSet {
    pub fn new(idle: SpriteClip, run: SpriteClip) -> Self {
        Self { idle, run }
    }

    /// Look up the clip bound to a variant.
    pub fn clip(&self, variant: AnimationVariant) -> &SpriteClip {
        match variant {
            AnimationVariant::Idle => &self.idle,
            AnimationVariant::Run => &self.run,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_sheet_divides_height_by_frame_count() {
        let clip = SpriteClip::from_sheet("witch_idle", 48, 384, 6, 0.1).unwrap();
        assert_eq!(clip.frame_width, 48.0);
        assert_eq!(clip.frame_height, 64.0);
        assert_eq!(clip.frame_count, 6);
    }

    #[test]
    fn test_from_sheet_single_frame() {
        let clip = SpriteClip::from_sheet("static", 60, 60, 1, 0.1).unwrap();
        assert_eq!(clip.frame_width, 60.0);
        assert_eq!(clip.frame_height, 60.0);
    }

    #[test]
    fn test_from_sheet_rejects_zero_frames() {
        let err = SpriteClip::from_sheet("bad", 48, 384, 0, 0.1).unwrap_err();
        assert_eq!(
            err,
            ClipError::ZeroFrames {
                tex_key: "bad".to_string()
            }
        );
    }

    #[test]
    fn test_from_sheet_rejects_uneven_height() {
        let err = SpriteClip::from_sheet("bad", 48, 385, 6, 0.1).unwrap_err();
        assert_eq!(
            err,
            ClipError::UnevenFrames {
                tex_key: "bad".to_string(),
                height: 385,
                frame_count: 6,
            }
        );
    }

    #[test]
    fn test_animation_set_lookup() {
        let idle = SpriteClip::from_sheet("idle", 48, 384, 6, 0.1).unwrap();
        let run = SpriteClip::from_sheet("run", 48, 512, 8, 0.1).unwrap();
        let set = AnimationSet::new(idle, run);
        assert_eq!(set.clip(AnimationVariant::Idle).frame_count, 6);
        assert_eq!(set.clip(AnimationVariant::Run).frame_count, 8);
    }
}
