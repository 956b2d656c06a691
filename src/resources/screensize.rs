//! Screen size resource.
//!
//! Stores the framebuffer dimensions in pixels. The spawn code reads this to
//! place the player along the bottom edge of the window.

use bevy_ecs::prelude::Resource;

/// Current screen size in pixels.
#[derive(Resource, Clone, Copy)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}
