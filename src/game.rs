//! Demo setup: asset loading and player spawn.

use bevy_ecs::prelude::*;
use raylib::prelude::*;
use thiserror::Error;

use crate::components::animation::{Animation, AnimationVariant};
use crate::components::inputcontrolled::InputControlled;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::{AnimationSet, ClipError, SpriteClip};
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::{TextureLoadError, TextureStore};

pub const PLAYER_IDLE_TEX: &str = "witch_idle";
pub const PLAYER_RUN_TEX: &str = "witch_run";

const PLAYER_IDLE_SHEET: &str = "assets/W_witch_idle.png";
const PLAYER_RUN_SHEET: &str = "assets/W_witch_run.png";
const PLAYER_IDLE_FRAMES: usize = 6;
const PLAYER_RUN_FRAMES: usize = 8;

/// Player movement speed in pixels per second.
const PLAYER_SPEED: f32 = 250.0;
/// Seconds each animation frame stays on screen.
const FRAME_DELAY: f32 = 0.1;

/// Anything that can go wrong while loading the demo's assets.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error(transparent)]
    Texture(#[from] TextureLoadError),
    #[error(transparent)]
    Clip(#[from] ClipError),
}

/// Load the player sheets and spawn the player entity.
///
/// Clip geometry is derived from each texture's native dimensions, so a
/// sheet whose height does not divide evenly by its declared frame count is
/// rejected here instead of sampling a corrupted last frame at draw time.
pub fn setup(
    world: &mut World,
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
) -> Result<(), SetupError> {
    let mut textures = TextureStore::new();
    let (idle_w, idle_h) = textures.load(rl, thread, PLAYER_IDLE_TEX, PLAYER_IDLE_SHEET)?;
    let (run_w, run_h) = textures.load(rl, thread, PLAYER_RUN_TEX, PLAYER_RUN_SHEET)?;
    log::info!(
        "loaded player sheets: idle {}x{}, run {}x{}",
        idle_w,
        idle_h,
        run_w,
        run_h
    );

    let idle = SpriteClip::from_sheet(
        PLAYER_IDLE_TEX,
        idle_w,
        idle_h,
        PLAYER_IDLE_FRAMES,
        FRAME_DELAY,
    )?;
    let run = SpriteClip::from_sheet(PLAYER_RUN_TEX, run_w, run_h, PLAYER_RUN_FRAMES, FRAME_DELAY)?;

    // Player stands on the bottom edge of the window
    let screen = *world.resource::<ScreenSize>();
    let spawn_y = screen.h as f32 - idle.frame_height;

    world.spawn((
        MapPosition::new(0.0, spawn_y),
        RigidBody::new(),
        InputControlled::new(PLAYER_SPEED),
        Animation::new(AnimationVariant::Idle),
        AnimationSet::new(idle, run),
    ));

    world.insert_non_send_resource(textures);
    Ok(())
}
