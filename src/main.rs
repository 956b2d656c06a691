//! DialogueTime main entry point.
//!
//! A minimal 2D sprite animation demo written in Rust using:
//! - **raylib** for windowing, graphics, and input
//! - **bevy_ecs** for entity-component-system architecture
//!
//! The demo loads two vertical-strip sprite sheets for a player character
//! (idle and run), moves the player left/right with A/D, and renders the
//! active animation with a horizontal flip when facing left.
//!
//! # Main Loop
//!
//! 1. Initialize the raylib window, ECS world and resources
//! 2. Load the player sheets and spawn the player entity
//! 3. Run the main loop:
//!    - Poll input, update velocity/variant/facing, integrate movement
//!    - Advance the animation clock
//!    - Render the current frame
//! 4. Textures are released when the world drops on exit

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod components;
mod game;
mod resources;
mod systems;

use bevy_ecs::prelude::*;
use clap::Parser;

use crate::resources::input::InputState;
use crate::resources::screensize::ScreenSize;
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::animate;
use crate::systems::input::update_input_state;
use crate::systems::inputsimplecontroller::input_simple_controller;
use crate::systems::movement::movement;
use crate::systems::render::render_system;
use crate::systems::time::update_world_time;

const WINDOW_WIDTH: i32 = 800;
const WINDOW_HEIGHT: i32 = 600;
const TARGET_FPS: u32 = 60;

/// DialogueTime 2D sprite animation demo
#[derive(Parser)]
#[command(version, about = "A tiny raylib + bevy_ecs sprite animation demo")]
struct Cli {}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let _cli = Cli::parse();

    // --------------- Raylib window ---------------
    let (mut rl, thread) = raylib::init()
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .title("DialogueTime")
        .build();
    rl.set_target_fps(TARGET_FPS);
    // Escape stays bound as the exit key; window close also quits.

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(ScreenSize {
        w: WINDOW_WIDTH,
        h: WINDOW_HEIGHT,
    });
    world.insert_resource(InputState::default());

    if let Err(e) = game::setup(&mut world, &mut rl, &thread) {
        log::error!("setup failed: {e}");
        std::process::exit(-1);
    }

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    let mut update = Schedule::default();
    update.add_systems(update_input_state);
    update.add_systems(input_simple_controller.after(update_input_state));
    update.add_systems(movement.after(input_simple_controller));
    update.add_systems(animate.after(input_simple_controller));
    update.add_systems(render_system.after(movement).after(animate));

    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);
    }

    log::info!("shutting down");
}
