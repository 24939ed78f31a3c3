use anyhow::{Context, Result};
#[allow(clippy::wildcard_imports)]
use bevy::prelude::*;
use clap::Parser;

use client::{
    resources::{InteractTarget, PlayerLook, SpawnConfig},
    spawning::{spawn_ghost_system, spawn_level_system, spawn_player_system},
    systems::{
        camera::{camera_sync_system, flashlight_sync_system},
        ghosts::ghost_transform_sync_system,
        input::{
            cursor_toggle_system, flashlight_toggle_system, interact_system, interact_target_system,
            jump_input_system, look_input_system, movement_input_system,
        },
        ui::{crosshair_update_system, hud_update_system, setup_hud_system},
    },
};
use common::{
    components::LevelColliders,
    map::{LayoutParams, generate_level},
    systems::{GhostModeChanged, ghost_update_system, player_movement_system, player_stats_system},
};

const FIXED_UPDATE_HZ: f64 = 60.0;
const LOG_FILTER: &str = "wgpu=error,naga=warn";

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(author, version, about = "Haunted school", long_about = None)]
struct Args {
    // Window width
    #[arg(long, default_value = "1200")]
    window_width: u32,

    // Window height
    #[arg(long, default_value = "800")]
    window_height: u32,

    // Random wall colors to make individual wall segments visible
    #[arg(long, default_value_t = false)]
    debug_colors: bool,

    // Disable the ghost
    #[arg(long, default_value_t = false)]
    no_ghost: bool,
}

// ============================================================================
// Main
// ============================================================================

fn main() -> Result<()> {
    let args = Args::parse();

    // Generated before Bevy starts so a bad layout fails the process cleanly
    let level = generate_level(&LayoutParams::default()).context("failed to generate level")?;
    let colliders = LevelColliders::from_level(&level);

    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Haunted School".to_string(),
                    resolution: (args.window_width, args.window_height).into(),
                    ..default()
                }),
                primary_cursor_options: Some(bevy::window::CursorOptions {
                    visible: false,
                    grab_mode: bevy::window::CursorGrabMode::Locked,
                    hit_test: true,
                }),
                ..default()
            })
            .set(bevy::log::LogPlugin {
                filter: LOG_FILTER.to_string(),
                ..default()
            }),
    )
    .insert_resource(Time::<Fixed>::from_hz(FIXED_UPDATE_HZ))
    .insert_resource(ClearColor(Color::BLACK))
    .insert_resource(level)
    .insert_resource(colliders)
    .insert_resource(SpawnConfig {
        debug_colors: args.debug_colors,
        ghost_enabled: !args.no_ghost,
    })
    .insert_resource(PlayerLook::default())
    .insert_resource(InteractTarget::default())
    .add_message::<GhostModeChanged>()
    .add_systems(
        Startup,
        (
            spawn_level_system,
            spawn_player_system,
            spawn_ghost_system,
            setup_hud_system,
        ),
    )
    .add_systems(
        FixedUpdate,
        (
            // Shared simulation, in order: move the player, then react to the new position
            player_movement_system,
            ghost_update_system,
            player_stats_system,
        )
            .chain(),
    )
    .add_systems(
        Update,
        (
            // Toggle cursor lock with Escape
            cursor_toggle_system,
            // Mouse look, WASD and Space
            (look_input_system, movement_input_system, jump_input_system).chain(),
            // F and E keys
            flashlight_toggle_system,
            (interact_target_system, interact_system, crosshair_update_system).chain(),
            // Camera follows player
            camera_sync_system,
            // Flashlight visibility follows battery state
            flashlight_sync_system,
            // Ghost mesh follows the simulated ghost
            ghost_transform_sync_system,
            // Battery and sanity display
            hud_update_system,
        ),
    )
    .run();

    Ok(())
}
