use anyhow::{Context, Result};
use bevy::{prelude::*, time::TimeUpdateStrategy};
use clap::Parser;
use std::time::Duration;
use tracing::{info, warn};

use common::{
    components::{LevelColliders, Position, Velocity},
    constants::PLAYER_SPAWN,
    geometry::Surface,
    ghost::Ghost,
    map::{LayoutParams, generate_level},
    markers::{GhostMarker, PlayerMarker},
    player::PlayerStats,
    systems::{GhostModeChanged, ghost_update_system, player_movement_system, player_stats_system},
};
use sim::{
    init_tracing,
    resources::SimStats,
    route::ScriptedRoute,
    systems::{scripted_input_system, sim_stats_system},
};

// ============================================================================
// CLI Argument Parsing
// ============================================================================

#[derive(Parser)]
#[command(author, version, about = "Haunted school headless simulation", long_about = None)]
struct Args {
    // Number of ticks to simulate
    #[arg(long, default_value_t = 3600)]
    ticks: u64,

    // Simulation rate
    #[arg(long, default_value_t = 60)]
    tick_hz: u32,

    // Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,

    // Write the generated level descriptors to this file as JSON
    #[cfg(feature = "json")]
    #[arg(long)]
    dump_json: Option<std::path::PathBuf>,

    // Disable the ghost
    #[arg(long, default_value_t = false)]
    no_ghost: bool,
}

// ============================================================================
// Main
// ============================================================================

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level)?;

    if args.tick_hz == 0 {
        anyhow::bail!("--tick-hz must be positive");
    }

    let level = generate_level(&LayoutParams::default()).context("failed to generate level")?;
    info!(
        "generated {} pieces: {} walls, {} desks, {} stall dividers, {} colliders",
        level.len(),
        level.count_by_surface(Surface::Wall),
        level.count_by_surface(Surface::Desk),
        level.count_by_surface(Surface::StallDivider),
        level.colliders().count()
    );

    #[cfg(feature = "json")]
    if let Some(path) = &args.dump_json {
        let file = std::fs::File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
        serde_json::to_writer_pretty(std::io::BufWriter::new(file), &level)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("wrote level descriptors to {}", path.display());
    }

    let tick_duration = Duration::from_secs_f64(1.0 / f64::from(args.tick_hz));

    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(tick_duration))
        .insert_resource(LevelColliders::from_level(&level))
        .insert_resource(level)
        .insert_resource(SimStats::default())
        .add_message::<GhostModeChanged>()
        .add_systems(
            Update,
            (
                // Input, then movement, then everything that reads the new position
                scripted_input_system,
                player_movement_system,
                ghost_update_system,
                player_stats_system,
                sim_stats_system,
            )
                .chain(),
        );

    app.world_mut().spawn((
        PlayerMarker,
        Position(PLAYER_SPAWN),
        Velocity::default(),
        PlayerStats::default(),
        ScriptedRoute::default(),
    ));
    if args.no_ghost {
        info!("ghost disabled");
    } else {
        app.world_mut().spawn((GhostMarker, Ghost::with_default_route()));
    }

    app.finish();
    app.cleanup();

    info!("simulating {} ticks at {} Hz...", args.ticks, args.tick_hz);
    for _ in 0..args.ticks {
        app.update();
    }

    report(app.world_mut(), tick_duration);
    Ok(())
}

fn report(world: &mut World, tick_duration: Duration) {
    let stats = world.resource::<SimStats>();
    let seconds = tick_duration.as_secs_f64() * stats.ticks as f64;
    info!(
        "{} ticks ({seconds:.1} s): {} hunts started, {} lost, hunted for {} ticks",
        stats.ticks, stats.hunts_started, stats.hunts_lost, stats.ticks_hunted
    );

    let mut players = world.query_filtered::<(&Position, &PlayerStats), With<PlayerMarker>>();
    for (pos, player_stats) in players.iter(world) {
        info!(
            "player at ({:.2}, {:.2}), battery {:.0}%, sanity {:.0}%",
            pos.0.x, pos.0.z, player_stats.battery, player_stats.sanity
        );
        if player_stats.sanity <= 0.0 {
            warn!("player sanity ran out");
        }
    }

    let mut ghosts = world.query::<&Ghost>();
    for ghost in ghosts.iter(world) {
        info!(
            "ghost at ({:.2}, {:.2}, {:.2}) in {:?}, next waypoint {}",
            ghost.position().x,
            ghost.position().y,
            ghost.position().z,
            ghost.mode(),
            ghost.patrol_index()
        );
    }
}
