use bevy::prelude::*;
use tracing::debug;

use crate::{resources::SimStats, route::ScriptedRoute};
use common::{
    components::{Position, Velocity},
    ghost::{Ghost, GhostMode},
    markers::PlayerMarker,
    systems::GhostModeChanged,
};

// ============================================================================
// Simulation Systems
// ============================================================================

// Replace player input with the scripted route
pub fn scripted_input_system(
    time: Res<Time>,
    mut query: Query<(&Position, &mut Velocity, &mut ScriptedRoute), With<PlayerMarker>>,
) {
    let delta = time.delta_secs();

    for (pos, mut vel, mut route) in &mut query {
        let before = route.index();
        let walk = route.steer(pos.0, delta);
        // The route only walks; falling stays with the movement system
        vel.0 = Vec3::new(walk.x, vel.0.y, walk.z);
        if route.index() != before {
            debug!("player reached route point {}, heading to {}", before, route.index());
        }
    }
}

pub fn sim_stats_system(
    mut stats: ResMut<SimStats>,
    mut mode_changes: MessageReader<GhostModeChanged>,
    ghost_query: Query<&Ghost>,
) {
    stats.ticks += 1;

    for change in mode_changes.read() {
        match change.transition.to {
            GhostMode::Hunt => stats.hunts_started += 1,
            GhostMode::Patrol => stats.hunts_lost += 1,
        }
    }

    if ghost_query.iter().any(|ghost| ghost.mode() == GhostMode::Hunt) {
        stats.ticks_hunted += 1;
    }
}
