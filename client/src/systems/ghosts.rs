use bevy::prelude::*;

use crate::markers::GhostModelMarker;
use common::ghost::{Ghost, ghost_bob_offset};

// ============================================================================
// Ghost Sync System
// ============================================================================

// Update ghost Transform from the simulated position, plus a bob driven by the real
// clock so pausing or slowing the game does not affect it.
pub fn ghost_transform_sync_system(
    time: Res<Time<Real>>,
    mut ghost_query: Query<(&Ghost, &mut Transform), With<GhostModelMarker>>,
) {
    let bob = ghost_bob_offset(time.elapsed_secs());

    for (ghost, mut transform) in &mut ghost_query {
        transform.translation = ghost.position() + Vec3::Y * bob;
    }
}
