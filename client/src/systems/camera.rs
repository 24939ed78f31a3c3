use bevy::prelude::*;

use crate::{
    markers::{FlashlightMarker, MainCameraMarker},
    resources::PlayerLook,
};
use common::{
    components::Position,
    markers::PlayerMarker,
    player::{PlayerStats, player_eye_position},
};

// ============================================================================
// Camera Sync Systems
// ============================================================================

// Update camera position and rotation to follow the player
pub fn camera_sync_system(
    player_query: Query<&Position, With<PlayerMarker>>,
    look: Res<PlayerLook>,
    mut camera_query: Query<&mut Transform, With<MainCameraMarker>>,
) {
    let Ok(player_pos) = player_query.single() else {
        return;
    };

    for mut camera_transform in &mut camera_query {
        camera_transform.translation = player_eye_position(player_pos.0);
        camera_transform.rotation = look.rotation();
    }
}

// Show or hide the flashlight to match the player's stats
pub fn flashlight_sync_system(
    stats_query: Query<&PlayerStats, (With<PlayerMarker>, Changed<PlayerStats>)>,
    mut light_query: Query<&mut Visibility, With<FlashlightMarker>>,
) {
    let Ok(stats) = stats_query.single() else {
        return;
    };

    let desired_visibility = if stats.flashlight_on {
        Visibility::Visible
    } else {
        Visibility::Hidden
    };
    for mut visibility in &mut light_query {
        if *visibility != desired_visibility {
            *visibility = desired_visibility;
        }
    }
}
