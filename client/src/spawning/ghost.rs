use bevy::prelude::*;

use crate::{constants::GHOST_COLOR, markers::GhostModelMarker, resources::SpawnConfig};
use common::{
    constants::{GHOST_LENGTH, GHOST_RADIUS},
    ghost::Ghost,
    markers::GhostMarker,
};

// ============================================================================
// Ghost Spawning
// ============================================================================

pub fn spawn_ghost_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<SpawnConfig>,
) {
    if !config.ghost_enabled {
        info!("ghost disabled");
        return;
    }

    let ghost = Ghost::with_default_route();
    let [r, g, b, a] = GHOST_COLOR;

    commands.spawn((
        Mesh3d(meshes.add(Capsule3d::new(GHOST_RADIUS, GHOST_LENGTH))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgba(r, g, b, a),
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            ..default()
        })),
        Transform::from_translation(ghost.position()),
        Visibility::default(),
        GhostMarker,
        GhostModelMarker,
        ghost,
    ));
}
