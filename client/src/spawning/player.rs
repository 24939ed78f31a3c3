use bevy::prelude::*;

use crate::{
    constants::*,
    markers::{FlashlightMarker, MainCameraMarker},
};
use common::{
    components::{Position, Velocity},
    constants::PLAYER_SPAWN,
    markers::PlayerMarker,
    player::{PlayerStats, player_eye_position},
};

// ============================================================================
// Player Spawning
// ============================================================================

// The player itself has no mesh; the camera follows it and carries the flashlight.
pub fn spawn_player_system(mut commands: Commands) {
    commands.spawn((
        PlayerMarker,
        Position(PLAYER_SPAWN),
        Velocity::default(),
        PlayerStats::default(),
    ));

    let [r, g, b] = FLASHLIGHT_COLOR;
    commands
        .spawn((
            Camera3d::default(),
            Projection::from(PerspectiveProjection {
                fov: FPV_CAMERA_FOV_DEGREES.to_radians(),
                ..default()
            }),
            Transform::from_translation(player_eye_position(PLAYER_SPAWN)),
            DistanceFog {
                color: Color::BLACK,
                falloff: FogFalloff::ExponentialSquared { density: FOG_DENSITY },
                ..default()
            },
            MainCameraMarker,
        ))
        .with_children(|parent| {
            // Spot lights shine down their local -Z, the same way the camera looks
            parent.spawn((
                SpotLight {
                    color: Color::srgb(r, g, b),
                    intensity: FLASHLIGHT_INTENSITY,
                    range: FLASHLIGHT_RANGE,
                    outer_angle: FLASHLIGHT_OUTER_ANGLE,
                    inner_angle: FLASHLIGHT_INNER_ANGLE,
                    shadows_enabled: true,
                    ..default()
                },
                Transform::default(),
                Visibility::Visible,
                FlashlightMarker,
            ));
        });

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: LIGHT_AMBIENT_BRIGHTNESS,
        affects_lightmapped_meshes: false,
    });
}
