#[allow(clippy::wildcard_imports)]
use bevy::prelude::*;

// ============================================================================
// Client Resources
// ============================================================================

// Startup options taken from the command line
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct SpawnConfig {
    pub debug_colors: bool,
    pub ghost_enabled: bool,
}

// Where the player is looking, in radians. Yaw 0 looks down -Z.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct PlayerLook {
    pub yaw: f32,
    pub pitch: f32,
}

impl PlayerLook {
    #[must_use]
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    #[must_use]
    pub fn direction(&self) -> Vec3 {
        self.rotation() * Vec3::NEG_Z
    }
}

// Distance to whatever the crosshair is on, if it is within reach
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct InteractTarget(pub Option<f32>);
