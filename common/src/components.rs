#[allow(clippy::wildcard_imports)]
use bevy_ecs::prelude::*;
use bevy_math::Vec3;

use crate::{geometry::Aabb, geometry::LevelGeometry};

// ============================================================================
// Shared Game Components
// ============================================================================

// Player feet position in meters
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct Position(pub Vec3);

// Horizontal velocity the player is asking for, in meters per second
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct Velocity(pub Vec3);

// ============================================================================
// Shared Resources
// ============================================================================

// Every collider of the generated level, as boxes the kinematic player is resolved against.
#[derive(Resource, Debug, Clone, Default)]
pub struct LevelColliders(pub Vec<Aabb>);

impl LevelColliders {
    // Furniture counts as a fixed obstacle for the kinematic player.
    #[must_use]
    pub fn from_level(level: &LevelGeometry) -> Self {
        Self(level.colliders().map(|collider| collider.aabb()).collect())
    }
}
