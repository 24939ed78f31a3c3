use bevy::prelude::*;

use common::constants::{PLAYER_SPAWN, SPEED_WALK};

// Close enough to a route point to move on to the next one
const ROUTE_POINT_RADIUS: f32 = 0.1;

// ============================================================================
// Scripted Route
// ============================================================================

// Fixed walk for the headless player: down the hallway, into a classroom and out,
// to the far end, then back to the start. Repeats forever.
#[derive(Component, Debug, Clone)]
pub struct ScriptedRoute {
    points: Vec<Vec3>,
    index: usize,
}

impl Default for ScriptedRoute {
    fn default() -> Self {
        Self::new(vec![
            Vec3::new(0.0, 0.0, -7.0),
            Vec3::new(-4.5, 0.0, -7.0), // Through the door of the second left classroom
            Vec3::new(0.0, 0.0, -7.0),
            Vec3::new(0.0, 0.0, 17.0),
            PLAYER_SPAWN,
        ])
    }
}

impl ScriptedRoute {
    #[must_use]
    pub const fn new(points: Vec<Vec3>) -> Self {
        Self { points, index: 0 }
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    // Walking velocity from `feet` toward the current point, advancing past reached points.
    // Slows down so a single `delta` step never carries the player past the point.
    pub fn steer(&mut self, feet: Vec3, delta: f32) -> Vec3 {
        if self.points.is_empty() {
            return Vec3::ZERO;
        }

        let mut offset = self.points[self.index] - feet;
        if offset.length() <= ROUTE_POINT_RADIUS {
            self.index = (self.index + 1) % self.points.len();
            offset = self.points[self.index] - feet;
        }

        let horizontal = Vec3::new(offset.x, 0.0, offset.z);
        let speed = if delta > 0.0 {
            SPEED_WALK.min(horizontal.length() / delta)
        } else {
            SPEED_WALK
        };
        horizontal.normalize_or_zero() * speed
    }
}
