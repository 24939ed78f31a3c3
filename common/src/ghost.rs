#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};

use bevy_ecs::prelude::*;
use bevy_math::Vec3;

use crate::{constants::*, errors::GhostError};

// ============================================================================
// Ghost State
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub enum GhostMode {
    #[default]
    Patrol,
    Hunt,
}

// Mode change reported by `Ghost::update`, with the distance that triggered it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GhostTransition {
    pub from: GhostMode,
    pub to: GhostMode,
    pub distance: f32,
}

// Patrol/hunt adversary. Moves freely through the level; walls never stop it.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Ghost {
    position: Vec3,
    mode: GhostMode,
    patrol_index: usize,
    speed: f32,
    waypoints: Vec<Vec3>,
}

impl Ghost {
    pub fn new(position: Vec3, waypoints: Vec<Vec3>, speed: f32) -> Result<Self, GhostError> {
        if waypoints.is_empty() {
            return Err(GhostError::NoWaypoints);
        }
        Ok(Self {
            position,
            mode: GhostMode::Patrol,
            patrol_index: 0,
            speed,
            waypoints,
        })
    }

    // Ghost at the standard spawn point walking the standard patrol route.
    #[must_use]
    pub fn with_default_route() -> Self {
        Self {
            position: GHOST_SPAWN,
            mode: GhostMode::Patrol,
            patrol_index: 0,
            speed: GHOST_SPEED,
            waypoints: GHOST_PATROL_POINTS.to_vec(),
        }
    }

    #[must_use]
    pub const fn position(&self) -> Vec3 {
        self.position
    }

    #[must_use]
    pub const fn mode(&self) -> GhostMode {
        self.mode
    }

    #[must_use]
    pub const fn patrol_index(&self) -> usize {
        self.patrol_index
    }

    #[must_use]
    pub const fn speed(&self) -> f32 {
        self.speed
    }

    #[must_use]
    pub fn waypoints(&self) -> &[Vec3] {
        &self.waypoints
    }

    #[must_use]
    pub fn current_waypoint(&self) -> Vec3 {
        self.waypoints[self.patrol_index]
    }

    // Advance one tick against the player's position. Returns the mode change, if any.
    pub fn update(&mut self, player: Vec3, dt: f32) -> Option<GhostTransition> {
        let distance = self.position.distance(player);

        // Handle mode transitions; the gap between the two ranges keeps it from flickering
        let previous = self.mode;
        self.mode = match self.mode {
            GhostMode::Patrol if distance < GHOST_DETECT_RANGE => GhostMode::Hunt,
            GhostMode::Hunt if distance > GHOST_LOSE_RANGE => GhostMode::Patrol,
            mode => mode,
        };

        // Execute movement based on current mode
        match self.mode {
            GhostMode::Patrol => {
                let target = self.current_waypoint();
                self.position = step_toward(self.position, target, self.speed * dt);
                // Tolerance absorbs f32 drift when the steps land exactly on the radius
                if self.position.distance(target) <= GHOST_WAYPOINT_RADIUS + GEOMETRY_EPSILON {
                    self.patrol_index = (self.patrol_index + 1) % self.waypoints.len();
                }
            }
            GhostMode::Hunt => {
                let speed = self.speed * GHOST_HUNT_SPEED_MULTIPLIER;
                self.position = step_toward(self.position, player, speed * dt);
            }
        }

        (self.mode != previous).then_some(GhostTransition {
            from: previous,
            to: self.mode,
            distance,
        })
    }
}

// Move at most `max_step` toward `target`, stopping on it rather than passing it.
fn step_toward(from: Vec3, target: Vec3, max_step: f32) -> Vec3 {
    let offset = target - from;
    let distance = offset.length();
    if distance <= PHYSICS_EPSILON {
        return from;
    }
    from + offset / distance * max_step.min(distance)
}

// Vertical offset applied on top of the simulated position when drawing the ghost.
#[must_use]
pub fn ghost_bob_offset(wall_clock_secs: f32) -> f32 {
    (wall_clock_secs * GHOST_BOB_FREQUENCY).sin() * GHOST_BOB_AMPLITUDE
}
