use bevy_ecs::prelude::*;
use bevy_math::Vec3;

use crate::constants::*;

// ============================================================================
// Player Body
// ============================================================================

// Camera position for a player standing at `feet`.
#[must_use]
pub fn player_eye_position(feet: Vec3) -> Vec3 {
    feet + Vec3::Y * PLAYER_HEIGHT.mul_add(PLAYER_EYE_HEIGHT_RATIO, PLAYER_RADIUS)
}

// Horizontal velocity for a movement input. `input.x` strafes right, `input.z` walks
// forward; `yaw` is the facing angle in radians, 0 looking down -Z.
#[must_use]
pub fn movement_velocity(input: Vec3, yaw: f32, running: bool) -> Vec3 {
    let input = Vec3::new(input.x, 0.0, input.z);
    if input.length_squared() <= PHYSICS_EPSILON {
        return Vec3::ZERO;
    }
    let input = input.normalize();

    let forward = Vec3::new(-yaw.sin(), 0.0, -yaw.cos());
    let right = Vec3::new(yaw.cos(), 0.0, -yaw.sin());
    let speed = if running { SPEED_RUN } else { SPEED_WALK };

    (forward * input.z + right * input.x) * speed
}

// ============================================================================
// Player Stats
// ============================================================================

// Flashlight battery and sanity, both percentages.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct PlayerStats {
    pub battery: f32,
    pub sanity: f32,
    pub flashlight_on: bool,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self {
            battery: BATTERY_MAX,
            sanity: SANITY_MAX,
            flashlight_on: true,
        }
    }
}

impl PlayerStats {
    // Advance by `delta` seconds. `hunted` is true while any ghost is hunting the player.
    pub fn tick(&mut self, delta: f32, hunted: bool) {
        if self.flashlight_on {
            self.battery = BATTERY_DRAIN_RATE.mul_add(-delta, self.battery).max(0.0);
            if self.battery <= 0.0 {
                self.flashlight_on = false;
            }
        }

        let sanity_rate = if hunted { -SANITY_DRAIN_RATE } else { SANITY_RECOVERY_RATE };
        self.sanity = sanity_rate.mul_add(delta, self.sanity).clamp(0.0, SANITY_MAX);
    }

    // Flip the flashlight. An empty battery keeps it off. Returns the new state.
    pub fn toggle_flashlight(&mut self) -> bool {
        self.flashlight_on = !self.flashlight_on && self.battery > 0.0;
        self.flashlight_on
    }

    // Top up the battery. Returns false if it was already full.
    pub fn recharge(&mut self) -> bool {
        if self.battery >= BATTERY_MAX {
            return false;
        }
        self.battery = (self.battery + BATTERY_RECHARGE_AMOUNT).min(BATTERY_MAX);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn battery_drains_one_percent_per_second() {
        let mut stats = PlayerStats::default();
        stats.tick(10.0, false);
        assert_relative_eq!(stats.battery, 90.0);
        assert!(stats.flashlight_on);
    }

    #[test]
    fn empty_battery_turns_the_flashlight_off() {
        let mut stats = PlayerStats {
            battery: 0.5,
            ..PlayerStats::default()
        };
        stats.tick(1.0, false);
        assert_eq!(stats.battery, 0.0);
        assert!(!stats.flashlight_on);
        assert!(!stats.toggle_flashlight());
    }

    #[test]
    fn flashlight_off_saves_battery() {
        let mut stats = PlayerStats::default();
        assert!(!stats.toggle_flashlight());
        stats.tick(5.0, false);
        assert_relative_eq!(stats.battery, BATTERY_MAX);
        assert!(stats.toggle_flashlight());
    }

    #[test]
    fn recharge_is_capped() {
        let mut stats = PlayerStats {
            battery: 90.0,
            ..PlayerStats::default()
        };
        assert!(stats.recharge());
        assert_relative_eq!(stats.battery, BATTERY_MAX);
        assert!(!stats.recharge());
    }

    #[test]
    fn sanity_drains_while_hunted_and_recovers_after() {
        let mut stats = PlayerStats::default();
        stats.tick(10.0, true);
        assert_relative_eq!(stats.sanity, SANITY_MAX - 10.0 * SANITY_DRAIN_RATE);
        stats.tick(10.0, false);
        assert_relative_eq!(stats.sanity, SANITY_MAX - 10.0 * SANITY_DRAIN_RATE + 10.0 * SANITY_RECOVERY_RATE);
        stats.tick(1000.0, true);
        assert_eq!(stats.sanity, 0.0);
    }

    #[test]
    fn forward_at_zero_yaw_is_negative_z() {
        let velocity = movement_velocity(Vec3::new(0.0, 0.0, 1.0), 0.0, false);
        assert_relative_eq!(velocity.z, -SPEED_WALK);
        assert_relative_eq!(velocity.x, 0.0);
    }

    #[test]
    fn diagonal_input_is_normalized() {
        let velocity = movement_velocity(Vec3::new(1.0, 0.0, 1.0), 0.3, true);
        assert_relative_eq!(velocity.length(), SPEED_RUN, epsilon = 1e-5);
    }

    #[test]
    fn eye_sits_above_the_feet() {
        assert_relative_eq!(player_eye_position(Vec3::ZERO).y, 1.35, epsilon = 1e-6);
    }
}
