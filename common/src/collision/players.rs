use bevy_math::Vec3;

use super::helpers::{overlap_aabb_vs_aabb, ray_vs_aabb, slide_along_axes};
use crate::{
    constants::{
        GRAVITY, GROUND_LEVEL, GROUND_CHECK_DISTANCE, INTERACT_RANGE, PLAYER_HEIGHT, PLAYER_RADIUS,
        PLAYER_STEP_CLEARANCE,
    },
    geometry::Aabb,
};

// Player body as a box around its feet position. The bottom is lifted by the step
// clearance so the floor slab under the feet never counts as an obstacle.
#[must_use]
pub fn player_aabb(feet: Vec3) -> Aabb {
    Aabb {
        min: Vec3::new(feet.x - PLAYER_RADIUS, feet.y + PLAYER_STEP_CLEARANCE, feet.z - PLAYER_RADIUS),
        max: Vec3::new(feet.x + PLAYER_RADIUS, feet.y + PLAYER_HEIGHT, feet.z + PLAYER_RADIUS),
    }
}

#[must_use]
pub fn overlap_player_vs_aabb(feet: Vec3, obstacle: &Aabb) -> bool {
    overlap_aabb_vs_aabb(&player_aabb(feet), obstacle)
}

// Move the player by `velocity * delta`, sliding along whatever blocks the way.
#[must_use]
pub fn slide_player(feet: Vec3, velocity: Vec3, delta: f32, obstacles: &[Aabb]) -> Vec3 {
    slide_along_axes(feet, velocity, delta, |pos| {
        obstacles.iter().any(|obstacle| overlap_player_vs_aabb(pos, obstacle))
    })
}

// Apply gravity for one step. Returns the new feet position and vertical velocity.
// The player lands on the ground level or on top of furniture, and stops rising when
// the head hits something.
#[must_use]
pub fn fall_player(feet: Vec3, vertical_velocity: f32, delta: f32, obstacles: &[Aabb]) -> (Vec3, f32) {
    let vertical_velocity = GRAVITY.mul_add(-delta, vertical_velocity);
    let target_y = vertical_velocity.mul_add(delta, feet.y).max(GROUND_LEVEL);
    let moved = Vec3::new(feet.x, target_y, feet.z);

    if obstacles.iter().any(|obstacle| overlap_player_vs_aabb(moved, obstacle)) {
        return (feet, 0.0);
    }
    if target_y <= GROUND_LEVEL {
        return (moved, 0.0);
    }
    (moved, vertical_velocity)
}

// Standing on the ground level or close enough above something solid to jump off it.
#[must_use]
pub fn player_grounded(feet: Vec3, obstacles: &[Aabb]) -> bool {
    if feet.y <= GROUND_LEVEL {
        return true;
    }
    let below = feet - Vec3::Y * GROUND_CHECK_DISTANCE;
    obstacles.iter().any(|obstacle| overlap_player_vs_aabb(below, obstacle))
}

// Distance to the nearest obstacle the player is looking at, within interaction range.
#[must_use]
pub fn interact_target_distance(eye: Vec3, look_dir: Vec3, obstacles: &[Aabb]) -> Option<f32> {
    let dir = look_dir.try_normalize()?;
    obstacles
        .iter()
        .filter(|obstacle| !obstacle.contains_point(eye))
        .filter_map(|obstacle| ray_vs_aabb(eye, dir, INTERACT_RANGE, obstacle))
        .min_by(f32::total_cmp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        constants::{DESK_SIZE, DOOR_HEIGHT, PLAYER_JUMP_SPEED, WALL_HEIGHT},
        map::{LayoutParams, generate_level},
    };

    const DT: f32 = 1.0 / 60.0;

    fn level_obstacles() -> Vec<Aabb> {
        generate_level(&LayoutParams::default())
            .unwrap()
            .colliders()
            .map(|c| c.aabb())
            .collect()
    }

    #[test]
    fn floor_does_not_block() {
        let floor = Aabb {
            min: Vec3::new(-2.0, -0.2, -20.0),
            max: Vec3::new(2.0, 0.0, 20.0),
        };
        assert!(!overlap_player_vs_aabb(Vec3::ZERO, &floor));
    }

    #[test]
    fn lintel_is_above_the_head() {
        let lintel = Aabb {
            min: Vec3::new(-2.1, DOOR_HEIGHT, -0.75),
            max: Vec3::new(-1.9, WALL_HEIGHT, 0.75),
        };
        assert!(!overlap_player_vs_aabb(Vec3::new(-2.0, 0.0, 0.0), &lintel));
    }

    #[test]
    fn spawn_is_free() {
        let obstacles = level_obstacles();
        let spawn = crate::constants::PLAYER_SPAWN;
        assert!(!obstacles.iter().any(|o| overlap_player_vs_aabb(spawn, o)));
    }

    #[test]
    fn hallway_wall_stops_sideways_walk() {
        let obstacles = level_obstacles();
        let mut feet = Vec3::new(0.0, 0.0, -18.0);
        for _ in 0..120 {
            feet = slide_player(feet, Vec3::new(-3.0, 0.0, 0.0), 1.0 / 60.0, &obstacles);
        }
        // Wall inner face at x = -1.9, player half width 0.5
        assert!(feet.x >= -1.4 - 1e-4);
        assert!(feet.x < -1.3);
    }

    #[test]
    fn looking_at_the_end_wall_from_close_by() {
        let obstacles = level_obstacles();
        let eye = Vec3::new(0.0, 1.35, -18.0);
        let distance = interact_target_distance(eye, Vec3::NEG_Z, &obstacles).expect("wall in range");
        assert!((distance - 1.9).abs() < 1e-4);
        assert_eq!(interact_target_distance(eye, Vec3::Z, &obstacles), None);
    }

    #[test]
    fn walks_through_a_classroom_door() {
        let obstacles = level_obstacles();
        // Lined up with the first left door at z = -15
        let mut feet = Vec3::new(0.0, 0.0, -15.0);
        for _ in 0..120 {
            feet = slide_player(feet, Vec3::new(-3.0, 0.0, 0.0), 1.0 / 60.0, &obstacles);
        }
        assert!(feet.x < -3.0, "player stuck at {feet}");
    }

    #[test]
    fn jump_rises_and_lands_back_on_the_floor() {
        let obstacles = level_obstacles();
        let mut feet = crate::constants::PLAYER_SPAWN;
        let mut vertical = PLAYER_JUMP_SPEED;
        let mut peak: f32 = 0.0;

        for _ in 0..120 {
            (feet, vertical) = fall_player(feet, vertical, DT, &obstacles);
            peak = peak.max(feet.y);
        }

        // v^2 / 2g is about 1.27 m
        assert!(peak > 1.1 && peak < 1.3, "peak {peak}");
        assert_eq!(feet.y, GROUND_LEVEL);
        assert_eq!(vertical, 0.0);
        assert!(player_grounded(feet, &obstacles));
    }

    #[test]
    fn head_stops_at_the_door_lintel() {
        let obstacles = level_obstacles();
        // Standing in the first left doorway, right under the lintel
        let mut feet = Vec3::new(-2.0, 0.0, -15.0);
        let mut vertical = PLAYER_JUMP_SPEED;
        let mut peak: f32 = 0.0;

        for _ in 0..30 {
            (feet, vertical) = fall_player(feet, vertical, DT, &obstacles);
            peak = peak.max(feet.y);
        }

        assert!(peak + PLAYER_HEIGHT <= DOOR_HEIGHT + 1e-4, "head reached {}", peak + PLAYER_HEIGHT);
    }

    #[test]
    fn lands_on_top_of_a_desk() {
        let desk = Aabb {
            min: Vec3::new(-0.5, 0.0, -0.3),
            max: Vec3::new(0.5, DESK_SIZE.y, 0.3),
        };
        let mut feet = Vec3::new(0.0, 1.2, 0.0);
        let mut vertical = 0.0;

        for _ in 0..60 {
            (feet, vertical) = fall_player(feet, vertical, DT, &[desk]);
        }

        assert!(feet.y + PLAYER_STEP_CLEARANCE >= DESK_SIZE.y);
        assert!(feet.y < DESK_SIZE.y + GROUND_CHECK_DISTANCE);
        assert!(player_grounded(feet, &[desk]));
        assert!(!player_grounded(feet + Vec3::Y, &[desk]));
    }
}
