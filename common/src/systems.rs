#[allow(clippy::wildcard_imports)]
use bevy_ecs::prelude::*;
use bevy_math::Vec3;
use bevy_time::Time;
use tracing::info;

use crate::{
    collision::{fall_player, slide_player},
    components::{LevelColliders, Position, Velocity},
    ghost::{Ghost, GhostMode, GhostTransition},
    markers::PlayerMarker,
    player::{PlayerStats, player_eye_position},
};

// ============================================================================
// Messages
// ============================================================================

// Sent whenever a ghost switches between patrol and hunt.
#[derive(Message, Debug, Clone, Copy)]
pub struct GhostModeChanged {
    pub ghost: Entity,
    pub transition: GhostTransition,
}

// ============================================================================
// Shared Game Systems
// ============================================================================

// Move the player by its requested velocity, sliding along level colliders. The vertical
// part of the velocity is owned by gravity; input only sets the horizontal part.
// Runs on a fixed timestep in the client and every tick in the sim.
pub fn player_movement_system(
    time: Res<Time>,
    colliders: Res<LevelColliders>,
    mut query: Query<(&mut Position, &mut Velocity), With<PlayerMarker>>,
) {
    let delta = time.delta_secs();

    for (mut pos, mut vel) in &mut query {
        let (mut next, vertical) = fall_player(pos.0, vel.0.y, delta, &colliders.0);
        vel.0.y = vertical;

        let horizontal = Vec3::new(vel.0.x, 0.0, vel.0.z);
        if horizontal.length_squared() > 0.0 {
            next = slide_player(next, horizontal, delta, &colliders.0);
        }
        if pos.0 != next {
            pos.0 = next;
        }
    }
}

// Drive every ghost toward its waypoint or the player, depending on its mode.
pub fn ghost_update_system(
    time: Res<Time>,
    player_query: Query<&Position, With<PlayerMarker>>,
    mut ghost_query: Query<(Entity, &mut Ghost)>,
    mut mode_changes: MessageWriter<GhostModeChanged>,
) {
    let Ok(player_pos) = player_query.single() else {
        return;
    };
    let target = player_eye_position(player_pos.0);
    let delta = time.delta_secs();

    for (entity, mut ghost) in &mut ghost_query {
        if let Some(transition) = ghost.update(target, delta) {
            info!(
                "ghost {:?} {:?} -> {:?} at distance {:.1}",
                entity, transition.from, transition.to, transition.distance
            );
            mode_changes.write(GhostModeChanged {
                ghost: entity,
                transition,
            });
        }
    }
}

// Battery drain and sanity; sanity drops while any ghost is hunting.
pub fn player_stats_system(
    time: Res<Time>,
    ghost_query: Query<&Ghost>,
    mut stats_query: Query<&mut PlayerStats, With<PlayerMarker>>,
) {
    let hunted = ghost_query.iter().any(|ghost| ghost.mode() == GhostMode::Hunt);
    let delta = time.delta_secs();

    for mut stats in &mut stats_query {
        stats.tick(delta, hunted);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{constants::*, geometry::Aabb, map::generate_level, map::LayoutParams};
    use bevy_ecs::message::Messages;
    use std::time::Duration;

    fn world_with_tick(seconds: f32) -> World {
        let mut world = World::new();
        let mut time = Time::<()>::default();
        time.advance_by(Duration::from_secs_f32(seconds));
        world.insert_resource(time);
        world.init_resource::<Messages<GhostModeChanged>>();
        world
    }

    #[test]
    fn ghost_switches_to_hunt_and_reports_it() {
        let mut world = world_with_tick(0.1);
        world.spawn((PlayerMarker, Position(Vec3::new(0.0, 0.0, -12.0)), PlayerStats::default()));
        let ghost = world.spawn(Ghost::with_default_route()).id();

        let mut schedule = Schedule::default();
        schedule.add_systems((ghost_update_system, player_stats_system).chain());
        schedule.run(&mut world);

        assert_eq!(world.get::<Ghost>(ghost).map(Ghost::mode), Some(GhostMode::Hunt));

        let messages = world.resource::<Messages<GhostModeChanged>>();
        let mut cursor = messages.get_cursor();
        let sent: Vec<_> = cursor.read(messages).copied().collect();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].ghost, ghost);
        assert_eq!(sent[0].transition.to, GhostMode::Hunt);
    }

    #[test]
    fn hunted_player_loses_sanity() {
        let mut world = world_with_tick(1.0);
        let player = world
            .spawn((PlayerMarker, Position(Vec3::new(0.0, 0.0, -12.0)), PlayerStats::default()))
            .id();
        world.spawn(Ghost::with_default_route());

        let mut schedule = Schedule::default();
        schedule.add_systems((ghost_update_system, player_stats_system).chain());
        schedule.run(&mut world);

        let stats = world.get::<PlayerStats>(player).copied().unwrap_or_default();
        assert!((stats.sanity - (SANITY_MAX - SANITY_DRAIN_RATE)).abs() < 1e-4);
        assert!((stats.battery - (BATTERY_MAX - BATTERY_DRAIN_RATE)).abs() < 1e-4);
    }

    #[test]
    fn player_slides_against_level_walls() {
        let mut world = world_with_tick(1.0);
        let level = generate_level(&LayoutParams::default()).unwrap();
        world.insert_resource(LevelColliders::from_level(&level));
        let player = world
            .spawn((PlayerMarker, Position(PLAYER_SPAWN), Velocity(Vec3::new(0.0, 0.0, -SPEED_RUN))))
            .id();

        let mut schedule = Schedule::default();
        schedule.add_systems(player_movement_system);
        schedule.run(&mut world);

        // A full second at run speed would pass the end wall at z = -20
        let pos = world.get::<Position>(player).map(|p| p.0).unwrap_or_default();
        assert_eq!(pos, PLAYER_SPAWN);
        let colliders = world.resource::<LevelColliders>();
        assert!(!colliders.0.iter().any(|aabb: &Aabb| aabb.contains_point(pos + Vec3::Y)));
    }

    #[test]
    fn jumping_player_leaves_the_floor_and_comes_back() {
        let mut world = world_with_tick(0.1);
        let level = generate_level(&LayoutParams::default()).unwrap();
        world.insert_resource(LevelColliders::from_level(&level));
        let player = world
            .spawn((
                PlayerMarker,
                Position(PLAYER_SPAWN),
                Velocity(Vec3::new(0.0, PLAYER_JUMP_SPEED, 0.0)),
            ))
            .id();

        let mut schedule = Schedule::default();
        schedule.add_systems(player_movement_system);
        schedule.run(&mut world);

        let pos = world.get::<Position>(player).map(|p| p.0).unwrap_or_default();
        assert!(pos.y > GROUND_LEVEL);
        assert_eq!((pos.x, pos.z), (PLAYER_SPAWN.x, PLAYER_SPAWN.z));

        for _ in 0..20 {
            schedule.run(&mut world);
        }
        let pos = world.get::<Position>(player).map(|p| p.0).unwrap_or_default();
        let vel = world.get::<Velocity>(player).map(|v| v.0).unwrap_or_default();
        assert_eq!(pos.y, GROUND_LEVEL);
        assert_eq!(vel.y, 0.0);
    }
}
