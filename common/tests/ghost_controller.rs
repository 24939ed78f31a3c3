//! Patrol/hunt behaviour of the ghost over many ticks.

use bevy_math::Vec3;
use rstest::rstest;

use common::{
    constants::*,
    ghost::{Ghost, GhostMode},
};

const DT: f32 = 1.0 / 60.0;

// Far enough that the ghost never notices the player
const FAR_AWAY: Vec3 = Vec3::new(500.0, 0.0, 500.0);

#[test]
fn patrol_visits_waypoints_in_order_and_wraps() {
    let mut ghost = Ghost::with_default_route();
    let mut visited = vec![ghost.patrol_index()];

    for _ in 0..60 * 120 {
        ghost.update(FAR_AWAY, DT);
        if visited.last() != Some(&ghost.patrol_index()) {
            visited.push(ghost.patrol_index());
        }
        if visited.len() == 6 {
            break;
        }
    }

    assert_eq!(visited, vec![0, 1, 2, 3, 0, 1]);
    assert_eq!(ghost.mode(), GhostMode::Patrol);
}

// Distance to the waypoint, speed, tick length, then the number of ticks needed to get
// within the waypoint radius. Several cases land exactly on the radius.
#[rstest]
#[case(7.0, 2.0, 0.1, 33)]
#[case(3.5, 3.0, 0.1, 10)]
#[case(4.5, 2.0, 0.25, 8)]
#[case(2.5, 1.0, 0.1, 20)]
#[case(10.5, 2.0, 0.1, 50)]
fn reaching_a_waypoint_takes_the_expected_number_of_ticks(
    #[case] distance: f32,
    #[case] speed: f32,
    #[case] dt: f32,
    #[case] expected: usize,
) {
    let start = Vec3::new(0.0, 2.0, 0.0);
    let waypoint = Vec3::new(0.0, 2.0, distance);
    let mut ghost = Ghost::new(start, vec![waypoint, start], speed).expect("route is not empty");

    for tick in 1..expected {
        ghost.update(FAR_AWAY, dt);
        assert_eq!(ghost.patrol_index(), 0, "advanced early at tick {tick}");
    }

    ghost.update(FAR_AWAY, dt);
    assert_eq!(ghost.patrol_index(), 1, "did not advance at tick {expected}");
    assert_eq!(ghost.current_waypoint(), start);
}

#[test]
fn hunt_lasts_until_the_player_is_out_of_range() {
    let mut ghost = Ghost::with_default_route();
    let near = GHOST_SPAWN + Vec3::new(0.0, 0.0, 9.0);

    let transition = ghost.update(near, DT).expect("player detected");
    assert_eq!(transition.to, GhostMode::Hunt);

    // Between the two ranges nothing changes, even though the ghost keeps closing in
    let middle = ghost.position() + Vec3::new(15.0, 0.0, 0.0);
    for _ in 0..10 {
        assert_eq!(ghost.update(middle, DT), None);
    }
    assert_eq!(ghost.mode(), GhostMode::Hunt);

    let gone = ghost.position() + Vec3::new(0.0, 0.0, 25.0);
    let transition = ghost.update(gone, DT).expect("player lost");
    assert_eq!(transition.from, GhostMode::Hunt);
    assert_eq!(transition.to, GhostMode::Patrol);
}

#[test]
fn hunting_ghost_catches_a_standing_player() {
    let mut ghost = Ghost::with_default_route();
    let player = Vec3::new(0.0, 1.35, -14.0);

    for _ in 0..60 * 5 {
        ghost.update(player, DT);
    }
    assert_eq!(ghost.mode(), GhostMode::Hunt);
    assert!(ghost.position().distance(player) < 1e-3);
}

#[test]
fn patrol_ignores_walls() {
    // The third waypoint sits behind a classroom wall; the ghost still gets there
    let inside_room = GHOST_PATROL_POINTS[2];
    let mut ghost = Ghost::new(Vec3::new(0.0, 2.0, 0.0), vec![inside_room, Vec3::ZERO], GHOST_SPEED)
        .expect("route is not empty");

    for _ in 0..60 * 5 {
        ghost.update(FAR_AWAY, DT);
        if ghost.patrol_index() == 1 {
            break;
        }
    }
    assert_eq!(ghost.patrol_index(), 1);
}
