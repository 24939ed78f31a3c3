use bevy::{
    input::mouse::MouseMotion,
    prelude::*,
    window::{CursorGrabMode, CursorOptions},
};

use crate::{
    constants::*,
    resources::{InteractTarget, PlayerLook},
};
use common::{
    collision::{interact_target_distance, player_grounded},
    constants::PLAYER_JUMP_SPEED,
    components::{LevelColliders, Position, Velocity},
    markers::PlayerMarker,
    player::{PlayerStats, movement_velocity, player_eye_position},
};

fn cursor_locked(cursor_options: &CursorOptions) -> bool {
    cursor_options.grab_mode != CursorGrabMode::None
}

// ============================================================================
// Input Systems
// ============================================================================

// Toggle cursor lock with Escape key or mouse click
pub fn cursor_toggle_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut cursor_options: Single<&mut CursorOptions>,
) {
    // Escape key toggles cursor lock
    if keyboard.just_pressed(KeyCode::Escape) {
        cursor_options.visible = !cursor_options.visible;
        cursor_options.grab_mode = if cursor_options.visible {
            CursorGrabMode::None
        } else {
            CursorGrabMode::Locked
        };
    }

    // Left click locks cursor if it's currently unlocked
    if mouse.just_pressed(MouseButton::Left) && cursor_options.visible {
        cursor_options.visible = false;
        cursor_options.grab_mode = CursorGrabMode::Locked;
    }
}

// Mouse look
pub fn look_input_system(
    mut mouse_motion: MessageReader<MouseMotion>,
    cursor_options: Single<&CursorOptions>,
    mut look: ResMut<PlayerLook>,
) {
    if !cursor_locked(&cursor_options) {
        // Drain pending mouse events so the view doesn't jump on relock
        for _ in mouse_motion.read() {}
        return;
    }

    for motion in mouse_motion.read() {
        look.yaw -= motion.delta.x * MOUSE_SENSITIVITY;
        look.pitch = (look.pitch - motion.delta.y * MOUSE_SENSITIVITY).clamp(-CAMERA_PITCH_LIMIT, CAMERA_PITCH_LIMIT);
    }
}

// WASD movement, Shift to run. Only sets the requested velocity; the fixed-step
// movement system does the actual moving.
pub fn movement_input_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    cursor_options: Single<&CursorOptions>,
    look: Res<PlayerLook>,
    mut player_query: Query<&mut Velocity, With<PlayerMarker>>,
) {
    // Build movement input vector (forward=z, right=x)
    let mut move_input = Vec3::ZERO;
    if cursor_locked(&cursor_options) {
        if keyboard.any_pressed([KeyCode::KeyW, KeyCode::ArrowUp]) {
            move_input.z += 1.0;
        }
        if keyboard.any_pressed([KeyCode::KeyS, KeyCode::ArrowDown]) {
            move_input.z -= 1.0;
        }
        if keyboard.any_pressed([KeyCode::KeyD, KeyCode::ArrowRight]) {
            move_input.x += 1.0;
        }
        if keyboard.any_pressed([KeyCode::KeyA, KeyCode::ArrowLeft]) {
            move_input.x -= 1.0;
        }
    }
    let running = keyboard.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]);

    for mut velocity in &mut player_query {
        let walk = movement_velocity(move_input, look.yaw, running);
        velocity.0 = Vec3::new(walk.x, velocity.0.y, walk.z);
    }
}

// Space jumps while standing on something
pub fn jump_input_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    colliders: Res<LevelColliders>,
    mut player_query: Query<(&Position, &mut Velocity), With<PlayerMarker>>,
) {
    if !keyboard.just_pressed(KeyCode::Space) {
        return;
    }

    for (pos, mut velocity) in &mut player_query {
        if player_grounded(pos.0, &colliders.0) {
            velocity.0.y = PLAYER_JUMP_SPEED;
        }
    }
}

// F toggles the flashlight
pub fn flashlight_toggle_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut stats_query: Query<&mut PlayerStats, With<PlayerMarker>>,
) {
    if !keyboard.just_pressed(KeyCode::KeyF) {
        return;
    }

    for mut stats in &mut stats_query {
        let on = stats.toggle_flashlight();
        debug!("flashlight {}", if on { "on" } else { "off" });
    }
}

// Find what the crosshair is pointing at within reach
pub fn interact_target_system(
    look: Res<PlayerLook>,
    colliders: Res<LevelColliders>,
    player_query: Query<&Position, With<PlayerMarker>>,
    mut target: ResMut<InteractTarget>,
) {
    let Ok(pos) = player_query.single() else {
        return;
    };
    let found = interact_target_distance(player_eye_position(pos.0), look.direction(), &colliders.0);
    if target.0 != found {
        target.0 = found;
    }
}

// E interacts with whatever is in reach, which recharges the flashlight
pub fn interact_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    target: Res<InteractTarget>,
    mut stats_query: Query<&mut PlayerStats, With<PlayerMarker>>,
) {
    if !keyboard.just_pressed(KeyCode::KeyE) {
        return;
    }
    let Some(distance) = target.0 else {
        return;
    };

    for mut stats in &mut stats_query {
        if stats.recharge() {
            info!("battery recharged to {:.0}% (target {:.1} m away)", stats.battery, distance);
        }
    }
}
