use bevy::prelude::*;

use crate::{
    constants::*,
    markers::{BatteryUIMarker, CrosshairUIMarker, SanityUIMarker},
    resources::InteractTarget,
};
use common::{
    ghost::{Ghost, GhostMode},
    markers::PlayerMarker,
    player::PlayerStats,
};

fn hud_text(text: &'static str, left: f32, bottom: f32) -> impl Bundle {
    (
        Text::new(text),
        TextFont {
            font_size: HUD_FONT_SIZE,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(left),
            bottom: Val::Px(bottom),
            ..default()
        },
    )
}

fn rgba([r, g, b, a]: [f32; 4]) -> Color {
    Color::srgba(r, g, b, a)
}

// ============================================================================
// UI Setup System
// ============================================================================

pub fn setup_hud_system(mut commands: Commands) {
    // Battery above sanity in the lower left corner
    commands.spawn((
        hud_text("Battery: 100%", HUD_MARGIN, HUD_MARGIN * 2.0 + HUD_FONT_SIZE),
        BatteryUIMarker,
    ));
    commands.spawn((hud_text("Sanity: 100%", HUD_MARGIN, HUD_MARGIN), SanityUIMarker));

    // Small dot in the middle of the screen
    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            left: Val::Percent(50.0),
            top: Val::Percent(50.0),
            width: Val::Px(CROSSHAIR_SIZE),
            height: Val::Px(CROSSHAIR_SIZE),
            margin: UiRect {
                left: Val::Px(-CROSSHAIR_SIZE / 2.0),
                top: Val::Px(-CROSSHAIR_SIZE / 2.0),
                ..default()
            },
            ..default()
        },
        BackgroundColor(rgba(CROSSHAIR_IDLE_COLOR)),
        CrosshairUIMarker,
    ));
}

// ============================================================================
// UI Update Systems
// ============================================================================

pub fn hud_update_system(
    stats_query: Query<&PlayerStats, (With<PlayerMarker>, Changed<PlayerStats>)>,
    ghost_query: Query<&Ghost>,
    mut battery_text: Single<&mut Text, (With<BatteryUIMarker>, Without<SanityUIMarker>)>,
    mut sanity_text: Single<(&mut Text, &mut TextColor), (With<SanityUIMarker>, Without<BatteryUIMarker>)>,
) {
    let Ok(stats) = stats_query.single() else {
        return;
    };

    battery_text.0 = format!("Battery: {}%", stats.battery.floor());

    // Sanity turns red while the player is hunted
    let hunted = ghost_query.iter().any(|ghost| ghost.mode() == GhostMode::Hunt);
    let (text, color) = &mut *sanity_text;
    text.0 = format!("Sanity: {}%", stats.sanity.floor());
    color.0 = if hunted { Color::srgb(1.0, 0.2, 0.2) } else { Color::WHITE };
}

// Crosshair turns red when something is within reach
pub fn crosshair_update_system(
    target: Res<InteractTarget>,
    mut crosshair: Single<&mut BackgroundColor, With<CrosshairUIMarker>>,
) {
    if !target.is_changed() {
        return;
    }

    crosshair.0 = if target.0.is_some() {
        rgba(CROSSHAIR_TARGET_COLOR)
    } else {
        rgba(CROSSHAIR_IDLE_COLOR)
    };
}
