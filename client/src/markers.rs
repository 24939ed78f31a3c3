use bevy::prelude::*;

// ============================================================================
// Camera & Light Markers
// ============================================================================

// Marker component for the main camera
#[derive(Component)]
pub struct MainCameraMarker;

// Marker component for the flashlight attached to the camera
#[derive(Component)]
pub struct FlashlightMarker;

// ============================================================================
// Level Markers
// ============================================================================

// Marker component for every spawned level piece
#[derive(Component)]
pub struct LevelPieceMarker;

// Marker component for the ghost mesh
#[derive(Component)]
pub struct GhostModelMarker;

// ============================================================================
// UI Markers
// ============================================================================

#[derive(Component)]
pub struct BatteryUIMarker;

#[derive(Component)]
pub struct SanityUIMarker;

#[derive(Component)]
pub struct CrosshairUIMarker;
