// ============================================================================
// Client Game Constants
// ============================================================================

// First-person view camera settings
pub const FPV_CAMERA_FOV_DEGREES: f32 = 75.0; // Field of view in degrees
pub const CAMERA_PITCH_LIMIT: f32 = 1.5; // Radians up or down from level

// Mouse sensitivity as radians per pixel
pub const MOUSE_SENSITIVITY: f32 = 0.002;

// Scene lighting, kept dim so the flashlight matters
pub const LIGHT_AMBIENT_BRIGHTNESS: f32 = 20.0;
pub const FOG_DENSITY: f32 = 0.05;

// Flashlight, attached to the camera
pub const FLASHLIGHT_INTENSITY: f32 = 2_000_000.0; // lumens
pub const FLASHLIGHT_RANGE: f32 = 30.0; // meters
pub const FLASHLIGHT_OUTER_ANGLE: f32 = std::f32::consts::FRAC_PI_6;
pub const FLASHLIGHT_INNER_ANGLE: f32 = std::f32::consts::FRAC_PI_6 * 0.5;
pub const FLASHLIGHT_COLOR: [f32; 3] = [1.0, 1.0, 0.93];

// Surface colors (sRGB)
pub const FLOOR_COLOR: [f32; 3] = [0.27, 0.27, 0.27];
pub const CEILING_COLOR: [f32; 3] = [0.13, 0.13, 0.13];
pub const WALL_COLOR: [f32; 3] = [0.53, 0.53, 0.53];
pub const DESK_COLOR: [f32; 3] = [0.55, 0.27, 0.07];
pub const STALL_COLOR: [f32; 3] = [0.27, 0.4, 0.53];
pub const OFFICE_DESK_COLOR: [f32; 3] = [0.4, 0.2, 0.05];

// Ghost visual settings
pub const GHOST_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 0.5];

// HUD
pub const HUD_FONT_SIZE: f32 = 20.0;
pub const HUD_MARGIN: f32 = 12.0; // pixels
pub const CROSSHAIR_SIZE: f32 = 6.0; // pixels
pub const CROSSHAIR_IDLE_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 0.8];
pub const CROSSHAIR_TARGET_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 0.8];
