use bevy_math::Vec3;

// ============================================================================
// Floating-Point Comparisons
// ============================================================================

// Gaps shorter than this are treated as closed when cutting walls.
pub const GEOMETRY_EPSILON: f32 = 1e-4;

// Small value for near-zero checks in steering and collision.
pub const PHYSICS_EPSILON: f32 = 1e-6;

// ============================================================================
// Walls & Doors
// ============================================================================

pub const WALL_THICKNESS: f32 = 0.2;
pub const WALL_HEIGHT: f32 = 4.0;

pub const DOOR_WIDTH: f32 = 1.5;
pub const DOOR_HEIGHT: f32 = 2.2;

// Planes have no visual thickness; the floor collider is a thin slab under them.
pub const FLOOR_SLAB_THICKNESS: f32 = 0.2;

// ============================================================================
// Hallway
// ============================================================================

pub const HALLWAY_WIDTH: f32 = 4.0;
pub const HALLWAY_LENGTH: f32 = 40.0;

// ============================================================================
// Rooms
// ============================================================================

pub const ROOM_WIDTH: f32 = 6.0;
pub const ROOM_DEPTH: f32 = 6.0;
pub const ROOM_Z_START: f32 = -15.0;
pub const ROOM_SPACING: f32 = 8.0;
pub const ROOMS_PER_SIDE: usize = 5;
pub const BATHROOM_INDEX: usize = 2; // Middle room on each side

// Principal's office sits past the last pair of rooms
pub const OFFICE_OFFSET: f32 = 8.0;
pub const OFFICE_WIDTH: f32 = 8.0;
pub const OFFICE_DEPTH: f32 = 6.0;

// ============================================================================
// Furniture
// ============================================================================

// Classroom desks (width, height, depth), pushable
pub const DESK_SIZE: Vec3 = Vec3::new(1.0, 0.8, 0.6);
pub const DESK_MASS: f32 = 10.0;
pub const DESK_GRID_OFFSET: f32 = 1.5;

// Bathroom stall divider, static
pub const STALL_SIZE: Vec3 = Vec3::new(0.1, 2.0, 1.5);

// Principal's desk, heavy
pub const OFFICE_DESK_SIZE: Vec3 = Vec3::new(2.0, 0.8, 1.0);
pub const OFFICE_DESK_MASS: f32 = 50.0;

// ============================================================================
// Player
// ============================================================================

// Dimensions (meters)
pub const PLAYER_HEIGHT: f32 = 1.7;
pub const PLAYER_RADIUS: f32 = 0.5;
pub const PLAYER_EYE_HEIGHT_RATIO: f32 = 0.5; // Camera sits half a body height above the body center
pub const PLAYER_STEP_CLEARANCE: f32 = 0.05; // Colliders whose top is below this never block

// Speeds (meters per second)
pub const SPEED_WALK: f32 = 3.0;
pub const SPEED_RUN: f32 = 6.0;

pub const PLAYER_SPAWN: Vec3 = Vec3::new(0.0, 0.0, -18.0);

// Vertical motion. Every floor in the school sits at the same height.
pub const GRAVITY: f32 = 9.82; // meters per second squared
pub const PLAYER_JUMP_SPEED: f32 = 5.0;
pub const GROUND_LEVEL: f32 = 0.0;
pub const GROUND_CHECK_DISTANCE: f32 = 0.1; // How far below the feet still counts as standing

// Flashlight battery and sanity, both in percent
pub const BATTERY_MAX: f32 = 100.0;
pub const BATTERY_DRAIN_RATE: f32 = 1.0; // percent per second
pub const BATTERY_RECHARGE_AMOUNT: f32 = 20.0;
pub const SANITY_MAX: f32 = 100.0;
pub const SANITY_DRAIN_RATE: f32 = 2.0; // percent per second while hunted
pub const SANITY_RECOVERY_RATE: f32 = 0.5; // percent per second otherwise

pub const INTERACT_RANGE: f32 = 3.0;

// ============================================================================
// Ghost
// ============================================================================

pub const GHOST_SPEED: f32 = 2.0;
pub const GHOST_HUNT_SPEED_MULTIPLIER: f32 = 1.5;

// Hysteresis: start hunting inside the detect range, give up beyond the lose range
pub const GHOST_DETECT_RANGE: f32 = 10.0;
pub const GHOST_LOSE_RANGE: f32 = 20.0;

pub const GHOST_WAYPOINT_RADIUS: f32 = 0.5;

pub const GHOST_SPAWN: Vec3 = Vec3::new(0.0, 2.0, -10.0);

// Fixed patrol route, independent of the generated layout
pub const GHOST_PATROL_POINTS: [Vec3; 4] = [
    Vec3::new(0.0, 2.0, -15.0),
    Vec3::new(0.0, 2.0, 15.0),
    Vec3::new(-5.0, 2.0, 0.0), // Inside the left classroom at z = 1, behind its wall
    Vec3::new(5.0, 2.0, 0.0),
];

// Visual bobbing, wall-clock driven
pub const GHOST_BOB_AMPLITUDE: f32 = 0.2;
pub const GHOST_BOB_FREQUENCY: f32 = 2.0; // radians per second

// Capsule dimensions used for rendering
pub const GHOST_RADIUS: f32 = 0.5;
pub const GHOST_LENGTH: f32 = 1.5;
