//! Error types for level generation and the ghost controller.

use crate::map::Axis;

/// Configuration errors detected while generating the level. Generation stops at the
/// first one and no geometry is returned.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum LayoutError {
    #[error("wall span along {axis:?} at {fixed} must end after it starts ({start}..{end})")]
    EmptySpan { axis: Axis, fixed: f32, start: f32, end: f32 },

    #[error("door width {door_width} does not fit a wall span of length {span_length}")]
    DoorTooWide { span_length: f32, door_width: f32 },

    #[error("door width must be positive, got {width}")]
    DoorTooNarrow { width: f32 },

    #[error("door height {door_height} must be in (0, {wall_height})")]
    DoorTooTall { door_height: f32, wall_height: f32 },

    #[error("door at {center} (width {width}) leaves the wall span {start}..{end}")]
    DoorOutsideSpan { center: f32, width: f32, start: f32, end: f32 },

    #[error("doors at {first} and {second} overlap (width {width})")]
    DoorsOverlap { first: f32, second: f32, width: f32 },

    #[error("layout parameter `{name}` must be positive, got {value}")]
    NonPositiveDimension { name: &'static str, value: f32 },

    #[error("layout needs at least one room per side")]
    NoRooms,
}

/// Precondition violations when constructing a ghost.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GhostError {
    #[error("ghost needs at least one patrol waypoint")]
    NoWaypoints,
}
