mod doorways;
mod emitter;
mod furnish;
mod rooms;

pub use doorways::{Axis, DoorSpec, SegmentKind, WallSegment, WallSpan, segment_doors, segment_single_door, segments_to_pieces};
pub use emitter::{emit_box, emit_plane, emit_wall};
pub use rooms::{DoorSide, RoomKind, RoomSpec, build_room};

#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};

use bevy_math::Vec3;
use tracing::{debug, info};

use crate::{
    constants::*,
    errors::LayoutError,
    geometry::{LevelGeometry, LevelPiece},
};

// ============================================================================
// Layout Parameters
// ============================================================================

// Everything the generator needs. The level is a pure function of these values.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct LayoutParams {
    pub hallway_width: f32,
    pub hallway_length: f32,
    pub room_width: f32,
    pub room_depth: f32,
    pub room_z_start: f32,
    pub room_spacing: f32,
    pub rooms_per_side: usize,
    pub bathroom_index: usize,
    pub office_offset: f32,
    pub office_width: f32,
    pub office_depth: f32,
    pub door_width: f32,
    pub door_height: f32,
    pub wall_height: f32,
    pub wall_thickness: f32,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            hallway_width: HALLWAY_WIDTH,
            hallway_length: HALLWAY_LENGTH,
            room_width: ROOM_WIDTH,
            room_depth: ROOM_DEPTH,
            room_z_start: ROOM_Z_START,
            room_spacing: ROOM_SPACING,
            rooms_per_side: ROOMS_PER_SIDE,
            bathroom_index: BATHROOM_INDEX,
            office_offset: OFFICE_OFFSET,
            office_width: OFFICE_WIDTH,
            office_depth: OFFICE_DEPTH,
            door_width: DOOR_WIDTH,
            door_height: DOOR_HEIGHT,
            wall_height: WALL_HEIGHT,
            wall_thickness: WALL_THICKNESS,
        }
    }
}

impl LayoutParams {
    pub fn validate(&self) -> Result<(), LayoutError> {
        let dimensions = [
            ("hallway_width", self.hallway_width),
            ("hallway_length", self.hallway_length),
            ("room_width", self.room_width),
            ("room_depth", self.room_depth),
            ("room_spacing", self.room_spacing),
            ("office_width", self.office_width),
            ("office_depth", self.office_depth),
            ("door_width", self.door_width),
            ("door_height", self.door_height),
            ("wall_height", self.wall_height),
            ("wall_thickness", self.wall_thickness),
        ];
        if let Some(&(name, value)) = dimensions.iter().find(|(_, value)| !(*value > 0.0)) {
            return Err(LayoutError::NonPositiveDimension { name, value });
        }
        if self.rooms_per_side == 0 {
            return Err(LayoutError::NoRooms);
        }
        Ok(())
    }

    // Z of the i-th room pair
    #[must_use]
    pub fn room_z(&self, index: usize) -> f32 {
        (index as f32).mul_add(self.room_spacing, self.room_z_start)
    }

    // X of the left room centers; right rooms are mirrored
    #[must_use]
    pub fn left_room_x(&self) -> f32 {
        -(self.hallway_width / 2.0 + self.room_width / 2.0)
    }
}

// ============================================================================
// Layout Planner
// ============================================================================

// Rooms in generation order: left/right pairs along the hallway, then the office.
#[must_use]
pub fn plan_rooms(params: &LayoutParams) -> Vec<RoomSpec> {
    let mut rooms = Vec::with_capacity(params.rooms_per_side * 2 + 1);

    for i in 0..params.rooms_per_side {
        let z = params.room_z(i);
        let kind = if i == params.bathroom_index {
            RoomKind::Bathroom
        } else {
            RoomKind::Classroom
        };

        // Each room's door faces the hallway
        rooms.push(RoomSpec {
            center: Vec3::new(params.left_room_x(), 0.0, z),
            width: params.room_width,
            depth: params.room_depth,
            kind,
            door_side: DoorSide::Right,
        });
        rooms.push(RoomSpec {
            center: Vec3::new(-params.left_room_x(), 0.0, z),
            width: params.room_width,
            depth: params.room_depth,
            kind,
            door_side: DoorSide::Left,
        });
    }

    let last_z = params.room_z(params.rooms_per_side - 1);
    rooms.push(RoomSpec {
        center: Vec3::new(0.0, 0.0, last_z + params.office_offset),
        width: params.office_width,
        depth: params.office_depth,
        kind: RoomKind::Office,
        door_side: DoorSide::Front,
    });

    rooms
}

// Generate the whole school: hallway shell, every room, then the two hallway side walls
// with a door in front of each room. Fails without output on the first bad parameter.
pub fn generate_level(params: &LayoutParams) -> Result<LevelGeometry, LayoutError> {
    params.validate()?;

    let rooms = plan_rooms(params);
    let mut pieces = hallway_shell(params);

    for room in &rooms {
        pieces.extend(build_room(room, params)?);
    }

    pieces.extend(hallway_side_walls(params)?);

    let level = LevelGeometry { pieces };
    info!(
        "generated level: {} rooms, {} pieces, {} colliders",
        rooms.len(),
        level.len(),
        level.colliders().count()
    );

    Ok(level)
}

fn hallway_shell(params: &LayoutParams) -> Vec<LevelPiece> {
    let end_wall_size = Vec3::new(params.hallway_width, params.wall_height, params.wall_thickness);
    let half_length = params.hallway_length / 2.0;
    let half_height = params.wall_height / 2.0;

    vec![
        emit_plane(Vec3::ZERO, params.hallway_width, params.hallway_length, false),
        emit_plane(Vec3::Y * params.wall_height, params.hallway_width, params.hallway_length, true),
        emit_box(Vec3::new(0.0, half_height, -half_length), end_wall_size, false),
        emit_box(Vec3::new(0.0, half_height, half_length), end_wall_size, false),
    ]
}

fn hallway_side_walls(params: &LayoutParams) -> Result<Vec<LevelPiece>, LayoutError> {
    // Rooms on both sides share the same Z list, already ascending
    let doors: Vec<DoorSpec> = (0..params.rooms_per_side)
        .map(|i| DoorSpec {
            center: params.room_z(i),
            width: params.door_width,
            height: params.door_height,
        })
        .collect();

    let mut pieces = Vec::new();
    for x in [-params.hallway_width / 2.0, params.hallway_width / 2.0] {
        let span = WallSpan::centered(Axis::Z, x, 0.0, params.hallway_length)?;
        let segments = segment_doors(&span, &doors, params.wall_height)?;
        debug!("hallway wall at x = {}: {} segments", x, segments.len());
        pieces.extend(segments_to_pieces(&span, &segments, params.wall_thickness));
    }

    Ok(pieces)
}
