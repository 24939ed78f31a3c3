#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};

use bevy_math::Vec3;
use tracing::debug;

use super::{
    Axis, LayoutParams,
    doorways::{WallSpan, segment_single_door, segments_to_pieces},
    emitter::{emit_plane, emit_wall},
};
use crate::{errors::LayoutError, geometry::LevelPiece};

// ============================================================================
// Room Types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub enum RoomKind {
    Classroom,
    Bathroom,
    Office,
}

// Side of a room, relative to its center: Left/Right along X, Front/Back along Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub enum DoorSide {
    Left,
    Right,
    Front,
    Back,
}

impl DoorSide {
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Front, Self::Back];

    // Wall run of this side for a room footprint centered at `center`.
    fn wall_span(self, center: Vec3, width: f32, depth: f32) -> Result<WallSpan, LayoutError> {
        match self {
            Self::Left => WallSpan::centered(Axis::Z, center.x - width / 2.0, center.z, depth),
            Self::Right => WallSpan::centered(Axis::Z, center.x + width / 2.0, center.z, depth),
            Self::Front => WallSpan::centered(Axis::X, center.z - depth / 2.0, center.x, width),
            Self::Back => WallSpan::centered(Axis::X, center.z + depth / 2.0, center.x, width),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct RoomSpec {
    pub center: Vec3,
    pub width: f32,
    pub depth: f32,
    pub kind: RoomKind,
    pub door_side: DoorSide,
}

// ============================================================================
// Room Builder
// ============================================================================

// Floor, ceiling, four walls (one with a centered door) and furniture for one room.
pub fn build_room(room: &RoomSpec, params: &LayoutParams) -> Result<Vec<LevelPiece>, LayoutError> {
    let mut pieces = vec![
        emit_plane(room.center, room.width, room.depth, false),
        emit_plane(room.center + Vec3::Y * params.wall_height, room.width, room.depth, true),
    ];

    for side in DoorSide::ALL {
        let span = side.wall_span(room.center, room.width, room.depth)?;
        if side == room.door_side {
            let segments = segment_single_door(&span, params.door_width, params.door_height, params.wall_height)?;
            pieces.extend(segments_to_pieces(&span, &segments, params.wall_thickness));
        } else {
            pieces.push(emit_wall(
                span.axis(),
                span.fixed(),
                span.midpoint(),
                params.wall_height / 2.0,
                span.length(),
                params.wall_height,
                params.wall_thickness,
            ));
        }
    }

    pieces.extend(room.kind.furnish(room.center));

    debug!(
        "built {:?} at ({}, {}) with door on {:?}: {} pieces",
        room.kind,
        room.center.x,
        room.center.z,
        room.door_side,
        pieces.len()
    );

    Ok(pieces)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Primitive, Surface};
    use approx::assert_relative_eq;

    fn classroom(door_side: DoorSide) -> RoomSpec {
        RoomSpec {
            center: Vec3::new(-5.0, 0.0, 1.0),
            width: 6.0,
            depth: 6.0,
            kind: RoomKind::Classroom,
            door_side,
        }
    }

    #[test]
    fn classroom_piece_count() {
        // 2 planes + 3 solid walls + 3 door segments + 4 desks
        let pieces = build_room(&classroom(DoorSide::Right), &LayoutParams::default()).unwrap();
        assert_eq!(pieces.len(), 12);
        assert_eq!(pieces.iter().filter(|p| p.surface == Surface::Wall).count(), 6);
    }

    #[test]
    fn door_wall_sits_on_the_requested_side() {
        let params = LayoutParams::default();
        let pieces = build_room(&classroom(DoorSide::Right), &params).unwrap();

        // Everything on the right wall line belongs to the door wall: two panels and a lintel
        let right_wall: Vec<_> = pieces
            .iter()
            .filter(|p| p.surface == Surface::Wall)
            .filter_map(|p| p.collider)
            .filter(|c| (c.center.x - -2.0).abs() < 1e-5)
            .collect();
        assert_eq!(right_wall.len(), 3);

        let panels: Vec<_> = right_wall.iter().filter(|c| (c.half_extents.y - 2.0).abs() < 1e-5).collect();
        assert_eq!(panels.len(), 2);
        for panel in panels {
            assert_relative_eq!(panel.half_extents.z * 2.0, 2.25);
        }
    }

    #[test]
    fn front_door_cuts_a_wall_along_x() {
        let office = RoomSpec {
            center: Vec3::new(0.0, 0.0, 25.0),
            width: 8.0,
            depth: 6.0,
            kind: RoomKind::Office,
            door_side: DoorSide::Front,
        };
        let pieces = build_room(&office, &LayoutParams::default()).unwrap();
        let front: Vec<_> = pieces
            .iter()
            .filter_map(|p| p.collider)
            .filter(|c| (c.center.z - 22.0).abs() < 1e-5)
            .collect();
        assert_eq!(front.len(), 3);
        for wall in front {
            assert_relative_eq!(wall.half_extents.z, 0.1);
        }
    }

    #[test]
    fn room_too_small_for_its_door_fails() {
        let tiny = RoomSpec {
            width: 1.0,
            ..classroom(DoorSide::Front)
        };
        assert!(matches!(
            build_room(&tiny, &LayoutParams::default()),
            Err(LayoutError::DoorTooWide { .. })
        ));
    }

    #[test]
    fn ceiling_is_at_wall_height() {
        let params = LayoutParams::default();
        let pieces = build_room(&classroom(DoorSide::Left), &params).unwrap();
        let Primitive::Plane(ceiling) = pieces[1].primitive else {
            panic!("second piece is the ceiling");
        };
        assert_relative_eq!(ceiling.center.y, params.wall_height);
    }
}
