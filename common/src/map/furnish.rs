use bevy_math::Vec3;

use super::{emitter::emit_box, rooms::RoomKind};
use crate::{
    constants::*,
    geometry::{LevelPiece, Surface},
};

// ============================================================================
// Furnisher
// ============================================================================

impl RoomKind {
    // Furniture for a room of this kind, resting on the floor around `center`.
    // Each kind maps to a fixed list, so the same room always gets the same furniture.
    #[must_use]
    pub fn furnish(self, center: Vec3) -> Vec<LevelPiece> {
        match self {
            Self::Classroom => classroom_desks(center),
            Self::Bathroom => vec![on_floor(center, STALL_SIZE).with_surface(Surface::StallDivider)],
            Self::Office => vec![
                on_floor(center, OFFICE_DESK_SIZE)
                    .with_surface(Surface::OfficeDesk)
                    .with_mass(OFFICE_DESK_MASS),
            ],
        }
    }
}

// 2x2 grid of pushable desks
fn classroom_desks(center: Vec3) -> Vec<LevelPiece> {
    const OFFSETS: [f32; 2] = [-DESK_GRID_OFFSET, DESK_GRID_OFFSET];

    OFFSETS
        .iter()
        .flat_map(|&dx| OFFSETS.iter().map(move |&dz| Vec3::new(dx, 0.0, dz)))
        .map(|offset| {
            on_floor(center + offset, DESK_SIZE)
                .with_surface(Surface::Desk)
                .with_mass(DESK_MASS)
        })
        .collect()
}

fn on_floor(floor_point: Vec3, size: Vec3) -> LevelPiece {
    emit_box(floor_point + Vec3::Y * (size.y / 2.0), size, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn classroom_has_four_dynamic_desks() {
        let desks = RoomKind::Classroom.furnish(Vec3::new(-5.0, 0.0, 1.0));
        assert_eq!(desks.len(), 4);
        for desk in &desks {
            assert_eq!(desk.surface, Surface::Desk);
            assert!(!desk.is_static());
            let collider = desk.collider.expect("desks collide");
            assert_relative_eq!(collider.center.y, DESK_SIZE.y / 2.0);
            assert_relative_eq!((collider.center.x + 5.0).abs(), DESK_GRID_OFFSET);
            assert_relative_eq!((collider.center.z - 1.0).abs(), DESK_GRID_OFFSET);
        }
    }

    #[test]
    fn bathroom_stall_is_static() {
        let stalls = RoomKind::Bathroom.furnish(Vec3::ZERO);
        assert_eq!(stalls.len(), 1);
        assert!(stalls[0].is_static());
        assert_eq!(stalls[0].collider.map(|c| c.center), Some(Vec3::new(0.0, 1.0, 0.0)));
    }

    #[test]
    fn office_desk_is_heavy() {
        let desks = RoomKind::Office.furnish(Vec3::new(0.0, 0.0, 25.0));
        assert_eq!(desks.len(), 1);
        assert_eq!(desks[0].collider.map(|c| c.mass), Some(OFFICE_DESK_MASS));
    }
}
