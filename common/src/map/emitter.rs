use bevy_math::Vec3;

use super::Axis;
use crate::{
    constants::FLOOR_SLAB_THICKNESS,
    geometry::{BoxRotation, BoxSpec, ColliderSpec, LevelPiece, PlaneFacing, PlaneSpec, Primitive, Surface},
};

// ============================================================================
// Primitive Emitter
// ============================================================================

// Emit a box and a static collider covering exactly the same volume.
// `size` is (width, height, thickness); `rotated` runs the width along Z instead of X.
#[must_use]
pub fn emit_box(center: Vec3, size: Vec3, rotated: bool) -> LevelPiece {
    let spec = BoxSpec {
        center,
        size,
        rotation: BoxRotation::from_rotated(rotated),
    };

    LevelPiece {
        primitive: Primitive::Box(spec),
        collider: Some(ColliderSpec {
            center,
            half_extents: spec.half_extents(),
            mass: 0.0,
        }),
        surface: Surface::Wall,
    }
}

// Emit a wall box running along `axis`, placed at `fixed` on the other horizontal axis.
#[must_use]
pub fn emit_wall(axis: Axis, fixed: f32, along: f32, y_center: f32, length: f32, height: f32, thickness: f32) -> LevelPiece {
    let center = match axis {
        Axis::X => Vec3::new(along, y_center, fixed),
        Axis::Z => Vec3::new(fixed, y_center, along),
    };
    emit_box(center, Vec3::new(length, height, thickness), axis == Axis::Z)
}

// Emit a floor or ceiling plane at height `center.y`.
// Floors get a thin slab collider whose top face lies on the plane; ceilings get none.
#[must_use]
pub fn emit_plane(center: Vec3, width: f32, depth: f32, is_ceiling: bool) -> LevelPiece {
    let spec = PlaneSpec {
        center,
        width,
        depth,
        facing: if is_ceiling { PlaneFacing::Down } else { PlaneFacing::Up },
    };

    let collider = (!is_ceiling).then(|| ColliderSpec {
        center: center - Vec3::Y * (FLOOR_SLAB_THICKNESS / 2.0),
        half_extents: Vec3::new(width / 2.0, FLOOR_SLAB_THICKNESS / 2.0, depth / 2.0),
        mass: 0.0,
    });

    LevelPiece {
        primitive: Primitive::Plane(spec),
        collider,
        surface: if is_ceiling { Surface::Ceiling } else { Surface::Floor },
    }
}
