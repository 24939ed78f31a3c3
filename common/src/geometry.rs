#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};

use bevy_ecs::prelude::Resource;
use bevy_math::Vec3;

// ============================================================================
// Primitive Descriptors
// ============================================================================

// Rotation of a box around the Y axis. Only quarter turns are needed to run walls along
// either horizontal axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub enum BoxRotation {
    #[default]
    Deg0,
    Deg90,
}

impl BoxRotation {
    #[must_use]
    pub const fn from_rotated(rotated: bool) -> Self {
        if rotated { Self::Deg90 } else { Self::Deg0 }
    }

    #[must_use]
    pub const fn radians(self) -> f32 {
        match self {
            Self::Deg0 => 0.0,
            Self::Deg90 => std::f32::consts::FRAC_PI_2,
        }
    }
}

// Visual box. `size` is in the box's local frame: x is the width (run length for walls),
// y the height and z the thickness.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct BoxSpec {
    pub center: Vec3,
    pub size: Vec3,
    pub rotation: BoxRotation,
}

impl BoxSpec {
    // World-frame half extents after applying the rotation.
    #[must_use]
    pub fn half_extents(&self) -> Vec3 {
        let half = self.size / 2.0;
        match self.rotation {
            BoxRotation::Deg0 => half,
            BoxRotation::Deg90 => Vec3::new(half.z, half.y, half.x),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub enum PlaneFacing {
    Up,
    Down,
}

// Visual plane with zero thickness, spanning `width` along X and `depth` along Z.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct PlaneSpec {
    pub center: Vec3,
    pub width: f32,
    pub depth: f32,
    pub facing: PlaneFacing,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub enum Primitive {
    Box(BoxSpec),
    Plane(PlaneSpec),
}

impl Primitive {
    #[must_use]
    pub const fn center(&self) -> Vec3 {
        match self {
            Self::Box(b) => b.center,
            Self::Plane(p) => p.center,
        }
    }
}

// Physical volume paired with a visual primitive. World frame; a mass of zero is static.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct ColliderSpec {
    pub center: Vec3,
    pub half_extents: Vec3,
    pub mass: f32,
}

impl ColliderSpec {
    #[must_use]
    pub fn is_static(&self) -> bool {
        self.mass <= 0.0
    }

    #[must_use]
    pub fn aabb(&self) -> Aabb {
        Aabb {
            min: self.center - self.half_extents,
            max: self.center + self.half_extents,
        }
    }
}

// Material tag handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub enum Surface {
    Floor,
    Ceiling,
    Wall,
    Desk,
    StallDivider,
    OfficeDesk,
}

// ============================================================================
// Level Pieces
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct LevelPiece {
    pub primitive: Primitive,
    pub collider: Option<ColliderSpec>,
    pub surface: Surface,
}

impl LevelPiece {
    #[must_use]
    pub const fn with_surface(mut self, surface: Surface) -> Self {
        self.surface = surface;
        self
    }

    // Give the collider a mass, turning it into a dynamic body. No-op without a collider.
    #[must_use]
    pub fn with_mass(mut self, mass: f32) -> Self {
        if let Some(collider) = &mut self.collider {
            collider.mass = mass;
        }
        self
    }

    #[must_use]
    pub fn is_static(&self) -> bool {
        self.collider.is_none_or(|c| c.is_static())
    }
}

// Complete output of level generation, in emission order.
#[derive(Resource, Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct LevelGeometry {
    pub pieces: Vec<LevelPiece>,
}

impl LevelGeometry {
    #[must_use]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn colliders(&self) -> impl Iterator<Item = &ColliderSpec> {
        self.pieces.iter().filter_map(|piece| piece.collider.as_ref())
    }

    pub fn static_colliders(&self) -> impl Iterator<Item = &ColliderSpec> {
        self.colliders().filter(|c| c.is_static())
    }

    #[must_use]
    pub fn count_by_surface(&self, surface: Surface) -> usize {
        self.pieces.iter().filter(|piece| piece.surface == surface).count()
    }
}

// ============================================================================
// Axis-Aligned Bounding Box
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) / 2.0
    }

    #[must_use]
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wall_box(rotation: BoxRotation) -> BoxSpec {
        BoxSpec {
            center: Vec3::new(1.0, 2.0, 3.0),
            size: Vec3::new(6.0, 4.0, 0.2),
            rotation,
        }
    }

    #[test]
    fn unrotated_box_keeps_local_extents() {
        assert_eq!(wall_box(BoxRotation::Deg0).half_extents(), Vec3::new(3.0, 2.0, 0.1));
    }

    #[test]
    fn quarter_turn_swaps_horizontal_extents() {
        assert_eq!(wall_box(BoxRotation::Deg90).half_extents(), Vec3::new(0.1, 2.0, 3.0));
    }

    #[test]
    fn mass_only_applies_with_collider() {
        let piece = LevelPiece {
            primitive: Primitive::Box(wall_box(BoxRotation::Deg0)),
            collider: None,
            surface: Surface::Wall,
        };
        assert!(piece.with_mass(10.0).is_static());
    }

    #[test]
    fn aabb_contains_its_center() {
        let collider = ColliderSpec {
            center: Vec3::new(0.0, 1.0, 0.0),
            half_extents: Vec3::splat(0.5),
            mass: 0.0,
        };
        let aabb = collider.aabb();
        assert!(aabb.contains_point(aabb.center()));
        assert!(!aabb.contains_point(Vec3::new(0.0, 2.0, 0.0)));
    }
}
