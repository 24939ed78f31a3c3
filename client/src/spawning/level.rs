use bevy::prelude::*;
use std::collections::HashMap;

use crate::{constants::*, markers::LevelPieceMarker, resources::SpawnConfig};
use common::geometry::{BoxSpec, LevelGeometry, PlaneFacing, PlaneSpec, Primitive, Surface};

#[derive(Bundle)]
struct LevelPieceBundle {
    mesh: Mesh3d,
    material: MeshMaterial3d<StandardMaterial>,
    transform: Transform,
    visibility: Visibility,
    marker: LevelPieceMarker,
}

// ============================================================================
// Level Spawning
// ============================================================================

// Register every generated piece with the renderer. Colliders are handled separately
// through `LevelColliders`.
pub fn spawn_level_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    level: Res<LevelGeometry>,
    config: Res<SpawnConfig>,
) {
    let mut shared_materials: HashMap<Surface, Handle<StandardMaterial>> = HashMap::new();

    for piece in &level.pieces {
        // Debug mode gives every wall its own random color so the segments stand out
        let material = if config.debug_colors && piece.surface == Surface::Wall {
            materials.add(random_color_material())
        } else {
            shared_materials
                .entry(piece.surface)
                .or_insert_with(|| materials.add(surface_material(piece.surface)))
                .clone()
        };

        let (mesh, transform) = match piece.primitive {
            Primitive::Box(spec) => box_mesh(&spec),
            Primitive::Plane(spec) => plane_mesh(&spec),
        };

        commands.spawn(LevelPieceBundle {
            mesh: Mesh3d(meshes.add(mesh)),
            material: MeshMaterial3d(material),
            transform,
            visibility: Visibility::default(),
            marker: LevelPieceMarker,
        });
    }

    info!("spawned {} level pieces", level.len());
}

fn box_mesh(spec: &BoxSpec) -> (Mesh, Transform) {
    let mesh = Cuboid::new(spec.size.x, spec.size.y, spec.size.z).into();
    let transform =
        Transform::from_translation(spec.center).with_rotation(Quat::from_rotation_y(spec.rotation.radians()));
    (mesh, transform)
}

fn plane_mesh(spec: &PlaneSpec) -> (Mesh, Transform) {
    let normal = match spec.facing {
        PlaneFacing::Up => Vec3::Y,
        PlaneFacing::Down => Vec3::NEG_Y,
    };
    let mesh = Plane3d::new(normal, Vec2::new(spec.width / 2.0, spec.depth / 2.0)).into();
    (mesh, Transform::from_translation(spec.center))
}

fn surface_material(surface: Surface) -> StandardMaterial {
    let [r, g, b] = match surface {
        Surface::Floor => FLOOR_COLOR,
        Surface::Ceiling => CEILING_COLOR,
        Surface::Wall => WALL_COLOR,
        Surface::Desk => DESK_COLOR,
        Surface::StallDivider => STALL_COLOR,
        Surface::OfficeDesk => OFFICE_DESK_COLOR,
    };
    StandardMaterial {
        base_color: Color::srgb(r, g, b),
        perceptual_roughness: 0.9,
        ..default()
    }
}

fn random_color_material() -> StandardMaterial {
    use rand::Rng;

    let mut rng = rand::rng();
    StandardMaterial {
        base_color: Color::srgb(
            rng.random_range(0.2..1.0),
            rng.random_range(0.2..1.0),
            rng.random_range(0.2..1.0),
        ),
        ..default()
    }
}
