use bevy_math::Vec3;

use crate::{constants::PHYSICS_EPSILON, geometry::Aabb};

// Check if two 1D ranges overlap.
#[must_use]
pub fn ranges_overlap_1d(a_min: f32, a_max: f32, b_min: f32, b_max: f32) -> bool {
    a_max >= b_min && a_min <= b_max
}

#[must_use]
pub fn overlap_aabb_vs_aabb(a: &Aabb, b: &Aabb) -> bool {
    ranges_overlap_1d(a.min.x, a.max.x, b.min.x, b.max.x)
        && ranges_overlap_1d(a.min.y, a.max.y, b.min.y, b.max.y)
        && ranges_overlap_1d(a.min.z, a.max.z, b.min.z, b.max.z)
}

// Intersection interval of a ray with one slab of a box, narrowing `t_min..t_max`.
#[must_use]
pub fn ray_slab_interval(origin: f32, dir: f32, slab_min: f32, slab_max: f32, t_min: f32, t_max: f32) -> Option<(f32, f32)> {
    if dir.abs() > PHYSICS_EPSILON {
        let t1 = (slab_min - origin) / dir;
        let t2 = (slab_max - origin) / dir;
        let new_min = t_min.max(t1.min(t2));
        let new_max = t_max.min(t1.max(t2));
        (new_min <= new_max).then_some((new_min, new_max))
    } else if origin < slab_min || origin > slab_max {
        None
    } else {
        Some((t_min, t_max))
    }
}

// Distance along a unit-length `dir` to where the ray enters `aabb`, if within `max_dist`.
#[must_use]
pub fn ray_vs_aabb(origin: Vec3, dir: Vec3, max_dist: f32, aabb: &Aabb) -> Option<f32> {
    let (t_min, t_max) = (0.0, max_dist);
    let (t_min, t_max) = ray_slab_interval(origin.x, dir.x, aabb.min.x, aabb.max.x, t_min, t_max)?;
    let (t_min, t_max) = ray_slab_interval(origin.y, dir.y, aabb.min.y, aabb.max.y, t_min, t_max)?;
    let (t_min, _) = ray_slab_interval(origin.z, dir.z, aabb.min.z, aabb.max.z, t_min, t_max)?;
    Some(t_min)
}

// Shared axis-aligned slide on the XZ plane; the caller decides which positions collide.
pub fn slide_along_axes(current_pos: Vec3, velocity: Vec3, delta: f32, collides: impl Fn(Vec3) -> bool) -> Vec3 {
    // Try full diagonal movement first
    let diagonal_pos = Vec3::new(
        velocity.x.mul_add(delta, current_pos.x),
        current_pos.y,
        velocity.z.mul_add(delta, current_pos.z),
    );
    if !collides(diagonal_pos) {
        return diagonal_pos;
    }

    // Diagonal blocked, try axis-aligned sliding
    let x_only_pos = Vec3::new(diagonal_pos.x, current_pos.y, current_pos.z);
    let z_only_pos = Vec3::new(current_pos.x, current_pos.y, diagonal_pos.z);

    if !collides(x_only_pos) {
        x_only_pos
    } else if !collides(z_only_pos) {
        z_only_pos
    } else {
        current_pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_ranges_overlap() {
        assert!(ranges_overlap_1d(0.0, 1.0, 1.0, 2.0));
        assert!(!ranges_overlap_1d(0.0, 1.0, 1.5, 2.0));
    }

    #[test]
    fn ray_hits_box_in_front() {
        let aabb = Aabb {
            min: Vec3::new(-1.0, -1.0, -3.0),
            max: Vec3::new(1.0, 1.0, -2.0),
        };
        let hit = ray_vs_aabb(Vec3::ZERO, Vec3::NEG_Z, 3.0, &aabb);
        assert_eq!(hit, Some(2.0));
        assert_eq!(ray_vs_aabb(Vec3::ZERO, Vec3::NEG_Z, 1.5, &aabb), None);
        assert_eq!(ray_vs_aabb(Vec3::ZERO, Vec3::Z, 3.0, &aabb), None);
    }

    #[test]
    fn slide_keeps_the_free_axis() {
        // Wall along the +X side: only X motion is blocked
        let collides = |pos: Vec3| pos.x > 1.0;
        let moved = slide_along_axes(Vec3::new(0.9, 0.0, 0.0), Vec3::new(1.0, 0.0, 1.0), 0.5, collides);
        assert_eq!(moved, Vec3::new(0.9, 0.0, 0.5));
    }

    #[test]
    fn fully_blocked_stays_put() {
        let start = Vec3::new(0.0, 0.0, 0.0);
        assert_eq!(slide_along_axes(start, Vec3::ONE, 1.0, |_| true), start);
    }
}
