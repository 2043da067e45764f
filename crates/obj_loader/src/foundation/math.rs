//! Math utilities and types
//!
//! Provides the vector types used by the parsed model data plus the small
//! set of polygon geometry predicates the triangulator is built on.

pub use nalgebra::{Vector2, Vector3};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// Tolerance for deciding that a point lies on a triangle's plane.
pub const PLANE_EPSILON: f32 = 1e-4;

/// Cross-product normal of the triangle `(a, b, c)`.
///
/// Not normalized; callers that only compare signs or test for degeneracy
/// can use it as-is.
#[must_use]
pub fn triangle_normal(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    (b - a).cross(&(c - a))
}

/// Tests whether `p1` and `p2` lie on the same side of the line through
/// `a` and `b`.
///
/// Points exactly on the line count as being on either side.
#[must_use]
pub fn same_side(p1: Vec3, p2: Vec3, a: Vec3, b: Vec3) -> bool {
    let cp1 = (b - a).cross(&(p1 - a));
    let cp2 = (b - a).cross(&(p2 - a));
    cp1.dot(&cp2) >= 0.0
}

/// Normal of an ordered polygon computed with Newell's method.
///
/// The direction follows the polygon's winding; the magnitude is twice the
/// projected area, so a near-zero result means a degenerate polygon.
#[must_use]
pub fn polygon_normal(points: &[Vec3]) -> Vec3 {
    let mut normal = Vec3::zeros();
    for (i, current) in points.iter().enumerate() {
        let next = points[(i + 1) % points.len()];
        normal.x += (current.y - next.y) * (current.z + next.z);
        normal.y += (current.z - next.z) * (current.x + next.x);
        normal.z += (current.x - next.x) * (current.y + next.y);
    }
    normal
}

/// Tests whether `point` lies inside or on the triangle `(a, b, c)`.
///
/// Combines the same-side test against each edge with a point-to-plane
/// distance check, so points floating above or below the triangle's plane
/// are rejected even when they fall inside its infinite prism.
#[must_use]
pub fn point_in_triangle(point: Vec3, a: Vec3, b: Vec3, c: Vec3) -> bool {
    let within_prism =
        same_side(point, a, b, c) && same_side(point, b, a, c) && same_side(point, c, a, b);
    if !within_prism {
        return false;
    }

    let normal = triangle_normal(a, b, c);
    let magnitude = normal.magnitude();
    if magnitude <= f32::EPSILON {
        // Degenerate triangle has no interior.
        return false;
    }

    let distance = (point - a).dot(&normal) / magnitude;
    distance.abs() <= PLANE_EPSILON
}
