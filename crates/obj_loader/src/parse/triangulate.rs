//! Polygon triangulation
//!
//! Decomposes an ordered face polygon into a triangle-index list local to
//! the face. Triangles pass through verbatim, quads are split along a
//! fixed diagonal, and larger polygons go through iterative ear clipping
//! over a shrinking working copy of the vertex list.

use crate::error::ParseErrorKind;
use crate::foundation::math::{point_in_triangle, polygon_normal, Vec3};
use crate::model::Vertex;

/// Decompose an ordered polygon into 0-based triangle indices.
///
/// The output length is `3 * (n - 2)` for an n-vertex polygon. Emitted
/// indices refer to the input order; within each triangle they are
/// position-matched against the original vertex list so they stay valid
/// while the ear-clipping working list shrinks.
pub fn triangulate(vertices: &[Vertex]) -> Result<Vec<u32>, ParseErrorKind> {
    if vertices.len() < 3 {
        return Err(ParseErrorKind::InvalidFace(vertices.len()));
    }
    if vertices.len() == 3 {
        return Ok(vec![0, 1, 2]);
    }

    let positions: Vec<Vec3> = vertices.iter().map(|v| v.position).collect();
    let mut indices = Vec::with_capacity(3 * (positions.len() - 2));

    if positions.len() == 4 {
        // Fixed diagonal split; a quad needs no ear search.
        let (prev, cur, next) = (positions[3], positions[0], positions[1]);
        emit(&mut indices, &positions, prev, cur, next)?;
        emit(&mut indices, &positions, prev, next, positions[2])?;
        return Ok(indices);
    }

    let mut working = positions.clone();
    let max_passes = positions.len() * 2;
    let mut passes = 0;

    while working.len() > 3 {
        passes += 1;
        if passes > max_passes {
            return Err(ParseErrorKind::DegeneratePolygon);
        }

        let normal = polygon_normal(&working);
        let mut clipped = false;

        for i in 0..working.len() {
            let prev = working[(i + working.len() - 1) % working.len()];
            let cur = working[i];
            let next = working[(i + 1) % working.len()];

            // Reflex or collinear corners cannot be ears.
            let corner = (cur - prev).cross(&(next - cur));
            if corner.magnitude() <= f32::EPSILON || corner.dot(&normal) <= 0.0 {
                continue;
            }

            // Nor can a corner whose triangle contains another polygon vertex.
            let blocked = positions.iter().any(|p| {
                *p != prev && *p != cur && *p != next && point_in_triangle(*p, prev, cur, next)
            });
            if blocked {
                continue;
            }

            emit(&mut indices, &positions, prev, cur, next)?;
            working.remove(i);
            clipped = true;
            break;
        }

        if !clipped {
            return Err(ParseErrorKind::DegeneratePolygon);
        }
    }

    emit(&mut indices, &positions, working[0], working[1], working[2])?;
    Ok(indices)
}

/// Push one triangle, resolving each corner to its first position match in
/// the original list and emitting the three indices in ascending order.
fn emit(
    out: &mut Vec<u32>,
    positions: &[Vec3],
    a: Vec3,
    b: Vec3,
    c: Vec3,
) -> Result<(), ParseErrorKind> {
    let mut triangle = [
        index_of(positions, a)?,
        index_of(positions, b)?,
        index_of(positions, c)?,
    ];
    triangle.sort_unstable();
    out.extend_from_slice(&triangle);
    Ok(())
}

fn index_of(positions: &[Vec3], target: Vec3) -> Result<u32, ParseErrorKind> {
    positions
        .iter()
        .position(|p| *p == target)
        .map(|i| i as u32)
        .ok_or(ParseErrorKind::DegeneratePolygon)
}
