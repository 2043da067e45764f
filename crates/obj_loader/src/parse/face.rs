//! Face assembly
//!
//! Resolves the per-vertex references of an `f` record into fully-formed
//! vertices, applying the missing-normal fallback.

use super::attribute::AttributeTable;
use crate::error::ParseErrorKind;
use crate::foundation::math::{Vec2, Vec3};
use crate::model::Vertex;

/// Resolve the tail of an `f` record into an ordered vertex list.
///
/// Each whitespace-separated token is split on `/` into position, texture
/// coordinate, and normal references (`p`, `p/t`, `p//n`, `p/t/n`). An
/// absent texture coordinate defaults to the origin. If any vertex of the
/// face lacks a normal, one flat normal is computed from the first three
/// positions and applied uniformly to the whole face.
pub fn assemble(
    tail: &str,
    positions: &AttributeTable<Vec3>,
    tex_coords: &AttributeTable<Vec2>,
    normals: &AttributeTable<Vec3>,
) -> Result<Vec<Vertex>, ParseErrorKind> {
    let mut vertices = Vec::new();
    let mut missing_normal = false;

    for token in tail.split_whitespace() {
        let refs: Vec<&str> = token.split('/').collect();
        let mut vertex = Vertex::default();

        match refs.as_slice() {
            [p] => {
                vertex.position = positions.resolve(p)?;
                missing_normal = true;
            }
            [p, t] => {
                vertex.position = positions.resolve(p)?;
                vertex.tex_coord = tex_coords.resolve(t)?;
                missing_normal = true;
            }
            [p, "", n] => {
                vertex.position = positions.resolve(p)?;
                vertex.normal = normals.resolve(n)?;
            }
            [p, t, n] => {
                vertex.position = positions.resolve(p)?;
                vertex.tex_coord = tex_coords.resolve(t)?;
                vertex.normal = normals.resolve(n)?;
            }
            _ => return Err(ParseErrorKind::MalformedIndex(token.to_string())),
        }

        vertices.push(vertex);
    }

    if vertices.len() < 3 {
        return Err(ParseErrorKind::InvalidFace(vertices.len()));
    }

    if missing_normal {
        // Flat-shading fallback for the whole face.
        let a = vertices[0].position - vertices[1].position;
        let b = vertices[2].position - vertices[1].position;
        let normal = a.cross(&b);
        for vertex in &mut vertices {
            vertex.normal = normal;
        }
    }

    Ok(vertices)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> (AttributeTable<Vec3>, AttributeTable<Vec2>, AttributeTable<Vec3>) {
        let mut positions = AttributeTable::new();
        positions.push(Vec3::new(0.0, 0.0, 0.0));
        positions.push(Vec3::new(1.0, 0.0, 0.0));
        positions.push(Vec3::new(0.0, 1.0, 0.0));

        let mut tex_coords = AttributeTable::new();
        tex_coords.push(Vec2::new(0.0, 0.0));
        tex_coords.push(Vec2::new(1.0, 0.0));
        tex_coords.push(Vec2::new(0.0, 1.0));

        let mut normals = AttributeTable::new();
        normals.push(Vec3::new(0.0, 0.0, 1.0));

        (positions, tex_coords, normals)
    }

    #[test]
    fn position_only_faces_get_a_flat_normal() {
        let (positions, tex_coords, normals) = tables();
        let vertices = assemble("1 2 3", &positions, &tex_coords, &normals).unwrap();

        assert_eq!(vertices.len(), 3);
        // cross(v0 - v1, v2 - v1) for this triangle points down the z axis.
        let expected = Vec3::new(0.0, 0.0, -1.0);
        for vertex in &vertices {
            assert_eq!(vertex.normal, expected);
            assert_eq!(vertex.tex_coord, Vec2::zeros());
        }
    }

    #[test]
    fn full_references_resolve_all_attributes() {
        let (positions, tex_coords, normals) = tables();
        let vertices = assemble("1/1/1 2/2/1 3/3/1", &positions, &tex_coords, &normals).unwrap();

        assert_eq!(vertices[1].position, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(vertices[1].tex_coord, Vec2::new(1.0, 0.0));
        assert_eq!(vertices[1].normal, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn position_and_normal_skips_the_texcoord_slot() {
        let (positions, tex_coords, normals) = tables();
        let vertices = assemble("1//1 2//1 3//1", &positions, &tex_coords, &normals).unwrap();

        for vertex in &vertices {
            assert_eq!(vertex.normal, Vec3::new(0.0, 0.0, 1.0));
            assert_eq!(vertex.tex_coord, Vec2::zeros());
        }
    }

    #[test]
    fn one_missing_normal_overwrites_the_whole_face() {
        let (positions, tex_coords, normals) = tables();
        // Last vertex has no normal reference, so all three get the flat one.
        let vertices = assemble("1//1 2//1 3/3", &positions, &tex_coords, &normals).unwrap();

        let flat = vertices[0].normal;
        assert_ne!(flat, Vec3::new(0.0, 0.0, 1.0));
        assert!(vertices.iter().all(|v| v.normal == flat));
    }

    #[test]
    fn two_vertices_are_too_few() {
        let (positions, tex_coords, normals) = tables();
        assert_eq!(
            assemble("1 2", &positions, &tex_coords, &normals),
            Err(ParseErrorKind::InvalidFace(2))
        );
    }

    #[test]
    fn overlong_reference_is_malformed() {
        let (positions, tex_coords, normals) = tables();
        assert_eq!(
            assemble("1/1/1/1 2 3", &positions, &tex_coords, &normals),
            Err(ParseErrorKind::MalformedIndex("1/1/1/1".to_string()))
        );
    }

    #[test]
    fn unresolved_reference_propagates() {
        let (positions, tex_coords, normals) = tables();
        assert_eq!(
            assemble("1 2 9", &positions, &tex_coords, &normals),
            Err(ParseErrorKind::IndexOutOfRange { index: 9, len: 3 })
        );
    }
}
