//! Mesh and vertex value types
//!
//! Backend-agnostic geometry containers produced by the loader. A `Mesh`
//! holds the vertex and triangle-index data for one named group of the
//! source document together with its resolved material.

use crate::foundation::math::{Vec2, Vec3};
use crate::model::Material;

/// A single model vertex with position, normal, and texture coordinate.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vertex {
    /// Position in 3D space
    pub position: Vec3,

    /// Normal vector
    pub normal: Vec3,

    /// Texture coordinates
    pub tex_coord: Vec2,
}

impl Vertex {
    /// Create a new vertex
    #[must_use]
    pub fn new(position: Vec3, normal: Vec3, tex_coord: Vec2) -> Self {
        Self {
            position,
            normal,
            tex_coord,
        }
    }
}

impl Default for Vertex {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            normal: Vec3::zeros(),
            tex_coord: Vec2::zeros(),
        }
    }
}

/// 3D mesh holding vertices, triangle indices, and a material.
///
/// Invariants maintained by the loader: `indices.len()` is a multiple of 3,
/// every index is below `vertices.len()`, and each group of three indices
/// forms one triangle in the winding emitted by the triangulator.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mesh {
    /// Mesh name taken from the enclosing `o`/`g` record.
    pub name: String,

    /// Vertex data
    pub vertices: Vec<Vertex>,

    /// Index data for triangles, local to `vertices`.
    pub indices: Vec<u32>,

    /// Material resolved from the `usemtl` binding; default when unbound
    /// or unmatched.
    pub material: Material,
}

impl Mesh {
    /// Create a new mesh with a default material.
    #[must_use]
    pub fn new(name: String, vertices: Vec<Vertex>, indices: Vec<u32>) -> Self {
        Self {
            name,
            vertices,
            indices,
            material: Material::default(),
        }
    }

    /// Number of triangles in the mesh.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}
