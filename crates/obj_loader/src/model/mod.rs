//! Parsed model data types

pub mod material;
pub mod mesh;

pub use material::Material;
pub use mesh::{Mesh, Vertex};
