//! # obj_loader
//!
//! A Wavefront OBJ/MTL parsing library producing render-ready mesh data.
//!
//! ## Features
//!
//! - **Full face grammar**: `p`, `p/t`, `p//n`, and `p/t/n` references
//!   with 1-based and negative-relative indices
//! - **N-gon support**: ear-clipping triangulation for arbitrary simple
//!   polygons, not just triangles and quads
//! - **Mesh segmentation**: discrete named meshes on `o`/`g` and `usemtl`
//!   boundaries
//! - **Materials**: MTL parsing with by-name resolution per mesh
//! - **No hidden I/O**: callers hand in bytes; `mtllib` references go
//!   through a [`MaterialSource`] collaborator
//!
//! ## Quick Start
//!
//! ```
//! use obj_loader::{Loader, NoMaterials};
//!
//! let document = b"\
//! o triangle
//! v 0.0 0.0 0.0
//! v 1.0 0.0 0.0
//! v 0.0 1.0 0.0
//! f 1 2 3
//! ";
//!
//! let mut loader = Loader::new();
//! let result = loader.load(document, &mut NoMaterials)?;
//!
//! assert_eq!(result.meshes.len(), 1);
//! assert_eq!(result.meshes[0].name, "triangle");
//! assert_eq!(result.indices.len(), 3);
//! # Ok::<(), obj_loader::ObjError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::missing_errors_doc,
    clippy::cast_possible_truncation
)]

pub mod error;
pub mod foundation;
pub mod loader;
pub mod model;
pub mod mtl;
pub mod parse;
pub mod segment;

pub use error::{ObjError, ParseErrorKind};
pub use loader::{DirSource, LoadResult, Loader, MaterialSource, NoMaterials};
pub use model::{Material, Mesh, Vertex};
