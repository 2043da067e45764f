//! OBJ document loading and orchestration
//!
//! The [`Loader`] drives the full line-by-line scan: geometry records fill
//! the attribute tables, face records run through assembly and
//! triangulation into the mesh segmenter, and `mtllib` references are
//! fetched through the [`MaterialSource`] collaborator. After the scan,
//! each mesh's material is resolved by name.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ObjError, ParseErrorKind};
use crate::foundation::math::{Vec2, Vec3};
use crate::model::{Material, Mesh, Vertex};
use crate::mtl;
use crate::parse::attribute::AttributeTable;
use crate::parse::line::{classify, Keyword};
use crate::parse::triangulate::triangulate;
use crate::parse::{face, parse_vec2, parse_vec3};
use crate::segment::MeshSegmenter;

/// Supplies the bytes of a material document referenced by `mtllib`.
///
/// The loader never touches the filesystem itself; the host environment
/// decides how paths resolve. Absence is not fatal — parsing continues
/// without materials.
pub trait MaterialSource {
    /// Fetch the referenced document's bytes, or `None` if unavailable.
    fn fetch(&mut self, path: &str) -> Option<Vec<u8>>;
}

/// A material source with no documents.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoMaterials;

impl MaterialSource for NoMaterials {
    fn fetch(&mut self, _path: &str) -> Option<Vec<u8>> {
        None
    }
}

/// Resolves `mtllib` paths against a base directory on disk.
#[derive(Debug, Clone)]
pub struct DirSource {
    base: PathBuf,
}

impl DirSource {
    /// Create a source rooted at `base`.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }
}

impl MaterialSource for DirSource {
    fn fetch(&mut self, path: &str) -> Option<Vec<u8>> {
        let candidate = self.base.join(path);
        match fs::read(&candidate) {
            Ok(bytes) => Some(bytes),
            Err(err) => {
                log::warn!("material file {} unavailable: {err}", candidate.display());
                None
            }
        }
    }
}

/// Everything produced by one successful load.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadResult {
    /// Finalized meshes in document order.
    pub meshes: Vec<Mesh>,

    /// Every mesh's vertices, flattened in order.
    pub vertices: Vec<Vertex>,

    /// Triangle indices rebased into the flattened vertex list.
    pub indices: Vec<u32>,

    /// Materials parsed from referenced material documents.
    pub materials: Vec<Material>,
}

/// The OBJ document loader.
///
/// One loader value owns the aggregate collections of a single load call.
/// State is cleared when a load begins and again on failure, so a failed
/// or partial parse never leaks into a later call; the successful result
/// is handed out as an owned [`LoadResult`]. Independent loader values
/// share nothing and may run concurrently.
#[derive(Debug, Default)]
pub struct Loader {
    positions: AttributeTable<Vec3>,
    tex_coords: AttributeTable<Vec2>,
    normals: AttributeTable<Vec3>,
    segmenter: MeshSegmenter,
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
    materials: Vec<Material>,
}

impl Loader {
    /// Create an empty loader.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load an OBJ document from already-fetched bytes.
    ///
    /// `materials` supplies the bytes of any document referenced by an
    /// `mtllib` record. The load succeeds when the scan produced at least
    /// one mesh, vertex, or index; zero input bytes fail with
    /// [`ObjError::EmptyInput`] and a geometry-free document with
    /// [`ObjError::NoGeometry`].
    pub fn load(
        &mut self,
        bytes: &[u8],
        materials: &mut dyn MaterialSource,
    ) -> Result<LoadResult, ObjError> {
        *self = Self::default();
        match self.scan(bytes, materials) {
            Ok(result) => Ok(result),
            Err(err) => {
                *self = Self::default();
                Err(err)
            }
        }
    }

    /// Load an OBJ file from disk, resolving `mtllib` references against
    /// the file's parent directory.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<LoadResult, ObjError> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        self.load(&bytes, &mut DirSource::new(base))
    }

    fn scan(
        &mut self,
        bytes: &[u8],
        source: &mut dyn MaterialSource,
    ) -> Result<LoadResult, ObjError> {
        if bytes.is_empty() {
            return Err(ObjError::EmptyInput);
        }
        let text = String::from_utf8_lossy(bytes);

        for (number, raw) in text.lines().enumerate() {
            let line = number + 1;
            let Some((keyword, tail)) = classify(raw) else {
                continue;
            };

            match keyword {
                Keyword::Object | Keyword::Group => self.segmenter.begin_group(tail),
                Keyword::Position => {
                    let position = parse_vec3(tail).map_err(|k| ObjError::at(k, line, raw))?;
                    self.positions.push(position);
                }
                Keyword::TexCoord => {
                    let tex_coord = parse_vec2(tail).map_err(|k| ObjError::at(k, line, raw))?;
                    self.tex_coords.push(tex_coord);
                }
                Keyword::Normal => {
                    let normal = parse_vec3(tail).map_err(|k| ObjError::at(k, line, raw))?;
                    self.normals.push(normal);
                }
                Keyword::Face => self.push_face(tail).map_err(|k| ObjError::at(k, line, raw))?,
                Keyword::UseMaterial => self.segmenter.bind_material(tail),
                Keyword::MaterialLib => self.load_materials(tail, source)?,
                // Material property keywords carry no meaning in the
                // geometry document.
                _ => {}
            }
        }

        let segmenter = std::mem::take(&mut self.segmenter);
        let (mut meshes, material_names) = segmenter.finish();
        self.resolve_materials(&mut meshes, &material_names);

        if meshes.is_empty() && self.vertices.is_empty() && self.indices.is_empty() {
            return Err(ObjError::NoGeometry);
        }

        log::info!(
            "loaded {} mesh(es), {} vertices, {} triangles, {} material(s)",
            meshes.len(),
            self.vertices.len(),
            self.indices.len() / 3,
            self.materials.len()
        );

        Ok(LoadResult {
            meshes,
            vertices: std::mem::take(&mut self.vertices),
            indices: std::mem::take(&mut self.indices),
            materials: std::mem::take(&mut self.materials),
        })
    }

    /// Assemble, triangulate, and buffer one face record.
    fn push_face(&mut self, tail: &str) -> Result<(), ParseErrorKind> {
        let face_vertices = face::assemble(tail, &self.positions, &self.tex_coords, &self.normals)?;
        let local = triangulate(&face_vertices)?;

        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&face_vertices);
        self.indices.extend(local.iter().map(|i| base + i));

        self.segmenter.push_face(&face_vertices, &local);
        Ok(())
    }

    /// Fetch and parse the document referenced by an `mtllib` record.
    fn load_materials(
        &mut self,
        path: &str,
        source: &mut dyn MaterialSource,
    ) -> Result<(), ObjError> {
        let Some(bytes) = source.fetch(path) else {
            log::warn!("material document '{path}' unavailable, continuing without it");
            return Ok(());
        };
        if bytes.is_empty() {
            log::warn!("material document '{path}' is empty");
            return Ok(());
        }

        let parsed = mtl::parse(&String::from_utf8_lossy(&bytes))?;
        if parsed.is_empty() {
            log::warn!("material document '{path}' defined no materials");
        }
        self.materials.extend(parsed);
        Ok(())
    }

    /// Pair each mesh with the first material matching its recorded name.
    fn resolve_materials(&self, meshes: &mut [Mesh], material_names: &[Option<String>]) {
        for (mesh, recorded) in meshes.iter_mut().zip(material_names) {
            let Some(name) = recorded else { continue };
            if let Some(material) = self.materials.iter().find(|m| &m.name == name) {
                mesh.material = material.clone();
            } else {
                log::debug!("no material named '{name}' for mesh '{}'", mesh.name);
            }
        }
    }
}
