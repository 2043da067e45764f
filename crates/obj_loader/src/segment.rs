//! Mesh segmentation
//!
//! A small state machine that buffers resolved face geometry and splits it
//! into discrete named meshes whenever a group or material boundary is
//! crossed in the document.

use crate::model::{Mesh, Vertex};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum State {
    #[default]
    Idle,
    Accumulating,
}

/// Accumulates face geometry and finalizes it into meshes on group and
/// material boundaries.
///
/// The material name in effect while a mesh's faces were buffered is
/// recorded per finalized mesh, so the loader can resolve each mesh's
/// material independently after the scan.
#[derive(Debug, Default)]
pub struct MeshSegmenter {
    state: State,
    name: String,
    material: Option<String>,
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
    meshes: Vec<Mesh>,
    material_names: Vec<Option<String>>,
}

impl MeshSegmenter {
    /// Create an idle segmenter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle an `o`/`g` record.
    ///
    /// The first group record starts accumulation under the given name; a
    /// bare record with no name uses `"unnamed"`. Later group records
    /// finalize any buffered geometry into a mesh, or simply rename the
    /// pending mesh when nothing has been buffered yet. The active
    /// material binding carries over into the next group.
    pub fn begin_group(&mut self, tail: &str) {
        let name = if tail.is_empty() {
            "unnamed".to_string()
        } else {
            tail.to_string()
        };

        match self.state {
            State::Idle => {
                self.state = State::Accumulating;
                self.name = name;
            }
            State::Accumulating => {
                if !self.vertices.is_empty() && !self.indices.is_empty() {
                    let finished = std::mem::take(&mut self.name);
                    self.finalize(finished);
                }
                self.name = name;
            }
        }
    }

    /// Handle a `usemtl` record.
    ///
    /// A material change over non-empty buffers splits the buffered
    /// geometry off as its own mesh under a disambiguated name, while
    /// accumulation continues under the unchanged group name.
    pub fn bind_material(&mut self, name: &str) {
        if !self.vertices.is_empty() && !self.indices.is_empty() {
            let split_name = self.unique_name();
            self.finalize(split_name);
        }
        self.material = Some(name.to_string());
    }

    /// Append one face's resolved vertices and face-local triangle indices.
    pub fn push_face(&mut self, vertices: &[Vertex], local_indices: &[u32]) {
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(vertices);
        self.indices.extend(local_indices.iter().map(|i| base + i));
    }

    /// Finalize any remaining buffered geometry and return the meshes
    /// paired with the material name recorded for each.
    #[must_use]
    pub fn finish(mut self) -> (Vec<Mesh>, Vec<Option<String>>) {
        if !self.vertices.is_empty() && !self.indices.is_empty() {
            let finished = std::mem::take(&mut self.name);
            self.finalize(finished);
        }
        (self.meshes, self.material_names)
    }

    fn finalize(&mut self, name: String) {
        log::debug!(
            "finalized mesh '{}': {} vertices, {} triangles",
            name,
            self.vertices.len(),
            self.indices.len() / 3
        );
        self.meshes.push(Mesh::new(
            name,
            std::mem::take(&mut self.vertices),
            std::mem::take(&mut self.indices),
        ));
        self.material_names.push(self.material.clone());
    }

    /// First `<group>_<n>` (n from 2 upward) not used by a finalized mesh.
    fn unique_name(&self) -> String {
        let mut suffix = 2u32;
        loop {
            let candidate = format!("{}_{}", self.name, suffix);
            if !self.meshes.iter().any(|m| m.name == candidate) {
                return candidate;
            }
            suffix += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Vertex;

    fn face() -> (Vec<Vertex>, Vec<u32>) {
        (vec![Vertex::default(); 3], vec![0, 1, 2])
    }

    #[test]
    fn bare_group_defaults_to_unnamed() {
        let mut segmenter = MeshSegmenter::new();
        segmenter.begin_group("");
        let (verts, idx) = face();
        segmenter.push_face(&verts, &idx);

        let (meshes, _) = segmenter.finish();
        assert_eq!(meshes.len(), 1);
        assert_eq!(meshes[0].name, "unnamed");
    }

    #[test]
    fn group_record_with_empty_buffers_renames() {
        let mut segmenter = MeshSegmenter::new();
        segmenter.begin_group("first");
        segmenter.begin_group("second");
        let (verts, idx) = face();
        segmenter.push_face(&verts, &idx);

        let (meshes, _) = segmenter.finish();
        assert_eq!(meshes.len(), 1);
        assert_eq!(meshes[0].name, "second");
    }

    #[test]
    fn group_boundary_finalizes_buffered_geometry() {
        let mut segmenter = MeshSegmenter::new();
        segmenter.begin_group("a");
        let (verts, idx) = face();
        segmenter.push_face(&verts, &idx);
        segmenter.begin_group("b");
        segmenter.push_face(&verts, &idx);

        let (meshes, _) = segmenter.finish();
        assert_eq!(meshes.len(), 2);
        assert_eq!(meshes[0].name, "a");
        assert_eq!(meshes[1].name, "b");
    }

    #[test]
    fn local_indices_are_rebased_into_the_buffer() {
        let mut segmenter = MeshSegmenter::new();
        segmenter.begin_group("mesh");
        let (verts, idx) = face();
        segmenter.push_face(&verts, &idx);
        segmenter.push_face(&verts, &idx);

        let (meshes, _) = segmenter.finish();
        assert_eq!(meshes[0].indices, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn material_change_splits_with_unique_suffix() {
        let mut segmenter = MeshSegmenter::new();
        segmenter.begin_group("box");
        segmenter.bind_material("red");
        let (verts, idx) = face();
        segmenter.push_face(&verts, &idx);
        segmenter.bind_material("blue");
        segmenter.push_face(&verts, &idx);

        let (meshes, materials) = segmenter.finish();
        assert_eq!(meshes.len(), 2);
        assert_eq!(meshes[0].name, "box_2");
        assert_eq!(meshes[1].name, "box");
        assert_eq!(materials[0].as_deref(), Some("red"));
        assert_eq!(materials[1].as_deref(), Some("blue"));
    }

    #[test]
    fn repeated_splits_search_past_taken_suffixes() {
        let mut segmenter = MeshSegmenter::new();
        segmenter.begin_group("box");
        let (verts, idx) = face();

        segmenter.bind_material("a");
        segmenter.push_face(&verts, &idx);
        segmenter.bind_material("b");
        segmenter.push_face(&verts, &idx);
        segmenter.bind_material("c");
        segmenter.push_face(&verts, &idx);

        let (meshes, _) = segmenter.finish();
        let names: Vec<&str> = meshes.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["box_2", "box_3", "box"]);
    }

    #[test]
    fn material_binding_carries_across_groups() {
        let mut segmenter = MeshSegmenter::new();
        segmenter.begin_group("a");
        segmenter.bind_material("steel");
        let (verts, idx) = face();
        segmenter.push_face(&verts, &idx);
        segmenter.begin_group("b");
        segmenter.push_face(&verts, &idx);

        let (_, materials) = segmenter.finish();
        assert_eq!(materials[0].as_deref(), Some("steel"));
        assert_eq!(materials[1].as_deref(), Some("steel"));
    }
}
