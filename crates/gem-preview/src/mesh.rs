use gem_types::{Facet, GeometryModel, Vector3};
use serde::{Deserialize, Serialize};

use crate::errors::PreviewError;

/// A triangle mesh for rendering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TriangleMesh {
    /// Vertex positions [x, y, z, x, y, z, ...]
    pub positions: Vec<f32>,
    /// Vertex normals [nx, ny, nz, ...]; every vertex carries its facet's normal.
    pub normals: Vec<f32>,
    /// Triangle indices [i0, i1, i2, ...]
    pub indices: Vec<u32>,
    /// Which triangles came from which facet.
    pub facet_ranges: Vec<FacetRange>,
}

/// Maps a contiguous range of indices to the facet it was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetRange {
    /// Position of the facet in the model.
    pub facet_index: usize,
    /// Start index in the indices array (inclusive).
    pub start_index: u32,
    /// End index in the indices array (exclusive).
    pub end_index: u32,
}

impl TriangleMesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Triangulate every facet of a model.
    pub fn from_model(model: &GeometryModel) -> Self {
        let mut mesh = Self::new();
        for (i, facet) in model.facets().iter().enumerate() {
            mesh.add_facet(i, facet);
        }
        mesh
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn add_vertex(&mut self, pos: Vector3, normal: Vector3) -> u32 {
        let idx = self.vertex_count() as u32;
        self.positions.extend_from_slice(&pos.to_array());
        self.normals.extend_from_slice(&normal.to_array());
        idx
    }

    pub fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        self.indices.extend_from_slice(&[i0, i1, i2]);
    }

    /// Fan-triangulate one facet polygon. Facets of a gem are convex.
    pub fn add_facet(&mut self, facet_index: usize, facet: &Facet) {
        if facet.vertices().len() < Facet::MIN_VERTICES {
            return;
        }
        let start_index = self.indices.len() as u32;
        let normal = facet.normal();
        let base: Vec<u32> = facet
            .vertices()
            .iter()
            .map(|v| self.add_vertex(*v, normal))
            .collect();
        for i in 1..base.len() - 1 {
            self.add_triangle(base[0], base[i], base[i + 1]);
        }
        self.facet_ranges.push(FacetRange {
            facet_index,
            start_index,
            end_index: self.indices.len() as u32,
        });
    }

    /// Position of vertex `i`.
    pub fn position(&self, i: u32) -> Vector3 {
        let o = i as usize * 3;
        Vector3::new(self.positions[o], self.positions[o + 1], self.positions[o + 2])
    }

    pub fn normal(&self, i: u32) -> Vector3 {
        let o = i as usize * 3;
        Vector3::new(self.normals[o], self.normals[o + 1], self.normals[o + 2])
    }

    /// Check the mesh is non-empty and every index refers to a vertex.
    pub fn validate(&self) -> Result<(), PreviewError> {
        if self.triangle_count() == 0 {
            return Err(PreviewError::EmptyMesh);
        }
        let vertex_count = self.vertex_count();
        if let Some(&index) = self.indices.iter().find(|&&i| i as usize >= vertex_count) {
            return Err(PreviewError::IndexOutOfRange {
                index,
                vertex_count,
            });
        }
        Ok(())
    }
}
