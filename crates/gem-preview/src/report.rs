//! Plain-text design summaries.

use std::fmt;

use gem_types::{FacetType, GeometryModel, Vector3};

use crate::mesh::TriangleMesh;

/// A summary of one decoded design.
pub struct DesignReport {
    pub title: String,
    pub author: String,
    pub description: String,
    pub refractive_index: f64,
    pub symmetry: String,
    pub index_gear: u32,
    pub facet_count: usize,
    pub facet_counts: Vec<(FacetType, usize)>,
    pub untyped_facets: usize,
    pub unique_vertices: usize,
    pub triangle_count: usize,
    pub bounding_box: Option<(Vector3, Vector3)>,
}

impl DesignReport {
    pub fn from_model(model: &GeometryModel) -> Self {
        let meta = model.metadata();
        let counts = model.facet_type_counts();
        let typed: usize = counts.values().sum();
        Self {
            title: meta.title.clone(),
            author: meta.author.clone(),
            description: meta.description.clone(),
            refractive_index: meta.refractive_index,
            symmetry: meta.symmetry_label(),
            index_gear: meta.index_gear,
            facet_count: model.facet_count(),
            facet_counts: counts.into_iter().collect(),
            untyped_facets: model.facet_count() - typed,
            unique_vertices: model.vertex_count(),
            triangle_count: TriangleMesh::from_model(model).triangle_count(),
            bounding_box: model.bounding_box(),
        }
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let title = if self.title.is_empty() {
            "(untitled)"
        } else {
            self.title.as_str()
        };
        out.push_str(&format!("=== {} ===\n", title));
        if !self.author.is_empty() {
            out.push_str(&format!("Author: {}\n", self.author));
        }
        if !self.description.is_empty() {
            out.push_str(&format!("{}\n", self.description));
        }

        out.push_str(&format!(
            "\nRI {:.3} | Symmetry {} | Gear {}\n",
            self.refractive_index,
            self.symmetry,
            if self.index_gear == 0 {
                "unknown".to_string()
            } else {
                self.index_gear.to_string()
            },
        ));

        out.push_str(&format!("\nFacets ({}):\n", self.facet_count));
        for (kind, count) in &self.facet_counts {
            out.push_str(&format!("  {:<9} {}\n", kind.name(), count));
        }
        if self.untyped_facets > 0 {
            out.push_str(&format!("  {:<9} {}\n", "other", self.untyped_facets));
        }

        out.push_str(&format!(
            "\nMesh: {} unique vertices, {} triangles\n",
            self.unique_vertices, self.triangle_count
        ));
        if let Some((min, max)) = self.bounding_box {
            out.push_str(&format!(
                "Bounding Box: ({:.3}, {:.3}, {:.3}) -> ({:.3}, {:.3}, {:.3})\n",
                min.x, min.y, min.z, max.x, max.y, max.z,
            ));
        }
        out
    }
}

impl fmt::Display for DesignReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_text())
    }
}
