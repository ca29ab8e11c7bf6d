use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::facet::{Facet, FacetType};
use crate::metadata::Metadata;
use crate::vector::Vector3;

/// Coordinates are clamped to this magnitude before quantization.
pub const COORDINATE_LIMIT: f64 = 1e6;

/// Quantization scale: four decimal places.
pub const QUANTIZATION_SCALE: f64 = 10_000.0;

/// Quantize one coordinate to a four-decimal-place integer key.
///
/// The scaled value is rounded to the nearest integer with halves going away
/// from zero (`f64::round`), so two coordinates merge exactly when their scaled
/// values round to the same integer. Non-finite input maps to 0.
pub fn quantize_coordinate(value: f32) -> i64 {
    let v = value as f64;
    if !v.is_finite() {
        return 0;
    }
    (v.clamp(-COORDINATE_LIMIT, COORDINATE_LIMIT) * QUANTIZATION_SCALE).round() as i64
}

/// Quantized key of a vertex.
pub fn vertex_key(v: &Vector3) -> [i64; 3] {
    [
        quantize_coordinate(v.x),
        quantize_coordinate(v.y),
        quantize_coordinate(v.z),
    ]
}

/// Deduplicate vertices under quantization, keeping the first-seen order.
pub fn dedup_vertices<'a>(vertices: impl IntoIterator<Item = &'a Vector3>) -> Vec<Vector3> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for v in vertices {
        if seen.insert(vertex_key(v)) {
            unique.push(*v);
        }
    }
    unique
}

/// A decoded gem design.
///
/// Built once per decode and immutable afterwards. `unique_vertices` is
/// derived from the facets at construction time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeometryModel {
    facets: Vec<Facet>,
    metadata: Metadata,
    unique_vertices: Vec<Vector3>,
}

impl GeometryModel {
    pub fn new(facets: Vec<Facet>, metadata: Metadata) -> Self {
        let unique_vertices = dedup_vertices(facets.iter().flat_map(|f| f.vertices()));
        Self {
            facets,
            metadata,
            unique_vertices,
        }
    }

    pub fn facets(&self) -> &[Facet] {
        &self.facets
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn unique_vertices(&self) -> &[Vector3] {
        &self.unique_vertices
    }

    pub fn facet_count(&self) -> usize {
        self.facets.len()
    }

    pub fn vertex_count(&self) -> usize {
        self.unique_vertices.len()
    }

    pub fn facets_of_type(&self, kind: FacetType) -> impl Iterator<Item = &Facet> {
        self.facets
            .iter()
            .filter(move |f| f.facet_type() == Some(kind))
    }

    /// Facet count per type. Untyped facets are not counted.
    pub fn facet_type_counts(&self) -> BTreeMap<FacetType, usize> {
        let mut counts = BTreeMap::new();
        for kind in self.facets.iter().filter_map(Facet::facet_type) {
            *counts.entry(kind).or_insert(0) += 1;
        }
        counts
    }

    /// Axis-aligned bounds of the unique vertices as `(min, max)`.
    pub fn bounding_box(&self) -> Option<(Vector3, Vector3)> {
        let first = *self.unique_vertices.first()?;
        let bounds = self
            .unique_vertices
            .iter()
            .fold((first, first), |(lo, hi), v| {
                (
                    Vector3::new(lo.x.min(v.x), lo.y.min(v.y), lo.z.min(v.z)),
                    Vector3::new(hi.x.max(v.x), hi.y.max(v.y), hi.z.max(v.z)),
                )
            });
        Some(bounds)
    }
}
