use serde::{Deserialize, Serialize};

use crate::vector::Vector3;

/// Facet classification taken from the first character of a facet label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FacetType {
    Pavilion,
    Girdle,
    Crown,
    Table,
}

impl FacetType {
    pub const ALL: [FacetType; 4] = [
        FacetType::Pavilion,
        FacetType::Girdle,
        FacetType::Crown,
        FacetType::Table,
    ];

    pub fn from_letter(c: char) -> Option<Self> {
        match c {
            'P' => Some(FacetType::Pavilion),
            'G' => Some(FacetType::Girdle),
            'C' => Some(FacetType::Crown),
            'T' => Some(FacetType::Table),
            _ => None,
        }
    }

    /// Classify a label. Empty or unrecognized labels have no type.
    pub fn from_label(label: &str) -> Option<Self> {
        label.chars().next().and_then(Self::from_letter)
    }

    pub fn letter(self) -> char {
        match self {
            FacetType::Pavilion => 'P',
            FacetType::Girdle => 'G',
            FacetType::Crown => 'C',
            FacetType::Table => 'T',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FacetType::Pavilion => "pavilion",
            FacetType::Girdle => "girdle",
            FacetType::Crown => "crown",
            FacetType::Table => "table",
        }
    }
}

/// One planar face of a gem design.
///
/// A facet always carries at least three vertices; construction through
/// [`Facet::new`] enforces this, and deserialization goes through the same
/// check. Fields are read-only after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FacetData")]
pub struct Facet {
    normal: Vector3,
    label: String,
    instruction: String,
    vertices: Vec<Vector3>,
}

/// Error for a facet polygon with fewer than [`Facet::MIN_VERTICES`] vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("facet needs at least 3 vertices, got {count}")]
pub struct TooFewVertices {
    pub count: usize,
}

/// Unchecked serialized form of [`Facet`].
#[derive(Deserialize)]
struct FacetData {
    normal: Vector3,
    label: String,
    instruction: String,
    vertices: Vec<Vector3>,
}

impl TryFrom<FacetData> for Facet {
    type Error = TooFewVertices;

    fn try_from(data: FacetData) -> Result<Self, Self::Error> {
        let count = data.vertices.len();
        Facet::new(data.normal, data.label, data.instruction, data.vertices)
            .ok_or(TooFewVertices { count })
    }
}

impl Facet {
    pub const MIN_VERTICES: usize = 3;

    /// Build a facet, or `None` if the polygon has fewer than three vertices.
    pub fn new(
        normal: Vector3,
        label: impl Into<String>,
        instruction: impl Into<String>,
        vertices: Vec<Vector3>,
    ) -> Option<Self> {
        if vertices.len() < Self::MIN_VERTICES {
            return None;
        }
        Some(Self {
            normal,
            label: label.into(),
            instruction: instruction.into(),
            vertices,
        })
    }

    pub fn normal(&self) -> Vector3 {
        self.normal
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Cutting instruction text, e.g. an angle/index note from the designer.
    pub fn instruction(&self) -> &str {
        &self.instruction
    }

    pub fn vertices(&self) -> &[Vector3] {
        &self.vertices
    }

    pub fn facet_type(&self) -> Option<FacetType> {
        FacetType::from_label(&self.label)
    }

    /// Apply `f` to the normal and every vertex, keeping label and instruction.
    pub fn map_points(&self, f: impl Fn(Vector3) -> Vector3) -> Self {
        Self {
            normal: f(self.normal),
            label: self.label.clone(),
            instruction: self.instruction.clone(),
            vertices: self.vertices.iter().map(|v| f(*v)).collect(),
        }
    }

    /// Same facet with the vertex loop traversed in the opposite direction.
    pub fn reversed(mut self) -> Self {
        self.vertices.reverse();
        self
    }
}
