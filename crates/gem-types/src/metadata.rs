use serde::{Deserialize, Serialize};

/// Refractive index assumed when a design does not record one.
pub const DEFAULT_REFRACTIVE_INDEX: f64 = 1.54;

/// Descriptive and optical data recovered from a design's trailer.
///
/// Every field has a usable default, so a design whose trailer could not be
/// located still produces a complete value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Rotational symmetry count about the design axis. Always at least 1.
    pub symmetry_folds: u32,
    /// Whether the design is mirror-symmetric.
    pub symmetry_mirror: bool,
    /// Number of teeth on the index gear the design was cut for (0 if unknown).
    pub index_gear: u32,
    pub refractive_index: f64,
    /// Gear location angle in degrees.
    pub gear_location_angle: f64,
    pub title: String,
    pub author: String,
    pub description: String,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            symmetry_folds: 1,
            symmetry_mirror: false,
            index_gear: 0,
            refractive_index: DEFAULT_REFRACTIVE_INDEX,
            gear_location_angle: 0.0,
            title: String::new(),
            author: String::new(),
            description: String::new(),
        }
    }
}

impl Metadata {
    /// Short symmetry notation, e.g. `8-mirror` or `5-fold`.
    pub fn symmetry_label(&self) -> String {
        if self.symmetry_mirror {
            format!("{}-mirror", self.symmetry_folds)
        } else {
            format!("{}-fold", self.symmetry_folds)
        }
    }
}
