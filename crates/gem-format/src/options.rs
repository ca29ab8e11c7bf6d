//! Caller-selectable decode behavior.

use serde::{Deserialize, Serialize};

/// What to do with the symmetry recorded in a design's trailer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymmetryMode {
    /// Return facets exactly as stored in the file.
    #[default]
    AsStored,
    /// Replicate facets by the recorded fold and mirror symmetry.
    Expand,
}

/// Options for a single decode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecodeOptions {
    pub symmetry: SymmetryMode,
}

impl DecodeOptions {
    /// Facets as stored; the default.
    pub fn as_stored() -> Self {
        Self::default()
    }

    /// Expand facets by the design's symmetry after decoding.
    pub fn expand_symmetry() -> Self {
        Self {
            symmetry: SymmetryMode::Expand,
        }
    }
}
