use std::path::Path;

use gem_types::{Facet, GeometryModel};
use tracing::{debug, info, instrument};

use crate::cursor::ByteCursor;
use crate::errors::DecodeError;
use crate::facet::parse_facet;
use crate::options::{DecodeOptions, SymmetryMode};
use crate::symmetry::expand_symmetry;
use crate::trailer::{looks_like_trailer_here, scan_metadata};

/// The facet loop stops once this many bytes or fewer remain.
pub const MIN_FACET_LOOP_REMAINING: usize = 32;

/// Decoder for `.gem` design files.
#[derive(Debug, Clone, Default)]
pub struct GemDecoder {
    options: DecodeOptions,
}

impl GemDecoder {
    pub fn new(options: DecodeOptions) -> Self {
        Self { options }
    }

    /// Decode a complete design.
    ///
    /// Facets are read until the trailer is recognized or a record fails to
    /// parse; the trailer is then searched for and decoded best-effort. Only
    /// a buffer with no decodable facet at all is an error.
    #[instrument(skip(self, bytes), fields(len = bytes.len()))]
    pub fn decode(&self, bytes: &[u8]) -> Result<GeometryModel, DecodeError> {
        let mut cursor = ByteCursor::new(bytes);

        let facets = read_facets(&mut cursor);
        if facets.is_empty() {
            return Err(DecodeError::NoFacetsFound);
        }

        let metadata = scan_metadata(&mut cursor);

        let facets = match self.options.symmetry {
            SymmetryMode::AsStored => facets,
            SymmetryMode::Expand => expand_symmetry(&facets, &metadata),
        };

        let model = GeometryModel::new(facets, metadata);
        info!(
            facets = model.facet_count(),
            vertices = model.vertex_count(),
            folds = model.metadata().symmetry_folds,
            title = %model.metadata().title,
            "decoded gem design"
        );
        Ok(model)
    }

    /// Read and decode a design file from disk.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<GeometryModel, DecodeError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| DecodeError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        self.decode(&bytes)
    }
}

/// Collect facet records from the cursor until the stream ends.
fn read_facets(cursor: &mut ByteCursor<'_>) -> Vec<Facet> {
    let mut facets = Vec::new();
    while cursor.remaining() > MIN_FACET_LOOP_REMAINING {
        if looks_like_trailer_here(cursor) {
            debug!(offset = cursor.position(), "aligned trailer after facets");
            break;
        }
        match parse_facet(cursor) {
            Ok(facet) => facets.push(facet),
            Err(reason) => {
                debug!(
                    offset = cursor.position(),
                    %reason,
                    parsed = facets.len(),
                    "facet stream ended"
                );
                break;
            }
        }
    }
    facets
}

/// Decode a design with default options.
pub fn decode_gem(bytes: &[u8]) -> Result<GeometryModel, DecodeError> {
    GemDecoder::default().decode(bytes)
}

pub fn decode_gem_with(
    bytes: &[u8],
    options: &DecodeOptions,
) -> Result<GeometryModel, DecodeError> {
    GemDecoder::new(options.clone()).decode(bytes)
}

/// Read a design file from disk and decode it with default options.
pub fn load_gem_file(path: impl AsRef<Path>) -> Result<GeometryModel, DecodeError> {
    GemDecoder::default().load_file(path)
}

