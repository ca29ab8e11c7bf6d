//! Decoder for `.gem` faceting design files.
//!
//! The format has no published layout and no length-prefixed sections.
//! Facet records are recognized by plausibility checks on each field, and
//! the metadata trailer is found with a short forward scan. Everything that
//! can be recovered is; only a file with no readable facet fails.

pub mod cursor;
pub mod decode;
pub mod errors;
pub mod facet;
pub mod options;
pub mod symmetry;
pub mod trailer;

pub use cursor::ByteCursor;
pub use decode::{decode_gem, decode_gem_with, load_gem_file, GemDecoder};
pub use errors::{DecodeError, FacetRejection};
pub use facet::{parse_facet, FacetText};
pub use options::{DecodeOptions, SymmetryMode};
pub use symmetry::expand_symmetry;
pub use trailer::{locate_trailer, looks_like_trailer_here, read_metadata, scan_metadata};
