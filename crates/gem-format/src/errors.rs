/// Errors surfaced by a decode.
///
/// Only [`DecodeError::NoFacetsFound`] is raised by the decoder itself;
/// facet and trailer problems are recovered locally.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DecodeError {
    #[error("no decodable facets found")]
    NoFacetsFound,

    #[error("unexpected end of input at offset {offset}: needed {needed} more bytes")]
    UnexpectedEndOfInput { offset: usize, needed: usize },

    #[error("invalid data: {reason}")]
    InvalidData { reason: String },

    #[error("failed to read {path}: {message}")]
    Io { path: String, message: String },
}

/// Why a facet record was not accepted at the current offset.
///
/// Rejections end the facet stream; they are never reported as decode errors.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum FacetRejection {
    #[error("record truncated")]
    Truncated,

    #[error("normal has a non-finite component")]
    NonFiniteNormal,

    #[error("normal magnitude {magnitude} outside plausible range")]
    ImplausibleNormal { magnitude: f64 },

    #[error("zero record marker")]
    ZeroMarker,

    #[error("instruction length {length} outside plausible range")]
    BadInstructionLength { length: u8 },

    #[error("vertex {index} out of range")]
    BadVertex { index: usize },

    #[error("only {count} vertices")]
    TooFewVertices { count: usize },
}
