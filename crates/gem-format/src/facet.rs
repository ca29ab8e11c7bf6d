//! Decoding of a single facet record.
//!
//! Record layout, all little-endian:
//!
//! ```text
//! normal        3 x f64
//! marker        i32, nonzero
//! text length   u8, 1..=199
//! text          ASCII, label and instruction
//! vertices      repeated { marker i32 != 0, 3 x f64 }, terminated by marker 0
//! ```
//!
//! There is no length prefix for the record as a whole, so each field is
//! checked for plausibility and the record is rejected as soon as one fails.

use gem_types::{Facet, FacetType, Vector3};
use tracing::trace;

use crate::cursor::ByteCursor;
use crate::errors::FacetRejection;

/// Normal magnitudes must lie strictly inside this range.
pub const MIN_NORMAL_MAGNITUDE: f64 = 0.01;
pub const MAX_NORMAL_MAGNITUDE: f64 = 100.0;

/// Instruction text must be shorter than this.
pub const MAX_INSTRUCTION_LEN: u8 = 200;

/// Vertex coordinates must be strictly smaller than this in magnitude.
pub const MAX_COORDINATE: f64 = 1e6;

/// The label/instruction text of a facet, split by its surface form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetText<'a> {
    /// `label<TAB>instruction`
    Tabbed {
        label: &'a str,
        instruction: &'a str,
    },
    /// A type letter with optional digits, then the instruction: `P12 cut ...`
    Prefixed {
        label: &'a str,
        instruction: &'a str,
    },
    /// No recognizable label.
    Bare { instruction: &'a str },
}

impl<'a> FacetText<'a> {
    pub fn parse(text: &'a str) -> Self {
        if let Some((label, instruction)) = text.split_once('\t') {
            return FacetText::Tabbed { label, instruction };
        }

        let starts_with_type = text
            .chars()
            .next()
            .is_some_and(|c| FacetType::from_letter(c).is_some());
        if starts_with_type {
            // Type letters are ASCII, so byte offsets are char offsets here.
            let digits = text[1..].bytes().take_while(u8::is_ascii_digit).count();
            let (label, rest) = text.split_at(1 + digits);
            return FacetText::Prefixed {
                label,
                instruction: rest.trim_start(),
            };
        }

        FacetText::Bare { instruction: text }
    }

    pub fn label(&self) -> &'a str {
        match *self {
            FacetText::Tabbed { label, .. } | FacetText::Prefixed { label, .. } => label,
            FacetText::Bare { .. } => "",
        }
    }

    pub fn instruction(&self) -> &'a str {
        match *self {
            FacetText::Tabbed { instruction, .. }
            | FacetText::Prefixed { instruction, .. }
            | FacetText::Bare { instruction } => instruction,
        }
    }
}

/// Decode one facet at the cursor.
///
/// On success the cursor sits just past the vertex terminator. On any
/// rejection the cursor is restored to where it started.
pub fn parse_facet(cursor: &mut ByteCursor<'_>) -> Result<Facet, FacetRejection> {
    let start = cursor.position();
    let result = parse_facet_fields(cursor);
    if let Err(reason) = &result {
        trace!(offset = start, %reason, "facet rejected");
        cursor.seek(start);
    }
    result
}

fn parse_facet_fields(cursor: &mut ByteCursor<'_>) -> Result<Facet, FacetRejection> {
    let (nx, ny, nz) = cursor.read_f64_triple().ok_or(FacetRejection::Truncated)?;
    if !(nx.is_finite() && ny.is_finite() && nz.is_finite()) {
        return Err(FacetRejection::NonFiniteNormal);
    }
    let magnitude = (nx * nx + ny * ny + nz * nz).sqrt();
    if !(magnitude > MIN_NORMAL_MAGNITUDE && magnitude < MAX_NORMAL_MAGNITUDE) {
        return Err(FacetRejection::ImplausibleNormal { magnitude });
    }
    let normal = Vector3::from_f64(nx, ny, nz);

    let marker = cursor.read_i32().ok_or(FacetRejection::Truncated)?;
    if marker == 0 {
        return Err(FacetRejection::ZeroMarker);
    }

    let length = cursor.read_u8().ok_or(FacetRejection::Truncated)?;
    if length == 0 || length >= MAX_INSTRUCTION_LEN {
        return Err(FacetRejection::BadInstructionLength { length });
    }
    let text = cursor
        .read_ascii_string(length as usize)
        .ok_or(FacetRejection::Truncated)?;
    let parsed = FacetText::parse(&text);

    let vertices = read_vertices(cursor)?;

    let count = vertices.len();
    Facet::new(normal, parsed.label(), parsed.instruction(), vertices)
        .ok_or(FacetRejection::TooFewVertices { count })
}

fn read_vertices(cursor: &mut ByteCursor<'_>) -> Result<Vec<Vector3>, FacetRejection> {
    let mut vertices = Vec::new();
    loop {
        let marker = cursor.read_i32().ok_or(FacetRejection::Truncated)?;
        if marker == 0 {
            break;
        }
        let (x, y, z) = cursor.read_f64_triple().ok_or(FacetRejection::Truncated)?;
        if !(plausible_coordinate(x) && plausible_coordinate(y) && plausible_coordinate(z)) {
            return Err(FacetRejection::BadVertex {
                index: vertices.len(),
            });
        }
        vertices.push(Vector3::from_f64(x, y, z));
    }
    Ok(vertices)
}

fn plausible_coordinate(v: f64) -> bool {
    v.is_finite() && v.abs() < MAX_COORDINATE
}
