//! Detection and decoding of the metadata trailer that follows the facets.
//!
//! Trailer layout, all little-endian:
//!
//! ```text
//! marker        i32, always 0
//! pad           i32
//! folds         i32, 1..=96
//! mirror        i32, 0 or 1
//! gear          i32
//! ri            f64, 1.0..=3.0
//! gear angle    f64
//! text          ASCII lines: title, author, description...
//! ```
//!
//! The trailer is not always aligned with the end of the last facet, so it is
//! located by probing a small window of byte offsets.

use gem_types::{Metadata, DEFAULT_REFRACTIVE_INDEX};
use tracing::debug;

use crate::cursor::ByteCursor;

pub const MIN_FOLDS: i32 = 1;
pub const MAX_FOLDS: i32 = 96;
pub const MIN_REFRACTIVE_INDEX: f64 = 1.0;
pub const MAX_REFRACTIVE_INDEX: f64 = 3.0;

/// Number of byte offsets probed by [`locate_trailer`].
pub const SCAN_WINDOW: usize = 32;

/// Bytes needed to validate a trailer candidate: five `i32` and one `f64`.
pub const PROBE_LEN: usize = 28;

fn plausible_header(marker: i32, folds: i32, mirror: i32) -> bool {
    marker == 0 && (MIN_FOLDS..=MAX_FOLDS).contains(&folds) && (mirror == 0 || mirror == 1)
}

/// Cheap check for an aligned trailer at the cursor. Does not consume.
pub fn looks_like_trailer_here(cursor: &ByteCursor<'_>) -> bool {
    let words = (
        cursor.peek_i32_at(0),
        cursor.peek_i32_at(8),
        cursor.peek_i32_at(12),
    );
    match words {
        (Some(marker), Some(folds), Some(mirror)) => plausible_header(marker, folds, mirror),
        _ => false,
    }
}

/// Validate a full trailer candidate at the probe's position.
fn probe_matches(mut probe: ByteCursor<'_>) -> Option<bool> {
    let marker = probe.read_i32()?;
    let _pad = probe.read_i32()?;
    let folds = probe.read_i32()?;
    let mirror = probe.read_i32()?;
    let _gear = probe.read_i32()?;
    let ri = probe.read_f64()?;
    Some(
        plausible_header(marker, folds, mirror)
            && (MIN_REFRACTIVE_INDEX..=MAX_REFRACTIVE_INDEX).contains(&ri),
    )
}

/// Search forward for the trailer within [`SCAN_WINDOW`] byte offsets.
///
/// On success the cursor is left at the trailer and its offset returned.
/// Otherwise the cursor is unchanged.
pub fn locate_trailer(cursor: &mut ByteCursor<'_>) -> Option<usize> {
    let start = cursor.position();
    for delta in 0..SCAN_WINDOW {
        let offset = start + delta;
        if cursor.len().saturating_sub(offset) < PROBE_LEN {
            break;
        }
        let mut probe = cursor.clone();
        probe.seek(offset);
        if probe_matches(probe) == Some(true) {
            debug!(offset, delta, "trailer located");
            cursor.seek(offset);
            return Some(offset);
        }
    }
    debug!(start, "no trailer within scan window");
    cursor.seek(start);
    None
}

/// Decode trailer fields at the cursor, substituting defaults for anything
/// that cannot be read. Consumes the rest of the buffer.
pub fn read_metadata(cursor: &mut ByteCursor<'_>) -> Metadata {
    let mut meta = Metadata::default();

    cursor.skip(4); // marker
    cursor.skip(4); // pad

    if let Some(folds) = cursor.read_i32() {
        meta.symmetry_folds = folds.max(1) as u32;
    }
    if let Some(mirror) = cursor.read_i32() {
        meta.symmetry_mirror = mirror != 0;
    }
    meta.index_gear = cursor.read_i32().unwrap_or(0).max(0) as u32;
    meta.refractive_index = cursor.read_f64().unwrap_or(DEFAULT_REFRACTIVE_INDEX);
    meta.gear_location_angle = cursor.read_f64().unwrap_or(0.0);

    if let Some(text) = cursor.read_ascii_string(cursor.remaining()) {
        apply_text_lines(&mut meta, &text);
    }
    meta
}

/// Fill title, author and description from newline-separated text.
fn apply_text_lines(meta: &mut Metadata, text: &str) {
    let mut lines = text
        .split('\n')
        .map(|line| line.trim_matches(|c: char| c.is_ascii_control()))
        .filter(|line| !line.is_empty());

    if let Some(title) = lines.next() {
        meta.title = title.to_string();
    }
    if let Some(author) = lines.next() {
        meta.author = author.to_string();
    }
    meta.description = lines.collect::<Vec<_>>().join(" ");
}

/// Locate the trailer and decode it, or fall back to default metadata.
pub fn scan_metadata(cursor: &mut ByteCursor<'_>) -> Metadata {
    match locate_trailer(cursor) {
        Some(_) => read_metadata(cursor),
        None => Metadata::default(),
    }
}
