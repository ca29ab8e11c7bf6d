//! Replication of facets by a design's rotational and mirror symmetry.
//!
//! Not applied by default: designs are normally stored with every facet
//! already present. See [`crate::options::SymmetryMode`].

use std::collections::HashSet;
use std::f64::consts::TAU;

use gem_types::{Facet, Metadata, Vector3};
use tracing::debug;

/// Vertices closer than this count as mirror images of each other.
pub const MIRROR_TOLERANCE: f32 = 1e-3;

/// Expand `facets` by `metadata`'s folds about the Z axis, then add an
/// X-mirrored copy when the design is mirror-symmetric and the rotated set
/// is not already its own mirror image.
pub fn expand_symmetry(facets: &[Facet], metadata: &Metadata) -> Vec<Facet> {
    let folds = metadata.symmetry_folds.max(1);
    let step = TAU / folds as f64;

    let mut expanded = Vec::with_capacity(facets.len() * folds as usize);
    for facet in facets {
        expanded.push(facet.clone());
        for k in 1..folds {
            let angle = k as f64 * step;
            expanded.push(facet.map_points(|p| p.rotated_z(angle)));
        }
    }

    if metadata.symmetry_mirror {
        if is_self_mirrored(&expanded) {
            debug!("geometry already mirror-symmetric, skipping mirror copy");
        } else {
            let mirrored: Vec<Facet> = expanded
                .iter()
                .map(|f| f.map_points(|p| p.mirrored_x()).reversed())
                .collect();
            expanded.extend(mirrored);
        }
    }

    debug!(
        input = facets.len(),
        output = expanded.len(),
        folds,
        mirror = metadata.symmetry_mirror,
        "symmetry expansion"
    );
    expanded
}

/// Whether every vertex has an X-mirrored counterpart within
/// [`MIRROR_TOLERANCE`].
pub fn is_self_mirrored(facets: &[Facet]) -> bool {
    let cell = |v: &Vector3| {
        [
            (v.x / MIRROR_TOLERANCE).round() as i64,
            (v.y / MIRROR_TOLERANCE).round() as i64,
            (v.z / MIRROR_TOLERANCE).round() as i64,
        ]
    };
    let occupied: HashSet<[i64; 3]> = facets
        .iter()
        .flat_map(|f| f.vertices())
        .map(cell)
        .collect();

    facets.iter().flat_map(|f| f.vertices()).all(|v| {
        let [x, y, z] = cell(&v.mirrored_x());
        // Neighbouring cells absorb rounding at cell boundaries.
        (-1..=1).any(|dx| {
            (-1..=1).any(|dy| {
                (-1..=1).any(|dz| occupied.contains(&[x + dx, y + dy, z + dz]))
            })
        })
    })
}
