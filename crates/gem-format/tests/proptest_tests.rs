//! Property-based tests for the decoder using the `proptest` crate.

mod common;

use common::{GemBuilder, TrailerSpec};
use gem_format::{decode_gem, parse_facet, ByteCursor};
use gem_types::Vector3;
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

/// Unit-length normal from spherical angles.
fn arb_normal() -> impl Strategy<Value = [f64; 3]> {
    (0.1f64..3.0, 0.0f64..std::f64::consts::TAU).prop_map(|(theta, phi)| {
        [
            theta.sin() * phi.cos(),
            theta.sin() * phi.sin(),
            theta.cos(),
        ]
    })
}

fn arb_vertex() -> impl Strategy<Value = [f64; 3]> {
    (-10.0f64..10.0, -10.0f64..10.0, -10.0f64..10.0).prop_map(|(x, y, z)| [x, y, z])
}

#[derive(Debug, Clone)]
struct FacetSpec {
    normal: [f64; 3],
    label: String,
    vertices: Vec<[f64; 3]>,
}

fn arb_facet() -> impl Strategy<Value = FacetSpec> {
    (
        arb_normal(),
        "[PGCT][0-9]{0,2}",
        prop::collection::vec(arb_vertex(), 3..8),
    )
        .prop_map(|(normal, label, vertices)| FacetSpec {
            normal,
            label,
            vertices,
        })
}

fn build(facets: &[FacetSpec], trailer: &TrailerSpec<'_>) -> Vec<u8> {
    let mut builder = GemBuilder::new();
    for f in facets {
        builder = builder.facet(f.normal, &format!("{}\tcut", f.label), &f.vertices);
    }
    builder.trailer(trailer).build()
}

// ---------------------------------------------------------------------------
// 1. Well-formed facets followed by a trailer decode exactly
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn well_formed_designs_round_trip(
        facets in prop::collection::vec(arb_facet(), 1..10),
        folds in 1i32..=96,
        mirror in 0i32..=1,
        ri in 1.0f64..=3.0,
    ) {
        let trailer = TrailerSpec {
            folds,
            mirror,
            refractive_index: ri,
            text: "Title\nAuthor",
            ..TrailerSpec::default()
        };
        let model = decode_gem(&build(&facets, &trailer)).unwrap();

        prop_assert_eq!(model.facet_count(), facets.len());
        for (decoded, spec) in model.facets().iter().zip(&facets) {
            prop_assert_eq!(decoded.label(), spec.label.as_str());
            prop_assert_eq!(decoded.instruction(), "cut");
            let expected: Vec<Vector3> = spec
                .vertices
                .iter()
                .map(|v| Vector3::from_f64(v[0], v[1], v[2]))
                .collect();
            prop_assert_eq!(decoded.vertices(), expected.as_slice());
        }

        let meta = model.metadata();
        prop_assert_eq!(meta.symmetry_folds, folds as u32);
        prop_assert_eq!(meta.symmetry_mirror, mirror == 1);
        prop_assert_eq!(meta.refractive_index, ri);
        prop_assert_eq!(meta.title.as_str(), "Title");
        prop_assert_eq!(meta.author.as_str(), "Author");
    }
}

// ---------------------------------------------------------------------------
// 2. A truncated facet never advances the cursor
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn truncated_facet_leaves_cursor(facet in arb_facet(), cut in 0.0f64..1.0) {
        let mut b = GemBuilder::new();
        b.facet_record(facet.normal, 7, &facet.label, &facet.vertices);
        let bytes = b.build();
        let len = (cut * bytes.len() as f64) as usize;

        let mut cursor = ByteCursor::new(&bytes[..len]);
        prop_assert!(parse_facet(&mut cursor).is_err());
        prop_assert_eq!(cursor.position(), 0);
    }
}
