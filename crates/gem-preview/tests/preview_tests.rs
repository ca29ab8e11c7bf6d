//! Tests for scene input, STL export and design reports.

use gem_preview::stl::{export_ascii_stl, export_binary_stl};
use gem_preview::{DesignReport, PreviewError, PreviewSettings, SceneInput, TriangleMesh};
use gem_types::{Facet, GeometryModel, Metadata, Vector3};

fn square_facet(label: &str, z: f32, normal: Vector3) -> Facet {
    Facet::new(
        normal,
        label,
        "",
        vec![
            Vector3::new(0.5, 0.5, z),
            Vector3::new(-0.5, 0.5, z),
            Vector3::new(-0.5, -0.5, z),
            Vector3::new(0.5, -0.5, z),
        ],
    )
    .unwrap()
}

fn small_design() -> GeometryModel {
    let metadata = Metadata {
        symmetry_folds: 4,
        symmetry_mirror: true,
        index_gear: 96,
        refractive_index: 1.76,
        title: "Square Step".to_string(),
        author: "Test Cutter".to_string(),
        ..Metadata::default()
    };
    GeometryModel::new(
        vec![
            square_facet("T", 0.2, Vector3::new(0.0, 0.0, 2.0)),
            square_facet("P1", -0.8, Vector3::new(0.0, 0.0, -1.0)),
            square_facet("", -0.8, Vector3::new(0.0, 0.0, -1.0)),
        ],
        metadata,
    )
}

#[test]
fn binary_stl_file_size_formula() {
    let mesh = TriangleMesh::from_model(&small_design());
    let stl = export_binary_stl(&mesh, "square").unwrap();
    assert_eq!(mesh.triangle_count(), 6);
    assert_eq!(stl.len(), 80 + 4 + 6 * 50);
    let tri_count = u32::from_le_bytes([stl[80], stl[81], stl[82], stl[83]]);
    assert_eq!(tri_count, 6);
    let header = String::from_utf8_lossy(&stl[..80]);
    assert!(header.contains("square"));
}

#[test]
fn binary_stl_normals_are_unit_facet_normals() {
    let mesh = TriangleMesh::from_model(&small_design());
    let stl = export_binary_stl(&mesh, "square").unwrap();
    let nz = f32::from_le_bytes([stl[92], stl[93], stl[94], stl[95]]);
    assert_eq!(nz, 1.0);
}

#[test]
fn ascii_stl_structure() {
    let mesh = TriangleMesh::from_model(&small_design());
    let stl = export_ascii_stl(&mesh, "square").unwrap();
    assert!(stl.starts_with("solid square\n"));
    assert!(stl.ends_with("endsolid square\n"));
    assert_eq!(stl.matches("endfacet").count(), 6);
    assert_eq!(stl.matches("vertex ").count(), 18);
}

#[test]
fn empty_mesh_cannot_be_exported() {
    let mesh = TriangleMesh::new();
    assert!(matches!(
        export_binary_stl(&mesh, "x"),
        Err(PreviewError::EmptyMesh)
    ));
    assert!(matches!(
        export_ascii_stl(&mesh, "x"),
        Err(PreviewError::EmptyMesh)
    ));
}

#[test]
fn scene_input_carries_displayed_metadata() {
    let settings = PreviewSettings {
        opacity: 0.4,
        ..PreviewSettings::default()
    };
    let scene = SceneInput::new(&small_design(), settings.clone());
    assert_eq!(scene.title, "Square Step");
    assert_eq!(scene.refractive_index, 1.76);
    assert_eq!(scene.symmetry_folds, 4);
    assert!(scene.symmetry_mirror);
    assert_eq!(scene.settings, settings);
    assert_eq!(scene.display_title("file"), "Square Step");
    assert_eq!(scene.mesh.facet_ranges.len(), 3);
}

#[test]
fn untitled_scene_uses_fallback() {
    let model = GeometryModel::new(
        vec![square_facet("T", 0.2, Vector3::Z)],
        Metadata::default(),
    );
    let scene = SceneInput::new(&model, PreviewSettings::default());
    assert_eq!(scene.display_title("oval"), "oval");
}

#[test]
fn report_summarizes_design() {
    let report = DesignReport::from_model(&small_design());
    assert_eq!(report.facet_count, 3);
    assert_eq!(report.untyped_facets, 1);
    assert_eq!(report.unique_vertices, 8);
    assert_eq!(report.triangle_count, 6);

    let text = report.to_text();
    assert!(text.contains("=== Square Step ==="));
    assert!(text.contains("Author: Test Cutter"));
    assert!(text.contains("RI 1.760 | Symmetry 4-mirror | Gear 96"));
    assert!(text.contains("pavilion"));
    assert!(text.contains("table"));
    assert!(text.contains("other"));
    assert!(text.contains("Bounding Box: (-0.500, -0.500, -0.800) -> (0.500, 0.500, 0.200)"));
}
