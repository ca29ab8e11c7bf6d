//! Consumer side of the gem decoder: everything a previewer needs to show a
//! decoded design without knowing the file format.
//!
//! # Key Components
//!
//! - [`TriangleMesh`] — Fan-triangulated facets for scene construction
//! - [`PreviewSettings`] — Rendering parameters passed explicitly to scene setup
//! - [`SceneInput`] — The mesh plus the metadata a scene displays
//! - [`stl`] — Binary and ASCII STL export
//! - [`DesignReport`] — Plain-text design summary

pub mod errors;
pub mod mesh;
pub mod report;
pub mod scene;
pub mod settings;
pub mod stl;

pub use errors::PreviewError;
pub use mesh::{FacetRange, TriangleMesh};
pub use report::DesignReport;
pub use scene::SceneInput;
pub use settings::PreviewSettings;
