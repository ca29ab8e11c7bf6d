use gem_types::GeometryModel;

use crate::mesh::TriangleMesh;
use crate::settings::PreviewSettings;

/// Everything a scene builder needs to display one design.
///
/// Settings are passed in explicitly; nothing here reads global state.
#[derive(Debug, Clone)]
pub struct SceneInput {
    pub mesh: TriangleMesh,
    pub settings: PreviewSettings,
    pub title: String,
    pub refractive_index: f64,
    pub symmetry_folds: u32,
    pub symmetry_mirror: bool,
}

impl SceneInput {
    pub fn new(model: &GeometryModel, settings: PreviewSettings) -> Self {
        let meta = model.metadata();
        Self {
            mesh: TriangleMesh::from_model(model),
            settings,
            title: meta.title.clone(),
            refractive_index: meta.refractive_index,
            symmetry_folds: meta.symmetry_folds,
            symmetry_mirror: meta.symmetry_mirror,
        }
    }

    /// Title for a window or overlay; untitled designs fall back to `fallback`
    /// (usually the file name).
    pub fn display_title<'a>(&'a self, fallback: &'a str) -> &'a str {
        if self.title.is_empty() {
            fallback
        } else {
            &self.title
        }
    }
}
