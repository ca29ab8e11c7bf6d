use gem_format::DecodeError;

/// Errors from preview preparation and export.
#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    #[error("mesh has no triangles")]
    EmptyMesh,

    #[error("index {index} out of range (vertex count = {vertex_count})")]
    IndexOutOfRange { index: u32, vertex_count: usize },

    #[error("setting {name} = {value} out of range")]
    InvalidSetting { name: &'static str, value: f32 },

    #[error("failed to parse settings: {0}")]
    SettingsParse(#[from] serde_json::Error),

    #[error("failed to access {path}: {message}")]
    Io { path: String, message: String },

    #[error("decode failed: {0}")]
    Decode(#[from] DecodeError),
}
