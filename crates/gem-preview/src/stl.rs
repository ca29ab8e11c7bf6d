//! STL export of a triangulated design — binary and ASCII formats.
//!
//! Triangle normals are the facet normals carried on the mesh vertices,
//! not recomputed from the geometry.

use gem_types::Vector3;

use crate::errors::PreviewError;
use crate::mesh::TriangleMesh;

fn triangle_normal(mesh: &TriangleMesh, tri: &[u32]) -> Vector3 {
    let n = mesh.normal(tri[0]);
    let len = n.length();
    if len > 1e-12 {
        n * (1.0 / len)
    } else {
        Vector3::Z
    }
}

/// Export a mesh as a binary STL file.
///
/// Binary STL format:
/// - 80-byte header (arbitrary text)
/// - u32 triangle count (little-endian)
/// - For each triangle: 3×f32 normal + 3×(3×f32 vertex) + u16 attribute = 50 bytes
pub fn export_binary_stl(mesh: &TriangleMesh, name: &str) -> Result<Vec<u8>, PreviewError> {
    mesh.validate()?;
    let tri_count = mesh.triangle_count();

    let mut buf = Vec::with_capacity(80 + 4 + tri_count * 50);

    let header = format!("gem design: {}", name);
    let header_bytes = header.as_bytes();
    buf.extend_from_slice(&header_bytes[..header_bytes.len().min(80)]);
    buf.resize(80, 0u8);

    buf.extend_from_slice(&(tri_count as u32).to_le_bytes());

    for tri in mesh.indices.chunks(3) {
        for c in triangle_normal(mesh, tri).to_array() {
            buf.extend_from_slice(&c.to_le_bytes());
        }
        for &idx in tri {
            for c in mesh.position(idx).to_array() {
                buf.extend_from_slice(&c.to_le_bytes());
            }
        }
        buf.extend_from_slice(&0u16.to_le_bytes());
    }

    Ok(buf)
}

/// Export a mesh as an ASCII STL string.
pub fn export_ascii_stl(mesh: &TriangleMesh, name: &str) -> Result<String, PreviewError> {
    mesh.validate()?;

    let mut out = String::with_capacity(mesh.triangle_count() * 300);
    out.push_str(&format!("solid {}\n", name));

    for tri in mesh.indices.chunks(3) {
        let n = triangle_normal(mesh, tri);
        out.push_str(&format!("  facet normal {} {} {}\n", n.x, n.y, n.z));
        out.push_str("    outer loop\n");
        for &idx in tri {
            let v = mesh.position(idx);
            out.push_str(&format!("      vertex {} {} {}\n", v.x, v.y, v.z));
        }
        out.push_str("    endloop\n");
        out.push_str("  endfacet\n");
    }

    out.push_str(&format!("endsolid {}\n", name));
    Ok(out)
}
