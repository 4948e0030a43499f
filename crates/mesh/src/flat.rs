use crate::geometry::{Triangle, Vector3};
use crate::TriangleMesh;

/// Mesh form where every triangle embeds its normal and corner coordinates.
///
/// Nothing is shared between triangles; bit-identical corners occur once per
/// referencing triangle. This is a direct image of the wire format.
#[derive(Debug)]
pub struct FlatMesh {
    /// Raw 80-byte file header, decoded lossily. Not semantically parsed.
    pub header: String,
    /// Triangle count as declared by the file.
    pub declared_count: u32,
    pub triangles: Vec<Triangle>,
}

impl TriangleMesh for FlatMesh {
    fn from_header(header: String, count: u32) -> Self {
        Self {
            header,
            declared_count: count,
            triangles: Vec::with_capacity(count as usize),
        }
    }

    fn push_triangle(&mut self, normal: Vector3, p0: Vector3, p1: Vector3, p2: Vector3) {
        self.triangles.push(Triangle { normal, p0, p1, p2 });
    }

    fn triangle_count(&self) -> usize {
        self.triangles.len()
    }
}
