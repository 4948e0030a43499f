mod flat;
mod geometry;
mod vertex_index;

pub use flat::*;
pub use geometry::*;
pub use vertex_index::*;

/// A reasonable default mesh to select for unopinionated consumers.
pub type DefaultMesh = IndexedMesh;

/// A mesh representation that can be populated from one decode pass over a
/// triangle stream.
pub trait TriangleMesh: Sized {
    /// Creates an empty mesh from the raw file header and the declared
    /// triangle count.
    ///
    /// `count` is a capacity hint for storage, not a promise; the mesh holds
    /// whatever [`TriangleMesh::push_triangle`] delivers.
    fn from_header(header: String, count: u32) -> Self;

    /// Appends one triangle in wire order: normal first, then the three
    /// corners.
    fn push_triangle(&mut self, normal: Vector3, p0: Vector3, p1: Vector3, p2: Vector3);

    /// Returns the number of triangles that comprises this mesh.
    fn triangle_count(&self) -> usize;
}
