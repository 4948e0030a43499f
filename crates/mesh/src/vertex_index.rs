use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::geometry::{ordered, OrderedVec3, Vector3};
use crate::TriangleMesh;

/// Maintains geometry for a single facet.
///
/// The corner fields are indices into a [`VertexPool`], so each corner costs
/// 4 bytes instead of the 12 required to store the full Vector3. The real
/// savings come from reuse: in a closed mesh most vertices are shared by
/// several facets but occupy a single pool slot.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Facet {
    pub normal: Vector3,
    pub p0: u32,
    pub p1: u32,
    pub p2: u32,
}

/// Distinct corner points in first-encounter order, with a reverse lookup
/// assigning every distinct point a single dense index.
pub struct VertexPool {
    points: Vec<Vector3>,
    index_of: HashMap<OrderedVec3, u32>,
    snap: bool,
}

trait Truncate {
    fn truncate_micros(self) -> Self;
}

impl Truncate for f32 {
    fn truncate_micros(self) -> Self {
        (self * 1_000.0).round() / 1_000.0
    }
}

impl VertexPool {
    /// Creates an empty pool pre-sized for roughly `capacity` distinct points.
    ///
    /// Matching is exact value equality: two points share a slot only when
    /// all three coordinates compare equal, with no tolerance.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            index_of: HashMap::with_capacity(capacity),
            snap: false,
        }
    }

    /// Creates a pool that snaps coordinates to the nearest 0.001 before
    /// matching, merging near-duplicate corners from sloppy exporters.
    ///
    /// The stored point is always the first-encountered original, not the
    /// snapped value. This mode is opt-in; [`VertexPool::with_capacity`] is
    /// the documented exact-matching default.
    pub fn with_snap_micros(capacity: usize) -> Self {
        Self {
            snap: true,
            ..Self::with_capacity(capacity)
        }
    }

    /// Returns the index of `p`, inserting it if it has not been seen.
    ///
    /// Indices are dense and assigned in first-encounter order, so for a
    /// fixed input sequence the mapping is fully deterministic. A hit leaves
    /// the pool untouched.
    pub fn resolve(&mut self, p: Vector3) -> u32 {
        let key = if self.snap {
            ordered(&Vector3 {
                x: p.x.truncate_micros(),
                y: p.y.truncate_micros(),
                z: p.z.truncate_micros(),
            })
        } else {
            ordered(&p)
        };
        match self.index_of.entry(key) {
            Entry::Occupied(e) => *e.get(),
            Entry::Vacant(e) => {
                let index = self.points.len() as u32;
                e.insert(index);
                self.points.push(p);
                index
            }
        }
    }

    pub fn point(&self, index: u32) -> Vector3 {
        self.points[index as usize]
    }

    pub fn points(&self) -> &[Vector3] {
        self.points.as_slice()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Mesh form where facets reference corners through a shared [`VertexPool`].
pub struct IndexedMesh {
    /// Raw 80-byte file header, decoded lossily. Not semantically parsed.
    pub header: String,
    /// Triangle count as declared by the file.
    pub declared_count: u32,
    pub pool: VertexPool,
    pub facets: Vec<Facet>,
}

impl IndexedMesh {
    fn with_pool(header: String, count: u32, pool: VertexPool) -> Self {
        Self {
            header,
            declared_count: count,
            pool,
            facets: Vec::with_capacity(count as usize),
        }
    }

    fn push(&mut self, normal: Vector3, p0: Vector3, p1: Vector3, p2: Vector3) {
        let facet = Facet {
            normal,
            p0: self.pool.resolve(p0),
            p1: self.pool.resolve(p1),
            p2: self.pool.resolve(p2),
        };
        self.facets.push(facet);
    }
}

impl TriangleMesh for IndexedMesh {
    fn from_header(header: String, count: u32) -> Self {
        // The pool capacity hint is the declared facet count. The distinct
        // vertex count is bounded by 3x that but lands well under it for
        // closed meshes.
        Self::with_pool(header, count, VertexPool::with_capacity(count as usize))
    }

    fn push_triangle(&mut self, normal: Vector3, p0: Vector3, p1: Vector3, p2: Vector3) {
        self.push(normal, p0, p1, p2);
    }

    fn triangle_count(&self) -> usize {
        self.facets.len()
    }
}

/// [`IndexedMesh`] variant whose pool snaps coordinates to the nearest 0.001
/// before matching. See [`VertexPool::with_snap_micros`].
pub struct SnappedMesh(pub IndexedMesh);

impl TriangleMesh for SnappedMesh {
    fn from_header(header: String, count: u32) -> Self {
        Self(IndexedMesh::with_pool(
            header,
            count,
            VertexPool::with_snap_micros(count as usize),
        ))
    }

    fn push_triangle(&mut self, normal: Vector3, p0: Vector3, p1: Vector3, p2: Vector3) {
        self.0.push(normal, p0, p1, p2);
    }

    fn triangle_count(&self) -> usize {
        self.0.facets.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32, y: f32, z: f32) -> Vector3 {
        Vector3 { x, y, z }
    }

    #[test]
    fn resolve_assigns_dense_indices_in_encounter_order() {
        let mut pool = VertexPool::with_capacity(4);
        assert_eq!(0, pool.resolve(v(0.0, 0.0, 0.0)));
        assert_eq!(1, pool.resolve(v(1.0, 2.0, 3.0)));
        assert_eq!(2, pool.resolve(v(-1.0, 0.5, 0.25)));
        assert_eq!(3, pool.len());
    }

    #[test]
    fn resolve_returns_existing_index_without_growing() {
        let mut pool = VertexPool::with_capacity(4);
        let first = pool.resolve(v(1.0, 2.0, 3.0));
        pool.resolve(v(4.0, 5.0, 6.0));
        assert_eq!(first, pool.resolve(v(1.0, 2.0, 3.0)));
        assert_eq!(2, pool.len());
    }

    #[test]
    fn resolved_index_dereferences_to_the_inserted_point() {
        let mut pool = VertexPool::with_capacity(4);
        let p = v(0.1, -0.2, 12345.678);
        let index = pool.resolve(p);
        assert_eq!(p, pool.point(index));
    }

    #[test]
    fn exact_matching_keeps_near_duplicates_distinct() {
        let mut pool = VertexPool::with_capacity(4);
        let a = pool.resolve(v(1.0, 2.0, 3.0));
        let b = pool.resolve(v(1.0, 2.0, 3.0001));
        assert_ne!(a, b);
        assert_eq!(2, pool.len());
    }

    #[test]
    fn snap_micros_merges_near_duplicates() {
        let mut pool = VertexPool::with_snap_micros(4);
        let a = pool.resolve(v(1.0, 2.0, 3.0));
        let b = pool.resolve(v(1.0, 2.0, 3.0004));
        assert_eq!(a, b);
        assert_eq!(1, pool.len());
        // The first-encountered coordinates are the ones kept.
        assert_eq!(v(1.0, 2.0, 3.0), pool.point(a));
    }
}
