use ordered_float::OrderedFloat;

pub type Vector3 = cgmath::Vector3<f32>;

// We rely on Vector3 being repr(c).
static_assertions::assert_eq_size!(Vector3, [f32; 3]);
static_assertions::assert_eq_align!(Vector3, f32);

/// Hashable view of a point.
///
/// Floats are not hash nor eq, so we use the ordered-float crate to key
/// points in a hash map. Matching is exact value equality with no epsilon.
pub type OrderedVec3 = cgmath::Vector3<OrderedFloat<f32>>;

pub fn ordered(v: &Vector3) -> OrderedVec3 {
    OrderedVec3 {
        x: OrderedFloat(v.x),
        y: OrderedFloat(v.y),
        z: OrderedFloat(v.z),
    }
}

/// A single facet with its corner coordinates stored inline.
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Triangle {
    pub normal: Vector3,
    pub p0: Vector3,
    pub p1: Vector3,
    pub p2: Vector3,
}
