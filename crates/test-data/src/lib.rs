//! Binary STL fixtures, built in code so tests can also construct malformed
//! variants (truncated streams, inflated triangle counts).

/// Builds a binary STL byte buffer: an 80-byte header, a little-endian u32
/// triangle count, then one 50-byte record per triangle.
#[derive(Default)]
pub struct StlBytes {
    header: Vec<u8>,
    triangles: Vec<[[f32; 3]; 4]>,
    count_override: Option<u32>,
}

impl StlBytes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the header text. Truncated or NUL-padded to 80 bytes on build.
    pub fn header_text(mut self, text: &str) -> Self {
        self.header = text.as_bytes().to_vec();
        self
    }

    /// Appends one triangle record as normal, then the three corners.
    pub fn triangle(
        mut self,
        normal: [f32; 3],
        p0: [f32; 3],
        p1: [f32; 3],
        p2: [f32; 3],
    ) -> Self {
        self.triangles.push([normal, p0, p1, p2]);
        self
    }

    /// Overrides the count field, detaching it from the real record count.
    pub fn declared_count(mut self, count: u32) -> Self {
        self.count_override = Some(count);
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(80 + 4 + self.triangles.len() * 50);
        buf.extend_from_slice(&self.header[..self.header.len().min(80)]);
        buf.resize(80, 0u8);
        let count = self.count_override.unwrap_or(self.triangles.len() as u32);
        buf.extend_from_slice(&count.to_le_bytes());
        for triangle in &self.triangles {
            for point in triangle {
                for value in point {
                    buf.extend_from_slice(&value.to_le_bytes());
                }
            }
            buf.extend_from_slice(&0u16.to_le_bytes());
        }
        buf
    }
}

/// The corners of [`cube`] in first-encounter order.
pub fn cube_corners() -> [[f32; 3]; 8] {
    [
        [0.0, 20.0, 20.0],
        [20.0, 0.0, 20.0],
        [20.0, 20.0, 20.0],
        [0.0, 0.0, 20.0],
        [0.0, 0.0, 0.0],
        [20.0, 20.0, 0.0],
        [20.0, 0.0, 0.0],
        [0.0, 20.0, 0.0],
    ]
}

/// A 12-triangle axis-aligned cube spanning 0-20 on x, y, z: 8 distinct
/// corners, each shared by several facets. Normals are all (0, 0, 0).
pub fn cube() -> Vec<u8> {
    const FACETS: [[usize; 3]; 12] = [
        [0, 1, 2],
        [1, 0, 3],
        [4, 5, 6],
        [5, 4, 7],
        [4, 1, 3],
        [1, 4, 6],
        [1, 5, 2],
        [5, 1, 6],
        [5, 0, 2],
        [0, 5, 7],
        [4, 0, 7],
        [0, 4, 3],
    ];
    let corners = cube_corners();
    let mut bytes = StlBytes::new().header_text("test cube");
    for [i, j, k] in FACETS {
        bytes = bytes.triangle([0.0; 3], corners[i], corners[j], corners[k]);
    }
    bytes.build()
}

/// Two triangles whose only coincident corner is (1.0, 2.0, 3.0).
pub fn shared_corner_pair() -> Vec<u8> {
    StlBytes::new()
        .header_text("shared corner pair")
        .triangle([0.0; 3], [1.0, 2.0, 3.0], [4.0, 0.0, 0.0], [0.0, 5.0, 0.0])
        .triangle([0.0; 3], [1.0, 2.0, 3.0], [6.0, 0.0, 1.0], [0.0, 7.0, 1.0])
        .build()
}
