use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use stlpool_mesh::TriangleMesh;

mod decode;
mod error;

pub use decode::Decoder;
pub use error::{Result, StlError};

const HEADER_SIZE: usize = 80;
const COUNT_SIZE: u64 = 4;
// 12 little-endian f32 (normal + three corners) plus the 2-byte attribute
// trailer.
const TRIANGLE_SIZE: u64 = 50;
const ATTRIBUTE_SIZE: u64 = 2;

fn read_binary<M: TriangleMesh, T: Read + Seek>(f: &mut T) -> Result<M> {
    let total = f.seek(SeekFrom::End(0))?;
    f.seek(SeekFrom::Start(0))?;

    let mut d = Decoder::new(f);

    // Binary files start with an 80 byte header. There is no defined
    // structure for this header but some implementations will stash some
    // metadata in it, so the raw bytes travel with the mesh unparsed.
    let header = d.read_fixed_string(HEADER_SIZE, "header")?;

    // Immediately following the header is an unsigned 32-bit integer that
    // indicates the number of triangles that follow.
    let count = d.read_u32("triangle count")?;

    // The count is still what drives the decode loop, but an impossible one
    // is rejected against the stream length before any triangle is read.
    let required = TRIANGLE_SIZE * u64::from(count);
    let available = total.saturating_sub(HEADER_SIZE as u64 + COUNT_SIZE);
    if required > available {
        return Err(StlError::MalformedCount {
            declared: count,
            required,
            available,
        });
    }

    let mut mesh = M::from_header(header, count);
    for _ in 0..count {
        // Each triangle is specified by a normal vector followed by the 3
        // vertices of the triangle. While the normal may be included, it is
        // generally expected that vertices be listed in counter-clockwise
        // order and so the normal may be specified as (0, 0, 0).
        let normal = d.read_vector3("normal")?;
        let p0 = d.read_vector3("vertex")?;
        let p1 = d.read_vector3("vertex")?;
        let p2 = d.read_vector3("vertex")?;
        mesh.push_triangle(normal, p0, p1, p2);
        // After the triangle geometry there is a 2-byte unsigned integer
        // called the "attribute byte count". There is no standard structure
        // of this field, but some applications use this for color data. Both
        // mesh forms discard it.
        d.skip(ATTRIBUTE_SIZE, "attribute byte count")?;
    }
    log::debug!("decoded {} of {} declared triangles", mesh.triangle_count(), count);
    Ok(mesh)
}

/// Reads a binary STL file from `p` into the mesh representation `M`.
///
/// A path that cannot be opened fails with [`StlError::SourceUnavailable`];
/// the read never starts. The file handle is scoped to this one pass and
/// closed on both success and failure.
pub fn read_stl<M: TriangleMesh, P: AsRef<Path>>(p: P) -> Result<M> {
    let path = p.as_ref();
    let mut f = std::fs::File::open(path).map_err(|source| StlError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    read_binary(&mut f)
}

/// Parses an in-memory binary STL buffer into the mesh representation `M`.
pub fn parse_stl<M: TriangleMesh>(data: &[u8]) -> Result<M> {
    let mut c = std::io::Cursor::new(data);
    read_binary(&mut c)
}

pub trait StlReader: Read {
    fn read_stl<M: TriangleMesh>(&mut self) -> Result<M>;
}

impl<T: Read + Seek> StlReader for T {
    fn read_stl<M: TriangleMesh>(&mut self) -> Result<M> {
        read_binary(self)
    }
}
