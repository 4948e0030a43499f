use std::io::Read;

use byteorder::{LittleEndian, ReadBytesExt};
use stlpool_mesh::Vector3;

use crate::error::{eof, Result};

/// Reads fixed-width little-endian fields from the current cursor position.
///
/// Byte order is explicit on every numeric field; nothing here depends on
/// host endianness or alignment. Each method consumes exactly the bytes it
/// names or fails with [`crate::StlError::UnexpectedEndOfInput`].
pub struct Decoder<R> {
    inner: R,
}

impl<R: Read> Decoder<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Consumes exactly `n` bytes and returns them as text.
    ///
    /// STL headers routinely carry embedded NUL bytes or binary garbage, so
    /// the bytes are decoded lossily and never truncated at a NUL the way a
    /// C string would be.
    pub fn read_fixed_string(&mut self, n: usize, field: &'static str) -> Result<String> {
        let mut buf = vec![0u8; n];
        self.inner.read_exact(&mut buf).map_err(|e| eof(e, field))?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    pub fn read_u32(&mut self, field: &'static str) -> Result<u32> {
        self.inner
            .read_u32::<LittleEndian>()
            .map_err(|e| eof(e, field))
    }

    pub fn read_f32(&mut self, field: &'static str) -> Result<f32> {
        self.inner
            .read_f32::<LittleEndian>()
            .map_err(|e| eof(e, field))
    }

    /// Reads three consecutive f32 values as an x, y, z point.
    pub fn read_vector3(&mut self, field: &'static str) -> Result<Vector3> {
        Ok(Vector3 {
            x: self.read_f32(field)?,
            y: self.read_f32(field)?,
            z: self.read_f32(field)?,
        })
    }

    /// Advances the cursor `n` bytes without interpreting them.
    pub fn skip(&mut self, n: u64, field: &'static str) -> Result<()> {
        let copied = std::io::copy(&mut self.inner.by_ref().take(n), &mut std::io::sink())?;
        if copied != n {
            return Err(crate::StlError::UnexpectedEndOfInput { field });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StlError;

    #[test]
    fn reads_little_endian_fields() {
        let bytes = [0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80, 0x3f];
        let mut d = Decoder::new(std::io::Cursor::new(&bytes));
        assert_eq!(2, d.read_u32("count").unwrap());
        assert_eq!(1.0, d.read_f32("value").unwrap());
    }

    #[test]
    fn fixed_string_keeps_embedded_nuls() {
        let bytes = b"abc\0def\0";
        let mut d = Decoder::new(std::io::Cursor::new(&bytes[..]));
        let s = d.read_fixed_string(8, "header").unwrap();
        assert_eq!(8, s.len());
        assert!(s.starts_with("abc\0def"));
    }

    #[test]
    fn short_read_is_unexpected_end_of_input() {
        let bytes = [0x01, 0x02];
        let mut d = Decoder::new(std::io::Cursor::new(&bytes));
        let err = d.read_u32("triangle count").unwrap_err();
        assert!(matches!(
            err,
            StlError::UnexpectedEndOfInput {
                field: "triangle count"
            }
        ));
    }

    #[test]
    fn skip_past_the_end_fails() {
        let bytes = [0u8; 1];
        let mut d = Decoder::new(std::io::Cursor::new(&bytes));
        assert!(d.skip(2, "attribute byte count").is_err());
    }
}
