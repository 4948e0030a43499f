use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, StlError>;

/// Errors from reading a binary STL stream.
///
/// None of these are transient; a failed read is abandoned, never retried,
/// and no partially populated mesh is surfaced.
#[derive(Debug, thiserror::Error)]
pub enum StlError {
    /// The byte source could not be opened at all.
    #[error("unable to open {path}: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The stream ended before a fixed-width field could be read in full.
    #[error("stream ended while reading {field}")]
    UnexpectedEndOfInput { field: &'static str },

    /// The declared triangle count promises more bytes than the stream holds.
    #[error("triangle count {declared} requires {required} bytes but only {available} remain")]
    MalformedCount {
        declared: u32,
        required: u64,
        available: u64,
    },

    /// Any other failure from the underlying stream.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Maps a short read to [`StlError::UnexpectedEndOfInput`] for `field`,
/// passing every other I/O failure through.
pub(crate) fn eof(e: std::io::Error, field: &'static str) -> StlError {
    if e.kind() == std::io::ErrorKind::UnexpectedEof {
        StlError::UnexpectedEndOfInput { field }
    } else {
        StlError::Io(e)
    }
}
