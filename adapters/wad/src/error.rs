use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors raised while reading a WAD archive.
#[derive(Debug, Error)]
pub enum WadError {
    /// The archive could not be read from disk.
    #[error("failed to read {path}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The archive does not start with `IWAD` or `PWAD`.
    #[error("not a WAD archive (magic {found:?})")]
    BadMagic {
        /// Leading bytes of the file, lossily decoded.
        found: String,
    },
    /// The file is shorter than the 12-byte header.
    #[error("WAD header is truncated ({len} bytes)")]
    TruncatedHeader {
        /// Length of the file.
        len: usize,
    },
    /// The header holds a negative lump count or directory offset.
    #[error("WAD header is invalid: {field} is {value}")]
    InvalidHeader {
        /// Offending header field.
        field: &'static str,
        /// Value read from the header.
        value: i32,
    },
    /// The lump directory extends beyond the end of the file.
    #[error("WAD directory of {lumps} lumps at offset {offset} exceeds file length {len}")]
    TruncatedDirectory {
        /// Number of lumps announced by the header.
        lumps: usize,
        /// Offset of the directory.
        offset: usize,
        /// Length of the file.
        len: usize,
    },
    /// A lump points outside the file.
    #[error("lump {name} ({size} bytes at {offset}) lies outside the archive")]
    LumpOutOfBounds {
        /// Lump name.
        name: String,
        /// Offset of the lump data.
        offset: usize,
        /// Size of the lump data.
        size: usize,
    },
    /// A `THINGS` lump does not hold a whole number of records.
    #[error("THINGS lump of {map} is {size} bytes, not a multiple of {record}")]
    MalformedThings {
        /// Map the lump belongs to.
        map: String,
        /// Size of the lump.
        size: usize,
        /// Expected record size.
        record: usize,
    },
    /// A map name pattern could not be compiled.
    #[error("invalid map pattern {pattern:?}")]
    InvalidPattern {
        /// Pattern as supplied.
        pattern: String,
        /// Compilation failure.
        #[source]
        source: regex::Error,
    },
}
