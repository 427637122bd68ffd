//! # Hex Chunk Formatting
//!
//! Splits a byte buffer into fixed-size rows for embedding as a C array
//! literal. Each row carries its byte offset (rendered as an 8-digit comment)
//! and the bytes as `0xHH` literals:
//!
//! ```text
//!     /* 00000010 */   0x10, 0x11, 0x12,
//! ```

use serde::Serialize;

use crate::error::ChunkError;

/// Bytes per row when a template does not ask for something else.
pub const DEFAULT_CHUNK_SIZE: usize = 16;

/// One row of a generated byte array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chunk {
    /// Offset of the first byte of this row from the start of the buffer.
    pub offset: usize,
    /// The row's bytes as zero-padded lowercase `0xHH` literals.
    pub bytes: Vec<String>,
}

/// Format a byte as a `0xHH` literal.
pub fn hex_byte(byte: u8) -> String {
    format!("0x{byte:02x}")
}

/// Format an offset as the 8-digit lowercase hex used in row comments.
pub fn hex_offset(offset: usize) -> String {
    format!("{offset:08x}")
}

/// Split `data` into rows of `size` bytes.
///
/// The iterator is lazy and borrows `data`; every row except possibly the
/// last holds exactly `size` bytes. Empty input yields no rows.
pub fn chunks(data: &[u8], size: usize) -> Result<Chunks<'_>, ChunkError> {
    if size == 0 {
        return Err(ChunkError::ZeroSize);
    }
    Ok(Chunks {
        inner: data.chunks(size),
        size,
        offset: 0,
    })
}

/// Lazy iterator returned by [`chunks`].
#[derive(Debug, Clone)]
pub struct Chunks<'a> {
    inner: std::slice::Chunks<'a, u8>,
    size: usize,
    offset: usize,
}

impl Iterator for Chunks<'_> {
    type Item = Chunk;

    fn next(&mut self) -> Option<Chunk> {
        let row = self.inner.next()?;
        let chunk = Chunk {
            offset: self.offset,
            bytes: row.iter().copied().map(hex_byte).collect(),
        };
        self.offset += self.size;
        Some(chunk)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Chunks<'_> {}
