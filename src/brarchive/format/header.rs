//! BRArchive header parsing and writing.

use std::io::Write;
use byteorder::{ByteOrder, LittleEndian, WriteBytesExt};
use log::{debug, trace};

use super::{HEADER_LEN, MAGIC};
use crate::brarchive::types::error::{BrArchiveError, Result};
use crate::brarchive::types::models::FormatVersion;

/// The fixed header fields, before any descriptor has been read.
#[derive(Debug, Clone, Copy)]
pub struct RawHeader {
    pub entry_count: u32,
    pub version: FormatVersion,
}

/// Parses the fixed 16-byte header at the start of `buffer`.
///
/// # Header Structure
/// ```text
/// [8 bytes] Magic signature (little-endian u64)
/// [4 bytes] Entry count (little-endian u32)
/// [4 bytes] Format version (little-endian u32)
/// ```
///
/// # Errors
/// - [`BrArchiveError::BufferTooShort`] if the buffer cannot hold a header
/// - [`BrArchiveError::MagicMismatch`] on a wrong signature. This is a hard
///   failure: a wrong-format file must not be silently misparsed
/// - [`BrArchiveError::UnsupportedVersion`] for any version other than 1
pub fn parse(buffer: &[u8]) -> Result<RawHeader> {
    if buffer.len() < HEADER_LEN {
        return Err(BrArchiveError::BufferTooShort {
            context: "archive header",
            needed: HEADER_LEN as u64,
            available: buffer.len() as u64,
        });
    }

    let magic = LittleEndian::read_u64(&buffer[0..8]);
    if magic != MAGIC {
        return Err(BrArchiveError::MagicMismatch {
            expected: MAGIC,
            found: magic,
        });
    }

    let entry_count = LittleEndian::read_u32(&buffer[8..12]);
    let raw_version = LittleEndian::read_u32(&buffer[12..16]);
    let version = FormatVersion::try_from(raw_version)?;

    trace!("Header magic OK");
    debug!(
        "Header parsed: {} entries, version {}",
        entry_count,
        version.as_u32()
    );

    Ok(RawHeader {
        entry_count,
        version,
    })
}

/// Writes a v1 header for an archive with `entry_count` entries.
pub fn write<W: Write>(out: &mut W, entry_count: u32) -> Result<()> {
    out.write_u64::<LittleEndian>(MAGIC)?;
    out.write_u32::<LittleEndian>(entry_count)?;
    out.write_u32::<LittleEndian>(FormatVersion::V1.as_u32())?;
    Ok(())
}
