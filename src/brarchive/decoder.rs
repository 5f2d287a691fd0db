//! BRArchive container decoding.
//!
//! A decode is a single pass over an in-memory buffer: parse the header,
//! walk the descriptor table, bounds-check every payload against the content
//! area, then hand out zero-copy entry views. No state survives between
//! calls, so concurrent decodes over independent buffers need no
//! coordination.

use std::collections::HashSet;
use log::{info, warn};

use super::format::{self, header, index};
use super::types::error::{BrArchiveError, Result};
use super::types::models::{Archive, Entry, SizeMismatch};

/// Parses `buffer` as a BRArchive container.
///
/// Entries keep their on-disk order and borrow their payload bytes directly
/// from `buffer`. An archive declaring zero entries decodes to a valid empty
/// [`Archive`].
///
/// Structural corruption (wrong magic, an out-of-bounds payload, a
/// duplicate name) fails the whole decode. A buffer that is merely longer
/// or shorter than the descriptors account for is non-structural: the decode
/// proceeds and the disagreement is reported via
/// [`Archive::size_mismatch`].
///
/// # Errors
/// - [`BrArchiveError::BufferTooShort`] when the header or descriptor table
///   overruns the buffer
/// - [`BrArchiveError::MagicMismatch`] / [`BrArchiveError::UnsupportedVersion`]
///   for an unrecognized header
/// - [`BrArchiveError::TruncatedEntry`] when a payload's declared bounds
///   exceed the content area
/// - [`BrArchiveError::DuplicateName`] when two descriptors share a name
pub fn decode(buffer: &[u8]) -> Result<Archive<'_>> {
    let raw = header::parse(buffer)?;
    let entry_count = raw.entry_count as usize;

    // Validate the descriptor table extent up front, in u64 so a hostile
    // entry count cannot overflow the arithmetic.
    let table_len = raw.entry_count as u64 * format::DESCRIPTOR_LEN as u64;
    let content_start = format::HEADER_LEN as u64 + table_len;
    if content_start > buffer.len() as u64 {
        return Err(BrArchiveError::BufferTooShort {
            context: "entry descriptor table",
            needed: content_start,
            available: buffer.len() as u64,
        });
    }
    let content_start = content_start as usize;

    let mut descriptors = Vec::with_capacity(entry_count);
    for i in 0..entry_count {
        let at = format::HEADER_LEN + i * format::DESCRIPTOR_LEN;
        let descriptor = index::parse(buffer, at, i)?;
        descriptors.push(descriptor);
    }

    let mut seen_names: HashSet<&str> = HashSet::with_capacity(entry_count);
    for descriptor in &descriptors {
        if !seen_names.insert(descriptor.name.as_str()) {
            return Err(BrArchiveError::DuplicateName(descriptor.name.clone()));
        }
    }

    let content = &buffer[content_start..];
    let available = content.len() as u64;

    let mut entries = Vec::with_capacity(entry_count);
    let mut furthest_end: u64 = 0;
    for descriptor in descriptors {
        let start = descriptor.data_offset as u64;
        let end = start + descriptor.data_len as u64;
        if end > available {
            return Err(BrArchiveError::TruncatedEntry {
                name: descriptor.name,
                offset: start,
                end,
                available,
            });
        }
        furthest_end = furthest_end.max(end);

        let data = &content[start as usize..end as usize];
        entries.push(Entry::from_container(
            descriptor.name,
            data,
            content_start as u64 + start,
        ));
    }

    let expected = content_start as u64 + furthest_end;
    let actual = buffer.len() as u64;
    let size_mismatch = if expected != actual {
        warn!(
            "Archive size mismatch: descriptors account for {} bytes, buffer holds {}",
            expected, actual
        );
        Some(SizeMismatch { expected, actual })
    } else {
        None
    };

    info!(
        "Decoded BRArchive: {} entries, version {}, {} bytes",
        entries.len(),
        raw.version.as_u32(),
        actual
    );

    Ok(Archive {
        entries,
        version: raw.version,
        total_size: actual,
        size_mismatch,
    })
}
