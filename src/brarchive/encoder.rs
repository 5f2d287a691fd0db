//! BRArchive container encoding, the inverse of [`decode`](super::decoder::decode).

use std::collections::HashSet;
use log::debug;

use super::format::{self, header, index};
use super::types::error::{BrArchiveError, Result};
use super::types::models::Entry;

/// Serializes `entries` into a v1 BRArchive container.
///
/// Payloads are laid out back to back in entry order, so
/// `decode(&encode(entries)?)` reproduces the same names and bytes in the
/// same order.
///
/// # Errors
/// - [`BrArchiveError::EmptyEntryName`] / [`BrArchiveError::NameTooLong`]
///   for names the descriptor cannot hold
/// - [`BrArchiveError::DuplicateName`] when two entries share a name
/// - [`BrArchiveError::ArchiveTooLarge`] when an offset, length, or the
///   entry count exceeds the layout's 32-bit fields
pub fn encode(entries: &[Entry<'_>]) -> Result<Vec<u8>> {
    let entry_count = u32::try_from(entries.len()).map_err(|_| {
        BrArchiveError::ArchiveTooLarge {
            context: "entry count",
            value: entries.len() as u64,
        }
    })?;

    let mut seen_names: HashSet<&str> = HashSet::with_capacity(entries.len());
    for entry in entries {
        if !seen_names.insert(entry.name.as_str()) {
            return Err(BrArchiveError::DuplicateName(entry.name.clone()));
        }
    }

    let content_len: u64 = entries.iter().map(Entry::len).sum();
    let capacity = format::HEADER_LEN as u64
        + entries.len() as u64 * format::DESCRIPTOR_LEN as u64
        + content_len;
    let mut out = Vec::with_capacity(capacity as usize);

    header::write(&mut out, entry_count)?;

    // Assign contiguous offsets within the content area, in entry order.
    let mut data_offset: u64 = 0;
    for (i, entry) in entries.iter().enumerate() {
        let offset = u32::try_from(data_offset).map_err(|_| {
            BrArchiveError::ArchiveTooLarge {
                context: "entry offset",
                value: data_offset,
            }
        })?;
        let len = u32::try_from(entry.data.len()).map_err(|_| {
            BrArchiveError::ArchiveTooLarge {
                context: "entry length",
                value: entry.data.len() as u64,
            }
        })?;
        index::write(&mut out, &entry.name, i, offset, len)?;
        data_offset += len as u64;
    }

    for entry in entries {
        out.extend_from_slice(entry.data);
    }

    debug!(
        "Encoded BRArchive: {} entries, {} content bytes, {} total",
        entry_count,
        content_len,
        out.len()
    );

    Ok(out)
}
