//! Entry descriptor parsing and writing.
//!
//! Every descriptor occupies a fixed [`DESCRIPTOR_LEN`] bytes: a one-byte
//! name length, the name itself zero-padded to [`NAME_LEN_MAX`] bytes, then
//! the payload's offset and length within the content area.

use std::io::Write;
use byteorder::{ByteOrder, LittleEndian, WriteBytesExt};
use log::trace;

use super::{DESCRIPTOR_LEN, NAME_LEN_MAX};
use crate::brarchive::types::error::{BrArchiveError, Result};

/// One parsed entry descriptor. Offsets are relative to the content area.
#[derive(Debug, Clone)]
pub struct EntryDescriptor {
    pub name: String,
    pub data_offset: u32,
    pub data_len: u32,
}

/// Parses the descriptor at absolute position `at` within `buffer`.
///
/// `index` is the descriptor's ordinal, used for diagnostics only.
pub fn parse(buffer: &[u8], at: usize, index: usize) -> Result<EntryDescriptor> {
    let needed = at as u64 + DESCRIPTOR_LEN as u64;
    if (buffer.len() as u64) < needed {
        return Err(BrArchiveError::BufferTooShort {
            context: "entry descriptor",
            needed,
            available: buffer.len() as u64,
        });
    }

    let name_len = buffer[at] as usize;
    if name_len == 0 {
        return Err(BrArchiveError::EmptyEntryName { index });
    }
    if name_len > NAME_LEN_MAX {
        return Err(BrArchiveError::NameTooLong {
            found: name_len,
            limit: NAME_LEN_MAX,
        });
    }

    let name_bytes = &buffer[at + 1..at + 1 + name_len];
    let name = std::str::from_utf8(name_bytes)
        .map_err(|e| {
            BrArchiveError::InvalidFormat(format!(
                "entry name at descriptor {} is not valid UTF-8: {}",
                index, e
            ))
        })?
        .to_string();

    // Offset and length sit after the full 247-byte name field, not after
    // the name itself.
    let fields_at = at + 1 + NAME_LEN_MAX;
    let data_offset = LittleEndian::read_u32(&buffer[fields_at..fields_at + 4]);
    let data_len = LittleEndian::read_u32(&buffer[fields_at + 4..fields_at + 8]);

    trace!(
        "Descriptor {}: name='{}', offset={}, len={}",
        index, name, data_offset, data_len
    );

    Ok(EntryDescriptor {
        name,
        data_offset,
        data_len,
    })
}

/// Writes one descriptor for `name`, addressing `data_len` payload bytes at
/// `data_offset` within the content area.
///
/// # Errors
/// - [`BrArchiveError::EmptyEntryName`] for a zero-length name
/// - [`BrArchiveError::NameTooLong`] for names over [`NAME_LEN_MAX`] bytes
pub fn write<W: Write>(
    out: &mut W,
    name: &str,
    index: usize,
    data_offset: u32,
    data_len: u32,
) -> Result<()> {
    let name_bytes = name.as_bytes();
    if name_bytes.is_empty() {
        return Err(BrArchiveError::EmptyEntryName { index });
    }
    if name_bytes.len() > NAME_LEN_MAX {
        return Err(BrArchiveError::NameTooLong {
            found: name_bytes.len(),
            limit: NAME_LEN_MAX,
        });
    }

    out.write_u8(name_bytes.len() as u8)?;
    out.write_all(name_bytes)?;
    // Zero-pad the name field up to its fixed width
    let padding = [0u8; NAME_LEN_MAX];
    out.write_all(&padding[..NAME_LEN_MAX - name_bytes.len()])?;
    out.write_u32::<LittleEndian>(data_offset)?;
    out.write_u32::<LittleEndian>(data_len)?;
    Ok(())
}
