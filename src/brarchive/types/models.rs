//! Core data structures for BRArchive containers.
//!
//! This module defines the fundamental types used throughout the library:
//! - The parsed [`Archive`] and its [`Entry`] views
//! - Content classification and format version enumerations

use std::sync::OnceLock;
use log::trace;

use super::super::classify;
use super::error::{BrArchiveError, Result};

/// Classification of an entry's payload, used for preview and export
/// decisions downstream.
///
/// The kind is determined by attempting a structured decode of the payload
/// (see [`classify`](crate::classify)); the filename extension is a hint,
/// not authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    /// The payload parses as a JSON document.
    Json,
    /// The payload decodes as printable text.
    Text,
    /// Anything else.
    Binary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatVersion {
    V1,
}

impl FormatVersion {
    /// The version number as stored in the container header.
    pub fn as_u32(self) -> u32 {
        match self {
            FormatVersion::V1 => 1,
        }
    }
}

impl TryFrom<u32> for FormatVersion {
    type Error = BrArchiveError;
    fn try_from(v: u32) -> Result<Self> {
        match v {
            1 => Ok(Self::V1),
            other => Err(BrArchiveError::UnsupportedVersion(other)),
        }
    }
}

/// Non-fatal disagreement between the extent the descriptors address and the
/// actual buffer length.
///
/// Real-world producers sometimes pad their output, so this is surfaced as a
/// flag on the [`Archive`] rather than failing the decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeMismatch {
    /// Byte count the header and descriptors account for.
    pub expected: u64,
    /// Actual input buffer length.
    pub actual: u64,
}

/// One logical file inside a container.
///
/// The payload is a zero-copy view into the buffer the archive was decoded
/// from, so an entry never outlives its input buffer.
#[derive(Debug, Clone)]
pub struct Entry<'a> {
    /// Entry name as stored in the descriptor. Non-empty, unique within an
    /// archive.
    pub name: String,
    /// The entry's payload bytes.
    pub data: &'a [u8],
    /// Absolute byte offset of the payload within the source buffer.
    /// `None` for entries constructed programmatically.
    pub offset: Option<u64>,
    kind: OnceLock<ContentKind>,
}

impl<'a> Entry<'a> {
    /// Creates an entry from a name and payload, e.g. to build a container
    /// with [`encode`](crate::encode).
    pub fn new(name: impl Into<String>, data: &'a [u8]) -> Self {
        Self {
            name: name.into(),
            data,
            offset: None,
            kind: OnceLock::new(),
        }
    }

    pub(crate) fn from_container(name: String, data: &'a [u8], offset: u64) -> Self {
        Self {
            name,
            data,
            offset: Some(offset),
            kind: OnceLock::new(),
        }
    }

    /// Payload length in bytes.
    pub fn len(&self) -> u64 {
        self.data.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the payload classification, computing it on first call and
    /// caching it for the rest of the entry's lifetime.
    pub fn kind(&self) -> ContentKind {
        *self.kind.get_or_init(|| {
            let kind = classify::classify(&self.name, self.data);
            trace!("Classified entry '{}' as {:?}", self.name, kind);
            kind
        })
    }
}

/// The parsed result of decoding one BRArchive buffer.
///
/// Entries keep their on-disk order, which is significant for reproducible
/// re-export. The archive is immutable after construction and borrows the
/// input buffer for the lifetime `'a`.
#[derive(Debug)]
pub struct Archive<'a> {
    pub entries: Vec<Entry<'a>>,
    pub version: FormatVersion,
    /// Length of the input buffer, for validation and diagnostics.
    pub total_size: u64,
    /// Set when the buffer length disagrees with the extent the descriptors
    /// address (e.g. producer padding). The decode itself succeeded.
    pub size_mismatch: Option<SizeMismatch>,
}

impl<'a> Archive<'a> {
    /// Number of entries in the archive.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up an entry by its exact name.
    ///
    /// Names are unique within an archive (duplicates fail the decode), so
    /// this returns at most one entry.
    pub fn entry(&self, name: &str) -> Option<&Entry<'a>> {
        self.entries.iter().find(|e| e.name == name)
    }
}
