//! Core BRArchive codec module.
//!
//! # Module Organization
//!
//! - [`types`]: error taxonomy and the `Archive`/`Entry` data model
//! - [`format`]: on-disk layout constants plus header and descriptor codecs
//! - [`decoder`]: parses a byte buffer into an [`Archive`](types::models::Archive)
//! - [`encoder`]: serializes entries back into a BRArchive container
//! - [`classify`]: the JSON/text/binary content heuristic
//! - [`package`]: zip re-export of selected entries

pub mod classify;
pub mod decoder;
pub mod encoder;
pub mod format;
pub mod package;
pub mod types;

pub use types::error::{BrArchiveError, Result};
pub use types::models::{Archive, ContentKind, Entry, FormatVersion, SizeMismatch};
