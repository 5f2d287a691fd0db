//! # brarchive-codec
//!
//! A codec for the BRArchive binary container format: a single-file archive
//! bundling multiple named files behind a fixed 16-byte header and a table of
//! fixed-size entry descriptors.
//!
//! The crate exposes three operations to the presentation layer that embeds it:
//!
//! - [`decode`]: parse a byte buffer into an [`Archive`] of zero-copy entries
//! - [`classify`] / [`Entry::kind`]: assign a [`ContentKind`] (JSON, text,
//!   binary) to an entry's payload for preview and export decisions
//! - [`package`]: re-export selected entries as a standard zip file
//!
//! The inverse direction, [`encode`], produces a valid BRArchive container
//! from a set of entries and is what the test suite uses to craft fixtures.
//!
//! All operations are pure, synchronous transformations over in-memory
//! buffers; the crate performs no I/O of its own.
pub mod brarchive;

// Re-export the main types and operations for convenience
pub use brarchive::{
    classify::classify,
    decoder::decode,
    encoder::encode,
    package::package,
    types::error::{BrArchiveError, Result},
    types::models::{Archive, ContentKind, Entry, FormatVersion, SizeMismatch},
};
