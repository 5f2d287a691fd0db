//! On-disk layout of the BRArchive v1 container.
//!
//! # Module Organization
//!
//! - [`header`]: Parses and writes the fixed 16-byte header
//! - [`index`]: Parses and writes the fixed-size entry descriptors
//!
//! # Architecture
//!
//! ```text
//! File Structure:
//! ┌──────────────────────┐
//! │  Header (16 bytes)   │ ← header::parse()
//! │  magic / count /     │
//! │  version             │
//! ├──────────────────────┤
//! │  Entry descriptors   │ ← index::parse()
//! │  (count × 256 bytes) │
//! ├──────────────────────┤
//! │  Content area        │ ← addressed by descriptor
//! │  (entry payloads)    │   offset/len pairs
//! └──────────────────────┘
//! ```
//!
//! All integer fields are little-endian. Descriptor offsets are relative to
//! the start of the content area, which begins immediately after the last
//! descriptor.

pub mod header;
pub mod index;

/// Magic signature at the start of every BRArchive file.
pub const MAGIC: u64 = 0x267052A0B125277D;

/// Size of the fixed header: magic (8) + entry count (4) + version (4).
pub const HEADER_LEN: usize = 16;

/// Maximum entry name length in bytes. The descriptor reserves a fixed
/// 247-byte field for the name regardless of its actual length.
pub const NAME_LEN_MAX: usize = 247;

/// Size of one entry descriptor: name length (1) + name field (247) +
/// data offset (4) + data length (4).
pub const DESCRIPTOR_LEN: usize = 256;
