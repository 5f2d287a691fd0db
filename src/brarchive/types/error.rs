//! Custom error types for the brarchive-codec crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum BrArchiveError {
    /// An error originating from I/O operations.
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// The buffer ended before a structure could be read in full.
    #[error("Buffer too short: {context} needs {needed} bytes, but only {available} are available")]
    BufferTooShort {
        context: &'static str,
        needed: u64,
        available: u64,
    },

    /// The magic signature does not match the BRArchive constant.
    ///
    /// A wrong magic means the buffer is not a BRArchive at all; no
    /// best-effort parse is attempted past this point.
    #[error("Magic mismatch: expected {expected:#018x}, got {found:#018x}")]
    MagicMismatch { expected: u64, found: u64 },

    /// The container declares a format version this crate does not handle.
    #[error("Unsupported BRArchive version: {0}. Only v1 is supported.")]
    UnsupportedVersion(u32),

    /// An embedded integrity check failed, indicating data corruption.
    ///
    /// Format v1 embeds no checksum, so this is reserved for future format
    /// revisions that do.
    #[error("Checksum mismatch: expected {expected:#010x}, got {actual:#010x}")]
    ChecksumMismatch { expected: u32, actual: u32 },

    /// An entry's declared bounds exceed the content area.
    ///
    /// Fatal for the whole decode: once one entry overruns the buffer, the
    /// remaining indices cannot be trusted either. Offsets are relative to
    /// the start of the content area.
    #[error("Entry '{name}' is truncated: bytes {offset}..{end} exceed the {available}-byte content area")]
    TruncatedEntry {
        name: String,
        offset: u64,
        end: u64,
        available: u64,
    },

    /// A descriptor declares a zero-length entry name.
    #[error("Entry name is empty at descriptor {index}")]
    EmptyEntryName { index: usize },

    /// An entry name exceeds the fixed descriptor name field.
    #[error("Entry name too long: {found} bytes (limit {limit})")]
    NameTooLong { found: usize, limit: usize },

    /// Two entries share a name.
    ///
    /// Raised by `decode` when a container carries duplicate names (a
    /// corruption condition) and by `encode`/`package` when the caller
    /// supplies colliding entries that cannot be resolved.
    #[error("Duplicate entry name: '{0}'")]
    DuplicateName(String),

    /// A value does not fit the 32-bit fields of the v1 layout.
    #[error("Archive too large: {context} of {value} does not fit in 32 bits")]
    ArchiveTooLarge { context: &'static str, value: u64 },

    /// The buffer is structurally invalid in a way not covered by a more
    /// specific variant.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// An error from the zip writer while packaging entries.
    #[error("Zip packaging failed: {0}")]
    Zip(#[from] zip::result::ZipError),
}

/// A convenience `Result` type alias using the crate's `BrArchiveError` type.
pub type Result<T> = std::result::Result<T, BrArchiveError>;
