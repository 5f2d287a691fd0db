//! Zip re-export of decoded entries.
//!
//! The inverse direction of the codec from the caller's point of view:
//! selected entries become members of a standard zip file, named by their
//! entry names after deterministic sanitization. Colliding names are
//! resolved with a numeric suffix, never silently overwritten.

use std::collections::HashSet;
use std::io::{Cursor, Write};
use log::{debug, trace};

use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::types::error::{BrArchiveError, Result};
use super::types::models::Entry;

/// Upper bound on ` (n)` suffix probing per base name. Exhausting it means
/// the caller supplied a pathological selection; that failure is the
/// preventable-by-rename error of the contract.
const MAX_RENAME_ATTEMPTS: u32 = 1000;

/// Packages `entries` into an in-memory zip file, one deflated member per
/// entry, member bytes identical to the entry payload.
///
/// Member names are the entry names after [sanitization](self#naming);
/// names that still collide afterwards get a numeric suffix before the
/// extension (`dup.txt`, `dup (2).txt`, ...), preserving selection order.
///
/// # Naming
/// Backslashes become path separators, traversal components (`.`, `..`) and
/// empty components are dropped, control characters and characters invalid
/// in common filesystems are replaced with `_`. A name with nothing left
/// after sanitization becomes `unnamed`.
///
/// # Errors
/// - [`BrArchiveError::DuplicateName`] if suffix probing is exhausted
/// - [`BrArchiveError::Zip`] / [`BrArchiveError::Io`] on writer failures
pub fn package(entries: &[Entry<'_>]) -> Result<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut used: HashSet<String> = HashSet::with_capacity(entries.len());
    for entry in entries {
        let member = unique_member_name(&entry.name, &used)?;
        if member != entry.name {
            trace!("Entry '{}' packaged as member '{}'", entry.name, member);
        }
        used.insert(member.clone());

        writer.start_file(member, options)?;
        writer.write_all(entry.data)?;
    }

    let cursor = writer.finish()?;
    let bytes = cursor.into_inner();
    debug!(
        "Packaged {} entries into a {}-byte zip",
        entries.len(),
        bytes.len()
    );
    Ok(bytes)
}

/// Sanitizes `name` and resolves collisions against `used` with a numeric
/// suffix on the final path component.
fn unique_member_name(name: &str, used: &HashSet<String>) -> Result<String> {
    let base = sanitize_member_name(name);
    if !used.contains(&base) {
        return Ok(base);
    }

    let (stem, extension) = split_extension(&base);
    for n in 2..=MAX_RENAME_ATTEMPTS {
        let candidate = match extension {
            Some(ext) => format!("{} ({}).{}", stem, n, ext),
            None => format!("{} ({})", stem, n),
        };
        if !used.contains(&candidate) {
            return Ok(candidate);
        }
    }

    Err(BrArchiveError::DuplicateName(name.to_string()))
}

/// Deterministic member-name sanitization.
///
/// Character replacement can map distinct inputs onto the same output; the
/// caller resolves those collisions through the suffix step, never by
/// overwriting.
fn sanitize_member_name(name: &str) -> String {
    let components: Vec<String> = name
        .replace('\\', "/")
        .split('/')
        .filter(|c| !c.is_empty() && *c != "." && *c != "..")
        .map(sanitize_component)
        .collect();

    let sanitized = components.join("/");
    if sanitized.is_empty() {
        "unnamed".to_string()
    } else {
        sanitized
    }
}

fn sanitize_component(component: &str) -> String {
    component
        .chars()
        .map(|c| {
            if c.is_control() || matches!(c, ':' | '*' | '?' | '"' | '<' | '>' | '|') {
                '_'
            } else {
                c
            }
        })
        .collect()
}

/// Splits the extension off the final path component. A leading dot does not
/// count as an extension separator.
fn split_extension(name: &str) -> (&str, Option<&str>) {
    let component_start = name.rfind('/').map_or(0, |i| i + 1);
    let component = &name[component_start..];
    match component.char_indices().rev().find(|&(i, c)| c == '.' && i > 0) {
        Some((i, _)) => {
            let dot = component_start + i;
            (&name[..dot], Some(&name[dot + 1..]))
        }
        None => (name, None),
    }
}
