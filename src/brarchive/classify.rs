//! Content classification for decoded entries.
//!
//! One heuristic, shared by the preview layer and the zip packager, so the
//! "is this JSON or text" decision is never duplicated at the boundary:
//!
//! 1. Try a structured JSON parse of the payload.
//! 2. Try to decode the payload as text (strict UTF-8, then a BOM probe)
//!    and check it for non-printable control bytes.
//! 3. Everything else is binary.

use std::borrow::Cow;
use encoding_rs::Encoding;
use log::debug;
use serde_json::Value;

use super::types::models::ContentKind;

/// Classifies an entry's payload.
///
/// Pure and infallible: unparseable content classifies as
/// [`ContentKind::Binary`] rather than erroring, and the same input always
/// yields the same kind.
///
/// The `name` is a hint only. A bare JSON scalar (`5`, `"hi"`, `true`) is a
/// valid JSON document but indistinguishable from ordinary text in practice,
/// so scalars count as JSON only when the name carries a `.json` extension;
/// objects and arrays classify as JSON regardless of the name.
pub fn classify(name: &str, data: &[u8]) -> ContentKind {
    match serde_json::from_slice::<Value>(data) {
        Ok(Value::Object(_)) | Ok(Value::Array(_)) => return ContentKind::Json,
        Ok(_) if has_json_extension(name) => return ContentKind::Json,
        _ => {}
    }

    if let Some(text) = decode_text(data) {
        if is_printable(&text) {
            return ContentKind::Text;
        }
    }

    ContentKind::Binary
}

fn has_json_extension(name: &str) -> bool {
    name.rsplit_once('.')
        .is_some_and(|(_, ext)| ext.eq_ignore_ascii_case("json"))
}

/// Decodes `data` as text, or `None` if no recognized encoding fits.
///
/// Strict UTF-8 is the primary path. The fallback probe only trusts
/// encodings announced by a byte-order mark; guessing beyond that would
/// misclassify arbitrary binary as legacy single-byte text.
fn decode_text(data: &[u8]) -> Option<Cow<'_, str>> {
    if let Ok(text) = std::str::from_utf8(data) {
        return Some(Cow::Borrowed(text));
    }

    if let Some((encoding, _bom_len)) = Encoding::for_bom(data) {
        debug!("UTF-8 decode failed, probing {} via BOM", encoding.name());
        let (text, _, had_errors) = encoding.decode(data);
        if !had_errors {
            return Some(text);
        }
    }

    None
}

/// Whether `text` is free of control characters outside the whitelist
/// (newline, tab, carriage return).
fn is_printable(text: &str) -> bool {
    text.chars()
        .all(|c| !c.is_control() || matches!(c, '\n' | '\t' | '\r'))
}
