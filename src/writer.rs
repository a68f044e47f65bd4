//! Document serialization and output.
//!
//! Two profiles: compact (minimal separators, key order as assembled) and
//! pretty (lexicographically sorted keys, 4-space indent). All numeric
//! rounding happened upstream; nothing is re-rounded here. Files are written
//! to a temporary sibling and renamed into place, so a failed run never
//! leaves a partial document at the destination.

use crate::document::Document;
use crate::error::{ExportError, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::io::Write;
use std::path::Path;

/// Serialize the document with the profile selected by `pretty`.
pub fn to_json(document: &Document, pretty: bool) -> Result<String> {
    if pretty {
        // Round-trip through Value: serde_json's default map is ordered by
        // key, which gives the sorted-key profile.
        let value = serde_json::to_value(document)?;
        let mut buffer = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
        value.serialize(&mut serializer)?;
        String::from_utf8(buffer)
            .map_err(|e| ExportError::InvalidScene(format!("non-UTF-8 serializer output: {e}")))
    } else {
        Ok(serde_json::to_string(document)?)
    }
}

/// Write the document to `path` atomically.
///
/// The JSON is serialized in full first, written to a temporary file in the
/// destination directory, and renamed over the target only on success.
pub fn write_to_path(document: &Document, path: &Path, pretty: bool) -> Result<()> {
    let json = to_json(document, pretty)?;

    let dir = match path.parent() {
        Some(parent) if parent != Path::new("") => parent,
        _ => Path::new("."),
    };
    let mut file = tempfile::NamedTempFile::new_in(dir)?;
    file.write_all(json.as_bytes())?;
    file.persist(path).map_err(|e| ExportError::Io(e.error))?;
    Ok(())
}
