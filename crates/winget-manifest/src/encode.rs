//! Canonical encoding
//!
//! The canonical form is block-style YAML emitted by `serde_yaml`. Keys
//! appear in struct declaration order (or insertion order for ordered
//! maps), never sorted, so identifier, version and name lead the file.
//! Formatting depends only on nesting depth. Sequences nested under a key
//! are emitted at the key's own indentation (`Installers:\n- Arch: x64`).
//!
//! Manifests written by emitters that indent sequences under their key
//! (`Installers:\n  - Arch: x64`) differ byte for byte from this form. The
//! first sync over such a file reports it as updated and rewrites it in
//! the canonical style. Later syncs leave it alone.
//!
//! Two values with the same keys in a different order encode to different
//! bytes. That is expected: the order is part of the canonical form.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::record::ManifestRecord;
use crate::{Error, Result};

/// Indent used by the informational JSON dump
const JSON_INDENT: &[u8] = b"    ";

/// Encode a manifest into its canonical bytes.
///
/// Pure: equal records always produce identical bytes.
pub fn encode(record: &ManifestRecord) -> Result<Vec<u8>> {
    encode_value(record)
}

/// Encode any serializable value with the canonical rules.
///
/// # Errors
///
/// Returns [`Error::Encoding`] if the value cannot be represented.
pub fn encode_value<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    serde_yaml::to_string(value)
        .map(String::into_bytes)
        .map_err(|e| Error::Encoding {
            format: "YAML".into(),
            message: e.to_string(),
        })
}

/// Render a manifest as indented JSON for logs and downstream tools.
///
/// Informational only; never used for change detection.
pub fn to_json_dump(record: &ManifestRecord) -> Result<String> {
    let json_error = |message: String| Error::Encoding {
        format: "JSON".into(),
        message,
    };

    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(JSON_INDENT));
    record
        .serialize(&mut ser)
        .map_err(|e| json_error(e.to_string()))?;

    String::from_utf8(buf).map_err(|e| json_error(e.to_string()))
}
