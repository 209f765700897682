//! Pure create/update/unchanged decision

use serde::Serialize;
use std::fmt;
use winget_fs::Fingerprint;

/// Result tag of a sync, without the payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncStatus {
    /// No file existed at the target path
    Created,
    /// A file existed with different content
    Updated,
    /// The file already held the canonical bytes
    Unchanged,
}

impl SyncStatus {
    /// Whether this status requires a write.
    pub fn is_change(self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

impl fmt::Display for SyncStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Unchanged => "unchanged",
        })
    }
}

/// What to do with the target file, carrying the bytes to write
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    Created(Vec<u8>),
    Updated(Vec<u8>),
    Unchanged,
}

impl SyncOutcome {
    pub fn status(&self) -> SyncStatus {
        match self {
            Self::Created(_) => SyncStatus::Created,
            Self::Updated(_) => SyncStatus::Updated,
            Self::Unchanged => SyncStatus::Unchanged,
        }
    }

    /// Bytes to persist, `None` for [`SyncOutcome::Unchanged`].
    pub fn bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Created(bytes) | Self::Updated(bytes) => Some(bytes),
            Self::Unchanged => None,
        }
    }
}

/// Classify a candidate against the fingerprint of the existing file.
///
/// No I/O. `existing` is `None` when there is no file at the target.
pub fn decide(
    candidate_bytes: Vec<u8>,
    candidate: &Fingerprint,
    existing: Option<&Fingerprint>,
) -> SyncOutcome {
    match existing {
        None => SyncOutcome::Created(candidate_bytes),
        Some(existing) if existing == candidate => SyncOutcome::Unchanged,
        Some(_) => SyncOutcome::Updated(candidate_bytes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winget_fs::digest_bytes;

    #[test]
    fn absent_existing_is_created() {
        let fp = digest_bytes(b"Id: Pub.App\n");
        let outcome = decide(b"Id: Pub.App\n".to_vec(), &fp, None);

        assert_eq!(outcome, SyncOutcome::Created(b"Id: Pub.App\n".to_vec()));
        assert_eq!(outcome.status(), SyncStatus::Created);
    }

    #[test]
    fn equal_fingerprints_are_unchanged() {
        let candidate = digest_bytes(b"same");
        let existing = digest_bytes(b"same");

        let outcome = decide(b"same".to_vec(), &candidate, Some(&existing));

        assert_eq!(outcome, SyncOutcome::Unchanged);
        assert_eq!(outcome.bytes(), None);
        assert!(!outcome.status().is_change());
    }

    #[test]
    fn different_fingerprints_are_updated() {
        let candidate = digest_bytes(b"Version: '1.1'\n");
        let existing = digest_bytes(b"Version: '1.0'\n");

        let outcome = decide(b"Version: '1.1'\n".to_vec(), &candidate, Some(&existing));

        assert_eq!(outcome.status(), SyncStatus::Updated);
        assert_eq!(outcome.bytes(), Some(&b"Version: '1.1'\n"[..]));
    }

    #[test]
    fn decision_uses_fingerprints_not_bytes() {
        // Bytes are carried, not compared
        let fp = digest_bytes(b"on disk");
        let outcome = decide(b"ignored".to_vec(), &fp, Some(&fp));

        assert_eq!(outcome, SyncOutcome::Unchanged);
    }

    #[test]
    fn status_display_and_serialize_agree() {
        for status in [SyncStatus::Created, SyncStatus::Updated, SyncStatus::Unchanged] {
            assert_eq!(
                serde_json::to_string(&status).unwrap(),
                format!("\"{status}\"")
            );
        }
    }
}
