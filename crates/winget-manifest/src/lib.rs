//! Winget manifest records
//!
//! A [`ManifestRecord`] is built once per invocation from caller inputs,
//! is immutable afterwards, and encodes to a canonical block-style YAML
//! form whose bytes are the basis for change detection.
//!
//! Sequences are not indented under their key. A manifest produced by a
//! tool that indents them is rewritten once on its first sync, see
//! [`encode`].
//!
//! # Example
//!
//! ```
//! use winget_manifest::{InstallerInputs, ManifestInputs, ManifestRecord, encode};
//!
//! let inputs = ManifestInputs {
//!     package_id: "Pub.App".into(),
//!     version: "1.0".into(),
//!     application_name: "App".into(),
//!     publisher: "Pub".into(),
//!     license_type: "MIT".into(),
//!     installer_type: "exe".into(),
//!     installers: vec![InstallerInputs {
//!         architecture: "x64".into(),
//!         download_url: "https://x/a.exe".into(),
//!         sha256: Some("abc".into()),
//!         ..Default::default()
//!     }],
//!     ..Default::default()
//! };
//!
//! let record = ManifestRecord::from_inputs(&inputs).unwrap();
//! let yaml = String::from_utf8(encode(&record).unwrap()).unwrap();
//! assert!(yaml.starts_with("Id: Pub.App\n"));
//! ```

pub mod encode;
pub mod error;
pub mod inputs;
pub mod record;
pub mod types;

pub use encode::{encode, encode_value, to_json_dump};
pub use error::{Error, Result};
pub use inputs::{InstallerInputs, ManifestInputs};
pub use record::{InstallerEntry, InstallerSwitches, ManifestRecord};
pub use types::{Architecture, InstallerType, Scope};
