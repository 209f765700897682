//! Recipe files
//!
//! A recipe names where a manifest goes and carries the raw inputs for it.
//! It can be TOML, YAML or JSON.
//!
//! # Example TOML
//!
//! ```toml
//! manifest_output_path = "manifests/p/Pub/App"
//! manifest_output_filename = "1.0.yaml"
//! destination_path = "downloads/App-1.0.exe"
//!
//! package_id = "Pub.App"
//! version = "1.0"
//! application_name = "App"
//! publisher = "Pub"
//! license_type = "MIT"
//! installer_type = "exe"
//!
//! [[installers]]
//! architecture = "x64"
//! download_url = "https://example.com/App-1.0.exe"
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use winget_fs::{ConfigStore, digest_file};
use winget_manifest::{ManifestInputs, ManifestRecord};

use crate::Result;

/// A manifest target plus the inputs that describe it.
#[derive(Debug, Clone, Deserialize)]
pub struct Recipe {
    /// Directory the manifest is written into
    pub manifest_output_path: PathBuf,
    /// File name of the manifest inside `manifest_output_path`
    pub manifest_output_filename: String,
    /// Downloaded installer to hash for installers without their own hash
    #[serde(default)]
    pub destination_path: Option<PathBuf>,
    #[serde(flatten)]
    pub inputs: ManifestInputs,
    /// Directory relative paths resolve against
    #[serde(skip)]
    base_dir: PathBuf,
}

impl Recipe {
    /// Build a recipe in code. Relative paths resolve against the working
    /// directory.
    pub fn new(
        manifest_output_path: impl Into<PathBuf>,
        manifest_output_filename: impl Into<String>,
        inputs: ManifestInputs,
    ) -> Self {
        Self {
            manifest_output_path: manifest_output_path.into(),
            manifest_output_filename: manifest_output_filename.into(),
            destination_path: None,
            inputs,
            base_dir: PathBuf::new(),
        }
    }

    pub fn with_destination_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.destination_path = Some(path.into());
        self
    }

    /// Load a recipe file. Relative paths inside it resolve against the
    /// file's own directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut recipe: Self = ConfigStore::new().load(path)?;
        recipe.base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        debug!(recipe = %path.display(), id = %recipe.inputs.package_id, "Loaded recipe");
        Ok(recipe)
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    /// Full path of the manifest this recipe produces.
    pub fn target_path(&self) -> Result<PathBuf> {
        let filename = self.manifest_output_filename.trim();
        if filename.is_empty() {
            return Err(winget_manifest::Error::MissingField {
                field: "manifest_output_filename".into(),
            }
            .into());
        }
        Ok(self.resolve(&self.manifest_output_path).join(filename))
    }

    /// Resolve installer hashes and build the record.
    ///
    /// An installer's explicit `sha256` wins. Otherwise its
    /// `installer_path` is hashed, and failing that the recipe-wide
    /// `destination_path`. An installer with none of the three is
    /// reported as missing its `sha256`.
    pub fn build_record(&self) -> Result<ManifestRecord> {
        let mut inputs = self.inputs.clone();

        for (idx, installer) in inputs.installers.iter_mut().enumerate() {
            if installer
                .sha256
                .as_deref()
                .is_some_and(|hash| !hash.trim().is_empty())
            {
                continue;
            }
            let Some(source) = installer
                .installer_path
                .as_deref()
                .or(self.destination_path.as_deref())
            else {
                continue;
            };

            let source = self.resolve(source);
            let fingerprint = digest_file(&source)?;
            debug!(
                installer = idx,
                file = %source.display(),
                sha256 = %fingerprint.to_hex(),
                "Hashed installer"
            );
            installer.sha256 = Some(fingerprint.to_hex());
        }

        Ok(ManifestRecord::from_inputs(&inputs)?)
    }
}
