//! Raw caller inputs and record construction
//!
//! Inputs use the snake_case names recipe authors write. Every value is
//! optional at this layer; [`ManifestRecord::from_inputs`] enforces which
//! are required, parses the closed sets and drops blank optionals.

use serde::Deserialize;
use std::path::PathBuf;

use crate::record::{InstallerEntry, InstallerSwitches, ManifestRecord};
use crate::types::{Architecture, InstallerType, Scope};
use crate::{Error, Result};

/// Package-level fields supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ManifestInputs {
    /// `<Publisher>.<App>` identifier
    pub package_id: String,
    pub version: String,
    pub application_name: String,
    pub publisher: String,
    /// License model, e.g. `MIT` or `Copyright`
    pub license_type: String,
    pub license_url: Option<String>,
    /// Friendly short name, e.g. `vscode`
    pub app_moniker: Option<String>,
    pub tags: Vec<String>,
    /// One of inno, wix, msi, nullsoft, zip, appx, msix, exe, burn
    pub installer_type: String,
    pub installers: Vec<InstallerInputs>,
}

/// Per-installer fields supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InstallerInputs {
    /// One of x86, x64, arm, arm64, neutral
    pub architecture: String,
    pub download_url: String,
    /// Precomputed hex SHA-256 of the artifact
    pub sha256: Option<String>,
    /// Local copy of the artifact to hash when `sha256` is not given
    pub installer_path: Option<PathBuf>,
    pub language: Option<String>,
    pub switches: Option<InstallerSwitches>,
    pub scope: Option<String>,
}

fn required(field: &str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(Error::missing(field));
    }
    Ok(value.to_string())
}

fn optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl ManifestRecord {
    /// Build a record from caller inputs.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingField`] if a required value is blank, if there are
    ///   no installers, or if an installer has no `sha256`.
    /// - [`Error::InvalidValue`] if an architecture, installer type or scope
    ///   is not in its closed set.
    pub fn from_inputs(inputs: &ManifestInputs) -> Result<Self> {
        let id = required("package_id", &inputs.package_id)?;
        let version = required("version", &inputs.version)?;
        let name = required("application_name", &inputs.application_name)?;
        let publisher = required("publisher", &inputs.publisher)?;
        let license = required("license_type", &inputs.license_type)?;
        let installer_type: InstallerType = inputs.installer_type.parse()?;

        if inputs.installers.is_empty() {
            return Err(Error::missing("installers"));
        }
        let installers = inputs
            .installers
            .iter()
            .enumerate()
            .map(|(idx, installer)| InstallerEntry::from_inputs(idx, installer))
            .collect::<Result<Vec<_>>>()?;

        let tags: Vec<String> = inputs
            .tags
            .iter()
            .filter_map(|t| optional(Some(t.as_str())))
            .collect();

        Ok(Self {
            id,
            version,
            name,
            publisher,
            license,
            license_url: optional(inputs.license_url.as_deref()),
            app_moniker: optional(inputs.app_moniker.as_deref()),
            tags: (!tags.is_empty()).then_some(tags),
            installer_type,
            installers,
        })
    }
}

impl InstallerEntry {
    fn from_inputs(idx: usize, inputs: &InstallerInputs) -> Result<Self> {
        let field = |name: &str| format!("installers[{idx}].{name}");

        // Name the installer in value errors
        let located = |name: &str| {
            let field = field(name);
            move |e: Error| match e {
                Error::InvalidValue {
                    value, expected, ..
                } => Error::InvalidValue {
                    field,
                    value,
                    expected,
                },
                other => other,
            }
        };

        let arch: Architecture = inputs.architecture.parse().map_err(located("architecture"))?;
        let url = required(&field("download_url"), &inputs.download_url)?;
        let sha256 = optional(inputs.sha256.as_deref())
            .ok_or_else(|| Error::missing(field("sha256")))?;
        let scope = optional(inputs.scope.as_deref())
            .map(|s| s.parse::<Scope>())
            .transpose()
            .map_err(located("scope"))?;

        Ok(Self {
            arch,
            url,
            sha256,
            language: optional(inputs.language.as_deref()),
            switches: inputs
                .switches
                .as_ref()
                .and_then(InstallerSwitches::normalized),
            scope,
        })
    }
}
