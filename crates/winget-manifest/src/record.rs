//! Manifest record types
//!
//! Field declaration order is the serialized key order. Optional fields
//! are `None` when absent and are skipped by the serializer, so the
//! decision to omit a field is made once, at construction.

use serde::{Deserialize, Serialize};

use crate::types::{Architecture, InstallerType, Scope};

/// A complete package manifest.
///
/// Built by [`ManifestRecord::from_inputs`]; fields are private so a
/// record cannot change after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ManifestRecord {
    pub(crate) id: String,
    pub(crate) version: String,
    pub(crate) name: String,
    pub(crate) publisher: String,
    pub(crate) license: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) license_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) app_moniker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) tags: Option<Vec<String>>,
    pub(crate) installer_type: InstallerType,
    pub(crate) installers: Vec<InstallerEntry>,
}

impl ManifestRecord {
    /// Package identifier, `<Publisher>.<App>`
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Display name of the application
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn publisher(&self) -> &str {
        &self.publisher
    }

    /// License model, e.g. `MIT` or `Copyright`
    pub fn license(&self) -> &str {
        &self.license
    }

    pub fn license_url(&self) -> Option<&str> {
        self.license_url.as_deref()
    }

    pub fn app_moniker(&self) -> Option<&str> {
        self.app_moniker.as_deref()
    }

    /// Tags, empty when the record carries none
    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }

    pub fn installer_type(&self) -> InstallerType {
        self.installer_type
    }

    pub fn installers(&self) -> &[InstallerEntry] {
        &self.installers
    }
}

/// One downloadable installer artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct InstallerEntry {
    pub(crate) arch: Architecture,
    pub(crate) url: String,
    pub(crate) sha256: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) switches: Option<InstallerSwitches>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) scope: Option<Scope>,
}

impl InstallerEntry {
    pub fn architecture(&self) -> Architecture {
        self.arch
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Hex SHA-256 of the artifact behind [`url`](Self::url)
    pub fn sha256(&self) -> &str {
        &self.sha256
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn switches(&self) -> Option<&InstallerSwitches> {
        self.switches.as_ref()
    }

    pub fn scope(&self) -> Option<Scope> {
        self.scope
    }
}

/// Command-line switches passed to an installer.
///
/// Recipes spell the keys in snake_case; manifests use PascalCase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "PascalCase", deserialize = "snake_case"))]
pub struct InstallerSwitches {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub silent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub silent_with_progress: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interactive: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub install_location: Option<String>,
}

impl InstallerSwitches {
    /// Drop blank switches; `None` when nothing is left.
    pub(crate) fn normalized(&self) -> Option<Self> {
        let clean = |v: &Option<String>| {
            v.as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        let switches = Self {
            custom: clean(&self.custom),
            silent: clean(&self.silent),
            silent_with_progress: clean(&self.silent_with_progress),
            interactive: clean(&self.interactive),
            log: clean(&self.log),
            install_location: clean(&self.install_location),
        };
        (switches != Self::default()).then_some(switches)
    }
}
