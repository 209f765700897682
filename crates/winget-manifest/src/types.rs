//! Closed value sets used by manifest records
//!
//! Each set parses case-insensitively and rejects anything else at record
//! construction time, so the encoder only ever sees known variants.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Match `value` against the canonical names of a closed set.
fn parse_variant<T: Copy>(
    field: &str,
    value: &str,
    variants: &[T],
    name: fn(T) -> &'static str,
) -> Result<T, Error> {
    let wanted = value.trim();
    variants
        .iter()
        .copied()
        .find(|v| name(*v).eq_ignore_ascii_case(wanted))
        .ok_or_else(|| Error::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            expected: variants
                .iter()
                .map(|v| name(*v))
                .collect::<Vec<_>>()
                .join(", "),
        })
}

/// CPU architecture an installer targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Architecture {
    X86,
    X64,
    Arm,
    Arm64,
    /// Architecture-independent payload
    Neutral,
}

impl Architecture {
    pub const ALL: [Self; 5] = [Self::X86, Self::X64, Self::Arm, Self::Arm64, Self::Neutral];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::X86 => "x86",
            Self::X64 => "x64",
            Self::Arm => "arm",
            Self::Arm64 => "arm64",
            Self::Neutral => "neutral",
        }
    }
}

impl FromStr for Architecture {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("architecture", s, &Self::ALL, Self::as_str)
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Installer technology of the package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InstallerType {
    Inno,
    Wix,
    Msi,
    Nullsoft,
    Zip,
    Appx,
    Msix,
    Exe,
    Burn,
}

impl InstallerType {
    pub const ALL: [Self; 9] = [
        Self::Inno,
        Self::Wix,
        Self::Msi,
        Self::Nullsoft,
        Self::Zip,
        Self::Appx,
        Self::Msix,
        Self::Exe,
        Self::Burn,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Inno => "inno",
            Self::Wix => "wix",
            Self::Msi => "msi",
            Self::Nullsoft => "nullsoft",
            Self::Zip => "zip",
            Self::Appx => "appx",
            Self::Msix => "msix",
            Self::Exe => "exe",
            Self::Burn => "burn",
        }
    }
}

impl FromStr for InstallerType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("installer_type", s, &Self::ALL, Self::as_str)
    }
}

impl fmt::Display for InstallerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Install scope of an installer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    User,
    Machine,
}

impl Scope {
    pub const ALL: [Self; 2] = [Self::User, Self::Machine];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Machine => "machine",
        }
    }
}

impl FromStr for Scope {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("scope", s, &Self::ALL, Self::as_str)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
