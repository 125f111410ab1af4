//! Resource manifests
//!
//! A manifest is a TOML file declaring the resources a caller intends to
//! create. Every optional field may be omitted and is filled by
//! [`Manifest::apply_defaults`].
//!
//! ```toml
//! [[repositories]]
//! name = "website"
//! visibility = "public"
//!
//! [repositories.create]
//! auto_init = true
//! license_template = "mit"
//!
//! [[deploy_keys]]
//! name = "ci"
//! key = "ssh-ed25519 AAAA..."
//!
//! [[team_access]]
//! name = "maintainers"
//! permission = "maintain"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::models::{
    Creatable, DeployKey, RepositoryCreateOptions, RepositoryInfo, TeamAccess, Validate,
};
use crate::core::services::validate_all;
use crate::validation::{FieldError, ValidationErrors};

/// Errors raised while loading a manifest
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that was read
        path: String,
        /// Underlying error
        source: std::io::Error,
    },

    /// The content is not a valid manifest
    #[error("failed to parse manifest: {0}")]
    Parse(#[from] toml::de::Error),

    /// The manifest could not be rendered back to TOML
    #[error("failed to serialize manifest: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// A repository entry of a manifest
///
/// `info` is flattened, which rules out `deny_unknown_fields`; keys that
/// belong to neither the entry nor `info` land in `unknown` and are reported
/// by [`Validate::validate`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepositoryEntry {
    /// Repository name
    pub name: String,

    /// Settings applied to the repository
    #[serde(flatten)]
    pub info: RepositoryInfo,

    /// Options only used on creation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create: Option<RepositoryCreateOptions>,

    /// Keys not recognised by the entry or its settings
    #[serde(flatten, skip_serializing)]
    pub unknown: BTreeMap<String, toml::Value>,
}

impl Creatable for RepositoryEntry {
    fn apply_defaults(&mut self) {
        self.info.apply_defaults();
    }
}

impl Validate for RepositoryEntry {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errs = ValidationErrors::new();
        errs.require(!self.name.trim().is_empty(), "name");
        for key in self.unknown.keys() {
            errs.append(Err(FieldError::Invalid), key, key.as_str());
        }
        if let Err(inner) = self.info.validate() {
            errs.extend(inner);
        }
        if let Some(Err(inner)) = self.create.as_ref().map(Validate::validate) {
            errs.extend_prefixed("create", inner);
        }
        errs.into_result()
    }
}

/// Every resource declared in one manifest file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Repositories to create
    #[serde(default)]
    pub repositories: Vec<RepositoryEntry>,

    /// Deploy keys to add
    #[serde(default)]
    pub deploy_keys: Vec<DeployKey>,

    /// Team access grants
    #[serde(default)]
    pub team_access: Vec<TeamAccess>,
}

impl Manifest {
    /// Load a manifest from disk
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        log::debug!("loading manifest from {}", path.display());
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        content.parse()
    }

    /// Render as TOML
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Total number of declared resources
    #[must_use]
    pub fn len(&self) -> usize {
        self.repositories.len() + self.deploy_keys.len() + self.team_access.len()
    }

    /// Whether the manifest declares nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Apply defaults to every resource
    pub fn apply_defaults(&mut self) {
        self.repositories.iter_mut().for_each(Creatable::apply_defaults);
        self.deploy_keys.iter_mut().for_each(Creatable::apply_defaults);
        self.team_access.iter_mut().for_each(Creatable::apply_defaults);
    }
}

impl Validate for Manifest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errs = validate_all("repositories", &self.repositories);
        errs.extend(validate_all("deploy_keys", &self.deploy_keys));
        errs.extend(validate_all("team_access", &self.team_access));
        errs.into_result()
    }
}

impl FromStr for Manifest {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}
