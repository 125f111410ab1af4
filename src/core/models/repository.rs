//! Repository configuration

use serde::{Deserialize, Serialize};

use super::{Creatable, LicenseTemplate, RepoVisibility, Validate};
use crate::validation::{FieldError, ValidationErrors};

/// Branch used when none is given
pub const DEFAULT_BRANCH: &str = "master";

/// Mutable settings of a repository
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryInfo {
    /// Free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Branch checked out by default. Defaults to [`DEFAULT_BRANCH`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_branch: Option<String>,

    /// Defaults to [`RepoVisibility::PRIVATE`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<RepoVisibility>,
}

impl Creatable for RepositoryInfo {
    fn apply_defaults(&mut self) {
        self.visibility.get_or_insert(RepoVisibility::PRIVATE);
        self.default_branch.get_or_insert_with(|| DEFAULT_BRANCH.to_string());
    }
}

impl Validate for RepositoryInfo {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errs = ValidationErrors::new();
        if let Some(visibility) = &self.visibility {
            errs.append(visibility.validate(), visibility, "visibility");
        }
        if let Some(branch) = &self.default_branch {
            let result = if branch.trim().is_empty() { Err(FieldError::Invalid) } else { Ok(()) };
            errs.append(result, branch, "default_branch");
        }
        errs.into_result()
    }
}

/// Options that only apply while creating a repository
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RepositoryCreateOptions {
    /// Create an initial commit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_init: Option<bool>,

    /// License committed with the initial commit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_template: Option<LicenseTemplate>,
}

impl Validate for RepositoryCreateOptions {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errs = ValidationErrors::new();
        if let Some(license) = &self.license_template {
            errs.append(license.validate(), license, "license_template");

            // a license needs an initial commit to live in
            if self.auto_init == Some(false) {
                errs.append(Err(FieldError::Invalid), false, "auto_init");
            }
        }
        errs.into_result()
    }
}
