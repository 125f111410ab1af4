//! Team access grants

use serde::{Deserialize, Serialize};

use super::{Creatable, RepositoryPermission, Validate};
use crate::validation::ValidationErrors;

/// Access granted to a team on a repository
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TeamAccess {
    /// Team name (slug)
    pub name: String,

    /// Defaults to [`RepositoryPermission::PULL`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permission: Option<RepositoryPermission>,
}

impl Creatable for TeamAccess {
    fn apply_defaults(&mut self) {
        self.permission.get_or_insert(RepositoryPermission::PULL);
    }
}

impl Validate for TeamAccess {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errs = ValidationErrors::new();
        errs.require(!self.name.trim().is_empty(), "name");
        if let Some(permission) = &self.permission {
            errs.append(permission.validate(), permission, "permission");
        }
        errs.into_result()
    }
}
