//! Privilege ordering for [`RepositoryPermission`]
//!
//! The registry only checks membership; the declaration order of
//! [`RepositoryPermission::ALL`] is what ranks the levels.

use super::RepositoryPermission;

/// GitLab role names, indexed by [`RepositoryPermission::rank`]
const GITLAB_ROLES: [&str; 5] = ["guest", "reporter", "developer", "maintainer", "owner"];

impl RepositoryPermission {
    /// Position in the privilege order, `0` being least privileged.
    ///
    /// `None` for values outside the declared set.
    #[must_use]
    pub fn rank(&self) -> Option<usize> {
        Self::ALL.iter().position(|p| p == self)
    }

    /// The equivalent GitLab role name
    #[must_use]
    pub fn gitlab_role(&self) -> Option<&'static str> {
        self.rank().map(|r| GITLAB_ROLES[r])
    }

    /// Whether this permission grants at least what `other` grants.
    ///
    /// Unknown values grant nothing and are never satisfied.
    #[must_use]
    pub fn at_least(&self, other: &Self) -> bool {
        match (self.rank(), other.rank()) {
            (Some(a), Some(b)) => a >= b,
            _ => false,
        }
    }

    /// Look up a permission from its GitLab role name
    #[must_use]
    pub fn from_gitlab_role(role: &str) -> Option<Self> {
        GITLAB_ROLES
            .iter()
            .position(|r| *r == role)
            .map(|i| Self::ALL[i].clone())
    }
}
