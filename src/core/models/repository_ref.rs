//! Repository references and clone URLs

use serde::{Deserialize, Serialize};

use super::{TransportType, Validate};
use crate::validation::ValidationErrors;

/// Identifies a repository on a git hosting domain
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryRef {
    /// Host, e.g. `github.com`
    pub domain: String,
    /// Top-level organization or user
    pub organization: String,
    /// Nested groups below the organization (GitLab subgroups)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_organizations: Vec<String>,
    /// Repository name without `.git`
    pub repository_name: String,
}

impl RepositoryRef {
    /// Create a reference without sub-organizations
    #[must_use]
    pub fn new(
        domain: impl Into<String>,
        organization: impl Into<String>,
        repository_name: impl Into<String>,
    ) -> Self {
        Self {
            domain: domain.into(),
            organization: organization.into(),
            sub_organizations: Vec::new(),
            repository_name: repository_name.into(),
        }
    }

    /// `<org>/[<sub-orgs...>/]<repo>`
    #[must_use]
    pub fn path(&self) -> String {
        let mut parts = Vec::with_capacity(self.sub_organizations.len() + 2);
        parts.push(self.organization.as_str());
        parts.extend(self.sub_organizations.iter().map(String::as_str));
        parts.push(self.repository_name.as_str());
        parts.join("/")
    }

    /// Clone URL for the given transport, `None` for an undeclared transport
    #[must_use]
    pub fn clone_url(&self, transport: &TransportType) -> Option<String> {
        let (domain, path) = (&self.domain, self.path());
        if *transport == TransportType::HTTPS {
            Some(format!("https://{domain}/{path}.git"))
        } else if *transport == TransportType::GIT {
            Some(format!("git@{domain}:{path}.git"))
        } else if *transport == TransportType::SSH {
            Some(format!("ssh://git@{domain}/{path}"))
        } else {
            log::debug!("no clone URL form for transport {transport:?}");
            None
        }
    }
}

impl std::fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.domain, self.path())
    }
}

impl Validate for RepositoryRef {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errs = ValidationErrors::new();
        errs.require(!self.domain.trim().is_empty(), "domain");
        errs.require(!self.organization.trim().is_empty(), "organization");
        for (i, sub) in self.sub_organizations.iter().enumerate() {
            errs.require(!sub.trim().is_empty(), format!("sub_organizations[{i}]"));
        }
        errs.require(!self.repository_name.trim().is_empty(), "repository_name");
        errs.into_result()
    }
}
