//! Deploy keys

use serde::{Deserialize, Serialize};

use super::{Creatable, RepositoryCredentialType, Validate};
use crate::validation::ValidationErrors;

/// A public key granting access to a single repository
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeployKey {
    /// Title shown by the provider
    pub name: String,

    /// Public key material, e.g. `ssh-ed25519 AAAA...`
    pub key: String,

    /// Whether the key may only pull. Defaults to `true`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
}

impl DeployKey {
    /// The credential kind this object represents
    pub const CREDENTIAL_TYPE: RepositoryCredentialType = RepositoryCredentialType::DEPLOY_KEY;
}

impl Creatable for DeployKey {
    fn apply_defaults(&mut self) {
        self.read_only.get_or_insert(true);
    }
}

impl Validate for DeployKey {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errs = ValidationErrors::new();
        errs.require(!self.name.trim().is_empty(), "name");
        errs.require(!self.key.trim().is_empty(), "key");
        errs.into_result()
    }
}
