//! Domain models for git hosting resources
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`RepositoryInfo`], [`DeployKey`], [`TeamAccess`] - objects that take
//!   part in defaulting via [`Creatable`]
//! - [`RepoVisibility`], [`RepositoryPermission`], [`LicenseTemplate`],
//!   [`RepositoryCredentialType`] - validated string enums
//! - [`TransportType`] - clone URL forms for a [`RepositoryRef`]

mod creatable;
mod deploy_key;
mod enums;
mod permission;
mod repository;
mod repository_ref;
mod team_access;

pub use creatable::{Creatable, Validate};
pub use deploy_key::DeployKey;
pub use enums::{
    ENUM_KINDS, LicenseTemplate, RepoVisibility, RepositoryCredentialType, RepositoryPermission,
    TransportType, values_of,
};
pub use repository::{DEFAULT_BRANCH, RepositoryCreateOptions, RepositoryInfo};
pub use repository_ref::RepositoryRef;
pub use team_access::TeamAccess;
