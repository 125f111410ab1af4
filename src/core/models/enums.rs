//! String-backed enumerations
//!
//! Each type wraps an arbitrary string so untrusted input (TOML, JSON, CLI
//! arguments) can always be represented. The declared literals are exposed as
//! associated constants, and the validated types check membership against a
//! process-wide registry built once on first use.
//!
//! ```
//! use gitprovider::core::models::RepoVisibility;
//!
//! assert!(RepoVisibility::PRIVATE.validate().is_ok());
//! assert!(RepoVisibility::from("secret").validate().is_err());
//! ```

use std::borrow::Cow;
use std::collections::HashSet;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::validation::FieldError;

/// Declares a string-backed enum type with its legal literals.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $konst:ident = $lit:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Cow<'static, str>);

        impl $name {
            $(
                $(#[$vmeta])*
                pub const $konst: Self = Self(Cow::Borrowed($lit));
            )+

            /// Every declared value, in declaration order
            pub const ALL: &'static [Self] = &[$(Self::$konst),+];

            /// The underlying string
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(Cow::Owned(s.to_string()))
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(Cow::Owned(s))
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

/// Adds registry-backed membership validation to a [`string_enum!`] type.
macro_rules! enum_registry {
    ($name:ident) => {
        impl $name {
            fn registry() -> &'static HashSet<&'static str> {
                static KNOWN: LazyLock<HashSet<&'static str>> =
                    LazyLock::new(|| $name::ALL.iter().map($name::as_str).collect());
                &KNOWN
            }

            /// Whether this value is one of the declared literals
            #[must_use]
            pub fn is_known(&self) -> bool {
                Self::registry().contains(self.as_str())
            }

            /// Check membership in the declared set.
            ///
            /// Returns a bare [`FieldError::EnumInvalid`]; attach the field
            /// path with [`crate::validation::ValidationErrors::append`].
            pub fn validate(&self) -> Result<(), FieldError> {
                if self.is_known() {
                    Ok(())
                } else {
                    Err(FieldError::EnumInvalid)
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = FieldError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value = Self::from(s);
                value.validate()?;
                Ok(value)
            }
        }
    };
}

string_enum! {
    /// Transport used when cloning a repository
    ///
    /// Not user-supplied, so it carries no registry; see
    /// [`super::RepositoryRef::clone_url`].
    TransportType {
        /// `https://<domain>/<org>/[<sub-orgs...>/]<repo>.git`
        HTTPS = "https",
        /// `git@<domain>:<org>/[<sub-orgs...>/]<repo>.git`
        GIT = "git",
        /// `ssh://git@<domain>/<org>/[<sub-orgs...>/]<repo>`
        SSH = "ssh",
    }
}

string_enum! {
    /// Kind of credential attached to a repository
    RepositoryCredentialType {
        /// A [`super::DeployKey`]
        DEPLOY_KEY = "deploykey",
    }
}
enum_registry!(RepositoryCredentialType);

string_enum! {
    /// Who can see a repository
    RepoVisibility {
        /// Anyone
        PUBLIC = "public",
        /// Members of the owning organization
        INTERNAL = "internal",
        /// Only explicitly added members
        PRIVATE = "private",
    }
}
enum_registry!(RepoVisibility);

string_enum! {
    /// Access level granted to a team or person on a repository
    ///
    /// Declared from least to most privileged.
    RepositoryPermission {
        /// Pull only. GitLab: `guest`
        PULL = "pull",
        /// Manage issues and pull requests without write access. GitLab: `reporter`
        TRIAGE = "triage",
        /// Pull and push. GitLab: `developer`
        PUSH = "push",
        /// Manage the repository short of destructive actions. GitLab: `maintainer`
        MAINTAIN = "maintain",
        /// Full control. GitLab: `owner`
        ADMIN = "admin",
    }
}
enum_registry!(RepositoryPermission);

string_enum! {
    /// License template applied when a repository is created
    LicenseTemplate {
        /// Apache License 2.0
        APACHE2 = "apache-2.0",
        /// MIT License
        MIT = "mit",
        /// GNU General Public License v3.0
        GPL3 = "gpl-3.0",
    }
}
enum_registry!(LicenseTemplate);

/// Names of every enum kind, for listing legal values
pub const ENUM_KINDS: &[&str] = &[
    "transport",
    "credential",
    "visibility",
    "permission",
    "license",
];

/// Legal values for an enum kind named in [`ENUM_KINDS`]
#[must_use]
pub fn values_of(kind: &str) -> Option<Vec<&'static str>> {
    fn strs<T: AsRef<str>>(all: &'static [T]) -> Vec<&'static str> {
        all.iter().map(AsRef::<str>::as_ref).collect()
    }

    match kind {
        "transport" => Some(strs(TransportType::ALL)),
        "credential" => Some(strs(RepositoryCredentialType::ALL)),
        "visibility" => Some(strs(RepoVisibility::ALL)),
        "permission" => Some(strs(RepositoryPermission::ALL)),
        "license" => Some(strs(LicenseTemplate::ALL)),
        _ => None,
    }
}
