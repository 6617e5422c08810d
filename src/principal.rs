//! Resolved callers

use serde::{Deserialize, Serialize};

use crate::permission::{Permission, PermissionSet};
use crate::role::Role;

/// What the authentication collaborator knows about a caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub identity: String,
    pub email: String,
    #[serde(default = "verified_by_default")]
    pub email_verified: bool,
    #[serde(default)]
    pub display_name: String,
}

fn verified_by_default() -> bool {
    true
}

impl Identity {
    pub fn new(
        identity: impl Into<String>,
        email: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Identity {
            identity: identity.into(),
            email: email.into(),
            email_verified: true,
            display_name: display_name.into(),
        }
    }
}

/// The caller for one operation.
///
/// The permission set is computed from the role when the principal is built
/// and there is no way to change one without the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticatedPrincipal {
    #[serde(rename = "uid")]
    identity: String,
    email: String,
    email_verified: bool,
    display_name: String,
    role: Role,
    permissions: PermissionSet,
}

impl AuthenticatedPrincipal {
    pub fn new(identity: Identity, role: Role) -> Self {
        AuthenticatedPrincipal {
            identity: identity.identity,
            email: identity.email,
            email_verified: identity.email_verified,
            display_name: identity.display_name,
            role,
            permissions: role.permissions(),
        }
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn email_verified(&self) -> bool {
        self.email_verified
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn permissions(&self) -> PermissionSet {
        self.permissions
    }

    pub fn has_permission(&self, p: Permission) -> bool {
        self.permissions.contains(p)
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.role == role
    }
}
