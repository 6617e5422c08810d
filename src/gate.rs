//! Authorization gate
//!
//! Resolves a caller into an `AuthenticatedPrincipal` and enforces role and
//! permission predicates before an operation runs. The `require_*`
//! functions are pure checks over a principal; the gate methods resolve and
//! check in one call.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::auth::{Authenticator, StaticAuthenticator};
use crate::config::{GateConfig, UnknownIdentityPolicy};
use crate::directory::{MemoryDirectory, RoleDirectory};
use crate::error::{Denial, Result, RoleguardError};
use crate::permission::{Permission, PermissionSet};
use crate::principal::{AuthenticatedPrincipal, Identity};
use crate::resolver::{self, Catalog};
use crate::role::{Role, ADMIN_ONLY, INTERNAL_OR_ABOVE, STAKEHOLDER_OR_ADMIN};

// ============================================================================
// Checks
// ============================================================================

/// Succeeds iff the principal holds exactly `role`.
pub fn require_role(
    principal: &AuthenticatedPrincipal,
    role: Role,
) -> Result<&AuthenticatedPrincipal> {
    require_any_role(principal, &[role])
}

/// Succeeds iff the principal's role is one of `roles`.
pub fn require_any_role<'p>(
    principal: &'p AuthenticatedPrincipal,
    roles: &[Role],
) -> Result<&'p AuthenticatedPrincipal> {
    if roles.contains(&principal.role()) {
        return Ok(principal);
    }
    deny(principal, Denial::Role { required: roles.to_vec(), actual: principal.role() })
}

/// Succeeds iff the principal's permission set contains `permission`.
pub fn require_permission(
    principal: &AuthenticatedPrincipal,
    permission: Permission,
) -> Result<&AuthenticatedPrincipal> {
    if principal.has_permission(permission) {
        return Ok(principal);
    }
    deny(principal, Denial::Permission { required: permission, actual: principal.role() })
}

pub fn require_admin(principal: &AuthenticatedPrincipal) -> Result<&AuthenticatedPrincipal> {
    require_any_role(principal, ADMIN_ONLY)
}

pub fn require_stakeholder_or_admin(
    principal: &AuthenticatedPrincipal,
) -> Result<&AuthenticatedPrincipal> {
    require_any_role(principal, STAKEHOLDER_OR_ADMIN)
}

pub fn require_internal_or_above(
    principal: &AuthenticatedPrincipal,
) -> Result<&AuthenticatedPrincipal> {
    require_any_role(principal, INTERNAL_OR_ABOVE)
}

fn deny<T>(principal: &AuthenticatedPrincipal, denial: Denial) -> Result<T> {
    log::debug!("{}: {}", principal.identity(), denial);
    Err(RoleguardError::Forbidden(denial))
}

// ============================================================================
// Admin views
// ============================================================================

/// One identity's role and what it grants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignment {
    pub identity: String,
    pub role: Role,
    pub permissions: PermissionSet,
}

impl Assignment {
    fn new(identity: String, role: Role) -> Self {
        Assignment { identity, role, permissions: role.permissions() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleStats {
    pub total: usize,
    pub by_role: BTreeMap<&'static str, usize>,
}

// ============================================================================
// Gate
// ============================================================================

pub struct AuthorizationGate<A, D> {
    authenticator: A,
    directory: D,
    policy: UnknownIdentityPolicy,
}

impl AuthorizationGate<StaticAuthenticator, MemoryDirectory> {
    /// Build a gate over a static token table and in-memory directory.
    pub fn from_config(config: &GateConfig) -> Result<Self> {
        config.validate()?;
        let mut authenticator = StaticAuthenticator::new();
        let directory = MemoryDirectory::new();
        for user in &config.users {
            authenticator.register(&user.token, user.to_identity());
            directory.set_role(&user.identity, user.role);
        }
        log::debug!("gate configured with {} users", config.users.len());
        Ok(AuthorizationGate::new(authenticator, directory)
            .with_policy(config.unknown_identity.clone()))
    }
}

impl<A: Authenticator, D: RoleDirectory> AuthorizationGate<A, D> {
    /// Gate with the fail-closed policy.
    pub fn new(authenticator: A, directory: D) -> Self {
        AuthorizationGate { authenticator, directory, policy: UnknownIdentityPolicy::Deny }
    }

    pub fn with_policy(mut self, policy: UnknownIdentityPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> &UnknownIdentityPolicy {
        &self.policy
    }

    pub fn authenticator(&self) -> &A {
        &self.authenticator
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }

    /// Resolve the caller presenting `token` into a principal snapshot.
    pub fn resolve_principal(&self, token: Option<&str>) -> Result<AuthenticatedPrincipal> {
        let identity = match self.authenticator.authenticate(token) {
            Ok(identity) => identity,
            Err(e) => match &self.policy {
                UnknownIdentityPolicy::AssignDefault { fallback: Some(f), .. } => {
                    log::warn!("{e}; acting as fallback identity {}", f.identity);
                    f.clone()
                }
                _ => {
                    log::warn!("principal resolution failed: {e}");
                    return Err(e);
                }
            },
        };
        let role = self.role_of(&identity)?;
        Ok(AuthenticatedPrincipal::new(identity, role))
    }

    fn role_of(&self, identity: &Identity) -> Result<Role> {
        if let Some(role) = self.directory.lookup_role(&identity.identity) {
            return Ok(role);
        }
        match &self.policy {
            UnknownIdentityPolicy::AssignDefault { role, .. } => {
                log::warn!("no role assigned to {}; defaulting to {}", identity.identity, role);
                Ok(*role)
            }
            UnknownIdentityPolicy::Deny => {
                log::warn!("no role assigned to {}", identity.identity);
                Err(RoleguardError::UnknownPrincipal(format!(
                    "no role assigned to '{}'",
                    identity.identity
                )))
            }
        }
    }

    pub fn authorize_role(
        &self,
        token: Option<&str>,
        role: Role,
    ) -> Result<AuthenticatedPrincipal> {
        let p = self.resolve_principal(token)?;
        require_role(&p, role)?;
        Ok(p)
    }

    pub fn authorize_any_role(
        &self,
        token: Option<&str>,
        roles: &[Role],
    ) -> Result<AuthenticatedPrincipal> {
        let p = self.resolve_principal(token)?;
        require_any_role(&p, roles)?;
        Ok(p)
    }

    pub fn authorize_permission(
        &self,
        token: Option<&str>,
        permission: Permission,
    ) -> Result<AuthenticatedPrincipal> {
        let p = self.resolve_principal(token)?;
        require_permission(&p, permission)?;
        Ok(p)
    }

    /// Change `identity`'s role. Requires `ManageUsers`.
    pub fn assign_role(
        &self,
        actor: &AuthenticatedPrincipal,
        identity: &str,
        role: Role,
    ) -> Result<Assignment> {
        require_permission(actor, Permission::ManageUsers)?;
        self.directory.set_role(identity, role);
        log::info!("{} assigned role {} to {}", actor.identity(), role, identity);
        Ok(Assignment::new(identity.to_string(), role))
    }

    /// Every assignment in the directory. Admin only.
    pub fn list_assignments(&self, actor: &AuthenticatedPrincipal) -> Result<Vec<Assignment>> {
        require_admin(actor)?;
        Ok(self
            .directory
            .list_all_assignments()
            .into_iter()
            .map(|(id, role)| Assignment::new(id, role))
            .collect())
    }

    /// Drop `identity` from the directory. Admin only.
    pub fn remove_identity(&self, actor: &AuthenticatedPrincipal, identity: &str) -> Result<Role> {
        require_admin(actor)?;
        let role = self.directory.remove(identity)?;
        log::info!("{} removed {} (was {})", actor.identity(), identity, role);
        Ok(role)
    }

    /// Identity counts per role. Admin only.
    pub fn role_stats(&self, actor: &AuthenticatedPrincipal) -> Result<RoleStats> {
        require_admin(actor)?;
        let counts = self.directory.role_counts();
        Ok(RoleStats {
            total: counts.iter().map(|(_, n)| n).sum(),
            by_role: counts.into_iter().map(|(r, n)| (r.as_str(), n)).collect(),
        })
    }

    /// All permissions and the role table. Admin only.
    pub fn catalog(&self, actor: &AuthenticatedPrincipal) -> Result<Catalog> {
        require_admin(actor)?;
        Ok(resolver::catalog())
    }
}
