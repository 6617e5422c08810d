//! Identity → role assignments
//!
//! The gate only ever reads a `Role` out of a directory. Who holds which
//! role, and how that is stored, is the directory's business.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{Result, RoleguardError};
use crate::role::Role;

/// Identity-resolution collaborator.
pub trait RoleDirectory: Send + Sync {
    /// Role assigned to `identity`, if any.
    fn lookup_role(&self, identity: &str) -> Option<Role>;

    /// Assign `role` to `identity`, replacing any previous assignment.
    fn set_role(&self, identity: &str, role: Role);

    /// Drop the assignment for `identity`, returning the role it held.
    fn remove(&self, identity: &str) -> Result<Role>;

    /// Every assignment, ordered by identity.
    fn list_all_assignments(&self) -> Vec<(String, Role)>;

    /// Number of identities holding each role, in `Role::ALL` order.
    fn role_counts(&self) -> Vec<(Role, usize)> {
        let all = self.list_all_assignments();
        Role::ALL
            .iter()
            .map(|r| (*r, all.iter().filter(|(_, held)| held == r).count()))
            .collect()
    }
}

/// In-process directory.
#[derive(Debug, Default)]
pub struct MemoryDirectory {
    roles: RwLock<BTreeMap<String, Role>>,
}

impl MemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_assignments<I, S>(assignments: I) -> Self
    where
        I: IntoIterator<Item = (S, Role)>,
        S: Into<String>,
    {
        MemoryDirectory {
            roles: RwLock::new(assignments.into_iter().map(|(id, r)| (id.into(), r)).collect()),
        }
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // A poisoned lock still holds a consistent map: every write is a single insert/remove.
    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<String, Role>> {
        self.roles.read().unwrap_or_else(|p| p.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<String, Role>> {
        self.roles.write().unwrap_or_else(|p| p.into_inner())
    }
}

impl RoleDirectory for MemoryDirectory {
    fn lookup_role(&self, identity: &str) -> Option<Role> {
        self.read().get(identity).copied()
    }

    fn set_role(&self, identity: &str, role: Role) {
        self.write().insert(identity.to_string(), role);
    }

    fn remove(&self, identity: &str) -> Result<Role> {
        self.write()
            .remove(identity)
            .ok_or_else(|| RoleguardError::UnknownIdentity(identity.to_string()))
    }

    fn list_all_assignments(&self) -> Vec<(String, Role)> {
        self.read().iter().map(|(id, r)| (id.clone(), *r)).collect()
    }
}
