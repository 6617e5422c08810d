//! Permission resolution over the role table

use std::collections::BTreeMap;

use serde::Serialize;

use crate::permission::{Permission, PermissionSet};
use crate::role::Role;

/// Permissions granted to `role`. Same answer on every call.
#[inline]
pub fn permissions_for(role: Role) -> PermissionSet {
    role.permissions()
}

/// Whether `role` is granted `permission`.
#[inline]
pub fn has_permission(role: Role, permission: Permission) -> bool {
    permissions_for(role).contains(permission)
}

/// Every permission and what each role is granted, by wire name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    pub permissions: Vec<&'static str>,
    pub roles: BTreeMap<&'static str, Vec<&'static str>>,
}

pub fn catalog() -> Catalog {
    Catalog {
        permissions: Permission::ALL.iter().map(|p| p.as_str()).collect(),
        roles: Role::ALL
            .iter()
            .map(|r| (r.as_str(), permissions_for(*r).names()))
            .collect(),
    }
}
