//! Permission enumeration and the bitmask `PermissionSet`
//!
//! Each permission owns one bit of a `u16`, so set operations are single
//! integer ops and a set is `Copy`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{Result, RoleguardError};

/// A discrete, named capability that may be granted to a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Permission {
    ManageUsers,
    ViewAllUsers,
    EditUserRoles,
    ViewAllData,
    EditAllData,
    DeleteAllData,
    ViewAnalytics,
    ExportData,
    ViewSystemLogs,
    ManageSystemSettings,
}

/// Conceptual grouping of permissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PermissionGroup {
    UserManagement,
    Data,
    Analytics,
    System,
}

impl Permission {
    /// Every permission, in declaration order.
    pub const ALL: [Permission; 10] = [
        Permission::ManageUsers,
        Permission::ViewAllUsers,
        Permission::EditUserRoles,
        Permission::ViewAllData,
        Permission::EditAllData,
        Permission::DeleteAllData,
        Permission::ViewAnalytics,
        Permission::ExportData,
        Permission::ViewSystemLogs,
        Permission::ManageSystemSettings,
    ];

    /// The bit this permission occupies in a `PermissionSet`.
    #[inline]
    pub const fn bit(self) -> u16 {
        match self {
            Permission::ManageUsers => MANAGE_USERS,
            Permission::ViewAllUsers => VIEW_ALL_USERS,
            Permission::EditUserRoles => EDIT_USER_ROLES,
            Permission::ViewAllData => VIEW_ALL_DATA,
            Permission::EditAllData => EDIT_ALL_DATA,
            Permission::DeleteAllData => DELETE_ALL_DATA,
            Permission::ViewAnalytics => VIEW_ANALYTICS,
            Permission::ExportData => EXPORT_DATA,
            Permission::ViewSystemLogs => VIEW_SYSTEM_LOGS,
            Permission::ManageSystemSettings => MANAGE_SYSTEM_SETTINGS,
        }
    }

    /// Wire name, e.g. `"manage_users"`.
    pub fn as_str(self) -> &'static str {
        PERMISSION_NAMES[self as usize].0
    }

    pub fn group(self) -> PermissionGroup {
        match self {
            Permission::ManageUsers | Permission::ViewAllUsers | Permission::EditUserRoles => {
                PermissionGroup::UserManagement
            }
            Permission::ViewAllData | Permission::EditAllData | Permission::DeleteAllData => {
                PermissionGroup::Data
            }
            Permission::ViewAnalytics | Permission::ExportData => PermissionGroup::Analytics,
            Permission::ViewSystemLogs | Permission::ManageSystemSettings => {
                PermissionGroup::System
            }
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = RoleguardError;

    fn from_str(s: &str) -> Result<Self> {
        PERMISSION_NAMES
            .iter()
            .position(|(name, _)| *name == s)
            .map(|i| Permission::ALL[i])
            .ok_or_else(|| RoleguardError::InvalidPermission(s.to_string()))
    }
}

impl TryFrom<String> for Permission {
    type Error = RoleguardError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Permission> for &'static str {
    fn from(p: Permission) -> Self {
        p.as_str()
    }
}

/// A set of permissions stored as a bitmask.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "Vec<Permission>", from = "Vec<Permission>")]
pub struct PermissionSet(u16);

impl PermissionSet {
    #[inline]
    pub const fn empty() -> Self {
        PermissionSet(0)
    }

    #[inline]
    pub const fn all() -> Self {
        PermissionSet(ALL_BITS)
    }

    /// Build from a raw mask; undefined bits are dropped.
    #[inline]
    pub const fn from_bits(bits: u16) -> Self {
        PermissionSet(bits & ALL_BITS)
    }

    #[inline]
    pub const fn bits(self) -> u16 {
        self.0
    }

    #[inline]
    pub const fn contains(self, p: Permission) -> bool {
        self.0 & p.bit() != 0
    }

    #[inline]
    pub fn insert(&mut self, p: Permission) {
        self.0 |= p.bit();
    }

    #[inline]
    pub fn remove(&mut self, p: Permission) {
        self.0 &= !p.bit();
    }

    #[inline]
    pub const fn union(self, other: PermissionSet) -> Self {
        PermissionSet(self.0 | other.0)
    }

    #[inline]
    pub const fn is_superset(self, other: PermissionSet) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Members in `Permission::ALL` order.
    pub fn iter(self) -> impl Iterator<Item = Permission> {
        Permission::ALL.into_iter().filter(move |p| self.contains(*p))
    }

    /// Wire names of the members.
    pub fn names(self) -> Vec<&'static str> {
        self.iter().map(Permission::as_str).collect()
    }

    /// Parse wire names. Any unknown name fails the whole set.
    pub fn from_names(names: &[&str]) -> Result<Self> {
        names.iter().map(|n| n.parse::<Permission>()).collect()
    }
}

impl FromIterator<Permission> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = Permission>>(iter: I) -> Self {
        let mut set = PermissionSet::empty();
        for p in iter {
            set.insert(p);
        }
        set
    }
}

impl From<PermissionSet> for Vec<Permission> {
    fn from(set: PermissionSet) -> Self {
        set.iter().collect()
    }
}

impl From<Vec<Permission>> for PermissionSet {
    fn from(perms: Vec<Permission>) -> Self {
        perms.into_iter().collect()
    }
}

impl fmt::Debug for PermissionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for PermissionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.names().join(", "))
    }
}
