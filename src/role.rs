//! Roles and the fixed role → permission table

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{ADMIN_MASK, INTERNAL_MASK, NORMAL_MASK, ROLE_NAMES, STAKEHOLDER_MASK};
use crate::error::{Result, RoleguardError};
use crate::permission::{Permission, PermissionSet};

/// Coarse-grained classification of a principal.
///
/// Decoding is strict: an unrecognized string is `InvalidRole`, never a
/// silent downgrade to `Normal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Role {
    Admin,
    Stakeholder,
    Internal,
    Normal,
}

/// Accepted by `require_admin`.
pub const ADMIN_ONLY: &[Role] = &[Role::Admin];
/// Accepted by `require_stakeholder_or_admin`.
pub const STAKEHOLDER_OR_ADMIN: &[Role] = &[Role::Stakeholder, Role::Admin];
/// Accepted by `require_internal_or_above`.
pub const INTERNAL_OR_ABOVE: &[Role] = &[Role::Internal, Role::Stakeholder, Role::Admin];

impl Role {
    pub const ALL: [Role; 4] = [Role::Admin, Role::Stakeholder, Role::Internal, Role::Normal];

    pub fn as_str(self) -> &'static str {
        ROLE_NAMES[self as usize]
    }

    /// Permissions granted to this role. Total over the enumeration.
    #[inline]
    pub const fn permissions(self) -> PermissionSet {
        PermissionSet::from_bits(match self {
            Role::Admin => ADMIN_MASK,
            Role::Stakeholder => STAKEHOLDER_MASK,
            Role::Internal => INTERNAL_MASK,
            Role::Normal => NORMAL_MASK,
        })
    }

    #[inline]
    pub const fn has_permission(self, p: Permission) -> bool {
        self.permissions().contains(p)
    }

    /// Position in the reference hierarchy, `Normal` lowest.
    pub const fn rank(self) -> u8 {
        match self {
            Role::Normal => 0,
            Role::Internal => 1,
            Role::Stakeholder => 2,
            Role::Admin => 3,
        }
    }

    pub const fn at_least(self, min: Role) -> bool {
        self.rank() >= min.rank()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = RoleguardError;

    fn from_str(s: &str) -> Result<Self> {
        ROLE_NAMES
            .iter()
            .position(|name| *name == s)
            .map(|i| Role::ALL[i])
            .ok_or_else(|| RoleguardError::InvalidRole(s.to_string()))
    }
}

impl TryFrom<String> for Role {
    type Error = RoleguardError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Role> for &'static str {
    fn from(r: Role) -> Self {
        r.as_str()
    }
}
