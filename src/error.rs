//! Error types for Roleguard

use std::fmt;

use crate::permission::Permission;
use crate::role::Role;

/// The action an ownership check was guarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    View,
    Edit,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Action::View => "view",
            Action::Edit => "edit",
        })
    }
}

/// Why a check denied the caller. Carries required vs actual values so
/// callers can log the decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Denial {
    /// The principal's role is not one of the accepted roles.
    Role { required: Vec<Role>, actual: Role },
    /// The principal's role does not grant the permission.
    Permission { required: Permission, actual: Role },
    /// The principal may not act on a resource owned by someone else.
    Ownership {
        action: Action,
        owner: String,
        caller: String,
        role: Role,
    },
}

impl fmt::Display for Denial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Denial::Role { required, actual } => {
                let names: Vec<&str> = required.iter().map(|r| r.as_str()).collect();
                write!(
                    f,
                    "insufficient role: required one of [{}], actual {}",
                    names.join(", "),
                    actual
                )
            }
            Denial::Permission { required, actual } => {
                write!(f, "insufficient permissions: required {}, role {}", required, actual)
            }
            Denial::Ownership { action, owner, caller, role } => {
                write!(f, "{} ({}) cannot {} resource owned by {}", caller, role, action, owner)
            }
        }
    }
}

/// The main error type for Roleguard operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoleguardError {
    /// A role string outside the closed enumeration.
    #[error("invalid role: '{0}'")]
    InvalidRole(String),

    /// A permission string outside the closed enumeration.
    #[error("invalid permission: '{0}'")]
    InvalidPermission(String),

    /// A role, permission or ownership check failed.
    #[error("forbidden: {0}")]
    Forbidden(Denial),

    /// No principal could be resolved for the caller.
    #[error("unknown principal: {0}")]
    UnknownPrincipal(String),

    /// A directory operation named an identity it does not hold.
    #[error("unknown identity: '{0}'")]
    UnknownIdentity(String),

    /// Configuration could not be read or parsed.
    #[error("config error: {0}")]
    Config(String),
}

impl RoleguardError {
    /// Whether this is an access-denied outcome.
    pub fn is_forbidden(&self) -> bool {
        matches!(self, RoleguardError::Forbidden(_))
    }

    /// Whether the caller (rather than the deployment) caused the failure.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            RoleguardError::Forbidden(_)
                | RoleguardError::UnknownPrincipal(_)
                | RoleguardError::UnknownIdentity(_)
        )
    }

    /// The HTTP status a route handler would answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            RoleguardError::Forbidden(_) => 403,
            RoleguardError::UnknownPrincipal(_) => 401,
            RoleguardError::UnknownIdentity(_) => 404,
            RoleguardError::InvalidRole(_)
            | RoleguardError::InvalidPermission(_)
            | RoleguardError::Config(_) => 500,
        }
    }

    /// The structured denial, if this is `Forbidden`.
    pub fn denial(&self) -> Option<&Denial> {
        match self {
            RoleguardError::Forbidden(d) => Some(d),
            _ => None,
        }
    }
}

/// Result type alias for Roleguard operations
pub type Result<T> = std::result::Result<T, RoleguardError>;

/// Convert any error to a config error
pub(crate) fn config_err<E: std::error::Error>(e: E) -> RoleguardError {
    RoleguardError::Config(e.to_string())
}
