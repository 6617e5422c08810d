//! Gate configuration (TOML)
//!
//! ```toml
//! [unknown_identity]
//! policy = "deny"
//!
//! [[users]]
//! token = "admin_user"
//! identity = "admin_user"
//! email = "admin@example.com"
//! display_name = "Admin User"
//! role = "admin"
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{config_err, Result, RoleguardError};
use crate::principal::Identity;
use crate::role::Role;

/// What the gate does when a caller cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum UnknownIdentityPolicy {
    /// Fail closed with `UnknownPrincipal`.
    #[default]
    Deny,
    /// Fail open. Identities without an assignment get `role`; callers whose
    /// token cannot be authenticated act as `fallback`, or are rejected when
    /// no fallback is configured.
    AssignDefault {
        role: Role,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        fallback: Option<Identity>,
    },
}

/// One development user: a token, who it authenticates as, and their role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserEntry {
    pub token: String,
    pub identity: String,
    pub email: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default = "verified_by_default")]
    pub email_verified: bool,
    pub role: Role,
}

fn verified_by_default() -> bool {
    true
}

impl UserEntry {
    pub fn to_identity(&self) -> Identity {
        Identity {
            identity: self.identity.clone(),
            email: self.email.clone(),
            email_verified: self.email_verified,
            display_name: self.display_name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GateConfig {
    #[serde(default)]
    pub unknown_identity: UnknownIdentityPolicy,
    #[serde(default)]
    pub users: Vec<UserEntry>,
}

impl GateConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let cfg: GateConfig = toml::from_str(s).map_err(config_err)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            RoleguardError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(config_err)
    }

    /// Reject empty tokens/identities and tokens or identities listed twice.
    pub fn validate(&self) -> Result<()> {
        let mut tokens = HashSet::new();
        let mut identities = HashSet::new();
        for (i, u) in self.users.iter().enumerate() {
            if u.token.trim().is_empty() {
                return Err(RoleguardError::Config(format!("users[{i}]: empty token")));
            }
            if u.identity.is_empty() {
                return Err(RoleguardError::Config(format!("users[{i}]: empty identity")));
            }
            if !tokens.insert(crate::auth::normalize_token(&u.token)) {
                return Err(RoleguardError::Config(format!("users[{i}]: duplicate token")));
            }
            // One role per identity; a second entry would silently reassign it
            if !identities.insert(u.identity.as_str()) {
                return Err(RoleguardError::Config(format!("users[{i}]: duplicate identity")));
            }
        }
        if let UnknownIdentityPolicy::AssignDefault { fallback: Some(f), .. } =
            &self.unknown_identity
        {
            if f.identity.is_empty() {
                return Err(RoleguardError::Config(
                    "unknown_identity.fallback: empty identity".into(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fail_closed() {
        let cfg = GateConfig::from_toml_str("").unwrap();
        assert_eq!(cfg.unknown_identity, UnknownIdentityPolicy::Deny);
        assert!(cfg.users.is_empty());
    }

    #[test]
    fn test_assign_default_policy() {
        let cfg = GateConfig::from_toml_str(
            r#"
            [unknown_identity]
            policy = "assign_default"
            role = "normal"

            [unknown_identity.fallback]
            identity = "guest"
            email = "guest@example.com"
            "#,
        )
        .unwrap();
        match cfg.unknown_identity {
            UnknownIdentityPolicy::AssignDefault { role, fallback: Some(f) } => {
                assert_eq!(role, Role::Normal);
                assert_eq!(f.identity, "guest");
                assert!(f.email_verified);
                assert_eq!(f.display_name, "");
            }
            other => panic!("unexpected policy: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_role_is_config_error() {
        let err = GateConfig::from_toml_str(
            r#"
            [[users]]
            token = "t"
            identity = "u"
            email = "u@example.com"
            role = "superuser"
            "#,
        )
        .unwrap_err();
        assert!(
            matches!(err, RoleguardError::Config(ref m) if m.contains("invalid role: 'superuser'")),
            "got: {err}"
        );
    }

    #[test]
    fn test_duplicate_token_rejected() {
        let err = GateConfig::from_toml_str(
            r#"
            [[users]]
            token = "Same"
            identity = "a"
            email = "a@example.com"
            role = "normal"

            [[users]]
            token = "Bearer same"
            identity = "b"
            email = "b@example.com"
            role = "admin"
            "#,
        )
        .unwrap_err();
        assert_eq!(err, RoleguardError::Config("users[1]: duplicate token".into()));
    }

    #[test]
    fn test_toml_roundtrip() {
        let cfg = crate::bootstrap::demo_config();
        let text = cfg.to_toml_string().unwrap();
        assert_eq!(GateConfig::from_toml_str(&text).unwrap(), cfg);
    }
}
