//! Development seed: one user per role

use crate::auth::StaticAuthenticator;
use crate::config::{GateConfig, UnknownIdentityPolicy, UserEntry};
use crate::directory::MemoryDirectory;
use crate::error::Result;
use crate::gate::AuthorizationGate;
use crate::role::Role;

/// Token (and identity) of each seeded user, in `Role::ALL` order.
pub const DEMO_TOKENS: [&str; 4] =
    ["admin_user", "stakeholder_user", "internal_user", "normal_user"];

/// Token of the seeded user holding `role`.
pub fn demo_token(role: Role) -> &'static str {
    DEMO_TOKENS[role as usize]
}

/// Four users, token == identity, fail-closed on anything else.
pub fn demo_config() -> GateConfig {
    let users = Role::ALL
        .iter()
        .map(|&role| {
            let name = role.as_str();
            let mut display = name.to_string();
            display[..1].make_ascii_uppercase();
            UserEntry {
                token: demo_token(role).to_string(),
                identity: demo_token(role).to_string(),
                email: format!("{name}@example.com"),
                display_name: format!("{display} User"),
                email_verified: true,
                role,
            }
        })
        .collect();
    GateConfig { unknown_identity: UnknownIdentityPolicy::Deny, users }
}

pub fn demo_gate() -> Result<AuthorizationGate<StaticAuthenticator, MemoryDirectory>> {
    AuthorizationGate::from_config(&demo_config())
}
