//! Authentication collaborator
//!
//! Turns a raw bearer token into an `Identity`. Role lookup happens
//! elsewhere; an authenticator never decides what a caller may do.

use std::collections::HashMap;

use sha2::{Digest, Sha256};

use crate::error::{Result, RoleguardError};
use crate::principal::Identity;

/// Resolves a raw token (if the caller sent one) to an identity.
pub trait Authenticator: Send + Sync {
    fn authenticate(&self, token: Option<&str>) -> Result<Identity>;
}

/// Strip an optional `Bearer ` scheme, trim, and lowercase.
pub fn normalize_token(raw: &str) -> String {
    let t = raw.trim();
    let t = match t.get(..7) {
        Some(scheme) if scheme.eq_ignore_ascii_case("bearer ") => &t[7..],
        _ => t,
    };
    t.trim().to_ascii_lowercase()
}

/// Hash a normalized token with SHA-256 for storage
fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}

/// Hex encode
mod hex {
    pub fn encode(data: impl AsRef<[u8]>) -> String {
        data.as_ref().iter().map(|b| format!("{:02x}", b)).collect()
    }
}

/// Fixed token table for development and tests.
///
/// Only token digests are kept.
#[derive(Debug, Default, Clone)]
pub struct StaticAuthenticator {
    tokens: HashMap<String, Identity>,
}

impl StaticAuthenticator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `token` for `identity`. Re-registering a token replaces it.
    pub fn register(&mut self, token: &str, identity: Identity) {
        self.tokens.insert(hash_token(&normalize_token(token)), identity);
    }

    pub fn with_token(mut self, token: &str, identity: Identity) -> Self {
        self.register(token, identity);
        self
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl Authenticator for StaticAuthenticator {
    fn authenticate(&self, token: Option<&str>) -> Result<Identity> {
        let token = match token.map(normalize_token) {
            Some(t) if !t.is_empty() => t,
            _ => return Err(RoleguardError::UnknownPrincipal("missing token".into())),
        };
        self.tokens
            .get(&hash_token(&token))
            .cloned()
            .ok_or_else(|| RoleguardError::UnknownPrincipal("unrecognized token".into()))
    }
}
