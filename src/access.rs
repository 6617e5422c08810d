//! Ownership-aware access decisions
//!
//! `Internal` may view everything but edit only what it owns. The two
//! predicates must stay separate.

use crate::error::{Action, Denial, Result, RoleguardError};
use crate::principal::AuthenticatedPrincipal;
use crate::role::Role;

/// A resource record that carries the identity of its owner.
pub trait Owned {
    fn owner_id(&self) -> &str;
}

/// Whether `role` acting as `caller_id` may read a resource owned by `owner_id`.
#[inline]
pub fn can_view(role: Role, owner_id: &str, caller_id: &str) -> bool {
    match role {
        Role::Admin | Role::Stakeholder | Role::Internal => true,
        Role::Normal => owner_id == caller_id,
    }
}

/// Whether `role` acting as `caller_id` may modify a resource owned by `owner_id`.
#[inline]
pub fn can_edit(role: Role, owner_id: &str, caller_id: &str) -> bool {
    match role {
        Role::Admin | Role::Stakeholder => true,
        Role::Internal | Role::Normal => owner_id == caller_id,
    }
}

/// Deletion is gated exactly like editing.
#[inline]
pub fn can_delete(role: Role, owner_id: &str, caller_id: &str) -> bool {
    can_edit(role, owner_id, caller_id)
}

pub fn view_allowed<R: Owned + ?Sized>(principal: &AuthenticatedPrincipal, resource: &R) -> bool {
    can_view(principal.role(), resource.owner_id(), principal.identity())
}

pub fn edit_allowed<R: Owned + ?Sized>(principal: &AuthenticatedPrincipal, resource: &R) -> bool {
    can_edit(principal.role(), resource.owner_id(), principal.identity())
}

pub fn ensure_can_view<R: Owned + ?Sized>(
    principal: &AuthenticatedPrincipal,
    resource: &R,
) -> Result<()> {
    if view_allowed(principal, resource) {
        return Ok(());
    }
    Err(ownership_denied(Action::View, principal, resource))
}

pub fn ensure_can_edit<R: Owned + ?Sized>(
    principal: &AuthenticatedPrincipal,
    resource: &R,
) -> Result<()> {
    if edit_allowed(principal, resource) {
        return Ok(());
    }
    Err(ownership_denied(Action::Edit, principal, resource))
}

/// Keep only the records `principal` may view, preserving order.
pub fn visible<'a, R, I>(principal: &AuthenticatedPrincipal, items: I) -> Vec<&'a R>
where
    R: Owned + 'a,
    I: IntoIterator<Item = &'a R>,
{
    items.into_iter().filter(|r| view_allowed(principal, *r)).collect()
}

fn ownership_denied<R: Owned + ?Sized>(
    action: Action,
    principal: &AuthenticatedPrincipal,
    resource: &R,
) -> RoleguardError {
    let denial = Denial::Ownership {
        action,
        owner: resource.owner_id().to_string(),
        caller: principal.identity().to_string(),
        role: principal.role(),
    };
    log::debug!("access denied: {}", denial);
    RoleguardError::Forbidden(denial)
}
