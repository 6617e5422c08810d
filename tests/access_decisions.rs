//! Ownership-aware access tests
//!
//! View and edit diverge for Internal: it may read anything but only edit
//! what it owns. These tests pin the full matrix.

use roleguard::{
    access, can_delete, can_edit, can_view, ensure_can_edit, ensure_can_view, visible, Action,
    AuthenticatedPrincipal, Denial, Identity, Owned, Role, RoleguardError,
};

struct Item {
    id: u32,
    owner_id: String,
}

impl Owned for Item {
    fn owner_id(&self) -> &str {
        &self.owner_id
    }
}

fn item(id: u32, owner: &str) -> Item {
    Item { id, owner_id: owner.to_string() }
}

fn principal(id: &str, role: Role) -> AuthenticatedPrincipal {
    AuthenticatedPrincipal::new(Identity::new(id, format!("{id}@example.com"), id), role)
}

// ============================================================================
// Predicate Matrix
// ============================================================================

#[test]
fn view_matrix() {
    for role in [Role::Admin, Role::Stakeholder, Role::Internal] {
        assert!(can_view(role, "A", "B"), "{role} should view others' data");
        assert!(can_view(role, "A", "A"));
    }
    assert!(can_view(Role::Normal, "A", "A"));
    assert!(!can_view(Role::Normal, "A", "B"));
}

#[test]
fn edit_matrix() {
    for role in [Role::Admin, Role::Stakeholder] {
        assert!(can_edit(role, "X", "Y"), "{role} should edit others' data");
    }
    for role in [Role::Internal, Role::Normal] {
        assert!(can_edit(role, "A", "A"));
        assert!(!can_edit(role, "A", "B"), "{role} must not edit others' data");
    }
}

/// The one asymmetry in the model
#[test]
fn internal_views_all_but_edits_own() {
    assert!(can_view(Role::Internal, "A", "B"));
    assert!(!can_edit(Role::Internal, "A", "B"));
}

#[test]
fn delete_follows_edit() {
    for role in Role::ALL {
        for (owner, caller) in [("A", "A"), ("A", "B")] {
            assert_eq!(can_delete(role, owner, caller), can_edit(role, owner, caller));
        }
    }
}

/// Ownership is exact string equality
#[test]
fn ownership_is_exact() {
    assert!(!can_view(Role::Normal, "alice", "Alice"));
    assert!(!can_view(Role::Normal, "alice", "alice "));
    assert!(can_view(Role::Normal, "", ""));
}

// ============================================================================
// Principal Helpers
// ============================================================================

#[test]
fn ensure_helpers_report_denial() {
    let bob = principal("bob", Role::Internal);
    let doc = item(1, "alice");

    assert!(ensure_can_view(&bob, &doc).is_ok());
    let err = ensure_can_edit(&bob, &doc).unwrap_err();
    assert_eq!(err.status_code(), 403);
    assert_eq!(
        err,
        RoleguardError::Forbidden(Denial::Ownership {
            action: Action::Edit,
            owner: "alice".into(),
            caller: "bob".into(),
            role: Role::Internal,
        })
    );

    let carol = principal("carol", Role::Normal);
    assert!(matches!(
        ensure_can_view(&carol, &doc),
        Err(RoleguardError::Forbidden(Denial::Ownership { action: Action::View, .. }))
    ));
}

#[test]
fn allowed_helpers() {
    let owner = principal("alice", Role::Normal);
    let doc = item(1, "alice");
    assert!(access::view_allowed(&owner, &doc));
    assert!(access::edit_allowed(&owner, &doc));
}

// ============================================================================
// Filtering
// ============================================================================

#[test]
fn normal_sees_only_own_records() {
    let items = vec![item(1, "alice"), item(2, "bob"), item(3, "alice")];
    let alice = principal("alice", Role::Normal);
    let ids: Vec<u32> = visible(&alice, &items).iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn privileged_roles_see_everything() {
    let items = vec![item(1, "alice"), item(2, "bob")];
    for role in [Role::Admin, Role::Stakeholder, Role::Internal] {
        let p = principal("zed", role);
        assert_eq!(visible(&p, &items).len(), 2);
    }
}

#[test]
fn visible_on_empty_input() {
    let items: Vec<Item> = Vec::new();
    assert!(visible(&principal("a", Role::Normal), &items).is_empty());
}
