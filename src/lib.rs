//! Roleguard - Role-based access control with ownership-aware checks
//!
//! Four fixed roles map to fixed permission sets. A gate resolves each
//! caller into a principal snapshot and enforces role/permission
//! predicates; `access` decides view/edit on owned resources.
//!
//! ```
//! use roleguard::{bootstrap, require_permission, can_edit, Permission, Role};
//!
//! let gate = bootstrap::demo_gate().unwrap();
//! let p = gate.resolve_principal(Some("Bearer internal_user")).unwrap();
//! assert_eq!(p.role(), Role::Internal);
//! assert!(require_permission(&p, Permission::ViewAllData).is_ok());
//! assert!(require_permission(&p, Permission::EditAllData).is_err());
//! assert!(!can_edit(p.role(), "someone_else", p.identity()));
//! ```

pub mod access;
pub mod auth;
pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod directory;
pub mod error;
pub mod gate;
pub mod permission;
pub mod principal;
pub mod resolver;
pub mod role;

pub use access::{can_delete, can_edit, can_view, ensure_can_edit, ensure_can_view, visible, Owned};
pub use auth::{Authenticator, StaticAuthenticator};
pub use config::{GateConfig, UnknownIdentityPolicy, UserEntry};
pub use directory::{MemoryDirectory, RoleDirectory};
pub use error::{Action, Denial, Result, RoleguardError};
pub use gate::{
    require_admin, require_any_role, require_internal_or_above, require_permission, require_role,
    require_stakeholder_or_admin, Assignment, AuthorizationGate, RoleStats,
};
pub use permission::{Permission, PermissionGroup, PermissionSet};
pub use principal::{AuthenticatedPrincipal, Identity};
pub use resolver::{catalog, has_permission, permissions_for, Catalog};
pub use role::{Role, ADMIN_ONLY, INTERNAL_OR_ABOVE, STAKEHOLDER_OR_ADMIN};
