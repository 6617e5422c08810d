//! Permission bits and the fixed role masks

// User management
pub const MANAGE_USERS: u16 = 1;
pub const VIEW_ALL_USERS: u16 = 1 << 1;
pub const EDIT_USER_ROLES: u16 = 1 << 2;

// Data
pub const VIEW_ALL_DATA: u16 = 1 << 3;
pub const EDIT_ALL_DATA: u16 = 1 << 4;
pub const DELETE_ALL_DATA: u16 = 1 << 5;

// Analytics/reports
pub const VIEW_ANALYTICS: u16 = 1 << 6;
pub const EXPORT_DATA: u16 = 1 << 7;

// System
pub const VIEW_SYSTEM_LOGS: u16 = 1 << 8;
pub const MANAGE_SYSTEM_SETTINGS: u16 = 1 << 9;

// Every defined bit
pub const ALL_BITS: u16 = 0x03FF;

// Role masks
pub const ADMIN_MASK: u16 = ALL_BITS;
pub const STAKEHOLDER_MASK: u16 =
    VIEW_ALL_USERS | VIEW_ALL_DATA | EDIT_ALL_DATA | VIEW_ANALYTICS | EXPORT_DATA;
pub const INTERNAL_MASK: u16 = VIEW_ALL_USERS | VIEW_ALL_DATA | VIEW_ANALYTICS;
pub const NORMAL_MASK: u16 = 0;

// Wire names, in declaration order
pub(crate) const PERMISSION_NAMES: &[(&str, u16)] = &[
    ("manage_users", MANAGE_USERS),
    ("view_all_users", VIEW_ALL_USERS),
    ("edit_user_roles", EDIT_USER_ROLES),
    ("view_all_data", VIEW_ALL_DATA),
    ("edit_all_data", EDIT_ALL_DATA),
    ("delete_all_data", DELETE_ALL_DATA),
    ("view_analytics", VIEW_ANALYTICS),
    ("export_data", EXPORT_DATA),
    ("view_system_logs", VIEW_SYSTEM_LOGS),
    ("manage_system_settings", MANAGE_SYSTEM_SETTINGS),
];

pub(crate) const ROLE_NAMES: &[&str] = &["admin", "stakeholder", "internal", "normal"];
