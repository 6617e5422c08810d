//! Configuration loading tests

use std::io::Write;

use roleguard::bootstrap::demo_config;
use roleguard::{AuthorizationGate, GateConfig, Role, RoleguardError, UnknownIdentityPolicy};
use tempfile::NamedTempFile;

const CONFIG: &str = r#"
[unknown_identity]
policy = "assign_default"
role = "normal"

[[users]]
token = "ops-token"
identity = "ops"
email = "ops@example.com"
display_name = "Ops"
role = "internal"

[[users]]
token = "boss-token"
identity = "boss"
email = "boss@example.com"
email_verified = false
role = "admin"
"#;

fn write_config(text: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(text.as_bytes()).unwrap();
    f
}

#[test]
fn load_from_file() {
    let f = write_config(CONFIG);
    let cfg = GateConfig::from_file(f.path()).unwrap();
    assert_eq!(cfg.users.len(), 2);
    assert_eq!(cfg.users[1].role, Role::Admin);
    assert!(!cfg.users[1].email_verified);
    assert_eq!(
        cfg.unknown_identity,
        UnknownIdentityPolicy::AssignDefault { role: Role::Normal, fallback: None }
    );
}

#[test]
fn gate_from_file_config() {
    let f = write_config(CONFIG);
    let gate = AuthorizationGate::from_config(&GateConfig::from_file(f.path()).unwrap()).unwrap();

    let ops = gate.resolve_principal(Some("Bearer OPS-TOKEN")).unwrap();
    assert_eq!(ops.identity(), "ops");
    assert_eq!(ops.role(), Role::Internal);

    let boss = gate.resolve_principal(Some("boss-token")).unwrap();
    assert!(!boss.email_verified());
    assert_eq!(boss.display_name(), "");

    // No fallback identity configured: unknown tokens are still rejected
    assert!(gate.resolve_principal(Some("nope")).is_err());
}

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = GateConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(
        matches!(err, RoleguardError::Config(ref m) if m.contains("absent.toml")),
        "got: {err}"
    );
}

#[test]
fn malformed_file() {
    let f = write_config("users = 3");
    assert!(matches!(GateConfig::from_file(f.path()), Err(RoleguardError::Config(_))));
}

#[test]
fn empty_identity_rejected() {
    let f = write_config(
        r#"
        [[users]]
        token = "t"
        identity = ""
        email = "x@example.com"
        role = "normal"
        "#,
    );
    assert_eq!(
        GateConfig::from_file(f.path()).unwrap_err(),
        RoleguardError::Config("users[0]: empty identity".into())
    );
}

/// Two entries for one identity would leave one token with the other's role
#[test]
fn duplicate_identity_rejected() {
    let f = write_config(
        r#"
        [[users]]
        token = "boss"
        identity = "alice"
        email = "alice@example.com"
        role = "admin"

        [[users]]
        token = "alt"
        identity = "alice"
        email = "alice@example.com"
        role = "normal"
        "#,
    );
    assert_eq!(
        GateConfig::from_file(f.path()).unwrap_err(),
        RoleguardError::Config("users[1]: duplicate identity".into())
    );
}

/// The same check guards gates built from hand-made configs
#[test]
fn from_config_rejects_duplicate_identity() {
    let mut cfg = demo_config();
    let mut twin = cfg.users[0].clone();
    twin.token = "admin_alt".into();
    twin.role = Role::Normal;
    cfg.users.push(twin);
    assert_eq!(
        AuthorizationGate::from_config(&cfg).err(),
        Some(RoleguardError::Config("users[4]: duplicate identity".into()))
    );
}

#[test]
fn unknown_role_in_file_is_invalid_role() {
    let f = write_config(
        r#"
        [[users]]
        token = "t"
        identity = "u"
        email = "u@example.com"
        role = "superuser"
        "#,
    );
    let err = GateConfig::from_file(f.path()).unwrap_err();
    assert!(
        matches!(err, RoleguardError::Config(ref m) if m.contains("invalid role: 'superuser'")),
        "got: {err}"
    );
}

/// A hand-built config is validated before a gate is built from it
#[test]
fn from_config_validates() {
    let mut cfg = demo_config();
    cfg.users[0].token = "  ".into();
    assert!(matches!(AuthorizationGate::from_config(&cfg), Err(RoleguardError::Config(_))));
}

#[test]
fn demo_config_written_and_reloaded() {
    let cfg = demo_config();
    let f = write_config(&cfg.to_toml_string().unwrap());
    assert_eq!(GateConfig::from_file(f.path()).unwrap(), cfg);
}
