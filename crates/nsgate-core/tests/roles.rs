// crates/nsgate-core/tests/roles.rs
// ============================================================================
// Module: Role Computation Tests
// Description: Validate admin role derivation and principal construction.
// Purpose: Ensure the admin marker depends only on group membership.
// Dependencies: nsgate-core
// ============================================================================

//! Role computation tests.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "Test-only assertions use unwrap/expect for clarity."
)]

use std::collections::BTreeSet;

use nsgate_core::AuthorizationEngine;
use nsgate_core::EngineConfig;
use nsgate_core::IS_ADMIN;
use nsgate_core::InMemoryDirectory;
use nsgate_core::Principal;
use nsgate_core::compute_roles;

fn groups(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}

#[test]
fn admin_group_yields_admin_role() {
    let roles = compute_roles(&groups(&["admin-group"]), "admin-group");
    assert_eq!(roles, groups(&[IS_ADMIN]));
}

#[test]
fn admin_group_among_others_yields_only_admin_role() {
    let roles = compute_roles(&groups(&["dev", "admin-group", "ops"]), "admin-group");
    assert_eq!(roles, groups(&[IS_ADMIN]));
}

#[test]
fn other_groups_yield_no_roles() {
    assert!(compute_roles(&groups(&["dev", "ops"]), "admin-group").is_empty());
    assert!(compute_roles(&BTreeSet::new(), "admin-group").is_empty());
}

#[test]
fn admin_group_match_is_exact() {
    assert!(compute_roles(&groups(&["Admin-Group"]), "admin-group").is_empty());
    assert!(compute_roles(&groups(&["admin-group-2"]), "admin-group").is_empty());
}

#[test]
fn admin_marker_literal_is_stable() {
    assert_eq!(IS_ADMIN, "isAdmin()");
}

#[test]
fn principal_derives_roles_on_construction() {
    let admin = Principal::new("root", ["admin-group", "dev"], "admin-group");
    assert!(admin.is_admin());
    assert_eq!(admin.groups, groups(&["admin-group", "dev"]));

    let user = Principal::new("alice", ["dev"], "admin-group");
    assert!(!user.is_admin());
    assert!(user.roles.is_empty());
}

#[test]
fn engine_uses_configured_admin_group() {
    let directory = InMemoryDirectory::new();
    let engine =
        AuthorizationEngine::new(directory.clone(), directory, EngineConfig::new("platform-ops"));
    assert_eq!(engine.config().admin_group(), "platform-ops");
    assert_eq!(engine.compute_roles(&groups(&["platform-ops"])), groups(&[IS_ADMIN]));
    assert!(engine.compute_roles(&groups(&["admin-group"])).is_empty());
    assert!(engine.authenticate("ops", ["platform-ops"]).is_admin());
}
