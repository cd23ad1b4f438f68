// crates/nsgate-core/tests/catalog_listing.rs
// ============================================================================
// Module: Catalog Listing Tests
// Description: Validate which catalog entries callers are shown.
// Purpose: Ensure listing follows admin, anonymous, and granted scopes.
// Dependencies: nsgate-core
// ============================================================================

//! Catalog visibility tests.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "Test-only assertions use unwrap/expect for clarity."
)]

use std::sync::Arc;
use std::sync::Mutex;

use nsgate_core::AuthorizationEngine;
use nsgate_core::AuthzAuditEvent;
use nsgate_core::AuthzAuditSink;
use nsgate_core::CatalogAuditEvent;
use nsgate_core::EngineConfig;
use nsgate_core::InMemoryDirectory;
use nsgate_core::Namespace;
use nsgate_core::ResourceCatalog;
use nsgate_core::ResourceDefinition;
use nsgate_core::Role;
use nsgate_core::RoleBinding;
use nsgate_core::Subject;
use nsgate_core::Verb;

const ADMIN_GROUP: &str = "admin-group";

#[derive(Default)]
struct CatalogSink {
    listings: Mutex<Vec<CatalogAuditEvent>>,
}

impl AuthzAuditSink for CatalogSink {
    fn record(&self, _event: &AuthzAuditEvent) {}

    fn record_catalog(&self, event: &CatalogAuditEvent) {
        self.listings.lock().unwrap().push(event.clone());
    }
}

fn binding(namespace: &str, name: &str, group: &str, resource_types: &[&str]) -> RoleBinding {
    RoleBinding {
        namespace: namespace.into(),
        name: name.to_string(),
        subject: Subject::group(group),
        role: Role {
            resource_types: resource_types.iter().map(|token| (*token).to_string()).collect(),
            verbs: [Verb::Get].into_iter().collect(),
        },
    }
}

fn directory() -> InMemoryDirectory {
    let directory = InMemoryDirectory::new();
    directory.insert_namespace(Namespace::new("team-a", "local")).unwrap();
    directory.insert_namespace(Namespace::new("team-b", "local")).unwrap();
    directory
        .insert_role_binding(binding("team-a", "rb-a", "group-a", &["topics", "connectors/restart"]))
        .unwrap();
    directory.insert_role_binding(binding("team-b", "rb-b", "group-a", &["schemas"])).unwrap();
    directory.insert_role_binding(binding("team-b", "rb-c", "group-c", &["acls"])).unwrap();
    directory
}

fn engine() -> AuthorizationEngine<InMemoryDirectory, InMemoryDirectory> {
    let directory = directory();
    AuthorizationEngine::new(directory.clone(), directory, EngineConfig::new(ADMIN_GROUP))
}

fn paths(definitions: &[ResourceDefinition]) -> Vec<&'static str> {
    definitions.iter().map(|definition| definition.path).collect()
}

#[test]
fn anonymous_callers_see_full_catalog() {
    let visible = engine().list_catalog(None).unwrap();
    assert_eq!(visible, ResourceCatalog::list_all().to_vec());
}

#[test]
fn admins_see_full_catalog() {
    let engine = engine();
    let admin = engine.authenticate("root", [ADMIN_GROUP]);
    assert_eq!(engine.list_catalog(Some(&admin)).unwrap(), ResourceCatalog::list_all().to_vec());
}

#[test]
fn users_see_kinds_granted_in_any_namespace() {
    let engine = engine();
    let principal = engine.authenticate("alice", ["group-a"]);
    let visible = engine.list_catalog(Some(&principal)).unwrap();
    assert_eq!(paths(&visible), vec!["topics", "schemas"]);
}

#[test]
fn users_without_bindings_see_nothing() {
    let engine = engine();
    let principal = engine.authenticate("bob", ["group-z"]);
    assert!(engine.list_catalog(Some(&principal)).unwrap().is_empty());
}

#[test]
fn listings_are_audited_with_scope() {
    let sink = Arc::new(CatalogSink::default());
    let engine = engine().with_audit_sink(Arc::clone(&sink) as Arc<dyn AuthzAuditSink>);
    let principal = engine.authenticate("alice", ["group-a"]);
    let _ = engine.list_catalog(Some(&principal)).unwrap();
    let _ = engine.list_catalog(None).unwrap();

    let listings = sink.listings.lock().unwrap();
    assert_eq!(listings.len(), 2);
    assert_eq!(listings[0].scope, "granted");
    assert_eq!(listings[0].username.as_deref(), Some("alice"));
    assert_eq!(listings[0].visible, vec!["topics", "schemas"]);
    assert_eq!(listings[1].scope, "anonymous");
    assert_eq!(listings[1].visible.len(), ResourceCatalog::list_all().len());
}
