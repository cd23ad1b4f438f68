// crates/nsgate-core/tests/audit.rs
// ============================================================================
// Module: Audit Sink Tests
// Description: Validate JSON-line audit output.
// Purpose: Ensure file audit records are parseable and carry decision fields.
// Dependencies: nsgate-core, serde_json, tempfile
// ============================================================================

//! Audit sink tests.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "Test-only assertions use unwrap/expect for clarity."
)]

use std::fs;
use std::sync::Arc;

use nsgate_core::AccessRequest;
use nsgate_core::AuthorizationEngine;
use nsgate_core::AuthzAuditSink;
use nsgate_core::EngineConfig;
use nsgate_core::FileAuditSink;
use nsgate_core::InMemoryDirectory;
use nsgate_core::Namespace;
use nsgate_core::Verb;
use serde_json::Value;

fn read_lines(path: &std::path::Path) -> Vec<Value> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn file_sink_appends_decisions_and_listings() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("audit.log");
    let sink: Arc<dyn AuthzAuditSink> = Arc::new(FileAuditSink::new(&log_path).unwrap());

    let directory = InMemoryDirectory::new();
    directory.insert_namespace(Namespace::new("test", "local")).unwrap();
    let engine =
        AuthorizationEngine::new(directory.clone(), directory, EngineConfig::new("admin-group"))
            .with_audit_sink(sink);
    let admin = engine.authenticate("root", ["admin-group"]);

    let request =
        AccessRequest::new("/api/namespaces/test/connectors/c1/restart").with_verb(Verb::Post);
    engine.check_request(&request, Some(&admin)).unwrap();
    engine.list_catalog(Some(&admin)).unwrap();

    let lines = read_lines(&log_path);
    assert_eq!(lines.len(), 2);

    let decision = &lines[0];
    assert_eq!(decision["event"], "authz_decision");
    assert_eq!(decision["outcome"], "allowed");
    assert_eq!(decision["reason"], "admin");
    assert_eq!(decision["username"], "root");
    assert_eq!(decision["namespace"], "test");
    assert_eq!(decision["resource_type"], "connectors");
    assert_eq!(decision["resource_name"], "c1");
    assert_eq!(decision["sub_action"], "restart");
    assert_eq!(decision["verb"], "POST");
    assert!(decision["timestamp_ms"].is_u64());

    let listing = &lines[1];
    assert_eq!(listing["event"], "catalog_listing");
    assert_eq!(listing["scope"], "admin");
    assert_eq!(listing["visible"].as_array().unwrap().len(), 9);
}

#[test]
fn file_sink_preserves_existing_content() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("audit.log");
    fs::write(&log_path, "{\"event\":\"earlier\"}\n").unwrap();

    let sink: Arc<dyn AuthzAuditSink> = Arc::new(FileAuditSink::new(&log_path).unwrap());
    let directory = InMemoryDirectory::new();
    let engine =
        AuthorizationEngine::new(directory.clone(), directory, EngineConfig::new("admin-group"))
            .with_audit_sink(sink);
    engine.check_security("/api/namespaces/test/topics", None).unwrap();

    let lines = read_lines(&log_path);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["event"], "earlier");
    assert_eq!(lines[1]["reason"], "unauthenticated");
    assert!(lines[1]["username"].is_null());
}

#[test]
fn file_sink_fails_for_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("missing").join("audit.log");
    assert!(FileAuditSink::new(&log_path).is_err());
}
