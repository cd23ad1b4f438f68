// crates/nsgate-core/tests/rule_chain.rs
// ============================================================================
// Module: Rule Chain Tests
// Description: Validate ordered rule evaluation and default deny.
// Purpose: Ensure abstentions resolve to a refusal and errors stop the chain.
// Dependencies: nsgate-core
// ============================================================================

//! Security rule chain tests.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "Test-only assertions use unwrap/expect for clarity."
)]

use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

use nsgate_core::AccessRequest;
use nsgate_core::AuthorizationEngine;
use nsgate_core::AuthzError;
use nsgate_core::Decision;
use nsgate_core::EngineConfig;
use nsgate_core::InMemoryDirectory;
use nsgate_core::Namespace;
use nsgate_core::NamespaceError;
use nsgate_core::Principal;
use nsgate_core::Role;
use nsgate_core::RoleBinding;
use nsgate_core::RuleChain;
use nsgate_core::SecurityRule;
use nsgate_core::Subject;
use nsgate_core::Verb;

const ADMIN_GROUP: &str = "admin-group";

/// Rule returning a fixed decision and counting calls.
struct FixedRule {
    decision: Decision,
    calls: Arc<AtomicUsize>,
}

impl SecurityRule for FixedRule {
    fn check(
        &self,
        _request: &AccessRequest<'_>,
        _principal: Option<&Principal>,
    ) -> Result<Decision, AuthzError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.decision)
    }
}

fn fixed(decision: Decision) -> (FixedRule, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let rule = FixedRule {
        decision,
        calls: Arc::clone(&calls),
    };
    (rule, calls)
}

fn engine() -> AuthorizationEngine<InMemoryDirectory, InMemoryDirectory> {
    let directory = InMemoryDirectory::new();
    directory.insert_namespace(Namespace::new("test", "local")).unwrap();
    directory
        .insert_role_binding(RoleBinding {
            namespace: "test".into(),
            name: "rb".to_string(),
            subject: Subject::group("group1"),
            role: Role {
                resource_types: vec!["topics".to_string()],
                verbs: [Verb::Get].into_iter().collect(),
            },
        })
        .unwrap();
    AuthorizationEngine::new(directory.clone(), directory, EngineConfig::new(ADMIN_GROUP))
}

#[test]
fn empty_chain_denies() {
    let chain = RuleChain::new();
    let request = AccessRequest::new("/api/namespaces/test/topics");
    assert_eq!(chain.evaluate(&request, None).unwrap(), Decision::Forbidden);
}

#[test]
fn ungranted_action_in_accessible_namespace_is_forbidden() {
    let engine = engine();
    let principal = engine.authenticate("alice", ["group1"]);
    let chain = RuleChain::new().with_rule(engine);
    let allowed = AccessRequest::new("/api/namespaces/test/topics");
    let ungranted = AccessRequest::new("/api/namespaces/test/acls");
    assert_eq!(chain.evaluate(&allowed, Some(&principal)).unwrap(), Decision::Allowed);
    assert_eq!(chain.evaluate(&ungranted, Some(&principal)).unwrap(), Decision::Forbidden);
}

#[test]
fn later_rules_decide_after_abstention() {
    let (allow, allow_calls) = fixed(Decision::Allowed);
    let chain = RuleChain::new().with_rule(engine()).with_rule(allow);
    let request = AccessRequest::new("/api/health");
    assert_eq!(chain.evaluate(&request, None).unwrap(), Decision::Allowed);
    assert_eq!(allow_calls.load(Ordering::SeqCst), 1);
}

#[test]
fn first_decisive_rule_wins() {
    let (deny, deny_calls) = fixed(Decision::Forbidden);
    let (allow, allow_calls) = fixed(Decision::Allowed);
    let chain = RuleChain::new().with_rule(deny).with_rule(allow);
    let request = AccessRequest::new("/api/health");
    assert_eq!(chain.evaluate(&request, None).unwrap(), Decision::Forbidden);
    assert_eq!(deny_calls.load(Ordering::SeqCst), 1);
    assert_eq!(allow_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn namespace_errors_stop_the_chain() {
    let engine = engine();
    let principal = engine.authenticate("alice", ["group1"]);
    let (allow, allow_calls) = fixed(Decision::Allowed);
    let chain = RuleChain::new().with_rule(engine).with_rule(allow);
    let request = AccessRequest::new("/api/namespaces/missing/topics");
    let result = chain.evaluate(&request, Some(&principal));
    assert!(matches!(result, Err(AuthzError::Namespace(NamespaceError::Unknown { .. }))));
    assert_eq!(allow_calls.load(Ordering::SeqCst), 0);
}
