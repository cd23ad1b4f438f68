// crates/nsgate-core/src/runtime/engine.rs
// ============================================================================
// Module: nsgate Authorization Engine
// Description: Resource-based security rule over namespaces and role bindings.
// Purpose: Decide whether an authenticated caller may act on a namespaced resource.
// Dependencies: crate::{audit, core, interfaces, runtime}, thiserror
// ============================================================================

//! ## Overview
//! The engine is the single decision path for namespaced-resource requests.
//! For each call it:
//!
//! 1. abstains (`Unknown`) when the caller is unauthenticated or the path is
//!    not a namespaced-resource request;
//! 2. raises [`NamespaceError::Unknown`] when the namespace does not exist,
//!    for admins too;
//! 3. allows admins;
//! 4. raises [`NamespaceError::Forbidden`] when none of the caller's group
//!    bindings targets the namespace;
//! 5. allows a matching grant and abstains otherwise.
//!
//! The engine is stateless: every decision reads fresh collaborator data and
//! nothing is cached. The role-binding lookup only runs once the admin
//! short-circuit has been ruled out.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::sync::Arc;

use thiserror::Error;

use crate::audit::AuthzAuditEvent;
use crate::audit::AuthzAuditEventParams;
use crate::audit::AuthzAuditSink;
use crate::audit::CatalogAuditEvent;
use crate::audit::NoopAuditSink;
use crate::core::Decision;
use crate::core::IS_ADMIN;
use crate::core::NamespaceError;
use crate::core::NamespaceName;
use crate::core::Principal;
use crate::core::ResourceCatalog;
use crate::core::ResourceDefinition;
use crate::core::Verb;
use crate::core::compute_roles;
use crate::interfaces::LookupError;
use crate::interfaces::NamespaceLookup;
use crate::interfaces::RoleBindingLookup;
use crate::runtime::grants::GrantSet;
use crate::runtime::path::ParsedRequest;
use crate::runtime::path::classify;

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Engine configuration injected at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Group whose members bypass per-resource grant checks.
    pub admin_group: String,
    /// Require the request verb to be granted alongside the resource token.
    pub enforce_verbs: bool,
}

impl EngineConfig {
    /// Creates a configuration with verb enforcement disabled.
    #[must_use]
    pub fn new(admin_group: impl Into<String>) -> Self {
        Self {
            admin_group: admin_group.into(),
            enforce_verbs: false,
        }
    }

    /// Returns the configured admin group.
    #[must_use]
    pub fn admin_group(&self) -> &str {
        &self.admin_group
    }
}

// ============================================================================
// SECTION: Requests and Errors
// ============================================================================

/// Request under evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessRequest<'a> {
    /// Request path.
    pub path: &'a str,
    /// Verb the transport mapped the request method to, when known.
    pub verb: Option<Verb>,
}

impl<'a> AccessRequest<'a> {
    /// Builds a request without a verb.
    #[must_use]
    pub const fn new(path: &'a str) -> Self {
        Self {
            path,
            verb: None,
        }
    }

    /// Returns a copy carrying `verb`.
    #[must_use]
    pub const fn with_verb(mut self, verb: Verb) -> Self {
        self.verb = Some(verb);
        self
    }
}

/// Engine failures.
#[derive(Debug, Error)]
pub enum AuthzError {
    /// Namespace-level denial.
    #[error(transparent)]
    Namespace(#[from] NamespaceError),
    /// Collaborator failure, propagated unchanged.
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

impl AuthzError {
    /// Returns a stable outcome label for audit records.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Namespace(err) => err.reason(),
            Self::Lookup(_) => "lookup_error",
        }
    }
}

/// Decision plus the reason label recorded in the audit trail.
type Verdict = (Decision, &'static str);

// ============================================================================
// SECTION: Engine
// ============================================================================

/// Resource-based authorization engine.
pub struct AuthorizationEngine<N, R> {
    /// Namespace collaborator.
    namespaces: N,
    /// Role-binding collaborator.
    role_bindings: R,
    /// Engine configuration.
    config: EngineConfig,
    /// Audit sink for decisions and listings.
    audit: Arc<dyn AuthzAuditSink>,
}

impl<N, R> AuthorizationEngine<N, R>
where
    N: NamespaceLookup,
    R: RoleBindingLookup,
{
    /// Creates an engine that discards audit events.
    #[must_use]
    pub fn new(namespaces: N, role_bindings: R, config: EngineConfig) -> Self {
        Self {
            namespaces,
            role_bindings,
            config,
            audit: Arc::new(NoopAuditSink),
        }
    }

    /// Returns the engine with `audit` installed as its sink.
    #[must_use]
    pub fn with_audit_sink(mut self, audit: Arc<dyn AuthzAuditSink>) -> Self {
        self.audit = audit;
        self
    }

    /// Returns the engine configuration.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Derives privilege roles from `groups` using the configured admin group.
    #[must_use]
    pub fn compute_roles(&self, groups: &BTreeSet<String>) -> BTreeSet<String> {
        compute_roles(groups, &self.config.admin_group)
    }

    /// Builds the principal for an identity whose groups were asserted upstream.
    #[must_use]
    pub fn authenticate<I, S>(&self, username: impl Into<String>, groups: I) -> Principal
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Principal::new(username, groups, &self.config.admin_group)
    }

    /// Decides a request path without verb information.
    ///
    /// # Errors
    ///
    /// Returns [`AuthzError::Namespace`] for unknown or forbidden namespaces
    /// and [`AuthzError::Lookup`] when a collaborator fails.
    pub fn check_security(
        &self,
        path: &str,
        principal: Option<&Principal>,
    ) -> Result<Decision, AuthzError> {
        self.check_request(&AccessRequest::new(path), principal)
    }

    /// Decides a request, honoring its verb when verb enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns [`AuthzError::Namespace`] for unknown or forbidden namespaces
    /// and [`AuthzError::Lookup`] when a collaborator fails.
    pub fn check_request(
        &self,
        request: &AccessRequest<'_>,
        principal: Option<&Principal>,
    ) -> Result<Decision, AuthzError> {
        let parsed = principal.and_then(|_| classify(request.path));
        let result = match (principal, parsed.as_ref()) {
            (None, _) => Ok((Decision::Unknown, "unauthenticated")),
            (Some(_), None) => Ok((Decision::Unknown, "unclassified_path")),
            (Some(principal), Some(parsed)) => self.decide(request, principal, parsed),
        };
        let (outcome, reason) = match &result {
            Ok((decision, reason)) => (decision.as_str(), *reason),
            Err(err) => (err.label(), err.label()),
        };
        self.audit.record(&AuthzAuditEvent::new(AuthzAuditEventParams {
            path: request.path.to_string(),
            username: principal.map(|principal| principal.username.clone()),
            namespace: parsed.as_ref().map(|parsed| parsed.namespace.clone()),
            resource_type: parsed.as_ref().map(|parsed| parsed.resource_type.clone()),
            resource_name: parsed.as_ref().and_then(|parsed| parsed.resource_name.clone()),
            sub_action: parsed.as_ref().and_then(|parsed| parsed.sub_action.clone()),
            verb: request.verb,
            outcome,
            reason,
        }));
        result.map(|(decision, _)| decision)
    }

    /// Lists the catalog entries visible to `principal`.
    ///
    /// Unauthenticated callers and admins see the full catalog; everyone else
    /// sees the kinds granted by their group bindings in any namespace.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError`] when the role-binding collaborator fails.
    pub fn list_catalog(
        &self,
        principal: Option<&Principal>,
    ) -> Result<Vec<ResourceDefinition>, LookupError> {
        let (scope, visible) = match principal {
            None => ("anonymous", ResourceCatalog::list_all().to_vec()),
            Some(principal) if self.compute_roles(&principal.groups).contains(IS_ADMIN) => {
                ("admin", ResourceCatalog::list_all().to_vec())
            }
            Some(principal) => {
                let bindings = self.role_bindings.find_role_bindings_for_groups(&principal.groups)?;
                let tokens = GrantSet::build_unscoped(&principal.groups, &bindings);
                ("granted", ResourceCatalog::filter_by_authorized_paths(&tokens))
            }
        };
        self.audit.record_catalog(&CatalogAuditEvent::new(
            principal.map(|principal| principal.username.clone()),
            scope,
            visible.iter().map(|definition| definition.path).collect(),
        ));
        Ok(visible)
    }

    /// Runs the namespace, admin, and grant checks for a classified request.
    fn decide(
        &self,
        request: &AccessRequest<'_>,
        principal: &Principal,
        parsed: &ParsedRequest,
    ) -> Result<Verdict, AuthzError> {
        if self.namespaces.find_namespace_by_name(&parsed.namespace)?.is_none() {
            return Err(NamespaceError::Unknown {
                namespace: NamespaceName::new(parsed.namespace.as_str()),
            }
            .into());
        }
        if self.compute_roles(&principal.groups).contains(IS_ADMIN) {
            return Ok((Decision::Allowed, "admin"));
        }
        let bindings = self.role_bindings.find_role_bindings_for_groups(&principal.groups)?;
        let grants = GrantSet::build(&parsed.namespace, &principal.groups, &bindings);
        if grants.is_empty() {
            return Err(NamespaceError::Forbidden {
                namespace: NamespaceName::new(parsed.namespace.as_str()),
            }
            .into());
        }
        if !grants.permits(parsed, None) {
            return Ok((Decision::Unknown, "grant_missing"));
        }
        let verb = if self.config.enforce_verbs { request.verb } else { None };
        if grants.permits(parsed, verb) {
            Ok((Decision::Allowed, "grant_matched"))
        } else {
            Ok((Decision::Unknown, "verb_not_granted"))
        }
    }
}
