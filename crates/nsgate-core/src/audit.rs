// crates/nsgate-core/src/audit.rs
// ============================================================================
// Module: Authorization Audit Logging
// Description: Structured audit events for authorization decisions.
// Purpose: Emit JSON-line audit records without hard logging dependencies.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Every terminal outcome of the engine is recorded as an audit event so
//! operators can tell an unknown namespace from a forbidden one and from an
//! ungranted action. Sinks are pluggable; the stderr and file sinks write
//! one JSON object per line.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use serde::Serialize;

use crate::core::Verb;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Authorization decision audit event.
#[derive(Debug, Clone, Serialize)]
pub struct AuthzAuditEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Request path as received.
    pub path: String,
    /// Caller username, absent for unauthenticated calls.
    pub username: Option<String>,
    /// Parsed namespace, when the path classified.
    pub namespace: Option<String>,
    /// Parsed resource type.
    pub resource_type: Option<String>,
    /// Parsed resource name.
    pub resource_name: Option<String>,
    /// Parsed sub-action.
    pub sub_action: Option<String>,
    /// Request verb when supplied.
    pub verb: Option<Verb>,
    /// Outcome label (`allowed`, `unknown`, `unknown_namespace`, ...).
    pub outcome: &'static str,
    /// Reason label explaining the outcome.
    pub reason: &'static str,
}

/// Catalog listing audit event.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogAuditEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Caller username, absent for unauthenticated calls.
    pub username: Option<String>,
    /// Listing scope label (`anonymous`, `admin`, `granted`).
    pub scope: &'static str,
    /// Paths of the visible catalog entries.
    pub visible: Vec<&'static str>,
}

/// Inputs required to construct an authorization audit event.
pub struct AuthzAuditEventParams {
    /// Request path as received.
    pub path: String,
    /// Caller username.
    pub username: Option<String>,
    /// Parsed namespace.
    pub namespace: Option<String>,
    /// Parsed resource type.
    pub resource_type: Option<String>,
    /// Parsed resource name.
    pub resource_name: Option<String>,
    /// Parsed sub-action.
    pub sub_action: Option<String>,
    /// Request verb.
    pub verb: Option<Verb>,
    /// Outcome label.
    pub outcome: &'static str,
    /// Reason label.
    pub reason: &'static str,
}

impl AuthzAuditEvent {
    /// Creates a new audit event with a consistent timestamp.
    #[must_use]
    pub fn new(params: AuthzAuditEventParams) -> Self {
        Self {
            event: "authz_decision",
            timestamp_ms: now_ms(),
            path: params.path,
            username: params.username,
            namespace: params.namespace,
            resource_type: params.resource_type,
            resource_name: params.resource_name,
            sub_action: params.sub_action,
            verb: params.verb,
            outcome: params.outcome,
            reason: params.reason,
        }
    }
}

impl CatalogAuditEvent {
    /// Creates a new catalog audit event with a consistent timestamp.
    #[must_use]
    pub fn new(username: Option<String>, scope: &'static str, visible: Vec<&'static str>) -> Self {
        Self {
            event: "catalog_listing",
            timestamp_ms: now_ms(),
            username,
            scope,
            visible,
        }
    }
}

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Audit sink for authorization events.
pub trait AuthzAuditSink: Send + Sync {
    /// Record an authorization decision.
    fn record(&self, event: &AuthzAuditEvent);

    /// Record a catalog listing.
    fn record_catalog(&self, _event: &CatalogAuditEvent) {}
}

/// Audit sink that logs JSON lines to stderr.
pub struct StderrAuditSink;

impl AuthzAuditSink for StderrAuditSink {
    fn record(&self, event: &AuthzAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let _ = writeln!(io::stderr(), "{payload}");
        }
    }

    fn record_catalog(&self, event: &CatalogAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let _ = writeln!(io::stderr(), "{payload}");
        }
    }
}

/// Audit sink that logs JSON lines to a file.
pub struct FileAuditSink {
    /// File handle used for append-only logging.
    file: Mutex<std::fs::File>,
}

impl FileAuditSink {
    /// Opens the audit log file in append mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn new(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }

    /// Appends one serialized line.
    fn append<T: Serialize>(&self, event: &T) {
        if let Ok(payload) = serde_json::to_string(event)
            && let Ok(mut file) = self.file.lock()
        {
            let _ = writeln!(file, "{payload}");
            let _ = file.flush();
        }
    }
}

impl AuthzAuditSink for FileAuditSink {
    fn record(&self, event: &AuthzAuditEvent) {
        self.append(event);
    }

    fn record_catalog(&self, event: &CatalogAuditEvent) {
        self.append(event);
    }
}

/// No-op audit sink.
pub struct NoopAuditSink;

impl AuthzAuditSink for NoopAuditSink {
    fn record(&self, _event: &AuthzAuditEvent) {}
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Milliseconds since the Unix epoch, zero if the clock is before it.
fn now_ms() -> u128 {
    SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis()
}
