// crates/nsgate-core/src/lib.rs
// ============================================================================
// Module: nsgate Core Library
// Description: Public API surface for the nsgate authorization core.
// Purpose: Expose core types, collaborator interfaces, and the decision engine.
// Dependencies: crate::{audit, core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! nsgate decides, for every incoming request, whether an authenticated
//! caller may act on a namespace-scoped resource. Access comes from
//! declarative role bindings that grant a group resource types and
//! sub-actions inside one namespace; one configured admin group bypasses
//! per-resource checks but never namespace-existence checks.
//!
//! Persistence and authentication stay outside the crate and are reached
//! through [`NamespaceLookup`] and [`RoleBindingLookup`].

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod audit;
pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use crate::core::*;

pub use audit::AuthzAuditEvent;
pub use audit::AuthzAuditSink;
pub use audit::CatalogAuditEvent;
pub use audit::FileAuditSink;
pub use audit::NoopAuditSink;
pub use audit::StderrAuditSink;
pub use interfaces::LookupError;
pub use interfaces::NamespaceLookup;
pub use interfaces::RoleBindingLookup;
pub use runtime::AccessRequest;
pub use runtime::AuthorizationEngine;
pub use runtime::AuthzError;
pub use runtime::DirectoryError;
pub use runtime::EngineConfig;
pub use runtime::GrantSet;
pub use runtime::InMemoryDirectory;
pub use runtime::ParsedRequest;
pub use runtime::RuleChain;
pub use runtime::SecurityRule;
pub use runtime::classify;
