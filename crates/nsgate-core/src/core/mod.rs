// crates/nsgate-core/src/core/mod.rs
// ============================================================================
// Module: nsgate Core Types
// Description: Catalog, principal, namespace, and role-binding structures.
// Purpose: Provide stable, serializable types for authorization decisions.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! Core types define the static resource catalog, the authenticated
//! principal, the records read from collaborators, and the decision shapes
//! returned by the engine.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod catalog;
pub mod decision;
pub mod identifiers;
pub mod namespace;
pub mod principal;
pub mod role_binding;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use catalog::ResourceCatalog;
pub use catalog::ResourceDefinition;
pub use decision::Decision;
pub use decision::NamespaceError;
pub use decision::NamespaceErrorResponse;
pub use identifiers::NamespaceName;
pub use namespace::Namespace;
pub use principal::IS_ADMIN;
pub use principal::Principal;
pub use principal::compute_roles;
pub use role_binding::Role;
pub use role_binding::RoleBinding;
pub use role_binding::RoleBindingError;
pub use role_binding::Subject;
pub use role_binding::SubjectType;
pub use role_binding::Verb;
