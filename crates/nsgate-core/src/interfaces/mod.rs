// crates/nsgate-core/src/interfaces/mod.rs
// ============================================================================
// Module: nsgate Interfaces
// Description: Read-only collaborator seams for namespaces and role bindings.
// Purpose: Define the lookup contracts consumed by the authorization engine.
// Dependencies: crate::core, thiserror
// ============================================================================

//! ## Overview
//! Persistence lives outside this crate. The engine reads namespace
//! existence and role bindings through these traits and never mutates
//! anything. Implementations return already-materialized data; failures are
//! infrastructure errors that the engine propagates unchanged.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::sync::Arc;

use thiserror::Error;

use crate::core::Namespace;
use crate::core::RoleBinding;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Collaborator lookup failures.
///
/// # Invariants
/// - Variants are stable for error classification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// Backing store could not be reached.
    #[error("lookup unavailable: {0}")]
    Unavailable(String),
    /// Backing store returned unusable data.
    #[error("lookup data corrupted: {0}")]
    Corrupted(String),
}

// ============================================================================
// SECTION: Namespace Lookup
// ============================================================================

/// Namespace existence lookup.
pub trait NamespaceLookup: Send + Sync {
    /// Finds a namespace by its exact name.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError`] when the backing store fails.
    fn find_namespace_by_name(&self, name: &str) -> Result<Option<Namespace>, LookupError>;
}

impl<T: NamespaceLookup + ?Sized> NamespaceLookup for Arc<T> {
    fn find_namespace_by_name(&self, name: &str) -> Result<Option<Namespace>, LookupError> {
        self.as_ref().find_namespace_by_name(name)
    }
}

// ============================================================================
// SECTION: Role Binding Lookup
// ============================================================================

/// Role-binding lookup keyed by group membership across all namespaces.
pub trait RoleBindingLookup: Send + Sync {
    /// Returns every binding whose subject is one of `groups`, in any namespace.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError`] when the backing store fails.
    fn find_role_bindings_for_groups(
        &self,
        groups: &BTreeSet<String>,
    ) -> Result<Vec<RoleBinding>, LookupError>;
}

impl<T: RoleBindingLookup + ?Sized> RoleBindingLookup for Arc<T> {
    fn find_role_bindings_for_groups(
        &self,
        groups: &BTreeSet<String>,
    ) -> Result<Vec<RoleBinding>, LookupError> {
        self.as_ref().find_role_bindings_for_groups(groups)
    }
}
