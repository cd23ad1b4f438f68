// crates/nsgate-core/src/runtime/store.rs
// ============================================================================
// Module: nsgate In-Memory Directory
// Description: Simple in-memory namespace and role-binding directory.
// Purpose: Provide deterministic collaborators for tests and embedding.
// Dependencies: crate::core, crate::interfaces
// ============================================================================

//! ## Overview
//! This module provides an in-memory implementation of both lookup
//! interfaces. Clones share the same underlying maps, so one directory can
//! serve as the namespace and the role-binding collaborator of an engine.
//! It is not intended for production persistence.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::sync::Arc;
use std::sync::Mutex;

use crate::core::Namespace;
use crate::core::NamespaceName;
use crate::core::RoleBinding;
use crate::core::RoleBindingError;
use crate::interfaces::LookupError;
use crate::interfaces::NamespaceLookup;
use crate::interfaces::RoleBindingLookup;

// ============================================================================
// SECTION: In-Memory Directory
// ============================================================================

/// Key of a role binding: `(namespace, name)`.
type BindingKey = (NamespaceName, String);

/// In-memory namespace and role-binding directory.
#[derive(Debug, Default, Clone)]
pub struct InMemoryDirectory {
    /// Namespaces keyed by name.
    namespaces: Arc<Mutex<BTreeMap<NamespaceName, Namespace>>>,
    /// Role bindings keyed by namespace and name.
    role_bindings: Arc<Mutex<BTreeMap<BindingKey, RoleBinding>>>,
}

impl InMemoryDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a namespace.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError`] when the directory lock is poisoned.
    pub fn insert_namespace(&self, namespace: Namespace) -> Result<(), LookupError> {
        self.namespaces
            .lock()
            .map_err(|_| poisoned("namespace"))?
            .insert(namespace.name.clone(), namespace);
        Ok(())
    }

    /// Removes a namespace, returning it when present.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError`] when the directory lock is poisoned.
    pub fn remove_namespace(&self, name: &str) -> Result<Option<Namespace>, LookupError> {
        Ok(self
            .namespaces
            .lock()
            .map_err(|_| poisoned("namespace"))?
            .remove(&NamespaceName::new(name)))
    }

    /// Validates and inserts or replaces a role binding.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError`] when the binding is invalid or the lock is
    /// poisoned.
    pub fn insert_role_binding(&self, binding: RoleBinding) -> Result<(), DirectoryError> {
        binding.validate()?;
        let key = (binding.namespace.clone(), binding.name.clone());
        self.role_bindings.lock().map_err(|_| poisoned("role binding"))?.insert(key, binding);
        Ok(())
    }

    /// Removes a role binding, returning it when present.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError`] when the directory lock is poisoned.
    pub fn remove_role_binding(
        &self,
        namespace: &str,
        name: &str,
    ) -> Result<Option<RoleBinding>, LookupError> {
        let key = (NamespaceName::new(namespace), name.to_string());
        Ok(self.role_bindings.lock().map_err(|_| poisoned("role binding"))?.remove(&key))
    }
}

impl NamespaceLookup for InMemoryDirectory {
    fn find_namespace_by_name(&self, name: &str) -> Result<Option<Namespace>, LookupError> {
        let guard = self.namespaces.lock().map_err(|_| poisoned("namespace"))?;
        Ok(guard.get(&NamespaceName::new(name)).cloned())
    }
}

impl RoleBindingLookup for InMemoryDirectory {
    fn find_role_bindings_for_groups(
        &self,
        groups: &BTreeSet<String>,
    ) -> Result<Vec<RoleBinding>, LookupError> {
        let guard = self.role_bindings.lock().map_err(|_| poisoned("role binding"))?;
        Ok(guard
            .values()
            .filter(|binding| binding.subject.matches_any_group(groups))
            .cloned()
            .collect())
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Directory mutation failures.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    /// Rejected role binding.
    #[error(transparent)]
    Invalid(#[from] RoleBindingError),
    /// Directory unavailable.
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

/// Builds the poisoned-lock error for a directory map.
fn poisoned(map: &str) -> LookupError {
    LookupError::Unavailable(format!("{map} directory mutex poisoned"))
}
