// crates/nsgate-core/src/core/role_binding.rs
// ============================================================================
// Module: Role Binding Model
// Description: Namespace-scoped grants binding a group to resource types.
// Purpose: Model role-binding records and validate their resource tokens.
// Dependencies: crate::core::{catalog, identifiers}, serde, thiserror
// ============================================================================

//! ## Overview
//! A role binding associates one subject with a role inside exactly one
//! namespace. The role lists resource-type tokens, each either a bare
//! catalog path (`topics`) or a compound `resourceType/subAction`
//! (`connectors/restart`), plus the verbs the subject may use.
//!
//! Only group-typed subjects ever match. Unrecognized subject types
//! deserialize to [`SubjectType::Unsupported`] and are ignored by grant
//! matching rather than rejected.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::catalog::ResourceCatalog;
use crate::core::identifiers::NamespaceName;

// ============================================================================
// SECTION: Types
// ============================================================================

/// HTTP verb a role may perform on its resource types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verb {
    /// Read access.
    Get,
    /// Create or apply.
    Post,
    /// Update.
    Put,
    /// Delete.
    Delete,
}

impl Verb {
    /// Returns the stable upper-case label for the verb.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Subject kind of a role binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SubjectType {
    /// Identity-provider group.
    Group,
    /// Any subject type this engine does not know; never matches.
    #[serde(other)]
    Unsupported,
}

/// Subject a role binding grants to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    /// Group name (for group subjects).
    pub subject_name: String,
    /// Subject kind.
    pub subject_type: SubjectType,
}

impl Subject {
    /// Builds a group subject.
    #[must_use]
    pub fn group(name: impl Into<String>) -> Self {
        Self {
            subject_name: name.into(),
            subject_type: SubjectType::Group,
        }
    }

    /// Returns true when this is a group subject listed in `groups`.
    #[must_use]
    pub fn matches_any_group(&self, groups: &BTreeSet<String>) -> bool {
        self.subject_type == SubjectType::Group && groups.contains(&self.subject_name)
    }
}

/// Role granted by a binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    /// Bare or compound resource-type tokens, in declaration order.
    pub resource_types: Vec<String>,
    /// Verbs allowed on the listed resource types.
    pub verbs: BTreeSet<Verb>,
}

/// Namespace-scoped grant record, identified by `(namespace, name)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleBinding {
    /// Namespace the binding is scoped to.
    pub namespace: NamespaceName,
    /// Binding name, unique within the namespace.
    pub name: String,
    /// Bound subject.
    pub subject: Subject,
    /// Granted role.
    pub role: Role,
}

impl RoleBinding {
    /// Validates the binding's resource tokens against the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`RoleBindingError`] when the binding cannot grant anything
    /// meaningful.
    pub fn validate(&self) -> Result<(), RoleBindingError> {
        if !self.namespace.is_valid() {
            return Err(RoleBindingError::InvalidNamespace(self.namespace.to_string()));
        }
        if self.name.trim().is_empty() {
            return Err(RoleBindingError::MissingName);
        }
        if self.role.verbs.is_empty() {
            return Err(RoleBindingError::NoVerbs(self.name.clone()));
        }
        for token in &self.role.resource_types {
            validate_resource_token(token)?;
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Role-binding validation failures.
///
/// # Invariants
/// - Variants are stable for error classification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoleBindingError {
    /// Binding namespace does not satisfy the namespace grammar.
    #[error("invalid role binding namespace: {0}")]
    InvalidNamespace(String),
    /// Binding name is empty.
    #[error("role binding name must be set")]
    MissingName,
    /// Role lists no verbs.
    #[error("role binding {0} grants no verbs")]
    NoVerbs(String),
    /// Base resource type is not in the catalog.
    #[error("unknown resource type: {0}")]
    UnknownResourceType(String),
    /// Base resource type is cluster-scoped and cannot be granted per namespace.
    #[error("resource type is not namespaced: {0}")]
    NotNamespaced(String),
    /// Sub-action part of a compound token is malformed.
    #[error("invalid sub-action in resource token: {0}")]
    InvalidSubAction(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Validates one bare or compound resource token.
fn validate_resource_token(token: &str) -> Result<(), RoleBindingError> {
    let (base, sub_action) = match token.split_once('/') {
        Some((base, sub_action)) => (base, Some(sub_action)),
        None => (token, None),
    };
    let definition = ResourceCatalog::find_by_path(base)
        .ok_or_else(|| RoleBindingError::UnknownResourceType(token.to_string()))?;
    if !definition.namespaced {
        return Err(RoleBindingError::NotNamespaced(token.to_string()));
    }
    if let Some(sub_action) = sub_action {
        let well_formed = !sub_action.is_empty()
            && sub_action
                .bytes()
                .all(|byte| byte.is_ascii_lowercase() || byte.is_ascii_digit() || byte == b'-');
        if !well_formed {
            return Err(RoleBindingError::InvalidSubAction(token.to_string()));
        }
    }
    Ok(())
}
