// crates/nsgate-core/src/core/namespace.rs
// ============================================================================
// Module: Namespace Model
// Description: Tenant boundary record read from the namespace collaborator.
// Purpose: Carry namespace identity; only existence matters to this engine.
// Dependencies: crate::core::identifiers, serde
// ============================================================================

//! ## Overview
//! Namespaces are created and deleted elsewhere. The engine only checks that
//! a namespace exists before evaluating grants inside it.

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::NamespaceName;

/// Namespace record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Namespace {
    /// Unique namespace name.
    pub name: NamespaceName,
    /// Identifier of the owning backing cluster.
    pub cluster: String,
}

impl Namespace {
    /// Creates a namespace record.
    #[must_use]
    pub fn new(name: impl Into<NamespaceName>, cluster: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cluster: cluster.into(),
        }
    }
}
