// crates/nsgate-core/src/core/identifiers.rs
// ============================================================================
// Module: nsgate Identifiers
// Description: Canonical opaque identifiers for namespaces and role bindings.
// Purpose: Provide strongly typed, serializable IDs with stable string forms.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! This module defines the string-based identifiers used throughout nsgate.
//! Identifiers are opaque and serialize as strings. Grammar checks for
//! namespace names live here so the path classifier and the in-memory
//! directory agree on a single character set.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Identifier Types
// ============================================================================

/// Namespace name; the tenant boundary and unit of role-binding scoping.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NamespaceName(String);

impl NamespaceName {
    /// Creates a new namespace name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true when the name satisfies the namespace grammar.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        is_valid_namespace_name(&self.0)
    }
}

impl fmt::Display for NamespaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for NamespaceName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for NamespaceName {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl PartialEq<str> for NamespaceName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

// ============================================================================
// SECTION: Grammar
// ============================================================================

/// Returns true for `^[A-Za-z0-9_.-]+$`.
#[must_use]
pub fn is_valid_namespace_name(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(is_name_byte)
}

/// Returns true for bytes allowed in namespace and resource path segments.
#[must_use]
pub const fn is_name_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'_' | b'.' | b'-')
}
