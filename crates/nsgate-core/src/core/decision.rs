// crates/nsgate-core/src/core/decision.rs
// ============================================================================
// Module: Authorization Decisions
// Description: Decision outcomes and namespace-level denial shapes.
// Purpose: Keep "abstain", "unknown namespace" and "forbidden namespace" distinct.
// Dependencies: crate::core::identifiers, serde, thiserror
// ============================================================================

//! ## Overview
//! A security rule answers with a [`Decision`] or raises a
//! [`NamespaceError`]. `Unknown` means the rule abstains and the
//! surrounding chain's default-deny applies. The two namespace errors carry
//! the offending namespace and render to a structured client-facing body
//! via [`NamespaceError::to_response`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;
use thiserror::Error;

use crate::core::identifiers::NamespaceName;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// HTTP status used for both namespace denial shapes.
pub const NAMESPACE_DENIAL_STATUS: u16 = 403;

// ============================================================================
// SECTION: Decision
// ============================================================================

/// Outcome of a security rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    /// Access granted.
    Allowed,
    /// Access refused.
    Forbidden,
    /// Rule abstains; another rule or the default-deny decides.
    Unknown,
}

impl Decision {
    /// Returns a stable label for the decision.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Allowed => "allowed",
            Self::Forbidden => "forbidden",
            Self::Unknown => "unknown",
        }
    }
}

// ============================================================================
// SECTION: Namespace Errors
// ============================================================================

/// Namespace-level denial raised by the engine.
///
/// # Invariants
/// - Variants are stable for error classification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NamespaceError {
    /// The namespace does not exist; raised for every principal.
    #[error("Accessing unknown namespace \"{namespace}\"")]
    Unknown {
        /// Offending namespace.
        namespace: NamespaceName,
    },
    /// The namespace exists but no binding of the caller's groups targets it.
    #[error("Accessing forbidden namespace \"{namespace}\"")]
    Forbidden {
        /// Offending namespace.
        namespace: NamespaceName,
    },
}

impl NamespaceError {
    /// Returns the offending namespace.
    #[must_use]
    pub const fn namespace(&self) -> &NamespaceName {
        match self {
            Self::Unknown {
                namespace,
            }
            | Self::Forbidden {
                namespace,
            } => namespace,
        }
    }

    /// Returns a stable reason label.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::Unknown {
                ..
            } => "unknown_namespace",
            Self::Forbidden {
                ..
            } => "forbidden_namespace",
        }
    }

    /// Renders the error as a client-facing response body.
    #[must_use]
    pub fn to_response(&self) -> NamespaceErrorResponse {
        NamespaceErrorResponse {
            status: NAMESPACE_DENIAL_STATUS,
            reason: self.reason(),
            namespace: self.namespace().clone(),
            message: self.to_string(),
        }
    }
}

/// Structured client-facing body for a [`NamespaceError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamespaceErrorResponse {
    /// HTTP status code.
    pub status: u16,
    /// Stable reason label.
    pub reason: &'static str,
    /// Offending namespace.
    pub namespace: NamespaceName,
    /// Human-readable message.
    pub message: String,
}
