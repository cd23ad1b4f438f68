// crates/nsgate-core/src/core/catalog.rs
// ============================================================================
// Module: Resource Catalog
// Description: Static registry of the resource kinds managed by the service.
// Purpose: Validate resource-type tokens and filter what callers are shown.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The catalog is a closed, compiled-in table of [`ResourceDefinition`]
//! records. Each record's `path` is the canonical plural segment used as the
//! `resourceType` token in request paths and role-binding grants; `path`
//! values are unique across the table. The catalog carries no authorization
//! logic of its own: callers decide which paths are visible and the catalog
//! only filters.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use serde::Serialize;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Catalog entry describing one managed resource kind.
///
/// # Invariants
/// - `path` is globally unique within [`ResourceCatalog::list_all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResourceDefinition {
    /// Display name of the kind.
    pub kind: &'static str,
    /// Whether instances live inside a namespace.
    pub namespaced: bool,
    /// Whether instances can be imported from a backing cluster.
    pub synchronizable: bool,
    /// Canonical plural path segment.
    pub path: &'static str,
    /// Aliases accepted from callers.
    pub names: &'static [&'static str],
}

impl ResourceDefinition {
    /// Returns true when `name` is the path, an alias, or the kind
    /// (case-insensitive) of this definition.
    #[must_use]
    pub fn answers_to(&self, name: &str) -> bool {
        self.path == name
            || self.names.iter().any(|alias| *alias == name)
            || self.kind.eq_ignore_ascii_case(name)
    }
}

// ============================================================================
// SECTION: Catalog Table
// ============================================================================

/// Access control entries.
const ACL: ResourceDefinition = ResourceDefinition {
    kind: "AccessControlEntry",
    namespaced: true,
    synchronizable: false,
    path: "acls",
    names: &["acls", "acl", "ac"],
};

/// Connectors.
const CONNECTOR: ResourceDefinition = ResourceDefinition {
    kind: "Connector",
    namespaced: true,
    synchronizable: true,
    path: "connectors",
    names: &["connects", "connect", "co"],
};

/// Kafka Streams applications.
const KAFKA_STREAM: ResourceDefinition = ResourceDefinition {
    kind: "KafkaStream",
    namespaced: true,
    synchronizable: false,
    path: "streams",
    names: &["streams", "stream", "st"],
};

/// Role bindings.
const ROLE_BINDING: ResourceDefinition = ResourceDefinition {
    kind: "RoleBinding",
    namespaced: true,
    synchronizable: false,
    path: "role-bindings",
    names: &["rolebindings", "rolebinding", "rb"],
};

/// Resource quotas.
const RESOURCE_QUOTA: ResourceDefinition = ResourceDefinition {
    kind: "ResourceQuota",
    namespaced: true,
    synchronizable: false,
    path: "resource-quotas",
    names: &["resource-quotas", "resource-quota", "quotas", "quota", "qu"],
};

/// Self-declared connect clusters.
const CONNECT_CLUSTER: ResourceDefinition = ResourceDefinition {
    kind: "ConnectCluster",
    namespaced: true,
    synchronizable: false,
    path: "connect-clusters",
    names: &["connect-clusters", "connect-cluster", "cc"],
};

/// Topics.
const TOPIC: ResourceDefinition = ResourceDefinition {
    kind: "Topic",
    namespaced: true,
    synchronizable: true,
    path: "topics",
    names: &["topics", "topic", "to"],
};

/// Namespaces; the only cluster-scoped kind.
const NAMESPACE: ResourceDefinition = ResourceDefinition {
    kind: "Namespace",
    namespaced: false,
    synchronizable: false,
    path: "namespaces",
    names: &["namespaces", "namespace", "ns"],
};

/// Schemas.
const SCHEMA: ResourceDefinition = ResourceDefinition {
    kind: "Schema",
    namespaced: true,
    synchronizable: false,
    path: "schemas",
    names: &["schemas", "schema", "sc"],
};

/// Catalog in listing order.
static CATALOG: [ResourceDefinition; 9] = [
    ACL,
    CONNECTOR,
    KAFKA_STREAM,
    ROLE_BINDING,
    RESOURCE_QUOTA,
    CONNECT_CLUSTER,
    TOPIC,
    NAMESPACE,
    SCHEMA,
];

// ============================================================================
// SECTION: Catalog Operations
// ============================================================================

/// Read-only accessor for the static resource catalog.
pub struct ResourceCatalog;

impl ResourceCatalog {
    /// Returns the full catalog in listing order.
    #[must_use]
    pub fn list_all() -> &'static [ResourceDefinition] {
        &CATALOG
    }

    /// Returns the entries whose `path` is authorized, preserving catalog order.
    #[must_use]
    pub fn filter_by_authorized_paths<S>(authorized_paths: &BTreeSet<S>) -> Vec<ResourceDefinition>
    where
        S: AsRef<str> + Ord,
    {
        CATALOG
            .iter()
            .filter(|definition| {
                authorized_paths.iter().any(|path| path.as_ref() == definition.path)
            })
            .copied()
            .collect()
    }

    /// Finds the entry with the given canonical path.
    #[must_use]
    pub fn find_by_path(path: &str) -> Option<&'static ResourceDefinition> {
        CATALOG.iter().find(|definition| definition.path == path)
    }

    /// Resolves a caller-supplied name (path, alias, or kind) to an entry.
    #[must_use]
    pub fn resolve(name: &str) -> Option<&'static ResourceDefinition> {
        Self::find_by_path(name).or_else(|| CATALOG.iter().find(|entry| entry.answers_to(name)))
    }
}
