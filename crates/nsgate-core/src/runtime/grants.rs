// crates/nsgate-core/src/runtime/grants.rs
// ============================================================================
// Module: Grant Index
// Description: Effective resource-type grants of a group set in one namespace.
// Purpose: Scope role bindings to a namespace and match parsed requests.
// Dependencies: crate::core, crate::runtime::path
// ============================================================================

//! ## Overview
//! [`GrantSet::build`] keeps only bindings whose namespace equals the target
//! and whose group-typed subject is in the caller's groups, then flattens
//! their resource tokens. The namespace filter is applied here, locally, so
//! an overly broad collaborator result can never leak cross-namespace
//! grants.
//!
//! Matching is exact on tokens: a request without a sub-action needs the
//! bare resource type, a request with one needs `resourceType/subAction`.
//! A bare grant never implies any sub-action.
//!
//! Each token remembers the union of verbs of the bindings that granted it,
//! which is only consulted when verb enforcement is switched on.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use crate::core::RoleBinding;
use crate::core::Verb;
use crate::runtime::path::ParsedRequest;

// ============================================================================
// SECTION: Grant Set
// ============================================================================

/// Deduplicated grant tokens with the verbs each token allows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GrantSet {
    /// Token to allowed verbs.
    grants: BTreeMap<String, BTreeSet<Verb>>,
    /// Whether at least one binding targeted the namespace.
    bound: bool,
}

impl GrantSet {
    /// Builds the grants `groups` hold inside `namespace`.
    #[must_use]
    pub fn build(namespace: &str, groups: &BTreeSet<String>, bindings: &[RoleBinding]) -> Self {
        let mut grants: BTreeMap<String, BTreeSet<Verb>> = BTreeMap::new();
        let mut bound = false;
        let scoped = bindings.iter().filter(|binding| {
            binding.namespace.as_str() == namespace && binding.subject.matches_any_group(groups)
        });
        for binding in scoped {
            bound = true;
            for token in &binding.role.resource_types {
                grants.entry(token.clone()).or_default().extend(binding.role.verbs.iter().copied());
            }
        }
        Self {
            grants,
            bound,
        }
    }

    /// Flattens the tokens `groups` hold in any namespace; used for catalog
    /// visibility only, never for a decision.
    #[must_use]
    pub fn build_unscoped(groups: &BTreeSet<String>, bindings: &[RoleBinding]) -> BTreeSet<String> {
        bindings
            .iter()
            .filter(|binding| binding.subject.matches_any_group(groups))
            .flat_map(|binding| binding.role.resource_types.iter().cloned())
            .collect()
    }

    /// Returns true when no binding targets the namespace.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !self.bound
    }

    /// Returns true when `token` was granted.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.grants.contains_key(token)
    }

    /// Returns the granted tokens.
    #[must_use]
    pub fn tokens(&self) -> BTreeSet<&str> {
        self.grants.keys().map(String::as_str).collect()
    }

    /// Returns true when the request's token is granted and, if `verb` is
    /// given, that token allows it.
    #[must_use]
    pub fn permits(&self, request: &ParsedRequest, verb: Option<Verb>) -> bool {
        self.grants
            .get(&request.grant_token())
            .is_some_and(|verbs| verb.is_none_or(|verb| verbs.contains(&verb)))
    }
}
