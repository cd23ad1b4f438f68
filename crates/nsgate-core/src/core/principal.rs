// crates/nsgate-core/src/core/principal.rs
// ============================================================================
// Module: Principal and Roles
// Description: Authenticated caller structure and privilege-role derivation.
// Purpose: Replace open attribute bags with an explicit principal record.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A [`Principal`] is produced once per request by an upstream
//! authentication step. Groups are asserted by the identity provider; roles
//! are derived here from the groups and the configured admin group and are
//! never trusted from the caller.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Role sentinel granted to members of the admin group.
pub const IS_ADMIN: &str = "isAdmin()";

// ============================================================================
// SECTION: Types
// ============================================================================

/// Authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Username asserted by the identity provider.
    pub username: String,
    /// Group memberships asserted by the identity provider.
    pub groups: BTreeSet<String>,
    /// Roles derived by [`compute_roles`].
    pub roles: BTreeSet<String>,
}

impl Principal {
    /// Builds a principal, deriving roles from `groups` and `admin_group`.
    #[must_use]
    pub fn new<I, S>(username: impl Into<String>, groups: I, admin_group: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let groups: BTreeSet<String> = groups.into_iter().map(Into::into).collect();
        let roles = compute_roles(&groups, admin_group);
        Self {
            username: username.into(),
            groups,
            roles,
        }
    }

    /// Returns true when the derived roles include [`IS_ADMIN`].
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.roles.contains(IS_ADMIN)
    }
}

// ============================================================================
// SECTION: Role Computation
// ============================================================================

/// Returns `{IS_ADMIN}` iff `admin_group` is one of `groups`, else `{}`.
#[must_use]
pub fn compute_roles(groups: &BTreeSet<String>, admin_group: &str) -> BTreeSet<String> {
    let mut roles = BTreeSet::new();
    if groups.contains(admin_group) {
        roles.insert(IS_ADMIN.to_string());
    }
    roles
}
