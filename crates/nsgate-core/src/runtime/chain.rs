// crates/nsgate-core/src/runtime/chain.rs
// ============================================================================
// Module: Security Rule Chain
// Description: Ordered security rules with a default-deny fallback.
// Purpose: Resolve abstaining rules into a final allow/deny answer.
// Dependencies: crate::{core, runtime::engine}
// ============================================================================

//! ## Overview
//! Rules are consulted in order. The first rule that does not abstain
//! decides; errors stop evaluation. When every rule abstains the chain
//! answers [`Decision::Forbidden`], so an ungranted action inside an
//! accessible namespace is refused with the same shape as any other
//! unauthorized request.

use crate::core::Decision;
use crate::core::Principal;
use crate::interfaces::NamespaceLookup;
use crate::interfaces::RoleBindingLookup;
use crate::runtime::engine::AccessRequest;
use crate::runtime::engine::AuthorizationEngine;
use crate::runtime::engine::AuthzError;

/// Security rule consulted by a [`RuleChain`].
pub trait SecurityRule: Send + Sync {
    /// Decides the request or abstains with [`Decision::Unknown`].
    ///
    /// # Errors
    ///
    /// Returns [`AuthzError`] when the rule raises a denial or a lookup fails.
    fn check(
        &self,
        request: &AccessRequest<'_>,
        principal: Option<&Principal>,
    ) -> Result<Decision, AuthzError>;
}

impl<N, R> SecurityRule for AuthorizationEngine<N, R>
where
    N: NamespaceLookup,
    R: RoleBindingLookup,
{
    fn check(
        &self,
        request: &AccessRequest<'_>,
        principal: Option<&Principal>,
    ) -> Result<Decision, AuthzError> {
        self.check_request(request, principal)
    }
}

/// Ordered rule chain with default deny.
#[derive(Default)]
pub struct RuleChain {
    /// Rules in evaluation order.
    rules: Vec<Box<dyn SecurityRule>>,
}

impl RuleChain {
    /// Creates an empty chain; an empty chain denies everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule.
    #[must_use]
    pub fn with_rule(mut self, rule: impl SecurityRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Resolves the request to [`Decision::Allowed`] or [`Decision::Forbidden`].
    ///
    /// # Errors
    ///
    /// Returns the first [`AuthzError`] raised by a rule.
    pub fn evaluate(
        &self,
        request: &AccessRequest<'_>,
        principal: Option<&Principal>,
    ) -> Result<Decision, AuthzError> {
        for rule in &self.rules {
            match rule.check(request, principal)? {
                Decision::Unknown => {}
                decided => return Ok(decided),
            }
        }
        Ok(Decision::Forbidden)
    }
}
