// crates/nsgate-core/src/runtime/mod.rs
// ============================================================================
// Module: nsgate Runtime
// Description: Path classification, grant matching, and the decision engine.
// Purpose: Execute authorization decisions against collaborator lookups.
// Dependencies: crate::{audit, core, interfaces}
// ============================================================================

//! ## Overview
//! Runtime modules implement request classification, namespace-scoped grant
//! matching, the authorization engine, the default-deny rule chain, and an
//! in-memory directory for tests. All surfaces must decide through
//! [`AuthorizationEngine`] to keep denial shapes consistent.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod chain;
pub mod engine;
pub mod grants;
pub mod path;
pub mod store;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use chain::RuleChain;
pub use chain::SecurityRule;
pub use engine::AccessRequest;
pub use engine::AuthorizationEngine;
pub use engine::AuthzError;
pub use engine::EngineConfig;
pub use grants::GrantSet;
pub use path::ParsedRequest;
pub use path::classify;
pub use store::DirectoryError;
pub use store::InMemoryDirectory;
